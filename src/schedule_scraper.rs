use std::sync::LazyLock;

use chrono::DateTime;
use chrono_tz::Tz;
use scraper::{Html, Selector};

use crate::{
    dates::iso_date,
    sailing::{Route, Sailing},
    text_manipulators::{extract_text, find_time},
};

static TABLE_BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("#seasonalSchedulesForm .table-seasonal-schedule tbody")
        .expect("valid selector")
});
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".schedule-table-row").expect("valid selector"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));

const DEPARTURE_CELL: usize = 1;
const ARRIVAL_CELL: usize = 2;

/// Parses a seasonal timetable page. These routes publish no live
/// conditions, so every sailing is dated today and only carries its
/// departure and arrival times.
pub fn scrape_non_capacity_route(document: &Html, now: &DateTime<Tz>) -> Route {
    let mut route = Route::new();
    let today = iso_date(now.date_naive());

    let Some(table_body) = document.select(&TABLE_BODY_SELECTOR).next() else {
        return route;
    };

    for row in table_body.select(&ROW_SELECTOR) {
        let mut sailing = Sailing {
            departure_date: today.clone(),
            ..Default::default()
        };

        for (index, cell) in row.select(&CELL_SELECTOR).enumerate() {
            match index {
                DEPARTURE_CELL => sailing.departure_time = find_time(extract_text(cell).trim()),
                ARRIVAL_CELL => sailing.arrival_time = find_time(extract_text(cell).trim()),
                _ => {}
            }
        }

        route.sailings.push(sailing);
    }

    route
}
