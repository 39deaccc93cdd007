use std::sync::LazyLock;

use chrono::DateTime;
use chrono_tz::Tz;
use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::{
    dates::{days_after, display_date, iso_date},
    sailing::{Route, Sailing},
    text_manipulators::{contains_sailing_data, extract_text, find_time},
};

static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".mobile-friendly-row").expect("valid selector"));
static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".mobile-paragraph").expect("valid selector"));
static FERRY_NAME_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".sailing-ferry-name").expect("valid selector"));
static PERCENT_FULL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".cc-vessel-percent-full").expect("valid selector"));

/// Parses a "current conditions" page, which lists upcoming sailings along
/// with how full each vessel is.
///
/// `now` is the reference time in Vancouver; the page shows a rolling window
/// of today, tomorrow and the day after, and dates are resolved against it.
pub fn scrape_capacity_route(document: &Html, now: &DateTime<Tz>) -> Route {
    let mut route = Route::new();

    for row in document.select(&ROW_SELECTOR) {
        if !contains_sailing_data(&extract_text(row)) {
            continue;
        }

        let time_and_vessel = first_text(row, &PARAGRAPH_SELECTOR);
        let mut sailing = Sailing {
            departure_date: resolve_departure_date(&time_and_vessel, now),
            vessel_name: first_text(row, &FERRY_NAME_SELECTOR).trim().to_string(),
            ..Default::default()
        };

        // Later lines overwrite earlier ones.
        for line in time_and_vessel.split('\n') {
            let time = find_time(line.trim());
            if !time.is_empty() {
                sailing.departure_time = time;
            }
        }

        let fill_text = first_text(row, &PERCENT_FULL_SELECTOR);
        let (fill, is_cancelled) = parse_fill(fill_text.trim());
        sailing.fill = fill;
        sailing.is_cancelled = is_cancelled;

        route.sailings.push(sailing);
    }

    route
}

fn first_text(row: ElementRef, selector: &Selector) -> String {
    row.select(selector)
        .next()
        .map(extract_text)
        .unwrap_or_default()
}

fn resolve_departure_date(time_and_vessel: &str, now: &DateTime<Tz>) -> String {
    let day_after_tomorrow = days_after(now, 2);
    let offset = if time_and_vessel.contains("Tomorrow") {
        1
    } else if time_and_vessel.contains(&display_date(day_after_tomorrow)) {
        2
    } else {
        0
    };
    iso_date(days_after(now, offset))
}

/// Turns the page's "% empty" figure into (percent full, cancelled).
fn parse_fill(fill_text: &str) -> (i32, bool) {
    if fill_text == "FULL" || fill_text == "Full" {
        return (100, false);
    }
    if fill_text.contains("Cancelled") {
        return (0, true);
    }

    let percent_empty = fill_text.split('%').next().unwrap_or_default();
    let fill = match percent_empty.parse::<i32>() {
        Ok(percent_empty) => 100i32.checked_sub(percent_empty),
        Err(e) => {
            debug!("Could not read fill from {fill_text:?}: {e}");
            return (0, false);
        }
    };
    match fill {
        Some(fill) => (fill, false),
        None => {
            debug!("Fill out of range in {fill_text:?}");
            (0, false)
        }
    }
}
