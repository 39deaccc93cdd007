use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::{America::Vancouver, Tz};

/// Current wall-clock time at the terminals.
pub fn vancouver_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&Vancouver)
}

/// Calendar day `days` after the local date of `now`.
pub fn days_after(now: &DateTime<Tz>, days: u64) -> NaiveDate {
    let today = now.date_naive();
    today.checked_add_days(Days::new(days)).unwrap_or(today)
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// The long form used on the conditions page, e.g. `Oct 21, 2026`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}
