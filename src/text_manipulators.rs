use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;

// Hours 1-12 (the leading 1 is optional), minutes 00-59, either meridiem case.
static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"1?[0-9]:[0-5][0-9] (am|pm|AM|PM)").expect("valid time regex"));

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

/// Returns the first clock time like `9:30 am` found in `text`, or an empty
/// string when there is none.
pub fn find_time(text: &str) -> String {
    TIME_REGEX
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Real sailing rows always carry a fill percentage or a full/cancelled
/// marker; headers and spacers don't. Matching is case sensitive, so a bare
/// lowercase "full" does not count.
pub fn contains_sailing_data(text: &str) -> bool {
    ["%", "FULL", "Cancelled", "Full"]
        .iter()
        .any(|marker| text.contains(marker))
}
