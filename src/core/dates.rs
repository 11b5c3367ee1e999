use chrono::{Local, NaiveDate};

/// Server-local calendar date as a zero-padded `YYYY-MM-DD` string.
///
/// "Today" for the dashboard and for defaulted settings dates is always the
/// server's local timezone.
pub fn today_local() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Checks that `value` is a real calendar date in canonical `YYYY-MM-DD` form.
///
/// Monthly and annual reports filter trips with a string-prefix match, so
/// every stored date must stay canonical or those filters silently drop rows.
pub fn is_canonical_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.format("%Y-%m-%d").to_string() == value)
        .unwrap_or(false)
}

/// Zero-padded `YYYY-MM` prefix used by the monthly report filter.
pub fn month_prefix(year: i32, month: u32) -> String {
    format!("{year:04}-{month:02}")
}

/// Zero-padded `YYYY` prefix used by the annual report filter.
pub fn year_prefix(year: i32) -> String {
    format!("{year:04}")
}
