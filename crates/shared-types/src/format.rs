//! Display formatting shared by the dashboards.

use chrono::{DateTime, NaiveDate};

/// Format an ISO date or datetime as `M/D/YYYY`, the en-US short form.
///
/// Accepts `2012-04-09`, `2012-04-09T00:00:00.000Z` and full RFC 3339
/// strings. Anything else is returned unchanged.
pub fn format_locale_date(date_str: &str) -> String {
    let trimmed = date_str.trim();
    let date = DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| {
            trimmed
                .get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
        });
    match date {
        Some(d) => d.format("%-m/%-d/%Y").to_string(),
        None => trimmed.to_string(),
    }
}

/// Render an amount without a trailing `.0` for whole numbers.
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        format!("{amount}")
    }
}
