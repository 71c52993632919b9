//! Formatting helpers for the banner info section.

use chrono::NaiveDate;

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), WIRE_DATE_FORMAT).ok()
}

/// `"2024-03-01"` -> `"01 Mar 2024"`. `None` when the input is not a
/// `yyyy-MM-dd` date.
pub fn display_date(raw: &str) -> Option<String> {
    parse_wire_date(raw).map(|date| date.format("%d %b %Y").to_string())
}

/// `"2024-03-01"` -> `"2024"`.
pub fn display_year(raw: &str) -> Option<String> {
    parse_wire_date(raw).map(|date| date.format("%Y").to_string())
}

/// Beyond this many decimal digits an `f64` has nothing left to round.
const MAX_ROUNDING_PLACES: i32 = 15;

/// Round half away from zero to `places` decimal digits. Values are returned
/// unchanged when `places` exceeds `f64` precision.
pub fn round_to_places(value: f64, places: u32) -> f64 {
    match i32::try_from(places) {
        Ok(exp) if exp <= MAX_ROUNDING_PLACES => {
            let multiplier = 10f64.powi(exp);
            (value * multiplier).round() / multiplier
        }
        _ => value,
    }
}
