//! Cell-level formatting primitives.
//!
//! All of these are fallible per cell: a value that does not parse is left
//! untouched by the caller rather than replaced with an error marker.

use chrono::{NaiveDate, NaiveDateTime};

/// Date layouts accepted on input, tried in order. Output is always
/// `YYYY-MM-DD`.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
    "%m/%d/%Y",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parses a raw date string in any accepted layout and renders it as
/// `YYYY-MM-DD`. Returns `None` when no layout matches.
pub fn format_date(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for layout in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, layout) {
            return Some(date.format("%Y-%m-%d").to_string());
        }
    }
    for layout in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, layout) {
            return Some(datetime.date().format("%Y-%m-%d").to_string());
        }
    }
    None
}

/// Extracts a numeric value from a raw cell, ignoring currency symbols,
/// grouping separators, and surrounding text.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.' || *ch == '-')
        .collect();
    if stripped.is_empty() || stripped == "-" || stripped == "." {
        return None;
    }
    stripped.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Renders a numeric value with thousand separators, keeping up to two
/// decimal places and trimming trailing zeros.
pub fn format_grouped(value: f64) -> String {
    // Round to two decimals up front so a carry propagates into the
    // integral part instead of leaving a stray fraction.
    let value = (value * 100.0).round() / 100.0;
    let negative = value < 0.0;
    let magnitude = value.abs();
    let integral = magnitude.trunc();
    let fraction = magnitude - integral;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_digits(&format!("{integral:.0}")));

    if fraction > 0.0 {
        let rendered = format!("{fraction:.2}");
        let decimals = rendered.trim_start_matches("0.").trim_end_matches('0');
        if !decimals.is_empty() {
            out.push('.');
            out.push_str(decimals);
        }
    }
    out
}

/// Renders a numeric value as an EGP currency amount.
pub fn format_currency(value: f64) -> String {
    format!("EGP {}", format_grouped(value))
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Capitalizes the first letter of every word, lowercasing the rest.
/// Separators (whitespace, punctuation) are preserved as-is.
pub fn capitalize_words(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut at_word_start = true;
    for ch in value.chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}
