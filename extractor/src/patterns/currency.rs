use regex::Regex;
use lazy_static::lazy_static;

use super::{accepted, scan, Candidate, DataType};
use crate::record::CurrencyRecord;

lazy_static! {
    // $19.99, $1,234.56, $12, $ 0.99 ; fraction length is checked by `validate`
    static ref CURRENCY_EXTRACTION_PATTERN: Regex = Regex::new(
        r"\$ ?\d+(?:,\d+)*(?:\.\d+)?"
    ).unwrap();

    static ref WHOLE_UNITS: Regex = Regex::new(
        r"^(?:\d+|\d{1,3}(?:,\d{3})+)$"
    ).unwrap();
}

fn currency_boundary(text: &str, candidate: &Candidate<'_>) -> bool {
    !candidate.following_char(text).is_some_and(|c| c.is_alphanumeric() || c == '_')
}

pub fn candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    scan(&CURRENCY_EXTRACTION_PATTERN, text, currency_boundary)
}

/// Parses a dollar amount into integer cents.
pub fn validate(candidate: &str) -> Option<u64> {
    let body = candidate.strip_prefix('$')?.trim_start();
    let (whole, fraction) = match body.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (body, None),
    };
    if !WHOLE_UNITS.is_match(whole) {
        return None;
    }
    let units: u64 = whole.replace(',', "").parse().ok()?;
    let cents: u64 = match fraction {
        None => 0,
        Some(f) if f.len() == 2 && f.chars().all(|c| c.is_ascii_digit()) => f.parse().ok()?,
        Some(_) => return None,
    };
    units.checked_mul(100)?.checked_add(cents)
}

pub fn is_match(value: &str) -> bool {
    candidates(value).any(|c| c.spans_whole(value) && validate(c.text).is_some())
}

pub fn extract_amounts(text: &str) -> Vec<CurrencyRecord> {
    candidates(text)
        .filter_map(|c| {
            accepted(DataType::Currency, &c, validate(c.text))
                .map(|cents| CurrencyRecord::new(c.text, cents))
        })
        .collect()
}
