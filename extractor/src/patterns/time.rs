use chrono::NaiveTime;
use regex::Regex;
use lazy_static::lazy_static;

use super::{accepted, no_boundary, scan, Candidate, DataType};
use crate::record::TimeRecord;

lazy_static! {
    // Shape only; hour and minute ranges are checked by `validate`
    static ref TIME_EXTRACTION_PATTERN: Regex = Regex::new(
        r"\b\d{1,2}:\d{2}(?: ?[AaPp][Mm])?\b"
    ).unwrap();

    static ref TIME_PARTS: Regex = Regex::new(
        r"^(\d{1,2}):(\d{2})(?: ?([AaPp])[Mm])?$"
    ).unwrap();
}

pub fn candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    scan(&TIME_EXTRACTION_PATTERN, text, no_boundary)
}

/// Normalizes a 24-hour `HH:MM` or 12-hour `H:MM AM` candidate to a 24-hour time.
pub fn validate(candidate: &str) -> Option<NaiveTime> {
    let caps = TIME_PARTS.captures(candidate)?;
    let hour_text = caps.get(1)?.as_str();
    let hour: u32 = hour_text.parse().ok()?;
    let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
    if minute > 59 {
        return None;
    }

    let hour = match caps.get(3) {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return None;
            }
            let pm = meridiem.as_str().eq_ignore_ascii_case("p");
            match (hour, pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, false) => h,
                (h, true) => h + 12,
            }
        }
        None => {
            if hour_text.len() != 2 || hour > 23 {
                return None;
            }
            hour
        }
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
}

pub fn is_match(value: &str) -> bool {
    candidates(value).any(|c| c.spans_whole(value) && validate(c.text).is_some())
}

pub fn extract_times(text: &str) -> Vec<TimeRecord> {
    candidates(text)
        .filter_map(|c| {
            accepted(DataType::Time, &c, validate(c.text)).map(|value| TimeRecord {
                raw: c.text.to_string(),
                value,
            })
        })
        .collect()
}
