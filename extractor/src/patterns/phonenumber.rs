use regex::Regex;
use lazy_static::lazy_static;

use super::{accepted, not_digit_adjacent, scan, Candidate, DataType};
use crate::record::PhoneRecord;

lazy_static! {
    // (123) 456-7890, 123-456-7890, 123.456.7890, +1 415 555 0199
    static ref PHONE_EXTRACTION_PATTERN: Regex = Regex::new(
        r"(?:\+?1[ .-]?)?(?:\(\d{3}\) ?|\d{3}[ .-])\d{3}[ .-]\d{4}"
    ).unwrap();
}

pub fn candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    scan(&PHONE_EXTRACTION_PATTERN, text, not_digit_adjacent)
}

/// Returns the digits-only form: 10 digits, or 11 with a leading country code `1`.
pub fn validate(candidate: &str) -> Option<String> {
    let digits: String = candidate.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        10 => Some(digits),
        11 if digits.starts_with('1') => Some(digits),
        _ => None,
    }
}

pub fn is_match(value: &str) -> bool {
    candidates(value).any(|c| c.spans_whole(value) && validate(c.text).is_some())
}

pub fn extract_phonenumbers(text: &str) -> Vec<PhoneRecord> {
    candidates(text)
        .filter_map(|c| {
            accepted(DataType::PhoneNumber, &c, validate(c.text))
                .and_then(|digits| PhoneRecord::new(c.text, digits))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_phone_numbers() {
        let valid_phones = vec![
            "123-456-7890",
            "(123) 456-7890",
            "(123)456-7890",
            "123.456.7890",
            "+1 415 555 0199",
            "1-800-555-0199",
        ];

        for phone in valid_phones {
            assert!(is_match(phone), "Should match: {}", phone);
        }
    }

    #[test]
    fn test_invalid_phone_numbers() {
        let invalid_phones = vec![
            "123-45-678",
            "1234",
            "abcd",
            "1234567890",
            "8.8.8.8",
            "192.168.1.1",
            "12-456-7890",
            "123-456-78901",
        ];

        for phone in invalid_phones {
            assert!(!is_match(phone), "Should not match: {}", phone);
        }
    }

    #[test]
    fn test_extract_normalizes_digits() {
        let phones = extract_phonenumbers("Call (415) 555-0199 or +1 415 555 0100.");
        assert_eq!(phones.len(), 2);
        assert_eq!(phones[0].digits, "4155550199");
        assert_eq!(phones[0].raw, "(415) 555-0199");
        assert_eq!(phones[1].digits, "14155550100");
        assert_eq!(phones[1].display, "+1 (415) 555-0100");
    }

    #[test]
    fn test_digit_adjacent_runs_are_skipped() {
        assert!(extract_phonenumbers("order 9123-456-78901").is_empty());
    }

    #[test]
    fn test_validate_requires_country_code_one() {
        assert_eq!(validate("415-555-0199").as_deref(), Some("4155550199"));
        assert_eq!(validate("+1 415 555 0199").as_deref(), Some("14155550199"));
        assert!(validate("+2 415 555 0199").is_none());
        assert!(validate("55-0199").is_none());
    }
}
