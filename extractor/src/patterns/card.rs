use regex::Regex;
use lazy_static::lazy_static;

use super::{accepted, not_digit_adjacent, scan, Candidate, DataType};
use crate::record::CardRecord;

const MIN_CARD_DIGITS: usize = 13;
const MAX_CARD_DIGITS: usize = 19;

lazy_static! {
    // Contiguous 13-19 digits, or 4-digit blocks split by single spaces or hyphens,
    // optionally closed by one short block
    static ref CARD_EXTRACTION_PATTERN: Regex = Regex::new(
        r"\d{13,19}|\d{4}(?:[ -]\d{4}){2,3}(?:[ -]\d{1,3}\b)?"
    ).unwrap();
}

pub fn candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    scan(&CARD_EXTRACTION_PATTERN, text, not_digit_adjacent)
}

/// Validates a digit string with the Luhn (mod 10) checksum.
///
/// Every second digit from the right is doubled, 9 is subtracted from doubled
/// values above 9, and the number is valid when the total is a multiple of 10.
pub fn is_valid_luhn(num_str: &str) -> bool {
    let mut sum = 0;
    let mut alternate = false;

    for c in num_str.chars().rev() {
        let Some(mut digit) = c.to_digit(10) else { return false; };

        if alternate {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        alternate = !alternate;
    }

    sum % 10 == 0
}

/// Strips separators and returns the digit string when it is a plausible card number.
pub fn validate(candidate: &str) -> Option<String> {
    let digits: String = candidate.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
        return None;
    }
    is_valid_luhn(&digits).then_some(digits)
}

/// The grouped candidate without its trailing short block, if it has one.
fn without_short_block(candidate: &str) -> Option<&str> {
    let split = candidate.rfind(|c| c == ' ' || c == '-')?;
    (candidate.len() - split - 1 < 4).then(|| &candidate[..split])
}

/// Falls back to the 4-digit blocks alone when a trailing short block fails validation.
fn validate_grouped(candidate: &str) -> Option<String> {
    validate(candidate).or_else(|| without_short_block(candidate).and_then(validate))
}

pub fn is_match(value: &str) -> bool {
    candidates(value).any(|c| c.spans_whole(value) && validate(c.text).is_some())
}

pub fn extract_cards(text: &str) -> Vec<CardRecord> {
    candidates(text)
        .filter_map(|c| accepted(DataType::CardNumber, &c, validate_grouped(c.text)))
        .map(CardRecord::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cards() {
        let valid_cards = vec![
            "4111111111111111",
            "4111 1111 1111 1111",
            "5555-5555-5555-4444",
            "378282246310005",
            "6011111111111117",
            "4222222222222",
            "4222 2222 2222 2",
        ];

        for card in valid_cards {
            assert!(is_match(card), "Card should be valid: {}", card);
        }
    }

    #[test]
    fn test_invalid_cards() {
        let invalid_cards = vec![
            "4111111111111112",
            "4111 1111 1111 1112",
            "411111111111",
            "41111111111111111111",
            "4111  1111 1111 1111",
            "4111-1111 1111-111a",
        ];

        for card in invalid_cards {
            assert!(!is_match(card), "Card should be invalid: {}", card);
        }
    }

    #[test]
    fn test_luhn() {
        assert!(is_valid_luhn("79927398713"));
        assert!(!is_valid_luhn("79927398710"));
        assert!(!is_valid_luhn("7992a398713"));
    }

    #[test]
    fn test_extract_cards_masks_all_but_last_four() {
        let cards = extract_cards("Paid with 4111-1111-1111-1111, refund to 4111 1111 1111 1112.");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].masked, "************1111");
        assert_eq!(cards[0].last4, "1111");
        assert_eq!(cards[0].digits.expose(), "4111111111111111");
    }

    #[test]
    fn test_trailing_number_does_not_swallow_card() {
        let cards = extract_cards("cards 4111 1111 1111 1111 12 times");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].last4, "1111");
        assert_eq!(cards[0].digits.expose(), "4111111111111111");

        let cards = extract_cards("4111-1111-1111-1111 2 items");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].last4, "1111");
    }

    #[test]
    fn test_valid_short_block_is_kept() {
        let cards = extract_cards("card 4222 2222 2222 2 on file");
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].digits.expose(), "4222222222222");
    }

    #[test]
    fn test_long_digit_runs_are_not_cards() {
        assert!(extract_cards("id 411111111111111100001").is_empty());
    }
}
