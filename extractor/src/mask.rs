//! Irreversible redaction of sensitive values before they leave the extractor.
//!
//! Emails keep the first character of the local part followed by a fixed
//! `***` and the full domain, so the local-part length is not revealed.
//! Card numbers keep only their last four digits; grouping separators are
//! dropped.

use std::fmt;

pub const MASK_CHAR: char = '*';

const EMAIL_LOCAL_MASK: &str = "***";
const CARD_VISIBLE_DIGITS: usize = 4;

pub fn mask_email(address: &str) -> String {
    match address.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{first}{EMAIL_LOCAL_MASK}@{domain}"),
            None => format!("{EMAIL_LOCAL_MASK}@{domain}"),
        },
        None => EMAIL_LOCAL_MASK.to_string(),
    }
}

pub fn mask_card(digits: &str) -> String {
    let hidden = digits.chars().count().saturating_sub(CARD_VISIBLE_DIGITS);
    digits
        .chars()
        .enumerate()
        .map(|(i, c)| if i < hidden { MASK_CHAR } else { c })
        .collect()
}

/// Placeholder for log lines that would otherwise carry matched text.
pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

/// Holds a canonical value that must never be printed or serialized.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Sensitive(value)
    }

    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}
