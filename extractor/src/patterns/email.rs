use regex::Regex;
use lazy_static::lazy_static;

use super::{accepted, scan, Candidate, DataType};
use crate::record::EmailRecord;

lazy_static! {
    // Domain labels must start alphanumeric, so `@-x.com` and `@@x.com` never match
    static ref EMAIL_EXTRACTION_PATTERN: Regex = Regex::new(
        r"[a-zA-Z0-9._+-]{1,64}@(?:[a-zA-Z0-9][a-zA-Z0-9-]*\.)+[a-zA-Z]{2,24}\b"
    ).unwrap();
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '+' | '-')
}

fn email_boundary(text: &str, candidate: &Candidate<'_>) -> bool {
    !candidate.preceding_char(text).is_some_and(|c| c == '@' || is_local_char(c))
        && candidate.following_char(text) != Some('@')
}

pub fn candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    scan(&EMAIL_EXTRACTION_PATTERN, text, email_boundary)
}

/// Returns the canonical address, with the domain lowercased.
pub fn validate(candidate: &str) -> Option<String> {
    if candidate.matches('@').count() != 1 {
        return None;
    }
    let (local, domain) = candidate.split_once('@')?;
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return None;
    }
    if domain.split('.').any(|label| label.is_empty() || label.starts_with('-') || label.ends_with('-')) {
        return None;
    }
    Some(format!("{}@{}", local, domain.to_ascii_lowercase()))
}

pub fn is_match(value: &str) -> bool {
    candidates(value).any(|c| c.spans_whole(value) && validate(c.text).is_some())
}

pub fn extract_emails(text: &str) -> Vec<EmailRecord> {
    candidates(text)
        .filter_map(|c| accepted(DataType::Email, &c, validate(c.text)))
        .map(EmailRecord::new)
        .collect()
}
