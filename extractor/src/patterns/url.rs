use regex::Regex;
use lazy_static::lazy_static;

use super::{accepted, scan, Candidate, DataType};
use crate::record::UrlRecord;

lazy_static! {
    // Only http and https can match; other schemes never become candidates
    static ref URL_EXTRACTION_PATTERN: Regex = Regex::new(
        r#"(?i)\bhttps?://[^\s<>"]+\b"#
    ).unwrap();
}

fn url_boundary(text: &str, candidate: &Candidate<'_>) -> bool {
    // `javascript:http://...` and `x-http://...` style nesting
    !candidate.preceding_char(text).is_some_and(|c| matches!(c, ':' | '/' | '-' | '.'))
}

pub fn candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    scan(&URL_EXTRACTION_PATTERN, text, url_boundary)
}

/// Returns the URL with its scheme lowercased.
pub fn validate(candidate: &str) -> Option<String> {
    let (scheme, rest) = candidate.split_once("://")?;
    let scheme = scheme.to_ascii_lowercase();
    if scheme != "http" && scheme != "https" {
        return None;
    }
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    if !host.chars().any(|c| c.is_alphanumeric()) {
        return None;
    }
    Some(format!("{}://{}", scheme, rest))
}

pub fn is_match(value: &str) -> bool {
    candidates(value).any(|c| c.spans_whole(value) && validate(c.text).is_some())
}

pub fn extract_urls(text: &str) -> Vec<UrlRecord> {
    candidates(text)
        .filter_map(|c| accepted(DataType::Url, &c, validate(c.text)))
        .map(|value| UrlRecord { value })
        .collect()
}
