use regex::Regex;
use lazy_static::lazy_static;

use super::{accepted, scan, Candidate, DataType};
use crate::record::HashtagRecord;

lazy_static! {
    static ref HASHTAG_EXTRACTION_PATTERN: Regex = Regex::new(
        r"#[A-Za-z0-9_]+"
    ).unwrap();
}

fn hashtag_boundary(text: &str, candidate: &Candidate<'_>) -> bool {
    // page#anchor and &#x27; entities are not hashtags
    !candidate.preceding_char(text).is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '&')
        && !candidate.following_char(text).is_some_and(|c| c.is_alphanumeric())
}

pub fn candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    scan(&HASHTAG_EXTRACTION_PATTERN, text, hashtag_boundary)
}

/// Returns the tag without its leading `#`, case preserved.
pub fn validate(candidate: &str) -> Option<String> {
    let tag = candidate.strip_prefix('#')?;
    let first = tag.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    Some(tag.to_string())
}

pub fn is_match(value: &str) -> bool {
    candidates(value).any(|c| c.spans_whole(value) && validate(c.text).is_some())
}

pub fn extract_hashtags(text: &str) -> Vec<HashtagRecord> {
    candidates(text)
        .filter_map(|c| accepted(DataType::Hashtag, &c, validate(c.text)))
        .map(|tag| HashtagRecord { tag })
        .collect()
}
