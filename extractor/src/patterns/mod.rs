pub mod card;
pub mod currency;
pub mod email;
pub mod hashtag;
pub mod html;
pub mod phonenumber;
pub mod time;
pub mod url;

use std::fmt;
use std::str::FromStr;

use log::trace;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ExtractorError;

/// The closed set of record types the extractor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Email,
    Url,
    PhoneNumber,
    CardNumber,
    Time,
    Currency,
    Hashtag,
    HtmlTag,
}

impl DataType {
    pub const ALL: [DataType; 8] = [
        DataType::Email,
        DataType::Url,
        DataType::PhoneNumber,
        DataType::CardNumber,
        DataType::Time,
        DataType::Currency,
        DataType::Hashtag,
        DataType::HtmlTag,
    ];

    /// Short name used on the command line and in logs.
    pub fn name(self) -> &'static str {
        match self {
            DataType::Email => "email",
            DataType::Url => "url",
            DataType::PhoneNumber => "phonenumber",
            DataType::CardNumber => "card",
            DataType::Time => "time",
            DataType::Currency => "currency",
            DataType::Hashtag => "hashtag",
            DataType::HtmlTag => "html",
        }
    }

    /// Key of this lane in the serialized result.
    pub fn result_key(self) -> &'static str {
        match self {
            DataType::Email => "emails",
            DataType::Url => "urls",
            DataType::PhoneNumber => "phones",
            DataType::CardNumber => "credit_cards",
            DataType::Time => "times",
            DataType::Currency => "currency",
            DataType::Hashtag => "hashtags",
            DataType::HtmlTag => "html_tags",
        }
    }

    /// True when the whole of `value` is one accepted record of this type.
    pub fn is_match(self, value: &str) -> bool {
        match self {
            DataType::Email => email::is_match(value),
            DataType::Url => url::is_match(value),
            DataType::PhoneNumber => phonenumber::is_match(value),
            DataType::CardNumber => card::is_match(value),
            DataType::Time => time::is_match(value),
            DataType::Currency => currency::is_match(value),
            DataType::Hashtag => hashtag::is_match(value),
            DataType::HtmlTag => html::is_match(value),
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = ExtractorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" | "emails" => Ok(DataType::Email),
            "url" | "urls" => Ok(DataType::Url),
            "phone" | "phones" | "phonenumber" => Ok(DataType::PhoneNumber),
            "card" | "cards" | "credit_card" | "credit_cards" => Ok(DataType::CardNumber),
            "time" | "times" => Ok(DataType::Time),
            "currency" => Ok(DataType::Currency),
            "hashtag" | "hashtags" => Ok(DataType::Hashtag),
            "html" | "html_tag" | "html_tags" => Ok(DataType::HtmlTag),
            _ => Err(ExtractorError::UnknownLane(s.trim().to_string())),
        }
    }
}

/// A substring that has the shape of some type but has not been validated yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'t> {
    pub text: &'t str,
    pub start: usize,
    pub end: usize,
}

impl<'t> Candidate<'t> {
    pub fn preceding_char(&self, haystack: &str) -> Option<char> {
        haystack[..self.start].chars().next_back()
    }

    pub fn following_char(&self, haystack: &str) -> Option<char> {
        haystack[self.end..].chars().next()
    }

    pub fn spans_whole(&self, haystack: &str) -> bool {
        self.start == 0 && self.end == haystack.len()
    }
}

impl<'t> From<regex::Match<'t>> for Candidate<'t> {
    fn from(m: regex::Match<'t>) -> Self {
        Candidate {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        }
    }
}

/// Leftmost-first, non-overlapping scan of `text`. Spans rejected by
/// `boundary` are skipped and scanning resumes after them.
pub(crate) fn scan<'t>(
    pattern: &'static Regex,
    text: &'t str,
    boundary: fn(&str, &Candidate<'_>) -> bool,
) -> impl Iterator<Item = Candidate<'t>> + 't {
    pattern
        .find_iter(text)
        .map(Candidate::from)
        .filter(move |candidate| boundary(text, candidate))
}

pub(crate) fn no_boundary(_: &str, _: &Candidate<'_>) -> bool {
    true
}

pub(crate) fn not_digit_adjacent(text: &str, candidate: &Candidate<'_>) -> bool {
    !candidate.preceding_char(text).is_some_and(|c| c.is_ascii_digit())
        && !candidate.following_char(text).is_some_and(|c| c.is_ascii_digit())
}

/// Passes a validator verdict through, tracing rejections by span only.
pub(crate) fn accepted<T>(lane: DataType, candidate: &Candidate<'_>, verdict: Option<T>) -> Option<T> {
    if verdict.is_none() {
        trace!("{} candidate at {}..{} rejected", lane, candidate.start, candidate.end);
    }
    verdict
}
