//! Tag-like substrings and a textual safety heuristic for them.
//!
//! This is not an HTML parser. A tag is unsafe when it is a `script` tag,
//! when an `on*` event-handler attribute carries a value, or when
//! `javascript:` appears in its attributes. Obfuscated payloads (entity
//! encoding, split keywords) are not detected.

use regex::Regex;
use lazy_static::lazy_static;

use super::{no_boundary, scan, Candidate};
use crate::record::HtmlTagRecord;

lazy_static! {
    static ref HTML_TAG_EXTRACTION_PATTERN: Regex = Regex::new(
        r"<\s*/?\s*[a-zA-Z][a-zA-Z0-9-]*(?:\s[^<>]*)?/?>"
    ).unwrap();

    static ref TAG_PARTS: Regex = Regex::new(
        r"(?s)^<\s*/?\s*([a-zA-Z][a-zA-Z0-9-]*)(.*)>$"
    ).unwrap();

    // Closing quotes are optional so an unbalanced value still counts as a value
    static ref ATTRIBUTE: Regex = Regex::new(
        r#"([^\s"'<>/=]+)(?:\s*=\s*("[^"]*"?|'[^']*'?|[^\s"'=<>`]+))?"#
    ).unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagSafety {
    Safe,
    Unsafe,
}

impl TagSafety {
    pub fn is_safe(self) -> bool {
        self == TagSafety::Safe
    }
}

fn is_event_handler(name: &str) -> bool {
    match (name.get(..2), name.get(2..)) {
        (Some(prefix), Some(rest)) => {
            prefix.eq_ignore_ascii_case("on")
                && !rest.is_empty()
                && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches(|c| c == '"' || c == '\'')
}

pub fn classify_tag(tag: &str) -> TagSafety {
    let Some(caps) = TAG_PARTS.captures(tag) else {
        return TagSafety::Safe;
    };
    let name = caps.get(1).map_or("", |m| m.as_str());
    let attributes = caps.get(2).map_or("", |m| m.as_str());

    if name.eq_ignore_ascii_case("script") {
        return TagSafety::Unsafe;
    }
    if attributes.to_ascii_lowercase().contains("javascript:") {
        return TagSafety::Unsafe;
    }

    let has_handler = ATTRIBUTE.captures_iter(attributes).any(|attr| {
        let value = attr.get(2).map_or("", |m| unquote(m.as_str()));
        is_event_handler(&attr[1]) && !value.trim().is_empty()
    });
    if has_handler {
        TagSafety::Unsafe
    } else {
        TagSafety::Safe
    }
}

pub fn candidates(text: &str) -> impl Iterator<Item = Candidate<'_>> {
    scan(&HTML_TAG_EXTRACTION_PATTERN, text, no_boundary)
}

/// Tags are never rejected; every candidate becomes a classified record.
pub fn is_match(value: &str) -> bool {
    candidates(value).any(|c| c.spans_whole(value))
}

pub fn extract_html_tags(text: &str) -> Vec<HtmlTagRecord> {
    candidates(text)
        .map(|c| HtmlTagRecord::new(c.text, classify_tag(c.text)))
        .collect()
}
