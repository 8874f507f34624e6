use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::ExtractorError;
use crate::patterns::{card, currency, email, hashtag, html, phonenumber, time, url, DataType};
use crate::record::ExtractionResult;

/// Which lanes an [`Extractor`] runs. Defaults to every lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub lanes: BTreeSet<DataType>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        ExtractOptions {
            lanes: DataType::ALL.into_iter().collect(),
        }
    }
}

impl ExtractOptions {
    /// Builds options from comma-separated category lists, as given on the
    /// command line. `include` narrows the lanes, `exclude` removes from them.
    pub fn from_filters(include: Option<&str>, exclude: Option<&str>) -> Result<Self, ExtractorError> {
        let mut lanes: BTreeSet<DataType> = match include {
            Some(list) => parse_lane_list(list)?.into_iter().collect(),
            None => DataType::ALL.into_iter().collect(),
        };
        if let Some(list) = exclude {
            for lane in parse_lane_list(list)? {
                lanes.remove(&lane);
            }
        }
        Ok(ExtractOptions { lanes })
    }

    pub fn is_enabled(&self, lane: DataType) -> bool {
        self.lanes.contains(&lane)
    }
}

fn parse_lane_list(list: &str) -> Result<Vec<DataType>, ExtractorError> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::parse)
        .collect()
}

/// Runs one lane over `text`; the returned result has only that lane filled.
pub fn run_lane(lane: DataType, text: &str) -> ExtractionResult {
    let mut result = ExtractionResult::default();
    match lane {
        DataType::Email => result.emails = email::extract_emails(text),
        DataType::Url => result.urls = url::extract_urls(text),
        DataType::PhoneNumber => result.phones = phonenumber::extract_phonenumbers(text),
        DataType::CardNumber => result.credit_cards = card::extract_cards(text),
        DataType::Time => result.times = time::extract_times(text),
        DataType::Currency => result.currency = currency::extract_amounts(text),
        DataType::Hashtag => result.hashtags = hashtag::extract_hashtags(text),
        DataType::HtmlTag => result.html_tags = html::extract_html_tags(text),
    }
    debug!("{} lane: {} record(s)", lane, result.lane_len(lane));
    result
}

#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExtractOptions) -> Self {
        Extractor { options }
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        let mut result = ExtractionResult::default();
        for lane in &self.options.lanes {
            result.absorb(run_lane(*lane, text));
        }
        debug!("extracted {} record(s) from {} bytes", result.len(), text.len());
        result
    }

    /// Same result as [`Extractor::extract`], with lanes spread over the rayon pool.
    pub fn extract_parallel(&self, text: &str) -> ExtractionResult {
        let lanes: Vec<DataType> = self.options.lanes.iter().copied().collect();
        let result = lanes
            .par_iter()
            .map(|lane| run_lane(*lane, text))
            .reduce(ExtractionResult::default, |mut acc, lane_result| {
                acc.absorb(lane_result);
                acc
            });
        debug!("extracted {} record(s) from {} bytes in parallel", result.len(), text.len());
        result
    }

    pub fn extract_file(&self, path: impl AsRef<Path>) -> Result<ExtractionResult, ExtractorError> {
        let text = fs::read_to_string(path.as_ref())?;
        Ok(self.extract(&text))
    }
}

/// Extracts every lane from `text`.
pub fn extract(text: &str) -> ExtractionResult {
    Extractor::new().extract(text)
}

pub fn extract_parallel(text: &str) -> ExtractionResult {
    Extractor::new().extract_parallel(text)
}
