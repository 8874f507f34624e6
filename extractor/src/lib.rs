pub mod error;
pub mod logger;
pub mod mask;
pub mod mcp_server;
pub mod patterns;
pub mod pipeline;
pub mod record;
pub mod stats;

pub use error::ExtractorError;
pub use patterns::{Candidate, DataType};
pub use pipeline::{extract, extract_parallel, ExtractOptions, Extractor};
pub use record::{ExtractedRecord, ExtractionResult};

/// Returns every category for which the whole of `value` is one accepted record.
pub fn classify(value: &str) -> Vec<DataType> {
    if value.is_empty() {
        return vec![];
    }

    DataType::ALL
        .into_iter()
        .filter(|lane| lane.is_match(value))
        .collect()
}
