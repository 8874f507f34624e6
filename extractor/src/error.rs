//! Errors raised by the wrappers around the extraction core.
//!
//! Extraction itself never fails: malformed candidates are dropped. These
//! variants cover lane selection, file input and JSON output.

use thiserror::Error;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractorError {
    #[error("Unknown category '{0}'")]
    UnknownLane(String),

    #[error("An I/O error occurred: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize extraction result: {0}")]
    Serialization(#[from] serde_json::Error),
}
