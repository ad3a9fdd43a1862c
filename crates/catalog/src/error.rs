//! Typed error enum for the catalog crate.

use thiserror::Error;

/// Errors from remote catalog operations. All of these mean the upstream
/// catalog is unreachable or returned malformed data; none are retried here.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("catalog returned HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("catalog parse error in {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("catalog entry URL has no trailing numeric segment: {0}")]
    MalformedEntry(String),
}
