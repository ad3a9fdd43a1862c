use serde::Deserialize;

use crate::CatalogError;

/// One page of the remote catalog listing. Fields beyond `results` (count,
/// next/previous cursors) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<CatalogEntry>,
}

/// A single catalog entry. The entry's sequence number is encoded as the
/// trailing path segment of `url`.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub url: String,
}

/// Derives the sequence number from the trailing numeric path segment of an
/// entry URL (`.../pokemon/25/` → 25).
pub fn entry_no(url: &str) -> Result<i32, CatalogError> {
    url.rsplit('/')
        .find(|segment| !segment.is_empty())
        .and_then(|segment| segment.parse().ok())
        .filter(|no| *no > 0)
        .ok_or_else(|| CatalogError::MalformedEntry(url.to_owned()))
}
