use async_trait::async_trait;

use crate::error::CatalogError;
use crate::types::CatalogPage;

/// Timeout applied to every catalog request.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Source of catalog pages. `CatalogClient` is the production
/// implementation; tests substitute an in-memory fake.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CatalogPage, CatalogError>;
}

/// HTTP client for a PokeAPI-compatible catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client against the given base URL (no trailing slash
    /// required).
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// failure).
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CatalogPage, CatalogError> {
        let url = format!("{}/pokemon?limit={limit}&offset={offset}", self.base_url);
        tracing::debug!(%url, "fetching catalog page");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "could not read error body".to_owned());
            return Err(CatalogError::Status { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Parse {
            context: format!("catalog page (body: {})", truncate(&body, 200)),
            source: e,
        })
    }
}

/// Truncates a string to at most `max_len` bytes at a char boundary.
fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s.get(..end).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("pikachu", 200), "pikachu");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let s = "ポケモン";
        let cut = truncate(s, 4);
        assert!(cut.len() <= 4);
        assert!(s.starts_with(cut));
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CatalogClient::new("https://pokeapi.co/api/v2/").unwrap();
        assert_eq!(client.base_url, "https://pokeapi.co/api/v2");
    }
}
