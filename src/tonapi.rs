//! HTTP client for the TonAPI v2 indexing service.
//!
//! Single-attempt semantics throughout: one request per call, no retry, no
//! backoff, no request timeout. Callers (the feed builders) catch failures
//! and degrade to empty results.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::OnceLock;

use crate::config::Config;
use crate::types::{RawAccount, RawCollectionList, RawItemList, RawJettonList, RawRates};

static HTTP: OnceLock<reqwest::Client> = OnceLock::new();

fn http_client() -> &'static reqwest::Client {
    HTTP.get_or_init(|| {
        reqwest::Client::builder()
            .pool_max_idle_per_host(8)
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client")
    })
}

/// Read-only surface of the indexing API consumed by the feed builders.
/// Implemented by [`TonApi`] over HTTP and by in-memory stubs in tests.
#[async_trait]
pub trait TonIndex: Send + Sync {
    async fn nft_collections(&self, limit: u32) -> Result<RawCollectionList>;
    async fn collection_items(&self, collection: &str, limit: u32) -> Result<RawItemList>;
    async fn account_items(&self, account: &str, limit: u32) -> Result<RawItemList>;
    async fn account_info(&self, account: &str) -> Result<RawAccount>;
    async fn rates(&self, tokens: &str, currencies: &str) -> Result<RawRates>;
    async fn jetton_balances(&self, account: &str) -> Result<RawJettonList>;
}

#[derive(Debug, Clone)]
pub struct TonApi {
    base_url: String,
    auth_token: Option<String>,
}

impl TonApi {
    pub fn new(base_url: impl Into<String>, auth_token: Option<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_token,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.api_base.clone(), config.api_token.clone())
    }

    /// One GET against the indexing API. Fails on transport errors, non-2xx
    /// statuses (body included in the error), and malformed JSON.
    pub async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, path);

        let mut request = http_client().get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.auth_token {
            request = request.header("Authorization", format!("Bearer {token}"));
            log::debug!("[tonapi] Using authentication token");
        }

        let response = request
            .send()
            .await
            .map_err(|e| anyhow!("Request to {} failed: {}", path, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow!("Indexing API error ({status}) on {path}: {error_text}"));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| anyhow!("Failed to parse response from {}: {}", path, e))
    }
}

#[async_trait]
impl TonIndex for TonApi {
    async fn nft_collections(&self, limit: u32) -> Result<RawCollectionList> {
        log::info!("[tonapi] Fetching top collections (limit {limit})");
        let v = self
            .get_json("nfts/collections", &[("limit", limit.to_string())])
            .await?;
        serde_json::from_value(v).context("Failed to decode collections response")
    }

    async fn collection_items(&self, collection: &str, limit: u32) -> Result<RawItemList> {
        log::info!("[tonapi] Fetching items of collection {collection} (limit {limit})");
        let path = format!("nfts/collections/{}/items", urlencoding::encode(collection));
        let v = self
            .get_json(&path, &[("limit", limit.to_string())])
            .await?;
        serde_json::from_value(v).context("Failed to decode collection items response")
    }

    async fn account_items(&self, account: &str, limit: u32) -> Result<RawItemList> {
        log::info!("[tonapi] Fetching NFTs held by {account} (limit {limit})");
        let path = format!("accounts/{}/nfts", urlencoding::encode(account));
        let v = self
            .get_json(
                &path,
                &[
                    ("limit", limit.to_string()),
                    ("indirect_ownership", "true".to_string()),
                ],
            )
            .await?;
        serde_json::from_value(v).context("Failed to decode account items response")
    }

    async fn account_info(&self, account: &str) -> Result<RawAccount> {
        log::info!("[tonapi] Fetching account summary for {account}");
        let path = format!("accounts/{}", urlencoding::encode(account));
        let v = self.get_json(&path, &[]).await?;
        serde_json::from_value(v).context("Failed to decode account response")
    }

    async fn rates(&self, tokens: &str, currencies: &str) -> Result<RawRates> {
        log::info!("[tonapi] Fetching rates for {tokens} in {currencies}");
        let v = self
            .get_json(
                "rates",
                &[
                    ("tokens", tokens.to_string()),
                    ("currencies", currencies.to_string()),
                ],
            )
            .await?;
        serde_json::from_value(v).context("Failed to decode rates response")
    }

    async fn jetton_balances(&self, account: &str) -> Result<RawJettonList> {
        log::info!("[tonapi] Fetching jetton balances for {account}");
        let path = format!("accounts/{}/jettons", urlencoding::encode(account));
        let v = self.get_json(&path, &[]).await?;
        serde_json::from_value(v).context("Failed to decode jetton balances response")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = TonApi::new("https://tonapi.io/v2/", None);
        assert_eq!(api.base_url, "https://tonapi.io/v2");
    }
}
