//! CLI and environment configuration.
//!
//! Priority: CLI args > Environment variables > Defaults.

use anyhow::{bail, Result};
use clap::Parser;

pub const DEFAULT_API_BASE: &str = "https://tonapi.io/v2";

#[derive(Parser, Debug, Clone)]
#[command(name = "tonx")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "TON NFT and token feed explorer", long_about = None)]
pub struct Config {
    /// Base URL of the TON indexing API
    #[arg(long, env = "TONAPI_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Bearer token for authenticated API access (avoids rate limits)
    #[arg(long, env = "TONAPI_TOKEN")]
    pub api_token: Option<String>,

    /// Page size for upstream list requests (1-100)
    #[arg(long, env = "TONX_LIMIT", default_value_t = 20)]
    pub limit: u32,

    /// List top collections
    #[arg(long)]
    pub collections: bool,

    /// List items of one collection
    #[arg(long, value_name = "ADDRESS")]
    pub items: Option<String>,

    /// Show a wallet: balance, jettons and owned items
    #[arg(long, value_name = "ADDRESS")]
    pub wallet: Option<String>,

    /// Assemble the featured feed (the default action)
    #[arg(long)]
    pub featured: bool,

    /// Assemble the gifts feed
    #[arg(long)]
    pub gifts: bool,

    /// Show the TON rate and sample swap estimates
    #[arg(long)]
    pub rate: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            bail!("TONAPI_BASE must start with http:// or https://");
        }
        if self.limit < 1 || self.limit > 100 {
            bail!("TONX_LIMIT must be in range [1, 100], got {}", self.limit);
        }
        Ok(())
    }

    pub fn print_summary(&self) {
        log::info!("[config] ⚙️  Configuration:");
        log::info!("[config]    🌐 API base: {}", self.api_base);
        log::info!(
            "[config]    🔑 Auth token: {}",
            if self.api_token.is_some() {
                "set"
            } else {
                "not set"
            }
        );
        log::info!("[config]    📄 Page limit: {}", self.limit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["tonx"]).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.api_token, None);
        assert_eq!(config.limit, 20);
        assert!(!config.collections);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        let config = Config::try_parse_from(["tonx", "--limit", "0"]).unwrap();
        assert!(config.validate().is_err(), "limit 0 must be rejected");

        let config = Config::try_parse_from(["tonx", "--limit", "101"]).unwrap();
        assert!(config.validate().is_err(), "limit 101 must be rejected");

        let config = Config::try_parse_from(["tonx", "--limit", "100"]).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_api_base_scheme_is_validated() {
        let config = Config::try_parse_from(["tonx", "--api-base", "ftp://example.com"]).unwrap();
        assert!(config.validate().is_err());

        let config = Config::try_parse_from(["tonx", "--api-base", "http://localhost:8080"]).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_operation_flags_parse() {
        let config =
            Config::try_parse_from(["tonx", "--items", "EQcollection1", "--limit", "5"]).unwrap();
        assert_eq!(config.items.as_deref(), Some("EQcollection1"));
        assert_eq!(config.limit, 5);
        assert!(!config.featured);
    }
}
