//! tonx - TON NFT and token feed explorer
//!
//! This library provides the core functionality for tonx: an HTTP client for
//! a TON indexing API, normalization of its raw JSON into stable display
//! models, composite feed assembly, a pure swap estimator, and the wallet
//! session plus filter selection state a front end drives.
//!
//! The flow is upstream JSON -> `types` -> `normalize` -> `models`, with
//! `feeds` composing the per-endpoint fetches into display-ready batches.

// Raw wire shapes mirroring the upstream API
pub mod types;

// Stable display models and the card color palette
pub mod models;

// Pure display formatting (amounts, counts, addresses, previews)
pub mod format;

// Raw JSON -> display model conversion with documented fallbacks
pub mod normalize;

// Upstream HTTP client behind the `TonIndex` trait
pub mod tonapi;

// Composite feed assembly on top of `TonIndex`
pub mod feeds;

// Pure swap quote estimation
pub mod swap;

// Wallet session, filter selection and host profile state
pub mod session;

// CLI and environment configuration
pub mod config;

// Re-export commonly used types
pub use config::Config;
pub use models::{CardColor, Collection, JettonBalance, NftItem, TokenRate, WalletBalance};
pub use session::{FeedChoice, HostProfile, Session, SessionEvent, WalletStatus};
pub use swap::SwapEstimate;
pub use tonapi::{TonApi, TonIndex};
