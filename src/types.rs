//! Raw wire shapes for TonAPI v2 responses.
//!
//! Every field the API does not guarantee is an `Option` (or a defaulted
//! container), so a partial record deserializes instead of faulting. The
//! normalizer in `crate::normalize` turns these into display models.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCollectionList {
    #[serde(default)]
    pub nft_collections: Vec<RawCollection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCollection {
    pub address: Option<String>,
    pub next_item_index: Option<u64>,
    #[serde(default)]
    pub previews: Vec<RawPreview>,
    pub metadata: Option<RawCollectionMetadata>,
}

/// Collection metadata is free-form TEP-64 JSON; only the fields the display
/// model consumes are decoded here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCollectionMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub cover_image: Option<String>,
    pub marketplace: Option<String>,
    #[serde(default)]
    pub social_links: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPreview {
    pub resolution: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItemList {
    #[serde(default)]
    pub nft_items: Vec<RawNftItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawNftItem {
    pub address: Option<String>,
    pub index: Option<u64>,
    pub owner: Option<RawAccountRef>,
    pub collection: Option<RawCollectionRef>,
    pub metadata: Option<RawItemMetadata>,
    #[serde(default)]
    pub previews: Vec<RawPreview>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItemMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAccountRef {
    pub address: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCollectionRef {
    pub address: Option<String>,
    pub name: Option<String>,
}

/// Account summary from `accounts/{address}`. Balance is nanoton.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAccount {
    pub address: Option<String>,
    pub balance: Option<u64>,
    pub status: Option<String>,
    pub name: Option<String>,
    pub icon: Option<String>,
}

/// Response of `rates?tokens=..&currencies=..`. Keys of the outer map are
/// uppercase token symbols, keys of the inner maps are uppercase currencies.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRates {
    #[serde(default)]
    pub rates: HashMap<String, RawTokenRates>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTokenRates {
    #[serde(default)]
    pub prices: HashMap<String, f64>,
    #[serde(default)]
    pub diff_24h: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJettonList {
    #[serde(default)]
    pub balances: Vec<RawJettonBalance>,
}

/// One jetton balance entry. The amount is a string-encoded integer in the
/// jetton's smallest unit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJettonBalance {
    pub balance: Option<String>,
    pub jetton: Option<RawJettonInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJettonInfo {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<u32>,
    pub image: Option<String>,
}
