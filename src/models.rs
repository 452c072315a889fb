//! Stable display models produced by the normalizer and consumed by feeds
//! and the CLI. All fallback policy lives in `crate::normalize`, not here.

use serde::Serialize;
use std::fmt;

/// Card background palette, assigned round-robin by batch position.
pub const CARD_COLORS: [CardColor; 5] = [
    CardColor::Green,
    CardColor::Purple,
    CardColor::Blue,
    CardColor::Orange,
    CardColor::Pink,
];

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Green,
    Purple,
    Blue,
    Orange,
    Pink,
}

impl CardColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardColor::Green => "green",
            CardColor::Purple => "purple",
            CardColor::Blue => "blue",
            CardColor::Orange => "orange",
            CardColor::Pink => "pink",
        }
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An NFT collection row. `address` is the stable identity; everything else
/// is best-effort with documented defaults.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Collection {
    pub address: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub cover_image: Option<String>,
    pub item_count: u64,
    pub marketplace: Option<String>,
    pub social_links: Vec<String>,
    pub color: CardColor,
}

/// A single NFT row. `collection_address` is an unenforced back-reference:
/// it may point at a collection the client never loaded.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NftItem {
    pub address: String,
    pub index: u64,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub collection_address: Option<String>,
    pub collection_name: Option<String>,
    pub owner: Option<String>,
    /// Always `None`: no marketplace price source is wired in.
    pub price: Option<String>,
    pub color: CardColor,
}

/// Account summary for the connected wallet. `formatted` is `None` for a
/// zero balance so the UI can show its own placeholder.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WalletBalance {
    pub address: String,
    pub raw: u64,
    pub formatted: Option<String>,
    pub status: String,
    pub name: Option<String>,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JettonBalance {
    pub jetton_address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u32,
    pub raw: u128,
    pub formatted: Option<String>,
    pub image: Option<String>,
}

/// A spot rate for one token against a reference currency. Transient: fetched
/// for the swap panel and never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TokenRate {
    pub symbol: String,
    pub price: f64,
    pub diff_24h: Option<String>,
}
