//! Normalization of raw TonAPI records into display models.
//!
//! Every fallback default lives here so the policy is testable in one place:
//! missing names, absent previews, unset counts, and unparseable amounts all
//! resolve to documented neutral values. A record without an address has no
//! stable identity and is dropped rather than defaulted.

use crate::format::{best_preview, card_color, format_token_amount, format_ton};
use crate::models::{Collection, JettonBalance, NftItem, TokenRate, WalletBalance};
use crate::types::{RawAccount, RawCollection, RawJettonBalance, RawNftItem, RawRates};

pub const UNKNOWN_COLLECTION: &str = "Unknown Collection";
pub const UNKNOWN_TOKEN: &str = "Unknown Token";

/// Collections render small thumbnails, items render card-sized images.
pub const COLLECTION_PREVIEW_RESOLUTION: &str = "100x100";
pub const ITEM_PREVIEW_RESOLUTION: &str = "500x500";

/// Jetton metadata without an explicit decimals field defaults to 9 (TEP-74).
pub const DEFAULT_JETTON_DECIMALS: u32 = 9;

pub fn normalize_collection(raw: &RawCollection, position: usize) -> Option<Collection> {
    let address = raw.address.clone()?;
    let meta = raw.metadata.as_ref();
    Some(Collection {
        address,
        name: meta
            .and_then(|m| m.name.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_COLLECTION.to_string()),
        description: meta.and_then(|m| m.description.clone()).unwrap_or_default(),
        image: best_preview(&raw.previews, COLLECTION_PREVIEW_RESOLUTION)
            .filter(|s| !s.is_empty())
            .or_else(|| meta.and_then(|m| m.image.clone())),
        cover_image: meta.and_then(|m| m.cover_image.clone()),
        item_count: raw.next_item_index.unwrap_or(0),
        marketplace: meta.and_then(|m| m.marketplace.clone()),
        social_links: meta.map(|m| m.social_links.clone()).unwrap_or_default(),
        color: card_color(position),
    })
}

pub fn normalize_item(raw: &RawNftItem, position: usize) -> Option<NftItem> {
    let address = raw.address.clone()?;
    let index = raw.index.unwrap_or(0);
    let meta = raw.metadata.as_ref();
    Some(NftItem {
        address,
        index,
        name: meta
            .and_then(|m| m.name.clone())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("#{index}")),
        description: meta.and_then(|m| m.description.clone()).unwrap_or_default(),
        image: best_preview(&raw.previews, ITEM_PREVIEW_RESOLUTION)
            .filter(|s| !s.is_empty())
            .or_else(|| meta.and_then(|m| m.image.clone())),
        collection_address: raw.collection.as_ref().and_then(|c| c.address.clone()),
        collection_name: raw.collection.as_ref().and_then(|c| c.name.clone()),
        owner: raw.owner.as_ref().and_then(|o| o.address.clone()),
        // No marketplace price source is wired in; see the model docs.
        price: None,
        color: card_color(position),
    })
}

pub fn normalize_balance(address: &str, raw: &RawAccount) -> WalletBalance {
    let nanoton = raw.balance.unwrap_or(0);
    WalletBalance {
        address: address.to_string(),
        raw: nanoton,
        formatted: format_ton(nanoton),
        status: raw
            .status
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "unknown".to_string()),
        name: raw.name.clone(),
        icon: raw.icon.clone(),
    }
}

pub fn normalize_jetton(raw: &RawJettonBalance) -> Option<JettonBalance> {
    let info = raw.jetton.as_ref()?;
    let jetton_address = info.address.clone()?;
    let decimals = info.decimals.unwrap_or(DEFAULT_JETTON_DECIMALS);
    let amount: u128 = raw
        .balance
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0);
    Some(JettonBalance {
        jetton_address,
        symbol: info
            .symbol
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "???".to_string()),
        name: info
            .name
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| UNKNOWN_TOKEN.to_string()),
        decimals,
        raw: amount,
        formatted: format_token_amount(amount, decimals),
        image: info.image.clone(),
    })
}

/// Extract one rate per requested symbol. A symbol missing from the response,
/// or present without a price in the reference currency, is skipped.
pub fn normalize_rates(raw: &RawRates, symbols: &[&str], currency: &str) -> Vec<TokenRate> {
    let currency = currency.to_ascii_uppercase();
    symbols
        .iter()
        .filter_map(|symbol| {
            let entry = raw.rates.get(&symbol.to_ascii_uppercase())?;
            let price = entry.prices.get(&currency).copied()?;
            Some(TokenRate {
                symbol: symbol.to_ascii_uppercase(),
                price,
                diff_24h: entry.diff_24h.get(&currency).cloned(),
            })
        })
        .collect()
}
