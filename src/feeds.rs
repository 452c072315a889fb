//! Composite feed assembly over the indexing API.
//!
//! Every operation here degrades to an empty result on upstream failure and
//! logs the cause; no error crosses this boundary. Composite feeds fan out
//! per-collection fetches with bounded concurrency and fan in preserving the
//! source collection order, so output ordering matches a sequential run.

use futures::stream::{self, StreamExt};

use crate::models::{Collection, JettonBalance, NftItem, TokenRate, WalletBalance};
use crate::normalize::{
    normalize_balance, normalize_collection, normalize_item, normalize_jetton, normalize_rates,
};
use crate::tonapi::TonIndex;

/// Featured feed sampling policy: top 5 collections, first 3 sampled at 4
/// items each, capped at 12 items total. Fixed by design, not configurable.
pub const FEATURED_SOURCE_LIMIT: u32 = 5;
pub const FEATURED_BREADTH: usize = 3;
pub const FEATURED_DEPTH: u32 = 4;
pub const FEATURED_CAP: usize = 12;

/// Filtered feed samples the first 3 selected collections at 6 items each,
/// with no final cap.
pub const FILTERED_BREADTH: usize = 3;
pub const FILTERED_DEPTH: u32 = 6;

pub const GIFTS_DEPTH: u32 = 20;

/// Known gift-drop collections. Unresolvable entries are skipped per fetch,
/// never fatal.
pub const GIFT_COLLECTIONS: [&str; 1] = ["EQAOQdwdw8kGftJCSFgOErM1mBjYPe4DBPq8-AhF6vr9si5N"];

pub async fn top_collections(api: &dyn TonIndex, limit: u32) -> Vec<Collection> {
    match api.nft_collections(limit).await {
        Ok(list) => list
            .nft_collections
            .iter()
            .enumerate()
            .filter_map(|(position, raw)| normalize_collection(raw, position))
            .collect(),
        Err(e) => {
            log::warn!("[feeds] Top collections fetch failed: {e}");
            Vec::new()
        }
    }
}

/// Items of one collection. Each item carries the requested collection
/// address as its back-reference, regardless of what the record embedded.
pub async fn items_of_collection(api: &dyn TonIndex, collection: &str, limit: u32) -> Vec<NftItem> {
    match api.collection_items(collection, limit).await {
        Ok(list) => list
            .nft_items
            .iter()
            .enumerate()
            .filter_map(|(position, raw)| normalize_item(raw, position))
            .map(|mut item| {
                item.collection_address = Some(collection.to_string());
                item
            })
            .collect(),
        Err(e) => {
            log::warn!("[feeds] Items fetch failed for {collection}: {e}");
            Vec::new()
        }
    }
}

/// NFTs held by an account, including indirectly owned ones (e.g. held via
/// a sale contract).
pub async fn user_items(api: &dyn TonIndex, wallet: &str, limit: u32) -> Vec<NftItem> {
    match api.account_items(wallet, limit).await {
        Ok(list) => list
            .nft_items
            .iter()
            .enumerate()
            .filter_map(|(position, raw)| normalize_item(raw, position))
            .collect(),
        Err(e) => {
            log::warn!("[feeds] Owned items fetch failed for {wallet}: {e}");
            Vec::new()
        }
    }
}

pub async fn wallet_balance(api: &dyn TonIndex, wallet: &str) -> Option<WalletBalance> {
    match api.account_info(wallet).await {
        Ok(raw) => Some(normalize_balance(wallet, &raw)),
        Err(e) => {
            log::warn!("[feeds] Account fetch failed for {wallet}: {e}");
            None
        }
    }
}

pub async fn jetton_balances(api: &dyn TonIndex, wallet: &str) -> Vec<JettonBalance> {
    match api.jetton_balances(wallet).await {
        Ok(list) => list.balances.iter().filter_map(normalize_jetton).collect(),
        Err(e) => {
            log::warn!("[feeds] Jetton balances fetch failed for {wallet}: {e}");
            Vec::new()
        }
    }
}

/// Spot rates for the given symbols against one reference currency.
pub async fn token_rates(api: &dyn TonIndex, symbols: &[&str], currency: &str) -> Vec<TokenRate> {
    let tokens = symbols.join(",").to_ascii_lowercase();
    match api.rates(&tokens, &currency.to_ascii_lowercase()).await {
        Ok(raw) => normalize_rates(&raw, symbols, currency),
        Err(e) => {
            log::warn!("[feeds] Rates fetch failed for {tokens}: {e}");
            Vec::new()
        }
    }
}

/// Featured feed: a sample of items across the top collections, each stamped
/// with its parent collection's display name. A failed inner fetch
/// contributes zero items.
pub async fn featured_feed(api: &dyn TonIndex) -> Vec<NftItem> {
    let collections = top_collections(api, FEATURED_SOURCE_LIMIT).await;
    if collections.is_empty() {
        return Vec::new();
    }

    let batches: Vec<Vec<NftItem>> = stream::iter(
        collections
            .iter()
            .take(FEATURED_BREADTH)
            .map(|collection| async move {
                let mut items =
                    items_of_collection(api, &collection.address, FEATURED_DEPTH).await;
                for item in &mut items {
                    item.collection_name = Some(collection.name.clone());
                }
                items
            }),
    )
    .buffered(FEATURED_BREADTH)
    .collect()
    .await;

    let mut feed: Vec<NftItem> = batches.into_iter().flatten().collect();
    feed.truncate(FEATURED_CAP);
    log::info!("[feeds] Featured feed assembled with {} items", feed.len());
    feed
}

/// Filtered feed: items of the first selected collections, display names
/// resolved against the already-loaded collection index. Unknown addresses
/// resolve to no name, not an error.
pub async fn filtered_feed(
    api: &dyn TonIndex,
    selected: &[String],
    collections: &[Collection],
) -> Vec<NftItem> {
    if selected.is_empty() {
        return Vec::new();
    }

    let batches: Vec<Vec<NftItem>> = stream::iter(
        selected
            .iter()
            .take(FILTERED_BREADTH)
            .map(|address| async move {
                let mut items = items_of_collection(api, address, FILTERED_DEPTH).await;
                let name = collections
                    .iter()
                    .find(|c| c.address == *address)
                    .map(|c| c.name.clone());
                for item in &mut items {
                    item.collection_name = name.clone();
                }
                items
            }),
    )
    .buffered(FILTERED_BREADTH)
    .collect()
    .await;

    batches.into_iter().flatten().collect()
}

/// All items across the known gift collections. A collection that fails to
/// resolve is skipped; the rest of the feed still assembles.
pub async fn gifts_feed(api: &dyn TonIndex) -> Vec<NftItem> {
    let mut feed = Vec::new();
    for address in GIFT_COLLECTIONS {
        let items = items_of_collection(api, address, GIFTS_DEPTH).await;
        if items.is_empty() {
            log::debug!("[feeds] Gift collection yielded nothing: {address}");
            continue;
        }
        feed.extend(items);
    }
    feed
}

/// Free-text NFT search. The indexing API has no search endpoint, so this
/// deterministically returns an empty feed.
pub fn search_items(query: &str, limit: u32) -> Vec<NftItem> {
    log::debug!("[feeds] NFT search not implemented upstream (query {query:?}, limit {limit})");
    Vec::new()
}
