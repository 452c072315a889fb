//! Feed assembly tests against a stubbed upstream index.
//!
//! The stub implements `TonIndex` in memory so the composition rules
//! (breadth, depth, caps, ordering, degradation) can be checked without a
//! network.

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use tonx::feeds;
use tonx::tonapi::TonIndex;
use tonx::{FeedChoice, Session};
use tonx::types::{
    RawAccount, RawCollection, RawCollectionList, RawCollectionMetadata, RawCollectionRef,
    RawItemList, RawItemMetadata, RawJettonList, RawNftItem, RawRates, RawTokenRates,
};

#[derive(Default)]
struct StubIndex {
    collections: Vec<RawCollection>,
    items_by_collection: HashMap<String, Vec<RawNftItem>>,
    items_by_account: HashMap<String, Vec<RawNftItem>>,
    accounts: HashMap<String, RawAccount>,
    ton_price: Option<f64>,
    fail_collections: bool,
}

#[async_trait]
impl TonIndex for StubIndex {
    async fn nft_collections(&self, limit: u32) -> Result<RawCollectionList> {
        if self.fail_collections {
            return Err(anyhow!("stubbed upstream failure"));
        }
        let mut nft_collections = self.collections.clone();
        nft_collections.truncate(limit as usize);
        Ok(RawCollectionList { nft_collections })
    }

    async fn collection_items(&self, collection: &str, limit: u32) -> Result<RawItemList> {
        let mut nft_items = self
            .items_by_collection
            .get(collection)
            .ok_or_else(|| anyhow!("unknown collection {collection}"))?
            .clone();
        nft_items.truncate(limit as usize);
        Ok(RawItemList { nft_items })
    }

    async fn account_items(&self, account: &str, limit: u32) -> Result<RawItemList> {
        let mut nft_items = self
            .items_by_account
            .get(account)
            .cloned()
            .unwrap_or_default();
        nft_items.truncate(limit as usize);
        Ok(RawItemList { nft_items })
    }

    async fn account_info(&self, account: &str) -> Result<RawAccount> {
        self.accounts
            .get(account)
            .cloned()
            .ok_or_else(|| anyhow!("unknown account {account}"))
    }

    async fn rates(&self, _tokens: &str, _currencies: &str) -> Result<RawRates> {
        let mut rates = HashMap::new();
        if let Some(price) = self.ton_price {
            rates.insert(
                "TON".to_string(),
                RawTokenRates {
                    prices: HashMap::from([("USD".to_string(), price)]),
                    diff_24h: HashMap::from([("USD".to_string(), "+1.2%".to_string())]),
                },
            );
        }
        Ok(RawRates { rates })
    }

    async fn jetton_balances(&self, _account: &str) -> Result<RawJettonList> {
        Ok(RawJettonList::default())
    }
}

fn raw_collection(address: &str, name: &str) -> RawCollection {
    RawCollection {
        address: Some(address.to_string()),
        next_item_index: Some(100),
        previews: Vec::new(),
        metadata: Some(RawCollectionMetadata {
            name: Some(name.to_string()),
            ..Default::default()
        }),
    }
}

fn raw_item(address: &str, index: u64) -> RawNftItem {
    RawNftItem {
        address: Some(address.to_string()),
        index: Some(index),
        metadata: Some(RawItemMetadata {
            name: Some(format!("Item {index}")),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn raw_items(prefix: &str, count: u64) -> Vec<RawNftItem> {
    (0..count)
        .map(|i| raw_item(&format!("{prefix}-{i}"), i))
        .collect()
}

/// Three populated collections plus two more the feed should never reach.
fn stub_with_five_collections() -> StubIndex {
    let mut stub = StubIndex {
        collections: vec![
            raw_collection("EQcolA", "Collection A"),
            raw_collection("EQcolB", "Collection B"),
            raw_collection("EQcolC", "Collection C"),
            raw_collection("EQcolD", "Collection D"),
            raw_collection("EQcolE", "Collection E"),
        ],
        ..Default::default()
    };
    for key in ["EQcolA", "EQcolB", "EQcolC", "EQcolD", "EQcolE"] {
        stub.items_by_collection.insert(key.to_string(), raw_items(key, 8));
    }
    stub
}

#[tokio::test]
async fn test_featured_caps_items_and_keeps_collection_order() {
    let stub = stub_with_five_collections();
    let items = feeds::featured_feed(&stub).await;

    assert_eq!(items.len(), feeds::FEATURED_CAP, "feed is capped");
    assert_eq!(items[0].address, "EQcolA-0", "first collection leads");
    assert_eq!(items[4].address, "EQcolB-0", "four items per collection");
    assert_eq!(items[8].address, "EQcolC-0");
    assert!(
        !items.iter().any(|item| item.address.starts_with("EQcolD")),
        "collections beyond the breadth are never fetched"
    );
}

#[tokio::test]
async fn test_featured_stamps_parent_collection() {
    let stub = stub_with_five_collections();
    let items = feeds::featured_feed(&stub).await;

    assert_eq!(items[0].collection_name.as_deref(), Some("Collection A"));
    assert_eq!(items[0].collection_address.as_deref(), Some("EQcolA"));
    assert_eq!(items[11].collection_name.as_deref(), Some("Collection C"));
}

#[tokio::test]
async fn test_featured_is_empty_when_collections_fail() {
    let stub = StubIndex {
        fail_collections: true,
        ..Default::default()
    };
    assert!(feeds::featured_feed(&stub).await.is_empty());
}

#[tokio::test]
async fn test_featured_skips_a_failing_collection() {
    let mut stub = stub_with_five_collections();
    stub.items_by_collection.remove("EQcolB");

    let items = feeds::featured_feed(&stub).await;
    assert_eq!(items.len(), 8, "the failing collection contributes nothing");
    assert_eq!(items[0].address, "EQcolA-0");
    assert_eq!(items[4].address, "EQcolC-0", "order of the rest is kept");
}

#[tokio::test]
async fn test_filtered_limits_breadth_and_depth() {
    let stub = stub_with_five_collections();
    let collections = feeds::top_collections(&stub, 10).await;

    let selected: Vec<String> = ["EQcolA", "EQcolB", "EQcolC", "EQcolD"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let items = feeds::filtered_feed(&stub, &selected, &collections).await;

    assert_eq!(items.len(), 3 * feeds::FILTERED_DEPTH as usize);
    assert!(
        !items.iter().any(|item| item.address.starts_with("EQcolD")),
        "only the first three selections are fetched"
    );
    assert_eq!(items[0].collection_name.as_deref(), Some("Collection A"));
}

#[tokio::test]
async fn test_filtered_name_lookup_miss_clears_embedded_name() {
    let mut stub = StubIndex::default();
    stub.collections.push(raw_collection("EQcolA", "Collection A"));
    let mut item = raw_item("EQcolX-0", 0);
    item.collection = Some(RawCollectionRef {
        address: Some("EQcolX".to_string()),
        name: Some("Embedded Name".to_string()),
    });
    stub.items_by_collection.insert("EQcolX".to_string(), vec![item]);

    let collections = feeds::top_collections(&stub, 10).await;
    let selected = vec!["EQcolX".to_string()];
    let items = feeds::filtered_feed(&stub, &selected, &collections).await;

    assert_eq!(items.len(), 1);
    assert_eq!(
        items[0].collection_name, None,
        "the loaded index wins over the embedded ref, even on a miss"
    );
}

#[tokio::test]
async fn test_filtered_empty_selection_is_empty() {
    let stub = stub_with_five_collections();
    let collections = feeds::top_collections(&stub, 10).await;
    let items = feeds::filtered_feed(&stub, &[], &collections).await;
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_session_collection_index_feeds_the_filtered_feed() {
    let stub = stub_with_five_collections();
    let mut session = Session::new();
    session.store_collections(feeds::top_collections(&stub, 10).await);

    session.toggle_filter("EQcolB");
    session.toggle_filter("EQcolC");

    let selected = match session.apply_filter() {
        FeedChoice::Filtered(selected) => selected,
        FeedChoice::Featured => panic!("a non-empty selection routes to the filtered feed"),
    };
    let items = feeds::filtered_feed(&stub, &selected, session.collections()).await;

    assert_eq!(items.len(), 2 * feeds::FILTERED_DEPTH as usize);
    assert_eq!(items[0].collection_name.as_deref(), Some("Collection B"));
    assert_eq!(
        items[feeds::FILTERED_DEPTH as usize]
            .collection_name
            .as_deref(),
        Some("Collection C")
    );
}

#[tokio::test]
async fn test_gifts_skip_unavailable_collections() {
    let stub = StubIndex::default();
    let items = feeds::gifts_feed(&stub).await;
    assert!(items.is_empty(), "an unavailable gift collection is skipped");
}

#[tokio::test]
async fn test_gifts_come_from_the_allowlist() {
    let mut stub = StubIndex::default();
    stub.items_by_collection
        .insert(feeds::GIFT_COLLECTIONS[0].to_string(), raw_items("EQgift", 3));

    let items = feeds::gifts_feed(&stub).await;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].address, "EQgift-0");
}

#[tokio::test]
async fn test_user_items_normalize_with_name_fallback() {
    let mut stub = StubIndex::default();
    let mut unnamed = raw_item("EQitem-7", 7);
    unnamed.metadata = None;
    stub.items_by_account.insert(
        "EQwallet1".to_string(),
        vec![raw_item("EQitem-0", 0), unnamed],
    );

    let items = feeds::user_items(&stub, "EQwallet1", 10).await;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Item 0");
    assert_eq!(items[1].name, "#7", "unnamed items fall back to the index");
}

#[tokio::test]
async fn test_wallet_balance_formats_nanoton() {
    let mut stub = StubIndex::default();
    stub.accounts.insert(
        "EQwallet1".to_string(),
        RawAccount {
            address: Some("EQwallet1".to_string()),
            balance: Some(5_000_000_000),
            status: Some("active".to_string()),
            name: None,
            icon: None,
        },
    );

    let balance = feeds::wallet_balance(&stub, "EQwallet1").await;
    let balance = balance.expect("known account yields a balance");
    assert_eq!(balance.raw, 5_000_000_000);
    assert_eq!(balance.formatted.as_deref(), Some("5"));
    assert_eq!(balance.status, "active");

    assert!(
        feeds::wallet_balance(&stub, "EQunknown").await.is_none(),
        "a failed account fetch degrades to None"
    );
}

#[tokio::test]
async fn test_token_rates_match_uppercase_response_keys() {
    let stub = StubIndex {
        ton_price: Some(3.5),
        ..Default::default()
    };

    let rates = feeds::token_rates(&stub, &["TON"], "USD").await;
    assert_eq!(rates.len(), 1);
    assert_eq!(rates[0].symbol, "TON");
    assert_eq!(rates[0].price, 3.5);
    assert_eq!(rates[0].diff_24h.as_deref(), Some("+1.2%"));
}

#[tokio::test]
async fn test_search_is_deterministically_empty() {
    assert!(feeds::search_items("ducks", 10).is_empty());
}
