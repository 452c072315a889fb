//! tonx CLI: fetch TON NFT and token feeds and print them.

use anyhow::{Context, Result};

use tonx::config::Config;
use tonx::feeds;
use tonx::format::{format_address, format_count};
use tonx::swap;
use tonx::{Session, TonApi};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (safe to ignore if not found)
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().context("Failed to load configuration")?;
    config.print_summary();

    let api = TonApi::from_config(&config);

    if config.collections {
        show_collections(&api, config.limit).await;
    } else if let Some(address) = &config.items {
        show_items(&api, address, config.limit).await;
    } else if let Some(address) = &config.wallet {
        show_wallet(&api, address, config.limit).await;
    } else if config.gifts {
        show_gifts(&api).await;
    } else if config.rate {
        show_rate(&api).await;
    } else {
        show_featured(&api).await;
    }

    Ok(())
}

async fn show_collections(api: &TonApi, limit: u32) {
    let collections = feeds::top_collections(api, limit).await;
    println!("{:<12} {:>8}  {}", "ADDRESS", "ITEMS", "NAME");
    for collection in &collections {
        println!(
            "{:<12} {:>8}  {}",
            format_address(&collection.address),
            format_count(collection.item_count),
            collection.name
        );
    }
}

async fn show_items(api: &TonApi, collection: &str, limit: u32) {
    let items = feeds::items_of_collection(api, collection, limit).await;
    println!("{:<12} {:>6}  {}", "ADDRESS", "INDEX", "NAME");
    for item in &items {
        println!(
            "{:<12} {:>6}  {}",
            format_address(&item.address),
            item.index,
            item.name
        );
    }
}

/// Wallet view doubles as the session walkthrough: connect, load the
/// wallet-scoped views, print them, disconnect.
async fn show_wallet(api: &TonApi, address: &str, limit: u32) {
    let mut session = Session::new();
    let mut events = session.subscribe();

    session.begin_connect();
    session.complete_connect(address.to_string());

    if let Some(balance) = feeds::wallet_balance(api, address).await {
        session.store_balance(balance);
    }
    session.store_owned_items(feeds::user_items(api, address, limit).await);
    let jettons = feeds::jetton_balances(api, address).await;

    println!("Wallet {}", format_address(address));
    match session.balance() {
        Some(balance) => println!(
            "  Balance: {} TON ({})",
            balance.formatted.as_deref().unwrap_or("0"),
            balance.status
        ),
        None => println!("  Balance: unavailable"),
    }

    if !jettons.is_empty() {
        println!("  Tokens:");
        for jetton in &jettons {
            println!(
                "    {:<12} {}",
                jetton.symbol,
                jetton.formatted.as_deref().unwrap_or("0")
            );
        }
    }

    println!("  Items: {}", session.owned_count());
    for item in session.owned_items() {
        println!(
            "    {:<12} {:<28} {}",
            format_address(&item.address),
            item.name,
            item.collection_name.as_deref().unwrap_or("Unknown Collection")
        );
    }

    session.disconnect();
    while let Ok(event) = events.try_recv() {
        log::debug!("[session] Event: {event:?}");
    }
}

async fn show_gifts(api: &TonApi) {
    let items = feeds::gifts_feed(api).await;
    println!("Gifts: {} items", items.len());
    for item in &items {
        println!("  {:<12} {}", format_address(&item.address), item.name);
    }
}

async fn show_rate(api: &TonApi) {
    let rates = feeds::token_rates(api, &["TON"], "USD").await;
    let Some(ton) = rates.iter().find(|rate| rate.symbol == "TON") else {
        println!("TON rate unavailable");
        return;
    };

    println!(
        "TON: ${:.2} ({}) as of {}",
        ton.price,
        ton.diff_24h.as_deref().unwrap_or("n/a"),
        chrono::Local::now().format("%H:%M:%S")
    );

    for (from, to, amount) in [("TON", "USDT", 10.0), ("USDT", "TON", 10.0)] {
        if let Some(quote) = swap::estimate(from, to, amount, ton.price) {
            println!("  {amount} {from} -> {} {to}  ({})", quote.formatted, quote.rate_note);
        }
    }
}

async fn show_featured(api: &TonApi) {
    let items = feeds::featured_feed(api).await;
    println!("Featured: {} items", items.len());
    for item in &items {
        println!(
            "  {:<12} {:<28} {}",
            format_address(&item.address),
            item.name,
            item.collection_name.as_deref().unwrap_or("Unknown Collection")
        );
    }
}
