//! Wallet session and filter selection state.
//!
//! One `Session` owns the three pieces of process-wide mutable state: the
//! wallet status, the last-loaded collection index, and the filter
//! selection, plus the wallet-scoped views derived from them. Transitions
//! notify subscribers at most once per actual state change. Nothing here
//! performs I/O; callers fetch and store.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::format::format_address;
use crate::models::{Collection, NftItem, WalletBalance};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        address: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Connecting,
    Connected(String),
    Disconnected,
}

/// Which feed an applied filter selection routes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedChoice {
    Featured,
    Filtered(Vec<String>),
}

/// User hints supplied by the mini-app host bridge, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct HostProfile {
    pub user_name: Option<String>,
    pub photo_url: Option<String>,
    pub color_scheme: Option<String>,
    pub auth_time: Option<DateTime<Utc>>,
}

impl HostProfile {
    /// Parse the host's init blob. Every field is optional; an unusable blob
    /// yields an empty profile.
    pub fn from_init_data(v: &Value) -> Self {
        let user = v.get("user");
        Self {
            user_name: user
                .and_then(|u| u.get("first_name"))
                .and_then(|s| s.as_str())
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            photo_url: user
                .and_then(|u| u.get("photo_url"))
                .and_then(|s| s.as_str())
                .map(str::to_string),
            color_scheme: v
                .get("color_scheme")
                .and_then(|s| s.as_str())
                .map(str::to_string),
            auth_time: v
                .get("auth_date")
                .and_then(|d| d.as_i64())
                .and_then(|secs| Utc.timestamp_opt(secs, 0).single()),
        }
    }

    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("User")
    }

    /// Theme defaults to dark; only an explicit "light" scheme flips it.
    pub fn prefers_light(&self) -> bool {
        self.color_scheme.as_deref() == Some("light")
    }
}

#[derive(Debug, Default)]
pub struct Session {
    wallet: WalletStatus,
    collections: Vec<Collection>,
    filter: Vec<String>,
    owned_items: Vec<NftItem>,
    balance: Option<WalletBalance>,
    subscribers: Vec<UnboundedSender<SessionEvent>>,
    profile: HostProfile,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: HostProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn wallet(&self) -> &WalletStatus {
        &self.wallet
    }

    pub fn address(&self) -> Option<&str> {
        match &self.wallet {
            WalletStatus::Connected { address } => Some(address),
            _ => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.wallet, WalletStatus::Connected { .. })
    }

    pub fn profile(&self) -> &HostProfile {
        &self.profile
    }

    /// Subscribe to session transitions. Delivery is at-most-once per actual
    /// transition, in order, with no coalescing. A dropped receiver is
    /// pruned on the next emit.
    pub fn subscribe(&mut self) -> UnboundedReceiver<SessionEvent> {
        let (tx, rx) = unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Start connecting. Only valid from `Disconnected`; anything else is a
    /// no-op that emits nothing.
    pub fn begin_connect(&mut self) -> bool {
        if self.wallet != WalletStatus::Disconnected {
            return false;
        }
        self.wallet = WalletStatus::Connecting;
        log::debug!("[session] Wallet connect started");
        self.emit(SessionEvent::Connecting);
        true
    }

    /// Enter `Connected`. Valid from `Connecting`, and directly from
    /// `Disconnected` for provider-restored sessions. Re-announcing the
    /// current address is not a transition; a different address is.
    pub fn complete_connect(&mut self, address: String) -> bool {
        if let WalletStatus::Connected { address: current } = &self.wallet {
            if *current == address {
                return false;
            }
        }
        log::info!("[session] Wallet connected: {}", format_address(&address));
        self.wallet = WalletStatus::Connected {
            address: address.clone(),
        };
        self.emit(SessionEvent::Connected(address));
        true
    }

    /// Leave any connected or connecting state, clearing every wallet-scoped
    /// view. A repeat disconnect is a no-op that emits nothing.
    pub fn disconnect(&mut self) -> bool {
        if self.wallet == WalletStatus::Disconnected {
            return false;
        }
        self.wallet = WalletStatus::Disconnected;
        self.owned_items.clear();
        self.balance = None;
        log::info!("[session] Wallet disconnected");
        self.emit(SessionEvent::Disconnected);
        true
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    /// Last write wins: loads are never cancelled, so a slow response may
    /// overwrite a newer one.
    pub fn store_collections(&mut self, collections: Vec<Collection>) {
        self.collections = collections;
    }

    pub fn owned_items(&self) -> &[NftItem] {
        &self.owned_items
    }

    pub fn owned_count(&self) -> usize {
        self.owned_items.len()
    }

    pub fn store_owned_items(&mut self, items: Vec<NftItem>) {
        self.owned_items = items;
    }

    pub fn balance(&self) -> Option<&WalletBalance> {
        self.balance.as_ref()
    }

    pub fn store_balance(&mut self, balance: WalletBalance) {
        self.balance = Some(balance);
    }

    pub fn filter(&self) -> &[String] {
        &self.filter
    }

    /// Toggle a collection's membership in the filter selection, keeping
    /// insertion order. Returns the new membership. Never triggers I/O.
    pub fn toggle_filter(&mut self, address: &str) -> bool {
        if let Some(at) = self.filter.iter().position(|a| a == address) {
            self.filter.remove(at);
            false
        } else {
            self.filter.push(address.to_string());
            true
        }
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Route the applied selection to a feed: an empty selection means the
    /// featured feed, never the filtered one.
    pub fn apply_filter(&self) -> FeedChoice {
        if self.filter.is_empty() {
            FeedChoice::Featured
        } else {
            FeedChoice::Filtered(self.filter.clone())
        }
    }

    fn emit(&mut self, event: SessionEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}
