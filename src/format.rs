//! Display formatting for amounts, counts, addresses, and preview images.
//!
//! These are pure helpers; the normalizer composes them into display models.

use crate::models::{CardColor, CARD_COLORS};
use crate::types::RawPreview;

/// Nanoton per TON.
pub const TON_DECIMALS: u32 = 9;

/// Format a nanoton amount as a display string.
/// Examples: `1_500_000_000` -> "1.5", `2_500_000_000_000` -> "2,500".
/// A zero amount yields `None`, not `"0"`.
pub fn format_ton(nanoton: u64) -> Option<String> {
    format_token_amount(nanoton as u128, TON_DECIMALS)
}

/// Format a smallest-unit token amount as a display string.
/// Values of 1000 or more render with no decimals and comma grouping;
/// smaller values render with up to 2 decimals, trailing zeros trimmed.
pub fn format_token_amount(raw: u128, decimals: u32) -> Option<String> {
    if raw == 0 {
        return None;
    }
    let value = raw as f64 / 10f64.powi(decimals as i32);
    let max_decimals = if value >= 1000.0 { 0 } else { 2 };
    Some(format_grouped(value, max_decimals))
}

/// Format a count with a compact suffix.
/// Examples: "0", "999", "1.5K", "2.3M".
pub fn format_count(n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    if n >= 1_000_000 {
        return format!("{:.1}M", n as f64 / 1_000_000.0);
    }
    if n >= 1_000 {
        return format!("{:.1}K", n as f64 / 1_000.0);
    }
    n.to_string()
}

/// Shorten an address to its first and last 4 characters.
/// Addresses of 8 characters or fewer pass through verbatim.
pub fn format_address(address: &str) -> String {
    let count = address.chars().count();
    if count <= 8 {
        return address.to_string();
    }
    let head: String = address.chars().take(4).collect();
    let tail: String = address.chars().skip(count - 4).collect();
    format!("{head}...{tail}")
}

/// Pick the best preview URL for a requested resolution: an exact resolution
/// match with a usable URL wins, otherwise the last (largest) variant,
/// otherwise `None`. A matching entry whose URL is missing or empty counts
/// as absent.
pub fn best_preview(previews: &[RawPreview], resolution: &str) -> Option<String> {
    if previews.is_empty() {
        return None;
    }
    previews
        .iter()
        .find(|p| p.resolution.as_deref() == Some(resolution))
        .and_then(|p| p.url.clone())
        .filter(|url| !url.is_empty())
        .or_else(|| previews.last().and_then(|p| p.url.clone()))
}

/// Card color for an item, keyed by its position in the current result batch.
pub fn card_color(position: usize) -> CardColor {
    CARD_COLORS[position % CARD_COLORS.len()]
}

fn format_grouped(value: f64, max_decimals: usize) -> String {
    let rendered = format!("{value:.max_decimals$}");
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };
    let mut out = group_thousands(int_part);
    if let Some(frac) = frac_part {
        let trimmed = frac.trim_end_matches('0');
        if !trimmed.is_empty() {
            out.push('.');
            out.push_str(trimmed);
        }
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
