//! Swap output estimation from a last-known TON/USD rate.
//!
//! Pure arithmetic over a rate the caller fetched; no I/O here. This is a
//! read-only price preview, not a quote: pairs other than TON/USDT use a
//! fixed placeholder multiplier until a real rate source exists for them.

/// Placeholder conversion factor for pairs with no rate source. Kept as an
/// explicit stub; replacing it with real math needs a second rate feed.
const CROSS_PAIR_FACTOR: f64 = 0.95;

#[derive(Debug, Clone, PartialEq)]
pub struct SwapEstimate {
    pub amount_out: f64,
    /// `amount_out` rendered at the pair's display precision: 4 decimals
    /// when the destination is TON, 2 otherwise.
    pub formatted: String,
    /// Human-readable unit rate, e.g. `1 TON ≈ $3.50`.
    pub rate_note: String,
}

/// Estimate the output of swapping `amount` of `from` into `to`, given the
/// last-known TON price in USD. Returns `None` when there is nothing to
/// show: a non-positive or non-finite amount, or an unusable rate.
pub fn estimate(from: &str, to: &str, amount: f64, ton_rate: f64) -> Option<SwapEstimate> {
    if !amount.is_finite() || amount <= 0.0 {
        return None;
    }
    if !ton_rate.is_finite() || ton_rate <= 0.0 {
        return None;
    }

    let (amount_out, rate_note) = match (from, to) {
        ("TON", "USDT") => (amount * ton_rate, format!("1 TON ≈ ${ton_rate:.2}")),
        ("USDT", "TON") => (
            amount / ton_rate,
            format!("1 USDT ≈ {:.4} TON", 1.0 / ton_rate),
        ),
        _ => (
            amount * CROSS_PAIR_FACTOR,
            format!("1 {from} ≈ {CROSS_PAIR_FACTOR} {to}"),
        ),
    };

    let decimals: usize = if to == "TON" { 4 } else { 2 };
    Some(SwapEstimate {
        amount_out,
        formatted: format!("{amount_out:.decimals$}"),
        rate_note,
    })
}
