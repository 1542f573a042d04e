use serde::{Deserialize, Serialize};

/// Spot price of the native coin, replaced wholesale on every refetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Price-API id of the coin (e.g., "solana")
    pub coin_id: String,

    /// Fiat currency the price is quoted in (e.g., "usd")
    pub currency: String,

    /// Fiat value of one whole native unit
    pub usd_per_native_unit: f64,
}

impl PriceQuote {
    pub fn new(coin_id: impl Into<String>, currency: impl Into<String>, price: f64) -> Self {
        Self {
            coin_id: coin_id.into(),
            currency: currency.into(),
            usd_per_native_unit: price,
        }
    }

    /// Convenience constructor for a SOL/USD quote.
    pub fn sol_usd(price: f64) -> Self {
        Self::new("solana", "usd", price)
    }
}
