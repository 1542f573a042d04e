use serde::{Deserialize, Serialize};

use super::account::AccountInfo;
use super::price::PriceQuote;
use super::token::TokenHolding;
use super::transaction::Transaction;

/// Everything one dashboard load fetched, after the retention filter.
///
/// A snapshot only exists once every fetch has succeeded, so anything
/// derived from it (totals, tables, charts) never sees partial data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSnapshot {
    /// Base58 address of the tracked wallet
    pub address: String,

    /// `None` when the account does not exist on chain
    pub account: Option<AccountInfo>,

    pub price: PriceQuote,

    /// Retained fungible holdings, in provider order
    pub holdings: Vec<TokenHolding>,

    /// Signature history, in provider order
    pub transactions: Vec<Transaction>,
}

/// Aggregated fiat values of the wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    /// Native balance in SOL (0 when the account does not exist)
    pub native_balance: f64,

    /// Fiat value of the native balance, full precision
    pub native_value_usd: f64,

    /// Per-token values, in holdings order
    pub tokens: Vec<AssetValuation>,

    /// Sum of all token values
    pub token_value_usd: f64,

    /// native_value_usd + token_value_usd
    pub total_value_usd: f64,
}

/// Fiat value of a single held token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetValuation {
    pub symbol: String,
    pub value_usd: f64,
}
