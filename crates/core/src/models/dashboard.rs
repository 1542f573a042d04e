use serde::{Deserialize, Serialize};

use super::chart::ChartDataset;

/// Data behind the "Account Details" view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub address: String,

    /// Block explorer page of the account
    pub explorer_url: String,

    /// SOL balance, `None` when the account does not exist
    pub sol_balance: Option<f64>,

    /// e.g. "2 SOL" or "N/A SOL"
    pub sol_balance_display: String,

    pub total_value_usd: f64,

    /// e.g. "$315.75"
    pub total_value_display: String,

    pub distribution: ChartDataset,
}

/// Data behind the "Portfolio Details" view. The first row is always SOL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTable {
    pub caption: String,
    pub columns: Vec<String>,
    pub rows: Vec<PortfolioRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRow {
    pub symbol: String,
    pub image_url: Option<String>,

    /// Balance in display units
    pub balance: f64,
    pub price_usd: f64,
    pub value_usd: f64,

    pub balance_display: String,
    pub price_display: String,
    pub value_display: String,
}

/// Data behind the "Transaction Details" view, in provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionTable {
    pub caption: String,
    pub columns: Vec<String>,
    pub rows: Vec<TransactionRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    pub signature: String,

    /// First and last 20 characters joined by "..."
    pub short_signature: String,

    pub explorer_url: String,

    /// UTC "YYYY-MM-DD HH:MM:SS", or "Unknown"
    pub date_time: String,

    /// Badge text: processed / confirmed / finalized / unknown
    pub status: String,

    pub failed: bool,
}
