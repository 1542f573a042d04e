use chrono::DateTime;

use crate::models::chart::ChartDataset;
use crate::models::dashboard::{
    AccountSummary, PortfolioRow, PortfolioTable, TransactionRow, TransactionTable,
};
use crate::models::portfolio::{PortfolioValuation, WalletSnapshot};
use crate::models::transaction::Transaction;

pub const EXPLORER_URL: &str = "https://solscan.io";
pub const SOL_LOGO_URL: &str = "https://cryptologos.cc/logos/solana-sol-logo.png";
pub const PORTFOLIO_CAPTION: &str = "A list of tokens";
pub const TRANSACTIONS_CAPTION: &str = "Recent transactions";

const SIGNATURE_EDGE: usize = 20;

/// Turns a snapshot and its valuation into the three view models.
///
/// The core computes every number and string; the frontend only lays
/// them out. Numeric fields are the aggregator's full-precision values and
/// display strings are formatted from those same values, so a row and the
/// account total can never disagree.
pub struct PresentationService;

impl PresentationService {
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn account_summary(
        &self,
        snapshot: &WalletSnapshot,
        valuation: &PortfolioValuation,
        distribution: ChartDataset,
    ) -> AccountSummary {
        let sol_balance = snapshot.account.as_ref().map(|a| a.sol_balance());
        let sol_balance_display = match sol_balance {
            Some(balance) => format!("{balance} SOL"),
            None => "N/A SOL".to_string(),
        };

        AccountSummary {
            address: snapshot.address.clone(),
            explorer_url: account_url(&snapshot.address),
            sol_balance,
            sol_balance_display,
            total_value_usd: valuation.total_value_usd,
            total_value_display: format!("${:.2}", valuation.total_value_usd),
            distribution,
        }
    }

    #[must_use]
    pub fn portfolio_table(
        &self,
        snapshot: &WalletSnapshot,
        valuation: &PortfolioValuation,
    ) -> PortfolioTable {
        let price = snapshot.price.usd_per_native_unit;
        let mut rows = Vec::with_capacity(snapshot.holdings.len() + 1);

        rows.push(PortfolioRow {
            symbol: "SOL".to_string(),
            image_url: Some(SOL_LOGO_URL.to_string()),
            balance: valuation.native_balance,
            price_usd: price,
            value_usd: valuation.native_value_usd,
            balance_display: format!("{:.8}", valuation.native_balance),
            price_display: format!("$ {price}"),
            value_display: format!("$ {:.2}", valuation.native_value_usd),
        });

        for holding in &snapshot.holdings {
            let balance = holding.ui_balance();
            let value = holding.value_usd();
            rows.push(PortfolioRow {
                symbol: holding.symbol.clone(),
                image_url: holding.image_url.clone(),
                balance,
                price_usd: holding.price_per_token,
                value_usd: value,
                balance_display: format!("{balance:.4}"),
                price_display: format!("$ {:.8}", holding.price_per_token),
                value_display: format!("$ {value:.4}"),
            });
        }

        PortfolioTable {
            caption: PORTFOLIO_CAPTION.to_string(),
            columns: ["Token", "Balance", "Price (USD)", "Value (USD)"]
                .map(String::from)
                .to_vec(),
            rows,
        }
    }

    #[must_use]
    pub fn transaction_table(&self, transactions: &[Transaction]) -> TransactionTable {
        TransactionTable {
            caption: TRANSACTIONS_CAPTION.to_string(),
            columns: ["Signature", "Date Time", "Status"].map(String::from).to_vec(),
            rows: transactions.iter().map(transaction_row).collect(),
        }
    }
}

impl Default for PresentationService {
    fn default() -> Self {
        Self::new()
    }
}

fn transaction_row(tx: &Transaction) -> TransactionRow {
    TransactionRow {
        signature: tx.signature.clone(),
        short_signature: shorten_signature(&tx.signature),
        explorer_url: format!("{EXPLORER_URL}/tx/{}", tx.signature),
        date_time: format_block_time(tx.block_time),
        status: tx
            .confirmation_status
            .map(|s| s.to_string())
            .unwrap_or_else(|| "unknown".to_string()),
        failed: tx.failed,
    }
}

#[must_use]
pub fn account_url(address: &str) -> String {
    format!("{EXPLORER_URL}/account/{address}")
}

/// Keep the first and last 20 characters of a long signature.
#[must_use]
pub fn shorten_signature(signature: &str) -> String {
    let count = signature.chars().count();
    if count <= SIGNATURE_EDGE * 2 {
        return signature.to_string();
    }
    let head: String = signature.chars().take(SIGNATURE_EDGE).collect();
    let tail: String = signature.chars().skip(count - SIGNATURE_EDGE).collect();
    format!("{head}...{tail}")
}

/// Unix seconds as UTC `YYYY-MM-DD HH:MM:SS`; "Unknown" when absent or out of range.
#[must_use]
pub fn format_block_time(block_time: Option<i64>) -> String {
    block_time
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
