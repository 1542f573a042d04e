use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::account::AccountInfo;
use crate::models::price::PriceQuote;
use crate::models::token::AssetRecord;
use crate::models::transaction::Transaction;

/// Source of the native coin's spot price.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PriceFetcher: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Current fiat price of one native unit. No retries.
    async fn fetch_native_price(&self) -> Result<PriceQuote, CoreError>;
}

/// Source of the wallet's native balance and raw asset list.
///
/// Implementations return the asset list unfiltered; the retention filter
/// is applied by `FetchService` before anything is aggregated.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait HoldingsFetcher: Send + Sync {
    fn name(&self) -> &str;

    /// Account metadata, or `None` when the account does not exist on chain.
    async fn fetch_account_info(&self, address: &str) -> Result<Option<AccountInfo>, CoreError>;

    /// One page of assets owned by `address`.
    async fn fetch_assets(
        &self,
        address: &str,
        query: &AssetQuery,
    ) -> Result<Vec<AssetRecord>, CoreError>;
}

/// Source of the wallet's signature history.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TransactionFetcher: Send + Sync {
    fn name(&self) -> &str;

    /// Recent signatures, newest first, exactly as the node orders them.
    async fn fetch_signatures(
        &self,
        address: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Transaction>, CoreError>;
}

// ── Asset query ─────────────────────────────────────────────────────

/// Paging, sorting and display options for an owner's asset listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetQuery {
    pub page: u32,
    pub limit: u32,
    pub sort_by: AssetSort,
    pub options: AssetDisplayOptions,
}

impl Default for AssetQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 100,
            sort_by: AssetSort::default(),
            options: AssetDisplayOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSort {
    pub sort_by: AssetSortField,
    pub sort_direction: SortDirection,
}

impl Default for AssetSort {
    fn default() -> Self {
        Self {
            sort_by: AssetSortField::Created,
            sort_direction: SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSortField {
    Created,
    Updated,
    RecentAction,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// DAS `options` block. Defaults hide zero balances, unverified
/// collections and inscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDisplayOptions {
    pub show_unverified_collections: bool,
    pub show_collection_metadata: bool,
    pub show_grand_total: bool,
    pub show_fungible: bool,
    pub show_native_balance: bool,
    pub show_inscription: bool,
    pub show_zero_balance: bool,
}

impl Default for AssetDisplayOptions {
    fn default() -> Self {
        Self {
            show_unverified_collections: false,
            show_collection_metadata: true,
            show_grand_total: true,
            show_fungible: true,
            show_native_balance: true,
            show_inscription: false,
            show_zero_balance: false,
        }
    }
}
