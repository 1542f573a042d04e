use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::rpc::{self, RpcRequest};
use super::traits::{AssetQuery, HoldingsFetcher, TransactionFetcher};
use crate::errors::CoreError;
use crate::models::account::AccountInfo;
use crate::models::token::AssetRecord;
use crate::models::transaction::{ConfirmationStatus, Transaction};

const PROVIDER: &str = "Helius";
const REQUEST_ID: &str = "wallet-dashboard";

/// Helius RPC provider: standard Solana JSON-RPC plus the DAS asset API.
///
/// - **Auth**: api key passed as the `api-key` query parameter.
/// - **Methods**: `getAccountInfo`, `getAssetsByOwner`, `getSignaturesForAddress`.
pub struct HeliusProvider {
    client: Client,
    /// Endpoint including the api key; never logged.
    endpoint: String,
    /// Endpoint without the key, for logs.
    base_url: String,
}

impl HeliusProvider {
    pub fn new(base_url: impl Into<String>, api_key: &str) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            endpoint: format!("{base_url}/?api-key={api_key}"),
            base_url,
        }
    }

    /// POST one JSON-RPC call and unwrap its `result`.
    async fn call<P, T>(&self, method: &str, params: P) -> Result<T, CoreError>
    where
        P: Serialize + Send,
        T: DeserializeOwned,
    {
        log::debug!("{PROVIDER}: {method} -> {}", self.base_url);
        let request = RpcRequest::new(REQUEST_ID, method, params);

        let resp = self.client.post(&self.endpoint).json(&request).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::api(PROVIDER, format!("{method} returned HTTP {status}")));
        }

        let body = super::decode_body(&resp.text().await?)?;

        rpc::parse_response(PROVIDER, method, body)
    }
}

// ── Helius response types ───────────────────────────────────────────

#[derive(Deserialize)]
struct AccountInfoResult {
    value: Option<AccountValue>,
}

#[derive(Deserialize)]
struct AccountValue {
    lamports: u64,
    owner: String,
    #[serde(default)]
    executable: bool,
}

#[derive(Deserialize)]
struct AssetPage {
    items: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignatureEntry {
    signature: String,
    #[serde(default)]
    slot: u64,
    #[serde(default)]
    err: Option<Value>,
    #[serde(default)]
    block_time: Option<i64>,
    #[serde(default)]
    confirmation_status: Option<ConfirmationStatus>,
}

impl From<SignatureEntry> for Transaction {
    fn from(entry: SignatureEntry) -> Self {
        Transaction {
            signature: entry.signature,
            slot: entry.slot,
            block_time: entry.block_time,
            confirmation_status: entry.confirmation_status,
            failed: entry.err.is_some_and(|e| !e.is_null()),
        }
    }
}

// ── Result parsing ──────────────────────────────────────────────────

/// Parse a `getAccountInfo` result. `value: null` means the account
/// does not exist.
pub fn parse_account_info(result: Value) -> Result<Option<AccountInfo>, CoreError> {
    let parsed: AccountInfoResult = serde_json::from_value(result)
        .map_err(|e| CoreError::malformed(PROVIDER, format!("getAccountInfo: {e}")))?;
    Ok(parsed.value.map(|v| AccountInfo {
        lamports: v.lamports,
        owner: v.owner,
        executable: v.executable,
    }))
}

/// Parse a `getAssetsByOwner` result into raw asset records.
///
/// A missing `items` array fails the call. Individual items that do not
/// even carry an id/interface are skipped with a warning.
pub fn parse_asset_page(result: Value) -> Result<Vec<AssetRecord>, CoreError> {
    let page: AssetPage = serde_json::from_value(result)
        .map_err(|e| CoreError::malformed(PROVIDER, format!("getAssetsByOwner: {e}")))?;

    let total = page.items.len();
    let records: Vec<AssetRecord> = page
        .items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<AssetRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("{PROVIDER}: skipping unreadable asset item: {e}");
                None
            }
        })
        .collect();

    log::debug!("{PROVIDER}: parsed {} of {total} asset items", records.len());
    Ok(records)
}

/// Parse a `getSignaturesForAddress` result, keeping the node's order.
pub fn parse_signatures(result: Value) -> Result<Vec<Transaction>, CoreError> {
    let entries: Vec<SignatureEntry> = serde_json::from_value(result)
        .map_err(|e| CoreError::malformed(PROVIDER, format!("getSignaturesForAddress: {e}")))?;
    Ok(entries.into_iter().map(Transaction::from).collect())
}

fn asset_params(address: &str, query: &AssetQuery) -> Value {
    json!({
        "ownerAddress": address,
        "page": query.page,
        "limit": query.limit,
        "sortBy": query.sort_by,
        "options": query.options,
    })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl HoldingsFetcher for HeliusProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_account_info(&self, address: &str) -> Result<Option<AccountInfo>, CoreError> {
        let result: Value = self
            .call("getAccountInfo", json!([address, { "encoding": "base64" }]))
            .await?;
        parse_account_info(result)
    }

    async fn fetch_assets(
        &self,
        address: &str,
        query: &AssetQuery,
    ) -> Result<Vec<AssetRecord>, CoreError> {
        let result: Value = self
            .call("getAssetsByOwner", asset_params(address, query))
            .await?;
        parse_asset_page(result)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TransactionFetcher for HeliusProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_signatures(
        &self,
        address: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Transaction>, CoreError> {
        let params = match limit {
            Some(limit) => json!([address, { "limit": limit }]),
            None => json!([address]),
        };
        let result: Value = self.call("getSignaturesForAddress", params).await?;
        parse_signatures(result)
    }
}
