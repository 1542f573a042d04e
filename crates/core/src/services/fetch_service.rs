use futures::future::{AbortRegistration, Abortable};

use crate::errors::CoreError;
use crate::models::portfolio::WalletSnapshot;
use crate::models::token::TokenFilter;
use crate::providers::registry::DataSources;
use crate::providers::traits::AssetQuery;

/// Gathers everything one dashboard load needs.
///
/// The account, asset, price and signature requests are independent, so
/// they run concurrently and are joined fail-fast: the first error aborts
/// the remaining requests and is returned as-is. There is no partial
/// snapshot and no retry.
pub struct FetchService {
    sources: DataSources,
    filter: TokenFilter,
    asset_query: AssetQuery,
    signature_limit: Option<usize>,
}

impl FetchService {
    pub fn new(sources: DataSources, filter: TokenFilter) -> Self {
        Self {
            sources,
            filter,
            asset_query: AssetQuery::default(),
            signature_limit: None,
        }
    }

    pub fn with_asset_query(mut self, query: AssetQuery) -> Self {
        self.asset_query = query;
        self
    }

    pub fn with_signature_limit(mut self, limit: Option<usize>) -> Self {
        self.signature_limit = limit;
        self
    }

    #[must_use]
    pub fn sources(&self) -> &DataSources {
        &self.sources
    }

    #[must_use]
    pub fn filter(&self) -> &TokenFilter {
        &self.filter
    }

    /// Fetch and join all data for `address`, applying the retention filter
    /// to the asset list.
    pub async fn fetch_snapshot(&self, address: &str) -> Result<WalletSnapshot, CoreError> {
        log::info!("Loading wallet data for {address}");

        let (account, assets, price, transactions) = futures::try_join!(
            self.sources.holdings.fetch_account_info(address),
            self.sources.holdings.fetch_assets(address, &self.asset_query),
            self.sources.price.fetch_native_price(),
            self.sources
                .transactions
                .fetch_signatures(address, self.signature_limit),
        )
        .map_err(|e| {
            log::warn!("Wallet load for {address} failed: {e}");
            e
        })?;

        let fetched = assets.len();
        let holdings = self.filter.retain(assets);
        if holdings.len() < fetched {
            log::debug!(
                "Retention filter dropped {} of {fetched} assets",
                fetched - holdings.len()
            );
        }
        if account.is_none() {
            log::warn!("Account {address} does not exist on chain; native balance counts as 0");
        }

        log::info!(
            "Loaded {address}: {} holdings, {} transactions, price {} {}",
            holdings.len(),
            transactions.len(),
            price.usd_per_native_unit,
            price.currency,
        );

        Ok(WalletSnapshot {
            address: address.to_string(),
            account,
            price,
            holdings,
            transactions,
        })
    }

    /// Same as `fetch_snapshot`, but resolves to `CoreError::Cancelled` as
    /// soon as the matching `AbortHandle` is triggered. In-flight requests
    /// are dropped.
    pub async fn fetch_snapshot_abortable(
        &self,
        address: &str,
        registration: AbortRegistration,
    ) -> Result<WalletSnapshot, CoreError> {
        Abortable::new(self.fetch_snapshot(address), registration).await?
    }
}
