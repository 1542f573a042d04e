use std::sync::Arc;

use super::coingecko::CoinGeckoProvider;
use super::helius::HeliusProvider;
use super::traits::{HoldingsFetcher, PriceFetcher, TransactionFetcher};
use crate::config::DashboardConfig;

/// The set of data sources one dashboard session reads from.
///
/// Each concern has exactly one provider. Defaults come from the
/// configuration; any of them can be swapped independently (mocks in tests,
/// a different RPC vendor, a different price API).
#[derive(Clone)]
pub struct DataSources {
    pub price: Arc<dyn PriceFetcher>,
    pub holdings: Arc<dyn HoldingsFetcher>,
    pub transactions: Arc<dyn TransactionFetcher>,
}

impl DataSources {
    pub fn new(
        price: Arc<dyn PriceFetcher>,
        holdings: Arc<dyn HoldingsFetcher>,
        transactions: Arc<dyn TransactionFetcher>,
    ) -> Self {
        Self {
            price,
            holdings,
            transactions,
        }
    }

    /// CoinGecko for the price, Helius for holdings and history.
    pub fn new_with_defaults(config: &DashboardConfig) -> Self {
        let helius = Arc::new(HeliusProvider::new(&config.rpc_url, &config.api_key));
        let price = Arc::new(CoinGeckoProvider::new(
            &config.price_api_url,
            &config.coin_id,
            &config.vs_currency,
        ));
        Self {
            price,
            holdings: helius.clone(),
            transactions: helius,
        }
    }

    pub fn with_price(mut self, price: Arc<dyn PriceFetcher>) -> Self {
        self.price = price;
        self
    }

    pub fn with_holdings(mut self, holdings: Arc<dyn HoldingsFetcher>) -> Self {
        self.holdings = holdings;
        self
    }

    pub fn with_transactions(mut self, transactions: Arc<dyn TransactionFetcher>) -> Self {
        self.transactions = transactions;
        self
    }

    /// Provider names as (price, holdings, transactions).
    #[must_use]
    pub fn provider_names(&self) -> (String, String, String) {
        (
            self.price.name().to_string(),
            self.holdings.name().to_string(),
            self.transactions.name().to_string(),
        )
    }
}

impl std::fmt::Debug for DataSources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSources")
            .field("price", &self.price.name())
            .field("holdings", &self.holdings.name())
            .field("transactions", &self.transactions.name())
            .finish()
    }
}
