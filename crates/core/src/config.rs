use crate::errors::CoreError;
use crate::models::token::{TokenFilter, DEFAULT_EXCLUDED_SYMBOLS};

pub const DEFAULT_RPC_URL: &str = "https://mainnet.helius-rpc.com";
pub const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_ACCOUNT_ADDRESS: &str = "MJKqp326RZCHnAAbew9MDdui3iCKWco7fsK9sVuZTX2";
pub const DEFAULT_COIN_ID: &str = "solana";
pub const DEFAULT_VS_CURRENCY: &str = "usd";

pub const ENV_RPC_URL: &str = "HELIUS_RPC_URL";
pub const ENV_API_KEY: &str = "HELIUS_API_KEY";
pub const ENV_ACCOUNT_ADDRESS: &str = "WALLET_ADDRESS";
pub const ENV_PRICE_API_URL: &str = "PRICE_API_URL";
pub const ENV_COIN_ID: &str = "PRICE_COIN_ID";
pub const ENV_VS_CURRENCY: &str = "PRICE_VS_CURRENCY";
pub const ENV_EXCLUDED_SYMBOLS: &str = "EXCLUDED_SYMBOLS";

/// Runtime configuration of the dashboard.
///
/// The RPC api key is a secret: it is never compiled in, only injected
/// through the environment (or the frontend's build-time env on WASM).
#[derive(Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Helius RPC base URL, without the api-key query
    pub rpc_url: String,

    /// Helius api key
    pub api_key: String,

    /// Base58 address of the tracked wallet
    pub account_address: String,

    /// Base URL of the CoinGecko-compatible price API
    pub price_api_url: String,

    /// Price-API id of the native coin
    pub coin_id: String,

    /// Fiat currency for the native price
    pub vs_currency: String,

    /// Token symbols never shown in the portfolio
    pub excluded_symbols: Vec<String>,

    /// Maximum number of signatures to request (`None` = node default)
    pub signature_limit: Option<usize>,
}

impl std::fmt::Debug for DashboardConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardConfig")
            .field("rpc_url", &self.rpc_url)
            .field("api_key", &"<redacted>")
            .field("account_address", &self.account_address)
            .field("price_api_url", &self.price_api_url)
            .field("coin_id", &self.coin_id)
            .field("vs_currency", &self.vs_currency)
            .field("excluded_symbols", &self.excluded_symbols)
            .field("signature_limit", &self.signature_limit)
            .finish()
    }
}

impl DashboardConfig {
    /// Defaults for everything except the api key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            api_key: api_key.into(),
            account_address: DEFAULT_ACCOUNT_ADDRESS.to_string(),
            price_api_url: DEFAULT_PRICE_API_URL.to_string(),
            coin_id: DEFAULT_COIN_ID.to_string(),
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            excluded_symbols: DEFAULT_EXCLUDED_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            signature_limit: None,
        }
    }

    /// Load from the process environment, reading `.env` first if present.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, CoreError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup and validate the result.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_key = get(ENV_API_KEY)
            .ok_or_else(|| CoreError::InvalidConfig(format!("{ENV_API_KEY} is not set")))?;

        let mut config = Self::new(api_key);
        if let Some(url) = get(ENV_RPC_URL) {
            config.rpc_url = url;
        }
        if let Some(address) = get(ENV_ACCOUNT_ADDRESS) {
            config.account_address = address;
        }
        if let Some(url) = get(ENV_PRICE_API_URL) {
            config.price_api_url = url;
        }
        if let Some(coin) = get(ENV_COIN_ID) {
            config.coin_id = coin.to_lowercase();
        }
        if let Some(currency) = get(ENV_VS_CURRENCY) {
            config.vs_currency = currency.to_lowercase();
        }
        if let Some(symbols) = get(ENV_EXCLUDED_SYMBOLS) {
            config.excluded_symbols = symbols
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_account(mut self, address: impl Into<String>) -> Self {
        self.account_address = address.into();
        self
    }

    pub fn with_signature_limit(mut self, limit: usize) -> Self {
        self.signature_limit = Some(limit);
        self
    }

    /// Check the api key, URLs and account address.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.api_key.trim().is_empty() {
            return Err(CoreError::InvalidConfig(format!("{ENV_API_KEY} must not be empty")));
        }
        for (name, url) in [("rpc_url", &self.rpc_url), ("price_api_url", &self.price_api_url)] {
            if !(url.starts_with("https://") || url.starts_with("http://")) {
                return Err(CoreError::InvalidConfig(format!(
                    "{name} must be an http(s) URL, got '{url}'"
                )));
            }
        }
        if self.coin_id.is_empty() || self.vs_currency.is_empty() {
            return Err(CoreError::InvalidConfig("coin id and currency must be set".into()));
        }
        validate_address(&self.account_address)
    }

    /// Full RPC endpoint including the api key. Never log this.
    #[must_use]
    pub fn rpc_endpoint(&self) -> String {
        format!("{}/?api-key={}", self.rpc_url.trim_end_matches('/'), self.api_key)
    }

    #[must_use]
    pub fn token_filter(&self) -> TokenFilter {
        TokenFilter::new(self.excluded_symbols.iter().cloned())
    }
}

/// Check that `address` is a base58-encoded 32-byte public key.
pub fn validate_address(address: &str) -> Result<(), CoreError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| CoreError::InvalidAddress(format!("'{address}' is not base58: {e}")))?;
    if bytes.len() != 32 {
        return Err(CoreError::InvalidAddress(format!(
            "'{address}' decodes to {} bytes, expected 32",
            bytes.len()
        )));
    }
    Ok(())
}
