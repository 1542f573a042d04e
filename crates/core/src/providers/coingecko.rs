use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::PriceFetcher;
use crate::errors::CoreError;
use crate::models::price::PriceQuote;

const PROVIDER: &str = "CoinGecko";

/// CoinGecko `simple/price` provider for the native coin.
///
/// - **Free**: No API key required for the public endpoint.
/// - **Endpoint**: `/simple/price?ids={coin}&vs_currencies={fiat}`
/// - **Response**: `{ "<coin>": { "<fiat>": <number> } }`
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
    coin_id: String,
    vs_currency: String,
}

impl CoinGeckoProvider {
    pub fn new(
        base_url: impl Into<String>,
        coin_id: impl Into<String>,
        vs_currency: impl Into<String>,
    ) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            coin_id: coin_id.into(),
            vs_currency: vs_currency.into(),
        }
    }

    /// SOL priced in USD against the public API.
    pub fn solana_usd() -> Self {
        Self::new(crate::config::DEFAULT_PRICE_API_URL, "solana", "usd")
    }

    fn url(&self) -> String {
        format!(
            "{}/simple/price?ids={}&vs_currencies={}",
            self.base_url, self.coin_id, self.vs_currency
        )
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::solana_usd()
    }
}

/// Extract `body[coin][currency]` as a finite, non-negative price.
pub fn parse_simple_price(body: &Value, coin_id: &str, currency: &str) -> Result<f64, CoreError> {
    let price = body
        .get(coin_id)
        .and_then(|entry| entry.get(currency))
        .ok_or_else(|| {
            CoreError::malformed(PROVIDER, format!("No {currency} price for {coin_id} in response"))
        })?
        .as_f64()
        .ok_or_else(|| {
            CoreError::malformed(PROVIDER, format!("Price for {coin_id} is not a number"))
        })?;

    if !price.is_finite() || price < 0.0 {
        return Err(CoreError::malformed(
            PROVIDER,
            format!("Invalid price returned for {coin_id}: {price} (must be finite and non-negative)"),
        ));
    }
    Ok(price)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PriceFetcher for CoinGeckoProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn fetch_native_price(&self) -> Result<PriceQuote, CoreError> {
        let url = self.url();
        log::debug!("{PROVIDER}: GET {url}");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::api(PROVIDER, format!("simple/price returned HTTP {status}")));
        }

        let body = super::decode_body(&resp.text().await?)?;

        let price = parse_simple_price(&body, &self.coin_id, &self.vs_currency)?;
        Ok(PriceQuote::new(&self.coin_id, &self.vs_currency, price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_simple_price_url() {
        let provider = CoinGeckoProvider::new("https://api.example/v3/", "solana", "usd");
        assert_eq!(
            provider.url(),
            "https://api.example/v3/simple/price?ids=solana&vs_currencies=usd"
        );
    }
}
