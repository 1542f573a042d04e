// ═══════════════════════════════════════════════════════════════════
// Provider Tests — JSON-RPC envelope, Helius/CoinGecko parsing,
// asset query, DataSources
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use wallet_dashboard_core::config::DashboardConfig;
use wallet_dashboard_core::errors::CoreError;
use wallet_dashboard_core::models::account::AccountInfo;
use wallet_dashboard_core::models::price::PriceQuote;
use wallet_dashboard_core::models::token::{AssetRecord, InterfaceKind};
use wallet_dashboard_core::models::transaction::{ConfirmationStatus, Transaction};
use wallet_dashboard_core::providers::coingecko::{parse_simple_price, CoinGeckoProvider};
use wallet_dashboard_core::providers::helius::{
    parse_account_info, parse_asset_page, parse_signatures, HeliusProvider,
};
use wallet_dashboard_core::providers::decode_body;
use wallet_dashboard_core::providers::registry::DataSources;
use wallet_dashboard_core::providers::rpc::parse_response;
use wallet_dashboard_core::providers::traits::{
    AssetQuery, AssetSortField, HoldingsFetcher, PriceFetcher, SortDirection, TransactionFetcher,
};

// ═══════════════════════════════════════════════════════════════════
// Test Helpers — Mock Providers
// ═══════════════════════════════════════════════════════════════════

struct FixedPrice(f64);

#[async_trait]
impl PriceFetcher for FixedPrice {
    fn name(&self) -> &str {
        "FixedPrice"
    }

    async fn fetch_native_price(&self) -> Result<PriceQuote, CoreError> {
        Ok(PriceQuote::sol_usd(self.0))
    }
}

struct EmptyChain;

#[async_trait]
impl HoldingsFetcher for EmptyChain {
    fn name(&self) -> &str {
        "EmptyChain"
    }

    async fn fetch_account_info(&self, _address: &str) -> Result<Option<AccountInfo>, CoreError> {
        Ok(None)
    }

    async fn fetch_assets(
        &self,
        _address: &str,
        _query: &AssetQuery,
    ) -> Result<Vec<AssetRecord>, CoreError> {
        Ok(vec![])
    }
}

#[async_trait]
impl TransactionFetcher for EmptyChain {
    fn name(&self) -> &str {
        "EmptyChain"
    }

    async fn fetch_signatures(
        &self,
        _address: &str,
        _limit: Option<usize>,
    ) -> Result<Vec<Transaction>, CoreError> {
        Ok(vec![])
    }
}

fn config() -> DashboardConfig {
    DashboardConfig::new("test-key")
}

// ═══════════════════════════════════════════════════════════════════
// JSON-RPC envelope
// ═══════════════════════════════════════════════════════════════════

mod rpc_envelope {
    use super::*;

    #[test]
    fn returns_typed_result() {
        let body = json!({ "jsonrpc": "2.0", "id": "x", "result": { "value": 5 } });
        let v: serde_json::Value = parse_response("Helius", "getBalance", body).unwrap();
        assert_eq!(v["value"], 5);
    }

    #[test]
    fn rpc_error_becomes_api_error() {
        let body = json!({ "error": { "code": -32600, "message": "bad" } });
        let err = parse_response::<serde_json::Value>("Helius", "getAssetsByOwner", body).unwrap_err();
        match err {
            CoreError::Api { provider, message } => {
                assert_eq!(provider, "Helius");
                assert!(message.contains("-32600"));
                assert!(message.contains("bad"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn unstructured_error_is_still_reported() {
        let body = json!({ "error": "rate limited" });
        let err = parse_response::<serde_json::Value>("Helius", "getAccountInfo", body).unwrap_err();
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn mistyped_result_is_malformed() {
        let body = json!({ "result": "not a number" });
        let err = parse_response::<u64>("Helius", "getBalance", body).unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse { .. }));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Response body decoding
// ═══════════════════════════════════════════════════════════════════

mod body_decoding {
    use super::*;

    #[test]
    fn json_body_decodes() {
        let v = decode_body(r#"{ "solana": { "usd": 150.0 } }"#).unwrap();
        assert_eq!(parse_simple_price(&v, "solana", "usd").unwrap(), 150.0);
    }

    #[test]
    fn non_json_body_is_deserialization_error() {
        let err = decode_body("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
        assert!(err.to_string().starts_with("Deserialization error: "));
    }

    #[test]
    fn wrong_shape_is_left_to_the_parser() {
        let v = decode_body("[]").unwrap();
        let err = parse_asset_page(v).unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse { .. }));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Helius — getAccountInfo
// ═══════════════════════════════════════════════════════════════════

mod helius_account_info {
    use super::*;

    #[test]
    fn parses_existing_account() {
        let result = json!({
            "context": { "slot": 1 },
            "value": {
                "lamports": 2_000_000_000u64,
                "owner": "11111111111111111111111111111111",
                "executable": false,
                "data": ["", "base64"],
                "rentEpoch": 18446744073709551615u64,
                "space": 0
            }
        });
        let info = parse_account_info(result).unwrap().unwrap();
        assert_eq!(info.lamports, 2_000_000_000);
        assert_eq!(info.owner, "11111111111111111111111111111111");
        assert!(!info.executable);
    }

    #[test]
    fn null_value_means_missing_account() {
        let result = json!({ "context": { "slot": 1 }, "value": null });
        assert!(parse_account_info(result).unwrap().is_none());
    }

    #[test]
    fn negative_lamports_are_rejected() {
        let result = json!({ "value": { "lamports": -5, "owner": "x" } });
        let err = parse_account_info(result).unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse { .. }));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Helius — getAssetsByOwner
// ═══════════════════════════════════════════════════════════════════

mod helius_assets {
    use super::*;

    #[test]
    fn parses_items() {
        let result = json!({
            "total": 2,
            "limit": 100,
            "page": 1,
            "items": [
                {
                    "id": "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
                    "interface": "FungibleToken",
                    "token_info": {
                        "symbol": "USDC",
                        "balance": 10_500_000,
                        "decimals": 6,
                        "price_info": { "price_per_token": 1.0, "total_price": 10.5, "currency": "USDC" }
                    }
                },
                { "id": "Nft1", "interface": "V1_NFT" }
            ],
            "nativeBalance": { "lamports": 1, "price_per_sol": 150.0, "total_price": 0.0 }
        });
        let items = parse_asset_page(result).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].interface, InterfaceKind::FungibleToken);
        assert_eq!(items[1].interface, InterfaceKind::NonFungibleToken);
    }

    #[test]
    fn missing_items_is_malformed() {
        let err = parse_asset_page(json!({ "total": 0 })).unwrap_err();
        match err {
            CoreError::MalformedResponse { provider, message } => {
                assert_eq!(provider, "Helius");
                assert!(message.contains("items"));
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn unreadable_item_is_skipped() {
        let result = json!({ "items": [ { "interface": "FungibleToken" }, { "id": "ok", "interface": "Custom" } ] });
        let items = parse_asset_page(result).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "ok");
    }

    #[test]
    fn empty_items_is_fine() {
        assert!(parse_asset_page(json!({ "items": [] })).unwrap().is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Helius — getSignaturesForAddress
// ═══════════════════════════════════════════════════════════════════

mod helius_signatures {
    use super::*;

    #[test]
    fn preserves_node_order_and_fields() {
        let result = json!([
            { "signature": "newest", "slot": 300, "err": null, "memo": null,
              "blockTime": 1_700_000_300, "confirmationStatus": "finalized" },
            { "signature": "older", "slot": 100, "err": { "InstructionError": [0, "Custom"] },
              "memo": null, "blockTime": 1_700_000_500, "confirmationStatus": "confirmed" },
            { "signature": "oldest", "slot": 50, "blockTime": null, "confirmationStatus": null }
        ]);
        let txs = parse_signatures(result).unwrap();
        let sigs: Vec<&str> = txs.iter().map(|t| t.signature.as_str()).collect();
        assert_eq!(sigs, vec!["newest", "older", "oldest"]);

        assert_eq!(txs[0].slot, 300);
        assert_eq!(txs[0].block_time, Some(1_700_000_300));
        assert_eq!(txs[0].confirmation_status, Some(ConfirmationStatus::Finalized));
        assert!(!txs[0].failed);

        assert!(txs[1].failed);
        assert_eq!(txs[1].confirmation_status, Some(ConfirmationStatus::Confirmed));

        assert_eq!(txs[2].block_time, None);
        assert_eq!(txs[2].confirmation_status, None);
    }

    #[test]
    fn non_array_result_is_malformed() {
        let err = parse_signatures(json!({ "signature": "x" })).unwrap_err();
        assert!(matches!(err, CoreError::MalformedResponse { .. }));
    }
}

// ═══════════════════════════════════════════════════════════════════
// CoinGecko
// ═══════════════════════════════════════════════════════════════════

mod coingecko {
    use super::*;

    #[test]
    fn parses_simple_price() {
        let body = json!({ "solana": { "usd": 150.25 } });
        assert_eq!(parse_simple_price(&body, "solana", "usd").unwrap(), 150.25);
    }

    #[test]
    fn integer_price_is_accepted() {
        let body = json!({ "solana": { "usd": 150 } });
        assert_eq!(parse_simple_price(&body, "solana", "usd").unwrap(), 150.0);
    }

    #[test]
    fn missing_coin_is_malformed() {
        let body = json!({});
        let err = parse_simple_price(&body, "solana", "usd").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed response (CoinGecko): No usd price for solana in response"
        );
    }

    #[test]
    fn missing_currency_is_malformed() {
        let body = json!({ "solana": { "eur": 140.0 } });
        assert!(parse_simple_price(&body, "solana", "usd").is_err());
    }

    #[test]
    fn non_numeric_price_is_malformed() {
        let body = json!({ "solana": { "usd": "150" } });
        let err = parse_simple_price(&body, "solana", "usd").unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn negative_price_is_rejected() {
        let body = json!({ "solana": { "usd": -1.0 } });
        let err = parse_simple_price(&body, "solana", "usd").unwrap_err();
        assert!(err.to_string().contains("must be finite and non-negative"));
    }

    #[test]
    fn provider_name() {
        assert_eq!(CoinGeckoProvider::default().name(), "CoinGecko");
    }
}

// ═══════════════════════════════════════════════════════════════════
// AssetQuery
// ═══════════════════════════════════════════════════════════════════

mod asset_query {
    use super::*;

    #[test]
    fn defaults_match_dashboard_listing() {
        let q = AssetQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 100);
        assert_eq!(q.sort_by.sort_by, AssetSortField::Created);
        assert_eq!(q.sort_by.sort_direction, SortDirection::Desc);
        assert!(!q.options.show_zero_balance);
        assert!(!q.options.show_unverified_collections);
        assert!(!q.options.show_inscription);
        assert!(q.options.show_fungible);
        assert!(q.options.show_native_balance);
    }

    #[test]
    fn serializes_camel_case() {
        let v = serde_json::to_value(AssetQuery::default()).unwrap();
        assert_eq!(v["sortBy"]["sortBy"], "created");
        assert_eq!(v["sortBy"]["sortDirection"], "desc");
        assert_eq!(v["options"]["showZeroBalance"], false);
        assert_eq!(v["options"]["showGrandTotal"], true);
    }
}

// ═══════════════════════════════════════════════════════════════════
// DataSources
// ═══════════════════════════════════════════════════════════════════

mod data_sources {
    use super::*;

    #[test]
    fn defaults_use_helius_and_coingecko() {
        let sources = DataSources::new_with_defaults(&config());
        let (price, holdings, transactions) = sources.provider_names();
        assert_eq!(price, "CoinGecko");
        assert_eq!(holdings, "Helius");
        assert_eq!(transactions, "Helius");
    }

    #[test]
    fn providers_can_be_swapped_individually() {
        let sources = DataSources::new_with_defaults(&config())
            .with_price(Arc::new(FixedPrice(1.0)))
            .with_transactions(Arc::new(EmptyChain));
        let (price, holdings, transactions) = sources.provider_names();
        assert_eq!(price, "FixedPrice");
        assert_eq!(holdings, "Helius");
        assert_eq!(transactions, "EmptyChain");
    }

    #[test]
    fn debug_lists_provider_names_only() {
        let sources = DataSources::new(
            Arc::new(FixedPrice(1.0)),
            Arc::new(EmptyChain),
            Arc::new(HeliusProvider::new("https://rpc.example", "secret-key")),
        );
        let dbg = format!("{sources:?}");
        assert!(dbg.contains("FixedPrice"));
        assert!(!dbg.contains("secret-key"));
    }

    #[tokio::test]
    async fn mocks_are_callable_through_trait_objects() {
        let sources = DataSources::new(
            Arc::new(FixedPrice(42.0)),
            Arc::new(EmptyChain),
            Arc::new(EmptyChain),
        );
        let quote = sources.price.fetch_native_price().await.unwrap();
        assert_eq!(quote.usd_per_native_unit, 42.0);
        assert!(sources.holdings.fetch_account_info("x").await.unwrap().is_none());
        assert!(sources
            .transactions
            .fetch_signatures("x", Some(10))
            .await
            .unwrap()
            .is_empty());
    }
}
