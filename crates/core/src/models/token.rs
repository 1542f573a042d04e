use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Symbols dropped from the portfolio unless configured otherwise.
pub const DEFAULT_EXCLUDED_SYMBOLS: &[&str] = &["KURT"];

/// Symbol of an asset that names none.
pub const UNKNOWN_SYMBOL: &str = "Unknown";

/// DAS asset interface. Only `FungibleToken` entries can become holdings.
///
/// Parsing is lenient: interface strings this crate does not know about
/// are kept verbatim in `Other` instead of failing the whole asset list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InterfaceKind {
    FungibleToken,
    FungibleAsset,
    NonFungibleToken,
    ProgrammableNft,
    Custom,
    Other(String),
}

impl From<String> for InterfaceKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "FungibleToken" => InterfaceKind::FungibleToken,
            "FungibleAsset" => InterfaceKind::FungibleAsset,
            "NonFungibleToken" | "V1_NFT" => InterfaceKind::NonFungibleToken,
            "ProgrammableNFT" => InterfaceKind::ProgrammableNft,
            "Custom" => InterfaceKind::Custom,
            _ => InterfaceKind::Other(s),
        }
    }
}

impl From<InterfaceKind> for String {
    fn from(kind: InterfaceKind) -> Self {
        kind.to_string()
    }
}

impl std::fmt::Display for InterfaceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InterfaceKind::FungibleToken => write!(f, "FungibleToken"),
            InterfaceKind::FungibleAsset => write!(f, "FungibleAsset"),
            InterfaceKind::NonFungibleToken => write!(f, "NonFungibleToken"),
            InterfaceKind::ProgrammableNft => write!(f, "ProgrammableNFT"),
            InterfaceKind::Custom => write!(f, "Custom"),
            InterfaceKind::Other(s) => write!(f, "{s}"),
        }
    }
}

// ── Raw DAS asset (unfiltered) ──────────────────────────────────────

/// One item of a `getAssetsByOwner` result, as returned by the node.
///
/// Everything except `id` and `interface` may be missing depending on the
/// asset class, so the fields mirror the wire shape with `Option`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Mint address of the asset
    pub id: String,

    pub interface: InterfaceKind,

    #[serde(default)]
    pub content: Option<AssetContent>,

    #[serde(default)]
    pub token_info: Option<TokenInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetContent {
    #[serde(default)]
    pub links: Option<AssetLinks>,

    #[serde(default)]
    pub metadata: Option<AssetMetadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetLinks {
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetMetadata {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub symbol: Option<String>,

    /// Raw balance in the token's minor units
    #[serde(default)]
    pub balance: Option<u64>,

    #[serde(default)]
    pub decimals: Option<u8>,

    #[serde(default)]
    pub price_info: Option<PriceInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    #[serde(default)]
    pub price_per_token: Option<f64>,

    /// price_per_token × display balance, computed by the node
    #[serde(default)]
    pub total_price: Option<f64>,

    #[serde(default)]
    pub currency: Option<String>,
}

impl AssetRecord {
    /// Symbol shown for the asset: the token info's, else the metadata's,
    /// else "Unknown". The retention filter checks this same value.
    #[must_use]
    pub fn display_symbol(&self) -> &str {
        let from_info = self.token_info.as_ref().and_then(|i| i.symbol.as_deref());
        let from_metadata = self
            .content
            .as_ref()
            .and_then(|c| c.metadata.as_ref())
            .and_then(|m| m.symbol.as_deref());
        from_info.or(from_metadata).unwrap_or(UNKNOWN_SYMBOL)
    }
}

// ── Retained holding ────────────────────────────────────────────────

/// A priced fungible token balance that passed the retention filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenHolding {
    /// Mint address
    pub mint: String,

    pub symbol: String,

    pub name: Option<String>,

    pub image_url: Option<String>,

    /// Raw balance in minor units
    pub balance: u64,

    /// Declared decimals of the mint
    pub decimals: u8,

    pub price_per_token: f64,

    /// Node-computed fiat value of the whole balance. `None` counts as zero.
    pub total_price: Option<f64>,

    pub interface: InterfaceKind,
}

impl TokenHolding {
    /// Balance scaled by the token's declared decimals.
    #[must_use]
    pub fn ui_balance(&self) -> f64 {
        self.balance as f64 / 10f64.powi(i32::from(self.decimals))
    }

    /// Fiat value used for every total and chart slice.
    #[must_use]
    pub fn value_usd(&self) -> f64 {
        self.total_price.unwrap_or(0.0)
    }
}

/// Decides which raw assets become portfolio holdings.
///
/// An asset is kept only when it is a `FungibleToken`, carries token info
/// with a per-token price, and its symbol is not excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenFilter {
    excluded_symbols: BTreeSet<String>,
}

impl TokenFilter {
    pub fn new<I, S>(excluded_symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded_symbols: excluded_symbols.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn excluded_symbols(&self) -> &BTreeSet<String> {
        &self.excluded_symbols
    }

    #[must_use]
    pub fn is_retained(&self, asset: &AssetRecord) -> bool {
        if asset.interface != InterfaceKind::FungibleToken {
            return false;
        }
        let Some(info) = &asset.token_info else {
            return false;
        };
        let priced = info
            .price_info
            .as_ref()
            .and_then(|p| p.price_per_token)
            .is_some();
        if !priced {
            return false;
        }
        !self.excluded_symbols.contains(asset.display_symbol())
    }

    /// Filter and convert raw assets, keeping the provider's order.
    #[must_use]
    pub fn retain(&self, assets: Vec<AssetRecord>) -> Vec<TokenHolding> {
        assets
            .into_iter()
            .filter(|a| self.is_retained(a))
            .filter_map(into_holding)
            .collect()
    }
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_SYMBOLS.iter().copied())
    }
}

fn into_holding(asset: AssetRecord) -> Option<TokenHolding> {
    let symbol = asset.display_symbol().to_string();
    let info = asset.token_info?;
    let price_info = info.price_info?;
    let price_per_token = price_info.price_per_token?;

    let (image_url, metadata) = match asset.content {
        Some(content) => (content.links.and_then(|l| l.image), content.metadata),
        None => (None, None),
    };
    let metadata = metadata.unwrap_or_default();

    Some(TokenHolding {
        mint: asset.id,
        symbol,
        name: metadata.name,
        image_url,
        balance: info.balance.unwrap_or(0),
        decimals: info.decimals.unwrap_or(0),
        price_per_token,
        total_price: price_info.total_price,
        interface: asset.interface,
    })
}
