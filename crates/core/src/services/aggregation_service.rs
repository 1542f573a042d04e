use crate::models::account::{lamports_to_sol, AccountInfo};
use crate::models::portfolio::{AssetValuation, PortfolioValuation, WalletSnapshot};
use crate::models::price::PriceQuote;
use crate::models::token::TokenHolding;

/// Values the wallet in fiat.
///
/// Pure business logic: no I/O, no errors. Missing data (no account,
/// no token total, an unusable price) contributes zero.
pub struct AggregationService;

impl AggregationService {
    pub fn new() -> Self {
        Self
    }

    /// (lamports / 10^9) × price. A non-finite or negative price counts as 0.
    #[must_use]
    pub fn native_value_usd(lamports: u64, usd_per_sol: f64) -> f64 {
        if !usd_per_sol.is_finite() || usd_per_sol < 0.0 {
            return 0.0;
        }
        lamports_to_sol(lamports) * usd_per_sol
    }

    /// Compute native, per-token and total values.
    ///
    /// Token values are the node-provided `total_price`, used as-is.
    #[must_use]
    pub fn aggregate(
        &self,
        account: Option<&AccountInfo>,
        price: &PriceQuote,
        holdings: &[TokenHolding],
    ) -> PortfolioValuation {
        let lamports = account.map(|a| a.lamports).unwrap_or(0);
        let native_value_usd = Self::native_value_usd(lamports, price.usd_per_native_unit);

        let tokens: Vec<AssetValuation> = holdings
            .iter()
            .map(|h| AssetValuation {
                symbol: h.symbol.clone(),
                value_usd: h.value_usd(),
            })
            .collect();
        let token_value_usd: f64 = tokens.iter().map(|t| t.value_usd).sum();

        PortfolioValuation {
            native_balance: lamports_to_sol(lamports),
            native_value_usd,
            tokens,
            token_value_usd,
            total_value_usd: native_value_usd + token_value_usd,
        }
    }

    #[must_use]
    pub fn value_snapshot(&self, snapshot: &WalletSnapshot) -> PortfolioValuation {
        self.aggregate(snapshot.account.as_ref(), &snapshot.price, &snapshot.holdings)
    }
}

impl Default for AggregationService {
    fn default() -> Self {
        Self::new()
    }
}
