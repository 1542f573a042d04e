use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CoreError;

/// Which dashboard view is currently shown. Exactly one value is active;
/// `None` means the user has not picked a view yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    None,
    AccountDetails,
    PortfolioDetails,
    TransactionDetails,
}

impl ViewState {
    /// The three views a user can select, in menu order.
    pub const SELECTABLE: [ViewState; 3] = [
        ViewState::AccountDetails,
        ViewState::PortfolioDetails,
        ViewState::TransactionDetails,
    ];

    /// Menu title for the view.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            ViewState::None => "",
            ViewState::AccountDetails => "Account Details",
            ViewState::PortfolioDetails => "Portfolio Details",
            ViewState::TransactionDetails => "Transaction Details",
        }
    }

    /// Menu description for the view.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            ViewState::None => "",
            ViewState::AccountDetails => "View details of the Solana wallet account.",
            ViewState::PortfolioDetails => "View portfolio details of the Solana wallet.",
            ViewState::TransactionDetails => "View transaction details of the Solana wallet.",
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewState::None => write!(f, "None"),
            ViewState::AccountDetails => write!(f, "AccountDetails"),
            ViewState::PortfolioDetails => write!(f, "PortfolioDetails"),
            ViewState::TransactionDetails => write!(f, "TransactionDetails"),
        }
    }
}

impl FromStr for ViewState {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "None" => Ok(ViewState::None),
            "AccountDetails" => Ok(ViewState::AccountDetails),
            "PortfolioDetails" => Ok(ViewState::PortfolioDetails),
            "TransactionDetails" => Ok(ViewState::TransactionDetails),
            other => Err(CoreError::ValidationError(format!("Unknown view '{other}'"))),
        }
    }
}
