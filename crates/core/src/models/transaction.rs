use serde::{Deserialize, Serialize};

/// Finality tier reported by the ledger for a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationStatus {
    Processed,
    Confirmed,
    Finalized,
}

impl std::fmt::Display for ConfirmationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmationStatus::Processed => write!(f, "processed"),
            ConfirmationStatus::Confirmed => write!(f, "confirmed"),
            ConfirmationStatus::Finalized => write!(f, "finalized"),
        }
    }
}

/// One entry of the account's signature history.
///
/// Sequences of these keep the order the RPC node returned them in
/// (newest first); nothing in the crate re-sorts them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Base58 transaction signature
    pub signature: String,

    /// Slot the transaction landed in
    pub slot: u64,

    /// Block time in unix seconds, if the node knows it
    pub block_time: Option<i64>,

    /// Finality tier, if reported
    pub confirmation_status: Option<ConfirmationStatus>,

    /// True when the transaction executed with an error
    pub failed: bool,
}

impl Transaction {
    pub fn new(
        signature: impl Into<String>,
        block_time: Option<i64>,
        confirmation_status: Option<ConfirmationStatus>,
    ) -> Self {
        Self {
            signature: signature.into(),
            slot: 0,
            block_time,
            confirmation_status,
            failed: false,
        }
    }
}
