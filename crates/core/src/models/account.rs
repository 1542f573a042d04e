use serde::{Deserialize, Serialize};

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// On-chain account metadata for the tracked wallet.
///
/// Lamports are the authoritative balance; SOL amounts are always derived
/// from them and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Native balance in lamports
    pub lamports: u64,

    /// Program that owns the account (system program for a plain wallet)
    pub owner: String,

    /// Whether the account holds an executable program
    pub executable: bool,
}

impl AccountInfo {
    pub fn new(lamports: u64) -> Self {
        Self {
            lamports,
            owner: "11111111111111111111111111111111".to_string(),
            executable: false,
        }
    }

    /// Balance converted to whole SOL.
    #[must_use]
    pub fn sol_balance(&self) -> f64 {
        lamports_to_sol(self.lamports)
    }
}

/// Convert a lamport amount into SOL.
#[must_use]
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}
