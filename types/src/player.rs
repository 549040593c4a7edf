//! Player account state.

use serde::{Deserialize, Serialize};

/// A player account.
///
/// Balances are whole currency units and can never go negative; every
/// movement is mirrored by a ledger [`crate::Transaction`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub handle: String,
    pub balance: u64,
    pub games_played: u64,
    pub games_won: u64,
    /// Gross amount credited from game wins, stake included.
    pub total_won: u64,
    /// Total amount staked on bets.
    pub total_spent: u64,
    /// Total credited from non-win sources (rewards, transfers, adjustments).
    pub total_earned: u64,
    pub highest_balance: u64,
    pub daily_streak: u32,
    /// Unix seconds of the last daily claim; zero if never claimed.
    pub last_daily_claim: u64,
    /// Unix seconds at which the next daily claim unlocks.
    pub next_daily_claim: u64,
    pub created_at: u64,
    pub last_played: u64,
}

impl Account {
    pub fn new(id: u64, handle: String, starting_balance: u64, now: u64) -> Self {
        Self {
            id,
            handle,
            balance: starting_balance,
            games_played: 0,
            games_won: 0,
            total_won: 0,
            total_spent: 0,
            total_earned: 0,
            highest_balance: starting_balance,
            daily_streak: 0,
            last_daily_claim: 0,
            next_daily_claim: 0,
            created_at: now,
            last_played: 0,
        }
    }
}

/// Result of a successful daily claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyClaim {
    pub streak: u32,
    pub base: u64,
    pub bonus: u64,
    pub total: u64,
    pub next_available: u64,
}
