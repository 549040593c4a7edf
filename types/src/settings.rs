//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_DAILY_REWARD, DEFAULT_MAX_BET, DEFAULT_MAX_STREAK_BONUS, DEFAULT_MIN_BET,
    DEFAULT_STARTING_BALANCE, DEFAULT_STREAK_BONUS,
};

/// Tunable engine parameters.
///
/// Plain values handed to the engine at construction; loading them from a
/// file or environment is the caller's concern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub starting_balance: u64,
    pub daily_reward: u64,
    pub streak_bonus: u64,
    pub max_streak_bonus: u64,
    pub min_bet: u64,
    pub max_bet: u64,
    pub allow_transfers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_balance: DEFAULT_STARTING_BALANCE,
            daily_reward: DEFAULT_DAILY_REWARD,
            streak_bonus: DEFAULT_STREAK_BONUS,
            max_streak_bonus: DEFAULT_MAX_STREAK_BONUS,
            min_bet: DEFAULT_MIN_BET,
            max_bet: DEFAULT_MAX_BET,
            allow_transfers: true,
        }
    }
}
