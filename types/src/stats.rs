//! Statistics rows maintained incrementally by the engine.

use serde::{Deserialize, Serialize};

use crate::GameType;

/// Aggregate statistics for one game type, across all players.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub game: GameType,
    pub total_played: u64,
    pub total_wagered: u64,
    /// Gross amount paid back, stake included: win payouts and tie refunds.
    pub total_paid_out: u64,
    /// House-positive running result: bets kept minus net player wins.
    pub total_profit_loss: i64,
    /// Largest single net win.
    pub highest_win: u64,
    pub highest_wager: u64,
    pub largest_multiplier_bps: u64,
}

impl GameStats {
    pub fn new(game: GameType) -> Self {
        Self {
            game,
            total_played: 0,
            total_wagered: 0,
            total_paid_out: 0,
            total_profit_loss: 0,
            highest_win: 0,
            highest_wager: 0,
            largest_multiplier_bps: 0,
        }
    }
}

/// Per-player statistics for one game type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerGameStats {
    pub account: u64,
    pub game: GameType,
    pub played: u64,
    pub won: u64,
    pub lost: u64,
    pub tied: u64,
    /// Rounded percentage of plays won.
    pub win_rate_pct: u8,
    pub total_wagered: u64,
    /// Gross amount credited on wins, stake included.
    pub total_won: u64,
    /// Sum of net results.
    pub net_profit_loss: i64,
    pub highest_win: u64,
    /// Creation order of this row; favorite-game ties go to the lowest.
    pub first_played_seq: u64,
}

impl PlayerGameStats {
    pub fn new(account: u64, game: GameType) -> Self {
        Self {
            account,
            game,
            played: 0,
            won: 0,
            lost: 0,
            tied: 0,
            win_rate_pct: 0,
            total_wagered: 0,
            total_won: 0,
            net_profit_loss: 0,
            highest_win: 0,
            first_played_seq: 0,
        }
    }

    /// Win rate in the display form players see, e.g. `33%`.
    pub fn win_rate_display(&self) -> String {
        format!("{}%", self.win_rate_pct)
    }
}

/// Sort keys for the player leaderboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaderboardSort {
    #[default]
    NetProfit,
    GamesPlayed,
    GamesWon,
    TotalWagered,
    HighestWin,
}

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub account: u64,
    pub handle: String,
    pub value: i64,
}

/// One row of the game-profitability ranking (house perspective).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProfitEntry {
    pub game: GameType,
    pub total_profit_loss: i64,
    pub total_played: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_rate_renders_as_percent() {
        let mut row = PlayerGameStats::new(1, GameType::Dice);
        assert_eq!(row.win_rate_display(), "0%");
        row.win_rate_pct = 33;
        assert_eq!(row.win_rate_display(), "33%");
    }
}
