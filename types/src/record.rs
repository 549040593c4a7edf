//! The settled-game log.

use serde::{Deserialize, Serialize};

use crate::{GameType, OutcomeKind};

/// One settled game.
///
/// `account` is `None` once the player has been deleted: records outlive
/// accounts so per-game aggregates stay consistent, but are anonymized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: u64,
    pub account: Option<u64>,
    pub game: GameType,
    pub bet: u64,
    pub outcome: OutcomeKind,
    /// Net result relative to the stake.
    pub win_amount: i64,
    pub multiplier_bps: u64,
    pub at: u64,
}
