//! Game identifiers, parameters and outcomes.

use serde::{Deserialize, Serialize};

use crate::GameError;

/// The closed set of playable games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum GameType {
    Coinflip = 0,
    Slots = 1,
    Blackjack = 2,
    Roulette = 3,
    Dice = 4,
    Poker = 5,
    Crash = 6,
    HiLo = 7,
    MegaMultiplier = 8,
}

impl GameType {
    pub const ALL: [GameType; 9] = [
        GameType::Coinflip,
        GameType::Slots,
        GameType::Blackjack,
        GameType::Roulette,
        GameType::Dice,
        GameType::Poker,
        GameType::Crash,
        GameType::HiLo,
        GameType::MegaMultiplier,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::Coinflip => "coinflip",
            GameType::Slots => "slots",
            GameType::Blackjack => "blackjack",
            GameType::Roulette => "roulette",
            GameType::Dice => "dice",
            GameType::Poker => "poker",
            GameType::Crash => "crash",
            GameType::HiLo => "hilo",
            GameType::MegaMultiplier => "megamultiplier",
        }
    }
}

impl TryFrom<u8> for GameType {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(GameType::Coinflip),
            1 => Ok(GameType::Slots),
            2 => Ok(GameType::Blackjack),
            3 => Ok(GameType::Roulette),
            4 => Ok(GameType::Dice),
            5 => Ok(GameType::Poker),
            6 => Ok(GameType::Crash),
            7 => Ok(GameType::HiLo),
            8 => Ok(GameType::MegaMultiplier),
            _ => Err(GameError::InvalidParams("unknown game type")),
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Side of a coin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoinSide {
    Heads,
    Tails,
}

/// A single roulette bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouletteBet {
    Red,
    Black,
    Odd,
    Even,
    /// 19-36.
    High,
    /// 1-18.
    Low,
    /// Straight bet on 0..=36.
    Number(u8),
}

/// A two-dice bet against a target total (2..=12).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiceBet {
    /// Total strictly above the target; target must be below 12.
    Higher(u8),
    /// Total strictly below the target; target must be above 2.
    Lower(u8),
    Exact(u8),
}

/// Direction guess for a hi-lo round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiLoGuess {
    Higher,
    Lower,
}

/// Parameters for the single-phase games.
///
/// Hi-lo is two-phase and goes through the round API instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameParams {
    Coinflip { call: CoinSide },
    Slots,
    Blackjack { hard_mode: bool },
    Roulette { bet: RouletteBet },
    Dice { bet: DiceBet },
    Poker,
    Crash { auto_cashout_bps: Option<u64> },
    MegaMultiplier { risk: u8 },
}

impl GameParams {
    pub fn game_type(&self) -> GameType {
        match self {
            GameParams::Coinflip { .. } => GameType::Coinflip,
            GameParams::Slots => GameType::Slots,
            GameParams::Blackjack { .. } => GameType::Blackjack,
            GameParams::Roulette { .. } => GameType::Roulette,
            GameParams::Dice { .. } => GameType::Dice,
            GameParams::Poker => GameType::Poker,
            GameParams::Crash { .. } => GameType::Crash,
            GameParams::MegaMultiplier { .. } => GameType::MegaMultiplier,
        }
    }
}

/// How a settled round ended for the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeKind {
    Win,
    Loss,
    Tie,
}

/// Result of a settled round.
///
/// `win_amount` is the net result relative to the stake: `payout - bet` on a
/// win, zero on a tie (stake refunded) and `-(bet)` on a loss. `multiplier_bps`
/// is the gross payout multiplier that produced the result (zero on a loss).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub win_amount: i64,
    pub multiplier_bps: u64,
    pub detail: String,
}

impl Outcome {
    /// Amount credited back to the player, stake included.
    pub fn payout(&self, bet: u64) -> u64 {
        match self.kind {
            OutcomeKind::Win => bet.saturating_add(self.win_amount.max(0) as u64),
            OutcomeKind::Tie => bet,
            OutcomeKind::Loss => 0,
        }
    }
}

/// Opaque handle for an unresolved hi-lo round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoundToken(pub u64);

/// An unresolved hi-lo round: stake already debited, first card dealt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiLoRound {
    pub token: RoundToken,
    pub account: u64,
    pub bet: u64,
    /// Card 0..51; rank compared ace-high.
    pub first_card: u8,
    pub started_at: u64,
}
