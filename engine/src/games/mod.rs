//! Game implementations.
//!
//! Every game settles through the same contract: `play(params, bet, rng)`
//! returns an [`Outcome`] whose `win_amount` is the net result relative to
//! the stake (`payout - bet` on a win, zero on a tie, `-(bet)` on a loss).
//! Dispatch is an exhaustive match over the closed [`GameType`] enum.

use parlay_types::{GameError, GameParams, Outcome, OutcomeKind, BASE_MULTIPLIER};

use crate::rng::GameRng;

pub mod blackjack;
pub mod coinflip;
pub mod crash;
pub mod dice;
pub mod hilo;
pub mod mega;
pub mod poker;
pub mod roulette;
pub mod slots;

/// Run one single-phase game. Hi-lo is two-phase and settles through
/// [`hilo::resolve`] instead.
pub fn play(params: &GameParams, bet: u64, rng: &mut GameRng) -> Result<Outcome, GameError> {
    match *params {
        GameParams::Coinflip { call } => coinflip::play(call, bet, rng),
        GameParams::Slots => slots::play(bet, rng),
        GameParams::Blackjack { hard_mode } => blackjack::play(hard_mode, bet, rng),
        GameParams::Roulette { bet: roulette_bet } => roulette::play(roulette_bet, bet, rng),
        GameParams::Dice { bet: dice_bet } => dice::play(dice_bet, bet, rng),
        GameParams::Poker => poker::play(bet, rng),
        GameParams::Crash { auto_cashout_bps } => crash::play(auto_cashout_bps, bet, rng),
        GameParams::MegaMultiplier { risk } => mega::play(risk, bet, rng),
    }
}

/// Gross payout for a stake at a basis-point multiplier, floored.
pub(crate) fn payout_from_bps(bet: u64, mult_bps: u64) -> Result<u64, GameError> {
    let gross = (bet as u128)
        .checked_mul(mult_bps as u128)
        .ok_or(GameError::Overflow)?
        / BASE_MULTIPLIER as u128;
    u64::try_from(gross).map_err(|_| GameError::Overflow)
}

/// A win at the given gross multiplier.
pub(crate) fn outcome_win(bet: u64, mult_bps: u64, detail: String) -> Result<Outcome, GameError> {
    let payout = payout_from_bps(bet, mult_bps)?;
    Ok(Outcome {
        kind: OutcomeKind::Win,
        win_amount: payout as i64 - bet as i64,
        multiplier_bps: mult_bps,
        detail,
    })
}

pub(crate) fn outcome_loss(bet: u64, detail: String) -> Outcome {
    Outcome {
        kind: OutcomeKind::Loss,
        win_amount: -(bet as i64),
        multiplier_bps: 0,
        detail,
    }
}

pub(crate) fn outcome_tie(detail: String) -> Outcome {
    Outcome {
        kind: OutcomeKind::Tie,
        win_amount: 0,
        multiplier_bps: BASE_MULTIPLIER,
        detail,
    }
}

/// Format a basis-point multiplier as e.g. `2.41x`.
pub(crate) fn format_bps(mult_bps: u64) -> String {
    format!(
        "{}.{:02}x",
        mult_bps / BASE_MULTIPLIER,
        (mult_bps % BASE_MULTIPLIER) / 100
    )
}
