//! Two-dice totals: bet higher, lower or exactly on a target.
//!
//! Payouts derive from the true probability over the 36 combinations with a
//! 10% margin. Higher/lower multipliers are floored at 2x; exact bets are
//! not.

use parlay_types::{DiceBet, GameError, Outcome, BASE_MULTIPLIER};

use super::{outcome_loss, outcome_win};
use crate::rng::GameRng;

/// Combinations out of 36 that produce a given total (2..=12).
pub fn ways(total: u8) -> u32 {
    if !(2..=12).contains(&total) {
        return 0;
    }
    6 - (7i32 - total as i32).unsigned_abs()
}

fn ways_above(target: u8) -> u32 {
    (target + 1..=12).map(ways).sum()
}

fn ways_below(target: u8) -> u32 {
    (2..target).map(ways).sum()
}

fn validate(bet: DiceBet) -> Result<u32, GameError> {
    let winning_ways = match bet {
        DiceBet::Higher(target) => {
            if !(2..=11).contains(&target) {
                return Err(GameError::InvalidParams("higher target must be 2..=11"));
            }
            ways_above(target)
        }
        DiceBet::Lower(target) => {
            if !(3..=12).contains(&target) {
                return Err(GameError::InvalidParams("lower target must be 3..=12"));
            }
            ways_below(target)
        }
        DiceBet::Exact(target) => {
            if !(2..=12).contains(&target) {
                return Err(GameError::InvalidParams("target must be 2..=12"));
            }
            ways(target)
        }
    };
    Ok(winning_ways)
}

/// Gross whole-number multiplier: `round((36 / ways) * 0.9)`, floored at 2x
/// for the range bets.
pub fn payout_multiplier(bet: DiceBet) -> Result<u64, GameError> {
    let winning_ways = validate(bet)? as u64;
    // round(32.4 / ways) in integer arithmetic.
    let rounded = (324 + 5 * winning_ways) / (10 * winning_ways);
    Ok(match bet {
        DiceBet::Exact(_) => rounded,
        _ => rounded.max(2),
    })
}

fn bet_wins(bet: DiceBet, total: u8) -> bool {
    match bet {
        DiceBet::Higher(target) => total > target,
        DiceBet::Lower(target) => total < target,
        DiceBet::Exact(target) => total == target,
    }
}

pub fn play(bet: DiceBet, stake: u64, rng: &mut GameRng) -> Result<Outcome, GameError> {
    let multiplier = payout_multiplier(bet)?;
    let (a, b) = (rng.roll_die(), rng.roll_die());
    let total = a + b;
    let detail = format!("rolled {} + {} = {}", a, b, total);
    if bet_wins(bet, total) {
        outcome_win(stake, multiplier * BASE_MULTIPLIER, detail)
    } else {
        Ok(outcome_loss(stake, detail))
    }
}
