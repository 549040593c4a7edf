//! Single-spin European-style roulette on 0..=36.
//!
//! Outside bets (color, parity, range) pay 2x gross and lose on zero;
//! a straight number bet pays 36x gross.

use parlay_types::{GameError, Outcome, RouletteBet, BASE_MULTIPLIER};

use super::{outcome_loss, outcome_win};
use crate::rng::GameRng;

/// Red numbers on the wheel.
const RED_NUMBERS: [u8; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

pub fn is_red(number: u8) -> bool {
    RED_NUMBERS.contains(&number)
}

fn color_name(number: u8) -> &'static str {
    if number == 0 {
        "green"
    } else if is_red(number) {
        "red"
    } else {
        "black"
    }
}

fn validate(bet: RouletteBet) -> Result<(), GameError> {
    match bet {
        RouletteBet::Number(n) if n > 36 => Err(GameError::InvalidParams("number must be 0..=36")),
        _ => Ok(()),
    }
}

/// Whether the bet covers the spun number. Zero loses every outside bet.
pub fn bet_wins(bet: RouletteBet, number: u8) -> bool {
    match bet {
        RouletteBet::Red => number != 0 && is_red(number),
        RouletteBet::Black => number != 0 && !is_red(number),
        RouletteBet::Odd => number != 0 && number % 2 == 1,
        RouletteBet::Even => number != 0 && number % 2 == 0,
        RouletteBet::High => (19..=36).contains(&number),
        RouletteBet::Low => (1..=18).contains(&number),
        RouletteBet::Number(n) => number == n,
    }
}

/// Gross multiplier in basis points for a winning bet.
pub fn payout_bps(bet: RouletteBet) -> u64 {
    match bet {
        RouletteBet::Number(_) => 36 * BASE_MULTIPLIER,
        _ => 2 * BASE_MULTIPLIER,
    }
}

pub fn play(bet: RouletteBet, stake: u64, rng: &mut GameRng) -> Result<Outcome, GameError> {
    validate(bet)?;
    let number = rng.next_bounded(37) as u8;
    let detail = format!("ball landed on {} ({})", number, color_name(number));
    if bet_wins(bet, number) {
        outcome_win(stake, payout_bps(bet), detail)
    } else {
        Ok(outcome_loss(stake, detail))
    }
}
