//! Three-reel slots.
//!
//! Each reel draws one of eight symbols uniformly. Any pair pays the pair's
//! value at 2x, a triple pays it at 5x, and triple sevens override everything
//! at a flat 50x.

use parlay_types::{GameError, Outcome, BASE_MULTIPLIER};

use super::{outcome_loss, outcome_win};
use crate::rng::GameRng;

/// Symbol table: name and base value in basis points of the stake.
const SYMBOLS: [(&str, u64); 8] = [
    ("cherry", 10_000),
    ("lemon", 15_000),
    ("melon", 20_000),
    ("bell", 25_000),
    ("bar", 30_000),
    ("diamond", 35_000),
    ("heart", 40_000),
    ("seven", 50_000),
];

const SEVEN: usize = 7;

/// Jackpot multiplier for triple sevens.
const TRIPLE_SEVEN_BPS: u64 = 50 * BASE_MULTIPLIER;

/// Gross multiplier for a spin; zero means no win.
fn evaluate(reels: [usize; 3]) -> u64 {
    if reels[0] == reels[1] && reels[1] == reels[2] {
        if reels[0] == SEVEN {
            return TRIPLE_SEVEN_BPS;
        }
        return SYMBOLS[reels[0]].1 * 5;
    }
    let pair = if reels[0] == reels[1] || reels[0] == reels[2] {
        Some(reels[0])
    } else if reels[1] == reels[2] {
        Some(reels[1])
    } else {
        None
    };
    match pair {
        Some(symbol) => SYMBOLS[symbol].1 * 2,
        None => 0,
    }
}

pub fn play(bet: u64, rng: &mut GameRng) -> Result<Outcome, GameError> {
    let reels = [
        rng.next_bounded(SYMBOLS.len() as u32) as usize,
        rng.next_bounded(SYMBOLS.len() as u32) as usize,
        rng.next_bounded(SYMBOLS.len() as u32) as usize,
    ];
    let detail = format!(
        "{} | {} | {}",
        SYMBOLS[reels[0]].0, SYMBOLS[reels[1]].0, SYMBOLS[reels[2]].0
    );
    let mult_bps = evaluate(reels);
    if mult_bps > 0 {
        outcome_win(bet, mult_bps, detail)
    } else {
        Ok(outcome_loss(bet, detail))
    }
}
