//! Hi-lo card game, settled in two phases.
//!
//! A round starts by dealing a visible card; the player later guesses whether
//! a second, necessarily different rank lands higher or lower. The win
//! multiplier follows the count of winning ranks with a 5% edge, floored at
//! 1.10x. Round lifecycle (token bookkeeping, stake debit/refund) lives in
//! the casino facade; this module owns the card math.

use parlay_types::{GameError, HiLoGuess, Outcome};

use super::{format_bps, outcome_loss, outcome_win};
use crate::cards::{card_rank_ace_high, format_card};
use crate::rng::GameRng;

/// Deal the visible first card of a round.
pub fn deal_first_card(rng: &mut GameRng) -> u8 {
    let mut deck = rng.create_deck();
    // A fresh deck cannot be empty; fall back to the ace of spades.
    rng.draw_card(&mut deck).unwrap_or(0)
}

/// Ranks that would win the guess from this card.
fn winning_ranks(first_rank: u8, guess: HiLoGuess) -> u8 {
    match guess {
        HiLoGuess::Higher => 14 - first_rank,
        HiLoGuess::Lower => first_rank - 2,
    }
}

/// Win multiplier in basis points, two-decimal granularity.
///
/// Rejects guesses with no winning rank (higher on an ace, lower on a two).
pub fn multiplier_bps(first_rank: u8, guess: HiLoGuess) -> Result<u64, GameError> {
    let wins = winning_ranks(first_rank, guess);
    if wins == 0 {
        return Err(GameError::ImpossibleGuess);
    }
    let fair = (13.0 / wins as f64) * 0.95;
    let clamped = fair.max(1.1);
    Ok((clamped * 100.0).round() as u64 * 100)
}

/// Draw the second card and settle the round.
pub fn resolve(
    first_card: u8,
    guess: HiLoGuess,
    bet: u64,
    rng: &mut GameRng,
) -> Result<Outcome, GameError> {
    let first_rank = card_rank_ace_high(first_card);
    let mult_bps = multiplier_bps(first_rank, guess)?;

    let second_rank = rng.draw_rank_excluding(first_rank);
    let suit = rng.next_bounded(4) as u8;
    let second_card = suit * 13 + if second_rank == 14 { 0 } else { second_rank - 1 };

    let won = match guess {
        HiLoGuess::Higher => second_rank > first_rank,
        HiLoGuess::Lower => second_rank < first_rank,
    };
    let direction = match guess {
        HiLoGuess::Higher => "higher",
        HiLoGuess::Lower => "lower",
    };
    let detail = format!(
        "{} then {} (guessed {}, {})",
        format_card(first_card),
        format_card(second_card),
        direction,
        format_bps(mult_bps)
    );

    if won {
        outcome_win(bet, mult_bps, detail)
    } else {
        Ok(outcome_loss(bet, detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlay_types::OutcomeKind;

    #[test]
    fn multiplier_values() {
        // From a 2 guessing higher: 12 winning ranks, fair 1.03 -> floor 1.10.
        assert_eq!(multiplier_bps(2, HiLoGuess::Higher).unwrap(), 11_000);
        // From a king (13) guessing higher: only the ace wins, 12.35x.
        assert_eq!(multiplier_bps(13, HiLoGuess::Higher).unwrap(), 123_500);
        // From an 8 guessing higher: 6 winning ranks, 13/6*0.95 = 2.06x.
        assert_eq!(multiplier_bps(8, HiLoGuess::Higher).unwrap(), 20_600);
        // Symmetric going down from an 8: 6 winning ranks too.
        assert_eq!(
            multiplier_bps(8, HiLoGuess::Lower).unwrap(),
            multiplier_bps(8, HiLoGuess::Higher).unwrap()
        );
    }

    #[test]
    fn impossible_guesses_rejected() {
        assert_eq!(
            multiplier_bps(14, HiLoGuess::Higher),
            Err(GameError::ImpossibleGuess)
        );
        assert_eq!(
            multiplier_bps(2, HiLoGuess::Lower),
            Err(GameError::ImpossibleGuess)
        );
    }

    #[test]
    fn resolve_never_ties() {
        for seed in 0..200 {
            let mut rng = GameRng::from_seed(seed);
            let first = deal_first_card(&mut rng);
            let guess = if card_rank_ace_high(first) == 14 {
                HiLoGuess::Lower
            } else {
                HiLoGuess::Higher
            };
            let outcome = resolve(first, guess, 100, &mut rng).unwrap();
            match outcome.kind {
                OutcomeKind::Win => assert!(outcome.win_amount >= 10), // at least 1.10x
                OutcomeKind::Loss => assert_eq!(outcome.win_amount, -100),
                OutcomeKind::Tie => panic!("hi-lo cannot tie"),
            }
        }
    }

    #[test]
    fn impossible_guess_does_not_consume_rng() {
        // Resolution fails before drawing the second card.
        let ace = 0; // ace of spades, rank 14
        let mut rng = GameRng::from_seed(7);
        let before = rng.next_u32();
        let mut rng = GameRng::from_seed(7);
        assert_eq!(
            resolve(ace, HiLoGuess::Higher, 100, &mut rng),
            Err(GameError::ImpossibleGuess)
        );
        assert_eq!(rng.next_u32(), before);
    }
}
