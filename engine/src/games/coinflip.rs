//! Coinflip: call heads or tails, win pays 2x gross.

use parlay_types::{CoinSide, GameError, Outcome, BASE_MULTIPLIER};

use super::{outcome_loss, outcome_win};
use crate::rng::GameRng;

fn side_str(side: CoinSide) -> &'static str {
    match side {
        CoinSide::Heads => "heads",
        CoinSide::Tails => "tails",
    }
}

pub fn play(call: CoinSide, bet: u64, rng: &mut GameRng) -> Result<Outcome, GameError> {
    let landed = if rng.flip_coin() {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    };
    let detail = format!("called {}, landed {}", side_str(call), side_str(landed));
    if landed == call {
        outcome_win(bet, 2 * BASE_MULTIPLIER, detail)
    } else {
        Ok(outcome_loss(bet, detail))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlay_types::OutcomeKind;

    #[test]
    fn win_doubles_the_stake() {
        // Sweep seeds; every win must net exactly +bet, every loss -bet.
        let mut wins = 0;
        let mut losses = 0;
        for seed in 0..200 {
            let mut rng = GameRng::from_seed(seed);
            let outcome = play(CoinSide::Heads, 50, &mut rng).unwrap();
            match outcome.kind {
                OutcomeKind::Win => {
                    assert_eq!(outcome.win_amount, 50);
                    assert_eq!(outcome.multiplier_bps, 20_000);
                    wins += 1;
                }
                OutcomeKind::Loss => {
                    assert_eq!(outcome.win_amount, -50);
                    losses += 1;
                }
                OutcomeKind::Tie => panic!("coinflip cannot tie"),
            }
        }
        // A fair coin over 200 seeds produces both outcomes.
        assert!(wins > 0 && losses > 0);
    }

    #[test]
    fn same_seed_same_flip() {
        let a = play(CoinSide::Tails, 10, &mut GameRng::from_seed(9)).unwrap();
        let b = play(CoinSide::Tails, 10, &mut GameRng::from_seed(9)).unwrap();
        assert_eq!(a, b);
    }
}
