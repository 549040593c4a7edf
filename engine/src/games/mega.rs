//! MegaMultiplier: a long-shot draw with multipliers up to 100,000x.
//!
//! Risk (1..=10) trades win probability for multiplier ceiling: the win
//! chance falls linearly from 23% to 5% while the ceiling grows as
//! `10^(1 + risk/2)`. Sampled multipliers skew low, with the skew easing at
//! higher risk.

use parlay_types::{GameError, Outcome, BASE_MULTIPLIER};

use super::{format_bps, outcome_loss, outcome_win};
use crate::rng::GameRng;

pub const DEFAULT_RISK: u8 = 5;

/// Hard cap on the sampled multiplier.
pub const MAX_MULTIPLIER_BPS: u64 = 100_000 * BASE_MULTIPLIER;

const MULTIPLIER_FLOOR: f64 = 2.0;

/// Win probability in basis points: `0.25 * (1 - 0.8 * risk / 10)`.
pub fn win_probability_bps(risk: u8) -> u64 {
    2_500 - 200 * risk as u64
}

/// Sample the won multiplier for a risk level, in basis points.
pub fn sample_multiplier_bps(risk: u8, rng: &mut GameRng) -> u64 {
    let risk_factor = risk as f64 / 10.0;
    let ceiling = 10f64.powf(1.0 + risk as f64 / 2.0);

    // Skewed draw: squashing the uniform keeps most multipliers small; the
    // exponent eases toward linear as risk rises.
    let skew = rng.next_f64().powf(2.0 - risk_factor);
    let mut multiplier = MULTIPLIER_FLOOR + (ceiling - MULTIPLIER_FLOOR) * (1.0 - skew);

    // Jitter by +/-10%.
    multiplier *= 0.9 + 0.2 * rng.next_f64();

    let bps = if multiplier < 100.0 {
        (multiplier * 100.0).round() as u64 * 100
    } else {
        (multiplier.floor() as u64).saturating_mul(BASE_MULTIPLIER)
    };
    bps.min(MAX_MULTIPLIER_BPS)
}

pub fn play(risk: u8, bet: u64, rng: &mut GameRng) -> Result<Outcome, GameError> {
    if !(1..=10).contains(&risk) {
        return Err(GameError::InvalidParams("risk must be 1..=10"));
    }
    let won = rng.chance(win_probability_bps(risk));
    if won {
        let mult_bps = sample_multiplier_bps(risk, rng);
        let detail = format!("risk {}, hit {}", risk, format_bps(mult_bps));
        outcome_win(bet, mult_bps, detail)
    } else {
        Ok(outcome_loss(bet, format!("risk {}, no multiplier", risk)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlay_types::OutcomeKind;
    use proptest::prelude::*;

    #[test]
    fn probability_table() {
        assert_eq!(win_probability_bps(1), 2_300);
        assert_eq!(win_probability_bps(5), 1_500);
        assert_eq!(win_probability_bps(10), 500);
    }

    #[test]
    fn risk_out_of_range_rejected() {
        let mut rng = GameRng::from_seed(1);
        assert!(matches!(
            play(0, 100, &mut rng),
            Err(GameError::InvalidParams(_))
        ));
        assert!(matches!(
            play(11, 100, &mut rng),
            Err(GameError::InvalidParams(_))
        ));
    }

    #[test]
    fn plays_settle_consistently() {
        let mut wins = 0;
        for seed in 0..400 {
            let mut rng = GameRng::from_seed(seed);
            let outcome = play(DEFAULT_RISK, 100, &mut rng).unwrap();
            match outcome.kind {
                OutcomeKind::Win => {
                    assert!(outcome.multiplier_bps >= 18_000); // floor 2x minus jitter
                    assert!(outcome.multiplier_bps <= MAX_MULTIPLIER_BPS);
                    wins += 1;
                }
                OutcomeKind::Loss => assert_eq!(outcome.win_amount, -100),
                OutcomeKind::Tie => panic!("megamultiplier cannot tie"),
            }
        }
        // 15% win rate over 400 seeds.
        assert!(wins > 0);
    }

    proptest! {
        #[test]
        fn multiplier_bounds(seed in 0u64..2_000, risk in 1u8..=10) {
            let mut rng = GameRng::from_seed(seed);
            let bps = sample_multiplier_bps(risk, &mut rng);
            // Jitter can pull the 2x floor down to 1.8x.
            prop_assert!(bps >= 17_999);
            prop_assert!(bps <= MAX_MULTIPLIER_BPS);
        }
    }
}
