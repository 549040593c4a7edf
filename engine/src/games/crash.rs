//! Crash: a multiplier climbs until it busts; cash out first to win.
//!
//! The crash point is sampled from the inverse exponential CDF with a 5%
//! edge, floored to two decimals. The core settles against a pre-committed
//! auto-cashout; interactive play resolves by passing the multiplier the
//! player cashed at.

use parlay_types::{GameError, Outcome, BASE_MULTIPLIER};

use super::{format_bps, outcome_loss, outcome_win};
use crate::rng::GameRng;

/// Edge applied to the sampled curve.
const HOUSE_EDGE: f64 = 0.05;

/// Smallest accepted auto-cashout (1.10x).
pub const MIN_CASHOUT_BPS: u64 = 11_000;

/// Sample a crash point in basis points: at least 1.00x, two-decimal
/// granularity.
pub fn sample_crash_bps(rng: &mut GameRng) -> u64 {
    let r = rng.next_f64();
    // Inverse CDF of the exponential distribution, scaled by the edge.
    let point = (1.0 - HOUSE_EDGE) / (1.0 - r);
    let bps = ((point * 100.0).floor() as u64).saturating_mul(100);
    bps.max(BASE_MULTIPLIER)
}

pub fn play(
    auto_cashout_bps: Option<u64>,
    bet: u64,
    rng: &mut GameRng,
) -> Result<Outcome, GameError> {
    if let Some(cashout) = auto_cashout_bps {
        if cashout < MIN_CASHOUT_BPS {
            return Err(GameError::InvalidParams("cashout must be at least 1.10x"));
        }
    }
    let crash_bps = sample_crash_bps(rng);
    match auto_cashout_bps {
        Some(cashout) if cashout < crash_bps => {
            let detail = format!(
                "cashed out at {} before the crash at {}",
                format_bps(cashout),
                format_bps(crash_bps)
            );
            outcome_win(bet, cashout, detail)
        }
        _ => Ok(outcome_loss(
            bet,
            format!("crashed at {}", format_bps(crash_bps)),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlay_types::OutcomeKind;
    use proptest::prelude::*;

    #[test]
    fn cashout_below_minimum_rejected() {
        let mut rng = GameRng::from_seed(1);
        let result = play(Some(10_500), 100, &mut rng);
        assert!(matches!(result, Err(GameError::InvalidParams(_))));
    }

    #[test]
    fn no_cashout_always_loses() {
        for seed in 0..50 {
            let mut rng = GameRng::from_seed(seed);
            let outcome = play(None, 100, &mut rng).unwrap();
            assert_eq!(outcome.kind, OutcomeKind::Loss);
            assert_eq!(outcome.win_amount, -100);
        }
    }

    #[test]
    fn win_pays_the_cashout_multiplier() {
        let mut wins = 0;
        for seed in 0..300 {
            let mut rng = GameRng::from_seed(seed);
            let outcome = play(Some(15_000), 100, &mut rng).unwrap();
            match outcome.kind {
                OutcomeKind::Win => {
                    assert_eq!(outcome.multiplier_bps, 15_000);
                    assert_eq!(outcome.win_amount, 50);
                    wins += 1;
                }
                OutcomeKind::Loss => assert_eq!(outcome.win_amount, -100),
                OutcomeKind::Tie => panic!("crash cannot tie"),
            }
        }
        // ~63% of curves pass 1.5x; some seeds must win.
        assert!(wins > 0);
    }

    proptest! {
        #[test]
        fn crash_point_bounds(seed in 0u64..5_000) {
            let mut rng = GameRng::from_seed(seed);
            let bps = sample_crash_bps(&mut rng);
            prop_assert!(bps >= BASE_MULTIPLIER);
            prop_assert_eq!(bps % 100, 0);
        }
    }
}
