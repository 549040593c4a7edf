//! Daily-reward streak tracking.
//!
//! One claim per 24 hours. A claim within 48 hours of the previous one
//! continues the streak, later than that resets it. The streak bonus grows
//! linearly and is capped.

use parlay_types::{
    CasinoError, DailyClaim, Settings, TxKind, DAILY_CLAIM_INTERVAL_SECS,
    STREAK_CONTINUE_WINDOW_SECS,
};

use crate::ledger;
use crate::storage::Storage;

pub fn claim_daily<S: Storage>(
    storage: &mut S,
    settings: &Settings,
    account: u64,
    now: u64,
) -> Result<DailyClaim, CasinoError> {
    let acct = storage
        .account(account)
        .ok_or(CasinoError::UnknownAccount)?;

    if now < acct.next_daily_claim {
        return Err(CasinoError::RewardNotReady {
            available_at: acct.next_daily_claim,
        });
    }

    let continues = acct.last_daily_claim != 0
        && now.saturating_sub(acct.last_daily_claim) <= STREAK_CONTINUE_WINDOW_SECS;
    let streak = if continues {
        acct.daily_streak.saturating_add(1)
    } else {
        1
    };

    let bonus = (u64::from(streak) - 1)
        .saturating_mul(settings.streak_bonus)
        .min(settings.max_streak_bonus);
    let total = settings.daily_reward.saturating_add(bonus);
    let next_available = now + DAILY_CLAIM_INTERVAL_SECS;

    let description = if bonus > 0 {
        format!(
            "Daily reward (Day {}): {} + {} streak bonus",
            streak, settings.daily_reward, bonus
        )
    } else {
        format!("Daily reward (Day {}): {}", streak, settings.daily_reward)
    };
    ledger::credit(storage, account, total, TxKind::Daily, description, None, now)?;

    let acct = storage
        .account_mut(account)
        .ok_or(CasinoError::UnknownAccount)?;
    acct.daily_streak = streak;
    acct.last_daily_claim = now;
    acct.next_daily_claim = next_available;

    Ok(DailyClaim {
        streak,
        base: settings.daily_reward,
        bonus,
        total,
        next_available,
    })
}
