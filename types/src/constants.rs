//! Monetary and timing constants shared across the workspace.

/// Multiplier unit in basis points (1.00x = 10_000).
///
/// All payout multipliers are carried as integer basis points; floats are only
/// ever used to sample a multiplier, never to settle one.
pub const BASE_MULTIPLIER: u64 = 10_000;

/// Balance granted to a freshly registered account.
pub const DEFAULT_STARTING_BALANCE: u64 = 1_000;

/// Base amount of the daily reward.
pub const DEFAULT_DAILY_REWARD: u64 = 100;

/// Extra reward per consecutive day of claiming, beyond the first.
pub const DEFAULT_STREAK_BONUS: u64 = 25;

/// Cap on the accumulated streak bonus.
pub const DEFAULT_MAX_STREAK_BONUS: u64 = 250;

/// Default smallest accepted bet.
pub const DEFAULT_MIN_BET: u64 = 10;

/// Default largest accepted bet.
pub const DEFAULT_MAX_BET: u64 = 10_000;

/// Seconds a daily claim locks out the next one.
pub const DAILY_CLAIM_INTERVAL_SECS: u64 = 24 * 60 * 60;

/// Seconds after the previous claim within which a streak continues.
pub const STREAK_CONTINUE_WINDOW_SECS: u64 = 48 * 60 * 60;

/// Number of entries returned by leaderboard queries.
pub const LEADERBOARD_SIZE: usize = 10;
