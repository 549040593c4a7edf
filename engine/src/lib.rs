//! Parlay game engine.
//!
//! This crate contains the deterministic game evaluators and the bookkeeping
//! around them: the append-only ledger, the incremental statistics aggregator,
//! the daily-reward tracker and the storage seam.
//!
//! ## Determinism requirements
//! - All randomness flows through [`GameRng`]; no game reads ambient entropy.
//! - The core never reads a clock; callers pass unix-second `now` values.
//! - Settlement math is integer basis points; floats only ever *sample* a
//!   multiplier.
//!
//! The primary entrypoint is [`Casino`].

pub mod cards;
pub mod casino;
pub mod games;
pub mod ledger;
pub mod registry;
pub mod rewards;
pub mod rng;
pub mod stats;
pub mod storage;

pub use casino::{Casino, HiLoStart, Played};
pub use registry::{GameConfig, GameInfo, GameRegistry};
pub use rng::GameRng;
pub use storage::{MemStorage, Storage};
