//! Domain types for the parlay gambling core.
//!
//! Everything here is plain data: game identifiers and parameters, account and
//! ledger records, statistics rows, settings and error enums. Game logic lives
//! in `parlay-engine`.

mod constants;
mod error;
mod game;
mod ledger;
mod player;
mod record;
mod settings;
mod stats;

pub use constants::*;
pub use error::*;
pub use game::*;
pub use ledger::*;
pub use player::*;
pub use record::*;
pub use settings::*;
pub use stats::*;
