//! Append-only ledger records.

use serde::{Deserialize, Serialize};

/// Why currency moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TxKind {
    Bet,
    Win,
    Daily,
    TransferIn,
    TransferOut,
    Adjust,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Bet => "bet",
            TxKind::Win => "win",
            TxKind::Daily => "daily",
            TxKind::TransferIn => "transfer_in",
            TxKind::TransferOut => "transfer_out",
            TxKind::Adjust => "adjust",
        }
    }
}

/// One ledger entry. Credits are positive, debits negative.
///
/// Entries are append-only; nothing in the engine mutates or removes them
/// short of full account deletion. Every entry snapshots the balance around
/// it, so `balance_after == balance_before + amount` holds entry by entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub account: u64,
    pub kind: TxKind,
    pub amount: i64,
    pub balance_before: u64,
    pub balance_after: u64,
    pub description: String,
    /// The settled game this entry belongs to, when there is one.
    pub game_record: Option<u64>,
    pub at: u64,
}
