//! Atomic balance movements over the append-only ledger.
//!
//! Every credit and debit updates the account and appends a matching
//! [`Transaction`] in one call; balances can never go negative. Which
//! lifetime counters move depends on the transaction kind, so leaderboards
//! can be derived without replaying the ledger.

use tracing::debug;

use parlay_types::{CasinoError, Settings, Transaction, TxKind};

use crate::storage::Storage;

/// Add funds. Returns the new balance.
pub fn credit<S: Storage>(
    storage: &mut S,
    account: u64,
    amount: u64,
    kind: TxKind,
    description: String,
    game_record: Option<u64>,
    now: u64,
) -> Result<u64, CasinoError> {
    if amount == 0 {
        return Err(CasinoError::ZeroAmount);
    }
    let id = storage.next_id();
    let acct = storage
        .account_mut(account)
        .ok_or(CasinoError::UnknownAccount)?;

    let balance_before = acct.balance;
    acct.balance = acct.balance.saturating_add(amount);
    match kind {
        TxKind::Win => acct.total_won = acct.total_won.saturating_add(amount),
        _ => acct.total_earned = acct.total_earned.saturating_add(amount),
    }
    acct.highest_balance = acct.highest_balance.max(acct.balance);
    let new_balance = acct.balance;

    debug!(account, amount, kind = kind.as_str(), new_balance, "credit");
    storage.append_transaction(Transaction {
        id,
        account,
        kind,
        amount: amount as i64,
        balance_before,
        balance_after: new_balance,
        description,
        game_record,
        at: now,
    });
    Ok(new_balance)
}

/// Remove funds. Rejects the whole operation if the balance is short.
pub fn debit<S: Storage>(
    storage: &mut S,
    account: u64,
    amount: u64,
    kind: TxKind,
    description: String,
    game_record: Option<u64>,
    now: u64,
) -> Result<u64, CasinoError> {
    if amount == 0 {
        return Err(CasinoError::ZeroAmount);
    }
    let id = storage.next_id();
    let acct = storage
        .account_mut(account)
        .ok_or(CasinoError::UnknownAccount)?;

    if amount > acct.balance {
        return Err(CasinoError::InsufficientBalance {
            needed: amount,
            available: acct.balance,
        });
    }
    let balance_before = acct.balance;
    acct.balance -= amount;
    if kind == TxKind::Bet {
        acct.total_spent = acct.total_spent.saturating_add(amount);
    }
    let new_balance = acct.balance;

    debug!(account, amount, kind = kind.as_str(), new_balance, "debit");
    storage.append_transaction(Transaction {
        id,
        account,
        kind,
        amount: -(amount as i64),
        balance_before,
        balance_after: new_balance,
        description,
        game_record,
        at: now,
    });
    Ok(new_balance)
}

/// Move funds between two accounts.
pub fn transfer<S: Storage>(
    storage: &mut S,
    settings: &Settings,
    from: u64,
    to: u64,
    amount: u64,
    note: &str,
    now: u64,
) -> Result<(), CasinoError> {
    if !settings.allow_transfers {
        return Err(CasinoError::TransfersDisabled);
    }
    if from == to {
        return Err(CasinoError::SelfTransfer);
    }
    if amount == 0 {
        return Err(CasinoError::ZeroAmount);
    }
    let from_handle = storage
        .account(from)
        .ok_or(CasinoError::UnknownAccount)?
        .handle
        .clone();
    let to_handle = storage
        .account(to)
        .ok_or(CasinoError::UnknownAccount)?
        .handle
        .clone();

    // Debit first: an insufficient balance aborts before anything moves.
    debit(
        storage,
        from,
        amount,
        TxKind::TransferOut,
        format!("Transfer to {}: {}", to_handle, note),
        None,
        now,
    )?;
    credit(
        storage,
        to,
        amount,
        TxKind::TransferIn,
        format!("Transfer from {}: {}", from_handle, note),
        None,
        now,
    )?;
    Ok(())
}

/// Most recent transactions first.
pub fn history<S: Storage>(storage: &S, account: u64, limit: usize) -> Vec<Transaction> {
    storage
        .transactions_for(account)
        .into_iter()
        .rev()
        .take(limit)
        .cloned()
        .collect()
}
