//! Storage seam: everything the engine persists goes through this trait.
//!
//! The engine never touches ambient state; every module is generic over
//! `S: Storage`. [`MemStorage`] is the reference adapter; anything that can
//! satisfy the trait (a database layer, a test double) slots in the same way.

use std::collections::BTreeMap;

use parlay_types::{
    Account, GameRecord, GameStats, GameType, HiLoRound, PlayerGameStats, RoundToken, Transaction,
};

pub trait Storage {
    /// Monotone id source shared by accounts, transactions, records and
    /// round tokens.
    fn next_id(&mut self) -> u64;

    // Accounts
    fn insert_account(&mut self, account: Account);
    fn account(&self, id: u64) -> Option<&Account>;
    fn account_mut(&mut self, id: u64) -> Option<&mut Account>;
    fn account_by_handle(&self, handle: &str) -> Option<&Account>;
    fn accounts(&self) -> Vec<&Account>;
    fn remove_account(&mut self, id: u64) -> Option<Account>;

    // Ledger (append-only)
    fn append_transaction(&mut self, tx: Transaction);
    fn transactions(&self) -> &[Transaction];
    fn transactions_for(&self, account: u64) -> Vec<&Transaction>;
    fn remove_transactions_for(&mut self, account: u64);

    // Game records (append-only; anonymized rather than removed)
    fn append_record(&mut self, record: GameRecord);
    fn records(&self) -> &[GameRecord];
    fn records_for(&self, account: u64) -> Vec<&GameRecord>;
    fn anonymize_records(&mut self, account: u64);

    // Per-game aggregates
    fn game_stats(&self, game: GameType) -> Option<&GameStats>;
    fn game_stats_mut(&mut self, game: GameType) -> &mut GameStats;
    fn all_game_stats(&self) -> Vec<&GameStats>;

    // Per-player per-game aggregates
    fn player_stats(&self, account: u64, game: GameType) -> Option<&PlayerGameStats>;
    fn player_stats_mut(&mut self, account: u64, game: GameType) -> &mut PlayerGameStats;
    fn player_stats_for(&self, account: u64) -> Vec<&PlayerGameStats>;
    fn all_player_stats(&self) -> Vec<&PlayerGameStats>;
    fn remove_player_stats_for(&mut self, account: u64);

    // Unresolved hi-lo rounds
    fn insert_round(&mut self, round: HiLoRound);
    fn round(&self, token: RoundToken) -> Option<&HiLoRound>;
    fn take_round(&mut self, token: RoundToken) -> Option<HiLoRound>;
    fn remove_rounds_for(&mut self, account: u64);
}

/// In-memory adapter. Iteration orders are deterministic (BTree-backed).
#[derive(Debug, Default)]
pub struct MemStorage {
    next_id: u64,
    accounts: BTreeMap<u64, Account>,
    transactions: Vec<Transaction>,
    records: Vec<GameRecord>,
    game_stats: BTreeMap<GameType, GameStats>,
    player_stats: BTreeMap<(u64, GameType), PlayerGameStats>,
    rounds: BTreeMap<u64, HiLoRound>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemStorage {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn insert_account(&mut self, account: Account) {
        self.accounts.insert(account.id, account);
    }

    fn account(&self, id: u64) -> Option<&Account> {
        self.accounts.get(&id)
    }

    fn account_mut(&mut self, id: u64) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    fn account_by_handle(&self, handle: &str) -> Option<&Account> {
        self.accounts.values().find(|a| a.handle == handle)
    }

    fn accounts(&self) -> Vec<&Account> {
        self.accounts.values().collect()
    }

    fn remove_account(&mut self, id: u64) -> Option<Account> {
        self.accounts.remove(&id)
    }

    fn append_transaction(&mut self, tx: Transaction) {
        self.transactions.push(tx);
    }

    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn transactions_for(&self, account: u64) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| tx.account == account)
            .collect()
    }

    fn remove_transactions_for(&mut self, account: u64) {
        self.transactions.retain(|tx| tx.account != account);
    }

    fn append_record(&mut self, record: GameRecord) {
        self.records.push(record);
    }

    fn records(&self) -> &[GameRecord] {
        &self.records
    }

    fn records_for(&self, account: u64) -> Vec<&GameRecord> {
        self.records
            .iter()
            .filter(|r| r.account == Some(account))
            .collect()
    }

    fn anonymize_records(&mut self, account: u64) {
        for record in &mut self.records {
            if record.account == Some(account) {
                record.account = None;
            }
        }
    }

    fn game_stats(&self, game: GameType) -> Option<&GameStats> {
        self.game_stats.get(&game)
    }

    fn game_stats_mut(&mut self, game: GameType) -> &mut GameStats {
        self.game_stats
            .entry(game)
            .or_insert_with(|| GameStats::new(game))
    }

    fn all_game_stats(&self) -> Vec<&GameStats> {
        self.game_stats.values().collect()
    }

    fn player_stats(&self, account: u64, game: GameType) -> Option<&PlayerGameStats> {
        self.player_stats.get(&(account, game))
    }

    fn player_stats_mut(&mut self, account: u64, game: GameType) -> &mut PlayerGameStats {
        self.player_stats
            .entry((account, game))
            .or_insert_with(|| PlayerGameStats::new(account, game))
    }

    fn player_stats_for(&self, account: u64) -> Vec<&PlayerGameStats> {
        self.player_stats
            .range((account, GameType::Coinflip)..=(account, GameType::MegaMultiplier))
            .map(|(_, stats)| stats)
            .collect()
    }

    fn all_player_stats(&self) -> Vec<&PlayerGameStats> {
        self.player_stats.values().collect()
    }

    fn remove_player_stats_for(&mut self, account: u64) {
        self.player_stats.retain(|(a, _), _| *a != account);
    }

    fn insert_round(&mut self, round: HiLoRound) {
        self.rounds.insert(round.token.0, round);
    }

    fn round(&self, token: RoundToken) -> Option<&HiLoRound> {
        self.rounds.get(&token.0)
    }

    fn take_round(&mut self, token: RoundToken) -> Option<HiLoRound> {
        self.rounds.remove(&token.0)
    }

    fn remove_rounds_for(&mut self, account: u64) {
        self.rounds.retain(|_, round| round.account != account);
    }
}
