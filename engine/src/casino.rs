//! Top-level facade over games, ledger, stats and rewards.
//!
//! [`Casino`] owns the storage and wires one settlement path: validate the
//! bet, debit the stake, run the game, credit the payout, append the record
//! and fold the aggregates. Hi-lo splits the same path across its two phases.

use tracing::{debug, info};

use parlay_types::{
    Account, CasinoError, DailyClaim, GameError, GameParams, GameProfitEntry, GameRecord,
    GameStats, GameType, HiLoGuess, HiLoRound, LeaderboardEntry, LeaderboardSort, Outcome,
    OutcomeKind, PlayerGameStats, RoundToken, Settings, Transaction, TxKind, BASE_MULTIPLIER,
};

use crate::games::{self, hilo};
use crate::ledger;
use crate::registry::GameRegistry;
use crate::rewards;
use crate::rng::GameRng;
use crate::stats;
use crate::storage::{MemStorage, Storage};

/// A settled play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Played {
    pub outcome: Outcome,
    pub record_id: u64,
    pub new_balance: u64,
}

/// An opened hi-lo round: stake debited, first card on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HiLoStart {
    pub token: RoundToken,
    pub first_card: u8,
    pub new_balance: u64,
}

pub struct Casino<S: Storage> {
    storage: S,
    registry: GameRegistry,
    settings: Settings,
}

impl Casino<MemStorage> {
    pub fn in_memory(settings: Settings) -> Self {
        Self::new(MemStorage::new(), settings)
    }
}

impl<S: Storage> Casino<S> {
    pub fn new(storage: S, settings: Settings) -> Self {
        let registry = GameRegistry::new(&settings);
        Self {
            storage,
            registry,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut GameRegistry {
        &mut self.registry
    }

    /// Create an account seeded with the starting balance.
    pub fn register(&mut self, handle: &str, now: u64) -> Result<u64, CasinoError> {
        if self.storage.account_by_handle(handle).is_some() {
            return Err(CasinoError::HandleTaken);
        }
        let id = self.storage.next_id();
        self.storage
            .insert_account(Account::new(id, handle.to_string(), 0, now));
        if self.settings.starting_balance > 0 {
            ledger::credit(
                &mut self.storage,
                id,
                self.settings.starting_balance,
                TxKind::Adjust,
                "Starting balance".to_string(),
                None,
                now,
            )?;
        }
        debug!(account = id, handle, "account registered");
        Ok(id)
    }

    /// Run one single-phase game end to end.
    pub fn play(
        &mut self,
        account: u64,
        params: &GameParams,
        bet: u64,
        rng: &mut GameRng,
        now: u64,
    ) -> Result<Played, CasinoError> {
        let game = params.game_type();
        self.registry.validate_bet(game, bet)?;
        let balance = self
            .storage
            .account(account)
            .ok_or(CasinoError::UnknownAccount)?
            .balance;
        if bet > balance {
            return Err(CasinoError::InsufficientBalance {
                needed: bet,
                available: balance,
            });
        }

        // Evaluate before any mutation: a parameter error leaves no trace.
        let outcome = games::play(params, bet, rng)?;

        let record_id = self.storage.next_id();
        ledger::debit(
            &mut self.storage,
            account,
            bet,
            TxKind::Bet,
            format!("{} bet", game),
            Some(record_id),
            now,
        )?;
        self.settle(account, game, bet, outcome, record_id, now)
    }

    /// Open a hi-lo round: debit the stake and deal the visible card.
    pub fn start_hilo(
        &mut self,
        account: u64,
        bet: u64,
        rng: &mut GameRng,
        now: u64,
    ) -> Result<HiLoStart, CasinoError> {
        self.registry.validate_bet(GameType::HiLo, bet)?;
        // The bet is not linked to a record: one only exists once the round
        // resolves, and a cancelled round never produces one.
        let new_balance = ledger::debit(
            &mut self.storage,
            account,
            bet,
            TxKind::Bet,
            "hilo bet".to_string(),
            None,
            now,
        )?;
        let first_card = hilo::deal_first_card(rng);
        let token = RoundToken(self.storage.next_id());
        self.storage.insert_round(HiLoRound {
            token,
            account,
            bet,
            first_card,
            started_at: now,
        });
        debug!(account, token = token.0, first_card, "hilo round opened");
        Ok(HiLoStart {
            token,
            first_card,
            new_balance,
        })
    }

    /// Settle an open hi-lo round against a guess.
    ///
    /// An impossible guess is rejected without consuming the round.
    pub fn resolve_hilo(
        &mut self,
        account: u64,
        token: RoundToken,
        guess: HiLoGuess,
        rng: &mut GameRng,
        now: u64,
    ) -> Result<Played, CasinoError> {
        let round = self
            .storage
            .round(token)
            .ok_or(CasinoError::Game(GameError::UnknownRound))?
            .clone();
        if round.account != account {
            return Err(CasinoError::Game(GameError::RoundOwnerMismatch));
        }
        let outcome = hilo::resolve(round.first_card, guess, round.bet, rng)?;
        self.storage.take_round(token);
        let record_id = self.storage.next_id();
        self.settle(account, GameType::HiLo, round.bet, outcome, record_id, now)
    }

    /// Void an open hi-lo round and refund the stake. Returns the new balance.
    pub fn cancel_hilo(
        &mut self,
        account: u64,
        token: RoundToken,
        now: u64,
    ) -> Result<u64, CasinoError> {
        let round = self
            .storage
            .round(token)
            .ok_or(CasinoError::Game(GameError::UnknownRound))?;
        if round.account != account {
            return Err(CasinoError::Game(GameError::RoundOwnerMismatch));
        }
        let round = self
            .storage
            .take_round(token)
            .ok_or(CasinoError::Game(GameError::UnknownRound))?;
        ledger::credit(
            &mut self.storage,
            account,
            round.bet,
            TxKind::Adjust,
            "hilo round cancelled: stake returned".to_string(),
            None,
            now,
        )
    }

    fn settle(
        &mut self,
        account: u64,
        game: GameType,
        bet: u64,
        outcome: Outcome,
        record_id: u64,
        now: u64,
    ) -> Result<Played, CasinoError> {
        let payout = outcome.payout(bet);
        if payout > 0 {
            let kind = match outcome.kind {
                OutcomeKind::Win => TxKind::Win,
                _ => TxKind::Adjust,
            };
            ledger::credit(
                &mut self.storage,
                account,
                payout,
                kind,
                format!("{} payout: {}", game, outcome.detail),
                Some(record_id),
                now,
            )?;
        }

        self.storage.append_record(GameRecord {
            id: record_id,
            account: Some(account),
            game,
            bet,
            outcome: outcome.kind,
            win_amount: outcome.win_amount,
            multiplier_bps: outcome.multiplier_bps,
            at: now,
        });
        stats::record_game(&mut self.storage, account, game, bet, &outcome);

        let acct = self
            .storage
            .account_mut(account)
            .ok_or(CasinoError::UnknownAccount)?;
        acct.games_played += 1;
        if outcome.kind == OutcomeKind::Win {
            acct.games_won += 1;
        }
        acct.last_played = now;
        let new_balance = acct.balance;

        debug!(
            account,
            game = game.as_str(),
            bet,
            win_amount = outcome.win_amount,
            new_balance,
            "game settled"
        );
        if outcome.multiplier_bps >= 100 * BASE_MULTIPLIER {
            info!(
                account,
                game = game.as_str(),
                multiplier_bps = outcome.multiplier_bps,
                win_amount = outcome.win_amount,
                "multiplier jackpot settled"
            );
        }

        Ok(Played {
            outcome,
            record_id,
            new_balance,
        })
    }

    pub fn claim_daily(&mut self, account: u64, now: u64) -> Result<DailyClaim, CasinoError> {
        rewards::claim_daily(&mut self.storage, &self.settings, account, now)
    }

    pub fn transfer(
        &mut self,
        from: u64,
        to: u64,
        amount: u64,
        note: &str,
        now: u64,
    ) -> Result<(), CasinoError> {
        ledger::transfer(&mut self.storage, &self.settings, from, to, amount, note, now)
    }

    /// Remove an account. Its game records are kept anonymized; everything
    /// else about the player is deleted.
    pub fn delete_account(&mut self, account: u64) -> Result<(), CasinoError> {
        self.storage
            .remove_account(account)
            .ok_or(CasinoError::UnknownAccount)?;
        self.storage.remove_transactions_for(account);
        self.storage.remove_player_stats_for(account);
        self.storage.remove_rounds_for(account);
        self.storage.anonymize_records(account);
        info!(account, "account deleted, records anonymized");
        Ok(())
    }

    // Queries

    pub fn account(&self, id: u64) -> Option<&Account> {
        self.storage.account(id)
    }

    pub fn account_by_handle(&self, handle: &str) -> Option<&Account> {
        self.storage.account_by_handle(handle)
    }

    pub fn balance(&self, account: u64) -> Result<u64, CasinoError> {
        self.storage
            .account(account)
            .map(|a| a.balance)
            .ok_or(CasinoError::UnknownAccount)
    }

    pub fn history(&self, account: u64, limit: usize) -> Vec<Transaction> {
        ledger::history(&self.storage, account, limit)
    }

    pub fn records(&self) -> &[GameRecord] {
        self.storage.records()
    }

    /// A player's settled games, most recent first.
    pub fn records_for(&self, account: u64, limit: usize) -> Vec<&GameRecord> {
        let mut records = self.storage.records_for(account);
        records.reverse();
        records.truncate(limit);
        records
    }

    pub fn favorite_game(&self, account: u64) -> Option<GameType> {
        stats::favorite_game(&self.storage, account)
    }

    pub fn game_stats(&self, game: GameType) -> Option<&GameStats> {
        self.storage.game_stats(game)
    }

    pub fn player_stats(&self, account: u64, game: GameType) -> Option<&PlayerGameStats> {
        self.storage.player_stats(account, game)
    }

    pub fn top_balances(&self) -> Vec<LeaderboardEntry> {
        stats::top_balances(&self.storage)
    }

    pub fn top_earners(&self) -> Vec<LeaderboardEntry> {
        stats::top_earners(&self.storage)
    }

    pub fn most_generous(&self) -> Vec<LeaderboardEntry> {
        stats::most_generous(&self.storage)
    }

    pub fn player_leaderboard(
        &self,
        game: Option<GameType>,
        sort: LeaderboardSort,
    ) -> Vec<LeaderboardEntry> {
        stats::player_leaderboard(&self.storage, game, sort)
    }

    pub fn most_profitable_games(&self) -> Vec<GameProfitEntry> {
        stats::most_profitable_games(&self.storage)
    }

    pub fn least_profitable_games(&self) -> Vec<GameProfitEntry> {
        stats::least_profitable_games(&self.storage)
    }
}
