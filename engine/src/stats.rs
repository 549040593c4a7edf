//! Incremental statistics and leaderboards.
//!
//! `record_game` folds one settled outcome into both aggregate families;
//! every derived query reads only those rows (plus the ledger for the
//! generosity board). Replaying the record log through `record_game`
//! reproduces identical rows.

use parlay_types::{
    GameProfitEntry, GameType, LeaderboardEntry, LeaderboardSort, Outcome, OutcomeKind,
    LEADERBOARD_SIZE,
};

use crate::storage::Storage;

/// Fold one settled game into the per-game and per-player aggregates.
pub fn record_game<S: Storage>(storage: &mut S, account: u64, game: GameType, bet: u64, outcome: &Outcome) {
    let net = outcome.win_amount;
    let gross_payout = outcome.payout(bet);

    let game_row = storage.game_stats_mut(game);
    game_row.total_played += 1;
    game_row.total_wagered = game_row.total_wagered.saturating_add(bet);
    game_row.highest_wager = game_row.highest_wager.max(bet);
    // Tie refunds count as paid out, keeping
    // total_profit_loss == total_wagered - total_paid_out after every fold.
    game_row.total_paid_out = game_row.total_paid_out.saturating_add(gross_payout);
    game_row.total_profit_loss = game_row.total_profit_loss.saturating_sub(net);
    if outcome.kind == OutcomeKind::Win {
        game_row.highest_win = game_row.highest_win.max(net.max(0) as u64);
        game_row.largest_multiplier_bps = game_row.largest_multiplier_bps.max(outcome.multiplier_bps);
    }

    let first_play = storage.player_stats(account, game).is_none();
    let seq = if first_play { storage.next_id() } else { 0 };
    let player_row = storage.player_stats_mut(account, game);
    if first_play {
        player_row.first_played_seq = seq;
    }
    player_row.played += 1;
    match outcome.kind {
        OutcomeKind::Win => {
            player_row.won += 1;
            player_row.total_won = player_row.total_won.saturating_add(gross_payout);
            player_row.highest_win = player_row.highest_win.max(net.max(0) as u64);
        }
        OutcomeKind::Loss => player_row.lost += 1,
        OutcomeKind::Tie => player_row.tied += 1,
    }
    player_row.total_wagered = player_row.total_wagered.saturating_add(bet);
    player_row.net_profit_loss = player_row.net_profit_loss.saturating_add(net);
    // Round-half-up percentage.
    player_row.win_rate_pct = ((player_row.won * 100 + player_row.played / 2) / player_row.played) as u8;
}

/// The game this player has settled most rounds of. Ties go to the game
/// played first.
pub fn favorite_game<S: Storage>(storage: &S, account: u64) -> Option<GameType> {
    storage
        .player_stats_for(account)
        .into_iter()
        .filter(|row| row.played > 0)
        .max_by_key(|row| (row.played, std::cmp::Reverse(row.first_played_seq)))
        .map(|row| row.game)
}

fn top_entries(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(|a, b| b.value.cmp(&a.value).then(a.account.cmp(&b.account)));
    entries.truncate(LEADERBOARD_SIZE);
    entries
}

/// Richest accounts.
pub fn top_balances<S: Storage>(storage: &S) -> Vec<LeaderboardEntry> {
    top_entries(
        storage
            .accounts()
            .into_iter()
            .map(|a| LeaderboardEntry {
                account: a.id,
                handle: a.handle.clone(),
                value: a.balance as i64,
            })
            .collect(),
    )
}

/// Best lifetime game result: gross winnings minus stakes.
pub fn top_earners<S: Storage>(storage: &S) -> Vec<LeaderboardEntry> {
    top_entries(
        storage
            .accounts()
            .into_iter()
            .map(|a| LeaderboardEntry {
                account: a.id,
                handle: a.handle.clone(),
                value: a.total_won as i64 - a.total_spent as i64,
            })
            .collect(),
    )
}

/// Largest total amount given away in transfers.
pub fn most_generous<S: Storage>(storage: &S) -> Vec<LeaderboardEntry> {
    let entries = storage
        .accounts()
        .into_iter()
        .map(|a| {
            let given: i64 = storage
                .transactions_for(a.id)
                .into_iter()
                .filter(|tx| tx.kind == parlay_types::TxKind::TransferOut)
                .map(|tx| tx.amount.unsigned_abs() as i64)
                .sum();
            LeaderboardEntry {
                account: a.id,
                handle: a.handle.clone(),
                value: given,
            }
        })
        .filter(|entry| entry.value > 0)
        .collect();
    top_entries(entries)
}

/// Player ranking by the chosen key, over one game type or all of them.
pub fn player_leaderboard<S: Storage>(
    storage: &S,
    game: Option<GameType>,
    sort: LeaderboardSort,
) -> Vec<LeaderboardEntry> {
    let entries = storage
        .accounts()
        .into_iter()
        .map(|a| {
            let rows: Vec<_> = storage
                .player_stats_for(a.id)
                .into_iter()
                .filter(|row| game.map_or(true, |g| row.game == g))
                .collect();
            let value = match sort {
                LeaderboardSort::NetProfit => rows.iter().map(|r| r.net_profit_loss).sum::<i64>(),
                LeaderboardSort::GamesPlayed => rows.iter().map(|r| r.played).sum::<u64>() as i64,
                LeaderboardSort::GamesWon => rows.iter().map(|r| r.won).sum::<u64>() as i64,
                LeaderboardSort::TotalWagered => {
                    rows.iter().map(|r| r.total_wagered).sum::<u64>() as i64
                }
                LeaderboardSort::HighestWin => {
                    rows.iter().map(|r| r.highest_win).max().unwrap_or(0) as i64
                }
            };
            LeaderboardEntry {
                account: a.id,
                handle: a.handle.clone(),
                value,
            }
        })
        .collect();
    top_entries(entries)
}

fn profit_entries<S: Storage>(storage: &S) -> Vec<GameProfitEntry> {
    storage
        .all_game_stats()
        .into_iter()
        .map(|row| GameProfitEntry {
            game: row.game,
            total_profit_loss: row.total_profit_loss,
            total_played: row.total_played,
        })
        .collect()
}

/// Games ranked by house profit, best first.
pub fn most_profitable_games<S: Storage>(storage: &S) -> Vec<GameProfitEntry> {
    let mut entries = profit_entries(storage);
    entries.sort_by(|a, b| b.total_profit_loss.cmp(&a.total_profit_loss));
    entries
}

/// Games ranked by house profit, worst first.
pub fn least_profitable_games<S: Storage>(storage: &S) -> Vec<GameProfitEntry> {
    let mut entries = profit_entries(storage);
    entries.sort_by(|a, b| a.total_profit_loss.cmp(&b.total_profit_loss));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;
    use parlay_types::{Account, Outcome};

    fn win(bet: u64, mult_bps: u64) -> Outcome {
        let payout = bet * mult_bps / 10_000;
        Outcome {
            kind: OutcomeKind::Win,
            win_amount: payout as i64 - bet as i64,
            multiplier_bps: mult_bps,
            detail: String::new(),
        }
    }

    fn loss(bet: u64) -> Outcome {
        Outcome {
            kind: OutcomeKind::Loss,
            win_amount: -(bet as i64),
            multiplier_bps: 0,
            detail: String::new(),
        }
    }

    fn tie() -> Outcome {
        Outcome {
            kind: OutcomeKind::Tie,
            win_amount: 0,
            multiplier_bps: 10_000,
            detail: String::new(),
        }
    }

    #[test]
    fn game_row_formulas() {
        let mut storage = MemStorage::new();
        record_game(&mut storage, 1, GameType::Slots, 100, &win(100, 50_000));
        record_game(&mut storage, 1, GameType::Slots, 200, &loss(200));
        record_game(&mut storage, 2, GameType::Slots, 50, &tie());

        let row = storage.game_stats(GameType::Slots).unwrap();
        assert_eq!(row.total_played, 3);
        assert_eq!(row.total_wagered, 350);
        assert_eq!(row.total_paid_out, 550); // 500 win payout + 50 tie refund
        // House: -400 on the win, +200 on the loss, 0 on the tie.
        assert_eq!(row.total_profit_loss, -200);
        assert_eq!(row.highest_win, 400);
        assert_eq!(row.highest_wager, 200);
        assert_eq!(row.largest_multiplier_bps, 50_000);
    }

    #[test]
    fn game_row_balances_after_every_fold() {
        let mut storage = MemStorage::new();
        let plays = [
            (100, win(100, 25_000)),
            (200, loss(200)),
            (75, tie()),
            (50, win(50, 500_000)),
            (75, tie()),
        ];
        for (bet, outcome) in &plays {
            record_game(&mut storage, 1, GameType::Blackjack, *bet, outcome);
            let row = storage.game_stats(GameType::Blackjack).unwrap();
            assert_eq!(
                row.total_profit_loss,
                row.total_wagered as i64 - row.total_paid_out as i64
            );
        }
    }

    #[test]
    fn player_row_formulas() {
        let mut storage = MemStorage::new();
        record_game(&mut storage, 1, GameType::Dice, 100, &win(100, 20_000));
        record_game(&mut storage, 1, GameType::Dice, 100, &loss(100));
        record_game(&mut storage, 1, GameType::Dice, 100, &loss(100));

        let row = storage.player_stats(1, GameType::Dice).unwrap();
        assert_eq!(row.played, 3);
        assert_eq!(row.won, 1);
        assert_eq!(row.lost, 2);
        assert_eq!(row.win_rate_pct, 33);
        assert_eq!(row.total_wagered, 300);
        assert_eq!(row.total_won, 200);
        assert_eq!(row.net_profit_loss, -100);
        assert_eq!(row.highest_win, 100);
    }

    #[test]
    fn win_rate_rounds_half_up() {
        let mut storage = MemStorage::new();
        record_game(&mut storage, 1, GameType::Coinflip, 10, &win(10, 20_000));
        record_game(&mut storage, 1, GameType::Coinflip, 10, &loss(10));
        assert_eq!(
            storage.player_stats(1, GameType::Coinflip).unwrap().win_rate_pct,
            50
        );
    }

    #[test]
    fn favorite_game_is_most_played() {
        let mut storage = MemStorage::new();
        assert_eq!(favorite_game(&storage, 1), None);

        record_game(&mut storage, 1, GameType::Slots, 10, &loss(10));
        record_game(&mut storage, 1, GameType::Poker, 10, &loss(10));
        record_game(&mut storage, 1, GameType::Poker, 10, &loss(10));
        assert_eq!(favorite_game(&storage, 1), Some(GameType::Poker));
    }

    #[test]
    fn favorite_game_tie_breaks_on_first_played() {
        let mut storage = MemStorage::new();
        // Crash came first, so an equal play count keeps it the favorite
        // even though other games sort ahead of it.
        record_game(&mut storage, 1, GameType::Crash, 10, &loss(10));
        record_game(&mut storage, 1, GameType::Roulette, 10, &loss(10));
        assert_eq!(favorite_game(&storage, 1), Some(GameType::Crash));

        record_game(&mut storage, 1, GameType::Roulette, 10, &loss(10));
        assert_eq!(favorite_game(&storage, 1), Some(GameType::Roulette));
    }

    #[test]
    fn leaderboards_sort_and_truncate() {
        let mut storage = MemStorage::new();
        for id in 1..=15u64 {
            storage.insert_account(Account::new(id, format!("p{id}"), id * 10, 0));
        }
        let board = top_balances(&storage);
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        assert_eq!(board[0].account, 15);
        assert_eq!(board[0].value, 150);
        assert!(board.windows(2).all(|w| w[0].value >= w[1].value));
    }

    #[test]
    fn generosity_from_transfer_ledger() {
        let mut storage = MemStorage::new();
        storage.insert_account(Account::new(1, "a".into(), 1_000, 0));
        storage.insert_account(Account::new(2, "b".into(), 1_000, 0));
        let settings = parlay_types::Settings::default();
        crate::ledger::transfer(&mut storage, &settings, 1, 2, 300, "", 5).unwrap();
        crate::ledger::transfer(&mut storage, &settings, 2, 1, 100, "", 6).unwrap();

        let board = most_generous(&storage);
        assert_eq!(board[0].account, 1);
        assert_eq!(board[0].value, 300);
        assert_eq!(board[1].account, 2);
        assert_eq!(board[1].value, 100);
    }

    #[test]
    fn player_leaderboard_sort_keys() {
        let mut storage = MemStorage::new();
        storage.insert_account(Account::new(1, "a".into(), 0, 0));
        storage.insert_account(Account::new(2, "b".into(), 0, 0));
        // Player 1: one big win. Player 2: grinds more games at a loss.
        record_game(&mut storage, 1, GameType::Crash, 100, &win(100, 100_000));
        record_game(&mut storage, 2, GameType::Dice, 500, &loss(500));
        record_game(&mut storage, 2, GameType::Dice, 500, &loss(500));

        let by_profit = player_leaderboard(&storage, None, LeaderboardSort::NetProfit);
        assert_eq!(by_profit[0].account, 1);

        let by_played = player_leaderboard(&storage, None, LeaderboardSort::GamesPlayed);
        assert_eq!(by_played[0].account, 2);

        let by_wagered = player_leaderboard(&storage, None, LeaderboardSort::TotalWagered);
        assert_eq!(by_wagered[0].account, 2);
        assert_eq!(by_wagered[0].value, 1_000);

        let by_highest = player_leaderboard(&storage, None, LeaderboardSort::HighestWin);
        assert_eq!(by_highest[0].account, 1);
        assert_eq!(by_highest[0].value, 900);
    }

    #[test]
    fn player_leaderboard_scopes_to_one_game() {
        let mut storage = MemStorage::new();
        storage.insert_account(Account::new(1, "a".into(), 0, 0));
        storage.insert_account(Account::new(2, "b".into(), 0, 0));
        // Player 1 grinds dice, player 2 grinds slots.
        record_game(&mut storage, 1, GameType::Dice, 100, &loss(100));
        record_game(&mut storage, 1, GameType::Dice, 100, &loss(100));
        record_game(&mut storage, 2, GameType::Slots, 100, &loss(100));

        let dice = player_leaderboard(
            &storage,
            Some(GameType::Dice),
            LeaderboardSort::GamesPlayed,
        );
        assert_eq!(dice[0].account, 1);
        assert_eq!(dice[0].value, 2);
        // Player 2 has no dice rows and contributes zero.
        assert_eq!(dice[1].value, 0);

        let slots = player_leaderboard(
            &storage,
            Some(GameType::Slots),
            LeaderboardSort::TotalWagered,
        );
        assert_eq!(slots[0].account, 2);
        assert_eq!(slots[0].value, 100);
    }

    #[test]
    fn game_profitability_ranking() {
        let mut storage = MemStorage::new();
        // House wins at dice, loses at crash.
        record_game(&mut storage, 1, GameType::Dice, 500, &loss(500));
        record_game(&mut storage, 1, GameType::Crash, 100, &win(100, 100_000));

        let most = most_profitable_games(&storage);
        assert_eq!(most[0].game, GameType::Dice);
        assert_eq!(most[0].total_profit_loss, 500);

        let least = least_profitable_games(&storage);
        assert_eq!(least[0].game, GameType::Crash);
        assert_eq!(least[0].total_profit_loss, -900);
    }

    #[test]
    fn replay_reproduces_rows() {
        let mut a = MemStorage::new();
        let mut b = MemStorage::new();
        let plays = [
            (GameType::Slots, 100, win(100, 50_000)),
            (GameType::Slots, 50, loss(50)),
            (GameType::Blackjack, 200, tie()),
        ];
        for (game, bet, outcome) in &plays {
            record_game(&mut a, 1, *game, *bet, outcome);
        }
        for (game, bet, outcome) in &plays {
            record_game(&mut b, 1, *game, *bet, outcome);
        }
        assert_eq!(
            a.game_stats(GameType::Slots),
            b.game_stats(GameType::Slots)
        );
        assert_eq!(
            a.player_stats(1, GameType::Blackjack),
            b.player_stats(1, GameType::Blackjack)
        );
    }

    #[test]
    fn most_generous_requires_transfers() {
        let mut storage = MemStorage::new();
        storage.insert_account(Account::new(1, "a".into(), 100, 0));
        assert!(most_generous(&storage).is_empty());
    }
}
