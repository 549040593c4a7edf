//! Auto-played blackjack against the dealer.
//!
//! The player draws to 17+, the dealer draws to the mode boundary: normal
//! mode stands on 17, hard mode hits 17 and stands on 18+. Natural blackjack
//! pays 3:2, other wins pay even money.

use parlay_types::{GameError, Outcome, BASE_MULTIPLIER};

use super::{outcome_loss, outcome_tie, outcome_win};
use crate::cards::{card_rank, format_card_list};
use crate::rng::GameRng;

/// Gross multiplier for a natural blackjack (3:2).
const NATURAL_BPS: u64 = 25_000;

/// Blackjack value of a single card: aces count 11 here, face cards 10.
fn card_value(card: u8) -> u8 {
    match card_rank(card) {
        1 => 11,
        rank if rank >= 10 => 10,
        rank => rank,
    }
}

/// Best hand value with aces downgraded from 11 to 1 while busting.
pub fn hand_value(cards: &[u8]) -> u8 {
    let mut value: u32 = cards.iter().map(|&c| card_value(c) as u32).sum();
    let mut aces = cards.iter().filter(|&&c| card_rank(c) == 1).count();
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }
    value as u8
}

/// Whether the dealer draws another card at this value.
fn dealer_hits(value: u8, hard_mode: bool) -> bool {
    value <= if hard_mode { 17 } else { 16 }
}

fn is_natural(cards: &[u8]) -> bool {
    cards.len() == 2 && hand_value(cards) == 21
}

fn draw(deck: &mut Vec<u8>, rng: &mut GameRng) -> Result<u8, GameError> {
    rng.draw_card(deck).ok_or(GameError::DeckExhausted)
}

pub fn play(hard_mode: bool, bet: u64, rng: &mut GameRng) -> Result<Outcome, GameError> {
    let mut deck = rng.create_deck();

    let mut player = vec![draw(&mut deck, rng)?, draw(&mut deck, rng)?];
    let mut dealer = vec![draw(&mut deck, rng)?, draw(&mut deck, rng)?];

    // Naturals settle before any drawing.
    match (is_natural(&player), is_natural(&dealer)) {
        (true, true) => {
            return Ok(outcome_tie(detail(&player, &dealer, "both natural")));
        }
        (true, false) => {
            return outcome_win(bet, NATURAL_BPS, detail(&player, &dealer, "natural blackjack"));
        }
        (false, true) => {
            return Ok(outcome_loss(bet, detail(&player, &dealer, "dealer natural")));
        }
        (false, false) => {}
    }

    while hand_value(&player) < 17 {
        player.push(draw(&mut deck, rng)?);
    }
    let player_value = hand_value(&player);
    if player_value > 21 {
        return Ok(outcome_loss(bet, detail(&player, &dealer, "player bust")));
    }

    while dealer_hits(hand_value(&dealer), hard_mode) {
        dealer.push(draw(&mut deck, rng)?);
    }
    let dealer_value = hand_value(&dealer);

    if dealer_value > 21 {
        return outcome_win(
            bet,
            2 * BASE_MULTIPLIER,
            detail(&player, &dealer, "dealer bust"),
        );
    }
    if player_value > dealer_value {
        return outcome_win(bet, 2 * BASE_MULTIPLIER, detail(&player, &dealer, "higher hand"));
    }
    if player_value < dealer_value {
        return Ok(outcome_loss(bet, detail(&player, &dealer, "lower hand")));
    }
    Ok(outcome_tie(detail(&player, &dealer, "push")))
}

fn detail(player: &[u8], dealer: &[u8], note: &str) -> String {
    format!(
        "player {} ({}) vs dealer {} ({}): {}",
        hand_value(player),
        format_card_list(player),
        hand_value(dealer),
        format_card_list(dealer),
        note
    )
}
