//! Five-card showdown poker.
//!
//! Player and dealer each receive five cards from one deck. The stronger
//! hand class wins; equal classes break on the class high card, and a full
//! tie pushes. A winning hand pays a gross multiplier from its own class,
//! so a high-card win only returns the stake.

use parlay_types::{GameError, Outcome, BASE_MULTIPLIER};

use super::{outcome_loss, outcome_tie, outcome_win};
use crate::cards::{card_rank_ace_high, card_suit, format_card_list};
use crate::rng::GameRng;

/// Hand classes, weakest to strongest.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandRank {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            HandRank::HighCard => "high card",
            HandRank::Pair => "pair",
            HandRank::TwoPair => "two pair",
            HandRank::ThreeOfAKind => "three of a kind",
            HandRank::Straight => "straight",
            HandRank::Flush => "flush",
            HandRank::FullHouse => "full house",
            HandRank::FourOfAKind => "four of a kind",
            HandRank::StraightFlush => "straight flush",
            HandRank::RoyalFlush => "royal flush",
        }
    }
}

/// Evaluated hand: class plus the rank that decides ties within the class
/// (quad rank for quads, trips rank for boats, top card otherwise).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandValue {
    pub rank: HandRank,
    pub high_card: u8,
}

/// Straight high card if the sorted ace-high ranks form a run.
/// The wheel (A-2-3-4-5) counts with high card 5.
fn straight_high(sorted_ranks: &[u8; 5]) -> Option<u8> {
    let consecutive = sorted_ranks.windows(2).all(|w| w[1] == w[0] + 1);
    if consecutive {
        return Some(sorted_ranks[4]);
    }
    if *sorted_ranks == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    None
}

pub fn evaluate_hand(cards: &[u8; 5]) -> HandValue {
    let mut ranks: [u8; 5] = cards.map(card_rank_ace_high);
    ranks.sort_unstable();
    let flush = cards.iter().all(|&c| card_suit(c) == card_suit(cards[0]));
    let straight = straight_high(&ranks);

    if let Some(high) = straight {
        if flush {
            if high == 14 {
                return HandValue {
                    rank: HandRank::RoyalFlush,
                    high_card: 14,
                };
            }
            return HandValue {
                rank: HandRank::StraightFlush,
                high_card: high,
            };
        }
    }

    // Count multiples: (count, rank), strongest group first.
    let mut groups: Vec<(u8, u8)> = Vec::new();
    for &rank in ranks.iter() {
        match groups.iter_mut().find(|(_, r)| *r == rank) {
            Some((count, _)) => *count += 1,
            None => groups.push((1, rank)),
        }
    }
    groups.sort_by(|a, b| b.cmp(a));

    match groups.as_slice() {
        [(4, quad), ..] => HandValue {
            rank: HandRank::FourOfAKind,
            high_card: *quad,
        },
        [(3, trips), (2, _)] => HandValue {
            rank: HandRank::FullHouse,
            high_card: *trips,
        },
        _ if flush => HandValue {
            rank: HandRank::Flush,
            high_card: ranks[4],
        },
        _ if straight.is_some() => HandValue {
            rank: HandRank::Straight,
            high_card: straight.unwrap_or(ranks[4]),
        },
        [(3, trips), ..] => HandValue {
            rank: HandRank::ThreeOfAKind,
            high_card: *trips,
        },
        [(2, high_pair), (2, _), ..] => HandValue {
            rank: HandRank::TwoPair,
            high_card: *high_pair,
        },
        [(2, pair), ..] => HandValue {
            rank: HandRank::Pair,
            high_card: *pair,
        },
        _ => HandValue {
            rank: HandRank::HighCard,
            high_card: ranks[4],
        },
    }
}

/// Gross payout multiplier for a winning hand, in basis points.
pub fn payout_bps(rank: HandRank) -> u64 {
    let multiplier = match rank {
        HandRank::HighCard => 1,
        HandRank::Pair => 1,
        HandRank::TwoPair => 2,
        HandRank::ThreeOfAKind => 3,
        HandRank::Straight => 4,
        HandRank::Flush => 6,
        HandRank::FullHouse => 10,
        HandRank::FourOfAKind => 25,
        HandRank::StraightFlush => 50,
        HandRank::RoyalFlush => 100,
    };
    multiplier * BASE_MULTIPLIER
}

pub fn play(bet: u64, rng: &mut GameRng) -> Result<Outcome, GameError> {
    let mut deck = rng.create_deck();
    let mut deal = || -> Result<[u8; 5], GameError> {
        let mut hand = [0u8; 5];
        for slot in hand.iter_mut() {
            *slot = rng.draw_card(&mut deck).ok_or(GameError::DeckExhausted)?;
        }
        Ok(hand)
    };
    let player = deal()?;
    let dealer = deal()?;

    let player_value = evaluate_hand(&player);
    let dealer_value = evaluate_hand(&dealer);

    let detail = format!(
        "{} ({}) vs {} ({})",
        player_value.rank.as_str(),
        format_card_list(&player),
        dealer_value.rank.as_str(),
        format_card_list(&dealer),
    );

    if player_value > dealer_value {
        outcome_win(bet, payout_bps(player_value.rank), detail)
    } else if player_value < dealer_value {
        Ok(outcome_loss(bet, detail))
    } else {
        Ok(outcome_tie(detail))
    }
}
