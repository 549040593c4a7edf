//! Card encoding helpers.
//!
//! A card is a `u8` in 0..52: `suit = card / 13`, `rank = card % 13` with
//! 0 = ace.

/// Rank 1..=13 (ace low).
pub fn card_rank(card: u8) -> u8 {
    (card % 13) + 1
}

/// Rank 2..=14 (ace high).
pub fn card_rank_ace_high(card: u8) -> u8 {
    let rank = card % 13;
    if rank == 0 {
        14
    } else {
        rank + 1
    }
}

/// Suit 0..=3: spades, hearts, diamonds, clubs.
pub fn card_suit(card: u8) -> u8 {
    card / 13
}

pub fn is_valid_card(card: u8) -> bool {
    card < 52
}

/// Short display form, e.g. `A♠` or `10♦`.
pub fn format_card(card: u8) -> String {
    let rank = match card % 13 {
        0 => "A",
        9 => "10",
        10 => "J",
        11 => "Q",
        12 => "K",
        n => return format!("{}{}", n + 1, suit_symbol(card)),
    };
    format!("{}{}", rank, suit_symbol(card))
}

fn suit_symbol(card: u8) -> &'static str {
    match card_suit(card) {
        0 => "♠",
        1 => "♥",
        2 => "♦",
        _ => "♣",
    }
}

/// Space-separated card list for outcome details.
pub fn format_card_list(cards: &[u8]) -> String {
    cards
        .iter()
        .map(|&c| format_card(c))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_and_suits() {
        assert_eq!(card_rank(0), 1); // ace of spades
        assert_eq!(card_rank(12), 13); // king of spades
        assert_eq!(card_rank(13), 1); // ace of hearts
        assert_eq!(card_rank_ace_high(0), 14);
        assert_eq!(card_rank_ace_high(1), 2);
        assert_eq!(card_rank_ace_high(12), 13);
        assert_eq!(card_suit(0), 0);
        assert_eq!(card_suit(51), 3);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_card(0), "A♠");
        assert_eq!(format_card(9), "10♠");
        assert_eq!(format_card(25), "K♥");
        assert_eq!(format_card(27), "2♦");
        assert_eq!(format_card_list(&[0, 25]), "A♠ K♥");
    }
}
