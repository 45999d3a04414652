//! Pairing rules.
//!
//! A match is a lone King, or two different removable cards whose values
//! sum to 13.

use serde::{Deserialize, Serialize};

use super::removability::removable_cards;
use crate::core::card::{Card, CardId};
use crate::zones::ZoneManager;

/// Values of a pair must add up to this.
pub const PAIR_TOTAL: u8 = 13;

/// A legal match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Match {
    King(CardId),
    Pair(CardId, CardId),
}

impl Match {
    /// Cards the match removes.
    #[must_use]
    pub fn cards(self) -> smallvec::SmallVec<[CardId; 2]> {
        match self {
            Match::King(k) => smallvec::smallvec![k],
            Match::Pair(a, b) => smallvec::smallvec![a, b],
        }
    }
}

#[must_use]
pub fn is_lone_king(card: &Card) -> bool {
    card.value() == PAIR_TOTAL
}

/// Two distinct cards summing to 13.
#[must_use]
pub fn is_pair(a: &Card, b: &Card) -> bool {
    a.id != b.id && a.value() + b.value() == PAIR_TOTAL
}

/// Every match the click flow could make right now.
///
/// Kings come first, then pairs in the order their cards appear in
/// `removable_cards`.
#[must_use]
pub fn available_matches(zones: &ZoneManager) -> Vec<Match> {
    let removable = removable_cards(zones);
    let mut matches: Vec<Match> = removable
        .iter()
        .filter(|&&id| is_lone_king(zones.card(id)))
        .map(|&id| Match::King(id))
        .collect();

    for (i, &a) in removable.iter().enumerate() {
        for &b in &removable[i + 1..] {
            if is_pair(zones.card(a), zones.card(b)) {
                matches.push(Match::Pair(a, b));
            }
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Deck, Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        let deck = Deck::standard();
        let id = deck.find(rank, suit).unwrap();
        deck[id].clone()
    }

    #[test]
    fn test_pairs() {
        assert!(is_pair(&card(Rank::Six, Suit::Clubs), &card(Rank::Seven, Suit::Hearts)));
        assert!(is_pair(&card(Rank::Ace, Suit::Spades), &card(Rank::Queen, Suit::Spades)));
        assert!(is_pair(&card(Rank::Two, Suit::Diamonds), &card(Rank::Jack, Suit::Clubs)));
        assert!(!is_pair(&card(Rank::Six, Suit::Clubs), &card(Rank::Six, Suit::Hearts)));
        assert!(!is_pair(&card(Rank::King, Suit::Clubs), &card(Rank::Ace, Suit::Hearts)));
    }

    #[test]
    fn test_card_never_pairs_with_itself() {
        let six = card(Rank::Six, Suit::Clubs);
        assert!(!is_pair(&six, &six));
    }

    #[test]
    fn test_lone_king() {
        assert!(is_lone_king(&card(Rank::King, Suit::Hearts)));
        assert!(!is_lone_king(&card(Rank::Queen, Suit::Hearts)));
    }

    #[test]
    fn test_match_cards() {
        assert_eq!(Match::King(CardId(12)).cards().as_slice(), &[CardId(12)]);
        assert_eq!(
            Match::Pair(CardId(1), CardId(2)).cards().as_slice(),
            &[CardId(1), CardId(2)]
        );
    }

    #[test]
    fn test_available_matches_on_identity_deal() {
        // Bottom row of an unshuffled deal: 9♦ 10♦ J♦ Q♦ K♦ A♥ 2♥ (ids 21..=27)
        let zones = ZoneManager::deal(7, &CardId::all().collect::<Vec<_>>());
        let matches = available_matches(&zones);

        assert_eq!(
            matches,
            vec![
                Match::King(CardId(25)),
                Match::Pair(CardId(23), CardId(27)),
                Match::Pair(CardId(24), CardId(26)),
            ]
        );
    }
}
