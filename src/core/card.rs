//! Card values and the 52-card arena.
//!
//! Every card in a game lives in one fixed table indexed by `CardId`.
//! Collections (pyramid, stock, waste, foundation) hold ids, never cards,
//! so a card can only ever be described in one place.
//!
//! ## Usage
//!
//! ```
//! use pyramid_solitaire::core::{CardId, Deck, Rank, Suit};
//!
//! let deck = Deck::standard();
//! assert_eq!(deck.len(), 52);
//!
//! let queen = deck.find(Rank::Queen, Suit::Spades).unwrap();
//! assert_eq!(deck[queen].value(), 12);
//! assert_eq!(deck[queen].to_string(), "Q♠");
//! ```

use serde::{Deserialize, Serialize};

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Card suit.
///
/// Declaration order is the sprite-sheet order used by `Card::sprite_index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in sprite order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Index of this suit within `Suit::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

/// Card rank, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace through King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Pip value: Ace = 1 ... King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank symbol as printed on the card face.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// Handle to a card in the arena.
///
/// Ids are stable for the lifetime of a deal: id `n` is always the same
/// (suit, rank) regardless of where the shuffle put it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card id.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every id in a standard deck.
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A pyramid cell. Row 0 is the apex; row `r` has `r + 1` columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub row: u8,
    pub col: u8,
}

impl Slot {
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The two cells in the next row that cover this one.
    #[must_use]
    pub const fn covered_by(self) -> [Slot; 2] {
        [
            Slot::new(self.row + 1, self.col),
            Slot::new(self.row + 1, self.col + 1),
        ]
    }
}

/// Which collection currently holds a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Pyramid,
    Stock,
    Waste,
    Foundation,
}

impl Location {
    /// Face-up state every card in this collection must have.
    #[must_use]
    pub const fn face_up(self) -> bool {
        !matches!(self, Location::Stock)
    }
}

/// A card and its current placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,

    /// Pyramid cell this card was dealt to, if any.
    ///
    /// Kept after the card leaves the pyramid so undo can put it back.
    pub slot: Option<Slot>,

    pub location: Location,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down stock card.
    #[must_use]
    pub fn new(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            slot: None,
            location: Location::Stock,
            face_up: false,
        }
    }

    /// Pip value, 1..=13.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    #[must_use]
    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Index into a suit-major sprite sheet (Clubs, Diamonds, Hearts, Spades).
    #[must_use]
    pub const fn sprite_index(&self) -> usize {
        self.suit.index() * 13 + self.rank.value() as usize - 1
    }

    /// Move the card to `location`, flipping it to match.
    pub fn place(&mut self, location: Location) {
        self.location = location;
        self.face_up = location.face_up();
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// The arena of all 52 cards, indexed by `CardId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the 52 cards suit-major: ids 0..13 are Clubs Ace..King, and so on.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| (suit, rank)))
            .enumerate()
            .map(|(i, (suit, rank))| Card::new(CardId(i as u8), suit, rank))
            .collect();
        Self { cards }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Look up the id of a (rank, suit) pair.
    #[must_use]
    pub fn find(&self, rank: Rank, suit: Suit) -> Option<CardId> {
        self.cards
            .iter()
            .find(|c| c.rank == rank && c.suit == suit)
            .map(|c| c.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}

impl std::ops::Index<CardId> for Deck {
    type Output = Card;

    fn index(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }
}

impl std::ops::IndexMut<CardId> for Deck {
    fn index_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.index()]
    }
}
