//! Core engine types: cards, configuration, errors, RNG, undo history.
//!
//! Nothing in here knows about the rules of pyramid solitaire; it is the
//! vocabulary the zones, rules and engine are written in.

pub mod card;
pub mod config;
pub mod error;
pub mod history;
pub mod rng;

pub use card::{Card, CardId, Deck, Location, Rank, Slot, Suit, DECK_SIZE};
pub use config::{pyramid_size, EmptyStockPolicy, ScoreTable, SolitaireConfig, DEFAULT_ROWS, MAX_ROWS};
pub use error::{ConfigError, InvariantViolation};
pub use history::{ActionHistory, HistoryEntry, HistoryStep};
pub use rng::GameRng;
