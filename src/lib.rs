//! # pyramid-solitaire
//!
//! Rule engine for pyramid solitaire. Cards are laid out in a triangular
//! tableau; the player removes Kings on their own and pairs of cards that
//! sum to 13, drawing from a stock onto a waste pile and undoing moves.
//!
//! ## Design Principles
//!
//! 1. **Arena + index**: All 52 cards live in one table. Collections hold
//!    `CardId`s, so no card can be in two places at once.
//!
//! 2. **Rules are recomputed**: Whether a pyramid card is covered is always
//!    derived from the live pyramid, never cached.
//!
//! 3. **Commit, then notify**: Every mutating call commits synchronously and
//!    returns an `Outcome` of events for the presentation layer to animate.
//!    Illegal intents are no-ops with an empty outcome, not errors.
//!
//! ## Modules
//!
//! - `core`: Cards, configuration, errors, RNG, undo history
//! - `zones`: Pyramid grid and the zone manager that owns every card
//! - `rules`: Removability and matching
//! - `events`: Engine events and `Outcome`
//! - `game`: `SolitaireEngine`, the single owned game instance

pub mod core;
pub mod events;
pub mod game;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionHistory, Card, CardId, ConfigError, Deck, EmptyStockPolicy, GameRng, HistoryEntry,
    HistoryStep, InvariantViolation, Location, Rank, ScoreTable, Slot, SolitaireConfig, Suit,
    DECK_SIZE,
};

pub use crate::events::{Outcome, SolitaireEvent};

pub use crate::game::{GameClock, SolitaireEngine};

pub use crate::rules::Match;

pub use crate::zones::{Pyramid, ZoneManager};
