//! Rules of pyramid solitaire.
//!
//! - `removability`: which cards are live (covering, waste top, lifted card)
//! - `matching`: Kings and pairs summing to 13, hint enumeration
//!
//! These are pure functions over a `ZoneManager`; the engine owns all
//! mutation.

pub mod matching;
pub mod removability;

pub use matching::{available_matches, is_lone_king, is_pair, Match, PAIR_TOTAL};
pub use removability::{is_covered, is_removable, live_waste_top, removable_cards};
