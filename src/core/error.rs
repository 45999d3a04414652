//! Error types.
//!
//! Gameplay never fails: an illegal intent is a no-op that returns an empty
//! `Outcome`. Errors exist only for bad configuration and for auditing
//! engine invariants.

use thiserror::Error;

use super::card::{CardId, Location, Slot};

/// Rejected engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("pyramid must have between 1 and {max} rows, got {rows}")]
    InvalidRowCount { rows: u8, max: u8 },

    #[error("invalid deck order: {reason}")]
    InvalidDeckOrder { reason: String },
}

/// A broken engine invariant. Seeing one of these means a bug in the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{card} appears in more than one collection")]
    DuplicateMembership { card: CardId },

    #[error("{card} is in no collection")]
    MissingCard { card: CardId },

    #[error("{card} is held by {held_by:?} but tagged {tagged:?}")]
    LocationMismatch {
        card: CardId,
        held_by: Location,
        tagged: Location,
    },

    #[error("{card} in {location:?} has the wrong face-up state")]
    FaceMismatch { card: CardId, location: Location },

    #[error("{card} sits in pyramid cell {slot:?} but records {recorded:?}")]
    SlotMismatch {
        card: CardId,
        slot: Slot,
        recorded: Option<Slot>,
    },
}
