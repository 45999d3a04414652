//! Engine events.
//!
//! Every mutating call commits its state change first and then reports
//! what happened as a list of `SolitaireEvent`s. The presentation layer
//! animates them at its own pace; nothing it does with them feeds back
//! into the engine.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::{CardId, Location};

/// Something that changed in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolitaireEvent {
    /// A new game was dealt.
    Dealt { seed: u64, rows: u8 },

    /// A card became the pending selection.
    CardSelected { card: CardId },

    /// The pending selection was cleared without a match.
    SelectionCleared { card: CardId },

    /// A card moved to the foundation.
    CardRemoved { card: CardId, from: Location },

    /// A card was flipped from the stock onto the waste.
    CardDrawn { card: CardId },

    /// The waste was turned back into a freshly shuffled stock.
    WasteReshuffled { count: usize },

    /// Undo moved a card back.
    CardRestored { card: CardId, to: Location },

    /// A drag began. `preview` is the waste card exposed underneath, if any.
    DragStarted { card: CardId, preview: Option<CardId> },

    /// A drop did not match; the card is back in play where it was.
    DragReturned { card: CardId },

    /// The drag is over and any waste preview is hidden.
    DragEnded { card: CardId, matched: bool },

    /// Score or move counter changed.
    ScoreChanged { score: i64, moves: u32 },

    /// The pyramid is empty.
    Won,
}

impl SolitaireEvent {
    /// Does this event commit a card to the foundation?
    #[must_use]
    pub fn is_removal(&self) -> bool {
        matches!(self, SolitaireEvent::CardRemoved { .. })
    }
}

/// Result of an engine call: the events it produced.
///
/// An empty outcome means the call had no effect.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    events: SmallVec<[SolitaireEvent; 4]>,
}

impl Outcome {
    /// An outcome with no events.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: SolitaireEvent) {
        self.events.push(event);
    }

    /// Builder-style push.
    #[must_use]
    pub fn with(mut self, event: SolitaireEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Nothing changed.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }

    /// At least one card reached the foundation.
    #[must_use]
    pub fn matched(&self) -> bool {
        self.events.iter().any(SolitaireEvent::is_removal)
    }

    /// Cards that reached the foundation, in order.
    pub fn removed_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.events.iter().filter_map(|e| match e {
            SolitaireEvent::CardRemoved { card, .. } => Some(*card),
            _ => None,
        })
    }

    #[must_use]
    pub fn events(&self) -> &[SolitaireEvent] {
        &self.events
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl IntoIterator for Outcome {
    type Item = SolitaireEvent;
    type IntoIter = smallvec::IntoIter<[SolitaireEvent; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
