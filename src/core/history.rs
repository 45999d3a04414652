//! Undo history.
//!
//! Every committed player move pushes one `HistoryEntry`. An entry is a
//! short list of `HistoryStep`s (one for a draw or a lone King, two for a
//! pair) plus the points the move earned, which is everything needed to
//! reverse it.
//!
//! Reshuffles are never recorded, so they cannot be undone. A reshuffle
//! scatters the drawn cards through the stock, so it also drops every
//! entry holding a draw; earlier matches stay undoable.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::CardId;

/// A single reversible card movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryStep {
    /// Pyramid -> foundation.
    RemoveFromPyramid(CardId),
    /// Waste top -> foundation.
    RemoveFromWaste(CardId),
    /// Stock top -> waste top.
    DrawCard(CardId),
}

impl HistoryStep {
    /// The card this step moved.
    #[must_use]
    pub fn card(self) -> CardId {
        match self {
            HistoryStep::RemoveFromPyramid(c)
            | HistoryStep::RemoveFromWaste(c)
            | HistoryStep::DrawCard(c) => c,
        }
    }
}

/// One player move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Steps in the order they were applied. Undo walks them backwards.
    pub steps: SmallVec<[HistoryStep; 2]>,

    /// Score earned by the move.
    pub points: i64,
}

impl HistoryEntry {
    /// A stock draw.
    #[must_use]
    pub fn draw(card: CardId) -> Self {
        Self {
            steps: smallvec::smallvec![HistoryStep::DrawCard(card)],
            points: 0,
        }
    }

    /// A match made of the given removals.
    #[must_use]
    pub fn matched(steps: &[HistoryStep], points: i64) -> Self {
        Self {
            steps: SmallVec::from_slice(steps),
            points,
        }
    }

    /// Does this move include a stock draw?
    #[must_use]
    pub fn has_draw(&self) -> bool {
        self.steps
            .iter()
            .any(|step| matches!(step, HistoryStep::DrawCard(_)))
    }
}

/// LIFO stack of moves.
///
/// Backed by `im::Vector` so cloning an engine snapshot is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionHistory {
    entries: Vector<HistoryEntry>,
}

impl ActionHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop_back()
    }

    #[must_use]
    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Keep only the entries matching `keep`, preserving order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&HistoryEntry) -> bool,
    {
        self.entries.retain(keep);
    }

    /// Entries oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}
