//! Drag flow: pick a card up, drop it on a partner (or on empty space for
//! a King), then end the drag.
//!
//! The lifted card keeps its location and collection membership the whole
//! time. It is only left out of the live view, so it stops covering the
//! cards above it and the waste card beneath it becomes the live top.
//! An unmatched drop therefore "returns" the card by clearing the lift.

use tracing::{debug, warn};

use super::engine::SolitaireEngine;
use crate::core::{CardId, Location};
use crate::events::{Outcome, SolitaireEvent};
use crate::rules::{self, is_lone_king, is_pair};

/// An in-progress drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragState {
    pub card: CardId,
    pub origin: Location,
    /// Waste card exposed under a dragged waste top.
    pub preview: Option<CardId>,
    /// `Some(matched)` once the drop has been resolved.
    pub dropped: Option<bool>,
}

impl DragState {
    /// The card still lifted out of the live view, if the drop is pending.
    #[must_use]
    pub fn lifted(&self) -> Option<CardId> {
        match self.dropped {
            None => Some(self.card),
            Some(_) => None,
        }
    }
}

impl SolitaireEngine {
    /// Card being dragged, from `begin_drag` until `end_drag`.
    #[must_use]
    pub fn dragged(&self) -> Option<CardId> {
        self.drag.map(|d| d.card)
    }

    /// Waste card shown under a dragged waste top, until `end_drag`.
    #[must_use]
    pub fn waste_preview(&self) -> Option<CardId> {
        self.drag.and_then(|d| d.preview)
    }

    /// Pick up a removable card.
    pub fn begin_drag(&mut self, id: CardId) -> Outcome {
        if self.drag_in_progress() {
            return Outcome::none();
        }
        if !self.is_removable(id) {
            debug!(card = %id, "card not draggable");
            return Outcome::none();
        }

        let mut out = Outcome::none();
        if let Some(pending) = self.selected.take() {
            out.push(SolitaireEvent::SelectionCleared { card: pending });
        }

        let origin = self.zones.card(id).location;
        let preview = match origin {
            Location::Waste => self.zones.waste_second(),
            _ => None,
        };
        self.drag = Some(DragState {
            card: id,
            origin,
            preview,
            dropped: None,
        });

        out.push(SolitaireEvent::DragStarted { card: id, preview });
        out
    }

    /// Resolve the drop of the dragged card on `target` (`None` = empty space).
    ///
    /// - King on empty space: removed alone
    /// - On a removable card summing to 13: both removed
    /// - Anything else: no match, the card goes back into play
    ///
    /// Scores `per_pyramid_card` for each matched card that came from the
    /// pyramid. Returns an empty outcome if there is no pending drag.
    pub fn drop_card(&mut self, target: Option<CardId>) -> Outcome {
        let Some(drag) = self.drag else {
            return Outcome::none();
        };
        let Some(lifted) = drag.lifted() else {
            return Outcome::none();
        };

        let dragged = self.zones.card(lifted);
        let cards: Option<smallvec::SmallVec<[CardId; 2]>> = match target {
            None if is_lone_king(dragged) => Some(smallvec::smallvec![lifted]),
            Some(t)
                if rules::is_removable(&self.zones, t, Some(lifted))
                    && self.zones.get(t).is_some_and(|c| is_pair(dragged, c)) =>
            {
                Some(smallvec::smallvec![lifted, t])
            }
            _ => None,
        };

        let mut out = Outcome::none();
        match cards {
            Some(cards) => {
                let from_pyramid = cards
                    .iter()
                    .filter(|&&c| self.zones.card(c).location == Location::Pyramid)
                    .count() as i64;
                let points = from_pyramid * self.config.scoring.per_pyramid_card;

                self.drag = Some(DragState { dropped: Some(true), ..drag });
                // Dragged card first: for a waste-on-waste pair it is the top.
                self.commit_match(&cards, points, &mut out);
            }
            None => {
                debug!(card = %lifted, ?target, "drop did not match");
                self.drag = Some(DragState { dropped: Some(false), ..drag });
                out.push(SolitaireEvent::DragReturned { card: lifted });
            }
        }
        out
    }

    /// Finish the drag and hide any waste preview.
    ///
    /// `matched` is what the host believes happened; the engine reports
    /// what the drop actually resolved to. Ending a drag that was never
    /// dropped returns the card to play.
    pub fn end_drag(&mut self, matched: bool) -> Outcome {
        let Some(drag) = self.drag.take() else {
            return Outcome::none();
        };

        let mut out = Outcome::none();
        let resolved = match drag.dropped {
            Some(resolved) => resolved,
            None => {
                out.push(SolitaireEvent::DragReturned { card: drag.card });
                false
            }
        };
        if resolved != matched {
            warn!(card = %drag.card, matched, resolved, "end_drag disagrees with drop result");
        }

        out.push(SolitaireEvent::DragEnded {
            card: drag.card,
            matched: resolved,
        });
        out
    }
}
