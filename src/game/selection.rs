//! Click flow: select a card, then select its partner.

use tracing::debug;

use super::engine::SolitaireEngine;
use crate::core::CardId;
use crate::events::{Outcome, SolitaireEvent};
use crate::rules::{is_lone_king, is_pair};

impl SolitaireEngine {
    /// Select `id` for matching.
    ///
    /// - Not removable: no effect
    /// - King: removed on its own, any pending selection is cleared
    /// - Nothing pending: `id` becomes the pending selection
    /// - `id` already pending: deselected
    /// - Another card pending: the two are removed if they sum to 13;
    ///   either way the pending selection is cleared
    pub fn select_card(&mut self, id: CardId) -> Outcome {
        if self.drag_in_progress() {
            return Outcome::none();
        }
        if !self.is_removable(id) {
            debug!(card = %id, "card not selectable");
            return Outcome::none();
        }

        let mut out = Outcome::none();
        let card = self.zones.card(id);

        if is_lone_king(card) {
            if let Some(pending) = self.selected.take() {
                out.push(SolitaireEvent::SelectionCleared { card: pending });
            }
            let points = self.config.scoring.king;
            self.commit_match(&[id], points, &mut out);
            return out;
        }

        match self.selected.take() {
            None => {
                self.selected = Some(id);
                out.push(SolitaireEvent::CardSelected { card: id });
            }
            Some(pending) if pending == id => {
                out.push(SolitaireEvent::SelectionCleared { card: pending });
            }
            Some(pending) => {
                let partner = self.zones.card(pending);
                if self.is_removable(pending) && is_pair(partner, card) {
                    let points = self.config.scoring.pair;
                    self.commit_match(&[pending, id], points, &mut out);
                } else {
                    debug!(first = %pending, second = %id, "cards do not sum to 13");
                    out.push(SolitaireEvent::SelectionCleared { card: pending });
                }
            }
        }
        out
    }

    /// Clear the pending selection, if any.
    pub fn clear_selection(&mut self) -> Outcome {
        match self.selected.take() {
            Some(card) => Outcome::none().with(SolitaireEvent::SelectionCleared { card }),
            None => Outcome::none(),
        }
    }
}
