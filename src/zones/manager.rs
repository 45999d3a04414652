//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` owns the card arena and the four collections that
//! partition it:
//! - Pyramid: slot grid (see `Pyramid`)
//! - Stock: ordered, face-down, last element is the top
//! - Waste: ordered, face-up, last element is the top
//! - Foundation: sink for matched cards, kept in arrival order
//!
//! Every move goes through a method here so a card's `location` and
//! `face_up` always agree with the collection that holds it.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::pyramid::Pyramid;
use crate::core::card::{Card, CardId, Deck, Location, DECK_SIZE};
use crate::core::config::MAX_ROWS;
use crate::core::error::InvariantViolation;
use crate::core::rng::GameRng;

/// Card arena plus the four collections.
///
/// ## Usage
///
/// ```
/// use pyramid_solitaire::core::{CardId, Location};
/// use pyramid_solitaire::zones::ZoneManager;
///
/// let order: Vec<CardId> = CardId::all().collect();
/// let mut zones = ZoneManager::deal(3, &order);
///
/// assert_eq!(zones.pyramid().len(), 6);
/// assert_eq!(zones.stock().len(), 46);
///
/// let drawn = zones.stock_to_waste().unwrap();
/// assert_eq!(zones.card(drawn).location, Location::Waste);
/// assert_eq!(zones.waste_top(), Some(drawn));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    deck: Deck,
    pyramid: Pyramid,
    stock: Vec<CardId>,
    waste: Vec<CardId>,
    foundation: Vec<CardId>,
}

impl ZoneManager {
    /// Deal `order` into a pyramid of `rows` rows (row-major) and put the
    /// rest into the stock in the same order.
    ///
    /// # Panics
    ///
    /// If `rows` is outside `1..=MAX_ROWS` or `order` does not hold all 52
    /// cards. `SolitaireEngine` validates both before dealing.
    #[must_use]
    pub fn deal(rows: u8, order: &[CardId]) -> Self {
        assert!(
            (1..=MAX_ROWS).contains(&rows),
            "deal needs 1..={} rows, got {}",
            MAX_ROWS,
            rows
        );
        assert_eq!(order.len(), DECK_SIZE, "deal needs all {} cards", DECK_SIZE);

        let mut deck = Deck::standard();
        let mut pyramid = Pyramid::new(rows);
        let slots: Vec<_> = pyramid.slots().collect();
        let (dealt, rest) = order.split_at(slots.len());

        for (&slot, &id) in slots.iter().zip(dealt) {
            pyramid.insert(slot, id);
            let card = &mut deck[id];
            card.slot = Some(slot);
            card.place(Location::Pyramid);
        }

        for &id in rest {
            deck[id].place(Location::Stock);
        }

        Self {
            deck,
            pyramid,
            stock: rest.to_vec(),
            waste: Vec::new(),
            foundation: Vec::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn card(&self, id: CardId) -> &Card {
        &self.deck[id]
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id)
    }

    #[cfg(test)]
    pub(crate) fn card_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.deck[id]
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    /// Stock, bottom first. The last element is the next card drawn.
    #[must_use]
    pub fn stock(&self) -> &[CardId] {
        &self.stock
    }

    /// Waste, bottom first. The last element is the live card.
    #[must_use]
    pub fn waste(&self) -> &[CardId] {
        &self.waste
    }

    /// Matched cards in the order they arrived.
    #[must_use]
    pub fn foundation(&self) -> &[CardId] {
        &self.foundation
    }

    #[must_use]
    pub fn stock_top(&self) -> Option<CardId> {
        self.stock.last().copied()
    }

    #[must_use]
    pub fn waste_top(&self) -> Option<CardId> {
        self.waste.last().copied()
    }

    /// Card under the waste top.
    #[must_use]
    pub fn waste_second(&self) -> Option<CardId> {
        self.waste.iter().rev().nth(1).copied()
    }

    /// Total cards across all four collections.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.pyramid.len() + self.stock.len() + self.waste.len() + self.foundation.len()
    }

    // === Moves ===

    /// Move a pyramid card to the foundation.
    ///
    /// Returns `false` if the card is not in the pyramid.
    pub fn pyramid_to_foundation(&mut self, id: CardId) -> bool {
        let card = &self.deck[id];
        let Some(slot) = card.slot.filter(|_| card.location == Location::Pyramid) else {
            return false;
        };
        let removed = self.pyramid.remove(slot);
        debug_assert_eq!(removed, Some(id), "pyramid cell out of sync with card slot");

        self.deck[id].place(Location::Foundation);
        self.foundation.push(id);
        true
    }

    /// Move the waste top to the foundation.
    ///
    /// Returns `false` if `id` is not the waste top.
    pub fn waste_to_foundation(&mut self, id: CardId) -> bool {
        if self.waste_top() != Some(id) {
            return false;
        }
        self.waste.pop();
        self.deck[id].place(Location::Foundation);
        self.foundation.push(id);
        true
    }

    /// Flip the stock top onto the waste.
    pub fn stock_to_waste(&mut self) -> Option<CardId> {
        let id = self.stock.pop()?;
        self.deck[id].place(Location::Waste);
        self.waste.push(id);
        Some(id)
    }

    /// Turn the whole waste back into the stock and shuffle the stock.
    ///
    /// Returns how many cards moved.
    pub fn recycle_waste(&mut self, rng: &mut GameRng) -> usize {
        let moved = self.waste.len();
        if moved == 0 {
            return 0;
        }
        for id in self.waste.drain(..) {
            self.deck[id].place(Location::Stock);
            self.stock.push(id);
        }
        rng.shuffle(&mut self.stock);
        moved
    }

    // === Reverse moves (undo) ===

    /// Return a foundation card to its pyramid cell.
    pub fn restore_to_pyramid(&mut self, id: CardId) -> bool {
        let card = &self.deck[id];
        let Some(slot) = card.slot.filter(|_| card.location == Location::Foundation) else {
            return false;
        };
        if !self.take_from_foundation(id) {
            return false;
        }
        self.pyramid.insert(slot, id);
        self.deck[id].place(Location::Pyramid);
        true
    }

    /// Return a foundation card to the waste top.
    pub fn restore_to_waste(&mut self, id: CardId) -> bool {
        if !self.take_from_foundation(id) {
            return false;
        }
        self.deck[id].place(Location::Waste);
        self.waste.push(id);
        true
    }

    /// Put the waste top back on the stock, face down.
    pub fn return_to_stock(&mut self, id: CardId) -> bool {
        if self.waste_top() != Some(id) {
            return false;
        }
        self.waste.pop();
        self.deck[id].place(Location::Stock);
        self.stock.push(id);
        true
    }

    fn take_from_foundation(&mut self, id: CardId) -> bool {
        match self.foundation.iter().rposition(|&c| c == id) {
            Some(pos) => {
                self.foundation.remove(pos);
                true
            }
            None => false,
        }
    }

    // === Invariants ===

    /// Check that the collections partition the deck and every card's tags
    /// agree with the collection holding it.
    pub fn audit(&self) -> Result<(), InvariantViolation> {
        let mut seen: FxHashSet<CardId> = FxHashSet::default();

        for (slot, id) in self.pyramid.iter() {
            let card = &self.deck[id];
            if card.slot != Some(slot) {
                return Err(InvariantViolation::SlotMismatch {
                    card: id,
                    slot,
                    recorded: card.slot,
                });
            }
            self.audit_card(&mut seen, id, Location::Pyramid)?;
        }
        for &id in &self.stock {
            self.audit_card(&mut seen, id, Location::Stock)?;
        }
        for &id in &self.waste {
            self.audit_card(&mut seen, id, Location::Waste)?;
        }
        for &id in &self.foundation {
            self.audit_card(&mut seen, id, Location::Foundation)?;
        }

        if let Some(missing) = CardId::all().find(|id| !seen.contains(id)) {
            return Err(InvariantViolation::MissingCard { card: missing });
        }
        Ok(())
    }

    fn audit_card(
        &self,
        seen: &mut FxHashSet<CardId>,
        id: CardId,
        held_by: Location,
    ) -> Result<(), InvariantViolation> {
        if !seen.insert(id) {
            return Err(InvariantViolation::DuplicateMembership { card: id });
        }
        let card = &self.deck[id];
        if card.location != held_by {
            return Err(InvariantViolation::LocationMismatch {
                card: id,
                held_by,
                tagged: card.location,
            });
        }
        if card.face_up != held_by.face_up() {
            return Err(InvariantViolation::FaceMismatch {
                card: id,
                location: held_by,
            });
        }
        Ok(())
    }
}
