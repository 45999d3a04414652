//! Triangular tableau.
//!
//! Cells are stored row-major in a flat vector: row `r` starts at index
//! `r(r+1)/2` and holds `r + 1` cells. A cell is empty once its card has
//! left the pyramid.

use serde::{Deserialize, Serialize};

use crate::core::card::{CardId, Slot};
use crate::core::config::pyramid_size;

/// Slot grid for the pyramid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pyramid {
    rows: u8,
    cells: Vec<Option<CardId>>,
    occupied: usize,
}

impl Pyramid {
    /// Create an empty pyramid with `rows` rows.
    #[must_use]
    pub fn new(rows: u8) -> Self {
        Self {
            rows,
            cells: vec![None; pyramid_size(rows)],
            occupied: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Total cell count, occupied or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Is `slot` a cell of this pyramid?
    #[must_use]
    pub fn contains_slot(&self, slot: Slot) -> bool {
        slot.row < self.rows && slot.col <= slot.row
    }

    fn index(&self, slot: Slot) -> usize {
        assert!(
            self.contains_slot(slot),
            "slot {:?} outside a {}-row pyramid",
            slot,
            self.rows
        );
        let row = slot.row as usize;
        row * (row + 1) / 2 + slot.col as usize
    }

    /// Slots in dealing order: row 0 first, each row left to right.
    pub fn slots(&self) -> impl Iterator<Item = Slot> {
        let rows = self.rows;
        (0..rows).flat_map(|row| (0..=row).map(move |col| Slot::new(row, col)))
    }

    /// Card in `slot`. Returns `None` for empty cells and for cells below the
    /// bottom row, which is what the covering check needs.
    #[must_use]
    pub fn occupant(&self, slot: Slot) -> Option<CardId> {
        if !self.contains_slot(slot) {
            return None;
        }
        self.cells[self.index(slot)]
    }

    /// Cards in the two cells below `slot`.
    pub fn covering(&self, slot: Slot) -> impl Iterator<Item = CardId> + '_ {
        slot.covered_by()
            .into_iter()
            .filter_map(move |below| self.occupant(below))
    }

    /// Put `card` into an empty cell.
    ///
    /// Panics if the cell is already occupied.
    pub fn insert(&mut self, slot: Slot, card: CardId) {
        let idx = self.index(slot);
        if let Some(existing) = self.cells[idx] {
            panic!("pyramid cell {:?} already holds {}", slot, existing);
        }
        self.cells[idx] = Some(card);
        self.occupied += 1;
    }

    /// Empty a cell, returning what was in it.
    pub fn remove(&mut self, slot: Slot) -> Option<CardId> {
        let idx = self.index(slot);
        let card = self.cells[idx].take()?;
        self.occupied -= 1;
        Some(card)
    }

    /// Number of cards still in the pyramid.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupied
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupied == 0
    }

    /// Occupied cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, CardId)> + '_ {
        self.slots()
            .zip(self.cells.iter())
            .filter_map(|(slot, cell)| cell.map(|card| (slot, card)))
    }

    /// Cards in row-major order.
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cells.iter().filter_map(|c| *c)
    }
}
