//! Which cards may take part in a match right now.
//!
//! Covering is recomputed from live pyramid membership on every call. A
//! card that has left the pyramid no longer covers anything, and the card
//! currently being dragged (the "lifted" card) is left out of both the
//! covering check and the waste top.

use crate::core::card::{CardId, Location};
use crate::zones::ZoneManager;

/// Waste card that is currently live, skipping the lifted card.
#[must_use]
pub fn live_waste_top(zones: &ZoneManager, lifted: Option<CardId>) -> Option<CardId> {
    zones
        .waste()
        .iter()
        .rev()
        .copied()
        .find(|&id| Some(id) != lifted)
}

/// Is the pyramid card `id` covered by a live card in the row below?
#[must_use]
pub fn is_covered(zones: &ZoneManager, id: CardId, lifted: Option<CardId>) -> bool {
    let Some(slot) = zones.get(id).and_then(|c| c.slot) else {
        return false;
    };
    zones
        .pyramid()
        .covering(slot)
        .any(|cover| Some(cover) != lifted)
}

/// Can `id` be selected, dragged or used as a drop target?
///
/// - Pyramid: face up and not covered by a live card at `(row+1, col)` or `(row+1, col+1)`
/// - Waste: only the live top
/// - Stock, foundation, the lifted card itself, unknown ids: never
#[must_use]
pub fn is_removable(zones: &ZoneManager, id: CardId, lifted: Option<CardId>) -> bool {
    if Some(id) == lifted {
        return false;
    }
    let Some(card) = zones.get(id) else {
        return false;
    };

    match card.location {
        Location::Pyramid => card.face_up && !is_covered(zones, id, lifted),
        Location::Waste => live_waste_top(zones, lifted) == Some(id),
        Location::Stock | Location::Foundation => false,
    }
}

/// Every removable card: exposed pyramid cards in row-major order, then the
/// waste top.
#[must_use]
pub fn removable_cards(zones: &ZoneManager) -> Vec<CardId> {
    let mut cards: Vec<CardId> = zones
        .pyramid()
        .cards()
        .filter(|&id| is_removable(zones, id, None))
        .collect();
    cards.extend(live_waste_top(zones, None));
    cards
}
