//! Drag-and-drop integration tests.
//!
//! These tests verify the lift semantics (a dragged card stops covering and
//! exposes the waste card beneath it), drop resolution and scoring, and the
//! `end_drag` bookkeeping.

use pyramid_solitaire::{
    CardId, Deck, Location, Rank, SolitaireConfig, SolitaireEngine, SolitaireEvent, Suit,
};

fn cell(row: usize, col: usize) -> usize {
    row * (row + 1) / 2 + col
}

const STOCK_TOP: usize = 51;

fn engine_with(placed: &[(usize, Rank, Suit)]) -> SolitaireEngine {
    let deck = Deck::standard();
    let mut order: Vec<CardId> = CardId::all().collect();
    for &(pos, rank, suit) in placed {
        let id = deck.find(rank, suit).unwrap();
        let from = order.iter().position(|&c| c == id).unwrap();
        order.swap(from, pos);
    }
    SolitaireEngine::with_deck_order(SolitaireConfig::new().with_seed(7), &order).unwrap()
}

fn id(rank: Rank, suit: Suit) -> CardId {
    Deck::standard().find(rank, suit).unwrap()
}

// =============================================================================
// Drop resolution
// =============================================================================

/// A King dropped on empty space is removed alone.
#[test]
fn test_king_dropped_on_empty_space() {
    let mut engine = engine_with(&[(cell(6, 2), Rank::King, Suit::Hearts)]);
    let king = id(Rank::King, Suit::Hearts);

    let started = engine.begin_drag(king);
    assert_eq!(started.events(), &[SolitaireEvent::DragStarted { card: king, preview: None }]);
    assert_eq!(engine.dragged(), Some(king));

    let dropped = engine.drop_card(None);
    assert!(dropped.matched());
    assert_eq!(engine.card(king).unwrap().location, Location::Foundation);
    assert_eq!(engine.score(), 5);
    assert_eq!(engine.moves(), 1);

    let ended = engine.end_drag(true);
    assert_eq!(ended.events(), &[SolitaireEvent::DragEnded { card: king, matched: true }]);
    assert_eq!(engine.dragged(), None);
}

/// A non-King dropped on empty space goes back into play.
#[test]
fn test_non_king_on_empty_space_returns() {
    let mut engine = engine_with(&[(cell(6, 2), Rank::Six, Suit::Hearts)]);
    let six = id(Rank::Six, Suit::Hearts);
    let before = engine.zones().clone();

    engine.begin_drag(six);
    let dropped = engine.drop_card(None);

    assert!(!dropped.matched());
    assert_eq!(dropped.events(), &[SolitaireEvent::DragReturned { card: six }]);
    engine.end_drag(false);

    assert_eq!(engine.zones(), &before);
    assert!(engine.is_removable(six));
    assert_eq!(engine.moves(), 0);
}

/// Two pyramid cards summing to 13 score 5 each.
#[test]
fn test_pyramid_pair_drop() {
    let mut engine = engine_with(&[
        (cell(6, 0), Rank::Six, Suit::Clubs),
        (cell(6, 4), Rank::Seven, Suit::Hearts),
    ]);
    let six = id(Rank::Six, Suit::Clubs);
    let seven = id(Rank::Seven, Suit::Hearts);

    engine.begin_drag(six);
    let out = engine.drop_card(Some(seven));

    assert!(out.matched());
    assert_eq!(out.removed_cards().collect::<Vec<_>>(), vec![six, seven]);
    assert_eq!(engine.score(), 10);
    assert_eq!(engine.moves(), 1);
}

/// A waste card dropped on a pyramid card scores only the pyramid card.
#[test]
fn test_waste_on_pyramid_drop() {
    let mut engine = engine_with(&[
        (cell(6, 0), Rank::Six, Suit::Clubs),
        (STOCK_TOP, Rank::Seven, Suit::Hearts),
    ]);
    let six = id(Rank::Six, Suit::Clubs);
    let seven = id(Rank::Seven, Suit::Hearts);

    engine.draw_card();
    engine.begin_drag(seven);
    let out = engine.drop_card(Some(six));

    assert!(out.matched());
    assert_eq!(engine.score(), 5);
    assert!(engine.waste().is_empty());
}

/// A waste King dropped on empty space is removed but scores nothing.
#[test]
fn test_waste_king_on_empty_space() {
    let mut engine = engine_with(&[(STOCK_TOP, Rank::King, Suit::Hearts)]);
    let king = id(Rank::King, Suit::Hearts);
    engine.draw_card();
    assert_eq!(engine.waste(), &[king]);

    engine.begin_drag(king);
    let out = engine.drop_card(None);
    engine.end_drag(true);

    assert!(out.matched());
    assert!(out.events().contains(&SolitaireEvent::CardRemoved {
        card: king,
        from: Location::Waste
    }));
    assert_eq!(engine.card(king).unwrap().location, Location::Foundation);
    assert!(engine.waste().is_empty());
    assert_eq!(engine.score(), 0);
    assert_eq!(engine.moves(), 2);

    engine.undo();
    assert_eq!(engine.waste(), &[king]);
    assert_eq!(engine.moves(), 1);
}

/// Dropping on a card that does not complete 13 is not a match.
#[test]
fn test_wrong_sum_drop() {
    let mut engine = engine_with(&[
        (cell(6, 0), Rank::Six, Suit::Clubs),
        (cell(6, 1), Rank::Six, Suit::Hearts),
    ]);
    let a = id(Rank::Six, Suit::Clubs);
    let b = id(Rank::Six, Suit::Hearts);

    engine.begin_drag(a);
    assert!(!engine.drop_card(Some(b)).matched());
    assert_eq!(engine.score(), 0);
}

/// Dropping on a covered card is not a match even when the values fit.
#[test]
fn test_drop_on_covered_card() {
    let mut engine = engine_with(&[
        (cell(6, 6), Rank::Six, Suit::Clubs),
        (cell(4, 0), Rank::Seven, Suit::Hearts),
    ]);
    engine.begin_drag(id(Rank::Six, Suit::Clubs));

    assert!(!engine.drop_card(Some(id(Rank::Seven, Suit::Hearts))).matched());
}

// =============================================================================
// Lift semantics
// =============================================================================

/// While dragged, a card stops covering the card above it.
#[test]
fn test_lifted_card_uncovers() {
    let mut engine = engine_with(&[
        (cell(6, 0), Rank::Six, Suit::Clubs),
        (cell(6, 1), Rank::King, Suit::Spades),
        (cell(5, 0), Rank::Seven, Suit::Hearts),
    ]);
    let six = id(Rank::Six, Suit::Clubs);
    let seven = id(Rank::Seven, Suit::Hearts);

    engine.select_card(id(Rank::King, Suit::Spades));
    assert!(!engine.is_removable(seven));

    engine.begin_drag(six);
    assert!(engine.is_removable(seven));
    assert!(!engine.is_removable(six));

    let out = engine.drop_card(Some(seven));
    assert!(out.matched());
    assert_eq!(engine.score(), 15);
    assert!(engine.check_invariants().is_ok());
}

/// An unmatched lift restores covering.
#[test]
fn test_returned_card_covers_again() {
    let mut engine = engine_with(&[
        (cell(6, 0), Rank::Six, Suit::Clubs),
        (cell(6, 1), Rank::King, Suit::Spades),
        (cell(5, 0), Rank::Two, Suit::Hearts),
    ]);
    let six = id(Rank::Six, Suit::Clubs);
    let two = id(Rank::Two, Suit::Hearts);
    engine.select_card(id(Rank::King, Suit::Spades));

    engine.begin_drag(six);
    assert!(engine.is_removable(two));
    engine.drop_card(Some(two));
    engine.end_drag(false);

    assert!(!engine.is_removable(two));
    assert!(engine.is_removable(six));
}

/// The card's collection membership never changes during a drag.
#[test]
fn test_partition_holds_mid_drag() {
    let mut engine = engine_with(&[(cell(6, 2), Rank::Six, Suit::Hearts)]);
    let six = id(Rank::Six, Suit::Hearts);

    engine.begin_drag(six);
    assert_eq!(engine.card(six).unwrap().location, Location::Pyramid);
    assert_eq!(engine.zones().total_cards(), 52);
    assert_eq!(engine.pyramid().len(), 28);
    assert!(engine.check_invariants().is_ok());
}

// =============================================================================
// Waste preview
// =============================================================================

/// Dragging the waste top exposes the card beneath it until the drag ends.
#[test]
fn test_waste_preview() {
    let mut engine = engine_with(&[]);
    engine.draw_card();
    let below = engine.waste()[0];
    engine.draw_card();
    let top = engine.waste()[1];

    let out = engine.begin_drag(top);
    assert_eq!(out.events(), &[SolitaireEvent::DragStarted { card: top, preview: Some(below) }]);
    assert_eq!(engine.waste_preview(), Some(below));
    assert!(engine.is_removable(below));

    engine.drop_card(None);
    // Preview stays visible until end_drag
    assert_eq!(engine.waste_preview(), Some(below));

    engine.end_drag(false);
    assert_eq!(engine.waste_preview(), None);
    assert!(!engine.is_removable(below));
    assert!(engine.is_removable(top));
}

/// The dragged waste top can pair with the card it exposed.
#[test]
fn test_waste_on_waste_pair() {
    let mut engine = engine_with(&[
        (STOCK_TOP, Rank::Six, Suit::Clubs),
        (STOCK_TOP - 1, Rank::Seven, Suit::Hearts),
    ]);
    let six = id(Rank::Six, Suit::Clubs);
    let seven = id(Rank::Seven, Suit::Hearts);
    engine.draw_card();
    engine.draw_card();
    assert_eq!(engine.waste(), &[six, seven]);
    let before = engine.zones().clone();

    engine.begin_drag(seven);
    let out = engine.drop_card(Some(six));
    engine.end_drag(true);

    assert!(out.matched());
    assert!(engine.waste().is_empty());
    assert_eq!(engine.score(), 0);

    engine.undo();
    assert_eq!(engine.zones(), &before);
    assert_eq!(engine.waste(), &[six, seven]);
}

// =============================================================================
// Drag bookkeeping
// =============================================================================

/// Other intents are ignored until the drag ends.
#[test]
fn test_intents_blocked_during_drag() {
    let mut engine = engine_with(&[
        (cell(6, 0), Rank::Six, Suit::Clubs),
        (cell(6, 1), Rank::Seven, Suit::Hearts),
    ]);
    engine.draw_card();
    engine.begin_drag(id(Rank::Six, Suit::Clubs));

    assert!(engine.draw_card().is_noop());
    assert!(engine.undo().is_noop());
    assert!(engine.reshuffle_waste().is_noop());
    assert!(engine.reset().is_noop());
    assert!(engine.select_card(id(Rank::Seven, Suit::Hearts)).is_noop());
    assert!(engine.begin_drag(id(Rank::Seven, Suit::Hearts)).is_noop());

    engine.end_drag(false);
    assert!(!engine.draw_card().is_noop());
}

/// Beginning a drag clears a pending click selection.
#[test]
fn test_drag_clears_selection() {
    let mut engine = engine_with(&[
        (cell(6, 0), Rank::Six, Suit::Clubs),
        (cell(6, 1), Rank::Eight, Suit::Hearts),
    ]);
    let six = id(Rank::Six, Suit::Clubs);
    engine.select_card(six);

    let out = engine.begin_drag(id(Rank::Eight, Suit::Hearts));
    assert_eq!(out.events()[0], SolitaireEvent::SelectionCleared { card: six });
    assert_eq!(engine.selected(), None);
}

/// Non-removable cards cannot be dragged; drop and end without a drag do nothing.
#[test]
fn test_invalid_drag_calls() {
    let mut engine = engine_with(&[(cell(3, 1), Rank::Six, Suit::Clubs)]);

    assert!(engine.begin_drag(id(Rank::Six, Suit::Clubs)).is_noop());
    assert!(engine.drop_card(None).is_noop());
    assert!(engine.end_drag(false).is_noop());

    let stock_top = *engine.stock().last().unwrap();
    assert!(engine.begin_drag(stock_top).is_noop());
}

/// A second drop after the first is ignored.
#[test]
fn test_double_drop_ignored() {
    let mut engine = engine_with(&[(cell(6, 2), Rank::King, Suit::Hearts)]);
    engine.begin_drag(id(Rank::King, Suit::Hearts));
    assert!(engine.drop_card(None).matched());
    assert!(engine.drop_card(None).is_noop());
    assert_eq!(engine.moves(), 1);
}

/// Ending a drag that was never dropped returns the card.
#[test]
fn test_end_without_drop() {
    let mut engine = engine_with(&[(cell(6, 2), Rank::Six, Suit::Hearts)]);
    let six = id(Rank::Six, Suit::Hearts);
    engine.begin_drag(six);

    let out = engine.end_drag(false);
    assert_eq!(
        out.events(),
        &[
            SolitaireEvent::DragReturned { card: six },
            SolitaireEvent::DragEnded { card: six, matched: false },
        ]
    );
    assert!(engine.is_removable(six));
}

/// `end_drag` reports what the drop resolved to, whatever the host claims.
#[test]
fn test_end_drag_reports_actual_result() {
    let mut engine = engine_with(&[(cell(6, 2), Rank::Six, Suit::Hearts)]);
    let six = id(Rank::Six, Suit::Hearts);
    engine.begin_drag(six);
    engine.drop_card(None);

    let out = engine.end_drag(true);
    assert_eq!(out.events(), &[SolitaireEvent::DragEnded { card: six, matched: false }]);
}
