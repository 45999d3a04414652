//! The solitaire engine: owned game state plus the stock, undo and reset
//! operations. Selection lives in `selection.rs`, drag and drop in `drag.rs`.

use std::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, info, trace};

use super::clock::GameClock;
use super::drag::DragState;
use crate::core::{
    ActionHistory, Card, CardId, ConfigError, EmptyStockPolicy, GameRng, HistoryEntry,
    HistoryStep, InvariantViolation, Location, SolitaireConfig, DECK_SIZE,
};
use crate::events::{Outcome, SolitaireEvent};
use crate::rules::{self, Match};
use crate::zones::{Pyramid, ZoneManager};

/// A single game of pyramid solitaire.
///
/// Construct it once with a `SolitaireConfig` and hand it (or a reference
/// to it) to the presentation layer. All calls are synchronous; each
/// mutating call returns the `Outcome` of what it committed.
///
/// ```
/// use pyramid_solitaire::{SolitaireConfig, SolitaireEngine};
///
/// let mut engine = SolitaireEngine::new(SolitaireConfig::new().with_seed(42)).unwrap();
/// assert_eq!(engine.pyramid().len(), 28);
/// assert_eq!(engine.stock().len(), 24);
///
/// let outcome = engine.draw_card();
/// assert!(!outcome.is_noop());
/// assert_eq!(engine.waste().len(), 1);
///
/// engine.undo();
/// assert!(engine.waste().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct SolitaireEngine {
    pub(super) config: SolitaireConfig,
    pub(super) rng: GameRng,
    pub(super) seed: u64,
    pub(super) zones: ZoneManager,
    pub(super) history: ActionHistory,
    pub(super) score: i64,
    pub(super) moves: u32,
    pub(super) selected: Option<CardId>,
    pub(super) drag: Option<DragState>,
    pub(super) clock: GameClock,
}

impl SolitaireEngine {
    /// Validate `config` and deal the first game.
    pub fn new(config: SolitaireConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
        let mut rng = GameRng::new(seed);
        let mut order: Vec<CardId> = CardId::all().collect();
        rng.shuffle(&mut order);

        let engine = Self::from_parts(config, rng, seed, &order);
        info!(seed, rows = engine.config.rows, "dealt new game");
        Ok(engine)
    }

    /// Deal with `rows` rows and an optional seed, everything else default.
    pub fn new_game(rows: u8, seed: Option<u64>) -> Result<Self, ConfigError> {
        let mut config = SolitaireConfig::new().with_rows(rows);
        config.seed = seed;
        Self::new(config)
    }

    /// Deal a fixed permutation of the deck instead of shuffling.
    ///
    /// The config seed (or 0) still drives later reshuffles.
    pub fn with_deck_order(config: SolitaireConfig, order: &[CardId]) -> Result<Self, ConfigError> {
        config.validate()?;
        validate_order(order)?;
        let seed = config.seed.unwrap_or(0);
        let rng = GameRng::new(seed);
        Ok(Self::from_parts(config, rng, seed, order))
    }

    fn from_parts(config: SolitaireConfig, rng: GameRng, seed: u64, order: &[CardId]) -> Self {
        let zones = ZoneManager::deal(config.rows, order);
        Self {
            config,
            rng,
            seed,
            zones,
            history: ActionHistory::new(),
            score: 0,
            moves: 0,
            selected: None,
            drag: None,
            clock: GameClock::new(),
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &SolitaireConfig {
        &self.config
    }

    /// Seed of the current deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.zones.get(id)
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    #[must_use]
    pub fn pyramid(&self) -> &Pyramid {
        self.zones.pyramid()
    }

    #[must_use]
    pub fn stock(&self) -> &[CardId] {
        self.zones.stock()
    }

    #[must_use]
    pub fn waste(&self) -> &[CardId] {
        self.zones.waste()
    }

    #[must_use]
    pub fn foundation(&self) -> &[CardId] {
        self.zones.foundation()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// The game is won exactly when the pyramid is empty.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.zones.pyramid().is_empty()
    }

    /// Card waiting for a partner in the click flow.
    #[must_use]
    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    #[must_use]
    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    /// Number of moves that can still be undone.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Can `id` take part in a match right now?
    #[must_use]
    pub fn is_removable(&self, id: CardId) -> bool {
        rules::is_removable(&self.zones, id, self.lifted())
    }

    /// Matches the click flow could make right now.
    #[must_use]
    pub fn available_matches(&self) -> Vec<Match> {
        rules::available_matches(&self.zones)
    }

    /// Is there anything left to do: a match, a draw, or a reshuffle?
    #[must_use]
    pub fn has_moves(&self) -> bool {
        !self.zones.stock().is_empty()
            || !self.zones.waste().is_empty()
            || !self.available_matches().is_empty()
    }

    /// Play time so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Audit the card partition and location tags.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.zones.audit()
    }

    // === Time ===

    /// Advance the play clock. Stops for good once the game is won.
    pub fn tick(&mut self, delta: Duration) {
        if self.is_won() {
            self.clock.stop();
        }
        self.clock.tick(delta);
    }

    // === Stock / waste ===

    /// Flip the stock top onto the waste.
    ///
    /// On an empty stock this follows `EmptyStockPolicy`: nothing, or a
    /// reshuffle of the waste.
    pub fn draw_card(&mut self) -> Outcome {
        if self.drag_in_progress() {
            return Outcome::none();
        }

        let Some(card) = self.zones.stock_to_waste() else {
            return match self.config.empty_stock {
                EmptyStockPolicy::NoOp => {
                    debug!("draw from empty stock ignored");
                    Outcome::none()
                }
                EmptyStockPolicy::Reshuffle => self.reshuffle_waste(),
            };
        };

        self.history.push(HistoryEntry::draw(card));
        self.moves += 1;
        trace!(%card, "drew card");

        let mut out = Outcome::none()
            .with(SolitaireEvent::CardDrawn { card })
            .with(self.score_event());
        self.revalidate_selection(&mut out);
        out
    }

    /// Turn the waste back into the stock and reshuffle the whole stock.
    ///
    /// Not recorded in history, so it cannot be undone. Draws recorded
    /// before it are dropped from the history, since their cards are now
    /// scattered through the new stock. Earlier matches stay undoable.
    pub fn reshuffle_waste(&mut self) -> Outcome {
        if self.drag_in_progress() {
            return Outcome::none();
        }

        let count = self.zones.recycle_waste(&mut self.rng);
        if count == 0 {
            debug!("reshuffle with empty waste ignored");
            return Outcome::none();
        }
        self.history.retain(|entry| !entry.has_draw());
        debug!(count, "reshuffled waste into stock");

        let mut out = Outcome::none().with(SolitaireEvent::WasteReshuffled { count });
        self.revalidate_selection(&mut out);
        out
    }

    // === Undo ===

    /// Reverse the most recent move.
    pub fn undo(&mut self) -> Outcome {
        if self.drag_in_progress() {
            return Outcome::none();
        }
        let Some(entry) = self.history.pop() else {
            return Outcome::none();
        };

        let mut out = Outcome::none();
        for &step in entry.steps.iter().rev() {
            let (restored, to) = match step {
                HistoryStep::RemoveFromPyramid(card) => {
                    (self.zones.restore_to_pyramid(card), Location::Pyramid)
                }
                HistoryStep::RemoveFromWaste(card) => {
                    (self.zones.restore_to_waste(card), Location::Waste)
                }
                HistoryStep::DrawCard(card) => (self.zones.return_to_stock(card), Location::Stock),
            };
            assert!(restored, "undo of {:?} found the card out of place", step);
            out.push(SolitaireEvent::CardRestored { card: step.card(), to });
        }

        self.score -= entry.points;
        self.moves = self.moves.saturating_sub(1);
        trace!(steps = entry.steps.len(), "undid move");

        out.push(self.score_event());
        self.revalidate_selection(&mut out);
        out
    }

    // === New game ===

    /// Deal a new game with the next seed from this engine's RNG.
    pub fn reset(&mut self) -> Outcome {
        if self.drag_in_progress() {
            return Outcome::none();
        }
        let seed = self.rng.next_seed();
        self.reset_with_seed(seed)
    }

    /// Deal a new game from `seed`, keeping the configuration.
    pub fn reset_with_seed(&mut self, seed: u64) -> Outcome {
        if self.drag_in_progress() {
            return Outcome::none();
        }
        let mut rng = GameRng::new(seed);
        let mut order: Vec<CardId> = CardId::all().collect();
        rng.shuffle(&mut order);

        *self = Self::from_parts(self.config.clone(), rng, seed, &order);
        info!(seed, rows = self.config.rows, "dealt new game");

        Outcome::none()
            .with(SolitaireEvent::Dealt { seed, rows: self.config.rows })
            .with(self.score_event())
    }

    // === Shared helpers ===

    /// Card currently lifted by an unresolved drag.
    pub(super) fn lifted(&self) -> Option<CardId> {
        self.drag.as_ref().and_then(DragState::lifted)
    }

    pub(super) fn drag_in_progress(&self) -> bool {
        if self.drag.is_some() {
            debug!("ignored while a drag is in progress");
            return true;
        }
        false
    }

    pub(super) fn score_event(&self) -> SolitaireEvent {
        SolitaireEvent::ScoreChanged {
            score: self.score,
            moves: self.moves,
        }
    }

    /// Move `cards` to the foundation as one move worth `points`.
    ///
    /// Callers have already checked every card is removable. Waste cards
    /// must be listed top first.
    pub(super) fn commit_match(&mut self, cards: &[CardId], points: i64, out: &mut Outcome) {
        let mut steps: SmallVec<[HistoryStep; 2]> = SmallVec::new();

        for &card in cards {
            let from = self.zones.card(card).location;
            let (moved, step) = match from {
                Location::Pyramid => (
                    self.zones.pyramid_to_foundation(card),
                    HistoryStep::RemoveFromPyramid(card),
                ),
                Location::Waste => (
                    self.zones.waste_to_foundation(card),
                    HistoryStep::RemoveFromWaste(card),
                ),
                Location::Stock | Location::Foundation => {
                    panic!("{} cannot be matched from {:?}", card, from)
                }
            };
            assert!(moved, "{} matched from {:?} but could not be removed", card, from);
            steps.push(step);
            out.push(SolitaireEvent::CardRemoved { card, from });
        }

        self.history.push(HistoryEntry::matched(&steps, points));
        self.score += points;
        self.moves += 1;
        trace!(cards = cards.len(), points, score = self.score, "matched");
        out.push(self.score_event());

        if self.is_won() {
            self.clock.stop();
            info!(score = self.score, moves = self.moves, "pyramid cleared");
            out.push(SolitaireEvent::Won);
        }
        self.revalidate_selection(out);
    }

    /// Drop a pending selection that is no longer removable.
    pub(super) fn revalidate_selection(&mut self, out: &mut Outcome) {
        if let Some(card) = self.selected {
            if !self.is_removable(card) {
                self.selected = None;
                out.push(SolitaireEvent::SelectionCleared { card });
            }
        }
    }
}

fn validate_order(order: &[CardId]) -> Result<(), ConfigError> {
    if order.len() != DECK_SIZE {
        return Err(ConfigError::InvalidDeckOrder {
            reason: format!("expected {} cards, got {}", DECK_SIZE, order.len()),
        });
    }
    let mut seen = [false; DECK_SIZE];
    for &id in order {
        let Some(slot) = seen.get_mut(id.index()) else {
            return Err(ConfigError::InvalidDeckOrder {
                reason: format!("{} is not in the deck", id),
            });
        };
        if *slot {
            return Err(ConfigError::InvalidDeckOrder {
                reason: format!("duplicate {}", id),
            });
        }
        *slot = true;
    }
    Ok(())
}
