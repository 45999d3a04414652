//! Engine configuration.
//!
//! The engine is constructed once with a `SolitaireConfig` and never looks
//! anything up at runtime. Everything here is plain data:
//! - `rows`: pyramid height
//! - `seed`: deal seed (`None` draws one)
//! - `empty_stock`: what drawing from an empty stock does
//! - `scoring`: points per kind of match

use serde::{Deserialize, Serialize};

use super::card::DECK_SIZE;
use super::error::ConfigError;

/// Tallest pyramid that fits in one deck (9 rows = 45 cards).
pub const MAX_ROWS: u8 = 9;

/// Default pyramid height.
pub const DEFAULT_ROWS: u8 = 7;

/// Number of cells in a pyramid of `rows` rows.
#[must_use]
pub const fn pyramid_size(rows: u8) -> usize {
    let rows = rows as usize;
    rows * (rows + 1) / 2
}

/// Behaviour of `draw_card` when the stock is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyStockPolicy {
    /// Drawing does nothing; the host calls `reshuffle_waste` explicitly.
    #[default]
    NoOp,
    /// Drawing from an empty stock reshuffles the waste back into it.
    Reshuffle,
}

/// Points awarded per kind of match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    /// Click flow: a lone King.
    pub king: i64,
    /// Click flow: a pair summing to 13.
    pub pair: i64,
    /// Drag flow: each matched card that came from the pyramid.
    pub per_pyramid_card: i64,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self {
            king: 5,
            pair: 10,
            per_pyramid_card: 5,
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolitaireConfig {
    /// Pyramid height (1..=9).
    pub rows: u8,

    /// Seed for the first deal. `None` draws one from the thread RNG.
    pub seed: Option<u64>,

    pub empty_stock: EmptyStockPolicy,

    pub scoring: ScoreTable,
}

impl Default for SolitaireConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            seed: None,
            empty_stock: EmptyStockPolicy::default(),
            scoring: ScoreTable::default(),
        }
    }
}

impl SolitaireConfig {
    /// Default configuration: 7 rows, random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pyramid height.
    #[must_use]
    pub fn with_rows(mut self, rows: u8) -> Self {
        self.rows = rows;
        self
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_empty_stock(mut self, policy: EmptyStockPolicy) -> Self {
        self.empty_stock = policy;
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoreTable) -> Self {
        self.scoring = scoring;
        self
    }

    /// Cards dealt into the pyramid.
    #[must_use]
    pub fn pyramid_size(&self) -> usize {
        pyramid_size(self.rows)
    }

    /// Cards left for the stock after the deal.
    #[must_use]
    pub fn stock_size(&self) -> usize {
        DECK_SIZE.saturating_sub(self.pyramid_size())
    }

    /// Check the configuration can be dealt.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.rows > MAX_ROWS {
            return Err(ConfigError::InvalidRowCount {
                rows: self.rows,
                max: MAX_ROWS,
            });
        }
        Ok(())
    }
}
