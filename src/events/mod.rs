//! Commit-then-notify event reporting.
//!
//! Engine calls return an `Outcome`: the `SolitaireEvent`s describing the
//! state change that was just committed. An empty outcome is a no-op.

pub mod event;

pub use event::{Outcome, SolitaireEvent};
