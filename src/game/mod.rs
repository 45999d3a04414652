//! The engine facade handed to the presentation layer.
//!
//! - `engine`: state, queries, stock/waste cycle, undo, new game
//! - `selection`: click-to-pair flow
//! - `drag`: drag-and-drop flow
//! - `clock`: elapsed play time

pub mod clock;
pub mod drag;
pub mod engine;
pub mod selection;

pub use clock::GameClock;
pub use drag::DragState;
pub use engine::SolitaireEngine;
