//! Card collections.
//!
//! ## Key Types
//!
//! - `Pyramid`: Triangular slot grid with covering lookups
//! - `ZoneManager`: Card arena plus pyramid, stock, waste and foundation

pub mod manager;
pub mod pyramid;

pub use manager::ZoneManager;
pub use pyramid::Pyramid;
