//! Pile system: ordered card containers with role-specific rules.
//!
//! ## Key Types
//!
//! - `Pile`: ordered storage (bottom = index 0) plus shared mechanics
//! - `PileKind`: Stock / Waste / Tableau / Foundation rule sets
//! - `Run`: a bounded, contiguous run of cards moved as a unit

pub mod pile;

pub use pile::{Pile, PileKind, Run, MAX_RUN};
