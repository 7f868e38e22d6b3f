//! Game orchestration: deal lifecycle, move protocol, win detection.
//!
//! ## Key Types
//!
//! - `Game`: owns the full card set and all twenty piles
//! - `PileId`: address of a pile in the layout
//! - `PendingMove`: the in-flight selection (origin pile + start index)
//! - `SessionStats`: games played / won across deals
//!
//! ## Move protocol
//!
//! `grab` → `can_drop` → `complete_move` or `abort_move`. The selected run
//! stays in its origin pile until the commit, so aborting is free and the
//! total card count never changes mid-move.

pub mod moves;
pub mod state;

pub use state::{
    Game, PendingMove, PileId, SessionStats, FOUNDATION_PILES, INITIAL_TABLEAU_DEAL,
    TABLEAU_PILES,
};
