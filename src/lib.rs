//! # forty-thieves
//!
//! Rule engine for Forty Thieves (Napoleon at St. Helena) solitaire: a
//! ten-pile, eight-foundation, double-deck patience game.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No rendering, file I/O, or input handling. The
//!    presentation layer consumes the query surface and drives the command
//!    surface.
//!
//! 2. **Illegality is not a fault**: A rejected grab returns an empty run,
//!    a rejected drop returns `false`, and in every rejected case no pile
//!    changes.
//!
//! 3. **Moves are transactions**: `grab` records a view of the run but
//!    leaves the origin pile untouched; `complete_move` validates, then
//!    splices origin and destination in one step; `abort_move` simply
//!    forgets the selection.
//!
//! 4. **Deterministic deals**: Shuffling goes through an injected seedable
//!    generator, so a seed reproduces a full session.
//!
//! ## Modules
//!
//! - `core`: deterministic RNG
//! - `cards`: card identities and the successor relation
//! - `piles`: ordered pile storage with per-kind selection/drop rules
//! - `game`: the orchestrator: deal, move protocol, supermove capacity,
//!   win and game-over detection

pub mod cards;
pub mod core;
pub mod game;
pub mod piles;

// Re-export commonly used types
pub use crate::cards::{
    full_deck, is_descending_run, BackVariant, Card, CardCode, Suit, ACE, DECK_SIZE, JACK, KING,
    QUEEN,
};

pub use crate::core::{GameRng, GameRngState};

pub use crate::piles::{Pile, PileKind, Run, MAX_RUN};

pub use crate::game::{
    Game, PendingMove, PileId, SessionStats, FOUNDATION_PILES, INITIAL_TABLEAU_DEAL,
    TABLEAU_PILES,
};
