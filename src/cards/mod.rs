//! Card system: identities, orientation, and the successor relation.
//!
//! ## Key Types
//!
//! - `Card`: rank, suit, back variant, face orientation
//! - `Suit` / `BackVariant`: the identity axes of the 104-card double deck
//! - `CardCode`: dense `0..104` identity code for lookup
//! - `is_descending_run`: the same-suit strictly-descending predicate that
//!   every selection and tableau drop rule is built on

pub mod card;

pub use card::{
    full_deck, is_descending_run, BackVariant, Card, CardCode, Suit, ACE, DECK_SIZE, JACK, KING,
    QUEEN,
};
