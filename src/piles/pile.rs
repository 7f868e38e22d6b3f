//! Pile storage and per-kind selection/drop rules.
//!
//! A pile is an ordered sequence of cards: index 0 is the bottom, the last
//! index is the top (the end the player interacts with). The four pile
//! roles share this storage and differ only in two capabilities:
//!
//! - `can_select`: may the player pick up the run starting at an index
//! - `validate_drop` / `apply_drop`: may this run be appended here, and
//!   the append itself
//!
//! Validation is pure; `apply_drop` is called only after validation
//! succeeds, so a rejected drop never leaves a pile half-mutated.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{is_descending_run, Card, CardCode, ACE, KING};

/// A run of cards moved as a unit.
///
/// A legal run is at most King-through-Ace of one suit, so 13 cards is a
/// hard bound and this never heap-allocates.
pub type Run = SmallVec<[Card; 13]>;

/// Upper bound on run length, used as the capacity limit for piles whose
/// intake is unconstrained.
pub const MAX_RUN: usize = KING as usize;

/// The role a pile plays, which determines its selection and drop rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileKind {
    /// Face-down reserve; only the top card is playable, never a drop target.
    Stock,
    /// Discard row fed from the stock; only the top card is playable.
    Waste,
    /// Working pile; holds face-up cards, selected and dropped as runs.
    Tableau,
    /// Ascending Ace-to-King pile; the win condition is eight full ones.
    Foundation,
}

/// An ordered pile of cards with role-specific rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    kind: PileKind,
    cards: Vec<Card>,
}

impl Pile {
    /// Create an empty pile of the given kind.
    #[must_use]
    pub fn new(kind: PileKind) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    /// This pile's role.
    #[must_use]
    pub const fn kind(&self) -> PileKind {
        self.kind
    }

    /// The cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card, if any.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Position of the card with the given code, or `None`.
    ///
    /// Linear scan; piles are bounded by the 104-card deck.
    #[must_use]
    pub fn find(&self, code: CardCode) -> Option<usize> {
        self.cards.iter().position(|card| card.code() == code)
    }

    /// Append a card with the given orientation.
    pub fn add(&mut self, mut card: Card, face_up: bool) {
        if face_up {
            card.show_face();
        } else {
            card.show_back();
        }
        self.cards.push(card);
    }

    /// May the player pick up the run starting at `idx`?
    ///
    /// Tableau: yes iff the suffix from `idx` is a descending run.
    /// Stock and waste: only the top card. Foundation: never.
    #[must_use]
    pub fn can_select(&self, idx: usize) -> bool {
        match self.kind {
            PileKind::Tableau => {
                idx < self.cards.len() && is_descending_run(&self.cards[idx..])
            }
            PileKind::Stock | PileKind::Waste => {
                !self.cards.is_empty() && idx == self.cards.len() - 1
            }
            PileKind::Foundation => false,
        }
    }

    /// Would appending `run` here be legal? Pure; mutates nothing.
    ///
    /// `limit` is the supermove capacity computed by the engine for
    /// tableau targets ([`MAX_RUN`] for unconstrained targets).
    /// `origin` is the kind of pile the run was grabbed from; only the
    /// waste cares, since it accepts cards solely from the stock.
    #[must_use]
    pub fn validate_drop(&self, run: &[Card], limit: usize, origin: PileKind) -> bool {
        let Some(&incoming_top) = run.last() else {
            return false;
        };
        match self.kind {
            PileKind::Tableau => match self.cards.last() {
                None => run.len() <= limit / 2,
                // The run must continue the descending sequence.
                Some(top) => run.len() <= limit && top.succeeds(run[0]),
            },
            PileKind::Foundation => match self.cards.last() {
                // The end of the run nearest the player must start the suit.
                None => incoming_top.rank() == ACE,
                Some(top) => top.precedes(incoming_top),
            },
            PileKind::Waste => matches!(origin, PileKind::Stock),
            PileKind::Stock => false,
        }
    }

    /// Append a validated run.
    ///
    /// Foundations take the run reversed so they grow Ace upward; every
    /// appended card ends face up (no drop target holds face-down cards).
    pub fn apply_drop(&mut self, run: &[Card]) {
        let append = |cards: &mut Vec<Card>, card: &Card| {
            let mut card = *card;
            card.show_face();
            cards.push(card);
        };
        match self.kind {
            PileKind::Foundation => {
                for card in run.iter().rev() {
                    append(&mut self.cards, card);
                }
            }
            _ => {
                for card in run {
                    append(&mut self.cards, card);
                }
            }
        }
    }

    /// Remove and return the top card.
    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Drop every card from `start` upward (commit of a pending move).
    pub(crate) fn truncate(&mut self, start: usize) {
        self.cards.truncate(start);
    }

    /// Turn the top card face up if it is face down. Empty pile: no-op.
    pub(crate) fn flip_top(&mut self) {
        if let Some(top) = self.cards.last_mut() {
            if top.is_face_down() {
                top.show_face();
            }
        }
    }
}
