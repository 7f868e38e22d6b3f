//! Card identity and the successor relation.
//!
//! A card is identified by `(rank, suit, back)`. The game uses a double
//! deck, so the same rank/suit pair appears twice, distinguished by the
//! back variant. Orientation (`face_up`) is the only mutable state.
//!
//! ## Successor relation
//!
//! `precedes` is not a total order: it holds only within one suit, between
//! rank-adjacent cards. Ace of Hearts precedes Two of Hearts and nothing
//! else. Every selection and drop rule in the engine reduces to this
//! relation.

use serde::{Deserialize, Serialize};

/// Lowest rank.
pub const ACE: u8 = 1;
/// Jack.
pub const JACK: u8 = 11;
/// Queen.
pub const QUEEN: u8 = 12;
/// Highest rank.
pub const KING: u8 = 13;

/// Number of cards in the double deck.
pub const DECK_SIZE: usize = 104;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All suits, in code order.
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Position of this suit in code order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Which of the two decks a card belongs to.
///
/// The two halves of the double deck carry visually distinct backs; the
/// engine only cares that the variant makes the 104 identities unique.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BackVariant {
    A,
    B,
}

impl BackVariant {
    /// Both variants, in code order.
    pub const ALL: [BackVariant; 2] = [BackVariant::A, BackVariant::B];

    /// Position of this variant in code order.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Dense identity code for a card: a bijection of `(back, suit, rank)`
/// onto `0..104`.
///
/// Used for lookup (e.g. mapping a clicked sprite back to its card),
/// never for ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardCode(pub u8);

/// A playing card.
///
/// `Copy` value type; piles store cards by value and a new deal
/// redistributes the same 104 identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: u8,
    suit: Suit,
    back: BackVariant,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    ///
    /// `rank` must be in `ACE..=KING`.
    #[must_use]
    pub fn new(rank: u8, suit: Suit, back: BackVariant) -> Self {
        debug_assert!((ACE..=KING).contains(&rank), "rank {rank} out of range");
        Self {
            rank,
            suit,
            back,
            face_up: false,
        }
    }

    /// Rank, `1..=13` (1 = Ace, 13 = King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Back variant.
    #[must_use]
    pub const fn back(self) -> BackVariant {
        self.back
    }

    /// Identity code, `0..104`.
    #[must_use]
    pub const fn code(self) -> CardCode {
        CardCode(52 * self.back.index() + 13 * self.suit.index() + self.rank - 1)
    }

    /// Is the card face up?
    #[must_use]
    pub const fn is_face_up(self) -> bool {
        self.face_up
    }

    /// Is the card face down?
    #[must_use]
    pub const fn is_face_down(self) -> bool {
        !self.face_up
    }

    /// Turn the card face up.
    pub fn show_face(&mut self) {
        self.face_up = true;
    }

    /// Turn the card face down.
    pub fn show_back(&mut self) {
        self.face_up = false;
    }

    /// Does this card immediately precede `other` in its suit?
    ///
    /// Ace of Hearts precedes Two of Hearts; no cross-suit pair and no
    /// non-adjacent pair is ever related. Irreflexive and asymmetric.
    #[must_use]
    pub const fn precedes(self, other: Card) -> bool {
        (self.suit as u8 == other.suit as u8) && self.rank + 1 == other.rank
    }

    /// Inverse of [`Card::precedes`].
    #[must_use]
    pub const fn succeeds(self, other: Card) -> bool {
        other.precedes(self)
    }
}

/// Is `seq` a same-suit, strictly rank-descending run?
///
/// Reading bottom to top, each card must succeed the next (ranks decrease
/// by exactly 1, suit constant). A single card is trivially a run; an
/// empty sequence is not a run.
#[must_use]
pub fn is_descending_run(seq: &[Card]) -> bool {
    !seq.is_empty() && seq.windows(2).all(|pair| pair[0].succeeds(pair[1]))
}

/// Build the full 104-card double deck, every card face down.
///
/// Called once per game session; a new deal reshuffles these values
/// rather than rebuilding them.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for back in BackVariant::ALL {
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                deck.push(Card::new(rank, suit, back));
            }
        }
    }
    deck
}
