//! Game state: the twenty piles, the deck, and the deal lifecycle.
//!
//! ## Layout
//!
//! - 1 stock (64 cards after a fresh deal, face down except the top)
//! - 1 waste, fed one card at a time from the stock
//! - 10 tableau piles (4 face-up cards each after a fresh deal)
//! - 8 foundations (empty after a fresh deal; all full = win)
//!
//! The full 104-card deck is built once per session; a new deal reshuffles
//! and redistributes the same card values.

use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card, CardCode};
use crate::core::{GameRng, GameRngState};
use crate::piles::{Pile, PileKind};

/// Number of tableau piles.
pub const TABLEAU_PILES: usize = 10;

/// Number of foundation piles.
pub const FOUNDATION_PILES: usize = 8;

/// Cards dealt to the tableau by a fresh deal (4 per pile, round-robin).
pub const INITIAL_TABLEAU_DEAL: usize = 40;

/// Address of one of the twenty piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    /// Index in `0..TABLEAU_PILES`.
    Tableau(u8),
    /// Index in `0..FOUNDATION_PILES`.
    Foundation(u8),
}

impl PileId {
    /// Every pile address, in stock, waste, tableau, foundation order.
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Waste]
            .into_iter()
            .chain((0..TABLEAU_PILES as u8).map(PileId::Tableau))
            .chain((0..FOUNDATION_PILES as u8).map(PileId::Foundation))
    }
}

/// A pending grab.
///
/// The selected run is the view `origin[start..]`; the cards stay in the
/// origin pile until the move commits, which is what makes abort O(1).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingMove {
    /// Pile the run was grabbed from.
    pub origin: PileId,
    /// Index of the run's bottom card within the origin.
    pub start: usize,
}

/// Session counters across deals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Deals started this session.
    pub games_played: u32,
    /// Deals that reached the win condition.
    pub games_won: u32,
}

/// The full engine state and its state-transition operations.
///
/// Single-threaded by design: `grab`/`can_drop`/`complete_move` form a
/// three-step transaction that is not atomic across calls, so the engine
/// must be driven from one control thread.
#[derive(Clone, Debug)]
pub struct Game {
    stock: Pile,
    waste: Pile,
    tableau: [Pile; TABLEAU_PILES],
    foundations: [Pile; FOUNDATION_PILES],
    /// Master copy of the 104 cards, reshuffled each deal.
    deck: Vec<Card>,
    pub(super) pending: Option<PendingMove>,
    rng: GameRng,
    stats: SessionStats,
    /// Has the current deal already been counted as won?
    pub(super) win_recorded: bool,
}

impl Game {
    /// Create a game with a fixed seed and deal the first layout.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a game seeded from OS entropy and deal the first layout.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    fn with_rng(rng: GameRng) -> Self {
        let mut game = Self {
            stock: Pile::new(PileKind::Stock),
            waste: Pile::new(PileKind::Waste),
            tableau: std::array::from_fn(|_| Pile::new(PileKind::Tableau)),
            foundations: std::array::from_fn(|_| Pile::new(PileKind::Foundation)),
            deck: full_deck(),
            pending: None,
            rng,
            stats: SessionStats::default(),
            win_recorded: false,
        };
        game.deal();
        game
    }

    // === Deal lifecycle ===

    /// Reshuffle and deal a fresh layout.
    ///
    /// Clears every pile, permutes the deck, deals 40 cards face up to the
    /// tableau round-robin, leaves the rest in the stock with only the top
    /// face up. Counts a new game in the session stats.
    pub fn deal(&mut self) {
        self.shuffle();
        for n in 0..INITIAL_TABLEAU_DEAL {
            // Stock holds the whole deck here, so the pop cannot fail.
            if let Some(card) = self.stock.pop() {
                self.tableau[n % TABLEAU_PILES].add(card, true);
            }
        }
        self.stock.flip_top();
        self.stats.games_played += 1;
        self.win_recorded = false;
    }

    /// Clear every pile and move the reshuffled deck, face down, into the
    /// stock. Discards any pending move.
    fn shuffle(&mut self) {
        self.pending = None;
        self.stock.clear();
        self.waste.clear();
        for pile in &mut self.tableau {
            pile.clear();
        }
        for pile in &mut self.foundations {
            pile.clear();
        }
        self.rng.shuffle(&mut self.deck);
        for &card in &self.deck {
            self.stock.add(card, false);
        }
    }

    /// Can the stock still be turned onto the waste?
    #[must_use]
    pub fn can_deal(&self) -> bool {
        !self.stock.is_empty()
    }

    /// Turn the top card of the stock face up onto the waste.
    ///
    /// No-op when the stock is empty. Discards any pending move first so
    /// the selection never refers to a card that just moved. This variant
    /// never recycles the waste, so the stock is traversed exactly once.
    pub fn deal_up(&mut self) {
        self.pending = None;
        if let Some(card) = self.stock.pop() {
            self.waste.add(card, true);
            self.stock.flip_top();
        }
    }

    // === Query surface ===

    /// The pile at the given address.
    #[must_use]
    pub fn pile(&self, id: PileId) -> &Pile {
        match id {
            PileId::Stock => &self.stock,
            PileId::Waste => &self.waste,
            PileId::Tableau(i) => &self.tableau[i as usize],
            PileId::Foundation(i) => &self.foundations[i as usize],
        }
    }

    /// The stock pile.
    #[must_use]
    pub fn stock(&self) -> &Pile {
        &self.stock
    }

    /// The waste pile.
    #[must_use]
    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    /// The tableau piles, left to right.
    #[must_use]
    pub fn tableau(&self) -> &[Pile] {
        &self.tableau
    }

    /// The foundation piles.
    #[must_use]
    pub fn foundations(&self) -> &[Pile] {
        &self.foundations
    }

    /// Locate a card by its code: which pile holds it, and where.
    ///
    /// Linear scan over the piles, each bounded by the deck size.
    #[must_use]
    pub fn find(&self, code: CardCode) -> Option<(PileId, usize)> {
        PileId::all().find_map(|id| self.pile(id).find(code).map(|idx| (id, idx)))
    }

    /// Total cards across all piles. Always [`crate::cards::DECK_SIZE`];
    /// the pending selection is a view into its origin, never a separate
    /// copy.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        PileId::all().map(|id| self.pile(id).len()).sum()
    }

    /// Session counters.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Snapshot of the RNG, for reproducing a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    pub(super) fn pile_mut(&mut self, id: PileId) -> &mut Pile {
        match id {
            PileId::Stock => &mut self.stock,
            PileId::Waste => &mut self.waste,
            PileId::Tableau(i) => &mut self.tableau[i as usize],
            PileId::Foundation(i) => &mut self.foundations[i as usize],
        }
    }

    pub(super) fn record_win(&mut self) {
        if !self.win_recorded {
            self.win_recorded = true;
            self.stats.games_won += 1;
        }
    }
}
