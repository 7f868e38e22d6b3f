//! The grab → validate → commit/abort move protocol.
//!
//! ## State machine
//!
//! **Idle** (nothing pending) → `grab` → **Selecting** → either
//! `complete_move` (**Committed**: run spliced out of the origin, appended
//! to the target) or `abort_move` (**Aborted**: nothing mutated) → **Idle**.
//!
//! Illegality is never a fault: a bad `grab` returns an empty run, a bad
//! drop returns `false`, and in both cases no pile changes. The pending
//! run stays physically in its origin pile until commit, so abort is O(1).

use crate::cards::{is_descending_run, Card, KING};
use crate::piles::{Run, MAX_RUN};

use super::state::{Game, PendingMove, PileId, FOUNDATION_PILES, TABLEAU_PILES};

impl Game {
    // === Selection ===

    /// Pick up the run starting at `idx` in `pile`.
    ///
    /// Returns the selected run, or an empty run (and changes nothing) if
    /// that position is not selectable. A grab while another selection is
    /// pending silently replaces it; moves never stack.
    pub fn grab(&mut self, pile: PileId, idx: usize) -> Run {
        if !self.pile(pile).can_select(idx) {
            return Run::new();
        }
        self.pending = Some(PendingMove {
            origin: pile,
            start: idx,
        });
        Run::from_slice(&self.pile(pile).cards()[idx..])
    }

    /// The currently selected run; empty when idle.
    #[must_use]
    pub fn selection(&self) -> &[Card] {
        match self.pending {
            Some(PendingMove { origin, start }) => &self.pile(origin).cards()[start..],
            None => &[],
        }
    }

    /// Is a move in progress?
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.pending.is_some()
    }

    /// Discard the pending selection without touching any pile.
    ///
    /// Always safe: the origin was never mutated by `grab`. No-op when
    /// nothing is pending.
    pub fn abort_move(&mut self) {
        self.pending = None;
    }

    // === Dropping ===

    /// May the pending run be dropped on `target`? Pure; mutates nothing.
    ///
    /// False when nothing is pending or the target is the stock. Tableau
    /// targets are bounded by the supermove capacity; foundations and the
    /// waste are unconstrained (the waste additionally takes cards only
    /// from the stock).
    #[must_use]
    pub fn can_drop(&self, target: PileId) -> bool {
        let Some(PendingMove { origin, .. }) = self.pending else {
            return false;
        };
        if matches!(target, PileId::Stock) {
            return false;
        }
        let origin_kind = self.pile(origin).kind();
        self.pile(target)
            .validate_drop(self.selection(), self.drop_limit(target), origin_kind)
    }

    /// Commit the pending move onto `target`.
    ///
    /// Re-validates first: returns `false` and changes nothing if the drop
    /// is illegal or nothing is pending. On success the run is appended to
    /// the target, the origin is truncated, the stock top is turned face
    /// up if needed, and the selection is cleared.
    pub fn complete_move(&mut self, target: PileId) -> bool {
        if !self.can_drop(target) {
            return false;
        }
        // can_drop guarantees a pending move exists.
        let Some(PendingMove { origin, start }) = self.pending.take() else {
            return false;
        };
        let run = Run::from_slice(&self.pile(origin).cards()[start..]);
        self.pile_mut(target).apply_drop(&run);
        self.pile_mut(origin).truncate(start);
        self.pile_mut(PileId::Stock).flip_top();
        if self.win() {
            self.record_win();
        }
        true
    }

    /// Send a finished suit home from a double-clicked card.
    ///
    /// If the card at `idx` in tableau pile `pile` belongs to a complete
    /// King-to-Ace run of one suit sitting on top of that pile, the whole
    /// run moves to the first empty foundation and this returns `true`.
    /// Otherwise nothing changes. Any pending selection is replaced the
    /// same way a fresh `grab` would replace it.
    pub fn complete_suit(&mut self, pile: PileId, idx: usize) -> bool {
        if !matches!(pile, PileId::Tableau(_)) {
            return false;
        }
        let cards = self.pile(pile).cards();
        let Some(start) = cards.len().checked_sub(KING as usize) else {
            return false;
        };
        if idx < start || idx >= cards.len() {
            return false;
        }
        if cards[start].rank() != KING || !is_descending_run(&cards[start..]) {
            return false;
        }
        let target = (0..FOUNDATION_PILES as u8)
            .map(PileId::Foundation)
            .find(|&f| self.pile(f).is_empty());
        let Some(target) = target else {
            return false;
        };
        if self.grab(pile, start).is_empty() {
            return false;
        }
        self.complete_move(target)
    }

    /// Supermove capacity for a target: `2^e` where `e` counts the empty
    /// tableau piles other than the target itself. Non-tableau targets
    /// are unconstrained.
    ///
    /// An empty tableau target accepts at most half its limit, so with no
    /// other empty pile it accepts nothing at all.
    fn drop_limit(&self, target: PileId) -> usize {
        match target {
            PileId::Tableau(t) => {
                let empties = self
                    .tableau()
                    .iter()
                    .enumerate()
                    .filter(|&(i, pile)| i != t as usize && pile.is_empty())
                    .count();
                1 << empties
            }
            _ => MAX_RUN,
        }
    }

    // === Outcome ===

    /// Has the game been won? True iff every foundation holds the full
    /// Ace-to-King ascension.
    #[must_use]
    pub fn win(&self) -> bool {
        self.foundations()
            .iter()
            .all(|pile| pile.len() == KING as usize)
    }

    /// Is the deal decided? True on a win, or when the stock is exhausted
    /// and no selectable run has any legal destination.
    #[must_use]
    pub fn game_over(&self) -> bool {
        if self.win() {
            return true;
        }
        if self.can_deal() {
            return false;
        }
        !self.has_legal_move()
    }

    /// Pure scan for any legal (source run, destination) pair.
    fn has_legal_move(&self) -> bool {
        let sources =
            std::iter::once(PileId::Waste).chain((0..TABLEAU_PILES as u8).map(PileId::Tableau));
        for source in sources {
            let pile = self.pile(source);
            for start in 0..pile.len() {
                if !pile.can_select(start) {
                    continue;
                }
                let run = &pile.cards()[start..];
                for target in PileId::all() {
                    if target == source || matches!(target, PileId::Stock | PileId::Waste) {
                        continue;
                    }
                    let ok = self.pile(target).validate_drop(
                        run,
                        self.drop_limit(target),
                        pile.kind(),
                    );
                    if ok {
                        return true;
                    }
                }
            }
        }
        false
    }
}
