//! End-to-end scenarios driven through the public engine API.
//!
//! These tests exercise the surface a presentation layer uses: fresh
//! deals, the grab/validate/commit/abort protocol, stock turning, and the
//! win condition, always against real dealt layouts.

use forty_thieves::{
    Card, CardCode, Game, PileId, Suit, ACE, DECK_SIZE, FOUNDATION_PILES, INITIAL_TABLEAU_DEAL,
    TABLEAU_PILES,
};

/// Fresh deal: 4 face-up cards per tableau pile, 64 in the stock with only
/// the top face up, waste and foundations empty.
#[test]
fn test_fresh_deal_layout() {
    let game = Game::new(1);

    assert_eq!(game.tableau().len(), TABLEAU_PILES);
    assert_eq!(game.foundations().len(), FOUNDATION_PILES);

    for pile in game.tableau() {
        assert_eq!(pile.len(), INITIAL_TABLEAU_DEAL / TABLEAU_PILES);
        assert!(pile.cards().iter().all(|c| c.is_face_up()));
    }

    let stock = game.stock().cards();
    assert_eq!(stock.len(), DECK_SIZE - INITIAL_TABLEAU_DEAL);
    assert!(stock.last().unwrap().is_face_up());
    assert!(stock[..stock.len() - 1].iter().all(|c| c.is_face_down()));

    assert!(game.waste().is_empty());
    assert!(game.foundations().iter().all(|p| p.is_empty()));

    assert!(!game.is_moving());
    assert!(!game.win());
    assert_eq!(game.total_cards(), DECK_SIZE);
}

/// The top tableau card can go to a foundation exactly when it is an Ace.
#[test]
fn test_top_card_to_foundation_iff_ace() {
    for seed in 0..20 {
        let mut game = Game::new(seed);

        for t in 0..TABLEAU_PILES as u8 {
            let pile = PileId::Tableau(t);
            let top_idx = game.pile(pile).len() - 1;
            let run = game.grab(pile, top_idx);
            assert_eq!(run.len(), 1);

            let is_ace = run[0].rank() == ACE;
            let accepted = (0..FOUNDATION_PILES as u8)
                .any(|f| game.can_drop(PileId::Foundation(f)));
            assert_eq!(accepted, is_ace, "seed {seed}, pile {t}");

            game.abort_move();
        }
    }
}

/// Grab followed by abort leaves every pile exactly as it was.
#[test]
fn test_grab_abort_round_trip() {
    let mut game = Game::new(3);
    let before: Vec<Vec<Card>> = PileId::all()
        .map(|id| game.pile(id).cards().to_vec())
        .collect();

    let run = game.grab(PileId::Tableau(4), 3);
    assert!(!run.is_empty());
    game.abort_move();

    let after: Vec<Vec<Card>> = PileId::all()
        .map(|id| game.pile(id).cards().to_vec())
        .collect();
    assert_eq!(before, after);
}

/// Turning the whole stock over moves all 64 cards to the waste, one at a
/// time, each face up; the game is then decided only by tableau play.
#[test]
fn test_turning_the_stock() {
    let mut game = Game::new(5);

    let mut expected: Vec<CardCode> = game
        .stock()
        .cards()
        .iter()
        .rev()
        .map(|c| c.code())
        .collect();

    while game.can_deal() {
        game.deal_up();
        let turned = game.waste().top().unwrap();
        assert!(turned.is_face_up());
        assert_eq!(turned.code(), expected.remove(0));
    }

    assert_eq!(game.waste().len(), DECK_SIZE - INITIAL_TABLEAU_DEAL);
    assert!(game.stock().is_empty());
    assert_eq!(game.total_cards(), DECK_SIZE);
}

/// The waste never takes a drop from the tableau, only the stock feed.
#[test]
fn test_waste_is_not_a_dumping_ground() {
    let mut game = Game::new(8);

    let run = game.grab(PileId::Tableau(0), 3);
    assert!(!run.is_empty());
    assert!(!game.can_drop(PileId::Waste));
    assert!(!game.complete_move(PileId::Waste));
    game.abort_move();

    // But the grabbed stock top may move to the waste explicitly.
    let top_idx = game.stock().len() - 1;
    let run = game.grab(PileId::Stock, top_idx);
    assert_eq!(run.len(), 1);
    assert!(game.can_drop(PileId::Waste));
    assert!(game.complete_move(PileId::Waste));
    assert_eq!(game.waste().len(), 1);
}

/// A committed move splices the run out of its origin and exposes the
/// next stock card.
#[test]
fn test_commit_from_stock() {
    let mut game = Game::new(11);

    let top_idx = game.stock().len() - 1;
    game.grab(PileId::Stock, top_idx);
    assert!(game.complete_move(PileId::Waste));

    assert!(!game.is_moving());
    assert_eq!(game.stock().len(), top_idx);
    assert!(game.stock().top().unwrap().is_face_up());
    assert_eq!(game.total_cards(), DECK_SIZE);
}

/// Every card is locatable by code, and codes round-trip through piles.
#[test]
fn test_card_lookup_by_code() {
    let game = Game::new(13);

    for code in 0..DECK_SIZE as u8 {
        let (pile, idx) = game.find(CardCode(code)).expect("every card is somewhere");
        assert_eq!(game.pile(pile).cards()[idx].code(), CardCode(code));
    }
    assert!(game.find(CardCode(200)).is_none());
}

/// Redealing counts games and reshuffles; stats survive across deals.
#[test]
fn test_session_stats_across_deals() {
    let mut game = Game::new(17);
    assert_eq!(game.stats().games_played, 1);
    assert_eq!(game.stats().games_won, 0);

    game.deal();
    game.deal();

    assert_eq!(game.stats().games_played, 3);
    assert_eq!(game.total_cards(), DECK_SIZE);
    assert!(!game.win());
}

/// A pending move does not survive a redeal or a stock turn.
#[test]
fn test_pending_move_cleared_by_lifecycle_ops() {
    let mut game = Game::new(19);

    game.grab(PileId::Tableau(2), 3);
    assert!(game.is_moving());
    game.deal_up();
    assert!(!game.is_moving());

    game.grab(PileId::Tableau(2), 3);
    game.deal();
    assert!(!game.is_moving());
    assert_eq!(game.total_cards(), DECK_SIZE);
}

/// Entropy-seeded games still produce a legal layout.
#[test]
fn test_from_entropy_layout() {
    let game = Game::from_entropy();

    assert_eq!(game.total_cards(), DECK_SIZE);
    assert_eq!(game.stock().len(), DECK_SIZE - INITIAL_TABLEAU_DEAL);
    for pile in game.tableau() {
        assert_eq!(pile.len(), 4);
    }
}

/// Two games with the same seed replay identically under the same script.
#[test]
fn test_seeded_replay() {
    let mut a = Game::new(23);
    let mut b = Game::new(23);

    for _ in 0..10 {
        a.deal_up();
        b.deal_up();
    }
    a.grab(PileId::Tableau(6), 3);
    b.grab(PileId::Tableau(6), 3);
    for f in 0..FOUNDATION_PILES as u8 {
        assert_eq!(
            a.complete_move(PileId::Foundation(f)),
            b.complete_move(PileId::Foundation(f))
        );
    }

    for id in PileId::all() {
        assert_eq!(a.pile(id).cards(), b.pile(id).cards());
    }

    // Pile sequences match suit-by-suit card identity too.
    assert_eq!(
        a.waste().cards().iter().map(|c| c.suit()).collect::<Vec<Suit>>(),
        b.waste().cards().iter().map(|c| c.suit()).collect::<Vec<Suit>>()
    );
}
