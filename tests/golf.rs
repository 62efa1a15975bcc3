//! Golf integration tests.

mod common;

use common::*;
use tablecards::games::golf::scoring::{card_cost, score_grid};
use tablecards::games::golf::{Action, Phase};
use tablecards::{
    ActionError, Card, Cards, Facing, Golf, GolfOptions, Grid, Outcome, PlayerCircle, PlayerId,
    RulesEngine, Suit, Value,
};

const ANN: PlayerId = PlayerId(0);
const BOB: PlayerId = PlayerId(1);

type Face = (Value, Suit);

fn game() -> Golf {
    init_tracing();
    let circle = PlayerCircle::from_names(&["ann", "bob"]).unwrap();
    Golf::new(circle, GolfOptions::default(), 11).unwrap()
}

/// Lays out both grids (row-major, face-down) and the discard pile; the
/// rest goes to the deck.
fn rig(game: &mut Golf, grids: [[Face; 8]; 2], discard: &[Face]) {
    game.deck.take_all();
    game.discard.take_all();
    game.drawn.take_all();
    for grid in &mut game.grids {
        for pile in grid.slots_mut() {
            pile.take_all();
        }
    }

    let mut used = Vec::new();
    for (grid, faces) in game.grids.iter_mut().zip(grids) {
        let ids = pick(&game.cards, &mut used, &faces);
        for (pile, id) in grid.slots_mut().zip(ids) {
            pile.add(id, Facing::Down);
        }
    }
    let discard = pick(&game.cards, &mut used, discard);
    fill(&mut game.discard, &discard, Facing::Up);
    fill(&mut game.deck, &rest(&game.cards, &used), Facing::Down);
}

/// Builds a lone grid from column pairs (top, bottom).
fn grid_of(cards: &mut Cards, columns: [(Value, Value); 4]) -> Grid {
    let mut grid = Grid::new(4, 2);
    for (x, (top, bottom)) in columns.into_iter().enumerate() {
        let top = cards.alloc(Card::new(top, Hearts));
        let bottom = cards.alloc(Card::new(bottom, Spades));
        grid.get_mut((x, 0)).unwrap().add(top, Facing::Up);
        grid.get_mut((x, 1)).unwrap().add(bottom, Facing::Up);
    }
    grid
}

const GRID_A: [Face; 8] = [
    (Ace, Hearts),
    (Two, Hearts),
    (Three, Hearts),
    (Four, Hearts),
    (Five, Hearts),
    (Six, Hearts),
    (Seven, Hearts),
    (Nine, Hearts),
];
const GRID_B: [Face; 8] = [
    (Ace, Clubs),
    (Two, Clubs),
    (Three, Clubs),
    (Four, Clubs),
    (Five, Clubs),
    (Six, Clubs),
    (Seven, Clubs),
    (Nine, Clubs),
];

#[test]
fn deal_fills_every_slot_face_down() {
    let game = game();

    for grid in &game.grids {
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 2);
        assert!(grid.slots().all(|pile| pile.count() == 1));
        assert!(grid
            .slots()
            .all(|pile| pile.entries().all(|(_, f)| f == Facing::Down)));
    }
    assert_eq!(game.discard.count(), 1);
    assert_eq!(game.deck.count(), 52 - 16 - 1);
    assert_eq!(game.awaiting(), Some(BOB));
}

#[test]
fn too_many_players_for_one_deck() {
    let names = ["a", "b", "c", "d", "e", "f", "g"];
    let circle = PlayerCircle::from_names(&names).unwrap();
    assert!(Golf::new(circle, GolfOptions::default(), 1).is_err());
}

#[test]
fn card_costs() {
    assert_eq!(card_cost(Ace), 1);
    assert_eq!(card_cost(Seven), 7);
    assert_eq!(card_cost(Ten), 10);
    assert_eq!(card_cost(Jack), 0);
    assert_eq!(card_cost(Queen), 13);
    assert_eq!(card_cost(King), 0);
}

#[test]
fn unmatched_columns_sum_their_cards() {
    let mut cards = Cards::new();
    let grid = grid_of(
        &mut cards,
        [(Ace, Two), (Queen, King), (Ten, Jack), (Three, Four)],
    );
    assert_eq!(score_grid(&cards, &grid, -20), 3 + 13 + 10 + 7);
}

#[test]
fn matching_columns_score_zero_and_a_pair_dreams_once() {
    let mut cards = Cards::new();

    let single = grid_of(&mut cards, [(Five, Five), (Ace, Two), (Queen, Queen), (Ace, Ace)]);
    assert_eq!(score_grid(&cards, &single, -20), 3);

    let pair = grid_of(&mut cards, [(Five, Five), (Five, Five), (Queen, King), (Ace, Two)]);
    assert_eq!(score_grid(&cards, &pair, -20), -20 + 13 + 3);

    // The third matching column starts a new pairing rather than dreaming again.
    let triple = grid_of(&mut cards, [(Five, Five), (Five, Five), (Five, Five), (Ace, Two)]);
    assert_eq!(score_grid(&cards, &triple, -20), -20 + 3);

    let double = grid_of(&mut cards, [(Five, Five), (Five, Five), (Five, Five), (Five, Five)]);
    assert_eq!(score_grid(&cards, &double, -20), -40);

    let mixed = grid_of(&mut cards, [(Five, Five), (Seven, Seven), (Ace, Two), (Ace, Two)]);
    assert_eq!(score_grid(&cards, &mixed, -20), 6);

    let broken = grid_of(&mut cards, [(Five, Five), (Ace, Two), (Five, Five), (Ace, Two)]);
    assert_eq!(score_grid(&cards, &broken, -10), 6);

    assert_eq!(score_grid(&cards, &pair, -5), -5 + 13 + 3);
}

#[test]
fn draw_then_discard_ends_the_turn() {
    let mut game = game();
    let top = game.deck.peek_top().unwrap();

    game.submit(Action::Draw { player: BOB }).unwrap();
    assert_eq!(game.phase(), Phase::Holding { player: BOB, card: top });
    assert_eq!(game.drawn.peek_top(), Some(top));
    assert_eq!(
        game.submit(Action::Draw { player: BOB }),
        Err(ActionError::IllegalAction)
    );

    game.submit(Action::DiscardDrawn { player: BOB }).unwrap();
    assert!(game.drawn.is_empty());
    assert_eq!(game.discard.peek_top(), Some(top));
    assert_eq!(game.discard.facing_of(top), Some(Facing::Up));
    assert_eq!(game.awaiting(), Some(ANN));
}

#[test]
fn drawn_card_swaps_into_the_grid() {
    let mut game = game();
    rig(&mut game, [GRID_A, GRID_B], &[(King, Spades)]);
    let top = game.deck.peek_top().unwrap();
    let replaced = id(&game.cards, Five, Clubs);

    game.submit(Action::Draw { player: BOB }).unwrap();

    let other = id(&game.cards, King, Spades);
    assert_eq!(
        game.submit(Action::Play { player: BOB, take_card: other, replace_card: replaced }),
        Err(ActionError::IllegalAction)
    );
    let foreign = id(&game.cards, Five, Hearts);
    assert_eq!(
        game.submit(Action::Play { player: BOB, take_card: top, replace_card: foreign }),
        Err(ActionError::NotFound)
    );

    game.submit(Action::Play { player: BOB, take_card: top, replace_card: replaced })
        .unwrap();
    let slot = game.grids[1].get((0, 1)).unwrap();
    assert_eq!(slot.peek_top(), Some(top));
    assert_eq!(slot.facing_of(top), Some(Facing::Up));
    assert_eq!(game.discard.peek_top(), Some(replaced));
    assert_eq!(game.discard.facing_of(replaced), Some(Facing::Up));
    assert!(game.drawn.is_empty());
}

#[test]
fn discard_top_swaps_into_the_grid() {
    let mut game = game();
    rig(&mut game, [GRID_A, GRID_B], &[(Queen, Spades), (King, Spades)]);
    let king = id(&game.cards, King, Spades);
    let queen = id(&game.cards, Queen, Spades);
    let replaced = id(&game.cards, Two, Clubs);

    assert_eq!(
        game.submit(Action::Play { player: BOB, take_card: queen, replace_card: replaced }),
        Err(ActionError::IllegalAction)
    );
    let undealt = game.deck.peek_top().unwrap();
    assert_eq!(
        game.submit(Action::Play { player: BOB, take_card: undealt, replace_card: replaced }),
        Err(ActionError::NotFound)
    );
    assert_eq!(
        game.submit(Action::DiscardDrawn { player: BOB }),
        Err(ActionError::IllegalAction)
    );

    game.submit(Action::Play { player: BOB, take_card: king, replace_card: replaced })
        .unwrap();
    assert_eq!(game.grids[1].get((1, 0)).unwrap().peek_top(), Some(king));
    assert_eq!(game.discard.peek_top(), Some(replaced));
    assert_eq!(game.discard.count(), 2);
    assert_eq!(game.awaiting(), Some(ANN));
}

#[test]
fn empty_deck_recycles_discard_under_the_top() {
    let mut game = game();
    let mut spare = game.deck.take_all();
    let top = game.discard.take_top().unwrap();
    spare.push(top);
    fill(&mut game.discard, &spare, Facing::Up);

    game.submit(Action::Draw { player: BOB }).unwrap();

    assert_eq!(game.discard.count(), 1);
    assert_eq!(game.discard.peek_top(), Some(top));
    assert_eq!(game.deck.count(), spare.len() - 2);
    assert_eq!(game.drawn.count(), 1);
}

#[test]
fn game_ends_when_the_next_grid_is_face_up() {
    let mut game = game();
    rig(&mut game, [GRID_A, GRID_B], &[(King, Spades)]);
    for pile in game.grids[0].slots_mut() {
        pile.set_all_facing(Facing::Up);
    }

    game.submit(Action::Draw { player: BOB }).unwrap();
    let outcome = game.submit(Action::DiscardDrawn { player: BOB }).unwrap();

    let Outcome::Finished(scores) = outcome else {
        panic!("game should be over");
    };
    // (A+5) + (2+6) + (3+7) + (4+9)
    assert_eq!(scores[&ANN], 37);
    assert_eq!(scores[&BOB], 37);
    assert_eq!(game.scores(), Some(&scores));
    assert!(game.is_finished());
    assert_eq!(game.awaiting(), None);
    assert!(game
        .grids
        .iter()
        .flat_map(|grid| grid.slots())
        .all(|pile| pile.entries().all(|(_, f)| f == Facing::Up)));
    assert_eq!(
        game.submit(Action::Draw { player: ANN }),
        Err(ActionError::IllegalAction)
    );
}

#[test]
fn rejected_actions_leave_the_game_unchanged() {
    let mut game = game();
    rig(&mut game, [GRID_A, GRID_B], &[(King, Spades)]);
    let before = (
        game.deck.clone(),
        game.discard.clone(),
        game.grids.clone(),
        game.phase(),
    );

    let king = id(&game.cards, King, Spades);
    let mine = id(&game.cards, Ace, Clubs);
    assert_eq!(
        game.submit(Action::Draw { player: ANN }),
        Err(ActionError::OutOfTurn)
    );
    assert_eq!(
        game.submit(Action::Play { player: BOB, take_card: king, replace_card: king }),
        Err(ActionError::NotFound)
    );
    assert_eq!(
        game.submit(Action::Play { player: ANN, take_card: king, replace_card: mine }),
        Err(ActionError::OutOfTurn)
    );

    let after = (
        game.deck.clone(),
        game.discard.clone(),
        game.grids.clone(),
        game.phase(),
    );
    assert_eq!(after, before);
}
