//! Tests for the shared building blocks: piles, grids, seating and decks.

mod common;

use common::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tablecards::deck::{can_draw, deal, draw_or_recycle, pinochle_deck, regular_deck};
use tablecards::{
    ActionError, Card, CardId, Cards, CircleError, CrazyEightsOptions, DECK_SIZE, DealError,
    Facing, Grid, Hand, HashSet, Outcome, PINOCHLE_DECK_SIZE, PileError, PinochleOptions, Player,
    PlayerCircle, PlayerId, Pile, Suit, Value,
};

fn numbered(n: usize) -> (Cards, Vec<CardId>) {
    let mut cards = Cards::new();
    let ids = (0..n)
        .map(|i| cards.alloc(Card::new(Value::ALL[i % 13], Suit::ALL[i / 13 % 4])))
        .collect();
    (cards, ids)
}

fn pile_of(ids: &[CardId]) -> Pile {
    let mut pile = Pile::new();
    fill(&mut pile, ids, Facing::Down);
    pile
}

#[test]
fn pile_top_is_the_last_card_added() {
    let (_, ids) = numbered(4);
    let mut pile = pile_of(&ids[..3]);
    pile.add(ids[3], Facing::Up);

    assert_eq!(pile.count(), 4);
    assert_eq!(pile.peek_top(), Some(ids[3]));
    assert_eq!(pile.peek_top_n(2), vec![ids[2], ids[3]]);
    assert_eq!(pile.peek_top_n(10).len(), 4);
    assert_eq!(pile.facing_of(ids[3]), Some(Facing::Up));
    assert_eq!(pile.facing_of(ids[0]), Some(Facing::Down));

    assert_eq!(pile.take_top(), Some(ids[3]));
    assert_eq!(pile.take_bottom(2), vec![ids[0], ids[1]]);
    assert_eq!(pile.take_all(), vec![ids[2]]);
    assert!(pile.is_empty());
    assert_eq!(pile.take_top(), None);
}

#[test]
fn pile_take_removes_one_card() {
    let (_, ids) = numbered(4);
    let mut pile = pile_of(&ids[..3]);

    assert_eq!(pile.take(ids[1]), Ok(ids[1]));
    assert_eq!(pile.iter().collect::<Vec<_>>(), vec![ids[0], ids[2]]);

    let before = pile.clone();
    assert_eq!(pile.take(ids[1]), Err(PileError::NotFound));
    assert_eq!(pile.take(ids[3]), Err(PileError::NotFound));
    assert_eq!(pile, before);
}

#[test]
fn pile_take_all_of_is_all_or_nothing() {
    let (_, ids) = numbered(5);
    let mut pile = pile_of(&ids[..4]);
    let before = pile.clone();

    assert_eq!(pile.take_all_of(&[ids[0], ids[4]]), Err(PileError::NotFound));
    assert_eq!(pile.take_all_of(&[ids[1], ids[1]]), Err(PileError::DuplicateCard));
    assert_eq!(pile, before);

    assert_eq!(pile.take_all_of(&[ids[2], ids[0]]), Ok(vec![ids[2], ids[0]]));
    assert_eq!(pile.iter().collect::<Vec<_>>(), vec![ids[1], ids[3]]);
}

#[test]
fn pile_counts_additions_not_cards() {
    let (_, ids) = numbered(4);
    let mut pile = Pile::new();
    assert_eq!(pile.additions(), 0);

    pile.add(ids[0], Facing::Up);
    pile.add_all(ids[1..].iter().copied(), Facing::Down);
    assert_eq!(pile.additions(), 2);

    pile.take_all();
    assert_eq!(pile.additions(), 2);
}

#[test]
fn pile_facing_changes_in_place() {
    let (_, ids) = numbered(3);
    let mut pile = pile_of(&ids[..2]);

    pile.set_facing(ids[0], Facing::Owner).unwrap();
    assert_eq!(pile.facing_of(ids[0]), Some(Facing::Owner));
    assert_eq!(pile.set_facing(ids[2], Facing::Up), Err(PileError::NotFound));

    pile.set_all_facing(Facing::Up);
    assert!(pile.entries().all(|(_, facing)| facing == Facing::Up));
    assert_eq!(pile.iter().collect::<Vec<_>>(), ids[..2]);
}

#[test]
fn hand_is_an_owned_pile() {
    let (_, ids) = numbered(2);
    let mut hand = Hand::new(PlayerId(3));
    hand.add(ids[0], Facing::Owner);
    hand.pile_mut().add(ids[1], Facing::Owner);

    assert_eq!(hand.owner(), PlayerId(3));
    assert_eq!(hand.count(), 2);
    assert!(hand.pile().includes(ids[1]));
}

#[test]
fn grid_coordinates_are_row_major() {
    let (_, ids) = numbered(2);
    let mut grid = Grid::new(4, 2);

    assert_eq!(grid.slots().count(), 8);
    assert_eq!(grid.xy_to_index((3, 1)), Some(7));
    assert_eq!(grid.index_to_xy(5), (1, 1));
    assert_eq!(grid.xy_to_index((4, 0)), None);
    assert_eq!(grid.xy_to_index((0, 2)), None);
    assert!(grid.get((4, 0)).is_none());

    grid.get_mut((2, 1)).unwrap().add(ids[0], Facing::Down);
    grid.get_mut((2, 0)).unwrap().add(ids[1], Facing::Up);
    assert_eq!(grid.find_xy(|pile, _| pile.includes(ids[0])), Some((2, 1)));
    assert_eq!(grid.find_xy(|pile, (x, _)| x == 3 && !pile.is_empty()), None);

    let column: Vec<_> = grid.column(2).map(Pile::peek_top).collect();
    assert_eq!(column, vec![Some(ids[1]), Some(ids[0])]);
}

#[test]
fn circle_rejects_bad_seating() {
    assert_eq!(PlayerCircle::from_names(&[]), Err(CircleError::Empty));
    let twice = vec![Player::new(PlayerId(4), "a"), Player::new(PlayerId(4), "b")];
    assert_eq!(PlayerCircle::new(twice), Err(CircleError::DuplicatePlayer));
}

#[test]
fn circle_from_names_runs_out_of_ids_past_256() {
    let names: Vec<String> = (0..=256).map(|i| format!("p{i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let full = PlayerCircle::from_names(&refs[..256]).unwrap();
    assert_eq!(full.len(), 256);
    assert_eq!(full.at(255), PlayerId(255));
    assert_eq!(
        PlayerCircle::from_names(&refs),
        Err(CircleError::TooManyPlayers)
    );
}

#[test]
fn circle_passes_left_and_wraps() {
    let players = vec![
        Player::new(PlayerId(7), "x"),
        Player::new(PlayerId(3), "y"),
        Player::new(PlayerId(5), "z"),
    ];
    let circle = PlayerCircle::new(players).unwrap();

    assert_eq!(circle.len(), 3);
    assert_eq!(circle.dealer(), PlayerId(7));
    assert_eq!(circle.ids().collect::<Vec<_>>(), [PlayerId(7), PlayerId(3), PlayerId(5)]);
    assert_eq!(circle.left_of(PlayerId(3)), Ok(PlayerId(5)));
    assert_eq!(circle.left_of(PlayerId(5)), Ok(PlayerId(7)));
    assert_eq!(circle.left_of(PlayerId(0)), Err(CircleError::NotSeated));
    assert_eq!(circle.at(4), PlayerId(3));
    assert_eq!(circle.seat_of(PlayerId(5)), Some(2));
    assert!(!circle.contains(PlayerId(1)));
    assert_eq!(circle.players()[1].name, "y");
}

#[test]
fn circle_skips_excluded_players() {
    let circle = PlayerCircle::from_names(&["a", "b", "c", "d"]).unwrap();
    let mut excluded = HashSet::new();
    excluded.insert(PlayerId(1));
    excluded.insert(PlayerId(2));

    assert_eq!(circle.left_of_excluding(PlayerId(0), &excluded), Ok(PlayerId(3)));
    assert_eq!(circle.left_of_excluding(PlayerId(1), &excluded), Ok(PlayerId(3)));

    excluded.insert(PlayerId(3));
    assert_eq!(circle.left_of_excluding(PlayerId(0), &excluded), Ok(PlayerId(0)));

    excluded.insert(PlayerId(0));
    assert_eq!(
        circle.left_of_excluding(PlayerId(0), &excluded),
        Err(CircleError::AllExcluded)
    );
}

#[test]
fn circle_partners_sit_opposite() {
    let four = PlayerCircle::from_names(&["a", "b", "c", "d"]).unwrap();
    assert_eq!(four.opposite_of(PlayerId(0)), Ok(PlayerId(2)));
    assert_eq!(four.opposite_of(PlayerId(3)), Ok(PlayerId(1)));
    assert_eq!(four.opposite_of(PlayerId(9)), Err(CircleError::NotSeated));

    let three = PlayerCircle::from_names(&["a", "b", "c"]).unwrap();
    assert_eq!(three.opposite_of(PlayerId(0)), Err(CircleError::OddSeatCount));
}

#[test]
fn regular_deck_has_every_face_once() {
    let mut cards = Cards::new();
    let deck = regular_deck(&mut cards);

    assert_eq!(deck.count(), DECK_SIZE);
    assert!(deck.entries().all(|(_, facing)| facing == Facing::Down));
    for suit in Suit::ALL {
        for value in Value::ALL {
            assert_eq!(cards.find(Card::new(value, suit)).count(), 1);
        }
    }
}

#[test]
fn pinochle_deck_has_two_of_nine_through_ace() {
    let mut cards = Cards::new();
    let deck = pinochle_deck(&mut cards);

    assert_eq!(deck.count(), PINOCHLE_DECK_SIZE);
    for suit in Suit::ALL {
        for value in [Nine, Jack, Queen, King, Ten, Ace] {
            assert_eq!(cards.find(Card::new(value, suit)).count(), 2);
        }
        assert_eq!(cards.find(Card::new(Two, suit)).count(), 0);
    }
}

#[test]
fn deal_goes_round_the_table_from_the_top() {
    let (_, ids) = numbered(7);
    let mut source = pile_of(&ids);
    let mut a = Pile::new();
    let mut b = Pile::new();

    deal(3, &mut source, &mut [&mut a, &mut b], Facing::Owner).unwrap();

    assert_eq!(a.iter().collect::<Vec<_>>(), [ids[6], ids[4], ids[2]]);
    assert_eq!(b.iter().collect::<Vec<_>>(), [ids[5], ids[3], ids[1]]);
    assert!(a.entries().all(|(_, facing)| facing == Facing::Owner));
    assert_eq!(source.iter().collect::<Vec<_>>(), [ids[0]]);

    let before = source.clone();
    assert_eq!(
        deal(1, &mut source, &mut [&mut a, &mut b], Facing::Owner),
        Err(DealError::Exhausted)
    );
    assert_eq!(source, before);
    assert_eq!(a.count(), 3);

    assert_eq!(
        deal(usize::MAX, &mut source, &mut [&mut a, &mut b], Facing::Owner),
        Err(DealError::Exhausted)
    );
    assert_eq!(source, before);
}

#[test]
fn draw_recycles_all_but_the_top_discard() {
    let (_, ids) = numbered(5);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Pile::new();
    let mut discard = Pile::new();
    fill(&mut discard, &ids, Facing::Up);
    let additions = discard.additions();

    assert!(can_draw(&deck, &discard));
    let drawn = draw_or_recycle(&mut deck, &mut discard, &mut rng).unwrap();

    assert_ne!(drawn, ids[4]);
    assert_eq!(deck.count(), 3);
    assert!(deck.entries().all(|(_, facing)| facing == Facing::Down));
    assert_eq!(discard.iter().collect::<Vec<_>>(), [ids[4]]);
    assert_eq!(discard.additions(), additions);

    deck.take_all();
    assert!(!can_draw(&deck, &discard));
    assert_eq!(draw_or_recycle(&mut deck, &mut discard, &mut rng), None);
    assert_eq!(discard.count(), 1);
}

#[test]
fn crazy_eights_hand_size_follows_player_count() {
    let options = CrazyEightsOptions::default();
    assert_eq!(options.hand_size_for(1), None);
    assert_eq!(options.hand_size_for(2), Some(7));
    assert_eq!(options.hand_size_for(3), Some(7));
    assert_eq!(options.hand_size_for(4), Some(5));
    assert_eq!(options.hand_size_for(7), Some(5));
    assert_eq!(options.hand_size_for(8), None);
    assert_eq!(options.with_hand_size(Some(9)).hand_size_for(8), Some(9));
}

#[test]
fn pinochle_defaults() {
    let options = PinochleOptions::default();
    assert_eq!(options.minimum_bid, 20);
    assert_eq!(options.deals, 4);
}

#[test]
fn lower_errors_map_onto_action_errors() {
    assert_eq!(ActionError::from(PileError::NotFound), ActionError::NotFound);
    assert_eq!(
        ActionError::from(PileError::DuplicateCard),
        ActionError::StructuralViolation
    );
    assert_eq!(ActionError::from(CircleError::NotSeated), ActionError::NotFound);
    assert_eq!(
        ActionError::from(CircleError::AllExcluded),
        ActionError::IllegalAction
    );
    assert_eq!(ActionError::from(DealError::Exhausted), ActionError::Exhausted);
    assert_eq!(ActionError::OutOfTurn.to_string(), "not this player's turn");
}

#[test]
fn outcome_helpers() {
    let done: Outcome<u8> = Outcome::Finished(4);
    assert!(done.is_finished());
    assert_eq!(done.finished(), Some(4));

    let going: Outcome<u8> = Outcome::InProgress;
    assert!(!going.is_finished());
    assert_eq!(going.finished(), None);
}

#[test]
fn card_faces() {
    assert_eq!(Ace.pips(), 1);
    assert_eq!(Ten.pips(), 10);
    assert_eq!(King.pips(), 13);

    let (cards, ids) = numbered(3);
    assert_eq!(cards.len(), 3);
    assert_eq!(cards[ids[1]], Card::new(Two, Hearts));
    assert_eq!(cards.get(ids[2]), Some(Card::new(Three, Hearts)));
    assert_eq!(cards.ids().collect::<Vec<_>>(), ids);
}
