//! Quinn's Game.
//!
//! A shedding game. Cards must be played at or above the active rank; twos
//! and threes can go on anything and a ten burns the pile. Players first
//! empty their hand, then their face-up front cards, then flip their
//! face-down front cards blind.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{CardId, Cards, Facing, Value};
use crate::deck::{deal, regular_deck};
use crate::error::{ActionError, DealError, SetupError};
use crate::grid::Grid;
use crate::hand::Hand;
use crate::options::QuinnsOptions;
use crate::pile::Pile;
use crate::player::{PlayerCircle, PlayerId};

mod actions;
pub mod state;

pub use state::{Action, Phase, TopCardChoice};

/// Number of front piles per player.
pub const FRONT_PILES: usize = 3;

/// Ranks that must be played in ascending order.
const RANK_ORDER: [Value; 10] = [
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

/// Where a player's next cards have to come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Hand,
    FaceUp,
    FaceDown,
}

/// A Quinn's Game engine.
#[derive(Debug, Clone)]
pub struct QuinnsGame {
    /// Every card in the game.
    pub cards: Cards,
    /// Face-down draw pile.
    pub deck: Pile,
    /// Face-up discard pile.
    pub discard: Pile,
    /// Cleared discards, face-down.
    pub trash: Pile,
    /// One hand per seat, in seat order.
    pub hands: Vec<Hand>,
    /// One row of front piles per seat, in seat order.
    pub fronts: Vec<Grid>,
    /// Seating order.
    pub circle: PlayerCircle,
    /// Game options.
    pub options: QuinnsOptions,
    phase: Phase,
}

impl QuinnsGame {
    /// Creates a game with the given seed and deals hands and the
    /// face-down front cards. The game then waits for
    /// [`Action::ChooseTopCards`].
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Deal`] if one deck cannot cover the deal.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::{PlayerCircle, QuinnsGame, QuinnsOptions};
    /// use tablecards::games::quinns::Phase;
    ///
    /// let circle = PlayerCircle::from_names(&["ann", "bob"]).unwrap();
    /// let game = QuinnsGame::new(circle, QuinnsOptions::default(), 3).unwrap();
    /// assert_eq!(game.phase(), Phase::ChoosingTopCards);
    /// assert_eq!(game.deck.count(), 52 - 2 * 6 - 2 * 3);
    /// ```
    pub fn new(
        circle: PlayerCircle,
        options: QuinnsOptions,
        seed: u64,
    ) -> Result<Self, SetupError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Cards::new();
        let mut deck = regular_deck(&mut cards);
        deck.shuffle(&mut rng);

        let players = circle.len();
        let needed = options
            .initial_hand
            .checked_add(FRONT_PILES)
            .and_then(|per_player| per_player.checked_mul(players));
        if needed.is_none_or(|needed| deck.count() < needed) {
            return Err(DealError::Exhausted.into());
        }

        let mut hands: Vec<Hand> = circle.ids().map(Hand::new).collect();
        {
            let mut piles: Vec<&mut Pile> = hands.iter_mut().map(Hand::pile_mut).collect();
            deal(options.initial_hand, &mut deck, &mut piles, Facing::Owner)?;
        }

        let mut fronts: Vec<Grid> = circle.ids().map(|_| Grid::new(FRONT_PILES, 1)).collect();
        {
            let mut piles: Vec<&mut Pile> =
                fronts.iter_mut().flat_map(|grid| grid.slots_mut()).collect();
            deal(1, &mut deck, &mut piles, Facing::Down)?;
        }

        debug!(players, hand = options.initial_hand, "Dealt quinn's game");

        Ok(Self {
            cards,
            deck,
            discard: Pile::new(),
            trash: Pile::new(),
            hands,
            fronts,
            circle,
            options,
            phase: Phase::ChoosingTopCards,
        })
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the winner once the game is over.
    #[must_use]
    pub const fn winner(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Returns a player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.circle.seat_of(player).map(|seat| &self.hands[seat])
    }

    /// Returns a player's front piles.
    #[must_use]
    pub fn front(&self, player: PlayerId) -> Option<&Grid> {
        self.circle.seat_of(player).map(|seat| &self.fronts[seat])
    }

    /// Returns the rank the next play has to match or beat, ignoring threes
    /// on top of the discard pile.
    #[must_use]
    pub fn active_rank(&self) -> Option<Value> {
        self.discard
            .iter()
            .rev()
            .map(|id| self.cards[id].value)
            .find(|value| *value != Value::Three)
    }

    /// Returns whether a card of this rank may be played now.
    #[must_use]
    pub fn can_play_value(&self, value: Value) -> bool {
        if matches!(value, Value::Two | Value::Three | Value::Ten) {
            return true;
        }
        match self.active_rank() {
            None | Some(Value::Two) => true,
            Some(active) => rank_order(active) <= rank_order(value),
        }
    }

    /// Returns whether the card may be played now.
    #[must_use]
    pub fn can_play(&self, card: CardId) -> bool {
        self.cards
            .get(card)
            .is_some_and(|face| self.can_play_value(face.value))
    }

    fn seat(&self, player: PlayerId) -> Result<usize, ActionError> {
        self.circle.seat_of(player).ok_or(ActionError::NotFound)
    }

    /// Returns where the player at `seat` has to play from.
    fn source(&self, seat: usize) -> Source {
        if !self.hands[seat].is_empty() {
            return Source::Hand;
        }
        let face_up = self.fronts[seat]
            .slots()
            .any(|pile| pile.entries().any(|(_, facing)| facing == Facing::Up));
        if face_up {
            Source::FaceUp
        } else {
            Source::FaceDown
        }
    }

    /// Returns whether the player at `seat` has anything playable. A blind
    /// flip always counts as a play.
    fn has_legal_play(&self, seat: usize) -> bool {
        match self.source(seat) {
            Source::Hand => self.hands[seat].iter().any(|card| self.can_play(card)),
            Source::FaceUp => self.fronts[seat].slots().any(|pile| {
                pile.entries()
                    .any(|(card, facing)| facing == Facing::Up && self.can_play(card))
            }),
            Source::FaceDown => true,
        }
    }
}

/// Returns the position of a rank in the ascending play order.
fn rank_order(value: Value) -> Option<usize> {
    RANK_ORDER.iter().position(|rank| *rank == value)
}
