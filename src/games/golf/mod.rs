//! Golf.
//!
//! Every player keeps a 4x2 grid of face-down cards and improves it one swap
//! at a time. The game ends when the next player's grid is fully face-up;
//! the lowest score wins.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Cards, Facing};
use crate::collections::HashMap;
use crate::deck::{deal, regular_deck};
use crate::error::{ActionError, DealError, SetupError};
use crate::grid::Grid;
use crate::options::GolfOptions;
use crate::pile::Pile;
use crate::player::{PlayerCircle, PlayerId};

mod actions;
pub mod scoring;
pub mod state;

pub use state::{Action, Phase};

/// Grid width of every player.
pub const GRID_WIDTH: usize = 4;
/// Grid height of every player.
pub const GRID_HEIGHT: usize = 2;

/// A Golf engine.
#[derive(Debug, Clone)]
pub struct Golf {
    /// Every card in the game.
    pub cards: Cards,
    /// Face-down draw pile.
    pub deck: Pile,
    /// Face-up discard pile.
    pub discard: Pile,
    /// The card drawn this turn, while it is being held.
    pub drawn: Pile,
    /// One grid per seat, in seat order.
    pub grids: Vec<Grid>,
    /// Seating order.
    pub circle: PlayerCircle,
    /// Game options.
    pub options: GolfOptions,
    phase: Phase,
    scores: Option<HashMap<PlayerId, i32>>,
    rng: ChaCha8Rng,
}

impl Golf {
    /// Creates a game with the given seed, deals one face-down card into
    /// every grid slot and flips the first discard.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Deal`] if there are too many players for one
    /// deck.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::{Golf, GolfOptions, PlayerCircle};
    ///
    /// let circle = PlayerCircle::from_names(&["ann", "bob", "cat"]).unwrap();
    /// let golf = Golf::new(circle, GolfOptions::default(), 7).unwrap();
    /// assert_eq!(golf.deck.count(), 52 - 3 * 8 - 1);
    /// ```
    pub fn new(circle: PlayerCircle, options: GolfOptions, seed: u64) -> Result<Self, SetupError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Cards::new();
        let mut deck = regular_deck(&mut cards);
        deck.shuffle(&mut rng);

        let slots = GRID_WIDTH * GRID_HEIGHT * circle.len();
        if deck.count() <= slots {
            return Err(DealError::Exhausted.into());
        }

        let mut grids: Vec<Grid> = circle
            .ids()
            .map(|_| Grid::new(GRID_WIDTH, GRID_HEIGHT))
            .collect();
        {
            let mut piles: Vec<&mut Pile> =
                grids.iter_mut().flat_map(|grid| grid.slots_mut()).collect();
            deal(1, &mut deck, &mut piles, Facing::Down)?;
        }

        let mut discard = Pile::new();
        let flipped = deck.take_top().ok_or(DealError::Exhausted)?;
        discard.add(flipped, Facing::Up);

        let first = circle.left_of(circle.dealer())?;
        debug!(players = circle.len(), first = %first, "Dealt golf");

        Ok(Self {
            cards,
            deck,
            discard,
            drawn: Pile::new(),
            grids,
            circle,
            options,
            phase: Phase::Turn { player: first },
            scores: None,
            rng,
        })
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns a player's grid.
    #[must_use]
    pub fn grid(&self, player: PlayerId) -> Option<&Grid> {
        self.circle.seat_of(player).map(|seat| &self.grids[seat])
    }

    /// Returns the final scores once the game is over.
    #[must_use]
    pub const fn scores(&self) -> Option<&HashMap<PlayerId, i32>> {
        self.scores.as_ref()
    }

    fn seat(&self, player: PlayerId) -> Result<usize, ActionError> {
        self.circle.seat_of(player).ok_or(ActionError::NotFound)
    }
}
