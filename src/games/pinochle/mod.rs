//! Partnership Pinochle for four players.
//!
//! Each deal runs through an auction, trump declaration, a three-card pass
//! between the bid winner and partner, meld, and twelve tricks. Partners sit
//! opposite each other: seats 0 and 2 form partnership 0, seats 1 and 3
//! partnership 1. The dealer moves one seat left after every deal and the
//! game ends after the configured number of deals.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Cards, Facing, Suit};
use crate::deck::{deal, pinochle_deck};
use crate::error::{ActionError, DealError, SetupError};
use crate::hand::Hand;
use crate::options::PinochleOptions;
use crate::pile::Pile;
use crate::player::{PlayerCircle, PlayerId};

mod actions;
mod bidding;
pub mod meld;
mod scoring;
pub mod state;
pub mod tricks;

pub use meld::MeldScore;
pub use state::{Action, Contract, DealSummary, Phase};

use state::Auction;

/// Number of seats.
pub const PLAYERS: usize = 4;
/// Cards dealt to each player.
pub const HAND_SIZE: usize = 12;

/// A Pinochle engine.
#[derive(Debug, Clone)]
pub struct Pinochle {
    /// Every card in the game.
    pub cards: Cards,
    /// Undealt cards; empty while a deal is in play.
    pub deck: Pile,
    /// One hand per seat, in seat order.
    pub hands: Vec<Hand>,
    /// Cards played to the current trick, in play order.
    pub trick: Pile,
    /// Tricks won by each partnership this deal.
    pub won: [Pile; 2],
    /// Seating order.
    pub circle: PlayerCircle,
    /// Game options.
    pub options: PinochleOptions,
    phase: Phase,
    dealer: PlayerId,
    auction: Auction,
    contract: Option<Contract>,
    melds: Vec<(PlayerId, MeldScore)>,
    leader: PlayerId,
    tricks_played: usize,
    scores: [i32; 2],
    history: Vec<DealSummary>,
    rng: ChaCha8Rng,
}

impl Pinochle {
    /// Creates a game with the given seed and deals the first hand. The first
    /// seat deals; bidding starts to its left.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::PlayerCount`] unless exactly four players are
    /// seated.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::{Pinochle, PinochleOptions, PlayerCircle, PlayerId, RulesEngine};
    ///
    /// let circle = PlayerCircle::from_names(&["ann", "bob", "cat", "dan"]).unwrap();
    /// let game = Pinochle::new(circle, PinochleOptions::default(), 1).unwrap();
    /// assert_eq!(game.awaiting(), Some(PlayerId(1)));
    /// assert!(game.hands.iter().all(|hand| hand.count() == 12));
    /// ```
    pub fn new(
        circle: PlayerCircle,
        options: PinochleOptions,
        seed: u64,
    ) -> Result<Self, SetupError> {
        if circle.len() != PLAYERS {
            return Err(SetupError::PlayerCount(circle.len()));
        }

        let mut cards = Cards::new();
        let deck = pinochle_deck(&mut cards);
        let dealer = circle.dealer();
        let first = circle.left_of(dealer)?;

        let mut game = Self {
            cards,
            deck,
            hands: circle.ids().map(Hand::new).collect(),
            trick: Pile::new(),
            won: [Pile::new(), Pile::new()],
            circle,
            options,
            phase: Phase::Bidding { player: first },
            dealer,
            auction: Auction::default(),
            contract: None,
            melds: Vec::new(),
            leader: first,
            tricks_played: 0,
            scores: [0; 2],
            history: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        game.deal_hands()?;
        Ok(game)
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the dealer of the current deal.
    #[must_use]
    pub const fn dealer(&self) -> PlayerId {
        self.dealer
    }

    /// Returns the current high bid, if anyone has bid this deal.
    #[must_use]
    pub const fn high_bid(&self) -> Option<u32> {
        self.auction.bid
    }

    /// Returns the winning bid of the current deal once the auction is over.
    #[must_use]
    pub const fn contract(&self) -> Option<Contract> {
        self.contract
    }

    /// Returns the trump suit of the current deal once declared.
    #[must_use]
    pub fn trump(&self) -> Option<Suit> {
        self.contract.and_then(|contract| contract.trump)
    }

    /// Returns the meld revealed by each player this deal.
    #[must_use]
    pub fn melds(&self) -> &[(PlayerId, MeldScore)] {
        &self.melds
    }

    /// Returns the running score of each partnership.
    #[must_use]
    pub const fn scores(&self) -> [i32; 2] {
        self.scores
    }

    /// Returns a summary of every completed deal.
    #[must_use]
    pub fn history(&self) -> &[DealSummary] {
        &self.history
    }

    /// Returns a player's hand.
    #[must_use]
    pub fn hand(&self, player: PlayerId) -> Option<&Hand> {
        self.circle.seat_of(player).map(|seat| &self.hands[seat])
    }

    /// Returns the partnership (0 or 1) a player belongs to.
    #[must_use]
    pub fn team_of(&self, player: PlayerId) -> Option<usize> {
        self.circle.seat_of(player).map(|seat| seat % 2)
    }

    fn seat(&self, player: PlayerId) -> Result<usize, ActionError> {
        self.circle.seat_of(player).ok_or(ActionError::NotFound)
    }

    fn team(&self, player: PlayerId) -> Result<usize, ActionError> {
        self.team_of(player).ok_or(ActionError::NotFound)
    }

    /// Gathers every card into the deck, shuffles, deals twelve to each
    /// player and resets the per-deal state.
    fn deal_hands(&mut self) -> Result<(), DealError> {
        for hand in &mut self.hands {
            self.deck.add_all(hand.take_all(), Facing::Down);
        }
        for pile in &mut self.won {
            self.deck.add_all(pile.take_all(), Facing::Down);
        }
        self.deck.add_all(self.trick.take_all(), Facing::Down);
        self.deck.shuffle(&mut self.rng);

        {
            let mut piles: Vec<&mut Pile> = self.hands.iter_mut().map(Hand::pile_mut).collect();
            deal(HAND_SIZE, &mut self.deck, &mut piles, Facing::Owner)?;
        }

        self.auction = Auction::default();
        self.contract = None;
        self.melds.clear();
        self.tricks_played = 0;
        debug!(dealer = %self.dealer, deal = self.history.len() + 1, "Dealt pinochle");
        Ok(())
    }
}
