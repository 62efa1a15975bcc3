//! Crazy Eights.
//!
//! Players match the top discard by suit or rank. Eights are wild: whoever
//! plays one names the suit the next card must follow. The first player to
//! empty their hand at the end of a turn wins.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{CardId, Cards, Facing, Suit, Value};
use crate::deck::{deal, regular_deck};
use crate::error::{ActionError, DealError, SetupError};
use crate::hand::Hand;
use crate::options::CrazyEightsOptions;
use crate::pile::Pile;
use crate::player::{PlayerCircle, PlayerId};

mod actions;
pub mod state;

pub use state::{Action, Phase};

use state::DeclaredSuit;

/// A Crazy Eights engine.
///
/// Piles are public for inspection; [`RulesEngine::submit`] is the only
/// way the rules move cards.
///
/// [`RulesEngine::submit`]: crate::games::RulesEngine::submit
#[derive(Debug, Clone)]
pub struct CrazyEights {
    /// Every card in the game.
    pub cards: Cards,
    /// Face-down draw pile.
    pub deck: Pile,
    /// Face-up discard pile.
    pub discard: Pile,
    /// One hand per seat, in seat order.
    pub hands: Vec<Hand>,
    /// Seating order.
    pub circle: PlayerCircle,
    /// Game options.
    pub options: CrazyEightsOptions,
    /// Current phase.
    phase: Phase,
    /// Suit named after the last eight, if still in force.
    declared: Option<DeclaredSuit>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl CrazyEights {
    /// Creates a game with the given seed, shuffles, deals, and flips the
    /// first discard. Play starts left of the dealer (the first seat).
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::PlayerCount`] for fewer than two players or a
    /// player count with no default hand size, and [`SetupError::Deal`] if
    /// the deck cannot cover the deal.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::{CrazyEights, CrazyEightsOptions, PlayerCircle};
    ///
    /// let circle = PlayerCircle::from_names(&["ann", "bob"]).unwrap();
    /// let game = CrazyEights::new(circle, CrazyEightsOptions::default(), 42).unwrap();
    /// assert_eq!(game.deck.count(), 37);
    /// ```
    pub fn new(
        circle: PlayerCircle,
        options: CrazyEightsOptions,
        seed: u64,
    ) -> Result<Self, SetupError> {
        let players = circle.len();
        if players < 2 {
            return Err(SetupError::PlayerCount(players));
        }
        let hand_size = options
            .hand_size_for(players)
            .ok_or(SetupError::PlayerCount(players))?;

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Cards::new();
        let mut deck = regular_deck(&mut cards);
        deck.shuffle(&mut rng);

        // The flipped discard needs one card beyond the deal.
        let dealt = hand_size.checked_mul(players);
        if dealt.is_none_or(|dealt| deck.count() <= dealt) {
            return Err(DealError::Exhausted.into());
        }

        let mut hands: Vec<Hand> = circle.ids().map(Hand::new).collect();
        {
            let mut piles: Vec<&mut Pile> = hands.iter_mut().map(Hand::pile_mut).collect();
            deal(hand_size, &mut deck, &mut piles, Facing::Owner)?;
        }

        let mut discard = Pile::new();
        let flipped = deck.take_top().ok_or(DealError::Exhausted)?;
        discard.add(flipped, Facing::Up);

        let first = circle.left_of(circle.dealer())?;
        debug!(players, hand_size, first = %first, "Dealt crazy eights");

        Ok(Self {
            cards,
            deck,
            discard,
            hands,
            circle,
            options,
            phase: Phase::Turn { player: first },
            declared: None,
            rng,
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

    /// Returns the suit named after the last eight, while it still applies.
    #[must_use]
    pub fn declared_suit(&self) -> Option<Suit> {
        self.declared
            .filter(|declared| declared.stamp == self.discard.additions())
            .map(|declared| declared.suit)
    }

    /// Returns whether the card may be played on the current discard.
    #[must_use]
    pub fn can_play(&self, card: CardId) -> bool {
        let Some(face) = self.cards.get(card) else {
            return false;
        };
        if face.value == Value::Eight {
            return true;
        }
        if let Some(suit) = self.declared_suit() {
            return face.suit == suit;
        }
        self.discard
            .peek_top()
            .is_none_or(|top| {
                let top = self.cards[top];
                top.suit == face.suit || top.value == face.value
            })
    }

    fn seat(&self, player: PlayerId) -> Result<usize, ActionError> {
        self.circle.seat_of(player).ok_or(ActionError::NotFound)
    }
}
