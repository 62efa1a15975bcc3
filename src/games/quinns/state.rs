//! Quinn's Game phases and actions.

use alloc::vec::Vec;

use crate::card::CardId;
use crate::player::PlayerId;

/// Where a game of Quinn's Game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Every player must place face-up cards on their front piles.
    ChoosingTopCards,
    /// The player must play or pick up the discard pile.
    Turn {
        /// The player to act.
        player: PlayerId,
    },
    /// The game is over.
    Finished {
        /// The first player to run out of cards.
        winner: PlayerId,
    },
}

/// One player's top-card placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopCardChoice {
    /// The placing player.
    pub player: PlayerId,
    /// Cards for each front pile, left to right. Cards in one pile must
    /// share a rank.
    pub piles: Vec<Vec<CardId>>,
}

/// A move in Quinn's Game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Joint placement of every player's face-up front cards.
    ChooseTopCards {
        /// One entry per seated player.
        choices: Vec<TopCardChoice>,
    },
    /// Play cards of one rank.
    ///
    /// From the hand while it has cards, then a whole face-up front run,
    /// then one face-down front card.
    PlayCards {
        /// The acting player.
        player: PlayerId,
        /// The cards to play.
        cards: Vec<CardId>,
    },
    /// Take the whole discard pile into hand when nothing can be played.
    PickUpDiscard {
        /// The acting player.
        player: PlayerId,
    },
}

impl Action {
    /// Returns the acting player, or `None` for the joint placement.
    #[must_use]
    pub const fn player(&self) -> Option<PlayerId> {
        match *self {
            Self::ChooseTopCards { .. } => None,
            Self::PlayCards { player, .. } | Self::PickUpDiscard { player } => Some(player),
        }
    }
}
