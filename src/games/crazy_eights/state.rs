//! Crazy Eights phases and actions.

use crate::card::{CardId, Suit};
use crate::player::PlayerId;

/// Where a game of Crazy Eights stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player must play a card or draw.
    Turn {
        /// The player to act.
        player: PlayerId,
    },
    /// The player drew `card` and must either play it or declare done.
    Drawn {
        /// The player to act.
        player: PlayerId,
        /// The card just drawn (already in the player's hand).
        card: CardId,
    },
    /// The player just played an eight and must name a suit.
    AnnounceSuit {
        /// The player to act.
        player: PlayerId,
    },
    /// The game is over.
    Finished {
        /// The player who emptied their hand.
        winner: PlayerId,
    },
}

/// A move in Crazy Eights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play a card from hand onto the discard pile.
    PlayCard {
        /// The acting player.
        player: PlayerId,
        /// The card to play.
        card: CardId,
    },
    /// Name the suit that must be followed after an eight.
    AnnounceSuit {
        /// The acting player.
        player: PlayerId,
        /// The suit to follow.
        suit: Suit,
    },
    /// Draw a card from the deck.
    DrawCard {
        /// The acting player.
        player: PlayerId,
    },
    /// Keep the drawn card and end the turn.
    AnnounceDone {
        /// The acting player.
        player: PlayerId,
    },
}

impl Action {
    /// Returns the acting player.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        match *self {
            Self::PlayCard { player, .. }
            | Self::AnnounceSuit { player, .. }
            | Self::DrawCard { player }
            | Self::AnnounceDone { player } => player,
        }
    }
}

/// A suit named after an eight, valid until the discard pile next receives
/// a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct DeclaredSuit {
    pub(super) suit: Suit,
    /// Discard pile addition count when the suit was named.
    pub(super) stamp: u64,
}
