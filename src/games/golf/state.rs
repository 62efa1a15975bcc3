//! Golf phases and actions.

use crate::card::CardId;
use crate::player::PlayerId;

/// Where a game of Golf stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player must draw from the deck or take the discard top.
    Turn {
        /// The player to act.
        player: PlayerId,
    },
    /// The player holds a card drawn from the deck and must discard it or
    /// swap it into the grid.
    Holding {
        /// The player to act.
        player: PlayerId,
        /// The held card.
        card: CardId,
    },
    /// Every grid has been scored.
    Finished,
}

/// A move in Golf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Draw the top card of the deck and hold it.
    Draw {
        /// The acting player.
        player: PlayerId,
    },
    /// Discard the held card, ending the turn.
    DiscardDrawn {
        /// The acting player.
        player: PlayerId,
    },
    /// Put `take_card` into the grid in place of `replace_card`.
    ///
    /// `take_card` is the held card after a draw, otherwise the discard top.
    Play {
        /// The acting player.
        player: PlayerId,
        /// The card entering the grid.
        take_card: CardId,
        /// The grid card sent to the discard pile.
        replace_card: CardId,
    },
}

impl Action {
    /// Returns the acting player.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        match *self {
            Self::Draw { player } | Self::DiscardDrawn { player } | Self::Play { player, .. } => {
                player
            }
        }
    }
}
