//! Player hands.

use core::ops::{Deref, DerefMut};

use crate::pile::Pile;
use crate::player::PlayerId;

/// A pile that belongs to one player.
///
/// Dereferences to [`Pile`], so every pile operation is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    /// The owning player.
    owner: PlayerId,
    /// Cards in the hand.
    cards: Pile,
}

impl Hand {
    /// Creates a new empty hand for the given player.
    #[must_use]
    pub const fn new(owner: PlayerId) -> Self {
        Self {
            owner,
            cards: Pile::new(),
        }
    }

    /// Returns the owning player.
    #[must_use]
    pub const fn owner(&self) -> PlayerId {
        self.owner
    }

    /// Returns the underlying pile.
    #[must_use]
    pub const fn pile(&self) -> &Pile {
        &self.cards
    }

    /// Returns the underlying pile mutably.
    pub const fn pile_mut(&mut self) -> &mut Pile {
        &mut self.cards
    }
}

impl Deref for Hand {
    type Target = Pile;

    fn deref(&self) -> &Self::Target {
        &self.cards
    }
}

impl DerefMut for Hand {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.cards
    }
}
