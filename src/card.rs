//! Card faces, visibility tags, and the per-game card arena.

use alloc::vec::Vec;
use core::ops::Index;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Diamonds, Self::Clubs];
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Value {
    /// All thirteen ranks, ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the pip count (ace = 1, jack = 11, queen = 12, king = 13).
    #[must_use]
    pub const fn pips(self) -> u8 {
        self as u8 + 1
    }
}

/// Who can see the face of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Nobody sees the face.
    Down,
    /// Everyone sees the face.
    Up,
    /// Only the owner of the containing hand sees the face.
    Owner,
    /// Everyone except the owner sees the face.
    Others,
}

/// The face of a playing card.
///
/// Two cards of a multi-deck game may share a face; they are told apart by
/// their [`CardId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The rank of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Creates a new card face.
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Stable handle to one physical card in a [`Cards`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(u16);

impl CardId {
    /// Returns the arena slot of this card.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena holding every physical card of one game.
///
/// Cards are allocated once at setup and never freed; piles refer to them by
/// [`CardId`].
#[derive(Debug, Clone, Default)]
pub struct Cards {
    faces: Vec<Card>,
}

impl Cards {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Allocates a new physical card and returns its handle.
    pub fn alloc(&mut self, card: Card) -> CardId {
        let id = CardId(self.faces.len() as u16);
        self.faces.push(card);
        id
    }

    /// Returns the face of a card, or `None` for a handle from another arena.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<Card> {
        self.faces.get(id.index()).copied()
    }

    /// Returns the number of allocated cards.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns whether no cards have been allocated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Iterates over every handle in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        (0..self.faces.len()).map(|i| CardId(i as u16))
    }

    /// Iterates over the handles of every card with the given face.
    pub fn find(&self, card: Card) -> impl Iterator<Item = CardId> + '_ {
        self.faces
            .iter()
            .enumerate()
            .filter(move |(_, face)| **face == card)
            .map(|(i, _)| CardId(i as u16))
    }
}

impl Index<CardId> for Cards {
    type Output = Card;

    fn index(&self, id: CardId) -> &Self::Output {
        &self.faces[id.index()]
    }
}
