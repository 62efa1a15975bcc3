//! Ordered card containers.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{CardId, Facing};
use crate::error::PileError;

/// An ordered stack of cards. The top is the most recently added end.
///
/// A pile stores each card's [`Facing`] next to its handle, so the facing
/// travels with the card and is rewritten whenever the card lands somewhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pile {
    /// `(card, facing)` pairs, bottom first.
    cards: Vec<(CardId, Facing)>,
    /// Number of `add`/`add_all` calls so far.
    additions: u64,
}

impl Pile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            additions: 0,
        }
    }

    /// Places a card on top with the given facing.
    pub fn add(&mut self, card: CardId, facing: Facing) {
        self.cards.push((card, facing));
        self.additions += 1;
    }

    /// Places several cards on top, in order, all with the same facing.
    ///
    /// Counts as a single addition.
    pub fn add_all<I>(&mut self, cards: I, facing: Facing)
    where
        I: IntoIterator<Item = CardId>,
    {
        self.cards
            .extend(cards.into_iter().map(|card| (card, facing)));
        self.additions += 1;
    }

    /// Returns how many times cards have been added to this pile.
    ///
    /// Rule state that must expire "when the pile next receives a card"
    /// stores this value and compares it later.
    #[must_use]
    pub const fn additions(&self) -> u64 {
        self.additions
    }

    /// Shuffles the pile in place with the given random source.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes a specific card.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotFound`] if the card is not in the pile; the
    /// pile is left unchanged.
    pub fn take(&mut self, card: CardId) -> Result<CardId, PileError> {
        let idx = self.position(card).ok_or(PileError::NotFound)?;
        Ok(self.cards.remove(idx).0)
    }

    /// Removes every named card, or none of them.
    ///
    /// The removed cards are returned in the order they were named.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotFound`] if any card is missing, or
    /// [`PileError::DuplicateCard`] if a card is named twice. The pile is
    /// left unchanged in both cases.
    pub fn take_all_of(&mut self, cards: &[CardId]) -> Result<Vec<CardId>, PileError> {
        self.check_all_of(cards)?;
        self.cards.retain(|(id, _)| !cards.contains(id));
        Ok(cards.to_vec())
    }

    /// Checks that every named card is present exactly once in the request.
    ///
    /// # Errors
    ///
    /// Same as [`Pile::take_all_of`].
    pub fn check_all_of(&self, cards: &[CardId]) -> Result<(), PileError> {
        for (i, card) in cards.iter().enumerate() {
            if cards[..i].contains(card) {
                return Err(PileError::DuplicateCard);
            }
            if !self.includes(*card) {
                return Err(PileError::NotFound);
            }
        }
        Ok(())
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<CardId> {
        self.cards.last().map(|(id, _)| *id)
    }

    /// Returns up to `n` cards from the top, bottom-most first.
    #[must_use]
    pub fn peek_top_n(&self, n: usize) -> Vec<CardId> {
        let start = self.cards.len().saturating_sub(n);
        self.cards[start..].iter().map(|(id, _)| *id).collect()
    }

    /// Removes and returns the top card.
    pub fn take_top(&mut self) -> Option<CardId> {
        self.cards.pop().map(|(id, _)| id)
    }

    /// Removes and returns the `n` bottom-most cards, bottom first.
    pub fn take_bottom(&mut self, n: usize) -> Vec<CardId> {
        let n = n.min(self.cards.len());
        self.cards.drain(..n).map(|(id, _)| id).collect()
    }

    /// Removes and returns every card, bottom first.
    pub fn take_all(&mut self) -> Vec<CardId> {
        core::mem::take(&mut self.cards)
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }

    /// Returns whether the card is in this pile.
    #[must_use]
    pub fn includes(&self, card: CardId) -> bool {
        self.position(card).is_some()
    }

    /// Returns the facing of a card in this pile.
    #[must_use]
    pub fn facing_of(&self, card: CardId) -> Option<Facing> {
        self.position(card).map(|idx| self.cards[idx].1)
    }

    /// Changes the facing of a card without moving it.
    ///
    /// # Errors
    ///
    /// Returns [`PileError::NotFound`] if the card is not in the pile.
    pub fn set_facing(&mut self, card: CardId, facing: Facing) -> Result<(), PileError> {
        let idx = self.position(card).ok_or(PileError::NotFound)?;
        self.cards[idx].1 = facing;
        Ok(())
    }

    /// Sets the facing of every card in the pile.
    pub fn set_all_facing(&mut self, facing: Facing) {
        for entry in &mut self.cards {
            entry.1 = facing;
        }
    }

    /// Iterates over the cards, bottom first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = CardId> + ExactSizeIterator + '_ {
        self.cards.iter().map(|(id, _)| *id)
    }

    /// Iterates over `(card, facing)` pairs, bottom first.
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = (CardId, Facing)> + '_ {
        self.cards.iter().copied()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn position(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|(id, _)| *id == card)
    }
}
