//! Trick comparison and the follow/trump/beat rules.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::{Card, CardId, Cards, Facing, Suit, Value};
use crate::error::ActionError;
use crate::outcome::Outcome;
use crate::pile::Pile;
use crate::player::PlayerId;

use super::{HAND_SIZE, PLAYERS, Phase, Pinochle};

/// Returns the trick-taking strength of a rank: nine, jack, queen, king,
/// ten, ace.
#[must_use]
pub const fn rank(value: Value) -> u8 {
    match value {
        Value::Ace => 5,
        Value::Ten => 4,
        Value::King => 3,
        Value::Queen => 2,
        Value::Jack => 1,
        _ => 0,
    }
}

/// Returns whether `challenger` takes the trick from `winning`.
///
/// A higher card of the same suit wins, and trump wins over any other suit.
/// An off-suit card never wins, and of two identical cards the first played
/// keeps the trick.
#[must_use]
pub fn beats(challenger: Card, winning: Card, trump: Suit) -> bool {
    if challenger.suit == winning.suit {
        rank(challenger.value) > rank(winning.value)
    } else {
        challenger.suit == trump
    }
}

/// Returns the index, in play order, of the card currently winning `trick`.
#[must_use]
pub fn winning_index(cards: &Cards, trick: &[CardId], trump: Suit) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &id) in trick.iter().enumerate() {
        match best {
            Some(b) if !beats(cards[id], cards[trick[b]], trump) => {}
            _ => best = Some(i),
        }
    }
    best
}

/// Returns the cards of `hand` that may legally be played to `trick`.
///
/// The player must follow the led suit, else play trump, else may play
/// anything. Among those, a card that would take the trick must be played
/// if there is one.
#[must_use]
pub fn legal_plays(cards: &Cards, hand: &Pile, trick: &[CardId], trump: Suit) -> Vec<CardId> {
    let all: Vec<CardId> = hand.iter().collect();
    let (Some(&led), Some(best)) = (trick.first(), winning_index(cards, trick, trump)) else {
        return all;
    };
    let led = cards[led].suit;
    let winning = cards[trick[best]];

    let of_suit = |suit: Suit| -> Vec<CardId> {
        all.iter()
            .copied()
            .filter(|&id| cards[id].suit == suit)
            .collect()
    };
    let mut pool = of_suit(led);
    if pool.is_empty() {
        pool = of_suit(trump);
    }
    if pool.is_empty() {
        pool = all.clone();
    }

    let beaters: Vec<CardId> = pool
        .iter()
        .copied()
        .filter(|&id| beats(cards[id], winning, trump))
        .collect();
    if beaters.is_empty() { pool } else { beaters }
}

impl Pinochle {
    pub(super) fn play_card(
        &mut self,
        player: PlayerId,
        card: CardId,
    ) -> Result<Outcome<[i32; 2]>, ActionError> {
        let seat = self.seat(player)?;
        let trump = self.trump().ok_or(ActionError::IllegalAction)?;
        if !self.hands[seat].includes(card) {
            return Err(ActionError::NotFound);
        }
        let played: Vec<CardId> = self.trick.iter().collect();
        if !legal_plays(&self.cards, &self.hands[seat], &played, trump).contains(&card) {
            return Err(ActionError::IllegalAction);
        }

        self.hands[seat].take(card)?;
        self.trick.add(card, Facing::Up);
        trace!(player = %player, card = ?self.cards[card], "Played to trick");

        if self.trick.count() < PLAYERS {
            let next = self.circle.left_of(player)?;
            self.phase = Phase::Trick { player: next };
            return Ok(Outcome::InProgress);
        }
        self.finish_trick(trump)
    }

    /// Gives the full trick to the winner's partnership; the winner leads
    /// next.
    fn finish_trick(&mut self, trump: Suit) -> Result<Outcome<[i32; 2]>, ActionError> {
        let played: Vec<CardId> = self.trick.iter().collect();
        let best = winning_index(&self.cards, &played, trump).ok_or(ActionError::IllegalAction)?;
        let leader_seat = self.seat(self.leader)?;
        let winner = self.circle.at(leader_seat + best);
        let team = self.team(winner)?;

        self.won[team].add_all(self.trick.take_all(), Facing::Down);
        self.tricks_played += 1;
        debug!(winner = %winner, trick = self.tricks_played, "Trick won");

        if self.tricks_played == HAND_SIZE {
            return self.score_deal(team);
        }
        self.leader = winner;
        self.phase = Phase::Trick { player: winner };
        Ok(Outcome::InProgress)
    }
}
