use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::{CardId, Facing, Value};
use crate::collections::HashSet;
use crate::error::ActionError;
use crate::games::RulesEngine;
use crate::outcome::Outcome;
use crate::pile::Pile;
use crate::player::PlayerId;

use super::{Action, FRONT_PILES, Phase, QuinnsGame, Source, TopCardChoice};

/// Number of equal ranks on top of the discard pile that clear it.
const CLEAR_RUN: usize = 4;

impl QuinnsGame {
    fn apply(&mut self, action: Action) -> Result<Outcome<PlayerId>, ActionError> {
        match (self.phase, action) {
            (Phase::Finished { .. }, _) => Err(ActionError::IllegalAction),
            (Phase::ChoosingTopCards, Action::ChooseTopCards { choices }) => {
                self.choose_top_cards(&choices)
            }
            (Phase::ChoosingTopCards, _) | (Phase::Turn { .. }, Action::ChooseTopCards { .. }) => {
                Err(ActionError::IllegalAction)
            }
            (Phase::Turn { player }, Action::PlayCards { player: actor, cards }) => {
                if actor != player {
                    return Err(ActionError::OutOfTurn);
                }
                self.play_cards(player, &cards)
            }
            (Phase::Turn { player }, Action::PickUpDiscard { player: actor }) => {
                if actor != player {
                    return Err(ActionError::OutOfTurn);
                }
                self.pick_up(player)
            }
        }
    }

    fn choose_top_cards(
        &mut self,
        choices: &[TopCardChoice],
    ) -> Result<Outcome<PlayerId>, ActionError> {
        let mut seen = HashSet::new();
        for choice in choices {
            let seat = self.seat(choice.player)?;
            if !seen.insert(choice.player) {
                return Err(ActionError::StructuralViolation);
            }
            if choice.piles.len() != FRONT_PILES || choice.piles.iter().any(Vec::is_empty) {
                return Err(ActionError::StructuralViolation);
            }
            let placed: Vec<CardId> = choice.piles.iter().flatten().copied().collect();
            self.hands[seat].check_all_of(&placed)?;
            if choice.piles.iter().any(|pile| !self.same_rank(pile)) {
                return Err(ActionError::IllegalAction);
            }
        }
        if seen.len() != self.circle.len() {
            return Err(ActionError::StructuralViolation);
        }

        for choice in choices {
            let seat = self.seat(choice.player)?;
            for (x, cards) in choice.piles.iter().enumerate() {
                let taken = self.hands[seat].take_all_of(cards)?;
                let pile = self.fronts[seat]
                    .get_mut((x, 0))
                    .ok_or(ActionError::NotFound)?;
                pile.add_all(taken, Facing::Up);
            }
        }

        let first = self.circle.left_of(self.circle.dealer())?;
        debug!(first = %first, "Top cards chosen");
        self.phase = Phase::Turn { player: first };
        Ok(Outcome::InProgress)
    }

    fn play_cards(
        &mut self,
        player: PlayerId,
        cards: &[CardId],
    ) -> Result<Outcome<PlayerId>, ActionError> {
        let seat = self.seat(player)?;
        let Some(&first) = cards.first() else {
            return Err(ActionError::StructuralViolation);
        };

        match self.source(seat) {
            Source::Hand => {
                self.hands[seat].check_all_of(cards)?;
                self.check_playable(cards)?;
                let taken = self.hands[seat].take_all_of(cards)?;
                self.discard.add_all(taken, Facing::Up);
            }
            Source::FaceUp => {
                let x = self.fronts[seat]
                    .find_xy(|pile, _| pile.includes(first))
                    .map(|(x, _)| x)
                    .ok_or(ActionError::NotFound)?;
                let pile = self.fronts[seat]
                    .get((x, 0))
                    .ok_or(ActionError::NotFound)?;
                pile.check_all_of(cards)?;
                if cards
                    .iter()
                    .any(|card| pile.facing_of(*card) != Some(Facing::Up))
                {
                    return Err(ActionError::IllegalAction);
                }
                let face_up = pile
                    .entries()
                    .filter(|(_, facing)| *facing == Facing::Up)
                    .count();
                if cards.len() != face_up {
                    return Err(ActionError::IllegalAction);
                }
                self.check_playable(cards)?;

                let taken = self.fronts[seat]
                    .get_mut((x, 0))
                    .ok_or(ActionError::NotFound)?
                    .take_all_of(cards)?;
                self.discard.add_all(taken, Facing::Up);
            }
            Source::FaceDown => {
                if cards.len() != 1 {
                    return Err(ActionError::StructuralViolation);
                }
                let x = self.fronts[seat]
                    .find_xy(|pile, _| pile.facing_of(first) == Some(Facing::Down))
                    .map(|(x, _)| x)
                    .ok_or(ActionError::NotFound)?;
                self.fronts[seat]
                    .get_mut((x, 0))
                    .ok_or(ActionError::NotFound)?
                    .take(first)?;

                if !self.can_play(first) {
                    debug!(player = %player, card = ?self.cards[first], "Blind flip failed");
                    let hand = &mut self.hands[seat];
                    hand.add(first, Facing::Owner);
                    hand.add_all(self.discard.take_all(), Facing::Owner);
                    return Ok(Outcome::InProgress);
                }
                self.discard.add(first, Facing::Up);
            }
        }

        trace!(player = %player, played = cards.len(), "Played cards");
        self.after_play(player, seat)
    }

    fn pick_up(&mut self, player: PlayerId) -> Result<Outcome<PlayerId>, ActionError> {
        let seat = self.seat(player)?;
        if self.has_legal_play(seat) {
            return Err(ActionError::IllegalAction);
        }
        let picked = self.discard.take_all();
        debug!(player = %player, cards = picked.len(), "Picked up discard");
        self.hands[seat].add_all(picked, Facing::Owner);
        Ok(Outcome::InProgress)
    }

    /// Clears the discard pile, checks for a winner and hands the turn on.
    fn after_play(
        &mut self,
        player: PlayerId,
        seat: usize,
    ) -> Result<Outcome<PlayerId>, ActionError> {
        let cleared = self.clears_discard();
        if cleared {
            let burned = self.discard.take_all();
            debug!(player = %player, cards = burned.len(), "Discard cleared");
            self.trash.add_all(burned, Facing::Down);
        }

        let out =
            self.hands[seat].is_empty() && self.fronts[seat].slots().all(Pile::is_empty);
        if out {
            debug!(winner = %player, "Quinn's game finished");
            self.phase = Phase::Finished { winner: player };
            return Ok(Outcome::Finished(player));
        }
        if cleared {
            return Ok(Outcome::InProgress);
        }

        let refill = self.options.refill_to;
        let hand = &mut self.hands[seat];
        while hand.count() < refill {
            let Some(card) = self.deck.take_top() else {
                break;
            };
            hand.add(card, Facing::Owner);
        }

        let next = self.circle.left_of(player)?;
        self.phase = Phase::Turn { player: next };
        Ok(Outcome::InProgress)
    }

    /// Returns whether the top of the discard pile burns it: a ten, or
    /// four equal ranks.
    fn clears_discard(&self) -> bool {
        let Some(top) = self.discard.peek_top() else {
            return false;
        };
        if self.cards[top].value == Value::Ten {
            return true;
        }
        let run = self.discard.peek_top_n(CLEAR_RUN);
        run.len() == CLEAR_RUN && self.same_rank(&run)
    }

    fn check_playable(&self, cards: &[CardId]) -> Result<(), ActionError> {
        if !self.same_rank(cards) {
            return Err(ActionError::IllegalAction);
        }
        match cards.first() {
            Some(&card) if self.can_play(card) => Ok(()),
            _ => Err(ActionError::IllegalAction),
        }
    }

    fn same_rank(&self, cards: &[CardId]) -> bool {
        let mut values = cards.iter().map(|&card| self.cards.get(card).map(|c| c.value));
        values
            .next()
            .is_none_or(|first| values.all(|value| value == first))
    }
}

impl RulesEngine for QuinnsGame {
    type Action = Action;
    type Output = PlayerId;

    fn submit(&mut self, action: Action) -> Result<Outcome<PlayerId>, ActionError> {
        let actor = action.player();
        let result = self.apply(action);
        if let Err(err) = &result {
            debug!(?actor, %err, "Rejected quinn's game action");
        }
        result
    }

    fn awaiting(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Turn { player } => Some(player),
            Phase::ChoosingTopCards | Phase::Finished { .. } => None,
        }
    }

    fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }
}
