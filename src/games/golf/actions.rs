use tracing::{debug, trace};

use crate::card::{CardId, Facing};
use crate::collections::HashMap;
use crate::deck::{can_draw, draw_or_recycle};
use crate::error::ActionError;
use crate::games::RulesEngine;
use crate::outcome::Outcome;
use crate::player::PlayerId;

use super::scoring::score_grid;
use super::{Action, Golf, Phase};

type Scores = HashMap<PlayerId, i32>;

impl Golf {
    fn apply(&mut self, action: Action) -> Result<Outcome<Scores>, ActionError> {
        match self.phase {
            Phase::Finished => Err(ActionError::IllegalAction),
            Phase::Turn { player } => {
                ensure_actor(player, &action)?;
                match action {
                    Action::Draw { .. } => self.draw(player),
                    Action::Play {
                        take_card,
                        replace_card,
                        ..
                    } => self.take_discard(player, take_card, replace_card),
                    Action::DiscardDrawn { .. } => Err(ActionError::IllegalAction),
                }
            }
            Phase::Holding { player, card } => {
                ensure_actor(player, &action)?;
                match action {
                    Action::DiscardDrawn { .. } => {
                        self.drawn.take(card)?;
                        self.discard.add(card, Facing::Up);
                        trace!(player = %player, "Discarded drawn card");
                        self.end_turn(player)
                    }
                    Action::Play {
                        take_card,
                        replace_card,
                        ..
                    } => {
                        if take_card != card {
                            return Err(ActionError::IllegalAction);
                        }
                        let slot = self.find_slot(player, replace_card)?;
                        self.drawn.take(card)?;
                        self.swap_into(player, slot, card, replace_card)?;
                        self.end_turn(player)
                    }
                    Action::Draw { .. } => Err(ActionError::IllegalAction),
                }
            }
        }
    }

    fn draw(&mut self, player: PlayerId) -> Result<Outcome<Scores>, ActionError> {
        if !can_draw(&self.deck, &self.discard) {
            return Err(ActionError::Exhausted);
        }
        let card = draw_or_recycle(&mut self.deck, &mut self.discard, &mut self.rng)
            .ok_or(ActionError::Exhausted)?;
        self.drawn.add(card, Facing::Owner);
        trace!(player = %player, "Drew card");

        self.phase = Phase::Holding { player, card };
        Ok(Outcome::InProgress)
    }

    /// Takes the discard top straight into the grid.
    fn take_discard(
        &mut self,
        player: PlayerId,
        take_card: CardId,
        replace_card: CardId,
    ) -> Result<Outcome<Scores>, ActionError> {
        if !self.discard.includes(take_card) {
            return Err(ActionError::NotFound);
        }
        if self.discard.peek_top() != Some(take_card) {
            return Err(ActionError::IllegalAction);
        }
        let slot = self.find_slot(player, replace_card)?;

        self.discard.take(take_card)?;
        self.swap_into(player, slot, take_card, replace_card)?;
        self.end_turn(player)
    }

    /// Returns the index of the grid slot holding `card`.
    fn find_slot(&self, player: PlayerId, card: CardId) -> Result<usize, ActionError> {
        let grid = &self.grids[self.seat(player)?];
        let pos = grid
            .find_xy(|pile, _| pile.includes(card))
            .ok_or(ActionError::NotFound)?;
        grid.xy_to_index(pos).ok_or(ActionError::NotFound)
    }

    fn swap_into(
        &mut self,
        player: PlayerId,
        slot: usize,
        incoming: CardId,
        outgoing: CardId,
    ) -> Result<(), ActionError> {
        let seat = self.seat(player)?;
        let grid = &mut self.grids[seat];
        let pos = grid.index_to_xy(slot);
        let pile = grid.get_mut(pos).ok_or(ActionError::NotFound)?;

        pile.take(outgoing)?;
        pile.add(incoming, Facing::Up);
        self.discard.add(outgoing, Facing::Up);
        trace!(player = %player, x = pos.0, y = pos.1, "Swapped grid card");
        Ok(())
    }

    /// Passes the turn, or ends the game if the next player's grid is
    /// already face-up.
    fn end_turn(&mut self, player: PlayerId) -> Result<Outcome<Scores>, ActionError> {
        let next = self.circle.left_of(player)?;
        let grid = &self.grids[self.seat(next)?];
        let done = grid
            .slots()
            .all(|pile| pile.entries().all(|(_, facing)| facing == Facing::Up));

        if !done {
            self.phase = Phase::Turn { player: next };
            return Ok(Outcome::InProgress);
        }

        for grid in &mut self.grids {
            for pile in grid.slots_mut() {
                pile.set_all_facing(Facing::Up);
            }
        }

        let bonus = self.options.dream_bonus;
        let scores: Scores = self
            .circle
            .ids()
            .zip(&self.grids)
            .map(|(id, grid)| (id, score_grid(&self.cards, grid, bonus)))
            .collect();

        debug!(?scores, "Golf finished");
        self.phase = Phase::Finished;
        self.scores = Some(scores.clone());
        Ok(Outcome::Finished(scores))
    }
}

fn ensure_actor(expected: PlayerId, action: &Action) -> Result<(), ActionError> {
    if action.player() == expected {
        Ok(())
    } else {
        Err(ActionError::OutOfTurn)
    }
}

impl RulesEngine for Golf {
    type Action = Action;
    type Output = Scores;

    fn submit(&mut self, action: Action) -> Result<Outcome<Scores>, ActionError> {
        let result = self.apply(action);
        if let Err(err) = &result {
            debug!(?action, %err, "Rejected golf action");
        }
        result
    }

    fn awaiting(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Turn { player } | Phase::Holding { player, .. } => Some(player),
            Phase::Finished => None,
        }
    }

    fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}
