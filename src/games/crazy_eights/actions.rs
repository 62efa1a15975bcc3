use tracing::{debug, trace};

use crate::card::{CardId, Facing, Value};
use crate::deck::{can_draw, draw_or_recycle};
use crate::error::ActionError;
use crate::games::RulesEngine;
use crate::outcome::Outcome;
use crate::player::PlayerId;

use super::{Action, CrazyEights, DeclaredSuit, Phase};

impl CrazyEights {
    fn apply(&mut self, action: Action) -> Result<Outcome<PlayerId>, ActionError> {
        match self.phase {
            Phase::Finished { .. } => Err(ActionError::IllegalAction),
            Phase::Turn { player } => {
                ensure_actor(player, &action)?;
                match action {
                    Action::PlayCard { card, .. } => self.play(player, card),
                    Action::DrawCard { .. } => self.draw(player),
                    Action::AnnounceSuit { .. } | Action::AnnounceDone { .. } => {
                        Err(ActionError::IllegalAction)
                    }
                }
            }
            Phase::Drawn {
                player,
                card: drawn,
            } => {
                ensure_actor(player, &action)?;
                match action {
                    Action::PlayCard { card, .. } if card == drawn => self.play(player, card),
                    Action::AnnounceDone { .. } => self.end_turn(player),
                    Action::PlayCard { .. }
                    | Action::DrawCard { .. }
                    | Action::AnnounceSuit { .. } => Err(ActionError::IllegalAction),
                }
            }
            Phase::AnnounceSuit { player } => {
                ensure_actor(player, &action)?;
                match action {
                    Action::AnnounceSuit { suit, .. } => {
                        debug!(player = %player, ?suit, "Suit announced");
                        self.declared = Some(DeclaredSuit {
                            suit,
                            stamp: self.discard.additions(),
                        });
                        self.end_turn(player)
                    }
                    Action::PlayCard { .. }
                    | Action::DrawCard { .. }
                    | Action::AnnounceDone { .. } => Err(ActionError::IllegalAction),
                }
            }
        }
    }

    /// Moves a card from the player's hand onto the discard pile.
    fn play(&mut self, player: PlayerId, card: CardId) -> Result<Outcome<PlayerId>, ActionError> {
        let seat = self.seat(player)?;
        if !self.hands[seat].includes(card) {
            return Err(ActionError::NotFound);
        }
        if !self.can_play(card) {
            return Err(ActionError::IllegalAction);
        }

        self.hands[seat].take(card)?;
        self.discard.add(card, Facing::Up);
        trace!(player = %player, card = ?self.cards[card], "Played card");

        if self.cards[card].value == Value::Eight {
            self.phase = Phase::AnnounceSuit { player };
            return Ok(Outcome::InProgress);
        }
        self.end_turn(player)
    }

    /// Draws into the player's hand, recycling the discard pile if needed.
    fn draw(&mut self, player: PlayerId) -> Result<Outcome<PlayerId>, ActionError> {
        let seat = self.seat(player)?;
        if !can_draw(&self.deck, &self.discard) {
            return Err(ActionError::Exhausted);
        }

        let card = draw_or_recycle(&mut self.deck, &mut self.discard, &mut self.rng)
            .ok_or(ActionError::Exhausted)?;
        self.hands[seat].add(card, Facing::Owner);
        trace!(player = %player, "Drew card");

        self.phase = Phase::Drawn { player, card };
        Ok(Outcome::InProgress)
    }

    fn end_turn(&mut self, player: PlayerId) -> Result<Outcome<PlayerId>, ActionError> {
        let seat = self.seat(player)?;
        if self.hands[seat].is_empty() {
            debug!(winner = %player, "Crazy eights finished");
            self.phase = Phase::Finished { winner: player };
            return Ok(Outcome::Finished(player));
        }

        let next = self.circle.left_of(player)?;
        self.phase = Phase::Turn { player: next };
        Ok(Outcome::InProgress)
    }
}

fn ensure_actor(expected: PlayerId, action: &Action) -> Result<(), ActionError> {
    if action.player() == expected {
        Ok(())
    } else {
        Err(ActionError::OutOfTurn)
    }
}

impl RulesEngine for CrazyEights {
    type Action = Action;
    type Output = PlayerId;

    fn submit(&mut self, action: Action) -> Result<Outcome<PlayerId>, ActionError> {
        let result = self.apply(action);
        if let Err(err) = &result {
            debug!(?action, %err, "Rejected crazy eights action");
        }
        result
    }

    fn awaiting(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Turn { player }
            | Phase::Drawn { player, .. }
            | Phase::AnnounceSuit { player } => Some(player),
            Phase::Finished { .. } => None,
        }
    }

    fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished { .. })
    }
}
