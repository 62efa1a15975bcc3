use alloc::vec::Vec;

use tracing::debug;

use crate::card::{CardId, Facing};
use crate::collections::HashSet;
use crate::error::ActionError;
use crate::games::RulesEngine;
use crate::outcome::Outcome;
use crate::player::PlayerId;

use super::meld::score_meld;
use super::{Action, Phase, Pinochle};

impl Pinochle {
    fn apply(&mut self, action: Action) -> Result<Outcome<[i32; 2]>, ActionError> {
        match (self.phase, action) {
            (Phase::Finished, _) => Err(ActionError::IllegalAction),
            (Phase::Bidding { player }, Action::Bid { player: actor, amount }) => {
                ensure_actor(player, actor)?;
                self.bid(player, amount)
            }
            (Phase::Bidding { player }, Action::PassBid { player: actor }) => {
                ensure_actor(player, actor)?;
                self.pass_bid(player)
            }
            (Phase::DeclareTrump { bidder }, Action::DeclareTrump { player, suit }) => {
                ensure_actor(bidder, player)?;
                self.declare_trump(bidder, suit)
            }
            (
                Phase::PassCards { bidder },
                Action::PassCards {
                    bidder: actor,
                    bidder_cards,
                    partner,
                    partner_cards,
                },
            ) => {
                ensure_actor(bidder, actor)?;
                self.pass_cards(bidder, &bidder_cards, partner, &partner_cards)
            }
            (Phase::Meld, Action::RevealMeld { melds }) => self.reveal_meld(&melds),
            (Phase::Trick { player }, Action::PlayCard { player: actor, card }) => {
                ensure_actor(player, actor)?;
                self.play_card(player, card)
            }
            _ => Err(ActionError::IllegalAction),
        }
    }

    /// Shows every claimed meld, scores it, and hides it again.
    fn reveal_meld(
        &mut self,
        melds: &[(PlayerId, Vec<CardId>)],
    ) -> Result<Outcome<[i32; 2]>, ActionError> {
        let trump = self.trump().ok_or(ActionError::IllegalAction)?;

        let mut seen = HashSet::new();
        for (player, cards) in melds {
            let seat = self.seat(*player)?;
            if !seen.insert(*player) {
                return Err(ActionError::StructuralViolation);
            }
            self.hands[seat].check_all_of(cards)?;
        }
        if seen.len() != self.circle.len() {
            return Err(ActionError::StructuralViolation);
        }

        self.melds.clear();
        for (player, cards) in melds {
            let seat = self.seat(*player)?;
            for &card in cards {
                self.hands[seat].set_facing(card, Facing::Up)?;
            }
            let score = score_meld(&self.cards, trump, cards);
            debug!(player = %player, meld = score.total(), "Meld revealed");
            self.melds.push((*player, score));
            for &card in cards {
                self.hands[seat].set_facing(card, Facing::Owner)?;
            }
        }

        let contract = self.contract.ok_or(ActionError::IllegalAction)?;
        self.leader = contract.bidder;
        self.phase = Phase::Trick {
            player: contract.bidder,
        };
        Ok(Outcome::InProgress)
    }
}

fn ensure_actor(expected: PlayerId, actor: PlayerId) -> Result<(), ActionError> {
    if actor == expected {
        Ok(())
    } else {
        Err(ActionError::OutOfTurn)
    }
}

impl RulesEngine for Pinochle {
    type Action = Action;
    type Output = [i32; 2];

    fn submit(&mut self, action: Action) -> Result<Outcome<[i32; 2]>, ActionError> {
        let phase = self.phase;
        let result = self.apply(action);
        if let Err(err) = &result {
            debug!(?phase, %err, "Rejected pinochle action");
        }
        result
    }

    fn awaiting(&self) -> Option<PlayerId> {
        match self.phase {
            Phase::Bidding { player } | Phase::Trick { player } => Some(player),
            Phase::DeclareTrump { bidder } | Phase::PassCards { bidder } => Some(bidder),
            Phase::Meld | Phase::Finished => None,
        }
    }

    fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}
