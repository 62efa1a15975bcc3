//! The auction and the steps between it and meld.

use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::{CardId, Facing, Suit};
use crate::error::ActionError;
use crate::outcome::Outcome;
use crate::player::PlayerId;

use super::{Contract, Phase, Pinochle};

/// Cards each side gives away in the pass.
const PASS_SIZE: usize = 3;

impl Pinochle {
    pub(super) fn bid(
        &mut self,
        player: PlayerId,
        amount: u32,
    ) -> Result<Outcome<[i32; 2]>, ActionError> {
        let least = match self.auction.bid {
            None => self.options.minimum_bid,
            Some(bid) => bid.checked_add(1).ok_or(ActionError::IllegalAction)?,
        };
        if amount < least {
            return Err(ActionError::IllegalAction);
        }

        trace!(player = %player, amount, "Bid");
        self.auction.bid = Some(amount);
        self.auction.high_bidder = Some(player);
        self.next_bidder(player)
    }

    pub(super) fn pass_bid(&mut self, player: PlayerId) -> Result<Outcome<[i32; 2]>, ActionError> {
        trace!(player = %player, "Passed bid");
        self.auction.passed.insert(player);
        self.next_bidder(player)
    }

    /// Ends the auction once one bidder is left, or moves to the next player
    /// still bidding.
    fn next_bidder(&mut self, player: PlayerId) -> Result<Outcome<[i32; 2]>, ActionError> {
        let passed = self.auction.passed.len();
        let seats = self.circle.len();

        let winner = match (self.auction.bid, self.auction.high_bidder) {
            _ if passed == seats => Some((player, self.options.minimum_bid)),
            (Some(bid), Some(high)) if passed + 1 == seats => Some((high, bid)),
            _ => None,
        };

        if let Some((bidder, bid)) = winner {
            debug!(bidder = %bidder, bid, "Bid won");
            self.contract = Some(Contract {
                bidder,
                bid,
                trump: None,
            });
            self.phase = Phase::DeclareTrump { bidder };
        } else {
            let next = self
                .circle
                .left_of_excluding(player, &self.auction.passed)?;
            self.phase = Phase::Bidding { player: next };
        }
        Ok(Outcome::InProgress)
    }

    pub(super) fn declare_trump(
        &mut self,
        bidder: PlayerId,
        suit: Suit,
    ) -> Result<Outcome<[i32; 2]>, ActionError> {
        let contract = self.contract.as_mut().ok_or(ActionError::IllegalAction)?;
        contract.trump = Some(suit);
        debug!(bidder = %bidder, trump = ?suit, "Trump declared");
        self.phase = Phase::PassCards { bidder };
        Ok(Outcome::InProgress)
    }

    /// Swaps three cards between the bid winner and partner.
    pub(super) fn pass_cards(
        &mut self,
        bidder: PlayerId,
        bidder_cards: &[CardId],
        partner: PlayerId,
        partner_cards: &[CardId],
    ) -> Result<Outcome<[i32; 2]>, ActionError> {
        if partner != self.circle.opposite_of(bidder)? {
            return Err(ActionError::OutOfTurn);
        }
        if bidder_cards.len() != PASS_SIZE || partner_cards.len() != PASS_SIZE {
            return Err(ActionError::StructuralViolation);
        }
        let bidder_seat = self.seat(bidder)?;
        let partner_seat = self.seat(partner)?;
        self.hands[bidder_seat].check_all_of(bidder_cards)?;
        self.hands[partner_seat].check_all_of(partner_cards)?;

        let given: Vec<CardId> = self.hands[bidder_seat].take_all_of(bidder_cards)?;
        let returned: Vec<CardId> = self.hands[partner_seat].take_all_of(partner_cards)?;
        self.hands[partner_seat].add_all(given, Facing::Owner);
        self.hands[bidder_seat].add_all(returned, Facing::Owner);

        debug!(bidder = %bidder, partner = %partner, "Cards passed");
        self.phase = Phase::Meld;
        Ok(Outcome::InProgress)
    }
}
