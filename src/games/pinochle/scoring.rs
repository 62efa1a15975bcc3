//! End-of-deal scoring and the move to the next deal.

use tracing::debug;

use crate::card::{Cards, Value};
use crate::error::ActionError;
use crate::outcome::Outcome;
use crate::pile::Pile;

use super::{DealSummary, Phase, Pinochle};

/// Bonus counter for taking the last trick.
const LAST_TRICK: u32 = 1;

/// Counts the aces, tens and kings in a pile of won tricks.
fn counters(cards: &Cards, won: &Pile) -> u32 {
    won.iter()
        .filter(|&id| matches!(cards[id].value, Value::Ace | Value::Ten | Value::King))
        .count() as u32
}

/// Converts a point count to a score change, saturating at `i32::MAX`.
fn points(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

impl Pinochle {
    /// Scores the finished deal, then deals again or ends the game.
    ///
    /// A partnership's meld counts only if its trick counters reach the bid.
    /// The bidding partnership loses the bid when its deal total falls short
    /// of it.
    pub(super) fn score_deal(
        &mut self,
        last_trick: usize,
    ) -> Result<Outcome<[i32; 2]>, ActionError> {
        let contract = self.contract.ok_or(ActionError::IllegalAction)?;
        let bidding_team = self.team(contract.bidder)?;

        let mut meld = [0; 2];
        for (player, score) in &self.melds {
            meld[self.team(*player)?] += score.total();
        }

        let mut tricks = [0; 2];
        let mut delta = [0; 2];
        let mut made = false;
        for team in 0..2 {
            tricks[team] = counters(&self.cards, &self.won[team]);
            if team == last_trick {
                tricks[team] += LAST_TRICK;
            }
            let counted_meld = if tricks[team] >= contract.bid { meld[team] } else { 0 };
            let total = tricks[team].saturating_add(counted_meld);

            delta[team] = if team == bidding_team {
                made = total >= contract.bid;
                if made {
                    points(total)
                } else {
                    -points(contract.bid)
                }
            } else {
                points(total)
            };
            self.scores[team] = self.scores[team].saturating_add(delta[team]);
        }

        debug!(
            bid = contract.bid,
            made,
            ?tricks,
            ?meld,
            scores = ?self.scores,
            "Deal scored"
        );
        self.history.push(DealSummary {
            dealer: self.dealer,
            contract,
            meld,
            tricks,
            made,
            delta,
        });

        if self.history.len() >= usize::from(self.options.deals) {
            debug!(scores = ?self.scores, "Pinochle finished");
            self.phase = Phase::Finished;
            return Ok(Outcome::Finished(self.scores));
        }

        self.dealer = self.circle.left_of(self.dealer)?;
        self.deal_hands()?;
        let first = self.circle.left_of(self.dealer)?;
        self.leader = first;
        self.phase = Phase::Bidding { player: first };
        Ok(Outcome::InProgress)
    }
}
