//! Pinochle phases, actions and per-deal records.

use alloc::vec::Vec;

use crate::card::{CardId, Suit};
use crate::collections::HashSet;
use crate::player::PlayerId;

/// Where a game of Pinochle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The player must bid or pass.
    Bidding {
        /// The player to act.
        player: PlayerId,
    },
    /// The bid winner must name trump.
    DeclareTrump {
        /// The bid winner.
        bidder: PlayerId,
    },
    /// The bid winner and partner must exchange three cards each.
    PassCards {
        /// The bid winner.
        bidder: PlayerId,
    },
    /// Every player must reveal their meld.
    Meld,
    /// The player must play a card to the current trick.
    Trick {
        /// The player to act.
        player: PlayerId,
    },
    /// All deals have been played.
    Finished,
}

/// A move in Pinochle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Raise the bid.
    Bid {
        /// The acting player.
        player: PlayerId,
        /// The new bid.
        amount: u32,
    },
    /// Drop out of the auction.
    PassBid {
        /// The acting player.
        player: PlayerId,
    },
    /// Name trump for this deal.
    DeclareTrump {
        /// The bid winner.
        player: PlayerId,
        /// The trump suit.
        suit: Suit,
    },
    /// Swap three cards between the bid winner and partner.
    PassCards {
        /// The bid winner.
        bidder: PlayerId,
        /// Cards the bid winner gives away.
        bidder_cards: Vec<CardId>,
        /// The bid winner's partner.
        partner: PlayerId,
        /// Cards the partner gives away.
        partner_cards: Vec<CardId>,
    },
    /// Every player's claimed meld. A player with no meld lists no cards.
    RevealMeld {
        /// One entry per seated player.
        melds: Vec<(PlayerId, Vec<CardId>)>,
    },
    /// Play a card to the current trick.
    PlayCard {
        /// The acting player.
        player: PlayerId,
        /// The card to play.
        card: CardId,
    },
}

/// Auction progress within one deal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Auction {
    pub(super) bid: Option<u32>,
    pub(super) high_bidder: Option<PlayerId>,
    pub(super) passed: HashSet<PlayerId>,
}

/// The winning bid of one deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contract {
    /// The bid winner.
    pub bidder: PlayerId,
    /// The winning bid.
    pub bid: u32,
    /// Trump, once declared.
    pub trump: Option<Suit>,
}

/// How one deal scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealSummary {
    /// Who dealt.
    pub dealer: PlayerId,
    /// The winning bid.
    pub contract: Contract,
    /// Meld declared by each partnership.
    pub meld: [u32; 2],
    /// Counters won in tricks by each partnership, including the last trick.
    pub tricks: [u32; 2],
    /// Whether the bidding partnership made its bid.
    pub made: bool,
    /// Score change of each partnership.
    pub delta: [i32; 2],
}
