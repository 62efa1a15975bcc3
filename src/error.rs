//! Error types for pile, seating, dealing, setup, and action handling.

use thiserror::Error;

/// Errors that can occur when removing cards from a pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PileError {
    /// Card is not in the pile.
    #[error("card not in pile")]
    NotFound,
    /// The same card was named more than once.
    #[error("card named more than once")]
    DuplicateCard,
}

/// Errors that can occur when working with a seating circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CircleError {
    /// The circle has no seats.
    #[error("circle has no players")]
    Empty,
    /// A player id appears in more than one seat.
    #[error("player seated twice")]
    DuplicatePlayer,
    /// Player is not seated in the circle.
    #[error("player not in circle")]
    NotSeated,
    /// Every seat is excluded.
    #[error("all players excluded")]
    AllExcluded,
    /// More players than there are player ids.
    #[error("too many players")]
    TooManyPlayers,
    /// Partnerships need an even number of seats.
    #[error("circle must have an even number of players")]
    OddSeatCount,
}

/// Errors that can occur while dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the source pile.
    #[error("out of cards to deal")]
    Exhausted,
}

/// Errors that can occur while constructing a game engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The game cannot be played with this many players.
    #[error("cannot play with {0} players")]
    PlayerCount(usize),
    /// The seating circle is unusable for this game.
    #[error(transparent)]
    Circle(#[from] CircleError),
    /// The initial deal ran out of cards.
    #[error(transparent)]
    Deal(#[from] DealError),
}

/// Reasons an action submitted to an engine is rejected.
///
/// A rejected action never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// A referenced card or player is not where the action says it is.
    #[error("card or player not found")]
    NotFound,
    /// Not this player's turn.
    #[error("not this player's turn")]
    OutOfTurn,
    /// The action breaks a rule of the game at this point.
    #[error("action not allowed now")]
    IllegalAction,
    /// The action payload is malformed (wrong counts, repeated cards).
    #[error("malformed action")]
    StructuralViolation,
    /// No cards left to draw.
    #[error("no cards left to draw")]
    Exhausted,
}

impl From<PileError> for ActionError {
    fn from(err: PileError) -> Self {
        match err {
            PileError::NotFound => Self::NotFound,
            PileError::DuplicateCard => Self::StructuralViolation,
        }
    }
}

impl From<CircleError> for ActionError {
    fn from(err: CircleError) -> Self {
        match err {
            CircleError::AllExcluded => Self::IllegalAction,
            CircleError::Empty
            | CircleError::DuplicatePlayer
            | CircleError::NotSeated
            | CircleError::TooManyPlayers
            | CircleError::OddSeatCount => Self::NotFound,
        }
    }
}

impl From<DealError> for ActionError {
    fn from(_: DealError) -> Self {
        Self::Exhausted
    }
}
