//! Game rule engines.
//!
//! Every engine is a resumable state machine: it is built from a
//! [`PlayerCircle`](crate::PlayerCircle), deals during construction, and
//! then consumes one action per [`RulesEngine::submit`] call. An action is
//! fully validated before anything moves, so a rejected action leaves the
//! engine exactly as it was.

pub mod crazy_eights;
pub mod golf;
pub mod pinochle;
pub mod quinns;

use crate::error::ActionError;
use crate::outcome::Outcome;
use crate::player::PlayerId;

/// Common interface of the game engines.
pub trait RulesEngine {
    /// The moves a player may submit.
    type Action;
    /// The terminal result of a finished game.
    type Output;

    /// Applies one action.
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] and leaves the game unchanged if the action
    /// is out of turn, malformed, names cards that are not where it says, or
    /// breaks a rule. Any action after the game has finished is
    /// [`ActionError::IllegalAction`].
    fn submit(&mut self, action: Self::Action) -> Result<Outcome<Self::Output>, ActionError>;

    /// Returns the player whose action is required next.
    ///
    /// `None` when the game is over or the next action is a joint one
    /// submitted on behalf of several players.
    fn awaiting(&self) -> Option<PlayerId>;

    /// Returns whether the game has finished.
    fn is_finished(&self) -> bool;
}
