//! What an engine reports after accepting an action.

/// Result of an accepted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The game continues and waits for the next action.
    InProgress,
    /// The game is over.
    Finished(T),
}

impl<T> Outcome<T> {
    /// Returns whether the game ended with this action.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }

    /// Returns the terminal result, if any.
    #[must_use]
    pub fn finished(self) -> Option<T> {
        match self {
            Self::Finished(result) => Some(result),
            Self::InProgress => None,
        }
    }
}
