//! Players and seating order.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::collections::HashSet;
use crate::error::CircleError;

/// Opaque player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seated player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// The player's identity.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
}

impl Player {
    /// Creates a new player.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Fixed cyclic seating order. Turns pass "left", i.e. to the next seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCircle {
    players: Vec<Player>,
}

impl PlayerCircle {
    /// Seats the given players in order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no players or an id is used twice.
    pub fn new(players: Vec<Player>) -> Result<Self, CircleError> {
        if players.is_empty() {
            return Err(CircleError::Empty);
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.id == player.id) {
                return Err(CircleError::DuplicatePlayer);
            }
        }
        Ok(Self { players })
    }

    /// Seats one player per name, with ids assigned from 0 in seat order.
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::Empty`] if `names` is empty, or
    /// [`CircleError::TooManyPlayers`] if there are more names than player
    /// ids.
    ///
    /// # Example
    ///
    /// ```
    /// use tablecards::{PlayerCircle, PlayerId};
    ///
    /// let circle = PlayerCircle::from_names(&["ann", "bob", "cat"]).unwrap();
    /// assert_eq!(circle.left_of(PlayerId(2)), Ok(PlayerId(0)));
    /// ```
    pub fn from_names(names: &[&str]) -> Result<Self, CircleError> {
        let players = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let id = u8::try_from(i).map_err(|_| CircleError::TooManyPlayers)?;
                Ok(Player::new(PlayerId(id), *name))
            })
            .collect::<Result<Vec<_>, CircleError>>()?;
        Self::new(players)
    }

    /// Returns the number of seats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always `false`; a circle has at least one seat.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Returns the seated players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterates over player ids in seat order.
    pub fn ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players.iter().map(|p| p.id)
    }

    /// Returns the player in the first seat, who deals first.
    #[must_use]
    pub fn dealer(&self) -> PlayerId {
        self.players[0].id
    }

    /// Returns the player at a seat index, wrapping around.
    #[must_use]
    pub fn at(&self, seat: usize) -> PlayerId {
        self.players[seat % self.players.len()].id
    }

    /// Returns the seat index of a player.
    #[must_use]
    pub fn seat_of(&self, player: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == player)
    }

    /// Returns whether the player is seated.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.seat_of(player).is_some()
    }

    /// Returns the next seated player after `player`.
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::NotSeated`] if `player` is not in the circle.
    pub fn left_of(&self, player: PlayerId) -> Result<PlayerId, CircleError> {
        let seat = self.seat_of(player).ok_or(CircleError::NotSeated)?;
        Ok(self.at(seat + 1))
    }

    /// Returns the next seated player after `player` that is not excluded.
    ///
    /// `player` itself is returned when every other seat is excluded.
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::AllExcluded`] if every seat is excluded, or
    /// [`CircleError::NotSeated`] if `player` is not in the circle.
    pub fn left_of_excluding(
        &self,
        player: PlayerId,
        excluded: &HashSet<PlayerId>,
    ) -> Result<PlayerId, CircleError> {
        let seat = self.seat_of(player).ok_or(CircleError::NotSeated)?;
        (1..=self.players.len())
            .map(|step| self.at(seat + step))
            .find(|candidate| !excluded.contains(candidate))
            .ok_or(CircleError::AllExcluded)
    }

    /// Returns the player seated across the circle (the partner).
    ///
    /// # Errors
    ///
    /// Returns [`CircleError::OddSeatCount`] if the circle has an odd number
    /// of seats, or [`CircleError::NotSeated`] if `player` is not in it.
    pub fn opposite_of(&self, player: PlayerId) -> Result<PlayerId, CircleError> {
        let seat = self.seat_of(player).ok_or(CircleError::NotSeated)?;
        if self.players.len() % 2 != 0 {
            return Err(CircleError::OddSeatCount);
        }
        Ok(self.at(seat + self.players.len() / 2))
    }
}
