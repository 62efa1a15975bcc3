//! Rules engines for turn-based card games with optional `no_std` support.
//!
//! The crate provides the card primitives ([`Pile`], [`Hand`], [`Grid`],
//! [`PlayerCircle`]) and four engines built from them: [`CrazyEights`],
//! [`Golf`], [`QuinnsGame`] and [`Pinochle`]. Each engine deals on
//! construction and then takes one action at a time through
//! [`RulesEngine::submit`].
//!
//! # Example
//!
//! ```
//! use tablecards::games::crazy_eights::Action;
//! use tablecards::{CrazyEights, CrazyEightsOptions, PlayerCircle, PlayerId, RulesEngine};
//!
//! let circle = PlayerCircle::from_names(&["ann", "bob"]).unwrap();
//! let mut game = CrazyEights::new(circle, CrazyEightsOptions::default(), 42).unwrap();
//!
//! let player = game.awaiting().unwrap();
//! game.submit(Action::DrawCard { player }).unwrap();
//! game.submit(Action::AnnounceDone { player }).unwrap();
//! assert_eq!(game.awaiting(), Some(PlayerId(0)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
mod collections;
pub mod deck;
pub mod error;
pub mod games;
pub mod grid;
pub mod hand;
pub mod options;
pub mod outcome;
pub mod pile;
pub mod player;

// Re-export main types
pub use card::{Card, CardId, Cards, Facing, Suit, Value};
pub use collections::{HashMap, HashSet};
pub use deck::{DECK_SIZE, PINOCHLE_DECK_SIZE};
pub use error::{ActionError, CircleError, DealError, PileError, SetupError};
pub use games::RulesEngine;
pub use games::crazy_eights::CrazyEights;
pub use games::golf::Golf;
pub use games::pinochle::{MeldScore, Pinochle};
pub use games::quinns::QuinnsGame;
pub use grid::{Grid, Pos};
pub use hand::Hand;
pub use options::{CrazyEightsOptions, GolfOptions, PinochleOptions, QuinnsOptions};
pub use outcome::Outcome;
pub use pile::Pile;
pub use player::{Player, PlayerCircle, PlayerId};
