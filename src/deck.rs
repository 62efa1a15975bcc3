//! Deck builders, dealing, and the shared reshuffle-on-empty draw.

use rand::Rng;
use tracing::debug;

use crate::card::{Card, CardId, Cards, Facing, Suit, Value};
use crate::error::DealError;
use crate::pile::Pile;

/// Number of cards in a regular deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a pinochle deck.
pub const PINOCHLE_DECK_SIZE: usize = 48;

/// Ranks used by a pinochle deck.
pub const PINOCHLE_VALUES: [Value; 6] = [
    Value::Nine,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ten,
    Value::Ace,
];

/// Allocates a regular 52-card deck in `cards` and returns it face-down.
pub fn regular_deck(cards: &mut Cards) -> Pile {
    let mut deck = Pile::new();
    for suit in Suit::ALL {
        for value in Value::ALL {
            deck.add(cards.alloc(Card::new(value, suit)), Facing::Down);
        }
    }
    deck
}

/// Allocates a 48-card pinochle deck (two copies of nine through ace in every
/// suit) in `cards` and returns it face-down.
pub fn pinochle_deck(cards: &mut Cards) -> Pile {
    let mut deck = Pile::new();
    for _ in 0..2 {
        for suit in Suit::ALL {
            for value in PINOCHLE_VALUES {
                deck.add(cards.alloc(Card::new(value, suit)), Facing::Down);
            }
        }
    }
    deck
}

/// Deals `rounds` cards to each destination, one at a time in order, from
/// the top of `source`.
///
/// # Errors
///
/// Returns [`DealError::Exhausted`] if `source` holds fewer than
/// `rounds * destinations.len()` cards. Nothing is dealt in that case.
pub fn deal(
    rounds: usize,
    source: &mut Pile,
    destinations: &mut [&mut Pile],
    facing: Facing,
) -> Result<(), DealError> {
    let needed = rounds.checked_mul(destinations.len());
    if needed.is_none_or(|needed| source.count() < needed) {
        return Err(DealError::Exhausted);
    }

    for _ in 0..rounds {
        for pile in destinations.iter_mut() {
            let card = source.take_top().ok_or(DealError::Exhausted)?;
            pile.add(card, facing);
        }
    }

    Ok(())
}

/// Returns whether [`draw_or_recycle`] can produce a card.
#[must_use]
pub fn can_draw(deck: &Pile, discard: &Pile) -> bool {
    !deck.is_empty() || discard.count() > 1
}

/// Draws the top card of `deck`.
///
/// If `deck` is empty, every discard except the top one is turned face-down,
/// moved into `deck` and shuffled first. The top discard stays where it is
/// and the discard pile does not count as having received a card.
pub fn draw_or_recycle<R: Rng + ?Sized>(
    deck: &mut Pile,
    discard: &mut Pile,
    rng: &mut R,
) -> Option<CardId> {
    if deck.is_empty() {
        let rest = discard.take_bottom(discard.count().saturating_sub(1));
        debug!(recycled = rest.len(), "Deck empty, reshuffling discard");
        deck.add_all(rest, Facing::Down);
        deck.shuffle(rng);
    }
    deck.take_top()
}
