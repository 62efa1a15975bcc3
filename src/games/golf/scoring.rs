//! Golf grid scoring.

use alloc::vec::Vec;

use crate::card::{Cards, Value};
use crate::grid::Grid;
use crate::pile::Pile;

/// Returns the cost of one card in a non-matching column.
#[must_use]
pub const fn card_cost(value: Value) -> i32 {
    match value {
        Value::Jack | Value::King => 0,
        Value::Queen => 13,
        _ => value.pips() as i32,
    }
}

/// Scores a grid column by column, left to right.
///
/// A column whose cards all share a rank costs nothing. Two such columns in
/// a row of the same rank form a dream, which adds `dream_bonus` once and
/// consumes the pair. Any other column costs the sum of its cards.
#[must_use]
pub fn score_grid(cards: &Cards, grid: &Grid, dream_bonus: i32) -> i32 {
    let mut total = 0;
    let mut prev: Option<Value> = None;

    for x in 0..grid.width() {
        let column: Vec<Value> = grid
            .column(x)
            .filter_map(Pile::peek_top)
            .map(|id| cards[id].value)
            .collect();

        match column.first() {
            Some(&rank) if column.iter().all(|&value| value == rank) => {
                if prev == Some(rank) {
                    total += dream_bonus;
                    prev = None;
                } else {
                    prev = Some(rank);
                }
            }
            _ => {
                total += column.iter().map(|&value| card_cost(value)).sum::<i32>();
                prev = None;
            }
        }
    }

    total
}
