//! Fixed-size two-dimensional arrays of piles.

use alloc::vec::Vec;

use crate::pile::Pile;

/// An `(x, y)` grid coordinate.
pub type Pos = (usize, usize);

/// A `width` x `height` array of piles addressed in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    slots: Vec<Pile>,
}

impl Grid {
    /// Creates a grid of empty piles.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            slots: (0..width * height).map(|_| Pile::new()).collect(),
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Converts a slot index into a coordinate.
    #[must_use]
    pub const fn index_to_xy(&self, index: usize) -> Pos {
        (index % self.width, index / self.width)
    }

    /// Converts a coordinate into a slot index, or `None` if out of bounds.
    #[must_use]
    pub const fn xy_to_index(&self, pos: Pos) -> Option<usize> {
        if pos.0 >= self.width || pos.1 >= self.height {
            return None;
        }
        Some(pos.1 * self.width + pos.0)
    }

    /// Returns the first coordinate, in index order, whose pile matches.
    pub fn find_xy<F>(&self, mut pred: F) -> Option<Pos>
    where
        F: FnMut(&Pile, Pos) -> bool,
    {
        self.slots
            .iter()
            .enumerate()
            .find(|(i, pile)| pred(pile, self.index_to_xy(*i)))
            .map(|(i, _)| self.index_to_xy(i))
    }

    /// Returns the pile at a coordinate.
    #[must_use]
    pub fn get(&self, pos: Pos) -> Option<&Pile> {
        self.xy_to_index(pos).map(|idx| &self.slots[idx])
    }

    /// Returns the pile at a coordinate mutably.
    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut Pile> {
        self.xy_to_index(pos).map(|idx| &mut self.slots[idx])
    }

    /// Returns the piles of one column, top row first.
    pub fn column(&self, x: usize) -> impl Iterator<Item = &Pile> + '_ {
        (0..self.height).filter_map(move |y| self.get((x, y)))
    }

    /// Iterates over every pile in index order.
    pub fn slots(&self) -> impl Iterator<Item = &Pile> + '_ {
        self.slots.iter()
    }

    /// Iterates mutably over every pile in index order.
    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut Pile> + '_ {
        self.slots.iter_mut()
    }
}
