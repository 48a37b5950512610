//! Cells in the cellular automaton.

use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// A dead cell.
    #[default]
    Dead,
    /// A living cell.
    Alive,
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Dead => State::Alive,
            State::Alive => State::Dead,
        }
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, both 0-indexed, with the origin at the
/// top left corner of the grid.
pub type Coord = (usize, usize);
