//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// One of the two participants.
///
/// `First` always opens a fresh game in the default configuration and plays
/// the `X` mark; `Second` plays `O`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Plays the `X` mark.
    #[display("X")]
    First,
    /// Plays the `O` mark.
    #[display("O")]
    Second,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Symbol this side places on the board.
    pub fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// Occupied by a side's mark.
    Occupied(Side),
}

impl Mark {
    /// The side owning this mark, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(side) => Some(side),
        }
    }
}

/// One grid position.
///
/// A cell is filled exactly when it holds a mark. Once filled it stays that
/// way until [`Cell::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    mark: Mark,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Whether a mark has been placed.
    pub fn filled(&self) -> bool {
        self.mark != Mark::Empty
    }

    /// Places `side`'s mark. A second placement on a filled cell is ignored.
    ///
    /// Returns whether the mark was placed.
    pub fn place(&mut self, side: Side) -> bool {
        if self.filled() {
            return false;
        }
        self.mark = Mark::Occupied(side);
        true
    }

    /// Clears the cell.
    pub fn reset(&mut self) {
        self.mark = Mark::Empty;
    }
}
