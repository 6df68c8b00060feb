//! The eight three-cell lines that can win a game.

use super::position::Position;
use super::types::{Cell, Mark, Side};
use serde::{Deserialize, Serialize};

/// Identifier of a winnable line.
///
/// Variant order is the board's line enumeration order: rows, then the two
/// diagonals, then columns. "First such line" always means first in this
/// order. Displays as its player-facing positions, e.g. `1-5-9`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
pub enum LineId {
    /// Positions 1-2-3.
    #[display("1-2-3")]
    TopRow,
    /// Positions 4-5-6.
    #[display("4-5-6")]
    MiddleRow,
    /// Positions 7-8-9.
    #[display("7-8-9")]
    BottomRow,
    /// Positions 3-5-7.
    #[display("3-5-7")]
    AntiDiagonal,
    /// Positions 1-5-9.
    #[display("1-5-9")]
    MainDiagonal,
    /// Positions 1-4-7.
    #[display("1-4-7")]
    LeftColumn,
    /// Positions 2-5-8.
    #[display("2-5-8")]
    CenterColumn,
    /// Positions 3-6-9.
    #[display("3-6-9")]
    RightColumn,
}

impl LineId {
    /// All lines in enumeration order.
    pub const ALL: [LineId; 8] = [
        LineId::TopRow,
        LineId::MiddleRow,
        LineId::BottomRow,
        LineId::AntiDiagonal,
        LineId::MainDiagonal,
        LineId::LeftColumn,
        LineId::CenterColumn,
        LineId::RightColumn,
    ];

    /// The three positions of this line, in line order.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            LineId::TopRow => [TopLeft, TopCenter, TopRight],
            LineId::MiddleRow => [MiddleLeft, Center, MiddleRight],
            LineId::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            LineId::AntiDiagonal => [TopRight, Center, BottomLeft],
            LineId::MainDiagonal => [TopLeft, Center, BottomRight],
            LineId::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            LineId::CenterColumn => [TopCenter, Center, BottomCenter],
            LineId::RightColumn => [TopRight, MiddleRight, BottomRight],
        }
    }

    /// Whether `position` lies on this line.
    pub fn contains(self, position: Position) -> bool {
        self.positions().contains(&position)
    }
}

/// Mark counts along one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineTally {
    /// Cells holding `X`.
    pub first: u8,
    /// Cells holding `O`.
    pub second: u8,
    /// Unfilled cells.
    pub empty: u8,
}

impl LineTally {
    /// Number of cells holding `side`'s mark.
    pub fn count(&self, side: Side) -> u8 {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// Exactly `n` cells hold `side`'s mark and every other cell is empty.
    pub fn only(&self, side: Side, n: u8) -> bool {
        self.count(side) == n && self.count(side.opponent()) == 0 && self.empty == 3 - n
    }

    /// The side owning all three cells, if any.
    pub fn complete(&self) -> Option<Side> {
        if self.first == 3 {
            Some(Side::First)
        } else if self.second == 3 {
            Some(Side::Second)
        } else {
            None
        }
    }
}

/// A line resolved against a board: three borrowed cells.
///
/// Lines only read their cells.
#[derive(Debug, Clone, Copy)]
pub struct Line<'a> {
    id: LineId,
    cells: [(Position, &'a Cell); 3],
}

impl<'a> Line<'a> {
    pub(super) fn new(id: LineId, cells: [(Position, &'a Cell); 3]) -> Self {
        Self { id, cells }
    }

    /// Identifier used to highlight this line.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Counts marks and empty cells.
    pub fn tally(&self) -> LineTally {
        self.cells
            .iter()
            .fold(LineTally::default(), |mut tally, (_, cell)| {
                match cell.mark() {
                    Mark::Empty => tally.empty += 1,
                    Mark::Occupied(Side::First) => tally.first += 1,
                    Mark::Occupied(Side::Second) => tally.second += 1,
                }
                tally
            })
    }

    /// Symbols of the filled cells only, in line order (`"X"`, `"XO"`, ...).
    pub fn render(&self) -> String {
        self.cells
            .iter()
            .filter_map(|(_, cell)| cell.mark().side())
            .map(Side::symbol)
            .collect()
    }

    /// Positions of unfilled cells, in line order.
    pub fn unfilled_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.filled())
            .map(|(pos, _)| *pos)
            .collect()
    }

    /// All three cells hold `side`'s mark.
    pub fn is_won_by(&self, side: Side) -> bool {
        self.tally().count(side) == 3
    }
}
