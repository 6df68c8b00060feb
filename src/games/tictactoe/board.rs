//! The 3x3 board and its eight lines.

use super::line::{Line, LineId};
use super::position::Position;
use super::types::{Cell, Mark, Side};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 3x3 tic-tac-toe board.
///
/// The line set is fixed at construction and survives [`Board::reset`];
/// only cell contents are cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
    /// Winnable lines in enumeration order.
    lines: [LineId; 8],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::new(); 9],
            lines: LineId::ALL,
        }
    }

    /// The 9 cells in position order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.to_index()]
    }

    /// Mark at `pos`.
    pub fn get(&self, pos: Position) -> Mark {
        self.cell(pos).mark()
    }

    /// Checks if a cell is unfilled.
    pub fn is_empty(&self, pos: Position) -> bool {
        !self.cell(pos).filled()
    }

    /// Places `side`'s mark at `pos`; ignored if the cell is filled.
    ///
    /// Returns whether the mark was placed.
    pub fn place(&mut self, pos: Position, side: Side) -> bool {
        self.cells[pos.to_index()].place(side)
    }

    /// Resolves one line against this board.
    pub fn line(&self, id: LineId) -> Line<'_> {
        let [a, b, c] = id.positions();
        Line::new(id, [(a, self.cell(a)), (b, self.cell(b)), (c, self.cell(c))])
    }

    /// The 8 lines, in enumeration order.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> + '_ {
        self.lines.iter().map(|&id| self.line(id))
    }

    /// Positions of all unfilled cells, in position order.
    pub fn unfilled_cells(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.filled()).count()
    }

    /// Clears every cell; the lines are untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(Cell::reset);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the board as a grid; empty cells show their number.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in Position::ALL.chunks(3).enumerate() {
            let symbols: Vec<String> = chunk
                .iter()
                .map(|&pos| match self.get(pos) {
                    Mark::Empty => pos.number().to_string(),
                    Mark::Occupied(side) => side.symbol().to_string(),
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
