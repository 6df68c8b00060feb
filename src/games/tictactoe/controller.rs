//! Turn orchestration, win/draw detection and scoring.

use super::action::{Move, MoveError, MoveOutcome};
use super::board::Board;
use super::contracts::LegalMove;
use super::invariants::{ControllerInvariants, InvariantSet};
use super::line::LineId;
use super::opponent::{Opponent, OpponentError};
use super::position::Position;
use super::rules::win::completed_lines;
use super::types::{Cell, Mark, Side};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, trace};

/// Number of moves that fill the board.
const FULL_BOARD: u32 = 9;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("In progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{} wins", _0)]
    Won(Side),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Whether no further moves are accepted until reset.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Outcome message for terminal statuses; empty while in progress.
    pub fn message(self) -> &'static str {
        match self {
            GameStatus::InProgress => "",
            GameStatus::Won(Side::First) => "X wins! Click the board to reset",
            GameStatus::Won(Side::Second) => "O wins! Click the board to reset",
            GameStatus::Draw => "Draw, click the board to reset",
        }
    }
}

/// Cumulative wins per side. Draws are not counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    /// Wins for `X`.
    pub first: u32,
    /// Wins for `O`.
    pub second: u32,
}

impl Scores {
    /// Wins for `side`.
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    fn increment(&mut self, side: Side) -> u32 {
        let score = match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        };
        *score += 1;
        *score
    }
}

/// Notifications for reactive presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A cell received a mark.
    CellFilled {
        /// Where the mark was placed.
        position: Position,
        /// Whose mark it is.
        side: Side,
    },
    /// The status changed.
    StatusChanged(GameStatus),
    /// A side's score changed.
    ScoreChanged {
        /// The side that scored.
        side: Side,
        /// Its new total.
        score: u32,
    },
    /// Every cell was cleared by a reset.
    BoardCleared,
}

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Current status.
    pub status: GameStatus,
    /// Side to move, or the winner once won.
    pub current_side: Side,
    /// Accepted moves since the last reset.
    pub turn_count: u32,
    /// Marks in position order.
    pub cells: [Mark; 9],
    /// Cumulative scores.
    pub scores: Scores,
    /// Lines completed by the most recent move.
    pub highlighted: Vec<LineId>,
}

/// Drives turns on one board for a whole session.
///
/// The board is built once and reused across resets. Scores accumulate for
/// the lifetime of the controller.
#[derive(Debug)]
pub struct GameController {
    pub(crate) board: Board,
    first_side: Side,
    pub(crate) current_side: Side,
    turn_count: u32,
    status: GameStatus,
    scores: Scores,
    highlighted: Vec<LineId>,
    listeners: Vec<mpsc::UnboundedSender<GameEvent>>,
}

impl GameController {
    /// Creates a controller whose games are opened by `first_side`.
    #[instrument]
    pub fn new(first_side: Side) -> Self {
        Self {
            board: Board::new(),
            first_side,
            current_side: first_side,
            turn_count: 0,
            status: GameStatus::InProgress,
            scores: Scores::default(),
            highlighted: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> &Cell {
        self.board.cell(pos)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Side to move. After a win this is the winner.
    pub fn current_side(&self) -> Side {
        self.current_side
    }

    /// Side that opens every game of this session.
    pub fn first_side(&self) -> Side {
        self.first_side
    }

    /// Accepted moves since the last reset.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Cumulative scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Cumulative wins for `side`.
    pub fn score(&self, side: Side) -> u32 {
        self.scores.get(side)
    }

    /// Lines completed by the most recent move.
    pub fn highlighted_lines(&self) -> &[LineId] {
        &self.highlighted
    }

    /// Captures the query surface in one value.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            status: self.status,
            current_side: self.current_side,
            turn_count: self.turn_count,
            cells: self.board.cells().map(|cell| cell.mark()),
            scores: self.scores,
            highlighted: self.highlighted.clone(),
        }
    }

    /// Registers a listener for game events.
    ///
    /// Dropping the receiver unsubscribes it.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.listeners.push(tx);
        rx
    }

    fn emit(&mut self, event: GameEvent) {
        trace!(?event, listeners = self.listeners.len(), "Emitting event");
        self.listeners.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Places `side`'s mark at `position`.
    ///
    /// # Errors
    ///
    /// Rejects the move without changing any state if the game is over, it is
    /// not `side`'s turn, or the cell is filled.
    #[instrument(skip(self), fields(turn = self.turn_count, status = %self.status))]
    pub fn place(&mut self, position: Position, side: Side) -> Result<MoveOutcome, MoveError> {
        let applied = Move::new(side, position);
        LegalMove::check(&applied, self)?;

        self.current_side = side.opponent();
        self.turn_count += 1;
        self.board.place(position, side);
        self.emit(GameEvent::CellFilled { position, side });
        trace!(board = %self.board, "Board after move");

        self.highlighted.clear();
        for (line, owner) in completed_lines(&self.board) {
            self.highlighted.push(line);
            if self.status.is_terminal() {
                continue;
            }

            self.status = GameStatus::Won(owner);
            // Hand the turn indicator back to the winner
            self.current_side = self.current_side.opponent();
            let score = self.scores.increment(owner);
            info!(winner = %owner, %line, score, "Game won");
            self.emit(GameEvent::StatusChanged(self.status));
            self.emit(GameEvent::ScoreChanged { side: owner, score });
        }

        if self.status == GameStatus::InProgress && self.turn_count == FULL_BOARD {
            self.status = GameStatus::Draw;
            info!("Game drawn");
            self.emit(GameEvent::StatusChanged(self.status));
        }

        debug_assert!(
            ControllerInvariants::check_all(self).is_ok(),
            "controller invariants violated: {:?}",
            ControllerInvariants::check_all(self)
        );

        debug!(status = %self.status, next = %self.current_side, "Move applied");
        Ok(MoveOutcome::Placed {
            applied,
            status: self.status,
            completed: self.highlighted.clone(),
        })
    }

    /// Handles a move request from the presentation layer.
    ///
    /// While the game is terminal any request restarts it instead of placing
    /// a mark; otherwise this is [`GameController::place`].
    ///
    /// # Errors
    ///
    /// Same as [`GameController::place`] while the game is in progress.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, position: Position, side: Side) -> Result<MoveOutcome, MoveError> {
        if self.status.is_terminal() {
            debug!(status = %self.status, "Terminal game touched, resetting");
            self.reset();
            return Ok(MoveOutcome::Reset);
        }
        self.place(position, side)
    }

    /// Lets `opponent` play for the side to move.
    ///
    /// Returns `Ok(None)` if the game is not in progress.
    ///
    /// # Errors
    ///
    /// Propagates [`OpponentError::NoLegalMove`], and reports a choice the
    /// controller refused as [`OpponentError::Rejected`].
    #[instrument(skip(self, opponent), fields(opponent = opponent.name()))]
    pub fn play_opponent(
        &mut self,
        opponent: &mut dyn Opponent,
    ) -> Result<Option<MoveOutcome>, OpponentError> {
        if self.status.is_terminal() {
            return Ok(None);
        }

        let side = self.current_side;
        let position = opponent.select_move(&self.board, side)?;
        self.place(position, side)
            .map(Some)
            .map_err(OpponentError::Rejected)
    }

    /// Clears the board for a new game. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let was_terminal = self.status.is_terminal();

        self.board.reset();
        self.current_side = self.first_side;
        self.turn_count = 0;
        self.status = GameStatus::InProgress;
        self.highlighted.clear();

        self.emit(GameEvent::BoardCleared);
        if was_terminal {
            self.emit(GameEvent::StatusChanged(self.status));
        }
        info!(scores = ?self.scores, "Game reset");
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(Side::First)
    }
}
