//! Human-vs-heuristic session with a paced opponent reply.
//!
//! Moves are serialized through one async mutex, so line evaluation is atomic
//! with the placement it follows. The opponent replies after a delay on a
//! spawned task; a reset in the meantime abandons the reply.

use crate::config::GameConfig;
use crate::games::tictactoe::{
    GameController, GameEvent, GameSnapshot, GameStatus, MoveError, MoveOutcome, Opponent,
    OpponentError, Position, Side,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// State guarded by the session lock.
struct Shared {
    controller: GameController,
    opponent: Box<dyn Opponent + Send>,
    /// Bumped on every reset; a reply scheduled under an older generation is dropped.
    generation: u64,
}

impl Shared {
    /// Plays the opponent's move if it is still the opponent's turn.
    fn reply(&mut self, side: Side) {
        if self.controller.status() != GameStatus::InProgress || self.controller.current_side() != side {
            debug!("Opponent reply no longer due");
            return;
        }

        match self.controller.play_opponent(self.opponent.as_mut()) {
            Ok(Some(outcome)) => debug!(?outcome, "Opponent replied"),
            Ok(None) => {}
            Err(OpponentError::NoLegalMove) => debug!("Opponent has no legal move"),
            Err(err) => warn!(%err, "Opponent reply failed"),
        }
    }
}

/// A session between a human and a computer opponent.
pub struct GameSession {
    shared: Arc<Mutex<Shared>>,
    opponent_side: Side,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl GameSession {
    /// Creates a session from configuration, using the heuristic opponent.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_opponent(
            GameController::new(*config.first_side()),
            Box::new(config.opponent()),
            *config.opponent_side(),
            config.opponent_delay(),
        )
    }

    /// Creates a session around an existing controller and opponent.
    ///
    /// If the opponent opens the game, its first move is applied at once when
    /// `delay` is zero and scheduled otherwise.
    ///
    /// # Panics
    ///
    /// Scheduling requires a Tokio runtime, as with [`tokio::spawn`].
    #[instrument(skip(controller, opponent))]
    pub fn with_opponent(
        controller: GameController,
        opponent: Box<dyn Opponent + Send>,
        opponent_side: Side,
        delay: Duration,
    ) -> Self {
        info!(opponent = opponent.name(), "Creating game session");
        let opens = controller.current_side() == opponent_side;
        let mut shared = Shared {
            controller,
            opponent,
            generation: 0,
        };
        if opens && delay.is_zero() {
            shared.reply(opponent_side);
        }

        let mut session = Self {
            shared: Arc::new(Mutex::new(shared)),
            opponent_side,
            delay,
            pending: None,
        };
        if opens && !delay.is_zero() {
            session.schedule_reply(0);
        }
        session
    }

    /// Side played by the human.
    pub fn human_side(&self) -> Side {
        self.opponent_side.opponent()
    }

    /// Side played by the opponent.
    pub fn opponent_side(&self) -> Side {
        self.opponent_side
    }

    /// Submits the human's move and schedules the opponent's reply if due.
    ///
    /// While the game is terminal this restarts it instead.
    ///
    /// # Errors
    ///
    /// Returns the controller's rejection; nothing changes in that case.
    #[instrument(skip(self))]
    pub async fn submit_human_move(&mut self, position: Position) -> Result<MoveOutcome, MoveError> {
        let lock = Arc::clone(&self.shared);
        let mut shared = lock.lock().await;
        let outcome = shared.controller.submit_move(position, self.human_side())?;

        if outcome == MoveOutcome::Reset {
            shared.generation += 1;
            self.abort_pending();
        }

        let opponent_due = shared.controller.status() == GameStatus::InProgress
            && shared.controller.current_side() == self.opponent_side;
        if opponent_due {
            if self.delay.is_zero() {
                shared.reply(self.opponent_side);
            } else {
                let generation = shared.generation;
                drop(shared);
                self.schedule_reply(generation);
            }
        }

        Ok(outcome)
    }

    /// Starts a new game, abandoning any pending opponent reply. Scores are kept.
    #[instrument(skip(self))]
    pub async fn reset(&mut self) {
        self.abort_pending();
        let lock = Arc::clone(&self.shared);
        let mut shared = lock.lock().await;
        shared.generation += 1;
        shared.controller.reset();

        if shared.controller.current_side() == self.opponent_side {
            if self.delay.is_zero() {
                shared.reply(self.opponent_side);
            } else {
                let generation = shared.generation;
                drop(shared);
                self.schedule_reply(generation);
            }
        }
    }

    /// Waits until any pending opponent reply has been applied or abandoned.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take()
            && let Err(err) = handle.await
        {
            debug!(%err, "Pending reply did not complete");
        }
    }

    /// Whether an opponent reply is scheduled and not yet finished.
    pub fn reply_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Captures the current game state.
    pub async fn snapshot(&self) -> GameSnapshot {
        self.shared.lock().await.controller.snapshot()
    }

    /// Board rendered as a grid.
    pub async fn board_display(&self) -> String {
        self.shared.lock().await.controller.board().to_string()
    }

    /// Registers a listener for game events.
    pub async fn subscribe(&self) -> mpsc::UnboundedReceiver<GameEvent> {
        self.shared.lock().await.controller.subscribe()
    }

    fn schedule_reply(&mut self, generation: u64) {
        let shared = Arc::clone(&self.shared);
        let side = self.opponent_side;
        let delay = self.delay;

        debug!(?delay, generation, "Scheduling opponent reply");
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut shared = shared.lock().await;
            if shared.generation != generation {
                debug!(generation, current = shared.generation, "Reset since scheduling, reply abandoned");
                return;
            }
            shared.reply(side);
        }));
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            debug!("Aborting pending opponent reply");
            handle.abort();
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.abort_pending();
    }
}
