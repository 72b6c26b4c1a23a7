//! Session management and game mode coordination.
//!
//! The [`Orchestrator`] is the root coordinator a host application talks
//! to. It owns the authoritative board, whose turn it is and the
//! game-active flag, validates incoming placements, asks the engine seat
//! for its move in PvE games, and reports terminal state (outcome and
//! winning line) for the host to display.
//!
//! # Flow
//!
//! ```text
//! start_game(mode) -> handle_cell(i) -> [terminal? report : switch turn]
//!   -> (PvE, O to move) engine_turn() -> ... -> restart()
//! ```
//!
//! The host schedules `engine_turn` itself, typically after a short
//! "thinking" delay; the orchestrator never sleeps or spawns threads.

use thiserror::Error;

use crate::agent::{MinimaxPlayer, Player};
use crate::game_repr::{Board, BoardError, GameOutcome, Mark};

/// Session flavor: two externally-driven seats, or an externally-driven X
/// against the engine as O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PvP,
    PvE,
}

/// Rejected turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TurnError {
    /// No game in progress — not started yet, or already decided.
    #[error("no active game")]
    NoActiveGame,
    /// External input arrived while the engine seat is to move.
    #[error("waiting for the engine's move")]
    EngineTurn,
    /// `engine_turn` called when no engine seat is to move.
    #[error("it is not the engine's turn")]
    NotEngineTurn,
    /// Invalid placement; the host ignores the input and keeps waiting.
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Root session state: the original keeps `{board, current player,
/// game active, mode}` as ambient globals, bundled here into one owner.
pub struct Orchestrator {
    board: Board,
    mode: GameMode,
    current_turn: Mark,
    game_active: bool,
    /// Engine seat for O in PvE mode; `None` in PvP.
    engine: Option<Box<dyn Player>>,
}

impl Orchestrator {
    /// A session with no active game; call [`start_game`](Self::start_game).
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            mode: GameMode::PvP,
            current_turn: Mark::X,
            game_active: false,
            engine: None,
        }
    }

    /// Begins a fresh game in `mode`. In PvE the engine takes the O seat.
    pub fn start_game(&mut self, mode: GameMode) {
        self.mode = mode;
        self.engine = match mode {
            GameMode::PvE => Some(Box::new(MinimaxPlayer::default()) as Box<dyn Player>),
            GameMode::PvP => None,
        };
        self.restart();
        log::info!("started {mode:?} game");
    }

    /// Resets the board for another game in the same mode. X moves first.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.current_turn = Mark::X;
        self.game_active = true;
        log::debug!("board reset, X to move");
    }

    /// External placement for the side currently to move (a cell click in
    /// the host). Rejected while the engine seat is to move in PvE.
    pub fn handle_cell(&mut self, cell: usize) -> Result<GameOutcome, TurnError> {
        if !self.game_active {
            return Err(TurnError::NoActiveGame);
        }
        if self.mode == GameMode::PvE && self.current_turn == Mark::O {
            return Err(TurnError::EngineTurn);
        }
        let mark = self.current_turn;
        let outcome = self.apply(cell, mark)?;
        if let Some(engine) = self.engine.as_mut() {
            engine.opponent_moved(cell);
        }
        Ok(outcome)
    }

    /// Lets the engine seat take its turn. PvE only, O to move.
    pub fn engine_turn(&mut self) -> Result<(usize, GameOutcome), TurnError> {
        if !self.game_active {
            return Err(TurnError::NoActiveGame);
        }
        if self.current_turn != Mark::O {
            return Err(TurnError::NotEngineTurn);
        }
        let engine = self.engine.as_mut().ok_or(TurnError::NotEngineTurn)?;
        let cell = engine
            .get_move(&self.board, Mark::O)
            .ok_or(TurnError::NoActiveGame)?;
        let outcome = self.apply(cell, Mark::O)?;
        Ok((cell, outcome))
    }

    /// Applies a validated placement, re-derives the outcome and either
    /// switches the turn or closes the game.
    fn apply(&mut self, cell: usize, mark: Mark) -> Result<GameOutcome, TurnError> {
        self.board.place(cell, mark)?;
        log::debug!("{mark} plays cell {cell}");

        let outcome = self.board.outcome();
        match outcome {
            GameOutcome::InProgress => {
                self.current_turn = self.current_turn.opposite();
            }
            terminal => {
                self.game_active = false;
                if let Some(engine) = self.engine.as_mut() {
                    engine.game_ended(terminal);
                }
                log::info!("game over: {terminal:?}");
            }
        }
        Ok(outcome)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Side to move. Only meaningful while a game is active.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    pub fn is_active(&self) -> bool {
        self.game_active
    }

    /// Terminal status, derived from the board.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// The completed win line for display highlighting, if any.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.board.winning_line()
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
