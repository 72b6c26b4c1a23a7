//! Player trait: the seam between turn management and move providers.
//!
//! A player is anything that can be asked for a move on the current
//! board — the minimax engine, a random mover, or (in a host application)
//! a human whose input arrives through the UI. The caller owns the
//! authoritative board and hands `get_move` a read-only view; the returned
//! cell is validated and applied by the caller.
//!
//! `get_move` is intentionally synchronous. A turn-based game only ever
//! needs one move at a time, and the engine's search runs to completion
//! once started; a host that wants a "thinking" delay schedules the call
//! itself.

use crate::game_repr::{Board, GameOutcome, Mark};

pub trait Player {
    /// The cell this player wants to mark, or `None` if no move is
    /// possible (terminal board). May block while the player computes.
    fn get_move(&mut self, board: &Board, mark: Mark) -> Option<usize>;

    /// Called after the opposing side's move has been applied.
    fn opponent_moved(&mut self, _cell: usize) {}

    /// Called once when the game reaches a terminal state.
    fn game_ended(&mut self, _outcome: GameOutcome) {}

    /// Display name, for logging and game records.
    fn name(&self) -> &str {
        "Player"
    }
}
