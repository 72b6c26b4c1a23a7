// Search entry point.
//
// Validates the non-terminal precondition, clones the caller's board and
// runs the exhaustive minimax below it. The caller's board is never
// touched; statistics go to the debug log.

use std::time::Instant;

use thiserror::Error;

use super::minimax::minimax;
use crate::game_repr::{Board, GameOutcome, Mark};

/// Contract violation: the engine was asked to move on a board that is
/// already decided. Correct turn management never produces this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search invoked on a terminal board ({0:?})")]
    Terminal(GameOutcome),
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Optimal cell for the searching side.
    pub cell: usize,
    /// Game-theoretic value of that cell (+10 / -10 / 0).
    pub score: i32,
    /// Positions visited, root included.
    pub nodes: u64,
    /// Wall-clock search time in milliseconds.
    pub time_ms: u64,
}

/// Computes the game-theoretically optimal cell for `mark` on `board`.
///
/// Both sides are assumed to play perfectly for the rest of the game.
/// When several cells share the best score, the lowest-indexed one is
/// returned (ascending scan, first best kept).
///
/// # Errors
///
/// [`SearchError::Terminal`] when `board` already has a winner or is
/// full — callers must check terminal status before asking for a move.
pub fn best_move(board: &Board, mark: Mark) -> Result<SearchResult, SearchError> {
    match board.outcome() {
        GameOutcome::InProgress => {}
        terminal => return Err(SearchError::Terminal(terminal)),
    }

    let start = Instant::now();
    let mut nodes = 0u64;
    let mut search_board = board.clone();
    let (score, cell) = minimax(&mut search_board, mark, mark, &mut nodes);
    debug_assert_eq!(search_board, *board, "search must restore the board");

    let Some(cell) = cell else {
        unreachable!("a non-terminal board has at least one open cell");
    };

    let time_ms = start.elapsed().as_millis() as u64;
    log::debug!("minimax for {mark}: cell {cell}, score {score}, {nodes} nodes in {time_ms} ms");

    Ok(SearchResult {
        cell,
        score,
        nodes,
        time_ms,
    })
}
