// Minimax Search
//
// Exhaustive adversarial search over the full game tree. Scores are fixed
// to the searching side's perspective (+10 its win, -10 the opponent's,
// 0 a full-board draw) rather than negated per ply: the searching side's
// turns maximize, the opponent's turns minimize. There is no pruning and
// no depth preference — the tree below a 3x3 board is small enough to
// enumerate outright, and a forced win scores +10 no matter how distant.
//
// The function returns (score, best_cell) for the side to move. Candidates
// are explored in ascending cell order and ties keep the first best cell
// encountered, so move choice is fully deterministic.

use crate::game_repr::{Board, Mark};

/// Terminal score when the searching side has won.
pub const WIN_SCORE: i32 = 10;
/// Terminal score when the opposing side has won.
pub const LOSS_SCORE: i32 = -10;
/// Terminal score for a full board with no winner.
pub const DRAW_SCORE: i32 = 0;

/// Recursive minimax step.
///
/// `to_move` places a mark at this ply; `searcher` is the side the scores
/// are anchored to. `board` is mutated while candidates are explored and
/// restored before every return. `nodes` counts visited positions.
pub fn minimax(
    board: &mut Board,
    to_move: Mark,
    searcher: Mark,
    nodes: &mut u64,
) -> (i32, Option<usize>) {
    *nodes += 1;

    // Base cases, checked before generating any candidate: the opponent's
    // win first, then the searcher's, then the full-board draw.
    if board.check_win(searcher.opposite()) {
        return (LOSS_SCORE, None);
    }
    if board.check_win(searcher) {
        return (WIN_SCORE, None);
    }
    if board.is_full() {
        return (DRAW_SCORE, None);
    }

    let maximizing = to_move == searcher;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_cell = None;

    for cell in board.available_cells() {
        board.set_unchecked(cell, to_move);
        let (score, _) = minimax(board, to_move.opposite(), searcher, nodes);
        board.clear(cell);

        // Strict comparisons keep the first best candidate in scan order.
        if (maximizing && score > best_score) || (!maximizing && score < best_score) {
            best_score = score;
            best_cell = Some(cell);
        }
    }

    (best_score, best_cell)
}
