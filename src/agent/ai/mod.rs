// Exhaustive minimax engine.
//
// Deterministic (same board always yields the same cell), explores the
// complete game tree below the given position, and scores terminals
// +10 / -10 / 0 from the searching side's perspective.

mod minimax;
mod minimax_player;
mod search;

pub use minimax::{DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use minimax_player::MinimaxPlayer;
pub use search::{best_move, SearchError, SearchResult};
