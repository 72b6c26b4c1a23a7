//! Engine seat: perfect play through the exhaustive minimax search.

use super::search::best_move;
use crate::agent::player::Player;
use crate::game_repr::{Board, GameOutcome, Mark};

/// [`Player`] backed by [`best_move`]. Deterministic: the same board
/// always yields the same cell. There are no difficulty tiers — the
/// search is exhaustive, so this seat plays perfectly or not at all.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for MinimaxPlayer {
    fn default() -> Self {
        Self::new("Minimax")
    }
}

impl Player for MinimaxPlayer {
    fn get_move(&mut self, board: &Board, mark: Mark) -> Option<usize> {
        match best_move(board, mark) {
            Ok(result) => {
                log::debug!(
                    "[{}] cell {} (score {}, {} nodes, {} ms)",
                    self.name,
                    result.cell,
                    result.score,
                    result.nodes,
                    result.time_ms
                );
                Some(result.cell)
            }
            Err(err) => {
                log::warn!("[{}] asked to move on a finished game: {err}", self.name);
                None
            }
        }
    }

    fn game_ended(&mut self, outcome: GameOutcome) {
        log::info!("[{}] game over: {outcome:?}", self.name);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
