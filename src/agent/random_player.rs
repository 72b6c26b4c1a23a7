//! Uniformly random move provider, for property tests and sanity games.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::player::Player;
use crate::game_repr::{Board, Mark};

/// Picks uniformly among the open cells. Seedable so whole-game tests are
/// reproducible.
pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self::from_seed(rand::random())
    }

    /// Reproducible move stream for a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: format!("Random (seed {seed})"),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn get_move(&mut self, board: &Board, _mark: Mark) -> Option<usize> {
        board.available_cells().choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_player_picks_open_cell() {
        let board = Board::from_pattern("XOXXO.O..");
        let mut player = RandomPlayer::from_seed(7);
        for _ in 0..20 {
            let cell = player.get_move(&board, Mark::X).unwrap();
            assert!(board.is_empty(cell), "cell {cell} is not open");
        }
    }

    #[test]
    fn test_random_player_none_on_full_board() {
        let board = Board::from_pattern("XOXXOOOXX");
        let mut player = RandomPlayer::from_seed(7);
        assert_eq!(player.get_move(&board, Mark::X), None);
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::new();
        let mut a = RandomPlayer::from_seed(42);
        let mut b = RandomPlayer::from_seed(42);
        for _ in 0..10 {
            assert_eq!(a.get_move(&board, Mark::X), b.get_move(&board, Mark::X));
        }
    }
}
