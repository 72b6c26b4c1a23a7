use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

use super::lines::WIN_LINES;
use super::mark::{Cell, Mark};

/// Number of squares on the board.
pub const BOARD_CELLS: usize = 9;

/// Rejected placement. Recovered locally by the caller — an occupied-cell
/// click is simply ignored, never a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell index {0} is out of range (0-8)")]
    OutOfRange(usize),
    #[error("cell {0} is already taken")]
    Occupied(usize),
}

/// Game status derived from a board. Never stored separately from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won(Mark),
    Draw,
}

/// 3x3 board, cells in row-major order (index = row * 3 + col).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// All-empty board, as handed out at game start and on restart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from a 9-character row-major pattern of `X`, `O`
    /// and `.`, e.g. `"XX.O....."`. Panics on malformed input; intended
    /// for fixtures and diagnostics, not user input.
    pub fn from_pattern(pattern: &str) -> Self {
        assert_eq!(
            pattern.len(),
            BOARD_CELLS,
            "board pattern must be exactly {BOARD_CELLS} characters"
        );
        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, c) in pattern.chars().enumerate() {
            cells[i] = match c {
                'X' => Cell::Taken(Mark::X),
                'O' => Cell::Taken(Mark::O),
                '.' => Cell::Empty,
                _ => panic!("invalid board pattern character: {c:?}"),
            };
        }
        Self { cells }
    }

    /// Cell at `cell`, or `None` out of range.
    pub fn get(&self, cell: usize) -> Option<Cell> {
        self.cells.get(cell).copied()
    }

    /// True iff `cell` is in range and unoccupied.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Cell::Empty))
    }

    /// Validated placement of `mark` at `cell`.
    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<(), BoardError> {
        match self.get(cell) {
            None => Err(BoardError::OutOfRange(cell)),
            Some(Cell::Taken(_)) => Err(BoardError::Occupied(cell)),
            Some(Cell::Empty) => {
                self.cells[cell] = Cell::Taken(mark);
                Ok(())
            }
        }
    }

    /// Unvalidated placement for the search's place-then-undo loop.
    /// Caller guarantees `cell` is in range and empty.
    pub(crate) fn set_unchecked(&mut self, cell: usize, mark: Mark) {
        self.cells[cell] = Cell::Taken(mark);
    }

    /// Re-opens `cell`; the undo half of the search loop.
    pub(crate) fn clear(&mut self, cell: usize) {
        self.cells[cell] = Cell::Empty;
    }

    /// Open cells in ascending index order. The order is load-bearing:
    /// the search keeps the first best-scoring candidate it meets in this
    /// order, so enumeration order decides ties.
    pub fn available_cells(&self) -> SmallVec<[usize; BOARD_CELLS]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// True iff any win line is fully taken by `mark`.
    pub fn check_win(&self, mark: Mark) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Cell::Taken(mark)))
    }

    /// The first fully-owned win line in the fixed rows/columns/diagonals
    /// order, for display highlighting.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        WIN_LINES
            .iter()
            .copied()
            .find(|line| match self.cells[line[0]] {
                Cell::Taken(mark) => line.iter().all(|&i| self.cells[i] == Cell::Taken(mark)),
                Cell::Empty => false,
            })
    }

    /// True iff no open cells remain.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Terminal status of this board.
    pub fn outcome(&self) -> GameOutcome {
        for mark in [Mark::X, Mark::O] {
            if self.check_win(mark) {
                return GameOutcome::Won(mark);
            }
        }
        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-+-+-")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * 3 + col] {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Taken(mark) => write!(f, "{mark}")?,
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
