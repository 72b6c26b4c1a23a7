// Precomputed win-line table, constant for the lifetime of the process.

/// The 8 winning index triples. Enumeration order is fixed (rows, then
/// columns, then diagonals) and observable through
/// [`Board::winning_line`](super::Board::winning_line).
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // columns
    [0, 4, 8], [2, 4, 6],            // diagonals
];
