// Self-play diagnostic driver.
// Run with: cargo run --release --bin selfplay
// RUST_LOG=debug adds per-move search statistics.

use tictactoe_engine::agent::{MinimaxPlayer, Player, RandomPlayer};
use tictactoe_engine::game_repr::{Board, GameOutcome, Mark};

/// Plays one game to completion, X first.
fn play_game(x: &mut dyn Player, o: &mut dyn Player, verbose: bool) -> GameOutcome {
    let mut board = Board::new();
    let mut to_move = Mark::X;
    loop {
        let seat: &mut dyn Player = match to_move {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };
        let Some(cell) = seat.get_move(&board, to_move) else {
            break board.outcome();
        };
        let name = seat.name().to_string();
        board
            .place(cell, to_move)
            .expect("players must choose open cells");
        if verbose {
            println!("{name} ({to_move}) plays cell {cell}:\n{board}\n");
        }
        match board.outcome() {
            GameOutcome::InProgress => to_move = to_move.opposite(),
            terminal => {
                x.game_ended(terminal);
                o.game_ended(terminal);
                break terminal;
            }
        }
    }
}

fn main() {
    env_logger::init();

    println!("=== Minimax (X) vs Minimax (O) ===");
    let mut x = MinimaxPlayer::new("Minimax X");
    let mut o = MinimaxPlayer::new("Minimax O");
    let outcome = play_game(&mut x, &mut o, true);
    println!("Result: {outcome:?}");
    println!();

    println!("=== Minimax (O) vs Random (X), 50 games ===");
    let mut engine_wins = 0u32;
    let mut draws = 0u32;
    let mut random_wins = 0u32;
    for seed in 0..50 {
        let mut x = RandomPlayer::from_seed(seed);
        let mut o = MinimaxPlayer::new("Minimax O");
        match play_game(&mut x, &mut o, false) {
            GameOutcome::Won(Mark::O) => engine_wins += 1,
            GameOutcome::Won(Mark::X) => random_wins += 1,
            GameOutcome::Draw => draws += 1,
            GameOutcome::InProgress => unreachable!("games are played to completion"),
        }
    }
    println!("engine wins: {engine_wins}, draws: {draws}, random wins: {random_wins}");
}
