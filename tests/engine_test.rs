// Whole-game properties of the minimax engine, driven through the public
// API: the engine never loses, repeated searches are identical, and the
// session layer enforces the turn contract end to end.

use tictactoe_engine::agent::ai::best_move;
use tictactoe_engine::agent::{MinimaxPlayer, Player, RandomPlayer};
use tictactoe_engine::game_repr::{Board, GameOutcome, Mark};
use tictactoe_engine::orchestrator::{GameMode, Orchestrator};

/// Plays one game to completion, X moving first.
fn play_game(x: &mut dyn Player, o: &mut dyn Player) -> GameOutcome {
    let mut board = Board::new();
    let mut to_move = Mark::X;
    loop {
        let seat: &mut dyn Player = match to_move {
            Mark::X => &mut *x,
            Mark::O => &mut *o,
        };
        let cell = seat
            .get_move(&board, to_move)
            .expect("active game must have a move");
        board.place(cell, to_move).expect("chosen cell must be open");
        match board.outcome() {
            GameOutcome::InProgress => to_move = to_move.opposite(),
            terminal => return terminal,
        }
    }
}

#[test]
fn engine_vs_engine_is_always_a_draw() {
    let mut x = MinimaxPlayer::new("X");
    let mut o = MinimaxPlayer::new("O");
    assert_eq!(play_game(&mut x, &mut o), GameOutcome::Draw);
}

#[test]
fn engine_as_second_mover_never_loses_to_random() {
    for seed in 0..100 {
        let mut x = RandomPlayer::from_seed(seed);
        let mut o = MinimaxPlayer::new("O");
        let outcome = play_game(&mut x, &mut o);
        assert_ne!(
            outcome,
            GameOutcome::Won(Mark::X),
            "engine lost as O against seed {seed}"
        );
    }
}

#[test]
fn engine_as_first_mover_never_loses_to_random() {
    for seed in 0..100 {
        let mut x = MinimaxPlayer::new("X");
        let mut o = RandomPlayer::from_seed(seed);
        let outcome = play_game(&mut x, &mut o);
        assert_ne!(
            outcome,
            GameOutcome::Won(Mark::O),
            "engine lost as X against seed {seed}"
        );
    }
}

#[test]
fn search_is_idempotent_and_leaves_the_board_alone() {
    let board = Board::from_pattern("X...O..X.");
    let snapshot = board.clone();
    let first = best_move(&board, Mark::O).unwrap();
    let second = best_move(&board, Mark::O).unwrap();
    assert_eq!(first, second);
    assert_eq!(board, snapshot);
}

#[test]
fn engine_takes_a_win_over_a_block() {
    // Both sides threaten their row; O to move must complete its own
    let board = Board::from_pattern("OO.XX....");
    let result = best_move(&board, Mark::O).unwrap();
    assert_eq!(result.cell, 2);
    assert_eq!(result.score, 10);
}

#[test]
fn pve_session_with_optimal_human_draws() {
    // The human seat also plays perfectly; every PvE game must end drawn.
    let mut session = Orchestrator::new();
    session.start_game(GameMode::PvE);
    let mut human = MinimaxPlayer::new("Human X");
    loop {
        let cell = human
            .get_move(session.board(), Mark::X)
            .expect("active game must have a move");
        if session.handle_cell(cell).unwrap() != GameOutcome::InProgress {
            break;
        }
        let (_, outcome) = session.engine_turn().unwrap();
        if outcome != GameOutcome::InProgress {
            break;
        }
    }
    assert_eq!(session.outcome(), GameOutcome::Draw);
    assert_eq!(session.winning_line(), None);
}

#[test]
fn pve_session_punishes_a_blunder() {
    // X opens on an edge and then plays the lowest open cell; perfect
    // play converts this into an engine win well before the board fills.
    let mut session = Orchestrator::new();
    session.start_game(GameMode::PvE);
    let outcome = loop {
        let cell = session.board().available_cells()[0];
        let outcome = session.handle_cell(cell).unwrap();
        if outcome != GameOutcome::InProgress {
            break outcome;
        }
        let (_, outcome) = session.engine_turn().unwrap();
        if outcome != GameOutcome::InProgress {
            break outcome;
        }
    };
    assert_ne!(outcome, GameOutcome::Won(Mark::X));
    if outcome == GameOutcome::Won(Mark::O) {
        assert!(session.winning_line().is_some());
    }
}
