//! Perfect-play properties of the minimax solver

use rand::{Rng, SeedableRng, rngs::StdRng};
use ttt_oracle::{Action, Board, Player, solver};

#[test]
fn perfect_play_from_empty_board_is_a_draw() {
    let mut board = Board::new();
    let mut moves = 0;

    while !board.is_terminal() {
        let action = solver::optimal_move(&board).expect("non-terminal position has a move");
        board = board.apply(action).unwrap();
        moves += 1;
    }

    assert!(board.is_draw(), "perfect play should end in a draw");
    assert_eq!(board.utility(), 0);
    assert_eq!(moves, 9, "a perfect-play draw fills the board");
}

#[test]
fn immediate_win_is_taken() {
    // X X .
    // O O .
    // . . .
    let board = Board::from_string("XX.OO....").unwrap();
    assert_eq!(board.current_player(), Player::X);
    assert_eq!(solver::optimal_move(&board), Some(Action::new(0, 2)));

    let won = board.apply(Action::new(0, 2)).unwrap();
    assert_eq!(won.winner(), Some(Player::X));
    assert_eq!(won.utility(), 1);
}

#[test]
fn forced_loss_still_produces_a_move() {
    // X X .
    // X O .
    // . . O
    // O cannot cover both threats, but must still get a move
    let board = Board::from_string("XX.XO...O").unwrap();
    assert!(!board.is_terminal());
    assert_eq!(board.current_player(), Player::O);

    let action = solver::optimal_move(&board).expect("a losing position still has a move");
    assert!(board.available_actions().contains(&action));
    assert_eq!(solver::evaluate(&board).value, 1);
}

#[test]
fn every_opening_draws_under_perfect_play() {
    let empty = Board::new();
    assert_eq!(solver::evaluate(&empty).value, 0);
    assert_eq!(solver::optimal_moves(&empty).len(), 9);
}

fn random_action(board: &Board, rng: &mut StdRng) -> Action {
    let actions = board.available_actions();
    actions[rng.gen_range(0..actions.len())]
}

fn play_engine_vs_random(engine: Player, seed: u64) -> Option<Player> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();

    while !board.is_terminal() {
        let action = if board.current_player() == engine {
            solver::optimal_move(&board).expect("non-terminal position has a move")
        } else {
            random_action(&board, &mut rng)
        };
        board = board.apply(action).unwrap();
    }

    board.winner()
}

#[test]
fn engine_never_loses_to_a_random_opponent() {
    for seed in 0..10 {
        assert_ne!(
            play_engine_vs_random(Player::X, seed),
            Some(Player::O),
            "engine playing X lost with seed {seed}"
        );
        assert_ne!(
            play_engine_vs_random(Player::O, seed),
            Some(Player::X),
            "engine playing O lost with seed {seed}"
        );
    }
}
