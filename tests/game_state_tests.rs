//! Simulation semantics: movement, growth, collisions, direction queueing.

use tui_snake::core::{Board, GameState, Snake};
use tui_snake::types::{Cell, Direction, GameOverCause, TickOutcome};

/// A 21x21 game with the snake pinned to the spec's canonical start:
/// [(10,10),(9,10),(8,10)] moving right, food parked out of the way.
fn canonical_game() -> GameState {
    let snake = Snake::from_body([Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]);
    GameState::from_parts(Board::default(), snake, Direction::Right, Cell::new(0, 0), 1)
}

#[test]
fn plain_move_shifts_the_body_without_growing() {
    let mut state = canonical_game();

    assert_eq!(state.advance(), TickOutcome::Moved);

    let body: Vec<Cell> = state.snake().cells().collect();
    assert_eq!(
        body,
        vec![Cell::new(11, 10), Cell::new(10, 10), Cell::new(9, 10)]
    );
    assert_eq!(state.score(), 0);
}

#[test]
fn eating_grows_by_one_and_scores_one() {
    let snake = Snake::from_body([Cell::new(10, 10), Cell::new(9, 10), Cell::new(8, 10)]);
    let mut state =
        GameState::from_parts(Board::default(), snake, Direction::Right, Cell::new(11, 10), 1);

    assert_eq!(state.advance(), TickOutcome::Ate);

    assert_eq!(state.snake().head(), Cell::new(11, 10));
    assert_eq!(state.snake().len(), 4);
    assert_eq!(state.score(), 1);
    // Replacement food is somewhere else, off the body.
    assert_ne!(state.food(), Cell::new(11, 10));
    assert!(!state.snake().contains(state.food()));
}

#[test]
fn leaving_the_board_is_fatal() {
    let snake = Snake::from_body([Cell::new(0, 10), Cell::new(1, 10), Cell::new(2, 10)]);
    let mut state =
        GameState::from_parts(Board::default(), snake, Direction::Left, Cell::new(5, 5), 1);

    assert_eq!(state.advance(), TickOutcome::Over(GameOverCause::Wall));
    assert!(state.game_over());
    // The body is left as it was at the moment of death.
    assert_eq!(state.snake().len(), 3);
}

#[test]
fn running_into_the_body_is_fatal() {
    // Head at (5,5) moving right, body loops back through (6,5).
    let snake = Snake::from_body([
        Cell::new(5, 5),
        Cell::new(4, 5),
        Cell::new(4, 6),
        Cell::new(5, 6),
        Cell::new(6, 6),
        Cell::new(6, 5),
    ]);
    let mut state =
        GameState::from_parts(Board::default(), snake, Direction::Right, Cell::new(0, 0), 1);

    assert_eq!(state.advance(), TickOutcome::Over(GameOverCause::SelfHit));
}

#[test]
fn moving_into_the_current_tail_cell_is_fatal() {
    // The tail has not been popped when the collision check runs, so a tight
    // loop closing onto the tail dies rather than slipping into the vacated
    // cell.
    let snake = Snake::from_body([
        Cell::new(5, 5),
        Cell::new(5, 6),
        Cell::new(6, 6),
        Cell::new(6, 5),
    ]);
    let mut state =
        GameState::from_parts(Board::default(), snake, Direction::Right, Cell::new(0, 0), 1);

    assert_eq!(state.advance(), TickOutcome::Over(GameOverCause::SelfHit));
}

#[test]
fn reversal_requests_are_dropped() {
    let mut state = canonical_game(); // committed: Right

    state.queue_direction(Direction::Left);
    assert_eq!(state.advance(), TickOutcome::Moved);
    // Still moving right.
    assert_eq!(state.snake().head(), Cell::new(11, 10));
}

#[test]
fn reversal_is_checked_against_the_committed_direction() {
    // Committed direction is Up. Queue Up twice, then Down. Down reverses
    // the committed direction, so it is dropped and Up stays queued.
    let snake = Snake::from_body([Cell::new(10, 10), Cell::new(10, 11), Cell::new(10, 12)]);
    let mut state =
        GameState::from_parts(Board::default(), snake, Direction::Up, Cell::new(0, 0), 1);

    state.queue_direction(Direction::Up);
    state.queue_direction(Direction::Up);
    state.queue_direction(Direction::Down);

    assert_eq!(state.advance(), TickOutcome::Moved);
    assert_eq!(state.snake().head(), Cell::new(10, 9));
}

#[test]
fn later_valid_request_wins_within_one_tick() {
    // Committed Right; queue Up then Down. Down does not reverse the
    // committed direction, only the queued one, so it overwrites.
    let mut state = canonical_game();

    state.queue_direction(Direction::Up);
    state.queue_direction(Direction::Down);

    assert_eq!(state.advance(), TickOutcome::Moved);
    assert_eq!(state.snake().head(), Cell::new(10, 11));
}

#[test]
fn queued_direction_does_not_move_the_snake_before_the_tick() {
    let mut state = canonical_game();
    let before: Vec<Cell> = state.snake().cells().collect();

    state.queue_direction(Direction::Up);
    let after: Vec<Cell> = state.snake().cells().collect();

    assert_eq!(before, after);
}

#[test]
fn high_score_tracks_the_best_score() {
    let snake = Snake::from_body([Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)]);
    let mut state =
        GameState::from_parts(Board::default(), snake, Direction::Right, Cell::new(6, 5), 1);

    assert_eq!(state.advance(), TickOutcome::Ate);
    assert_eq!(state.high_score(), 1);

    state.reset();
    assert_eq!(state.score(), 0);
    assert_eq!(state.high_score(), 1);
}

#[test]
fn invariants_hold_over_a_long_random_run() {
    // Drive a seeded game with a fixed steering pattern until it dies (or we
    // give up). At every step the body stays in bounds, pairwise distinct,
    // the food stays off the body, and length/score only change on Ate.
    let turns = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Left,
    ];

    let mut state = GameState::new(20240817);
    let mut prev_len = state.snake().len();
    let mut prev_score = state.score();

    for step in 0..10_000 {
        state.queue_direction(turns[step % turns.len()]);
        let outcome = state.advance();

        if let TickOutcome::Over(_) = outcome {
            break;
        }

        let body: Vec<Cell> = state.snake().cells().collect();
        for (i, a) in body.iter().enumerate() {
            assert!(state.board().contains(*a), "cell out of bounds at step {step}");
            for b in body.iter().skip(i + 1) {
                assert_ne!(a, b, "self-overlap at step {step}");
            }
        }
        assert!(!state.snake().contains(state.food()));

        match outcome {
            TickOutcome::Moved => {
                assert_eq!(state.snake().len(), prev_len);
                assert_eq!(state.score(), prev_score);
            }
            TickOutcome::Ate => {
                assert_eq!(state.snake().len(), prev_len + 1);
                assert_eq!(state.score(), prev_score + 1);
            }
            TickOutcome::Over(_) => unreachable!(),
        }
        prev_len = state.snake().len();
        prev_score = state.score();
    }
}
