//! Game state module - the per-tick snake simulation
//!
//! Owns the board, the snake body, the committed and queued directions, the
//! food cell and the scores. The only mutators are `queue_direction` (input
//! side) and `advance` (tick side); everything else observes.

use std::collections::VecDeque;

use crate::core::{Board, SimpleRng};
use crate::types::{
    Cell, Direction, GameOverCause, TickOutcome, INITIAL_SNAKE_LEN,
};

/// The snake body, head at the front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Create a snake of `len` cells with the given head, trailing segments
    /// laid out behind it (opposite the travel direction).
    pub fn new(head: Cell, direction: Direction, len: usize) -> Self {
        assert!(len >= 1, "snake must have a head");
        let back = direction.opposite();
        let mut body = VecDeque::with_capacity(len + 1);
        body.push_back(head);
        for i in 1..len {
            let prev = body[i - 1];
            body.push_back(prev.step(back));
        }
        Self { body }
    }

    /// Build a snake from explicit cells, head first. Deterministic
    /// construction for tests and replays.
    pub fn from_body(cells: impl IntoIterator<Item = Cell>) -> Self {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        assert!(!body.is_empty(), "snake must have a head");
        Self { body }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Body cells from head to tail.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    fn pop_tail(&mut self) {
        self.body.pop_back();
    }
}

/// Complete simulation state for one game
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    snake: Snake,
    /// Direction committed at the last tick boundary.
    direction: Direction,
    /// Direction that will be committed at the next tick boundary.
    queued: Direction,
    food: Cell,
    score: u32,
    high_score: u32,
    over: Option<GameOverCause>,
    rng: SimpleRng,
}

impl GameState {
    /// Create a fresh game on the default board with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(Board::default(), seed)
    }

    /// Create a fresh game on a custom board
    pub fn with_board(board: Board, seed: u32) -> Self {
        let mut state = Self {
            board,
            snake: Snake::new(board.center(), Direction::Right, INITIAL_SNAKE_LEN),
            direction: Direction::Right,
            queued: Direction::Right,
            food: board.center(),
            score: 0,
            high_score: 0,
            over: None,
            rng: SimpleRng::new(seed),
        };
        state.reset();
        state
    }

    /// Assemble a game from explicit parts.
    ///
    /// This skips random placement entirely, so scenarios can pin the snake,
    /// direction and food exactly. `food` must not lie on the snake.
    pub fn from_parts(
        board: Board,
        snake: Snake,
        direction: Direction,
        food: Cell,
        seed: u32,
    ) -> Self {
        debug_assert!(snake.cells().all(|c| board.contains(c)));
        debug_assert!(!snake.contains(food));
        Self {
            board,
            snake,
            direction,
            queued: direction,
            food,
            score: 0,
            high_score: 0,
            over: None,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Seed the session best, typically from the persisted store at startup.
    pub fn set_high_score(&mut self, high_score: u32) {
        self.high_score = self.high_score.max(high_score);
    }

    pub fn game_over(&self) -> bool {
        self.over.is_some()
    }

    pub fn game_over_cause(&self) -> Option<GameOverCause> {
        self.over
    }

    /// Queue a direction change for the next tick.
    ///
    /// The request is dropped when it would reverse the direction committed at
    /// the last tick boundary; the snake cannot fold back onto its own neck
    /// within a single tick. Later valid requests within the same tick simply
    /// overwrite earlier ones, so rapid input coalesces to one change.
    pub fn queue_direction(&mut self, direction: Direction) {
        if direction.is_reverse_of(self.direction) {
            return;
        }
        self.queued = direction;
    }

    /// Run one simulation tick.
    pub fn advance(&mut self) -> TickOutcome {
        if let Some(cause) = self.over {
            return TickOutcome::Over(cause);
        }

        // Commit the queued direction at the tick boundary.
        self.direction = self.queued;
        let new_head = self.snake.head().step(self.direction);

        // Wall first, then body. The tail counts: it has not been popped yet
        // this tick, so moving into it is fatal.
        if !self.board.contains(new_head) {
            self.over = Some(GameOverCause::Wall);
            return TickOutcome::Over(GameOverCause::Wall);
        }
        if self.snake.contains(new_head) {
            self.over = Some(GameOverCause::SelfHit);
            return TickOutcome::Over(GameOverCause::SelfHit);
        }

        self.snake.push_head(new_head);

        if new_head == self.food {
            // Growth tick: the tail stays, length goes up by one.
            self.score += 1;
            if self.score > self.high_score {
                self.high_score = self.score;
            }
            if !self.place_food() {
                self.over = Some(GameOverCause::BoardFull);
                return TickOutcome::Over(GameOverCause::BoardFull);
            }
            return TickOutcome::Ate;
        }

        self.snake.pop_tail();
        TickOutcome::Moved
    }

    /// Reinitialize for a new game.
    ///
    /// The snake goes back to three segments centered on the board moving
    /// rightward and the score zeroes. The high score and the RNG sequence
    /// carry over.
    pub fn reset(&mut self) {
        self.snake = Snake::new(self.board.center(), Direction::Right, INITIAL_SNAKE_LEN);
        self.direction = Direction::Right;
        self.queued = Direction::Right;
        self.score = 0;
        self.over = None;
        let placed = self.place_food();
        debug_assert!(placed, "board too small for the initial snake");
    }

    /// Place food on a uniformly random free cell.
    ///
    /// Counts free cells before sampling, so the full-board case is detected
    /// up front and selection always terminates. Returns false when the snake
    /// occupies every cell.
    fn place_food(&mut self) -> bool {
        let free = self.board.capacity() - self.snake.len();
        if free == 0 {
            return false;
        }

        // Walk to the k-th cell not covered by the snake.
        let mut k = self.rng.next_range(free as u32);
        for idx in 0..self.board.capacity() {
            let cell = self.board.cell_at(idx);
            if self.snake.contains(cell) {
                continue;
            }
            if k == 0 {
                self.food = cell;
                return true;
            }
            k -= 1;
        }
        unreachable!("free cell count disagrees with occupancy scan");
    }
}
