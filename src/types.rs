//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (cells)
pub const GRID_COLS: i8 = 21;
pub const GRID_ROWS: i8 = 21;

/// Snake length at game start
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Cadence at which the runner pumps the game loop (milliseconds)
pub const PUMP_MS: u32 = 16;

/// Default simulation tick interval (milliseconds)
pub const DEFAULT_TICK_MS: u32 = 130;

/// Minimum pointer displacement for a drag to count as a swipe
pub const SWIPE_THRESHOLD: i32 = 20;

/// One grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `direction`.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit displacement, y growing downward.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` would reverse this direction in place.
    pub fn is_reverse_of(&self, other: Direction) -> bool {
        *self == other.opposite()
    }
}

/// Tick interval presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

impl Speed {
    pub fn interval_ms(&self) -> u32 {
        match self {
            Speed::Slow => 200,
            Speed::Normal => DEFAULT_TICK_MS,
            Speed::Fast => 90,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Normal => "normal",
            Speed::Fast => "fast",
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed::Normal
    }
}

/// Loop state machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    /// Head left the board
    Wall,
    /// Head ran into the body
    SelfHit,
    /// Snake fills the board, nowhere left to place food
    BoardFull,
}

/// Result of a single simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Snake moved one cell, length unchanged
    Moved,
    /// Head reached the food, snake grew by one
    Ate,
    Over(GameOverCause),
}

/// The narrow command surface every input adapter funnels into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Turn(Direction),
    TogglePause,
    Restart,
    SetSpeed(Speed),
}
