//! Core module - pure game logic with no external dependencies
//!
//! Everything here is deterministic per seed and free of I/O: the board, the
//! snake simulation, the tick scheduler and the RNG. The terminal, input and
//! persistence layers observe it from the outside.

pub mod board;
pub mod game_loop;
pub mod game_state;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use game_loop::GameLoop;
pub use game_state::{GameState, Snake};
pub use rng::SimpleRng;
