//! Terminal snake.
//!
//! The simulation lives in [`core`] and is pure: a [`core::GameState`] that
//! advances one tick at a time and a [`core::GameLoop`] that schedules those
//! ticks from pumped wall-clock time. [`input`] adapters translate key and
//! mouse events into one narrow command enum, [`term`] renders through a
//! framebuffer, and [`persist`] keeps the high score across sessions.

pub mod core;
pub mod input;
pub mod persist;
pub mod term;
pub mod types;
