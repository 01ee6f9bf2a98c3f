//! Input module - adapters that turn terminal events into `InputCommand`s
//!
//! Keyboard and pointer gestures both funnel into the same narrow command
//! enum; the core never learns which modality produced a command.

pub mod map;
pub mod swipe;

pub use map::{map_key_event, should_quit};
pub use swipe::SwipeDecoder;
