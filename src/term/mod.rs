//! Terminal module - framebuffer, renderer and the game view
//!
//! `GameView` is pure and testable; `TerminalRenderer` owns the real
//! terminal (raw mode, alternate screen, mouse capture).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
