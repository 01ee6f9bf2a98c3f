//! GameView: maps the game state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameLoop;
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{Cell, GameOverCause, RunState};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Lightweight terminal view of the snake board.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game_loop: &GameLoop, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let game = game_loop.game();
        let board_px_w = (game.board().cols() as u16) * self.cell_w;
        let board_px_h = (game.board().rows() as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let field = Style {
            fg: Rgb::new(70, 75, 85),
            bg: Rgb::new(17, 19, 22),
            bold: false,
            dim: true,
        };
        let border = Style {
            fg: Rgb::new(200, 200, 200),
            ..Style::default()
        };

        // Field background with a faint grid dot per cell.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', field);
        for y in 0..game.board().rows() as u16 {
            for x in 0..game.board().cols() as u16 {
                self.put_cell(fb, start_x, start_y, x, y, '·', field);
            }
        }

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Food.
        let food_style = Style {
            fg: Rgb::new(255, 77, 79),
            bg: Rgb::new(17, 19, 22),
            bold: true,
            dim: false,
        };
        self.draw_grid_cell(fb, start_x, start_y, game.food(), '●', food_style);

        // Snake, head distinguished from body.
        let body_style = Style {
            fg: Rgb::new(42, 168, 74),
            bg: Rgb::new(17, 19, 22),
            bold: false,
            dim: false,
        };
        let head_style = Style {
            fg: Rgb::new(64, 196, 99),
            bold: true,
            ..body_style
        };
        for (i, cell) in game.snake().cells().enumerate() {
            let style = if i == 0 { head_style } else { body_style };
            self.draw_grid_cell(fb, start_x, start_y, cell, '█', style);
        }

        self.draw_side_panel(fb, game_loop, viewport, start_x, start_y, frame_w);

        match game_loop.run_state() {
            RunState::Idle => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PRESS SPACE", None);
            }
            RunState::Paused => {
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED", None);
            }
            RunState::GameOver => {
                let title = match game.game_over_cause() {
                    Some(GameOverCause::BoardFull) => "BOARD CLEAR",
                    _ => "GAME OVER",
                };
                let detail = format!("SCORE {}  HIGH {}", game.score(), game.high_score());
                self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, title, Some(&detail));
            }
            RunState::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game_loop: &GameLoop, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game_loop, viewport, &mut fb);
        fb
    }

    fn draw_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell: Cell,
        ch: char,
        style: Style,
    ) {
        if cell.x < 0 || cell.y < 0 {
            return;
        }
        self.put_cell(fb, start_x, start_y, cell.x as u16, cell.y as u16, ch, style);
    }

    fn put_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        game_loop: &GameLoop,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = Style {
            bold: true,
            ..Style::default()
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            ..Style::default()
        };
        let hint = Style {
            dim: true,
            ..value
        };

        let game = game_loop.game();
        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &game.score().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "HIGH", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &game.high_score().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, game_loop.speed().as_str(), value);
        y = y.saturating_add(2);

        for line in [
            "arrows/wasd move",
            "space pause",
            "1/2/3 speed",
            "r reset  q quit",
        ] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        detail: Option<&str>,
    ) {
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            ..Style::default()
        };
        let mid_y = start_y.saturating_add(frame_h / 2);
        self.put_centered(fb, start_x, frame_w, mid_y, title, style);
        if let Some(detail) = detail {
            let detail_style = Style {
                bold: false,
                ..style
            };
            self.put_centered(fb, start_x, frame_w, mid_y + 1, detail, detail_style);
        }
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: Style,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, GameState, Snake};
    use crate::types::Direction;

    fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
        let chars: Vec<char> = needle.chars().collect();
        for y in 0..fb.height() {
            'col: for x in 0..fb.width() {
                for (i, &ch) in chars.iter().enumerate() {
                    match fb.get(x + i as u16, y) {
                        Some(g) if g.ch == ch => {}
                        _ => continue 'col,
                    }
                }
                return true;
            }
        }
        false
    }

    fn glyph_at_cell(fb: &FrameBuffer, view: &GameView, game_loop: &GameLoop, cell: Cell) -> char {
        let board = game_loop.game().board();
        let frame_w = (board.cols() as u16) * view.cell_w + 2;
        let frame_h = (board.rows() as u16) * view.cell_h + 2;
        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;
        let px = start_x + 1 + (cell.x as u16) * view.cell_w;
        let py = start_y + 1 + (cell.y as u16) * view.cell_h;
        fb.get(px, py).unwrap().ch
    }

    #[test]
    fn test_snake_and_food_are_drawn() {
        let game = GameState::new(1);
        let food = game.food();
        let head = game.snake().head();
        let mut gl = GameLoop::new(game);
        gl.start();

        let view = GameView::default();
        let fb = view.render(&gl, Viewport::new(80, 30));

        assert_eq!(glyph_at_cell(&fb, &view, &gl, head), '█');
        assert_eq!(glyph_at_cell(&fb, &view, &gl, food), '●');
    }

    #[test]
    fn test_head_style_differs_from_body() {
        let game = GameState::new(1);
        let head = game.snake().head();
        let body: Vec<Cell> = game.snake().cells().skip(1).collect();
        let mut gl = GameLoop::new(game);
        gl.start();

        let view = GameView::default();
        let fb = view.render(&gl, Viewport::new(80, 30));

        let board = gl.game().board();
        let frame_w = (board.cols() as u16) * 2 + 2;
        let frame_h = (board.rows() as u16) + 2;
        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;
        let style_of = |c: Cell| {
            fb.get(start_x + 1 + (c.x as u16) * 2, start_y + 1 + c.y as u16)
                .unwrap()
                .style
        };

        assert_ne!(style_of(head), style_of(body[0]));
    }

    #[test]
    fn test_idle_overlay() {
        let gl = GameLoop::new(GameState::new(1));
        let fb = GameView::default().render(&gl, Viewport::new(80, 30));
        assert!(contains_text(&fb, "PRESS SPACE"));
    }

    #[test]
    fn test_paused_overlay() {
        let mut gl = GameLoop::new(GameState::new(1));
        gl.start();
        gl.pause();
        let fb = GameView::default().render(&gl, Viewport::new(80, 30));
        assert!(contains_text(&fb, "PAUSED"));
    }

    #[test]
    fn test_game_over_overlay_shows_scores() {
        let board = Board::new(5, 5);
        let snake = Snake::new(Cell::new(4, 2), Direction::Right, 3);
        let game = GameState::from_parts(board, snake, Direction::Right, Cell::new(0, 0), 1);
        let mut gl = GameLoop::new(game);
        gl.start();
        gl.pump(gl.interval_ms());
        assert_eq!(gl.run_state(), RunState::GameOver);

        let fb = GameView::default().render(&gl, Viewport::new(80, 30));
        assert!(contains_text(&fb, "GAME OVER"));
        assert!(contains_text(&fb, "SCORE 0"));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let gl = GameLoop::new(GameState::new(1));
        let fb = GameView::default().render(&gl, Viewport::new(10, 4));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 4);
    }
}
