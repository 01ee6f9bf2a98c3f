//! Terminal snake runner.
//!
//! Uses crossterm for input (keyboard plus mouse drags standing in for
//! swipes) and the framebuffer renderer. The loop here only pumps elapsed
//! time; all tick scheduling lives in `core::GameLoop`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};

use tui_snake::core::{GameLoop, GameState};
use tui_snake::input::{map_key_event, should_quit, SwipeDecoder};
use tui_snake::persist::{default_score_path, FileScoreStore, ScoreStore};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{InputCommand, TickOutcome, PUMP_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = FileScoreStore::new(default_score_path());
    let mut best_saved = store.load();

    let mut game = GameState::new(seed_from_clock());
    game.set_high_score(best_saved);
    let mut game_loop = GameLoop::new(game);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 24);
    let mut swipe = SwipeDecoder::new();

    let pump_duration = Duration::from_millis(PUMP_MS as u64);
    let mut last_pump = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_loop, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next pump.
        let timeout = pump_duration
            .checked_sub(last_pump.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = map_key_event(key) {
                        apply_command(&mut game_loop, cmd);
                    }
                }
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        swipe.press(mouse.column as i32, mouse.row as i32);
                    }
                    MouseEventKind::Up(MouseButton::Left) => {
                        if let Some(dir) = swipe.release(mouse.column as i32, mouse.row as i32) {
                            game_loop.game_mut().queue_direction(dir);
                        }
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // Pump the scheduler.
        if last_pump.elapsed() >= pump_duration {
            last_pump = Instant::now();
            if let Some(outcome) = game_loop.pump(PUMP_MS) {
                if matches!(outcome, TickOutcome::Ate | TickOutcome::Over(_)) {
                    let high = game_loop.game().high_score();
                    if high > best_saved {
                        store.save(high);
                        best_saved = high;
                    }
                }
            }
        }
    }
}

fn apply_command(game_loop: &mut GameLoop, cmd: InputCommand) {
    match cmd {
        InputCommand::Turn(dir) => game_loop.game_mut().queue_direction(dir),
        InputCommand::TogglePause => game_loop.toggle_pause(),
        InputCommand::Restart => game_loop.reset(),
        InputCommand::SetSpeed(speed) => game_loop.set_speed(speed),
    }
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
