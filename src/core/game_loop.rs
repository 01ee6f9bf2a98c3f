//! Game loop module - tick scheduling as an explicit state machine
//!
//! There is no OS timer here. The runner pumps elapsed wall-clock time into
//! `pump`, and the loop decides when a tick boundary has been crossed. A
//! single accumulator stands in for the single-timer invariant: there is
//! nothing to double-start and nothing to leak.

use crate::core::GameState;
use crate::types::{RunState, Speed, TickOutcome};

/// Schedules `GameState::advance` at the configured interval
#[derive(Debug, Clone)]
pub struct GameLoop {
    game: GameState,
    run_state: RunState,
    speed: Speed,
    /// Milliseconds accumulated toward the next tick boundary.
    acc_ms: u32,
}

impl GameLoop {
    pub fn new(game: GameState) -> Self {
        Self {
            game,
            run_state: RunState::Idle,
            speed: Speed::default(),
            acc_ms: 0,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn interval_ms(&self) -> u32 {
        self.speed.interval_ms()
    }

    /// Begin ticking.
    ///
    /// Idempotent while already Running. From GameOver this is
    /// reset-then-start, matching the start button.
    pub fn start(&mut self) {
        match self.run_state {
            RunState::Running => {}
            RunState::GameOver => {
                self.game.reset();
                self.begin();
            }
            RunState::Idle | RunState::Paused => self.begin(),
        }
    }

    /// Stop ticking without touching the game state.
    pub fn pause(&mut self) {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.run_state == RunState::Paused {
            self.run_state = RunState::Running;
        }
    }

    /// The pause key.
    ///
    /// Idle and Paused start/resume, Running pauses. From GameOver this
    /// deliberately restarts rather than resuming: no mid-game snapshot
    /// exists once a game has ended.
    pub fn toggle_pause(&mut self) {
        match self.run_state {
            RunState::Idle => self.begin(),
            RunState::Running => self.run_state = RunState::Paused,
            RunState::Paused => self.run_state = RunState::Running,
            RunState::GameOver => {
                self.game.reset();
                self.begin();
            }
        }
    }

    /// The reset button: fresh game, loop stopped.
    pub fn reset(&mut self) {
        self.game.reset();
        self.run_state = RunState::Idle;
        self.acc_ms = 0;
    }

    /// Change the tick interval.
    ///
    /// Takes effect immediately; any partial progress toward the old tick
    /// boundary is discarded.
    pub fn set_speed(&mut self, speed: Speed) {
        if self.speed != speed {
            self.speed = speed;
            self.acc_ms = 0;
        }
    }

    /// Feed elapsed time into the scheduler.
    ///
    /// Crossing the interval boundary runs exactly one tick; the remainder is
    /// discarded, so a stalled runner never fast-forwards the snake. Returns
    /// the tick outcome when a tick fired.
    pub fn pump(&mut self, elapsed_ms: u32) -> Option<TickOutcome> {
        if self.run_state != RunState::Running {
            return None;
        }

        self.acc_ms += elapsed_ms;
        if self.acc_ms < self.interval_ms() {
            return None;
        }
        self.acc_ms = 0;

        let outcome = self.game.advance();
        if matches!(outcome, TickOutcome::Over(_)) {
            self.run_state = RunState::GameOver;
        }
        Some(outcome)
    }

    fn begin(&mut self) {
        self.run_state = RunState::Running;
        self.acc_ms = 0;
    }
}
