//! A single game session
//!
//! Owns the game state, the input queued since the last tick, and the tick
//! interval. Frontends feed it key presses and elapsed time, and draw the
//! snapshots it hands back.

use glam::IVec2;

use crate::settings::Settings;
use crate::sim::{Board, GameEvent, GamePhase, GameState, Heading, Snapshot, TickInput, tick};
use crate::speed::{TickClock, TickInterval};

pub struct Session {
    state: GameState,
    input: TickInput,
    interval: TickInterval,
    clock: TickClock,
    speed_step_ms: i32,
}

impl Session {
    /// Start a session from settings. Uses `settings.seed` or a random one.
    pub fn new(settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(settings, seed)
    }

    pub fn with_seed(settings: &Settings, seed: u64) -> Self {
        let board = settings.board();
        log::info!(
            "New game: {}x{} board, {}-unit cells, seed {}",
            board.width,
            board.height,
            board.cell_size,
            seed
        );
        Self {
            state: GameState::new(board, seed),
            input: TickInput::default(),
            interval: settings.tick_interval(),
            clock: TickClock::new(),
            speed_step_ms: settings.speed_step_ms,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> Board {
        self.state.board
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn interval(&self) -> &TickInterval {
        &self.interval
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Direction for the next tick. A later call before that tick replaces it.
    pub fn queue_direction(&mut self, heading: Heading) {
        self.queue_vector(heading.to_vector());
    }

    /// Like `queue_direction`, for an arbitrary step vector
    pub fn queue_vector(&mut self, direction: IVec2) {
        if self.is_over() {
            return;
        }
        self.input.direction = Some(direction);
    }

    /// Change the tick interval by `delta_ms`, clamped. Returns the new interval.
    pub fn adjust_speed(&mut self, delta_ms: i32) -> u32 {
        if self.is_over() {
            return self.interval.ms();
        }
        let ms = self.interval.adjust(delta_ms);
        log::debug!("Tick interval now {} ms", ms);
        ms
    }

    /// Shorter interval by one step
    pub fn speed_up(&mut self) -> u32 {
        self.adjust_speed(-self.speed_step_ms)
    }

    /// Longer interval by one step
    pub fn slow_down(&mut self) -> u32 {
        self.adjust_speed(self.speed_step_ms)
    }

    /// Run one tick with the queued input, then clear it
    pub fn advance(&mut self) -> Snapshot {
        let input = std::mem::take(&mut self.input);
        let outcome = tick(&mut self.state, &input);

        match outcome.event {
            Some(GameEvent::AppleEaten { length }) => {
                log::debug!(
                    "Apple eaten at tick {}, length {}",
                    self.state.time_ticks,
                    length
                );
            }
            Some(GameEvent::GameOver { length }) => {
                log::info!(
                    "Game over after {} ticks, final length {}",
                    self.state.time_ticks,
                    length
                );
            }
            None => {}
        }

        outcome.snapshot
    }

    /// Feed elapsed wall time and run every tick that is due.
    ///
    /// Returns the latest snapshot if at least one tick ran.
    pub fn update(&mut self, elapsed_ms: f64) -> Option<Snapshot> {
        let due = self.clock.advance(elapsed_ms, &self.interval);
        let mut latest = None;
        for _ in 0..due {
            latest = Some(self.advance());
        }
        latest
    }

    /// Milliseconds until `update` will next run a tick
    pub fn until_next_tick(&self) -> f64 {
        self.clock.until_next(&self.interval)
    }
}
