use anyhow::{Result, bail};
use tracing::{debug, info};

use crate::game::{Direction, GameEngine};
use crate::input::{Command, InputHandler};
use crate::metrics::{GameMetrics, SessionReport};

/// One scheduler period of a script: an optional direction pressed just
/// before the tick fires
pub type ScriptStep = Option<Direction>;

/// Parse a script such as `"dd.s..a"`.
///
/// `w`/`a`/`s`/`d` press a direction, `.` waits one tick, whitespace is
/// ignored. Anything else is rejected.
pub fn parse_script(script: &str) -> Result<Vec<ScriptStep>> {
    let handler = InputHandler::new();
    let mut steps = Vec::with_capacity(script.len());

    for (index, key) in script.chars().enumerate() {
        if key.is_whitespace() {
            continue;
        }
        if key == '.' {
            steps.push(None);
            continue;
        }
        match handler.handle_key(key) {
            Command::Turn(direction) => steps.push(Some(direction)),
            _ => bail!("Unexpected script key {key:?} at position {index}"),
        }
    }

    Ok(steps)
}

/// Deterministic lockstep host.
///
/// Replays a script against the engine with a simulated clock: the clock
/// starts on the first accepted direction and, as in real-time play, every
/// accepted direction fires a tick straight away.
pub struct HeadlessMode {
    engine: GameEngine,
    metrics: GameMetrics,
    clock_running: bool,
}

impl HeadlessMode {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            metrics: GameMetrics::new(),
            clock_running: false,
        }
    }

    /// Run every script step, stopping early once the game ends
    pub fn run(&mut self, script: &[ScriptStep]) -> SessionReport {
        self.metrics.on_game_start();

        for (step, pressed) in script.iter().enumerate() {
            if !self.engine.is_playing() {
                debug!(step, "game ended, remaining script skipped");
                break;
            }

            if let Some(direction) = pressed {
                if self.engine.apply_direction(*direction).is_accepted() {
                    self.metrics.on_input_accepted();
                    self.clock_running = true;
                }
            }

            if self.clock_running {
                self.update_game();
            }
        }

        if !self.engine.is_playing() {
            self.metrics.on_game_over(self.engine.score());
        }
        self.metrics.update();

        let snapshot = self.engine.snapshot();
        info!(
            status = ?snapshot.status,
            score = snapshot.score,
            length = snapshot.chain.len(),
            ticks = snapshot.ticks,
            "headless session finished"
        );
        self.metrics.report(snapshot)
    }

    fn update_game(&mut self) {
        let outcome = self.engine.tick();
        self.metrics.on_tick(&outcome);

        if outcome.ended.is_some() {
            self.clock_running = false;
        }
    }
}
