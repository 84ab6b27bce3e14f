use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing::{debug, info};

use crate::game::GameEngine;
use crate::host::TickScheduler;
use crate::input::{Command, InputHandler};
use crate::metrics::{GameMetrics, SessionReport};

enum HostEvent {
    Input(Option<String>),
    Tick,
    Interrupt,
}

/// Real-time host reading commands line by line.
///
/// The tick clock only runs while a game is in motion: it is re-armed on
/// every accepted direction and stopped when the game ends. Closing the
/// input lets the current game play out before exiting.
pub struct RealtimeMode {
    engine: GameEngine,
    metrics: GameMetrics,
    input_handler: InputHandler,
    scheduler: TickScheduler,
    input_closed: bool,
    should_quit: bool,
}

impl RealtimeMode {
    pub fn new(engine: GameEngine) -> Self {
        let scheduler = TickScheduler::new(engine.config().tick_interval());
        Self {
            engine,
            metrics: GameMetrics::new(),
            input_handler: InputHandler::new(),
            scheduler,
            input_closed: false,
            should_quit: false,
        }
    }

    /// Play from stdin until quit, Ctrl-C, or end of input and game
    pub async fn run(&mut self) -> Result<SessionReport> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        self.run_with_input(&mut lines).await
    }

    pub async fn run_with_input<R>(&mut self, lines: &mut Lines<R>) -> Result<SessionReport>
    where
        R: AsyncBufRead + Unpin,
    {
        self.metrics.on_game_start();
        info!(
            rows = self.engine.board().rows(),
            columns = self.engine.board().columns(),
            tick_ms = self.scheduler.period().as_millis() as u64,
            "session started"
        );

        loop {
            let event = tokio::select! {
                line = lines.next_line(), if !self.input_closed => {
                    HostEvent::Input(line.context("Failed to read command")?)
                }
                _ = self.scheduler.tick() => HostEvent::Tick,
                _ = tokio::signal::ctrl_c() => HostEvent::Interrupt,
            };

            match event {
                HostEvent::Input(Some(line)) => self.handle_line(&line),
                HostEvent::Input(None) => {
                    debug!("input closed");
                    self.input_closed = true;
                }
                HostEvent::Tick => self.update_game(),
                HostEvent::Interrupt => self.should_quit = true,
            }

            if self.input_closed && !self.scheduler.is_running() {
                self.should_quit = true;
            }
            if self.should_quit {
                break;
            }
        }

        self.metrics.update();
        Ok(self.metrics.report(self.engine.snapshot()))
    }

    fn handle_line(&mut self, line: &str) {
        match self.input_handler.handle_line(line) {
            Command::Turn(direction) => {
                if self.engine.apply_direction(direction).is_accepted() {
                    self.metrics.on_input_accepted();
                    self.scheduler.restart();
                }
            }
            Command::Restart => self.reset_game(),
            Command::Quit => self.should_quit = true,
            Command::None => debug!(line, "unrecognised command"),
        }
    }

    fn update_game(&mut self) {
        let outcome = self.engine.tick();
        self.metrics.on_tick(&outcome);
        debug!(
            head = ?self.engine.chain().head(),
            length = self.engine.chain().len(),
            score = self.engine.score(),
            "tick"
        );

        if outcome.ended.is_some() {
            self.scheduler.stop();
            self.metrics.on_game_over(self.engine.score());
            info!(
                high_score = self.metrics.high_score,
                games_played = self.metrics.games_played,
                "send 'r' to restart or 'q' to quit"
            );
        }
    }

    fn reset_game(&mut self) {
        if self.engine.is_playing() && self.engine.ticks() > 0 {
            self.metrics.on_game_over(self.engine.score());
        }
        self.engine.init_game();
        self.scheduler.stop();
        self.metrics.on_game_start();
        info!("game restarted");
    }
}
