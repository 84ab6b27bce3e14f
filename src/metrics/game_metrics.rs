use serde::Serialize;
use std::time::{Duration, Instant};

use crate::game::{GameSnapshot, TickOutcome};

/// Statistics for one host session, spanning restarts
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub high_score: u64,
    pub games_played: u32,
    pub items_eaten: u64,
    pub accepted_inputs: u64,
}

/// Summary emitted when a session finishes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub final_state: GameSnapshot,
    pub games_played: u32,
    pub high_score: u64,
    pub items_eaten: u64,
    pub accepted_inputs: u64,
    pub elapsed: String,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            high_score: 0,
            games_played: 0,
            items_eaten: 0,
            accepted_inputs: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.start_time.elapsed();
    }

    pub fn on_game_start(&mut self) {
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn on_input_accepted(&mut self) {
        self.accepted_inputs += 1;
    }

    pub fn on_tick(&mut self, outcome: &TickOutcome) {
        if outcome.ate_item {
            self.items_eaten += 1;
        }
    }

    pub fn on_game_over(&mut self, final_score: u64) {
        self.games_played += 1;
        if final_score > self.high_score {
            self.high_score = final_score;
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    pub fn report(&self, final_state: GameSnapshot) -> SessionReport {
        SessionReport {
            final_state,
            games_played: self.games_played,
            high_score: self.high_score,
            items_eaten: self.items_eaten,
            accepted_inputs: self.accepted_inputs,
            elapsed: self.format_time(),
        }
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
