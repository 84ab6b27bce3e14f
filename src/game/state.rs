use serde::{Deserialize, Serialize};

use super::action::Velocity;
use super::grid::Cell;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Ended,
}

/// Why a game moved to [`GameStatus::Ended`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Head left the board
    Wall,
    /// Head ran into the chain's own body
    SelfCollision,
    /// No free cell left for an item
    BoardFull,
    /// Host called `end_game`
    Stopped,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// False when the tick was skipped because the game had already ended
    pub advanced: bool,
    /// Whether the head consumed an item
    pub ate_item: bool,
    /// Whether the chain got one segment longer
    pub grew: bool,
    /// Set when this tick ended the game
    pub ended: Option<EndReason>,
}

/// Explicit starting position for an engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Chain cells, head first
    pub chain: Vec<Cell>,
    pub velocity: Velocity,
    /// Item to place; `None` spawns one at random
    pub item: Option<Cell>,
    #[serde(default)]
    pub pending_growth: u32,
}

impl Scenario {
    pub fn new(chain: Vec<Cell>, velocity: Velocity) -> Self {
        Self {
            chain,
            velocity,
            item: None,
            pending_growth: 0,
        }
    }

    pub fn with_item(mut self, item: Cell) -> Self {
        self.item = Some(item);
        self
    }

    pub fn with_pending_growth(mut self, pending: u32) -> Self {
        self.pending_growth = pending;
        self
    }
}

/// Read-only copy of everything a host needs to present a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub rows: i32,
    pub columns: i32,
    /// Chain cells, head first
    pub chain: Vec<Cell>,
    pub items: Vec<Cell>,
    pub velocity: Velocity,
    pub status: GameStatus,
    pub end_reason: Option<EndReason>,
    pub score: u64,
    pub pending_growth: u32,
    pub ticks: u64,
}
