use std::collections::HashSet;
use tracing::{debug, info};

use super::{
    action::{self, Direction, Velocity, VelocityChange},
    chain::Chain,
    config::GameConfig,
    error::GameError,
    grid::{Board, Cell},
    occupancy::Occupancy,
    spawner::ItemSpawner,
    state::{EndReason, GameSnapshot, GameStatus, Scenario, TickOutcome},
};

/// The game engine that owns and advances one game.
///
/// All mutation goes through [`init_game`](Self::init_game),
/// [`tick`](Self::tick), [`apply_direction`](Self::apply_direction) and
/// [`end_game`](Self::end_game). The engine never schedules itself; the host
/// calls `tick` on its own clock and stops that clock once the game ends.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    chain: Chain,
    items: Vec<Cell>,
    velocity: Velocity,
    status: GameStatus,
    end_reason: Option<EndReason>,
    score: u64,
    ticks: u64,
    spawner: ItemSpawner,
}

impl GameEngine {
    /// Create a new engine and start the first game
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let board = config.board()?;
        let mut engine = Self {
            board,
            chain: Chain::new(board.center()),
            items: Vec::new(),
            velocity: Velocity::STILL,
            status: GameStatus::Playing,
            end_reason: None,
            score: 0,
            ticks: 0,
            spawner: ItemSpawner::new(config.seed),
            config,
        };
        engine.init_game();
        Ok(engine)
    }

    /// Create an engine positioned at an explicit game state
    pub fn from_scenario(config: GameConfig, scenario: Scenario) -> Result<Self, GameError> {
        let board = config.board()?;

        if !scenario.velocity.is_axis_aligned() {
            return Err(GameError::InvalidScenario(format!(
                "velocity {:?} is not a unit axis step",
                scenario.velocity
            )));
        }
        if let Some(cell) = scenario.chain.iter().find(|cell| !board.in_bounds(**cell)) {
            return Err(GameError::InvalidScenario(format!(
                "chain cell {cell:?} is outside the board"
            )));
        }
        if let Some(pair) = scenario
            .chain
            .windows(2)
            .find(|pair| !pair[0].is_adjacent(pair[1]))
        {
            return Err(GameError::InvalidScenario(format!(
                "chain segments {:?} and {:?} are not adjacent",
                pair[0], pair[1]
            )));
        }
        // Overlap is only reachable when the chain may cross itself
        if config.self_collision_fatal {
            let distinct: HashSet<&Cell> = scenario.chain.iter().collect();
            if distinct.len() != scenario.chain.len() {
                return Err(GameError::InvalidScenario(
                    "chain overlaps itself".to_string(),
                ));
            }
        }
        let mut chain = Chain::from_segments(scenario.chain)
            .ok_or_else(|| GameError::InvalidScenario("chain must not be empty".to_string()))?;
        chain.set_pending_growth(scenario.pending_growth);

        if let Some(item) = scenario.item {
            if !board.in_bounds(item) || chain.contains(item) {
                return Err(GameError::InvalidScenario(format!(
                    "item {item:?} must be on a free cell"
                )));
            }
        }

        let mut engine = Self {
            board,
            chain,
            items: scenario.item.into_iter().collect(),
            velocity: scenario.velocity,
            status: GameStatus::Playing,
            end_reason: None,
            score: 0,
            ticks: 0,
            spawner: ItemSpawner::new(config.seed),
            config,
        };
        if engine.items.is_empty() {
            engine.place_item();
        }
        Ok(engine)
    }

    /// Reset to a single segment at the board center with one item
    pub fn init_game(&mut self) {
        self.chain = Chain::new(self.board.center());
        self.items.clear();
        self.velocity = Velocity::STILL;
        self.status = GameStatus::Playing;
        self.end_reason = None;
        self.score = 0;
        self.ticks = 0;

        self.place_item();
        debug!(head = ?self.chain.head(), items = ?self.items, "game initialised");
    }

    /// Steer the chain. Ignored while ended or when the turn is not allowed.
    pub fn apply_direction(&mut self, direction: Direction) -> VelocityChange {
        if self.status == GameStatus::Ended {
            debug!(?direction, "input ignored after game end");
            return VelocityChange::Ignored;
        }

        let change = action::translate(self.velocity, direction);
        match change {
            VelocityChange::Accepted(velocity) => {
                self.velocity = velocity;
                debug!(?direction, ?velocity, "direction accepted");
            }
            VelocityChange::Ignored => {
                debug!(?direction, velocity = ?self.velocity, "direction rejected");
            }
        }
        change
    }

    /// Execute one tick of the game
    pub fn tick(&mut self) -> TickOutcome {
        if self.status == GameStatus::Ended {
            return TickOutcome::default();
        }

        let advance = self.chain.advance(self.velocity);
        self.ticks += 1;

        let mut outcome = TickOutcome {
            advanced: true,
            grew: advance.grew(),
            ..Default::default()
        };
        let head = self.chain.head();

        // Items are evaluated against the post-move head first
        if let Some(index) = self.items.iter().position(|item| *item == head) {
            // Scored on the moved chain, before this item's own growth lands
            self.score += self.chain.len() as u64;
            self.items.remove(index);
            self.chain.queue_growth();
            outcome.grew |= self.chain.settle_growth(&advance);
            outcome.ate_item = true;
            debug!(?head, score = self.score, length = self.chain.len(), "item consumed");
            self.place_item();
        }

        if self.config.self_collision_fatal && self.chain.collides_with_body(head) {
            self.finish(EndReason::SelfCollision);
        }

        if !self.board.in_bounds(head) {
            self.finish(EndReason::Wall);
        }

        if self.status == GameStatus::Ended {
            outcome.ended = self.end_reason;
        }
        outcome
    }

    /// End the current game on the host's request
    pub fn end_game(&mut self) {
        self.finish(EndReason::Stopped);
    }

    fn finish(&mut self, reason: EndReason) {
        if self.status == GameStatus::Ended {
            return;
        }
        self.status = GameStatus::Ended;
        self.end_reason = Some(reason);
        info!(
            ?reason,
            score = self.score,
            length = self.chain.len(),
            ticks = self.ticks,
            "game over"
        );
    }

    /// Spawn the replacement item, or end the game if the board is full
    fn place_item(&mut self) {
        let occupancy = Occupancy::new(&self.chain, &self.items);
        match self.spawner.spawn(&self.board, &occupancy) {
            Ok(cell) => self.items.push(cell),
            Err(err) => {
                debug!(%err, "item spawn exhausted");
                self.finish(EndReason::BoardFull);
            }
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn items(&self) -> &[Cell] {
        &self.items
    }

    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn pending_growth(&self) -> u32 {
        self.chain.pending_growth()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn occupancy(&self) -> Occupancy<'_> {
        Occupancy::new(&self.chain, &self.items)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            rows: self.board.rows(),
            columns: self.board.columns(),
            chain: self.chain.segments().copied().collect(),
            items: self.items.clone(),
            velocity: self.velocity,
            status: self.status,
            end_reason: self.end_reason,
            score: self.score,
            pending_growth: self.chain.pending_growth(),
            ticks: self.ticks,
        }
    }
}
