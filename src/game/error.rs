use thiserror::Error;

/// Failures surfaced by the simulation core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The board or clock settings cannot host a game.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A scenario position breaks a model invariant.
    #[error("invalid scenario: {0}")]
    InvalidScenario(String),
    /// Every cell is taken, so no item can be placed.
    #[error("no free cell left on a {rows}x{columns} board")]
    SpawnExhausted { rows: i32, columns: i32 },
}
