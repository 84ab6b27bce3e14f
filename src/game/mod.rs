//! Core simulation for the snake game
//!
//! This module contains all the game logic without any I/O, clock or rendering
//! dependencies. Hosts drive it through [`GameEngine`] and read state back from
//! its accessors or a [`GameSnapshot`].

pub mod action;
pub mod chain;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod occupancy;
pub mod spawner;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Velocity, VelocityChange};
pub use chain::Chain;
pub use config::GameConfig;
pub use engine::GameEngine;
pub use error::GameError;
pub use grid::{Board, Cell};
pub use occupancy::Occupancy;
pub use spawner::ItemSpawner;
pub use state::{EndReason, GameSnapshot, GameStatus, Scenario, TickOutcome};
