//! Grid Snake - deterministic simulation core for a grid-based snake game
//!
//! This library provides:
//! - Core game logic: board, chain, items, collisions and game state (game module)
//! - A re-armable tick clock for hosts (host module)
//! - Text input translation (input module)
//! - Session statistics (metrics module)
//! - Headless and real-time runners (modes module)

pub mod game;
pub mod host;
pub mod input;
pub mod metrics;
pub mod modes;
