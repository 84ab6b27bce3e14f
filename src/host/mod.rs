//! Host-side plumbing that drives the engine: the tick clock lives here,
//! never inside the engine.

pub mod scheduler;

pub use scheduler::TickScheduler;
