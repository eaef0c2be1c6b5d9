//! Headless host for the arena simulation.
//!
//! Runs the engine on a paced game-loop thread, forwards commands and held
//! controls to it, and publishes the latest snapshot for a renderer to poll.

pub mod game_loop;
pub mod logging;
pub mod state;

pub use arena_core as core;
pub use logging::init as init_logging;
