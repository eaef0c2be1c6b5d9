//! Simulation engine for the arena shooter.
//!
//! Owns the hecs ECS world, runs the per-step systems under a sub-stepped
//! variable clock, and produces RenderSnapshots for the renderer and HUD.

pub mod engine;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use engine::{SimConfig, SimulationEngine};
