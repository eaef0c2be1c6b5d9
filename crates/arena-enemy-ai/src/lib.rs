//! Enemy behaviour for the arena.
//!
//! Single-target pursuit for chasing colliders, bullet-cube flight,
//! and the colour phase that drives enemy visuals. Pure functions on
//! plain data; the simulation crate applies the results to the world.

pub mod chase;
pub mod visuals;

pub use arena_core as core;

#[cfg(test)]
mod tests;
