//! Initialisation errors. A running simulation has no failure modes.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("spawn radius range [{min}, {max}] is invalid")]
    InvalidSpawnRadius { min: f32, max: f32 },
    #[error("collider target {requested} exceeds the maximum of {max}")]
    ColliderTargetTooLarge { requested: u32, max: u32 },
    #[error("integration sub-step must be positive, got {0}")]
    InvalidSubstep(f32),
    #[error("projectile range must be positive, got {0}")]
    InvalidProjectileRange(f32),
    #[error("look sensitivity must be positive, got {0}")]
    InvalidSensitivity(f32),
    #[error("boss bounds are inverted on at least one axis")]
    InvalidBossBounds,
    #[error("world setup produced no player entity")]
    MissingPlayer,
}
