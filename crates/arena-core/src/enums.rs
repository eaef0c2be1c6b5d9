//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pause menu is up; no simulation steps run, commands are still handled.
    #[default]
    Paused,
    /// The simulation advances every tick.
    Active,
}

/// Which camera the renderer should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Eye at the player position looking along the player's front vector.
    #[default]
    FirstPerson,
    /// Top-down view hovering above the player.
    Sky,
}

/// What the fire trigger launches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireMode {
    /// Ballistic projectile that falls under gravity.
    #[default]
    Projectile,
    /// Legacy shrinking bullet cube that only hits colliders.
    BulletCube,
}

/// Role tag of an enemy cube, without its role-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Collider,
    Bullet,
}
