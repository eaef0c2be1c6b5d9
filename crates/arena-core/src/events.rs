//! Events emitted by the simulation for audio and HUD feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::FireMode;

/// Which kind of entity a dropped spawn would have been.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnKind {
    Projectile,
    Bullet,
    Particle,
}

/// Something the frontend may want to react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player pulled the trigger.
    ShotFired { mode: FireMode, ammo_left: u32 },
    /// A projectile touched the ground.
    ProjectileLanded { position: Vec3 },
    /// A collider took damage.
    EnemyHit {
        enemy_id: u32,
        position: Vec3,
        damage: f32,
        health_left: f32,
    },
    /// A collider's health crossed to zero on this hit.
    EnemyKilled { enemy_id: u32, position: Vec3 },
    /// The boss took damage.
    BossHit { position: Vec3, health_left: f32 },
    /// The boss's health crossed to zero on this hit.
    BossDefeated,
    /// The population manager topped the collider count back up.
    EnemiesSpawned { count: u32 },
    /// A spawn was refused because its collection is at capacity.
    SpawnDropped { kind: SpawnKind },
}
