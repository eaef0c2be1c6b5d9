//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::{Aabb, Rgb};

/// Marks the single player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Player-only state: look basis, weapon and health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    /// Unit look vector derived from yaw/pitch.
    pub front: Vec3,
    pub up: Vec3,
    /// Degrees, wrapped into `[0, 360)`.
    pub yaw: f32,
    /// Degrees, clamped to `[-89, 89]`.
    pub pitch: f32,
    pub health: f32,
    pub ammo: u32,
    /// Session time of the last shot; `None` until the first shot.
    pub last_shot_secs: Option<f64>,
}

/// Anything that stands on the ground: gravity pulls it down until its base
/// rests on the ground plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    /// Offset between the entity position and the ground when landed.
    pub height: f32,
}

/// Flat colour used by the renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Tint(pub Rgb);

/// Euler rotation (radians) and its rate of change.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin {
    pub rotation: Vec3,
    pub angular_velocity: Vec3,
}

/// What an enemy cube is for. Only colliders carry health and take damage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnemyRole {
    /// A target. Chasers steer toward the player, the others stand still.
    Collider { health: f32, chases: bool },
    /// A transient shot that expires by shrinking to zero scale.
    Bullet {
        /// Steps survived so far.
        steps_alive: u32,
    },
}

impl EnemyRole {
    pub fn kind(&self) -> EnemyKind {
        match self {
            EnemyRole::Collider { .. } => EnemyKind::Collider,
            EnemyRole::Bullet { .. } => EnemyKind::Bullet,
        }
    }

    pub fn is_collider(&self) -> bool {
        matches!(self, EnemyRole::Collider { .. })
    }

    /// Remaining health, for colliders only.
    pub fn health(&self) -> Option<f32> {
        match self {
            EnemyRole::Collider { health, .. } => Some(*health),
            EnemyRole::Bullet { .. } => None,
        }
    }
}

/// Enemy cube: a collider target or a legacy bullet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub role: EnemyRole,
    /// Edge length of the cube; doubles as the hit sphere radius for projectiles.
    pub scale: f32,
    /// Drives the colour sine; advances with time.
    pub color_time: f32,
}

/// Player-fired ballistic projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub damage: f32,
    pub distance_traveled: f32,
    /// Set once the projectile has landed a hit, touched the ground or run out of range.
    pub consumed: bool,
}

/// Short-lived splash particle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SplashParticle {
    /// Remaining life; the particle is removed at zero.
    pub life: f32,
}

/// Large single enemy hit-tested against its rotated model bounds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub health: f32,
    /// Model-space bounds measured from the mesh vertices.
    pub bounds: Aabb,
    pub model_scale: f32,
    /// Current model yaw (radians).
    pub yaw: f32,
}

/// Decorative world geometry; never moves, never collides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Obstacle {
    Pillar,
    Unbreakable,
}
