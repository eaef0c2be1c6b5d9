//! Render snapshot: the complete visible state handed to the renderer/HUD each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::components::Obstacle;
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Everything the renderer needs for one frame. Read-only for the consumer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub camera: CameraMode,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub particles: Vec<ParticleView>,
    pub obstacles: Vec<ObstacleView>,
    pub boss: Option<BossView>,
    pub stats: StatsView,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub velocity: Vec3,
    pub front: Vec3,
    pub up: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub health: f32,
    pub color: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Vec3,
    pub scale: f32,
    pub color: Vec3,
    pub rotation: Vec3,
    /// Colliders only; drives the health bar.
    pub health: Option<f32>,
    pub chases: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub id: u32,
    pub position: Vec3,
    pub color: Vec3,
    /// Remaining life in `[0, 1]`, usable as alpha.
    pub life: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: Obstacle,
    pub position: Vec3,
    pub rotation: Vec3,
    pub color: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub position: Vec3,
    pub yaw: f32,
    pub scale: f32,
    pub health: f32,
    pub max_health: f32,
}

/// Battle log for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsView {
    pub shots_fired: u32,
    pub shots_landed: u32,
    pub kills: u32,
    pub ammo: u32,
    pub ammo_capacity: u32,
    pub elapsed_secs: f64,
    pub live_colliders: u32,
    /// Landed / fired in percent; 0 before the first shot.
    pub accuracy_pct: f32,
}
