//! Snapshot system: queries the ECS world and builds a complete RenderSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use arena_core::components::*;
use arena_core::constants::{AMMO_CAPACITY, BOSS_MAX_HEALTH};
use arena_core::enums::*;
use arena_core::events::GameEvent;
use arena_core::state::*;
use arena_core::types::{Position, SimTime, Velocity};

use crate::session::SessionStats;
use crate::systems::population::live_colliders;

/// Session-level values the world does not hold.
pub struct SnapshotContext<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub camera: CameraMode,
    pub stats: &'a SessionStats,
}

/// Build a complete RenderSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    events: Vec<GameEvent>,
) -> RenderSnapshot {
    let player = build_player(world);
    let ammo = world
        .query::<&PlayerState>()
        .iter()
        .next()
        .map(|(_, state)| state.ammo)
        .unwrap_or(AMMO_CAPACITY);

    RenderSnapshot {
        time: *ctx.time,
        phase: ctx.phase,
        camera: ctx.camera,
        player,
        enemies: build_enemies(world),
        projectiles: build_projectiles(world),
        particles: build_particles(world),
        obstacles: build_obstacles(world),
        boss: build_boss(world),
        stats: StatsView {
            shots_fired: ctx.stats.shots_fired,
            shots_landed: ctx.stats.shots_landed,
            kills: ctx.stats.kills,
            ammo,
            ammo_capacity: AMMO_CAPACITY,
            elapsed_secs: ctx.time.elapsed_secs,
            live_colliders: live_colliders(world),
            accuracy_pct: ctx.stats.accuracy_pct(),
        },
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &PlayerState, &Position, &Velocity, &Tint)>()
        .iter()
        .next()
        .map(|(_, (_, state, pos, vel, tint))| PlayerView {
            position: pos.0,
            velocity: vel.0,
            front: state.front,
            up: state.up,
            yaw: state.yaw,
            pitch: state.pitch,
            health: state.health,
            color: tint.0,
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Tint, &Spin)>()
        .iter()
        .map(|(entity, (enemy, pos, tint, spin))| EnemyView {
            id: entity.id(),
            kind: enemy.role.kind(),
            position: pos.0,
            scale: enemy.scale,
            color: tint.0,
            rotation: spin.rotation,
            health: enemy.role.health(),
            chases: matches!(enemy.role, EnemyRole::Collider { chases: true, .. }),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Spin, &Tint)>()
        .iter()
        .map(|(entity, (_, pos, spin, tint))| ProjectileView {
            id: entity.id(),
            position: pos.0,
            rotation: spin.rotation,
            color: tint.0,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    let mut particles: Vec<ParticleView> = world
        .query::<(&SplashParticle, &Position, &Tint)>()
        .iter()
        .map(|(entity, (particle, pos, tint))| ParticleView {
            id: entity.id(),
            position: pos.0,
            color: tint.0,
            life: particle.life.clamp(0.0, 1.0),
        })
        .collect();

    particles.sort_by_key(|p| p.id);
    particles
}

fn build_obstacles(world: &World) -> Vec<ObstacleView> {
    let mut obstacles: Vec<ObstacleView> = world
        .query::<(&Obstacle, &Position, &Spin, &Tint)>()
        .iter()
        .map(|(entity, (kind, pos, spin, tint))| ObstacleView {
            id: entity.id(),
            kind: *kind,
            position: pos.0,
            rotation: spin.rotation,
            color: tint.0,
        })
        .collect();

    obstacles.sort_by_key(|o| o.id);
    obstacles
}

fn build_boss(world: &World) -> Option<BossView> {
    world
        .query::<(&Boss, &Position)>()
        .iter()
        .next()
        .map(|(_, (boss, pos))| BossView {
            position: pos.0,
            yaw: boss.yaw,
            scale: boss.model_scale,
            health: boss.health,
            max_health: BOSS_MAX_HEALTH,
        })
}
