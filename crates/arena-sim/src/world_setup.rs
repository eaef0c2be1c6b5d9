//! Entity spawn factories for setting up the arena.
//!
//! Creates the player, decoration, the boss and every transient entity
//! with the appropriate component bundles.

use glam::Vec3;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::*;
use arena_core::config::ArenaLayout;
use arena_core::constants::*;
use arena_core::types::{Aabb, Position, Velocity};
use arena_enemy_ai::visuals::bullet_color;

/// Populate a fresh world with the player, decoration and the boss.
/// Enemies are spawned afterwards by the population manager.
pub fn setup_arena(world: &mut World, layout: &ArenaLayout, boss_bounds: Aabb) -> Entity {
    let player = spawn_player(world);
    for &position in &layout.pillars {
        spawn_obstacle(world, Obstacle::Pillar, position);
    }
    for &position in &layout.unbreakables {
        spawn_obstacle(world, Obstacle::Unbreakable, position);
    }
    if layout.boss {
        spawn_boss(world, boss_bounds);
    }
    player
}

/// Find the player entity, if any.
pub fn find_player(world: &World) -> Option<Entity> {
    world
        .query::<&Player>()
        .iter()
        .next()
        .map(|(entity, _)| entity)
}

/// Spawn the player at the start position looking down +X.
pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        Player,
        fresh_player_state(),
        Position(PLAYER_START_POSITION),
        Velocity::default(),
        Body {
            height: PLAYER_HEIGHT,
        },
        Tint(PLAYER_COLOR),
    ))
}

/// Look basis, weapon and health of a newly (re)started player.
pub fn fresh_player_state() -> PlayerState {
    PlayerState {
        front: look_front(0.0, 0.0),
        up: Vec3::Y,
        yaw: 0.0,
        pitch: 0.0,
        health: PLAYER_MAX_HEALTH,
        ammo: AMMO_CAPACITY,
        last_shot_secs: None,
    }
}

/// Unit look vector for yaw/pitch in degrees.
pub fn look_front(yaw_deg: f32, pitch_deg: f32) -> Vec3 {
    let (yaw, pitch) = (yaw_deg.to_radians(), pitch_deg.to_radians());
    Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize_or_zero()
}

pub fn spawn_obstacle(world: &mut World, kind: Obstacle, position: Vec3) -> Entity {
    let color = match kind {
        Obstacle::Pillar => PILLAR_COLOR,
        Obstacle::Unbreakable => UNBREAKABLE_COLOR,
    };
    world.spawn((kind, Position(position), Tint(color), Spin::default()))
}

/// Spawn the boss at its start position with full health.
pub fn spawn_boss(world: &mut World, bounds: Aabb) -> Entity {
    world.spawn((
        Boss {
            health: BOSS_MAX_HEALTH,
            bounds,
            model_scale: BOSS_MODEL_SCALE,
            yaw: 0.0,
        },
        Position(BOSS_START_POSITION),
        Velocity::default(),
        Body {
            height: BOSS_HEIGHT,
        },
    ))
}

/// Spawn a collider cube. Chasers pursue the player; the others stand still.
pub fn spawn_collider(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Vec3,
    chases: bool,
    health: f32,
) -> Entity {
    let color_time = rng.gen_range(0..100) as f32;
    world.spawn((
        Enemy {
            role: EnemyRole::Collider { health, chases },
            scale: ENEMY_SCALE,
            color_time,
        },
        Position(position),
        Velocity::default(),
        Body {
            height: ENEMY_HEIGHT,
        },
        Tint(COLLIDER_SPAWN_COLOR),
        Spin::default(),
    ))
}

/// Random XZ offset with a uniform angle in `[0°, 360°)` and a uniform
/// radius in `[min_radius, max_radius]`.
pub fn sample_spawn_offset(rng: &mut ChaCha8Rng, min_radius: f32, max_radius: f32) -> Vec3 {
    let angle = rng.gen_range(0.0f32..360.0).to_radians();
    let radius = rng.gen_range(min_radius..=max_radius);
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Spawn a full-health chaser on a ring around `center` (height unchanged).
pub fn spawn_enemy_at_radius(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    center: Vec3,
    min_radius: f32,
    max_radius: f32,
) -> Entity {
    let position = center + sample_spawn_offset(rng, min_radius, max_radius);
    spawn_collider(world, rng, position, true, COLLIDER_MAX_HEALTH)
}

/// Spawn a player projectile leaving `origin` along `front`.
pub fn spawn_projectile(world: &mut World, origin: Vec3, front: Vec3) -> Entity {
    world.spawn((
        Projectile {
            damage: PROJECTILE_DAMAGE,
            distance_traveled: 0.0,
            consumed: false,
        },
        Position(origin),
        Velocity(front * PROJECTILE_SPEED),
        Spin {
            rotation: PROJECTILE_ROTATION,
            angular_velocity: PROJECTILE_SPIN,
        },
        Tint(PROJECTILE_COLOR),
    ))
}

/// Spawn a legacy bullet cube leaving `origin` along `front`.
/// Bullets fly in a straight line; they carry no `Body` so gravity skips them.
pub fn spawn_bullet(world: &mut World, rng: &mut ChaCha8Rng, origin: Vec3, front: Vec3) -> Entity {
    let color_time = rng.gen_range(0..100) as f32;
    world.spawn((
        Enemy {
            role: EnemyRole::Bullet { steps_alive: 0 },
            scale: ENEMY_SCALE,
            color_time,
        },
        Position(origin),
        Velocity(front * BULLET_SPEED),
        Tint(bullet_color(color_time)),
        Spin::default(),
    ))
}

/// Number of live entities carrying component `T`.
pub fn count<T: hecs::Component>(world: &World) -> usize {
    world.query::<&T>().iter().count()
}
