//! Population manager: clears dead enemy cubes and tops the colliders back up.
//!
//! Level-triggered: runs every step whether or not anything died.

use glam::Vec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use arena_core::components::{Enemy, EnemyRole};
use arena_core::config::Tuning;
use arena_core::events::GameEvent;

use crate::world_setup;

/// An expired bullet or a defeated collider.
pub fn is_dead(enemy: &Enemy) -> bool {
    match enemy.role {
        EnemyRole::Collider { health, .. } => health <= 0.0,
        EnemyRole::Bullet { .. } => enemy.scale <= 0.0,
    }
}

/// Number of collider-role enemies in the world.
pub fn live_colliders(world: &World) -> u32 {
    world
        .query::<&Enemy>()
        .iter()
        .filter(|(_, enemy)| enemy.role.is_collider())
        .count() as u32
}

/// Remove dead enemies, then spawn chasers around `center` until the
/// collider count reaches the target. Returns how many were spawned.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tuning: &Tuning,
    center: Vec3,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) -> u32 {
    despawn_buffer.clear();
    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if is_dead(enemy) {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    let missing = tuning.collider_target.saturating_sub(live_colliders(world));
    for _ in 0..missing {
        world_setup::spawn_enemy_at_radius(
            world,
            rng,
            center,
            tuning.spawn_min_radius,
            tuning.spawn_max_radius,
        );
    }

    if missing > 0 {
        log::debug!("spawned {missing} colliders");
        events.push(GameEvent::EnemiesSpawned { count: missing });
    }
    missing
}
