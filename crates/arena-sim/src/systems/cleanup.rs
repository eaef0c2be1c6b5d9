//! Cleanup system: removes spent projectiles, expired particles and a defeated boss.
//!
//! Enemy cubes are removed by the population manager.

use hecs::{Entity, World};

use arena_core::components::{Boss, Projectile, SplashParticle};

/// Despawn everything that finished this step.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.consumed {
            despawn_buffer.push(entity);
        }
    }

    for (entity, particle) in world.query_mut::<&SplashParticle>() {
        if particle.life <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, boss) in world.query_mut::<&Boss>() {
        if boss.health <= 0.0 {
            log::debug!("removing defeated boss {entity:?}");
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
