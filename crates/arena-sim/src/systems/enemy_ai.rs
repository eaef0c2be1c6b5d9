//! Enemy AI system: chase steering, bullet flight, colour phase and boss spin.
//!
//! Delegates the per-enemy decisions to `arena_enemy_ai` and writes the
//! results back into the world.

use hecs::World;

use arena_core::components::{Boss, Enemy, EnemyRole, Player, Spin, Tint};
use arena_core::constants::{BOSS_SPIN_RATE, ENEMY_SPEED};
use arena_core::types::{Position, Velocity};
use arena_enemy_ai::chase::{self, ChaseContext};
use arena_enemy_ai::visuals;

/// Run enemy AI for one step.
pub fn run(world: &mut World, dt: f32) {
    let target = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| pos.0);

    for (_entity, (enemy, pos, vel, spin, tint)) in world.query_mut::<(
        &mut Enemy,
        &mut Position,
        &Velocity,
        &mut Spin,
        &mut Tint,
    )>() {
        enemy.color_time = visuals::advance_color_time(enemy.color_time, dt);
        spin.rotation += spin.angular_velocity * dt;

        match &mut enemy.role {
            EnemyRole::Collider { chases: true, .. } => {
                if let Some(target) = target {
                    let update = chase::evaluate(&ChaseContext {
                        position: pos.0,
                        target,
                        speed: ENEMY_SPEED,
                        dt,
                    });
                    pos.0 = update.new_position;
                    if let Some(yaw) = update.yaw {
                        spin.rotation.y = yaw;
                    }
                }
                tint.0 = visuals::chaser_color();
            }
            EnemyRole::Collider { chases: false, .. } => {
                tint.0 = visuals::idle_color(enemy.color_time);
            }
            EnemyRole::Bullet { steps_alive } => {
                *steps_alive += 1;
                let (position, scale) = chase::fly_bullet(pos.0, vel.0, enemy.scale, dt);
                pos.0 = position;
                enemy.scale = scale;
                tint.0 = visuals::bullet_color(enemy.color_time);
            }
        }
    }

    for (_entity, boss) in world.query_mut::<&mut Boss>() {
        boss.yaw = (boss.yaw + BOSS_SPIN_RATE * dt).rem_euclid(std::f32::consts::TAU);
    }
}
