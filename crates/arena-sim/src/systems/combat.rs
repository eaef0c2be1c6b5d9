//! Combat resolution: projectile and bullet impacts.
//!
//! Two passes. The read pass pairs every live projectile and bullet with the
//! first target it overlaps; the apply pass then mutates health, spends the
//! shots and records the battle log, one impact at a time.

use glam::{Mat4, Quat, Vec3};
use hecs::{Entity, World};

use arena_core::components::{Boss, Enemy, EnemyRole, Projectile, Tint};
use arena_core::constants::{BOSS_SPLASH_COLOR, BULLET_DAMAGE};
use arena_core::events::GameEvent;
use arena_core::types::{Aabb, Position};

use crate::session::SessionStats;
use crate::systems::kinematics::spend;
use crate::systems::particles::SplashRequest;

/// What a projectile struck.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Target {
    Collider(Entity),
    Boss(Entity),
}

#[derive(Debug, Clone, Copy)]
struct ProjectileImpact {
    projectile: Entity,
    position: Vec3,
    target: Target,
}

#[derive(Debug, Clone, Copy)]
struct BulletImpact {
    bullet: Entity,
    collider: Entity,
}

/// A collider eligible to be hit this step.
#[derive(Debug, Clone, Copy)]
struct LiveCollider {
    entity: Entity,
    position: Vec3,
    scale: f32,
}

/// World transform of the boss model.
pub fn boss_model(position: Vec3, boss: &Boss) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(boss.model_scale),
        Quat::from_rotation_y(boss.yaw),
        position,
    )
}

/// Sphere proxy used for projectiles: the enemy scale is the radius.
pub fn projectile_overlaps(projectile: Vec3, enemy: Vec3, enemy_scale: f32) -> bool {
    projectile.distance(enemy) < enemy_scale
}

/// Cube-vs-cube proxy for bullets: centres closer than the sum of half-scales.
pub fn bullet_overlaps(bullet: Vec3, bullet_scale: f32, collider: Vec3, collider_scale: f32) -> bool {
    bullet.distance(collider) < bullet_scale * 0.5 + collider_scale * 0.5
}

/// Resolve every impact for one step.
pub fn run(
    world: &mut World,
    stats: &mut SessionStats,
    splashes: &mut Vec<SplashRequest>,
    events: &mut Vec<GameEvent>,
) {
    let colliders = live_colliders(world);
    let boss = live_boss(world);

    let projectile_impacts = find_projectile_impacts(world, &colliders, boss);
    let bullet_impacts = find_bullet_impacts(world, &colliders);

    for impact in projectile_impacts {
        apply_projectile_impact(world, impact, stats, splashes, events);
    }
    for impact in bullet_impacts {
        apply_bullet_impact(world, impact, stats, events);
    }
}

/// Colliders with health left, in entity id order.
fn live_colliders(world: &World) -> Vec<LiveCollider> {
    let mut colliders: Vec<LiveCollider> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter_map(|(entity, (enemy, pos))| match enemy.role {
            EnemyRole::Collider { health, .. } if health > 0.0 => Some(LiveCollider {
                entity,
                position: pos.0,
                scale: enemy.scale,
            }),
            _ => None,
        })
        .collect();
    colliders.sort_by_key(|c| c.entity.id());
    colliders
}

fn live_boss(world: &World) -> Option<(Entity, Mat4, Aabb)> {
    world
        .query::<(&Boss, &Position)>()
        .iter()
        .find(|(_, (boss, _))| boss.health > 0.0)
        .map(|(entity, (boss, pos))| (entity, boss_model(pos.0, boss), boss.bounds))
}

fn find_projectile_impacts(
    world: &World,
    colliders: &[LiveCollider],
    boss: Option<(Entity, Mat4, Aabb)>,
) -> Vec<ProjectileImpact> {
    let mut impacts: Vec<ProjectileImpact> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (projectile, _))| !projectile.consumed)
        .filter_map(|(entity, (_, pos))| {
            let struck = colliders
                .iter()
                .find(|c| projectile_overlaps(pos.0, c.position, c.scale))
                .map(|c| Target::Collider(c.entity))
                .or_else(|| {
                    boss.and_then(|(boss_entity, model, bounds)| {
                        bounds
                            .contains_world_point(&model, pos.0)
                            .then_some(Target::Boss(boss_entity))
                    })
                })?;
            Some(ProjectileImpact {
                projectile: entity,
                position: pos.0,
                target: struck,
            })
        })
        .collect();
    impacts.sort_by_key(|i| i.projectile.id());
    impacts
}

fn find_bullet_impacts(world: &World, colliders: &[LiveCollider]) -> Vec<BulletImpact> {
    let mut impacts: Vec<BulletImpact> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| !enemy.role.is_collider() && enemy.scale > 0.0)
        .filter_map(|(entity, (bullet, pos))| {
            colliders
                .iter()
                .find(|c| bullet_overlaps(pos.0, bullet.scale, c.position, c.scale))
                .map(|c| BulletImpact {
                    bullet: entity,
                    collider: c.entity,
                })
        })
        .collect();
    impacts.sort_by_key(|i| i.bullet.id());
    impacts
}

fn apply_projectile_impact(
    world: &mut World,
    impact: ProjectileImpact,
    stats: &mut SessionStats,
    splashes: &mut Vec<SplashRequest>,
    events: &mut Vec<GameEvent>,
) {
    let damage = match world.get::<&mut Projectile>(impact.projectile) {
        Ok(mut projectile) if !projectile.consumed => {
            let damage = projectile.damage;
            spend(&mut projectile);
            damage
        }
        _ => return,
    };

    match impact.target {
        Target::Collider(entity) => {
            let color = world
                .get::<&Tint>(entity)
                .map(|tint| tint.0)
                .unwrap_or(BOSS_SPLASH_COLOR);
            if damage_collider(world, entity, damage, stats, events) {
                splashes.push(SplashRequest {
                    position: impact.position,
                    color,
                });
            }
        }
        Target::Boss(entity) => {
            let Ok(mut boss) = world.get::<&mut Boss>(entity) else {
                log::error!("boss {entity:?} vanished between combat passes");
                return;
            };
            let before = boss.health;
            boss.health -= damage;
            let after = boss.health;
            drop(boss);

            let killed = stats.record_hit(before, after);
            events.push(GameEvent::BossHit {
                position: impact.position,
                health_left: after,
            });
            if killed {
                log::info!("boss defeated");
                events.push(GameEvent::BossDefeated);
            }
            splashes.push(SplashRequest {
                position: impact.position,
                color: BOSS_SPLASH_COLOR,
            });
        }
    }
}

fn apply_bullet_impact(
    world: &mut World,
    impact: BulletImpact,
    stats: &mut SessionStats,
    events: &mut Vec<GameEvent>,
) {
    match world.get::<&mut Enemy>(impact.bullet) {
        Ok(mut bullet) if bullet.scale > 0.0 => bullet.scale = 0.0,
        _ => return,
    }
    damage_collider(world, impact.collider, BULLET_DAMAGE, stats, events);
}

/// Subtract `damage` from a collider and record the hit.
/// Returns false when the entity is not a collider.
fn damage_collider(
    world: &mut World,
    entity: Entity,
    damage: f32,
    stats: &mut SessionStats,
    events: &mut Vec<GameEvent>,
) -> bool {
    let position = match world.get::<&Position>(entity) {
        Ok(pos) => pos.0,
        Err(_) => return false,
    };
    let (before, after) = {
        let Ok(mut enemy) = world.get::<&mut Enemy>(entity) else {
            return false;
        };
        let EnemyRole::Collider { health, .. } = &mut enemy.role else {
            return false;
        };
        let before = *health;
        *health -= damage;
        (before, *health)
    };

    let killed = stats.record_hit(before, after);
    let enemy_id = entity.id();
    events.push(GameEvent::EnemyHit {
        enemy_id,
        position,
        damage,
        health_left: after,
    });
    if killed {
        events.push(GameEvent::EnemyKilled { enemy_id, position });
    }
    true
}
