//! Splash particle system: bursts on impact, bouncing decay afterwards.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::{SplashParticle, Tint};
use arena_core::constants::*;
use arena_core::events::{GameEvent, SpawnKind};
use arena_core::types::{Position, Velocity};

use crate::world_setup::count;

/// A burst queued by an impact, spawned when the particle system runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashRequest {
    pub position: Vec3,
    pub color: Vec3,
}

/// Random burst velocity: horizontal angle in `[0, 2π)`, polar angle in
/// `[0, π)` (so particles may also leave downward), speed in the splash range.
pub fn burst_velocity(rng: &mut ChaCha8Rng) -> Vec3 {
    let phi = rng.gen_range(0.0..std::f32::consts::TAU);
    let theta = rng.gen_range(0.0..std::f32::consts::PI);
    let strength = rng.gen_range(SPLASH_MIN_SPEED..SPLASH_MAX_SPEED);
    Vec3::new(
        theta.sin() * phi.cos() * strength,
        theta.cos() * strength,
        theta.sin() * phi.sin() * strength,
    )
}

/// Inelastic ground bounce: vertical component reversed and damped,
/// horizontal components slowed by friction.
pub fn bounce(velocity: Vec3) -> Vec3 {
    Vec3::new(
        velocity.x * BOUNCE_FRICTION,
        -velocity.y * BOUNCE_RESTITUTION,
        velocity.z * BOUNCE_FRICTION,
    )
}

/// Advance one particle by `dt`. Returns the new position, velocity and life.
pub fn step_particle(position: Vec3, velocity: Vec3, life: f32, dt: f32) -> (Vec3, Vec3, f32) {
    let mut velocity = velocity;
    velocity.y += GRAVITY * dt;
    let mut position = position + velocity * dt;
    if position.y < GROUND_Y {
        position.y = GROUND_Y;
        velocity = bounce(velocity);
    }
    (position, velocity, life - PARTICLE_DECAY_RATE * dt)
}

/// Spawn every queued burst. Particles beyond `MAX_PARTICLES` are dropped.
pub fn spawn_bursts(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    requests: &mut Vec<SplashRequest>,
    events: &mut Vec<GameEvent>,
) {
    if requests.is_empty() {
        return;
    }

    let mut live = count::<SplashParticle>(world);
    let mut dropped = false;
    for request in requests.drain(..) {
        for _ in 0..SPLASH_PARTICLE_COUNT {
            if live >= MAX_PARTICLES {
                dropped = true;
                break;
            }
            world.spawn((
                SplashParticle {
                    life: PARTICLE_START_LIFE,
                },
                Position(request.position),
                Velocity(burst_velocity(rng)),
                Tint(request.color),
            ));
            live += 1;
        }
    }

    if dropped {
        log::trace!("particle cap of {MAX_PARTICLES} reached, burst truncated");
        events.push(GameEvent::SpawnDropped {
            kind: SpawnKind::Particle,
        });
    }
}

/// Integrate all particles for one step. Expired particles are removed by cleanup.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (particle, pos, vel)) in
        world.query_mut::<(&mut SplashParticle, &mut Position, &mut Velocity)>()
    {
        let (position, velocity, life) = step_particle(pos.0, vel.0, particle.life, dt);
        pos.0 = position;
        vel.0 = velocity;
        particle.life = life;
    }
}
