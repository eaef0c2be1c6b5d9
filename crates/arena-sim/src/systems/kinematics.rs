//! Kinematic integration system.
//!
//! Grounded bodies (player, enemy cubes, boss) fall under gravity and land on
//! the ground plane. Projectiles fly ballistically; touching the ground spends
//! them and requests a splash.

use hecs::World;

use arena_core::components::{Body, Projectile, Spin};
use arena_core::constants::{GRAVITY, GROUND_SPLASH_COLOR, GROUND_Y};
use arena_core::events::GameEvent;
use arena_core::types::{Position, Velocity};

use crate::systems::particles::SplashRequest;

/// Result of one vertical integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStep {
    pub y: f32,
    pub vy: f32,
    /// True when the step ended below `floor` and was clamped.
    pub landed: bool,
}

/// `vy += g*dt; y += vy*dt`, clamped to `floor` with `vy` zeroed on landing.
pub fn integrate_vertical(y: f32, vy: f32, floor: f32, dt: f32) -> VerticalStep {
    let vy = vy + GRAVITY * dt;
    let y = y + vy * dt;
    if y < floor {
        VerticalStep {
            y: floor,
            vy: 0.0,
            landed: true,
        }
    } else {
        VerticalStep {
            y,
            vy,
            landed: false,
        }
    }
}

/// Run kinematics for one step.
pub fn run(
    world: &mut World,
    dt: f32,
    projectile_max_range: f32,
    splashes: &mut Vec<SplashRequest>,
    events: &mut Vec<GameEvent>,
) {
    for (_entity, (pos, vel, body)) in world.query_mut::<(&mut Position, &mut Velocity, &Body)>() {
        let step = integrate_vertical(pos.0.y, vel.0.y, GROUND_Y + body.height, dt);
        pos.0.y = step.y;
        vel.0.y = step.vy;
    }

    for (_entity, (pos, vel, spin, projectile)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Spin, &mut Projectile)>()
    {
        if projectile.consumed {
            continue;
        }

        vel.0.y += GRAVITY * dt;
        let travel = vel.0 * dt;
        pos.0 += travel;
        projectile.distance_traveled += travel.length();
        spin.rotation += spin.angular_velocity * dt;

        if pos.0.y < GROUND_Y {
            pos.0.y = GROUND_Y;
            vel.0.y = 0.0;
            spend(projectile);
            splashes.push(SplashRequest {
                position: pos.0,
                color: GROUND_SPLASH_COLOR,
            });
            events.push(GameEvent::ProjectileLanded { position: pos.0 });
        } else if projectile.distance_traveled >= projectile_max_range {
            spend(projectile);
        }
    }
}

/// Zero the damage and mark the projectile for removal.
pub fn spend(projectile: &mut Projectile) {
    projectile.damage = 0.0;
    projectile.consumed = true;
}
