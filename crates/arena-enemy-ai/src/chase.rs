//! Chase steering and bullet flight.
//!
//! No ECS dependency; operates on plain data.

use glam::Vec3;

use arena_core::constants::{BULLET_SHRINK_RATE, CHASE_DEADBAND};

/// Input to the steering step for a single chaser.
pub struct ChaseContext {
    pub position: Vec3,
    pub target: Vec3,
    /// Units per second.
    pub speed: f32,
    pub dt: f32,
}

/// Output of the steering step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseUpdate {
    pub new_position: Vec3,
    /// Model yaw facing the direction of travel; `None` when holding position.
    pub yaw: Option<f32>,
}

impl ChaseUpdate {
    pub fn moved(&self) -> bool {
        self.yaw.is_some()
    }
}

/// Move one step straight toward the target.
///
/// Inside the deadband, or when the direction cannot be normalised, the chaser
/// holds position. The step never carries the chaser past the target.
pub fn evaluate(ctx: &ChaseContext) -> ChaseUpdate {
    let hold = ChaseUpdate {
        new_position: ctx.position,
        yaw: None,
    };

    let offset = ctx.target - ctx.position;
    let distance = offset.length();
    if !(distance > CHASE_DEADBAND) {
        return hold;
    }
    let Some(direction) = offset.try_normalize() else {
        return hold;
    };

    let step = (ctx.speed * ctx.dt).clamp(0.0, distance);
    ChaseUpdate {
        new_position: ctx.position + direction * step,
        yaw: Some(direction.x.atan2(direction.z)),
    }
}

/// Advance a bullet cube: straight-line flight plus shrinking.
/// Returns the new position and scale; scale never goes below zero.
pub fn fly_bullet(position: Vec3, velocity: Vec3, scale: f32, dt: f32) -> (Vec3, f32) {
    let new_position = position + velocity * dt;
    let new_scale = (scale - BULLET_SHRINK_RATE * dt).max(0.0);
    (new_position, new_scale)
}
