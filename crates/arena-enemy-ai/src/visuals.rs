//! Colour state derived from each enemy's colour-phase timer.

use glam::Vec3;

use arena_core::constants::{CHASER_COLOR, COLOR_PHASE_RATE};

/// Advance the colour-phase timer.
pub fn advance_color_time(color_time: f32, dt: f32) -> f32 {
    color_time + dt * COLOR_PHASE_RATE
}

/// Chasers render in a fixed teal.
pub fn chaser_color() -> Vec3 {
    CHASER_COLOR
}

/// Bullet cubes pulse between magenta and black.
pub fn bullet_color(color_time: f32) -> Vec3 {
    let s = color_time.sin() * 0.5;
    Vec3::new(s + 0.5, s, s + 0.5)
}

/// Stationary colliders cycle through three out-of-phase channels.
pub fn idle_color(color_time: f32) -> Vec3 {
    Vec3::new(
        color_time.sin() * 0.5 + 0.5,
        (4.0 * color_time).sin() * 0.5,
        (2.0 * color_time).sin() * 0.5 + 0.5,
    )
}
