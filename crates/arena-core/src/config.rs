//! Runtime-adjustable settings and arena layout.
//!
//! Everything here resets to defaults when a new engine is created.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::SimError;

/// Settings the pause menu may change between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Look sensitivity (degrees per pointer unit).
    pub sensitivity: f32,
    /// Live colliders maintained by the population manager.
    pub collider_target: u32,
    pub spawn_min_radius: f32,
    pub spawn_max_radius: f32,
    /// Distance after which a projectile is spent.
    pub projectile_max_range: f32,
    /// Longest integration sub-step (seconds).
    pub max_substep: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            collider_target: DEFAULT_COLLIDER_TARGET,
            spawn_min_radius: DEFAULT_SPAWN_MIN_RADIUS,
            spawn_max_radius: DEFAULT_SPAWN_MAX_RADIUS,
            projectile_max_range: DEFAULT_PROJECTILE_MAX_RANGE,
            max_substep: DEFAULT_MAX_SUBSTEP,
        }
    }
}

impl Tuning {
    /// Reject settings the systems cannot run with.
    pub fn validate(&self) -> Result<(), SimError> {
        let radii_ok = self.spawn_min_radius.is_finite()
            && self.spawn_max_radius.is_finite()
            && self.spawn_min_radius >= 0.0
            && self.spawn_min_radius <= self.spawn_max_radius;
        if !radii_ok {
            return Err(SimError::InvalidSpawnRadius {
                min: self.spawn_min_radius,
                max: self.spawn_max_radius,
            });
        }
        if self.collider_target > MAX_COLLIDER_TARGET {
            return Err(SimError::ColliderTargetTooLarge {
                requested: self.collider_target,
                max: MAX_COLLIDER_TARGET,
            });
        }
        if !(self.max_substep.is_finite() && self.max_substep > 0.0) {
            return Err(SimError::InvalidSubstep(self.max_substep));
        }
        if !(self.projectile_max_range.is_finite() && self.projectile_max_range > 0.0) {
            return Err(SimError::InvalidProjectileRange(self.projectile_max_range));
        }
        if !(self.sensitivity.is_finite() && self.sensitivity > 0.0) {
            return Err(SimError::InvalidSensitivity(self.sensitivity));
        }
        Ok(())
    }

    /// Apply a sensitivity slider value, clamped to the menu range.
    pub fn set_sensitivity(&mut self, value: f32) {
        if value.is_finite() {
            self.sensitivity = value.clamp(MIN_SENSITIVITY, MAX_SENSITIVITY);
        }
    }

    /// Apply a collider-count slider value, clamped to the menu range.
    pub fn set_collider_target(&mut self, count: u32) {
        self.collider_target = count.min(MAX_COLLIDER_TARGET);
    }
}

/// Static decoration placed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaLayout {
    pub pillars: Vec<Vec3>,
    pub unbreakables: Vec<Vec3>,
    /// Whether the boss is part of this arena.
    pub boss: bool,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            pillars: PILLAR_POSITIONS.to_vec(),
            unbreakables: Vec::new(),
            boss: true,
        }
    }
}
