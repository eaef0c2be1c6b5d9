//! Player input consumed by the simulation.
//!
//! Edge-triggered actions and settings changes arrive as queued
//! `PlayerCommand`s and are processed at the next tick boundary.
//! Held controls arrive once per tick as an `InputIntent`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::FireMode;

/// Discrete player and menu actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Simulation control ---
    /// Flip between paused and active.
    TogglePause,
    /// Leave the pause menu.
    Resume,

    // --- Session ---
    /// Clear the arena, reset the player and respawn the enemy population.
    ResetAll,
    /// Put the player back at the start and clear the battle log.
    ResetPlayer,
    /// Toggle first-person / sky camera.
    SwitchCamera,

    // --- Settings ---
    /// Look sensitivity (degrees per pointer unit).
    SetSensitivity { value: f32 },
    /// Number of live colliders the population manager maintains.
    SetColliderTarget { count: u32 },
    /// Choose what the trigger fires.
    SetFireMode { mode: FireMode },
}

/// Movement keys held this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveAxes {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Jump; only takes effect while grounded.
    pub up: bool,
    pub down: bool,
}

/// Level-triggered controls sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputIntent {
    pub movement: MoveAxes,
    /// Pointer offset since the previous tick, x right and y down.
    pub look_delta: Vec2,
    /// Trigger held; repeats at the weapon cooldown.
    pub fire: bool,
}

impl InputIntent {
    /// No keys held, no pointer motion.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Only the trigger held.
    pub fn firing() -> Self {
        Self {
            fire: true,
            ..Self::default()
        }
    }
}
