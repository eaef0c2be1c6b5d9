//! Battle log kept by the engine for the HUD.
//!
//! Stored on `SimulationEngine`, NOT as ECS entities.

use serde::{Deserialize, Serialize};

/// Running hit/kill statistics for the current session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Trigger pulls that passed the cooldown.
    pub shots_fired: u32,
    /// Hits on colliders or the boss.
    pub shots_landed: u32,
    /// Targets whose health crossed to zero.
    pub kills: u32,
}

impl SessionStats {
    /// Landed / fired in percent; 0 before the first shot.
    pub fn accuracy_pct(&self) -> f32 {
        if self.shots_fired == 0 {
            return 0.0;
        }
        self.shots_landed as f32 / self.shots_fired as f32 * 100.0
    }

    /// Record a hit and whether it took the target from alive to dead.
    pub fn record_hit(&mut self, health_before: f32, health_after: f32) -> bool {
        self.shots_landed += 1;
        let killed = health_before > 0.0 && health_after <= 0.0;
        if killed {
            self.kills += 1;
        }
        killed
    }
}
