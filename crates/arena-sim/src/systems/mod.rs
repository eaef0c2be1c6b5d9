//! ECS systems that operate on the simulation world each step.
//!
//! Systems are free functions that take `&mut World` (or `&World` for read-only).
//! They do not own state. All state lives in components or is passed in.

pub mod cleanup;
pub mod combat;
pub mod enemy_ai;
pub mod kinematics;
pub mod particles;
pub mod player_control;
pub mod population;
pub mod snapshot;
