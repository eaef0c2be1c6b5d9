//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `RenderSnapshot`s. Completely headless
//! (no window or renderer dependency), enabling deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arena_core::commands::{InputIntent, PlayerCommand};
use arena_core::components::{Boss, Enemy, Projectile, SplashParticle};
use arena_core::config::{ArenaLayout, Tuning};
use arena_core::constants::*;
use arena_core::enums::{CameraMode, FireMode, GamePhase};
use arena_core::error::SimError;
use arena_core::events::GameEvent;
use arena_core::state::RenderSnapshot;
use arena_core::types::{Aabb, Position, SimTime};

use crate::session::SessionStats;
use crate::systems;
use crate::systems::particles::SplashRequest;
use crate::systems::player_control::ControlContext;
use crate::systems::snapshot::SnapshotContext;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Open on the pause menu, as the game always has.
    pub start_paused: bool,
    pub fire_mode: FireMode,
    pub tuning: Tuning,
    pub layout: ArenaLayout,
    /// Model-space bounds of the boss mesh.
    pub boss_bounds: Aabb,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            start_paused: true,
            fire_mode: FireMode::default(),
            tuning: Tuning::default(),
            layout: ArenaLayout::default(),
            boss_bounds: Aabb::new(BOSS_DEFAULT_BOUNDS_MIN, BOSS_DEFAULT_BOUNDS_MAX),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    player: Entity,
    time: SimTime,
    phase: GamePhase,
    camera: CameraMode,
    fire_mode: FireMode,
    tuning: Tuning,
    layout: ArenaLayout,
    boss_bounds: Aabb,
    rng: ChaCha8Rng,
    stats: SessionStats,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    splash_requests: Vec<SplashRequest>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Validate the config, build the arena and spawn the starting colliders.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.tuning.validate()?;
        if !config.boss_bounds.is_valid() {
            return Err(SimError::InvalidBossBounds);
        }

        let mut world = World::new();
        world_setup::setup_arena(&mut world, &config.layout, config.boss_bounds);
        let player = world_setup::find_player(&world).ok_or(SimError::MissingPlayer)?;

        let mut engine = Self {
            world,
            player,
            time: SimTime::default(),
            phase: if config.start_paused {
                GamePhase::Paused
            } else {
                GamePhase::Active
            },
            camera: CameraMode::default(),
            fire_mode: config.fire_mode,
            tuning: config.tuning,
            layout: config.layout,
            boss_bounds: config.boss_bounds,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            stats: SessionStats::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            splash_requests: Vec::new(),
            events: Vec::new(),
        };
        engine.populate();

        log::info!(
            "arena ready: seed {}, {} colliders, phase {:?}",
            config.seed,
            engine.tuning.collider_target,
            engine.phase
        );
        Ok(engine)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame of `dt_secs` wall-clock seconds and
    /// return the resulting snapshot.
    ///
    /// The frame is clamped to `MAX_FRAME_DT` and split into equal sub-steps no
    /// longer than `Tuning::max_substep`, so fast movers cannot tunnel through
    /// targets on a long frame. Nothing advances while paused.
    pub fn tick(&mut self, dt_secs: f32, intent: &InputIntent) -> RenderSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            systems::player_control::apply_look(
                &mut self.world,
                self.player,
                intent.look_delta,
                self.tuning.sensitivity,
            );

            let dt = clamp_frame_dt(dt_secs);
            if dt > 0.0 {
                let steps = substep_count(dt, self.tuning.max_substep);
                let step_dt = dt / steps as f32;
                for _ in 0..steps {
                    self.run_systems(step_dt, intent);
                    self.time.advance(step_dt);
                }
            }
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &SnapshotContext {
                time: &self.time,
                phase: self.phase,
                camera: self.camera,
                stats: &self.stats,
            },
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Battle log for the current session.
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera
    }

    pub fn fire_mode(&self) -> FireMode {
        self.fire_mode
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player entity.
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Mutable world access for placing test fixtures.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command. Every command works from the pause menu.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::TogglePause => {
                self.phase = match self.phase {
                    GamePhase::Active => GamePhase::Paused,
                    GamePhase::Paused => GamePhase::Active,
                };
                log::info!("phase -> {:?}", self.phase);
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                    log::info!("phase -> {:?}", self.phase);
                }
            }
            PlayerCommand::ResetAll => self.reset_all(),
            PlayerCommand::ResetPlayer => self.reset_player(),
            PlayerCommand::SwitchCamera => {
                self.camera = match self.camera {
                    CameraMode::FirstPerson => CameraMode::Sky,
                    CameraMode::Sky => CameraMode::FirstPerson,
                };
            }
            PlayerCommand::SetSensitivity { value } => {
                self.tuning.set_sensitivity(value);
            }
            PlayerCommand::SetColliderTarget { count } => {
                self.tuning.set_collider_target(count);
                log::debug!("collider target -> {}", self.tuning.collider_target);
            }
            PlayerCommand::SetFireMode { mode } => {
                self.fire_mode = mode;
            }
        }
    }

    fn reset_player(&mut self) {
        systems::player_control::reset_player(&mut self.world, self.player);
        self.stats = SessionStats::default();
        log::debug!("player reset");
    }

    /// Clear every transient entity, reset the player, restore a defeated
    /// boss and refill the colliders.
    fn reset_all(&mut self) {
        self.despawn_buffer.clear();
        self.despawn_buffer
            .extend(self.world.query::<&Enemy>().iter().map(|(e, _)| e));
        self.despawn_buffer
            .extend(self.world.query::<&Projectile>().iter().map(|(e, _)| e));
        self.despawn_buffer
            .extend(self.world.query::<&SplashParticle>().iter().map(|(e, _)| e));
        let cleared = self.despawn_buffer.len();
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        self.splash_requests.clear();

        self.reset_player();
        if self.layout.boss && world_setup::count::<Boss>(&self.world) == 0 {
            world_setup::spawn_boss(&mut self.world, self.boss_bounds);
        }
        self.populate();
        log::debug!("arena reset, {cleared} entities cleared");
    }

    fn player_position(&self) -> Vec3 {
        self.world
            .get::<&Position>(self.player)
            .map(|pos| pos.0)
            .unwrap_or(PLAYER_START_POSITION)
    }

    fn populate(&mut self) {
        let center = self.player_position();
        systems::population::run(
            &mut self.world,
            &mut self.rng,
            &self.tuning,
            center,
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }

    /// Run all systems in order for one sub-step.
    fn run_systems(&mut self, dt: f32, intent: &InputIntent) {
        // 1. Movement, jump and fire
        systems::player_control::run(
            &mut self.world,
            &mut self.rng,
            &ControlContext {
                player: self.player,
                intent,
                fire_mode: self.fire_mode,
                now: self.time.elapsed_secs,
                dt,
            },
            &mut self.stats,
            &mut self.events,
        );
        // 2. Gravity, ground landing, projectile flight
        systems::kinematics::run(
            &mut self.world,
            dt,
            self.tuning.projectile_max_range,
            &mut self.splash_requests,
            &mut self.events,
        );
        // 3. Impacts
        systems::combat::run(
            &mut self.world,
            &mut self.stats,
            &mut self.splash_requests,
            &mut self.events,
        );
        // 4. Chase, bullet flight, colour phase, boss spin
        systems::enemy_ai::run(&mut self.world, dt);
        // 5. Splash bursts
        systems::particles::spawn_bursts(
            &mut self.world,
            &mut self.rng,
            &mut self.splash_requests,
            &mut self.events,
        );
        systems::particles::run(&mut self.world, dt);
        // 6. Spent projectiles, dead particles, defeated boss
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 7. Dead enemies out, fresh colliders in
        self.populate();
    }
}

/// Clamp a wall-clock frame time into `[0, MAX_FRAME_DT]`; garbage becomes zero.
pub fn clamp_frame_dt(dt_secs: f32) -> f32 {
    if dt_secs.is_finite() {
        dt_secs.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Number of equal sub-steps needed so none exceeds `max_substep`.
pub fn substep_count(dt: f32, max_substep: f32) -> u32 {
    // Exact multiples may land a hair above an integer after division.
    let ratio = dt / max_substep - 1e-4;
    (ratio.ceil() as u32).max(1)
}
