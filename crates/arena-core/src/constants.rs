//! Simulation constants and tuning parameters.

use glam::Vec3;

// --- Timing ---

/// Longest frame the engine will simulate in one `tick` call (seconds).
/// Longer frames (debugger stops, window drags) are clamped to this.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Default upper bound for one integration sub-step (seconds).
pub const DEFAULT_MAX_SUBSTEP: f32 = 1.0 / 120.0;

// --- World ---

/// Constant vertical acceleration (units/s²). Negative is down.
pub const GRAVITY: f32 = -9.81;

/// Height of the ground plane.
pub const GROUND_Y: f32 = -1.0;

// --- Player ---

pub const PLAYER_START_POSITION: Vec3 = Vec3::new(-3.0, 0.0, 0.0);
/// Where `ResetPlayer` puts the player (drops onto the ground).
pub const PLAYER_RESET_POSITION: Vec3 = Vec3::new(-3.0, 3.0, 0.0);
pub const PLAYER_HEIGHT: f32 = 1.0;
pub const PLAYER_MAX_HEALTH: f32 = 1.0;
pub const PLAYER_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);
/// Walk speed (units/s).
pub const PLAYER_MOVE_SPEED: f32 = 50.0;
/// Upward velocity given by a jump.
pub const PLAYER_JUMP_SPEED: f32 = 7.0;
/// Tolerance above the ground within which the player counts as grounded.
pub const GROUNDED_EPSILON: f32 = 0.01;
/// Pitch limit in degrees (both directions).
pub const PITCH_LIMIT_DEG: f32 = 89.0;

// --- Weapon ---

pub const AMMO_CAPACITY: u32 = 30;
/// Minimum seconds between two shots while the trigger is held.
pub const FIRE_COOLDOWN_SECS: f64 = 0.05;
/// Distance in front of the eye at which shots appear.
pub const MUZZLE_OFFSET: f32 = 1.0;

pub const PROJECTILE_SPEED: f32 = 100.2;
pub const PROJECTILE_DAMAGE: f32 = 0.5;
pub const PROJECTILE_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);
pub const PROJECTILE_ROTATION: Vec3 = Vec3::new(3.2, 0.0, 0.0);
pub const PROJECTILE_SPIN: Vec3 = Vec3::new(0.0, 0.0, 254.993);
pub const DEFAULT_PROJECTILE_MAX_RANGE: f32 = 75.0;

/// Legacy bullet cubes fly at this speed and shrink until they vanish.
pub const BULLET_SPEED: f32 = 20.0;
pub const BULLET_DAMAGE: f32 = 0.1;
/// Scale lost per second by a bullet cube.
pub const BULLET_SHRINK_RATE: f32 = 0.2;

// --- Enemies ---

/// Chase speed (units/s).
pub const ENEMY_SPEED: f32 = 3.0;
/// Below this distance a chaser holds position.
pub const CHASE_DEADBAND: f32 = 0.1;
pub const COLLIDER_MAX_HEALTH: f32 = 1.0;
pub const ENEMY_SCALE: f32 = 1.0;
pub const ENEMY_HEIGHT: f32 = 1.0;
/// Colour-phase timer speed (radians of the colour sine per second).
pub const COLOR_PHASE_RATE: f32 = 5.0;
pub const COLLIDER_SPAWN_COLOR: Vec3 = Vec3::new(0.0, 0.5, 0.3);
pub const CHASER_COLOR: Vec3 = Vec3::new(0.0, 0.5, 0.5);

// --- Population ---

pub const DEFAULT_COLLIDER_TARGET: u32 = 20;
/// Upper bound accepted for the live collider target.
pub const MAX_COLLIDER_TARGET: u32 = 50;
pub const DEFAULT_SPAWN_MIN_RADIUS: f32 = 15.0;
pub const DEFAULT_SPAWN_MAX_RADIUS: f32 = 30.0;

// --- Look ---

pub const DEFAULT_SENSITIVITY: f32 = 0.1;
pub const MIN_SENSITIVITY: f32 = 0.01;
pub const MAX_SENSITIVITY: f32 = 1.0;

// --- Particles ---

pub const SPLASH_PARTICLE_COUNT: usize = 20;
pub const SPLASH_MIN_SPEED: f32 = 2.0;
pub const SPLASH_MAX_SPEED: f32 = 22.0;
pub const PARTICLE_START_LIFE: f32 = 1.0;
/// Life lost per second (~0.67 s lifetime).
pub const PARTICLE_DECAY_RATE: f32 = 1.5;
/// Fraction of vertical speed kept after a bounce.
pub const BOUNCE_RESTITUTION: f32 = 0.4;
/// Fraction of horizontal speed kept after a bounce.
pub const BOUNCE_FRICTION: f32 = 0.8;
pub const GROUND_SPLASH_COLOR: Vec3 = Vec3::new(0.7, 0.9, 1.0);
pub const BOSS_SPLASH_COLOR: Vec3 = Vec3::new(1.0, 0.45, 0.1);

// --- Entity caps ---

pub const MAX_PROJECTILES: usize = 512;
pub const MAX_BULLETS: usize = 512;
pub const MAX_PARTICLES: usize = 8192;

// --- Static obstacles ---

pub const PILLAR_POSITIONS: [Vec3; 4] = [
    Vec3::new(30.0, 0.0, 30.0),
    Vec3::new(-30.0, 0.0, 30.0),
    Vec3::new(30.0, 0.0, -30.0),
    Vec3::new(-30.0, 0.0, -30.0),
];
pub const PILLAR_COLOR: Vec3 = Vec3::new(0.8, 0.2, 0.2);
pub const UNBREAKABLE_COLOR: Vec3 = Vec3::new(0.5, 0.0, 1.0);

// --- Boss ---

pub const BOSS_START_POSITION: Vec3 = Vec3::new(12.0, 3.0, 0.0);
pub const BOSS_MAX_HEALTH: f32 = 1000.0;
pub const BOSS_HEIGHT: f32 = 3.0;
/// Uniform scale applied to the boss model.
pub const BOSS_MODEL_SCALE: f32 = 1.0;
/// Yaw rate of the boss model (radians per second).
pub const BOSS_SPIN_RATE: f32 = 0.5;
/// Model-space bounds used when no mesh extents are supplied.
pub const BOSS_DEFAULT_BOUNDS_MIN: Vec3 = Vec3::new(-1.5, -3.0, -1.5);
pub const BOSS_DEFAULT_BOUNDS_MAX: Vec3 = Vec3::new(1.5, 3.0, 1.5);
