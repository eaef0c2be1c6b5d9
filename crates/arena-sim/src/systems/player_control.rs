//! Player control system: look, movement, jump and the fire trigger.

use glam::{Vec2, Vec3};
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use arena_core::commands::{InputIntent, MoveAxes};
use arena_core::components::{Body, Enemy, PlayerState, Projectile};
use arena_core::constants::*;
use arena_core::enums::FireMode;
use arena_core::events::{GameEvent, SpawnKind};
use arena_core::types::{Position, Velocity};

use crate::session::SessionStats;
use crate::world_setup::{self, fresh_player_state, look_front};

/// Yaw and pitch after a pointer offset. Yaw wraps into `[0, 360)`,
/// pitch is clamped so the view never flips over the pole.
pub fn turn(yaw: f32, pitch: f32, look_delta: Vec2, sensitivity: f32) -> (f32, f32) {
    let yaw = (yaw + look_delta.x * sensitivity).rem_euclid(360.0);
    let pitch = (pitch - look_delta.y * sensitivity).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    (yaw, pitch)
}

/// Displacement direction for the held movement keys (not normalised;
/// diagonal input moves faster, as it always has).
pub fn move_direction(movement: &MoveAxes, front: Vec3, up: Vec3) -> Vec3 {
    let flat_front = Vec3::new(front.x, 0.0, front.z).normalize_or_zero();
    let right = front.cross(up).normalize_or_zero();

    let mut direction = Vec3::ZERO;
    if movement.forward {
        direction += flat_front;
    }
    if movement.back {
        direction -= flat_front;
    }
    if movement.left {
        direction -= right;
    }
    if movement.right {
        direction += right;
    }
    if movement.down {
        direction -= up;
    }
    direction
}

/// Whether the trigger may fire again at `now`.
pub fn cooldown_ready(last_shot_secs: Option<f64>, now: f64) -> bool {
    match last_shot_secs {
        None => true,
        Some(last) => now - last >= FIRE_COOLDOWN_SECS,
    }
}

/// Apply the pointer offset once per tick.
pub fn apply_look(world: &mut World, player: Entity, look_delta: Vec2, sensitivity: f32) {
    if look_delta == Vec2::ZERO {
        return;
    }
    let Ok(mut state) = world.get::<&mut PlayerState>(player) else {
        log::error!("player {player:?} has no PlayerState");
        return;
    };
    let (yaw, pitch) = turn(state.yaw, state.pitch, look_delta, sensitivity);
    state.yaw = yaw;
    state.pitch = pitch;
    state.front = look_front(yaw, pitch);
}

/// Everything `run` needs besides the world.
pub struct ControlContext<'a> {
    pub player: Entity,
    pub intent: &'a InputIntent,
    pub fire_mode: FireMode,
    /// Session time at the start of this step.
    pub now: f64,
    pub dt: f32,
}

/// Move, jump and fire for one step.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    ctx: &ControlContext<'_>,
    stats: &mut SessionStats,
    events: &mut Vec<GameEvent>,
) {
    let Ok((state, pos, vel, body)) =
        world.query_one_mut::<(&mut PlayerState, &mut Position, &mut Velocity, &Body)>(ctx.player)
    else {
        log::error!("player {:?} is missing its components", ctx.player);
        return;
    };

    let direction = move_direction(&ctx.intent.movement, state.front, state.up);
    pos.0 += direction * PLAYER_MOVE_SPEED * ctx.dt;

    let grounded = pos.0.y <= GROUND_Y + body.height + GROUNDED_EPSILON;
    if ctx.intent.movement.up && grounded {
        vel.0.y = PLAYER_JUMP_SPEED;
    }

    if !(ctx.intent.fire && cooldown_ready(state.last_shot_secs, ctx.now)) {
        return;
    }

    state.last_shot_secs = Some(ctx.now);
    state.ammo = state.ammo.saturating_sub(1);
    if state.ammo == 0 {
        state.ammo = AMMO_CAPACITY;
    }
    let ammo_left = state.ammo;
    let origin = pos.0 + state.front * MUZZLE_OFFSET;
    let front = state.front;

    stats.shots_fired += 1;
    events.push(GameEvent::ShotFired {
        mode: ctx.fire_mode,
        ammo_left,
    });
    fire(world, rng, ctx.fire_mode, origin, front, events);
}

/// Launch one shot unless its collection is full.
fn fire(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    mode: FireMode,
    origin: Vec3,
    front: Vec3,
    events: &mut Vec<GameEvent>,
) {
    match mode {
        FireMode::Projectile => {
            if world_setup::count::<Projectile>(world) >= MAX_PROJECTILES {
                drop_spawn(SpawnKind::Projectile, events);
                return;
            }
            world_setup::spawn_projectile(world, origin, front);
        }
        FireMode::BulletCube => {
            let bullets = world
                .query::<&Enemy>()
                .iter()
                .filter(|(_, enemy)| !enemy.role.is_collider())
                .count();
            if bullets >= MAX_BULLETS {
                drop_spawn(SpawnKind::Bullet, events);
                return;
            }
            world_setup::spawn_bullet(world, rng, origin, front);
        }
    }
}

fn drop_spawn(kind: SpawnKind, events: &mut Vec<GameEvent>) {
    log::trace!("{kind:?} cap reached, shot dropped");
    events.push(GameEvent::SpawnDropped { kind });
}

/// Put the player back at the reset point with a fresh look basis and full ammo.
pub fn reset_player(world: &mut World, player: Entity) {
    let Ok((state, pos, vel, body)) = world
        .query_one_mut::<(&mut PlayerState, &mut Position, &mut Velocity, &mut Body)>(player)
    else {
        log::error!("player {player:?} is missing its components");
        return;
    };
    *state = fresh_player_state();
    pos.0 = PLAYER_RESET_POSITION;
    vel.0 = Vec3::ZERO;
    body.height = PLAYER_HEIGHT;
}
