//! Game loop thread: ticks the simulation at 60Hz with wall-clock frame times.
//!
//! The engine is built by the caller and moved into this thread. Commands and
//! held controls arrive via an `mpsc` channel. Snapshots are stored in shared
//! state for the renderer to poll between ticks.

use std::io;
use std::sync::mpsc;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use glam::Vec2;

use arena_core::commands::InputIntent;
use arena_core::state::RenderSnapshot;
use arena_sim::engine::SimulationEngine;

use crate::state::{GameLoopCommand, SharedSnapshot};

/// Frames per second the loop paces itself to.
pub const FRAME_RATE: u32 = 60;

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / FRAME_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    latest_snapshot: SharedSnapshot,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("arena-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: SimulationEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<RenderSnapshot>>,
) {
    let mut intent = InputIntent::idle();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;
    let mut frames: u64 = 0;

    log::debug!("game loop started");
    loop {
        // 1. Drain all pending messages
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Intent(next)) => {
                    intent = InputIntent {
                        // Pointer offsets accumulate until a frame consumes them.
                        look_delta: intent.look_delta + next.look_delta,
                        ..next
                    };
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!(
                        "game loop stopped after {frames} frames, {} sim steps",
                        engine.time().tick
                    );
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance by the measured frame time (engine handles pause and clamping)
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        let snapshot = engine.tick(dt, &intent);
        intent.look_delta = Vec2::ZERO;
        frames += 1;

        // 3. Store latest snapshot for the renderer
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next frame
        next_frame_time += FRAME_DURATION;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > FRAME_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use arena_core::commands::PlayerCommand;
    use arena_core::enums::GamePhase;
    use arena_sim::engine::SimConfig;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::Resume))
            .unwrap();
        tx.send(GameLoopCommand::Intent(InputIntent::firing()))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::Resume)
        ));
        assert!(matches!(commands[1], GameLoopCommand::Intent(i) if i.fire));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_loop_ticks_and_shuts_down() {
        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let latest: SharedSnapshot = Arc::new(Mutex::new(None));
        let (tx, handle) = spawn_game_loop(engine, latest.clone()).unwrap();

        tx.send(GameLoopCommand::Player(PlayerCommand::Resume))
            .unwrap();
        std::thread::sleep(Duration::from_millis(250));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.time.tick > 0);
        assert!(snapshot.time.elapsed_secs > 0.0);
    }

    #[test]
    fn test_loop_exits_when_sender_dropped() {
        let engine = SimulationEngine::new(SimConfig::default()).unwrap();
        let (tx, handle) = spawn_game_loop(engine, Arc::new(Mutex::new(None))).unwrap();
        drop(tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.666ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }
}
