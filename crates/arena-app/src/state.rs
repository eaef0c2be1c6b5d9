//! Host state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use anyhow::{anyhow, bail, Context, Result};

use arena_core::commands::{InputIntent, PlayerCommand};
use arena_core::state::RenderSnapshot;
use arena_sim::engine::{SimConfig, SimulationEngine};

use crate::game_loop;

/// Messages sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// Replace the held controls used for the following frames.
    Intent(InputIntent),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest snapshot published by the game loop, read by the renderer between ticks.
pub type SharedSnapshot = Arc<Mutex<Option<RenderSnapshot>>>;

/// Handle on a running game loop.
///
/// - `command_tx` is `None` until `start` succeeds and again after `stop`.
/// - `latest_snapshot` is shared with the loop thread and updated after every tick.
#[derive(Default)]
pub struct AppState {
    command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    thread: Mutex<Option<JoinHandle<()>>>,
    pub latest_snapshot: SharedSnapshot,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the engine and start the loop thread. Configuration errors surface
    /// here, before the first tick.
    pub fn start(&self, config: SimConfig) -> Result<()> {
        let mut tx_lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel lock poisoned: {e}"))?;
        if tx_lock.is_some() {
            bail!("simulation already running");
        }

        let engine = SimulationEngine::new(config).context("invalid simulation config")?;
        let (tx, handle) = game_loop::spawn_game_loop(engine, self.latest_snapshot.clone())
            .context("failed to spawn game loop thread")?;

        *tx_lock = Some(tx);
        *self
            .thread
            .lock()
            .map_err(|e| anyhow!("thread handle lock poisoned: {e}"))? = Some(handle);
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }

    /// Forward a message to the loop thread.
    pub fn send(&self, command: GameLoopCommand) -> Result<()> {
        let tx_lock = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel lock poisoned: {e}"))?;
        match tx_lock.as_ref() {
            Some(tx) => tx
                .send(command)
                .map_err(|e| anyhow!("game loop hung up: {e}")),
            None => bail!("simulation not started"),
        }
    }

    /// Copy of the most recent snapshot, if any tick has run.
    pub fn snapshot(&self) -> Result<Option<RenderSnapshot>> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|e| anyhow!("snapshot lock poisoned: {e}"))?;
        Ok(lock.clone())
    }

    /// Ask the loop to exit and wait for the thread.
    pub fn stop(&self) -> Result<()> {
        let tx = self
            .command_tx
            .lock()
            .map_err(|e| anyhow!("command channel lock poisoned: {e}"))?
            .take();
        if let Some(tx) = tx {
            // A loop that already exited has dropped its receiver; that is fine.
            let _ = tx.send(GameLoopCommand::Shutdown);
        }

        let handle = self
            .thread
            .lock()
            .map_err(|e| anyhow!("thread handle lock poisoned: {e}"))?
            .take();
        if let Some(handle) = handle {
            handle
                .join()
                .map_err(|_| anyhow!("game loop thread panicked"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::types::Aabb;
    use glam::Vec3;

    #[test]
    fn test_app_state_creation() {
        let state = AppState::new();
        assert!(!state.is_running());
        assert!(state.snapshot().unwrap().is_none());
        assert!(state
            .send(GameLoopCommand::Player(PlayerCommand::Resume))
            .is_err());
    }

    #[test]
    fn test_start_rejects_bad_config() {
        let state = AppState::new();
        let config = SimConfig {
            boss_bounds: Aabb::new(Vec3::ONE, Vec3::ZERO),
            ..SimConfig::default()
        };
        assert!(state.start(config).is_err());
        assert!(!state.is_running());
    }

    #[test]
    fn test_start_twice_fails() {
        let state = AppState::new();
        state.start(SimConfig::default()).unwrap();
        assert!(state.is_running());
        assert!(state.start(SimConfig::default()).is_err());
        state.stop().unwrap();
        assert!(!state.is_running());
    }
}
