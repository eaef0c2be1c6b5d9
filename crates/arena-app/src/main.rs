use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use glam::Vec2;

use arena_app::logging;
use arena_app::state::{AppState, GameLoopCommand};
use arena_core::commands::{InputIntent, MoveAxes, PlayerCommand};
use arena_core::enums::FireMode;
use arena_sim::engine::SimConfig;

/// One leg of the scripted session: hold `intent` for `duration`.
struct Leg {
    label: &'static str,
    commands: Vec<PlayerCommand>,
    intent: InputIntent,
    duration: Duration,
}

fn demo_script() -> Vec<Leg> {
    let strafe_and_fire = InputIntent {
        movement: MoveAxes {
            right: true,
            ..MoveAxes::default()
        },
        look_delta: Vec2::new(40.0, 0.0),
        fire: true,
    };
    vec![
        Leg {
            label: "resume and look around",
            commands: vec![PlayerCommand::Resume],
            intent: InputIntent {
                look_delta: Vec2::new(120.0, -20.0),
                ..InputIntent::idle()
            },
            duration: Duration::from_millis(300),
        },
        Leg {
            label: "strafe and fire projectiles",
            commands: Vec::new(),
            intent: strafe_and_fire,
            duration: Duration::from_secs(2),
        },
        Leg {
            label: "switch to bullet cubes",
            commands: vec![
                PlayerCommand::SetFireMode {
                    mode: FireMode::BulletCube,
                },
                PlayerCommand::SetColliderTarget { count: 30 },
            ],
            intent: InputIntent::firing(),
            duration: Duration::from_secs(2),
        },
        Leg {
            label: "cease fire",
            commands: vec![PlayerCommand::SwitchCamera],
            intent: InputIntent::idle(),
            duration: Duration::from_millis(700),
        },
    ]
}

fn main() -> Result<()> {
    logging::init(logging::verbose_from_env());

    let app = AppState::new();
    app.start(SimConfig::default())
        .context("could not start the arena")?;

    for leg in demo_script() {
        log::info!("demo: {}", leg.label);
        for command in leg.commands {
            app.send(GameLoopCommand::Player(command))?;
        }
        app.send(GameLoopCommand::Intent(leg.intent))?;
        thread::sleep(leg.duration);
    }

    app.send(GameLoopCommand::Player(PlayerCommand::TogglePause))?;
    thread::sleep(Duration::from_millis(50));
    let snapshot = app.snapshot()?.context("game loop produced no snapshot")?;
    app.stop()?;

    let stats = &snapshot.stats;
    log::info!(
        "battle log: {} fired, {} landed ({:.1}%), {} kills, {} colliders alive, {:.2}s played",
        stats.shots_fired,
        stats.shots_landed,
        stats.accuracy_pct,
        stats.kills,
        stats.live_colliders,
        stats.elapsed_secs
    );
    if let Some(boss) = &snapshot.boss {
        log::info!("boss health {:.1}/{:.0}", boss.health, boss.max_health);
    }
    println!(
        "{}",
        serde_json::to_string_pretty(stats).context("could not encode stats")?
    );
    Ok(())
}
