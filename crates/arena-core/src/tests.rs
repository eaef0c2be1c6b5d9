#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{Mat4, Quat, Vec3};

    use crate::commands::{InputIntent, PlayerCommand};
    use crate::components::EnemyRole;
    use crate::config::Tuning;
    use crate::constants::*;
    use crate::enums::*;
    use crate::error::SimError;
    use crate::events::{GameEvent, SpawnKind};
    use crate::state::RenderSnapshot;
    use crate::types::{Aabb, Position, SimTime, Velocity};

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::TogglePause,
            PlayerCommand::Resume,
            PlayerCommand::ResetAll,
            PlayerCommand::ResetPlayer,
            PlayerCommand::SwitchCamera,
            PlayerCommand::SetSensitivity { value: 0.25 },
            PlayerCommand::SetColliderTarget { count: 12 },
            PlayerCommand::SetFireMode {
                mode: FireMode::BulletCube,
            },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_command_tag_is_readable() {
        let json = serde_json::to_string(&PlayerCommand::SetColliderTarget { count: 3 }).unwrap();
        assert_eq!(json, r#"{"type":"SetColliderTarget","count":3}"#);
    }

    #[test]
    fn test_input_intent_serde() {
        let intent = InputIntent::firing();
        let json = serde_json::to_string(&intent).unwrap();
        let back: InputIntent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent, back);
        assert!(back.fire);
        assert!(!back.movement.forward);
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::ShotFired {
                mode: FireMode::Projectile,
                ammo_left: 29,
            },
            GameEvent::EnemyKilled {
                enemy_id: 4,
                position: Vec3::new(1.0, 0.0, 2.0),
            },
            GameEvent::SpawnDropped {
                kind: SpawnKind::Particle,
            },
            GameEvent::BossDefeated,
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify RenderSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = RenderSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: RenderSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert_eq!(back.phase, GamePhase::Paused);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_position_range() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 7.0, 4.0);
        assert_relative_eq!(a.horizontal_range_to(&b), 5.0);
        assert_relative_eq!(a.range_to(&b), (9.0f32 + 49.0 + 16.0).sqrt());
    }

    #[test]
    fn test_velocity_speed() {
        let v = Velocity::new(3.0, 12.0, 4.0);
        assert_relative_eq!(v.speed(), 13.0);
        assert_relative_eq!(v.horizontal_speed(), 5.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert_relative_eq!(time.elapsed_secs, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_aabb_from_points() {
        let points = [
            Vec3::new(1.0, -2.0, 0.5),
            Vec3::new(-1.0, 3.0, 0.0),
            Vec3::new(0.0, 0.0, -4.0),
        ];
        let aabb = Aabb::from_points(points).unwrap();
        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, -4.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 3.0, 0.5));
        assert_eq!(aabb.size(), Vec3::new(2.0, 5.0, 4.5));
        assert!(aabb.is_valid());
        assert!(Aabb::from_points(std::iter::empty::<Vec3>()).is_none());
    }

    #[test]
    fn test_aabb_world_point_follows_rotation() {
        // Long thin box along local X.
        let aabb = Aabb::new(Vec3::new(-4.0, -1.0, -0.5), Vec3::new(4.0, 1.0, 0.5));
        let origin = Vec3::new(10.0, 0.0, 0.0);
        let unrotated = Mat4::from_translation(origin);
        let quarter_turn = Mat4::from_scale_rotation_translation(
            Vec3::ONE,
            Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
            origin,
        );

        let along_x = origin + Vec3::new(3.0, 0.0, 0.0);
        let along_z = origin + Vec3::new(0.0, 0.0, 3.0);

        assert!(aabb.contains_world_point(&unrotated, along_x));
        assert!(!aabb.contains_world_point(&unrotated, along_z));
        // After a quarter turn about Y the long axis lies along world Z.
        assert!(!aabb.contains_world_point(&quarter_turn, along_x));
        assert!(aabb.contains_world_point(&quarter_turn, along_z));
    }

    #[test]
    fn test_tuning_defaults_validate() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_tuning_rejects_inverted_radii() {
        let tuning = Tuning {
            spawn_min_radius: 30.0,
            spawn_max_radius: 15.0,
            ..Tuning::default()
        };
        assert_eq!(
            tuning.validate(),
            Err(SimError::InvalidSpawnRadius {
                min: 30.0,
                max: 15.0
            })
        );
    }

    #[test]
    fn test_tuning_rejects_bad_values() {
        let too_many = Tuning {
            collider_target: MAX_COLLIDER_TARGET + 1,
            ..Tuning::default()
        };
        assert!(matches!(
            too_many.validate(),
            Err(SimError::ColliderTargetTooLarge { .. })
        ));

        let zero_step = Tuning {
            max_substep: 0.0,
            ..Tuning::default()
        };
        assert_eq!(zero_step.validate(), Err(SimError::InvalidSubstep(0.0)));

        let nan_range = Tuning {
            projectile_max_range: f32::NAN,
            ..Tuning::default()
        };
        assert!(matches!(
            nan_range.validate(),
            Err(SimError::InvalidProjectileRange(_))
        ));
    }

    #[test]
    fn test_tuning_setters_clamp() {
        let mut tuning = Tuning::default();
        tuning.set_sensitivity(5.0);
        assert_eq!(tuning.sensitivity, MAX_SENSITIVITY);
        tuning.set_sensitivity(0.0);
        assert_eq!(tuning.sensitivity, MIN_SENSITIVITY);
        tuning.set_sensitivity(f32::NAN);
        assert_eq!(tuning.sensitivity, MIN_SENSITIVITY);

        tuning.set_collider_target(500);
        assert_eq!(tuning.collider_target, MAX_COLLIDER_TARGET);
        tuning.set_collider_target(0);
        assert_eq!(tuning.collider_target, 0);
    }

    #[test]
    fn test_enemy_role_helpers() {
        let collider = EnemyRole::Collider {
            health: 0.4,
            chases: true,
        };
        let bullet = EnemyRole::Bullet { steps_alive: 3 };
        assert_eq!(collider.kind(), EnemyKind::Collider);
        assert_eq!(bullet.kind(), EnemyKind::Bullet);
        assert!(collider.is_collider());
        assert!(!bullet.is_collider());
        assert_eq!(collider.health(), Some(0.4));
        assert_eq!(bullet.health(), None);
    }

    #[test]
    fn test_error_messages() {
        let err = SimError::ColliderTargetTooLarge {
            requested: 80,
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "collider target 80 exceeds the maximum of 50"
        );
    }
}
