#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec3;
    use rstest::rstest;

    use arena_core::constants::*;

    use crate::chase::{evaluate, fly_bullet, ChaseContext};
    use crate::visuals::{advance_color_time, bullet_color, chaser_color, idle_color};

    fn make_context(position: Vec3, target: Vec3, dt: f32) -> ChaseContext {
        ChaseContext {
            position,
            target,
            speed: ENEMY_SPEED,
            dt,
        }
    }

    #[test]
    fn test_chaser_steps_toward_target() {
        let ctx = make_context(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.5);
        let update = evaluate(&ctx);
        assert!(update.moved());
        assert_relative_eq!(update.new_position.x, ENEMY_SPEED * 0.5);
        assert_relative_eq!(update.new_position.y, 0.0);
        assert_relative_eq!(update.new_position.z, 0.0);
    }

    #[rstest]
    #[case(Vec3::new(0.0, 0.0, 5.0), 0.0)]
    #[case(Vec3::new(5.0, 0.0, 0.0), std::f32::consts::FRAC_PI_2)]
    #[case(Vec3::new(-5.0, 0.0, 0.0), -std::f32::consts::FRAC_PI_2)]
    #[case(Vec3::new(0.0, 0.0, -5.0), std::f32::consts::PI)]
    fn test_chaser_faces_travel_direction(#[case] target: Vec3, #[case] expected_yaw: f32) {
        let update = evaluate(&make_context(Vec3::ZERO, target, 0.1));
        let yaw = update.yaw.unwrap();
        assert_relative_eq!(yaw.abs(), expected_yaw.abs(), epsilon = 1e-5);
        assert_eq!(yaw.signum(), expected_yaw.signum());
    }

    #[test]
    fn test_chaser_holds_inside_deadband() {
        let position = Vec3::new(1.0, 2.0, 3.0);
        let target = position + Vec3::new(CHASE_DEADBAND * 0.5, 0.0, 0.0);
        let update = evaluate(&make_context(position, target, 0.1));
        assert!(!update.moved());
        assert_eq!(update.new_position, position);
    }

    #[test]
    fn test_chaser_at_target_never_produces_nan() {
        let position = Vec3::new(4.0, 0.0, -2.0);
        let update = evaluate(&make_context(position, position, 0.1));
        assert!(!update.moved());
        assert!(update.new_position.is_finite());
        assert_eq!(update.new_position, position);
    }

    #[test]
    fn test_chaser_does_not_overshoot() {
        let target = Vec3::new(0.5, 0.0, 0.0);
        let update = evaluate(&make_context(Vec3::ZERO, target, 10.0));
        assert!(update.moved());
        assert_relative_eq!(update.new_position.x, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_chaser_zero_dt_stays_put() {
        let update = evaluate(&make_context(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0), 0.0));
        assert_eq!(update.new_position, Vec3::ZERO);
    }

    #[test]
    fn test_bullet_shrinks_and_moves() {
        let (position, scale) = fly_bullet(Vec3::ZERO, Vec3::new(0.0, 0.0, -20.0), 1.0, 0.5);
        assert_relative_eq!(position.z, -10.0);
        assert_relative_eq!(scale, 1.0 - BULLET_SHRINK_RATE * 0.5);
    }

    #[test]
    fn test_bullet_scale_strictly_decreases_until_zero() {
        let mut scale = 1.0;
        let mut position = Vec3::ZERO;
        let dt = 1.0 / 30.0;
        let mut steps = 0;
        while scale > 0.0 {
            let (next_position, next_scale) = fly_bullet(position, Vec3::X, scale, dt);
            assert!(next_scale < scale);
            position = next_position;
            scale = next_scale;
            steps += 1;
            assert!(steps < 1000, "bullet never expired");
        }
        assert_eq!(scale, 0.0);
    }

    #[test]
    fn test_color_time_advances() {
        assert_relative_eq!(advance_color_time(1.0, 0.2), 1.0 + 0.2 * COLOR_PHASE_RATE);
    }

    #[test]
    fn test_colors_stay_in_range() {
        assert_eq!(chaser_color(), CHASER_COLOR);
        for i in 0..200 {
            let t = i as f32 * 0.173;
            for color in [bullet_color(t), idle_color(t)] {
                assert!(color.cmpge(Vec3::splat(-0.5)).all());
                assert!(color.cmple(Vec3::ONE).all());
            }
        }
    }
}
