mod tests {
    use myrtio_robo_eyes::transition::{RATE_FAST, RATE_SLOW, SNAP_EPSILON, Tween, blend};
    use proptest::prelude::*;

    #[test]
    fn test_blend_moves_fraction_of_distance() {
        assert!((blend(0.0, 100.0, RATE_SLOW) - 15.0).abs() < 1e-4);
        assert!((blend(0.0, 1.0, RATE_FAST) - 0.4).abs() < 1e-6);
        assert!((blend(10.0, -10.0, 0.5) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_blend_snaps_inside_epsilon() {
        assert_eq!(blend(1.0, 1.0 + SNAP_EPSILON / 2.0, RATE_SLOW), 1.0 + SNAP_EPSILON / 2.0);
        assert_eq!(blend(-3.004, -3.0, RATE_SLOW), -3.0);
    }

    #[test]
    fn test_geometric_decay() {
        let mut tween = Tween::new(0.0);
        tween.set_target(100.0);
        for k in 1..=28 {
            tween.blend(RATE_SLOW);
            let expected = 100.0 * 0.85f32.powi(k);
            let error = tween.target() - tween.current();
            assert!(
                (error - expected).abs() <= expected * 1e-3,
                "frame {k}: error {error}, expected {expected}"
            );
        }
        tween.blend(RATE_SLOW);
        tween.blend(RATE_SLOW);
        assert!(tween.target() - tween.current() < 1.0);
    }

    #[test]
    fn test_settled_value_stays_put() {
        let mut tween = Tween::new(3.0);
        tween.set_target(-7.5);
        for _ in 0..200 {
            tween.blend(RATE_SLOW);
        }
        assert!(tween.is_settled());
        for _ in 0..50 {
            tween.blend(RATE_SLOW);
            assert_eq!(tween.current(), -7.5);
        }
    }

    #[test]
    fn test_reset_jumps() {
        let mut tween = Tween::new(0.0);
        tween.set_target(5.0);
        tween.reset(2.0);
        assert_eq!(tween.current(), 2.0);
        assert_eq!(tween.target(), 2.0);
    }

    proptest! {
        #[test]
        fn blend_never_overshoots(
            start in -500.0f32..500.0,
            target in -500.0f32..500.0,
            rate in 0.05f32..0.95,
        ) {
            let mut tween = Tween::new(start);
            tween.set_target(target);
            let mut error = (target - start).abs();
            for _ in 0..300 {
                tween.blend(rate);
                let remaining = target - tween.current();
                prop_assert!(remaining.abs() <= error);
                prop_assert!(remaining * (target - start) >= 0.0);
                error = remaining.abs();
            }
            prop_assert_eq!(tween.current(), target);
        }
    }
}
