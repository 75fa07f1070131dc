mod tests {
    use myrtio_robo_eyes::reaction::{Reaction, blink_curve, confused_shake, laugh_shake, progress};
    use myrtio_robo_eyes::{Duration, Instant};

    #[test]
    fn test_blink_curve_endpoints() {
        assert_eq!(blink_curve(0.0), 1.0);
        assert_eq!(blink_curve(1.0), 1.0);
        assert!(blink_curve(0.5) < 1e-6);
    }

    #[test]
    fn test_blink_curve_is_symmetric() {
        for step in 0..=100 {
            let t = step as f32 / 100.0;
            assert!((blink_curve(t) - blink_curve(1.0 - t)).abs() < 1e-5, "t = {t}");
        }
    }

    #[test]
    fn test_blink_curve_stays_in_range() {
        for step in -10..=110 {
            let value = blink_curve(step as f32 / 100.0);
            assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_shakes_start_and_end_at_rest() {
        assert_eq!(confused_shake(0.0), 0.0);
        assert_eq!(laugh_shake(0.0), 0.0);
        assert_eq!(confused_shake(1.0).abs(), 0.0);
        assert_eq!(laugh_shake(1.0).abs(), 0.0);
    }

    #[test]
    fn test_shakes_decay() {
        assert!(confused_shake(0.0625).abs() > 10.0);
        assert!(confused_shake(0.9375).abs() < 1.0);
        assert!(laugh_shake(0.05).abs() > 5.0);
        assert!(laugh_shake(0.95).abs() < 0.5);
    }

    #[test]
    fn test_progress_is_clamped() {
        let duration = Duration::from_millis(200);
        assert_eq!(progress(Duration::from_millis(0), duration), 0.0);
        assert!((progress(Duration::from_millis(50), duration) - 0.25).abs() < 1e-6);
        assert_eq!(progress(Duration::from_millis(400), duration), 1.0);
        assert_eq!(progress(Duration::from_millis(10), Duration::from_ticks(0)), 1.0);
    }

    #[test]
    fn test_reaction_runs_once() {
        let mut reaction = Reaction::new();
        assert_eq!(reaction.advance(Instant::from_millis(0)), None);

        reaction.start(Instant::from_millis(100), Duration::from_millis(100));
        assert!(reaction.is_active());
        let half = reaction.advance(Instant::from_millis(150)).unwrap();
        assert!((half - 0.5).abs() < 1e-6);

        assert_eq!(reaction.advance(Instant::from_millis(230)), Some(1.0));
        assert!(!reaction.is_active());
        assert_eq!(reaction.advance(Instant::from_millis(240)), None);
    }

    #[test]
    fn test_reaction_restart() {
        let mut reaction = Reaction::new();
        reaction.start(Instant::from_millis(0), Duration::from_millis(100));
        reaction.advance(Instant::from_millis(80));
        reaction.start(Instant::from_millis(80), Duration::from_millis(100));
        let t = reaction.advance(Instant::from_millis(90)).unwrap();
        assert!((t - 0.1).abs() < 1e-6);
    }
}
