mod tests {
    use myrtio_robo_eyes::frame_scheduler::{DEFAULT_FPS, FrameGovernor, frame_interval};
    use myrtio_robo_eyes::{
        Clock, Duration, EyeDimensions, EyesConfig, Instant, ManualClock, RoboEyes, SystemClock,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn small_config() -> EyesConfig {
        EyesConfig::default().with_eyes(EyeDimensions::new(8.0, 8.0, 2.0))
    }

    #[test]
    fn test_frame_interval() {
        assert_eq!(frame_interval(DEFAULT_FPS), Duration::from_millis(20));
        assert_eq!(frame_interval(25), Duration::from_millis(40));
        assert_eq!(frame_interval(0), Duration::from_secs(1));
    }

    #[test]
    fn test_first_frame_does_not_wait() {
        let mut clock = ManualClock::new(Instant::from_millis(500));
        let mut governor = FrameGovernor::new(50);
        assert_eq!(governor.pace(&mut clock), Instant::from_millis(500));
        assert_eq!(governor.last_frame(), Some(Instant::from_millis(500)));
    }

    #[test]
    fn test_frames_are_spaced_by_interval() {
        let mut eyes: RoboEyes<ManualClock, SmallRng, 32, 16> =
            RoboEyes::new(ManualClock::default(), SmallRng::seed_from_u64(4), &small_config());
        eyes.update();
        let mut previous = eyes.now();
        for _ in 0..20 {
            eyes.update();
            assert_eq!(eyes.now() - previous, Duration::from_millis(20));
            previous = eyes.now();
        }
    }

    #[test]
    fn test_slow_frames_are_not_caught_up() {
        let mut clock = ManualClock::default();
        let mut governor = FrameGovernor::new(50);
        governor.pace(&mut clock);

        clock.advance(Duration::from_millis(45));
        assert_eq!(governor.pace(&mut clock), Instant::from_millis(45));
        assert_eq!(governor.pace(&mut clock), Instant::from_millis(65));
    }

    #[test]
    fn test_frame_rate_change() {
        let mut eyes: RoboEyes<ManualClock, SmallRng, 32, 16> =
            RoboEyes::new(ManualClock::default(), SmallRng::seed_from_u64(5), &small_config());
        eyes.set_frame_rate(25);
        assert_eq!(eyes.frame_interval(), Duration::from_millis(40));
        eyes.update();
        eyes.update();
        assert_eq!(eyes.now(), Instant::from_millis(40));
    }

    #[test]
    fn test_real_clock_holds_frame_rate() {
        let config = small_config().with_frame_rate(50);
        let mut eyes: RoboEyes<SystemClock, SmallRng, 32, 16> =
            RoboEyes::new(SystemClock, SmallRng::seed_from_u64(6), &config);

        let jitter = Duration::from_millis(2);
        let start = SystemClock.now();
        eyes.update();
        let mut previous = SystemClock.now();
        for frame in 1..100 {
            eyes.update();
            let now = SystemClock.now();
            let gap = now - previous;
            assert!(gap + jitter >= Duration::from_millis(20), "frame {frame}: {gap:?}");
            previous = now;
        }
        let elapsed = previous - start;
        assert!(elapsed >= Duration::from_millis(1980), "{elapsed:?}");
    }
}
