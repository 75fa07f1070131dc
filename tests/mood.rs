mod tests {
    use myrtio_robo_eyes::color::{BLACK, WHITE};
    use myrtio_robo_eyes::{EyeDimensions, EyesConfig, ManualClock, Mood, RoboEyes};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn eyes() -> RoboEyes<ManualClock, SmallRng, 160, 120> {
        let config = EyesConfig::default().with_eyes(EyeDimensions::new(40.0, 40.0, 8.0));
        RoboEyes::new(ManualClock::default(), SmallRng::seed_from_u64(2), &config)
    }

    #[test]
    fn test_mood_names() {
        for mood in Mood::ALL {
            assert_eq!(Mood::parse_from_str(mood.as_str()), Some(mood));
        }
        assert_eq!(Mood::parse_from_str(" Happy"), Some(Mood::Happy));
        assert_eq!(Mood::parse_from_str("grumpy"), None);
    }

    #[test]
    fn test_mood_change_animates() {
        let mut eyes = eyes();
        eyes.set_mood(Mood::Happy);
        eyes.update();
        let bottom = eyes.state().left_shape.bottom.current();
        assert!((bottom - 0.06).abs() < 1e-5);
    }

    #[test]
    fn test_happy_squint() {
        let mut eyes = eyes();
        eyes.set_mood(Mood::Happy);
        for _ in 0..40 {
            eyes.update();
        }
        let state = eyes.state();
        assert_eq!(state.left_shape.bottom.current(), 0.4);
        assert_eq!(state.right_shape.bottom.current(), 0.4);
        assert_eq!(state.left_shape.top.current(), 0.0);
        assert_eq!(state.right_shape.top.current(), 0.0);

        let (_, min_y, _, max_y) = eyes.frame().bounding_box(WHITE).unwrap();
        assert_eq!(min_y, 40);
        assert_eq!(max_y, 63);
    }

    #[test]
    fn test_angry_slants_inward() {
        let mut eyes = eyes();
        eyes.set_mood(Mood::Angry);
        for _ in 0..40 {
            eyes.update();
        }
        let state = eyes.state();
        assert_eq!(state.left_shape.top.current(), 0.35);
        assert_eq!(state.left_shape.slant.current(), 1.0);

        let frame = eyes.frame();
        // Left eye spans x 35..75, right eye 85..125, both y 40..80
        assert_eq!(frame.pixel(72, 41), Some(BLACK));
        assert_eq!(frame.pixel(40, 50), Some(WHITE));
        assert_eq!(frame.pixel(88, 41), Some(BLACK));
        assert_eq!(frame.pixel(120, 50), Some(WHITE));
    }

    #[test]
    fn test_tired_droops_flat() {
        let mut eyes = eyes();
        eyes.set_mood(Mood::Tired);
        for _ in 0..40 {
            eyes.update();
        }
        let frame = eyes.frame();
        for x in [40, 55, 70, 90, 105, 120] {
            assert_eq!(frame.pixel(x, 55), Some(BLACK), "x = {x}");
            assert_eq!(frame.pixel(x, 65), Some(WHITE), "x = {x}");
        }
    }

    #[test]
    fn test_back_to_default() {
        let mut eyes = eyes();
        eyes.set_mood(Mood::Tired);
        for _ in 0..40 {
            eyes.update();
        }
        eyes.set_mood(Mood::Default);
        for _ in 0..60 {
            eyes.update();
        }
        assert_eq!(eyes.state().mood(), Mood::Default);
        assert_eq!(eyes.state().left_shape.top.current(), 0.0);
        assert_eq!(eyes.frame().bounding_box(WHITE), Some((35, 40, 124, 79)));
    }
}
