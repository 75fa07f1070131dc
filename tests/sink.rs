mod tests {
    use core::cell::Cell;
    use core::convert::Infallible;

    use myrtio_robo_eyes::{
        DisplaySink, EyeDimensions, EyesConfig, Frame, ManualClock, MemorySink, NullSink,
        Presenter, RoboEyes,
    };
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    type Eyes = RoboEyes<ManualClock, SmallRng, 64, 32>;

    fn eyes() -> Eyes {
        let config = EyesConfig::default().with_eyes(EyeDimensions::new(16.0, 16.0, 4.0));
        RoboEyes::new(ManualClock::default(), SmallRng::seed_from_u64(8), &config)
    }

    struct CountingSink<'a> {
        cleanups: &'a Cell<u32>,
    }

    impl<const W: usize, const H: usize> DisplaySink<W, H> for CountingSink<'_> {
        type Error = Infallible;

        fn show(&mut self, _frame: &Frame<W, H>) -> Result<(), Self::Error> {
            Ok(())
        }

        fn clear(&mut self) -> Result<(), Self::Error> {
            Ok(())
        }

        fn set_backlight(&mut self, _percent: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn cleanup(&mut self) {
            self.cleanups.set(self.cleanups.get() + 1);
        }
    }

    struct BrokenSink;

    impl<const W: usize, const H: usize> DisplaySink<W, H> for BrokenSink {
        type Error = &'static str;

        fn show(&mut self, _frame: &Frame<W, H>) -> Result<(), Self::Error> {
            Err("bus error")
        }

        fn clear(&mut self) -> Result<(), Self::Error> {
            Err("bus error")
        }

        fn set_backlight(&mut self, _percent: u8) -> Result<(), Self::Error> {
            Ok(())
        }

        fn cleanup(&mut self) {}
    }

    #[test]
    fn test_presenter_shows_every_frame() {
        let mut presenter = Presenter::new(eyes(), MemorySink::new());
        for _ in 0..5 {
            presenter.tick().unwrap();
        }
        assert_eq!(presenter.sink().frame_count(), 5);
        assert_eq!(presenter.sink().last_frame(), Some(presenter.eyes().frame()));
    }

    #[test]
    fn test_memory_sink() {
        let mut sink: MemorySink<64, 32> = MemorySink::default();
        assert_eq!(sink.backlight(), 100);
        sink.set_backlight(150).unwrap();
        assert_eq!(sink.backlight(), 100);
        sink.set_backlight(30).unwrap();
        assert_eq!(sink.backlight(), 30);

        sink.show(&Frame::new(myrtio_robo_eyes::color::WHITE)).unwrap();
        assert!(sink.last_frame().is_some());
        sink.clear().unwrap();
        assert!(sink.last_frame().is_none());

        sink.cleanup();
        sink.cleanup();
        assert_eq!(sink.cleanups(), 2);
    }

    #[test]
    fn test_drop_cleans_up_sink() {
        let cleanups = Cell::new(0);
        let mut presenter = Presenter::new(eyes(), CountingSink { cleanups: &cleanups });
        presenter.tick().unwrap();
        assert_eq!(cleanups.get(), 0);
        drop(presenter);
        assert_eq!(cleanups.get(), 1);
    }

    #[test]
    fn test_explicit_cleanup_then_drop() {
        let cleanups = Cell::new(0);
        let mut presenter = Presenter::new(eyes(), CountingSink { cleanups: &cleanups });
        presenter.cleanup();
        drop(presenter);
        assert_eq!(cleanups.get(), 2);
    }

    #[test]
    fn test_sink_errors_reach_caller() {
        let mut presenter = Presenter::new(eyes(), BrokenSink);
        assert_eq!(presenter.tick(), Err("bus error"));
        presenter.eyes_mut().blink();
        assert!(presenter.eyes().scheduler().is_blinking());
    }

    #[test]
    fn test_null_sink() {
        let mut presenter = Presenter::new(eyes(), NullSink);
        for _ in 0..3 {
            presenter.tick().unwrap();
        }
        assert_eq!(presenter.eyes().now(), myrtio_robo_eyes::Instant::from_millis(40));
    }
}
