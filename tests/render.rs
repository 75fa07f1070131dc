mod tests {
    use embedded_graphics::pixelcolor::Rgb888;
    use embedded_graphics::prelude::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
    use myrtio_robo_eyes::color::{BLACK, WHITE};
    use myrtio_robo_eyes::mood::{Mood, ShapeTargets};
    use myrtio_robo_eyes::renderer::{EyeShape, InnerEdge, draw_eye};
    use myrtio_robo_eyes::{Frame, Palette};

    fn shape(width: f32, height: f32, cuts: ShapeTargets) -> EyeShape {
        EyeShape {
            x: 4.0,
            y: 4.0,
            width,
            height,
            radius: 3.0,
            cuts,
            inner: InnerEdge::Right,
        }
    }

    #[test]
    fn test_draw_target_clips() {
        let mut frame: Frame<10, 10> = Frame::new(BLACK);
        Rectangle::new(Point::new(-5, 5), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
            .draw(&mut frame)
            .unwrap();
        assert_eq!(frame.count(WHITE), 50);
        assert_eq!(frame.bounding_box(WHITE), Some((0, 5, 9, 9)));
    }

    #[test]
    fn test_degenerate_eye_is_skipped() {
        let mut frame: Frame<32, 32> = Frame::new(BLACK);
        let palette = Palette::default();

        let flat = shape(20.0, 1.5, ShapeTargets::default());
        assert!(!flat.is_drawable());
        assert_eq!(draw_eye(&mut frame, &flat, &palette), Ok(false));

        let squeezed = shape(20.0, 20.0, ShapeTargets {
            top: 0.5,
            bottom: 0.45,
            slant: 0.0,
        });
        assert!(!squeezed.is_drawable());
        assert_eq!(draw_eye(&mut frame, &squeezed, &palette), Ok(false));
        assert_eq!(frame.count(WHITE), 0);
    }

    #[test]
    fn test_plain_eye_fills_its_box() {
        let mut frame: Frame<32, 32> = Frame::new(BLACK);
        let eye = shape(20.0, 10.0, Mood::Default.shape_targets());
        assert_eq!(draw_eye(&mut frame, &eye, &Palette::default()), Ok(true));
        assert_eq!(frame.bounding_box(WHITE), Some((4, 4, 23, 13)));
    }

    #[test]
    fn test_radius_is_limited_by_size() {
        let mut eye = shape(20.0, 10.0, ShapeTargets::default());
        eye.radius = 50.0;
        assert_eq!(eye.clamped_radius(), 5.0);
        eye.radius = -2.0;
        assert_eq!(eye.clamped_radius(), 0.0);
    }
}
