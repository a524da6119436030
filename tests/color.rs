mod tests {
    use envsci_board::color::{
        Hsl, HueDirection, PackedColor, RAINBOW_STEPS, Rgb, hsl_gradient, hsl_to_packed,
        hsl_to_rgb, pack_color,
    };

    #[test]
    fn test_hsl_primaries() {
        // Saturation is capped at 99%, so primaries keep a trace of the
        // other channels.
        assert_eq!(hsl_to_packed(Hsl::new(0, 100, 50)).raw(), 0xFE0101);
        assert_eq!(hsl_to_packed(Hsl::new(120, 100, 50)).raw(), 0x01FE01);
        assert_eq!(hsl_to_packed(Hsl::new(240, 100, 50)).raw(), 0x0101FE);
    }

    #[test]
    fn test_hsl_secondaries() {
        assert_eq!(hsl_to_packed(Hsl::new(60, 100, 50)).raw(), 0xFEFE01);
        assert_eq!(hsl_to_packed(Hsl::new(180, 100, 50)).raw(), 0x01FEFE);
        assert_eq!(hsl_to_rgb(Hsl::new(270, 100, 50)), Rgb::new(127, 1, 254));
    }

    #[test]
    fn test_hsl_luminance_extremes() {
        assert_eq!(hsl_to_packed(Hsl::new(0, 100, 0)), PackedColor::BLACK);
        assert_eq!(hsl_to_packed(Hsl::new(200, 40, -10)), PackedColor::BLACK);
        assert_eq!(hsl_to_packed(Hsl::new(0, 100, 100)).raw(), 0xFFFAFA);
        assert_eq!(hsl_to_packed(Hsl::new(0, 0, 100)).raw(), 0xFDFDFD);
        assert_eq!(hsl_to_packed(Hsl::new(90, 0, 50)).raw(), 0x808080);
    }

    #[test]
    fn test_hsl_hue_wraps() {
        assert_eq!(
            hsl_to_packed(Hsl::new(-120, 100, 50)),
            hsl_to_packed(Hsl::new(240, 100, 50))
        );
        assert_eq!(
            hsl_to_packed(Hsl::new(720, 100, 50)),
            hsl_to_packed(Hsl::new(0, 100, 50))
        );
    }

    #[test]
    fn test_pack_color() {
        let color = pack_color(0x12, 0x34, 0x56);
        assert_eq!(color.raw(), 0x123456);
        assert_eq!((color.red(), color.green(), color.blue()), (0x12, 0x34, 0x56));
        assert_eq!(color.to_rgb(), Rgb::new(0x12, 0x34, 0x56));
        assert_eq!(PackedColor::from(Rgb::new(0x12, 0x34, 0x56)), color);
        assert_eq!(PackedColor::new(0xFF12_3456), color);
    }

    #[test]
    fn test_gradient_clockwise() {
        let stops = hsl_gradient::<RAINBOW_STEPS>(
            Hsl::new(0, 100, 50),
            Hsl::new(270, 100, 50),
            HueDirection::Clockwise,
        );
        let hues = stops.map(|stop| stop.hue);
        assert_eq!(hues, [0, 427, 495, 270]);
        assert_eq!(hues.map(|hue| hue % 360), [0, 67, 135, 270]);
        assert!(stops.iter().all(|stop| stop.saturation == 100 && stop.luminance == 50));
    }

    #[test]
    fn test_gradient_counter_clockwise() {
        let stops = hsl_gradient::<4>(
            Hsl::new(0, 100, 50),
            Hsl::new(270, 100, 50),
            HueDirection::CounterClockwise,
        );
        assert_eq!(stops.map(|stop| stop.hue), [0, 338, 315, 270]);
    }

    #[test]
    fn test_gradient_shortest() {
        let long_way = hsl_gradient::<4>(
            Hsl::new(0, 100, 50),
            Hsl::new(270, 100, 50),
            HueDirection::Shortest,
        );
        assert_eq!(long_way.map(|stop| stop.hue), [0, 338, 315, 270]);

        let short_way = hsl_gradient::<4>(
            Hsl::new(0, 100, 50),
            Hsl::new(90, 100, 50),
            HueDirection::Shortest,
        );
        assert_eq!(short_way.map(|stop| stop.hue), [0, 382, 405, 90]);
    }

    #[test]
    fn test_gradient_saturation_and_luminance() {
        let stops = hsl_gradient::<4>(
            Hsl::new(0, 0, 0),
            Hsl::new(0, 100, 80),
            HueDirection::Clockwise,
        );
        assert_eq!(
            stops,
            [
                Hsl::new(0, 0, 0),
                Hsl::new(360, 25, 20),
                Hsl::new(360, 50, 40),
                Hsl::new(0, 100, 80),
            ]
        );
    }

    #[test]
    fn test_gradient_single_step() {
        let stops = hsl_gradient::<1>(
            Hsl::new(10, 100, 50),
            Hsl::new(50, 100, 50),
            HueDirection::Clockwise,
        );
        assert_eq!(stops, [Hsl::new(4010, 100, 50)]);

        let stops = hsl_gradient::<1>(
            Hsl::new(0, 0, 50),
            Hsl::new(0, 50, 20),
            HueDirection::Clockwise,
        );
        assert_eq!(stops, [Hsl::new(0, 50, 20)]);
    }

    #[test]
    fn test_gradient_extreme_inputs() {
        let pairs = [
            (0, i32::MAX),
            (i32::MIN, 0),
            (i32::MIN, i32::MAX),
            (i32::MAX, i32::MIN),
            (30_000_000, 10),
            (-30_000_000, 30_000_000),
        ];
        let directions = [
            HueDirection::Clockwise,
            HueDirection::CounterClockwise,
            HueDirection::Shortest,
        ];
        for (start, end) in pairs {
            for direction in directions {
                let stops = hsl_gradient::<RAINBOW_STEPS>(
                    Hsl::new(start, i32::MIN, i32::MAX),
                    Hsl::new(end, i32::MAX, i32::MIN),
                    direction,
                );
                assert_eq!(stops[0].hue, start);
                assert_eq!(stops[RAINBOW_STEPS - 1].hue, end);
                for stop in stops {
                    // Conversion is total on whatever comes out
                    let _ = hsl_to_rgb(stop);
                }
                let _ = hsl_gradient::<1>(Hsl::new(start, 0, 0), Hsl::new(end, 0, 0), direction);
            }
        }
    }

    #[test]
    fn test_gradient_large_hue_keeps_angle() {
        // 30_000_000 is 120 degrees around the wheel, 10 is 10 degrees
        let far = hsl_gradient::<4>(
            Hsl::new(30_000_000, 100, 50),
            Hsl::new(10, 100, 50),
            HueDirection::Clockwise,
        );
        let near = hsl_gradient::<4>(
            Hsl::new(120, 100, 50),
            Hsl::new(10, 100, 50),
            HueDirection::Clockwise,
        );
        assert_eq!(far.map(hsl_to_rgb), near.map(hsl_to_rgb));
    }

    #[test]
    fn test_gradient_no_steps() {
        let stops = hsl_gradient::<0>(
            Hsl::new(10, 100, 50),
            Hsl::new(50, 100, 50),
            HueDirection::Clockwise,
        );
        assert!(stops.is_empty());
    }
}
