mod support;

mod tests {
    use myrtio_ring_selector::{
        ConfigError, FrameBuffer, PatternDescriptor, PatternEngine, PatternKind, PatternState,
        PixelSink, REFERENCE_PATTERNS, RingLayout, XorShift32,
        color::{BLACK, RED, YELLOW},
        pattern::{ChasePattern, REFERENCE_PATTERN_COUNT},
    };

    use super::support::{FailingDriver, lit_pixels, reference_buffer};

    type Engine = PatternEngine<XorShift32, REFERENCE_PATTERN_COUNT>;

    fn reference_engine() -> Engine {
        Engine::new(&REFERENCE_PATTERNS, XorShift32::new(7)).unwrap()
    }

    #[test]
    fn test_reference_mapping() {
        let engine = reference_engine();
        let names: Vec<&str> = engine.patterns().iter().map(PatternDescriptor::name).collect();
        assert_eq!(
            names,
            vec!["Off", "Red", "Green", "Blue", "Chase", "Rainbow", "Pulse", "Sparkle"]
        );
        assert_eq!(engine.patterns()[4].kind(), PatternKind::Chase);
        assert_eq!(engine.pattern_count(), 8);
        assert_eq!(engine.selected(), 0);
        assert_eq!(engine.previous_position(), None);
    }

    #[test]
    fn test_first_tick_reports_switch() {
        let mut engine = reference_engine();
        let mut frame = reference_buffer();

        let switch = engine.on_tick(0, &mut frame).unwrap().unwrap();
        assert_eq!(switch.index, 0);
        assert_eq!(switch.name, "Off");
        assert_eq!(format!("{}", switch), "Switched to pattern 0 Off");
        assert_eq!(engine.previous_position(), Some(0));
    }

    #[test]
    fn test_repeated_position_is_idempotent() {
        let mut engine = reference_engine();
        let mut frame = reference_buffer();

        assert!(engine.on_tick(4, &mut frame).unwrap().is_some());
        assert!(engine.on_tick(4, &mut frame).unwrap().is_none());

        assert_eq!(engine.selected(), 4);
        assert_eq!(
            *engine.state(),
            PatternState::Chase(ChasePattern::new(YELLOW).with_start(2))
        );
    }

    #[test]
    fn test_switching_back_resets_state() {
        // Sparkle is left out, its state depends on the random sequence
        for first in 0..7 {
            for second in (0..7).filter(|&p| p != first) {
                let mut engine = reference_engine();
                let mut frame = reference_buffer();
                for _ in 0..5 {
                    engine.on_tick(first, &mut frame).unwrap();
                }
                engine.on_tick(second, &mut frame).unwrap();
                engine.on_tick(first, &mut frame).unwrap();

                let mut fresh = reference_engine();
                fresh.on_tick(first, &mut reference_buffer()).unwrap();
                assert_eq!(
                    engine.state(),
                    fresh.state(),
                    "state leaked from {} -> {} -> {}",
                    first,
                    second,
                    first
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_position_wraps() {
        let mut engine = reference_engine();
        let mut frame = reference_buffer();

        let switch = engine.on_tick(11, &mut frame).unwrap().unwrap();
        assert_eq!(switch.position, 11);
        assert_eq!(switch.index, 3);
        assert_eq!(switch.name, "Blue");
        assert_eq!(engine.selected(), 3);

        // Another position mapping to the same pattern still counts as a change
        let switch = engine.on_tick(3, &mut frame).unwrap();
        assert_eq!(switch.map(|s| s.index), Some(3));
    }

    #[test]
    fn test_missing_reading_keeps_previous_position() {
        let mut engine = reference_engine();
        let mut frame = reference_buffer();

        assert_eq!(engine.context().resolve(None), 0);

        engine.on_reading(Some(5), &mut frame).unwrap();
        assert_eq!(engine.context().resolve(None), 5);
        assert_eq!(engine.context().resolve(Some(2)), 2);

        let switch = engine.on_reading(None, &mut frame).unwrap();
        assert!(switch.is_none());
        assert_eq!(engine.selected(), 5);
    }

    #[test]
    fn test_default_position() {
        let mut engine = reference_engine().with_default_position(1);
        let mut frame = reference_buffer();

        assert_eq!(engine.selected(), 1);
        let switch = engine.on_reading(None, &mut frame).unwrap().unwrap();
        assert_eq!(switch.name, "Red");
        assert!(frame.published().iter().all(|color| *color == RED));
    }

    #[test]
    fn test_chase_scenario() {
        let mut engine = reference_engine();
        let mut frame = reference_buffer();

        for tick in 0..10 {
            engine.on_tick(4, &mut frame).unwrap();
            let published = frame.published();
            assert_eq!(lit_pixels(published), vec![tick % frame.total_pixels()]);
            assert_eq!(published[tick], YELLOW);
        }
        assert_eq!(frame.driver().frames.len(), 10);
    }

    #[test]
    fn test_switch_overwrites_previous_frame() {
        let mut engine = reference_engine();
        let mut frame = reference_buffer();

        engine.on_tick(1, &mut frame).unwrap();
        engine.on_tick(4, &mut frame).unwrap();
        assert_eq!(lit_pixels(frame.published()), vec![0]);

        engine.on_tick(1, &mut frame).unwrap();
        engine.on_tick(7, &mut frame).unwrap();
        assert!(frame.published().iter().all(|color| *color != RED));

        engine.on_tick(0, &mut frame).unwrap();
        assert!(frame.published().iter().all(|color| *color == BLACK));
    }

    #[test]
    fn test_registry_errors() {
        let empty = Engine::new(&[], XorShift32::default());
        assert_eq!(empty.err(), Some(ConfigError::NoPatterns));

        let small = PatternEngine::<XorShift32, 2>::new(&REFERENCE_PATTERNS, XorShift32::default());
        assert_eq!(
            small.err(),
            Some(ConfigError::TooManyPatterns { count: 8, max: 2 })
        );
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut engine = reference_engine();
        let layout = RingLayout::new(&[4]).unwrap();
        let mut frame = FrameBuffer::<FailingDriver, 4>::new(FailingDriver, layout).unwrap();

        assert_eq!(engine.on_tick(2, &mut frame), Err("chain offline"));
        // The switch itself took effect before the frame failed
        assert_eq!(engine.selected(), 2);
    }
}
