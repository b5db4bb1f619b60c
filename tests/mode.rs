mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_wheel_light::{AnimationMode, ModeSequencer, ModeTimings};

    #[test]
    fn test_boot_mode_and_dwell() {
        let modes = ModeSequencer::new(ModeTimings::DEFAULT, Instant::from_millis(0));
        assert_eq!(modes.current(), AnimationMode::RainbowRotate);
        assert_eq!(modes.previous(), None);
        assert_eq!(modes.dwell(), Duration::from_secs(40));
    }

    #[test]
    fn test_full_show_sequence() {
        let mut modes = ModeSequencer::new(ModeTimings::DEFAULT, Instant::from_millis(0));
        assert_eq!(modes.poll(Instant::from_millis(39_999)), None);

        let expected = [
            (40_000, AnimationMode::Driving),
            (60_000, AnimationMode::DrivingHeld),
            (80_000, AnimationMode::DrivingWithColorCycle),
            (100_000, AnimationMode::DrivingWithColorCycleHeld),
            (120_000, AnimationMode::GlobalColorFade),
            (140_000, AnimationMode::RainbowRotate),
            (160_000, AnimationMode::Driving),
        ];
        for (now, mode) in expected {
            assert_eq!(modes.poll(Instant::from_millis(now - 1)), None);
            assert_eq!(modes.poll(Instant::from_millis(now)), Some(mode));
            assert_eq!(modes.current(), mode);
            assert_eq!(modes.dwell(), Duration::from_secs(20));
        }
        assert_eq!(modes.previous(), Some(AnimationMode::RainbowRotate));
    }

    #[test]
    fn test_late_poll_restarts_dwell_from_poll_time() {
        let mut modes = ModeSequencer::new(ModeTimings::DEFAULT, Instant::from_millis(0));
        assert_eq!(
            modes.poll(Instant::from_millis(45_000)),
            Some(AnimationMode::Driving)
        );
        assert_eq!(modes.poll(Instant::from_millis(64_999)), None);
        assert_eq!(
            modes.poll(Instant::from_millis(65_000)),
            Some(AnimationMode::DrivingHeld)
        );
    }

    #[test]
    fn test_enter_keeps_timer() {
        let mut modes = ModeSequencer::new(ModeTimings::DEFAULT, Instant::from_millis(0));
        modes.enter(AnimationMode::GlobalColorFade);
        assert_eq!(modes.current(), AnimationMode::GlobalColorFade);
        assert_eq!(modes.previous(), Some(AnimationMode::RainbowRotate));

        assert_eq!(
            modes.poll(Instant::from_millis(40_000)),
            Some(AnimationMode::RainbowRotate)
        );
    }

    #[test]
    fn test_custom_timings() {
        let timings = ModeTimings {
            driving: Duration::from_secs(5),
            boot_mode: AnimationMode::GlobalColorFade,
            boot: Duration::from_secs(1),
            ..ModeTimings::DEFAULT
        };
        assert_eq!(timings.dwell(AnimationMode::Driving), Duration::from_secs(5));

        let mut modes = ModeSequencer::new(timings, Instant::from_millis(0));
        assert_eq!(modes.current(), AnimationMode::GlobalColorFade);
        assert_eq!(
            modes.poll(Instant::from_millis(1000)),
            Some(AnimationMode::RainbowRotate)
        );
        assert_eq!(
            modes.poll(Instant::from_millis(21_000)),
            Some(AnimationMode::Driving)
        );
        assert_eq!(modes.poll(Instant::from_millis(25_999)), None);
        assert_eq!(
            modes.poll(Instant::from_millis(26_000)),
            Some(AnimationMode::DrivingHeld)
        );
    }

    #[test]
    fn test_dwell_across_counter_wraparound() {
        let start = u64::from(u32::MAX) - 1000;
        let mut modes = ModeSequencer::new(ModeTimings::DEFAULT, Instant::from_millis(start));
        assert_eq!(modes.poll(Instant::from_millis(start + 39_999)), None);
        assert_eq!(
            modes.poll(Instant::from_millis(start + 40_000)),
            Some(AnimationMode::Driving)
        );
    }
}
