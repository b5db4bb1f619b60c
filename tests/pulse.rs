mod tests {
    use embassy_time::Instant;
    use myrtio_wheel_light::{PulseCapture, PulseReading};

    #[test]
    fn test_snapshot_starts_empty() {
        let pulses = PulseCapture::new(40);
        assert_eq!(pulses.snapshot(), PulseReading::default());
        assert_eq!(pulses.debounce_ms(), 40);
    }

    #[test]
    fn test_edge_records_pulse_duration() {
        let pulses = PulseCapture::new(40);
        pulses.on_sensor_edge(Instant::from_millis(1000));
        pulses.on_sensor_edge(Instant::from_millis(1800));

        let reading = pulses.snapshot();
        assert_eq!(reading.last_edge_ms, 1800);
        assert_eq!(reading.pulse_ms, 800);
    }

    #[test]
    fn test_bounce_keeps_pulse_but_moves_edge() {
        let pulses = PulseCapture::new(40);
        pulses.on_sensor_edge(Instant::from_millis(1000));
        pulses.on_sensor_edge(Instant::from_millis(2000));
        pulses.on_sensor_edge(Instant::from_millis(2030));

        let reading = pulses.snapshot();
        assert_eq!(reading.pulse_ms, 1000);
        assert_eq!(reading.last_edge_ms, 2030);

        // Measured from the bounce, not from the accepted edge
        pulses.on_sensor_edge(Instant::from_millis(2530));
        assert_eq!(pulses.snapshot().pulse_ms, 500);
    }

    #[test]
    fn test_edge_exactly_at_debounce_is_rejected() {
        let pulses = PulseCapture::new(40);
        pulses.on_sensor_edge(Instant::from_millis(1000));
        pulses.on_sensor_edge(Instant::from_millis(2000));
        pulses.on_sensor_edge(Instant::from_millis(2040));
        assert_eq!(pulses.snapshot().pulse_ms, 1000);
    }

    #[test]
    fn test_pulse_across_counter_wraparound() {
        let pulses = PulseCapture::new(40);
        let before_wrap = u64::from(u32::MAX) - 10;
        pulses.on_sensor_edge(Instant::from_millis(before_wrap));
        pulses.on_sensor_edge(Instant::from_millis(before_wrap + 500));

        let reading = pulses.snapshot();
        assert_eq!(reading.pulse_ms, 500);
        assert_eq!(reading.last_edge_ms, 489);
    }
}
