use embassy_time::Duration;

use crate::config::LightConfig;

/// Centimetres per second in one km/h
const CM_PER_SECOND_PER_KMH: f32 = 27.778;

/// Below this the wheel is treated as standing still
const STANDSTILL_KMH: f32 = 0.01;

/// Maps wheel speed to the duration of one driving chase cycle
///
/// One cycle runs the light along a side strip, so at riding speed the light
/// appears to stand still relative to the road. The result is kept within
/// the configured bounds so the chase never flickers nor freezes.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    strip_length_cm: f32,
    min_cycle: Duration,
    max_cycle: Duration,
    idle_cycle: Duration,
}

impl AnimationClock {
    #[allow(clippy::cast_precision_loss)]
    pub fn new(config: &LightConfig) -> Self {
        Self {
            strip_length_cm: config.strip_length_cm as f32,
            min_cycle: config.min_cycle,
            max_cycle: config.max_cycle,
            idle_cycle: config.idle_cycle,
        }
    }

    /// Cycle duration for a speed in km/h
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn duration_for(&self, speed_kmh: f32) -> Duration {
        if speed_kmh.is_nan() || speed_kmh < STANDSTILL_KMH {
            return self.idle_cycle;
        }

        let cm_per_second = speed_kmh * CM_PER_SECOND_PER_KMH;
        let millis = self.strip_length_cm / cm_per_second * 1000.0;
        let min = self.min_cycle.as_millis() as f32;
        let max = self.max_cycle.as_millis() as f32;

        Duration::from_millis(millis.max(min).min(max) as u64)
    }
}
