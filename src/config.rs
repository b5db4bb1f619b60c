//! Physical constants and tuning of the wheel light
//!
//! All values are plain data so a firmware can keep its configuration in a
//! `const` and hand it to [`Renderer::new`](crate::Renderer::new).

use core::fmt;

use embassy_time::Duration;

use crate::effect::ChaseStyle;
use crate::layout::StripLayout;
use crate::mode::ModeTimings;

/// Upper bound for [`LightConfig::pulses_window_size`]
pub const MAX_PULSES_WINDOW: usize = 32;

/// 16" wheel: `16 * 25.4 * PI` mm, truncated
const DEFAULT_WHEEL_CIRCUMFERENCE_MM: u32 = 1276;

/// Configuration for the wheel light
#[derive(Debug, Clone)]
pub struct LightConfig {
    /// Wheel circumference in millimetres
    pub wheel_circumference_mm: u32,
    /// Physical length of one side strip, used to pace the chase
    pub strip_length_cm: u32,
    /// LEDs on each side strip (left and right)
    pub strip_a_count: u16,
    /// LEDs on each end strip (bottom and top)
    pub strip_b_count: u16,
    /// Extra LEDs at the end of the chain
    pub strip_c_offset: u16,
    /// Length of the fading tail of [`ChaseStyle::FadingTail`]
    pub tail_size: u16,
    /// Sensor edges closer than this are treated as bounces
    pub debounce_ms: u32,
    /// Pulses longer than this mean the wheel stopped
    pub longest_pulse_ms: u32,
    /// Number of pulse samples the median is taken over
    pub pulses_window_size: usize,
    /// How often the speed is re-estimated
    pub speed_poll_interval: Duration,
    /// Shortest driving cycle
    pub min_cycle: Duration,
    /// Longest driving cycle
    pub max_cycle: Duration,
    /// Driving cycle used while the wheel stands still
    pub idle_cycle: Duration,
    /// How the driving chase is drawn
    pub chase: ChaseStyle,
    /// Dwell time of each mode
    pub timings: ModeTimings,
}

impl LightConfig {
    pub const DEFAULT: Self = Self {
        wheel_circumference_mm: DEFAULT_WHEEL_CIRCUMFERENCE_MM,
        strip_length_cm: 55,
        strip_a_count: 33,
        strip_b_count: 30,
        strip_c_offset: 1,
        tail_size: 10,
        debounce_ms: 40,
        longest_pulse_ms: 10_000,
        pulses_window_size: 10,
        speed_poll_interval: Duration::from_millis(500),
        min_cycle: Duration::from_millis(400),
        max_cycle: Duration::from_millis(10_000),
        idle_cycle: Duration::from_millis(10_000),
        chase: ChaseStyle::SinglePixel,
        timings: ModeTimings::DEFAULT,
    };

    /// Geometry of the strip described by this configuration
    pub const fn layout(&self) -> StripLayout {
        StripLayout {
            strip_a: self.strip_a_count,
            strip_b: self.strip_b_count,
            offset: self.strip_c_offset,
            tail: self.tail_size,
        }
    }

    /// Total number of LEDs in the chain
    pub const fn pixel_count(&self) -> usize {
        self.layout().pixel_count()
    }

    /// Check the configuration against a frame buffer of `capacity` LEDs
    pub fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.strip_a_count == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        let required = self.pixel_count();
        if required > capacity {
            return Err(ConfigError::PixelCountExceedsCapacity { required, capacity });
        }
        if self.pulses_window_size == 0 || self.pulses_window_size > MAX_PULSES_WINDOW {
            return Err(ConfigError::InvalidPulseWindow {
                size: self.pulses_window_size,
                max: MAX_PULSES_WINDOW,
            });
        }
        if self.wheel_circumference_mm == 0 {
            return Err(ConfigError::ZeroWheelCircumference);
        }
        if self.min_cycle > self.max_cycle {
            return Err(ConfigError::InvalidCycleBounds);
        }
        Ok(())
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The side strips have no LEDs
    EmptyStrip,
    /// The chain is longer than the frame buffer
    PixelCountExceedsCapacity { required: usize, capacity: usize },
    /// Pulse window is zero or above [`MAX_PULSES_WINDOW`]
    InvalidPulseWindow { size: usize, max: usize },
    /// Wheel circumference is zero
    ZeroWheelCircumference,
    /// `min_cycle` is longer than `max_cycle`
    InvalidCycleBounds,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStrip => write!(f, "side strips must have at least one LED"),
            Self::PixelCountExceedsCapacity { required, capacity } => {
                write!(
                    f,
                    "strip needs {} LEDs but the frame buffer holds {}",
                    required, capacity
                )
            }
            Self::InvalidPulseWindow { size, max } => {
                write!(f, "pulse window must be within 1..={}, got {}", max, size)
            }
            Self::ZeroWheelCircumference => write!(f, "wheel circumference must be non-zero"),
            Self::InvalidCycleBounds => write!(f, "min_cycle must not exceed max_cycle"),
        }
    }
}
