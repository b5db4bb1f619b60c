//! Speed estimation from wheel pulse durations
//!
//! The estimator keeps a short window of pulse durations and works on their
//! median, which drops the odd missed or doubled sensor edge without lagging
//! as much as a long average would.

use embassy_time::Instant;
use heapless::{Deque, Vec};

use crate::config::LightConfig;
use crate::log::debug;
use crate::pulse::PulseReading;
use crate::time::elapsed_ms;

/// Millimetres per minute in one km/h
const MM_PER_MINUTE_PER_KMH: f32 = 16_667.0;

/// Sliding window of the most recent pulse durations
#[derive(Debug, Clone)]
pub struct PulseHistory<const N: usize> {
    samples: Deque<u32, N>,
    window: usize,
}

impl<const N: usize> PulseHistory<N> {
    /// Create a history keeping the last `window` samples
    ///
    /// The window is clamped to `1..=N`.
    pub fn new(window: usize) -> Self {
        Self {
            samples: Deque::new(),
            window: window.clamp(1, N.max(1)),
        }
    }

    /// Add a sample, evicting the oldest one when the window is full
    pub fn push(&mut self, sample: u32) {
        while self.samples.len() >= self.window {
            self.samples.pop_front();
        }
        // Cannot fail: the window never exceeds the deque capacity
        let _ = self.samples.push_back(sample);
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub const fn window(&self) -> usize {
        self.window
    }

    /// Median of the window
    ///
    /// An empty window yields 0. For an even number of samples the two middle
    /// values are averaged, rounding down.
    pub fn median(&self) -> u32 {
        if self.samples.is_empty() {
            return 0;
        }
        let mut sorted: Vec<u32, N> = Vec::new();
        for &sample in self.samples.iter() {
            let _ = sorted.push(sample);
        }
        sorted.sort_unstable();

        let mid = sorted.len() / 2;
        if !sorted.len().is_multiple_of(2) {
            return sorted[mid];
        }
        let low = u64::from(sorted[mid - 1]);
        let high = u64::from(sorted[mid]);
        #[allow(clippy::cast_possible_truncation)]
        {
            ((low + high) / 2) as u32
        }
    }
}

/// Turns pulse readings into a speed in km/h
#[derive(Debug, Clone)]
pub struct SpeedEstimator<const N: usize> {
    history: PulseHistory<N>,
    wheel_circumference_mm: u32,
    longest_pulse_ms: u32,
    median: u32,
    speed_kmh: f32,
}

impl<const N: usize> SpeedEstimator<N> {
    pub fn new(config: &LightConfig) -> Self {
        Self {
            history: PulseHistory::new(config.pulses_window_size),
            wheel_circumference_mm: config.wheel_circumference_mm,
            longest_pulse_ms: config.longest_pulse_ms,
            median: 0,
            speed_kmh: 0.0,
        }
    }

    /// Update the estimate with the latest pulse reading
    ///
    /// The latest pulse is added to the window on every call, even if the
    /// sensor has not fired since the previous one. When no edge was seen for
    /// longer than the longest plausible pulse the wheel is considered stopped
    /// and the window is emptied.
    pub fn tick(&mut self, now: Instant, reading: PulseReading) -> f32 {
        if elapsed_ms(now, reading.last_edge_ms) > self.longest_pulse_ms {
            if !self.history.is_empty() {
                debug!("wheel stopped");
            }
            self.history.clear();
            self.median = 0;
        } else {
            self.history.push(reading.pulse_ms);
            self.median = self.history.median();
        }

        self.speed_kmh = self.speed_for_median(self.median);
        self.speed_kmh
    }

    /// Speed matching a median pulse duration, 0 for implausible durations
    #[allow(clippy::cast_precision_loss)]
    pub fn speed_for_median(&self, median_ms: u32) -> f32 {
        if median_ms == 0 || median_ms >= self.longest_pulse_ms {
            return 0.0;
        }
        let circumference = u64::from(self.wheel_circumference_mm);
        let mm_per_minute = (circumference * 1000 / u64::from(median_ms)) * 60;
        mm_per_minute as f32 / MM_PER_MINUTE_PER_KMH
    }

    /// Last estimate in km/h
    pub const fn speed_kmh(&self) -> f32 {
        self.speed_kmh
    }

    /// Last median pulse duration in milliseconds
    pub const fn median_ms(&self) -> u32 {
        self.median
    }

    pub const fn history(&self) -> &PulseHistory<N> {
        &self.history
    }
}
