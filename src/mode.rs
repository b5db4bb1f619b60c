//! Timed mode sequence
//!
//! The light shows every [`AnimationMode`] in a fixed order, each for its own
//! dwell time, and starts over after the rainbow.

use embassy_time::{Duration, Instant};

use crate::effect::AnimationMode;
use crate::time::{duration_ms, elapsed_ms, millis32};

/// Dwell time of every mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeTimings {
    pub driving: Duration,
    pub driving_held: Duration,
    pub driving_color_cycle: Duration,
    pub driving_color_cycle_held: Duration,
    pub global_color_fade: Duration,
    pub rainbow_rotate: Duration,
    /// Mode shown right after power up
    pub boot_mode: AnimationMode,
    /// Dwell of the boot mode, replacing its regular dwell once
    pub boot: Duration,
}

impl ModeTimings {
    pub const DEFAULT: Self = Self {
        driving: Duration::from_secs(20),
        driving_held: Duration::from_secs(20),
        driving_color_cycle: Duration::from_secs(20),
        driving_color_cycle_held: Duration::from_secs(20),
        global_color_fade: Duration::from_secs(20),
        rainbow_rotate: Duration::from_secs(20),
        boot_mode: AnimationMode::RainbowRotate,
        boot: Duration::from_secs(40),
    };

    /// Regular dwell time of `mode`
    pub const fn dwell(&self, mode: AnimationMode) -> Duration {
        match mode {
            AnimationMode::Driving => self.driving,
            AnimationMode::DrivingHeld => self.driving_held,
            AnimationMode::DrivingWithColorCycle => self.driving_color_cycle,
            AnimationMode::DrivingWithColorCycleHeld => self.driving_color_cycle_held,
            AnimationMode::GlobalColorFade => self.global_color_fade,
            AnimationMode::RainbowRotate => self.rainbow_rotate,
        }
    }
}

impl Default for ModeTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Finite state machine stepping through the modes on its own timer
#[derive(Debug, Clone)]
pub struct ModeSequencer {
    timings: ModeTimings,
    current: AnimationMode,
    previous: Option<AnimationMode>,
    dwell_ms: u32,
    changed_at: u32,
}

impl ModeSequencer {
    /// Start the sequence in the boot mode at `now`
    pub fn new(timings: ModeTimings, now: Instant) -> Self {
        Self {
            timings,
            current: timings.boot_mode,
            previous: None,
            dwell_ms: duration_ms(timings.boot),
            changed_at: millis32(now),
        }
    }

    /// Advance to the next mode once the current one has been shown long
    /// enough
    ///
    /// Returns the mode to switch to. The caller is expected to mount the
    /// matching effect.
    pub fn poll(&mut self, now: Instant) -> Option<AnimationMode> {
        if elapsed_ms(now, self.changed_at) < self.dwell_ms {
            return None;
        }

        let next = self.current.next();
        self.changed_at = millis32(now);
        self.dwell_ms = duration_ms(self.timings.dwell(next));
        self.enter(next);
        Some(next)
    }

    /// Make `mode` current without touching the dwell timer
    pub fn enter(&mut self, mode: AnimationMode) {
        self.previous = Some(self.current);
        self.current = mode;
    }

    pub const fn current(&self) -> AnimationMode {
        self.current
    }

    /// Mode shown before the current one
    pub const fn previous(&self) -> Option<AnimationMode> {
        self.previous
    }

    /// How long the current mode stays before the next transition
    pub fn dwell(&self) -> Duration {
        Duration::from_millis(u64::from(self.dwell_ms))
    }
}
