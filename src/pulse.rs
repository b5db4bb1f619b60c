//! Wheel sensor pulse capture
//!
//! [`PulseCapture`] is meant to live in a `static` shared between the sensor
//! interrupt and the render loop:
//!
//! ```ignore
//! static PULSES: PulseCapture = PulseCapture::new(LightConfig::DEFAULT.debounce_ms);
//!
//! // falling edge interrupt handler
//! fn on_wheel_edge() {
//!     PULSES.on_sensor_edge(Instant::now());
//! }
//! ```
//!
//! The interrupt side only ever stores two independent scalars, so no lock is
//! taken and the handler never waits. The loop may read a value that is one
//! pulse old, which is fine for speed estimation.

use core::sync::atomic::{AtomicU32, Ordering};

use embassy_time::Instant;

use crate::time::millis32;

/// Latest state recorded by the sensor interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseReading {
    /// Wrapping millisecond stamp of the last sensor edge
    pub last_edge_ms: u32,
    /// Duration of the last accepted pulse in milliseconds
    pub pulse_ms: u32,
}

/// Interrupt-safe recorder of wheel pulse durations
#[derive(Debug)]
pub struct PulseCapture {
    last_edge_ms: AtomicU32,
    pulse_ms: AtomicU32,
    debounce_ms: u32,
}

impl PulseCapture {
    /// Create a capture rejecting edges closer than `debounce_ms`
    pub const fn new(debounce_ms: u32) -> Self {
        Self {
            last_edge_ms: AtomicU32::new(0),
            pulse_ms: AtomicU32::new(0),
            debounce_ms,
        }
    }

    /// Record a sensor edge
    ///
    /// Call from the falling edge interrupt. The pulse duration is only
    /// updated when the edge is past the debounce window, the edge time is
    /// always updated.
    pub fn on_sensor_edge(&self, now: Instant) {
        let now_ms = millis32(now);
        let since_last = now_ms.wrapping_sub(self.last_edge_ms.load(Ordering::Relaxed));
        if since_last > self.debounce_ms {
            self.pulse_ms.store(since_last, Ordering::Relaxed);
        }
        self.last_edge_ms.store(now_ms, Ordering::Relaxed);
    }

    /// Read the latest recorded state
    pub fn snapshot(&self) -> PulseReading {
        PulseReading {
            last_edge_ms: self.last_edge_ms.load(Ordering::Relaxed),
            pulse_ms: self.pulse_ms.load(Ordering::Relaxed),
        }
    }

    pub const fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }
}
