//! Wrapping millisecond arithmetic on top of `embassy_time`.
//!
//! Timestamps are truncated to a 32-bit millisecond counter, the same width a
//! board `millis()` tick usually has. Intervals are always computed with
//! wrapping subtraction, so a counter rollover between two timestamps still
//! yields the right distance.

use embassy_time::{Duration, Instant};

/// Truncate an instant to a wrapping 32-bit millisecond counter
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn millis32(now: Instant) -> u32 {
    now.as_millis() as u32
}

/// Milliseconds elapsed from `earlier` (a [`millis32`] stamp) to `now`
#[inline]
pub fn elapsed_ms(now: Instant, earlier: u32) -> u32 {
    millis32(now).wrapping_sub(earlier)
}

/// Convert a duration to whole milliseconds, saturating at `u32::MAX`
#[inline]
pub fn duration_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
