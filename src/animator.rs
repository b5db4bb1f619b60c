//! Progress driven animation slots
//!
//! An [`Animator`] runs up to `SLOTS` timed animations. Each running slot
//! holds a payload `T` (usually an effect) that is handed back to the caller
//! on every [`Animator::update`] together with the progress of the current
//! cycle. The caller decides after a completed cycle whether the slot loops
//! or stops.

use embassy_time::{Duration, Instant};

use crate::time::{duration_ms, millis32};

/// Phase of an animation cycle reported to the frame callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnimationState {
    /// Cycle still running
    Progress,
    /// Cycle reached its duration. Reported once per cycle.
    Completed,
}

/// What the animator should do with a slot after a completed cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Continuation {
    /// Start the next cycle from zero
    Restart,
    /// Stop the slot
    Finish,
}

/// Per-frame information passed to the frame callback
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnimationParam {
    /// Slot index
    pub index: usize,
    /// Fraction of the cycle elapsed, `0.0..=1.0`
    pub progress: f32,
    pub state: AnimationState,
}

impl AnimationParam {
    pub fn is_completed(&self) -> bool {
        self.state == AnimationState::Completed
    }
}

/// Error returned when addressing a slot the animator does not have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotOutOfRange(pub usize);

impl core::fmt::Display for SlotOutOfRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "animation slot {} out of range", self.0)
    }
}

/// A single running animation
#[derive(Debug, Clone)]
struct RunningAnimation<T> {
    duration_ms: u32,
    elapsed_ms: u32,
    /// Stamp of the last update that advanced this slot, `None` until the
    /// first update after start
    last_tick: Option<u32>,
    callback: T,
}

impl<T> RunningAnimation<T> {
    #[allow(clippy::cast_precision_loss)]
    fn progress(&self) -> f32 {
        if self.elapsed_ms >= self.duration_ms {
            return 1.0;
        }
        self.elapsed_ms as f32 / self.duration_ms as f32
    }
}

/// Fixed set of animation slots advanced by elapsed time
#[derive(Debug)]
pub struct Animator<T, const SLOTS: usize> {
    slots: [Option<RunningAnimation<T>>; SLOTS],
}

impl<T, const SLOTS: usize> Default for Animator<T, SLOTS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const SLOTS: usize> Animator<T, SLOTS> {
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| None),
        }
    }

    /// Start a new animation in `slot`, replacing whatever ran there
    ///
    /// The cycle starts at the next [`Animator::update`], time spent idle
    /// before that is not counted.
    pub fn start(
        &mut self,
        slot: usize,
        duration: Duration,
        callback: T,
    ) -> Result<(), SlotOutOfRange> {
        let entry = self.slots.get_mut(slot).ok_or(SlotOutOfRange(slot))?;
        *entry = Some(RunningAnimation {
            duration_ms: duration_ms(duration),
            elapsed_ms: 0,
            last_tick: None,
            callback,
        });
        Ok(())
    }

    /// Stop the animation in `slot`
    pub fn stop(&mut self, slot: usize) {
        if let Some(entry) = self.slots.get_mut(slot) {
            *entry = None;
        }
    }

    /// Stop every animation
    pub fn stop_all(&mut self) {
        for entry in &mut self.slots {
            *entry = None;
        }
    }

    pub fn is_active(&self, slot: usize) -> bool {
        matches!(self.slots.get(slot), Some(Some(_)))
    }

    /// Change the cycle duration of a running animation
    ///
    /// The cycle keeps its current progress fraction, only the remaining part
    /// runs at the new pace. Ignored when the slot is idle.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn change_duration(&mut self, slot: usize, duration: Duration) {
        let Some(animation) = self.running_mut(slot) else {
            return;
        };
        let progress = animation.progress();
        animation.duration_ms = duration_ms(duration);
        animation.elapsed_ms = (progress * animation.duration_ms as f32) as u32;
    }

    /// Start the current cycle over. Ignored when the slot is idle.
    pub fn restart(&mut self, slot: usize) {
        if let Some(animation) = self.running_mut(slot) {
            animation.elapsed_ms = 0;
        }
    }

    /// Progress of the cycle running in `slot`
    pub fn progress(&self, slot: usize) -> Option<f32> {
        self.running(slot).map(RunningAnimation::progress)
    }

    /// Cycle duration of the animation in `slot`
    pub fn duration(&self, slot: usize) -> Option<Duration> {
        self.running(slot)
            .map(|animation| Duration::from_millis(u64::from(animation.duration_ms)))
    }

    /// Payload of the animation in `slot`
    pub fn callback(&self, slot: usize) -> Option<&T> {
        self.running(slot).map(|animation| &animation.callback)
    }

    /// Advance all running animations to `now` and render them
    ///
    /// `on_frame` is called once per running slot with its payload and the
    /// cycle progress. The first update after a slot was started only
    /// establishes its time base. After a completed cycle the returned [`Continuation`]
    /// decides if the slot starts over or stops.
    pub fn update<F>(&mut self, now: Instant, mut on_frame: F)
    where
        F: FnMut(&mut T, AnimationParam) -> Continuation,
    {
        let now_ms = millis32(now);

        for (index, entry) in self.slots.iter_mut().enumerate() {
            let Some(animation) = entry else {
                continue;
            };
            let delta = animation
                .last_tick
                .map_or(0, |last| now_ms.wrapping_sub(last));
            animation.last_tick = Some(now_ms);
            animation.elapsed_ms = animation.elapsed_ms.saturating_add(delta);
            let completed = animation.elapsed_ms >= animation.duration_ms;
            let param = AnimationParam {
                index,
                progress: animation.progress(),
                state: if completed {
                    AnimationState::Completed
                } else {
                    AnimationState::Progress
                },
            };

            let finished = match on_frame(&mut animation.callback, param) {
                Continuation::Restart if completed => {
                    animation.elapsed_ms = 0;
                    false
                }
                _ => completed,
            };
            if finished {
                *entry = None;
            }
        }
    }

    fn running(&self, slot: usize) -> Option<&RunningAnimation<T>> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    fn running_mut(&mut self, slot: usize) -> Option<&mut RunningAnimation<T>> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }
}
