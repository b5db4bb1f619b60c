#![no_std]

mod log;

pub mod animator;
pub mod clock;
pub mod color;
pub mod config;
pub mod effect;
pub mod frame_scheduler;
pub mod layout;
pub mod mode;
pub mod pixels;
pub mod pulse;
pub mod renderer;
pub mod speed;
pub mod time;

pub use animator::{AnimationParam, AnimationState, Animator, Continuation, SlotOutOfRange};
pub use clock::AnimationClock;
pub use config::{ConfigError, LightConfig, MAX_PULSES_WINDOW};
pub use effect::{AnimationMode, ChaseStyle, DrivingVariant, EffectSlot};
pub use frame_scheduler::FrameScheduler;
pub use layout::StripLayout;
pub use mode::{ModeSequencer, ModeTimings};
pub use pixels::PixelBuffer;
pub use pulse::{PulseCapture, PulseReading};
pub use renderer::Renderer;
pub use speed::{PulseHistory, SpeedEstimator};

pub use color::{Hsb, Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The renderer output is pushed through it by the [`FrameScheduler`].
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
