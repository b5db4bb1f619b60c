//! Frame pacing for the render loop.
//!
//! Portable pacing without async/await or platform timers. The caller sleeps
//! between frames for the returned duration.

use embassy_time::{Duration, Instant};

use crate::{OutputDriver, Renderer};

/// Default target frame rate (100 FPS).
pub const DEFAULT_FPS: u32 = 100;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Timing of the next frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero when behind schedule).
    pub sleep_duration: Duration,
}

/// Drives a [`Renderer`] at a steady rate and pushes every frame to the strip.
///
/// ```ignore
/// static PULSES: PulseCapture = PulseCapture::new(10);
///
/// let renderer = Renderer::<128>::new(&PULSES, &LightConfig::DEFAULT, Instant::now())?;
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep(result.sleep_duration);
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_LEDS: usize> {
    output: O,
    renderer: Renderer<'a, MAX_LEDS>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize> FrameScheduler<'a, O, MAX_LEDS> {
    /// Create a scheduler running at [`DEFAULT_FPS`].
    pub fn new(renderer: Renderer<'a, MAX_LEDS>, driver: O) -> Self {
        Self::with_frame_duration(renderer, driver, DEFAULT_FRAME_DURATION)
    }

    pub fn with_frame_duration(
        renderer: Renderer<'a, MAX_LEDS>,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Render one frame, write it out and return when the next one is due.
    ///
    /// Falling more than two frames behind drops the backlog instead of
    /// rendering a burst of catch-up frames.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let frame = self.renderer.render(now);
        self.output.write(frame);

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub fn renderer(&self) -> &Renderer<'a, MAX_LEDS> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, MAX_LEDS> {
        &mut self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
