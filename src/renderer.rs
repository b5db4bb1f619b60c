use embassy_time::Instant;

use crate::animator::Animator;
use crate::clock::AnimationClock;
use crate::color::Rgb;
use crate::config::{ConfigError, LightConfig, MAX_PULSES_WINDOW};
use crate::effect::{AnimationMode, ChaseStyle, DrivingVariant, EffectSlot};
use crate::layout::{StripLayout, bounded};
use crate::log::debug;
use crate::mode::ModeSequencer;
use crate::pulse::PulseCapture;
use crate::speed::SpeedEstimator;
use crate::time::{duration_ms, elapsed_ms, millis32};

/// Animator slot the mode effects run in
pub const EFFECT_SLOT: usize = 0;

/// Number of animator slots used by the renderer
const SLOTS: usize = 1;

/// Speed related state refreshed by the speed poll
#[derive(Debug, Clone, Copy)]
struct RideState {
    speed_kmh: f32,
    polled_at: u32,
}

/// Wheel light renderer - the main orchestrator
///
/// Owns every piece of mutable state of the light. One call to
/// [`Renderer::render`] is one iteration of the render loop.
pub struct Renderer<'a, const MAX_LEDS: usize> {
    // External dependencies and configuration
    pulses: &'a PulseCapture,
    layout: StripLayout,
    chase: ChaseStyle,
    speed_poll_ms: u32,

    // Internal state
    ride: RideState,
    modes: ModeSequencer,
    animator: Animator<EffectSlot, SLOTS>,
    frame_buffer: [Rgb; MAX_LEDS],

    // Internal dependencies
    estimator: SpeedEstimator<MAX_PULSES_WINDOW>,
    clock: AnimationClock,
}

impl<'a, const MAX_LEDS: usize> Renderer<'a, MAX_LEDS> {
    /// Create a renderer booting into the configured boot mode at `now`
    pub fn new(
        pulses: &'a PulseCapture,
        config: &LightConfig,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        config.validate(MAX_LEDS)?;

        let modes = ModeSequencer::new(config.timings, now);
        let boot_mode = modes.current();
        let mut renderer = Self {
            pulses,
            layout: config.layout(),
            chase: config.chase,
            speed_poll_ms: duration_ms(config.speed_poll_interval),
            ride: RideState {
                speed_kmh: 0.0,
                polled_at: millis32(now),
            },
            modes,
            animator: Animator::new(),
            frame_buffer: [Rgb::default(); MAX_LEDS],
            estimator: SpeedEstimator::new(config),
            clock: AnimationClock::new(config),
        };
        renderer.mount(boot_mode);
        Ok(renderer)
    }

    /// Process one frame
    ///
    /// This is the main render loop step. Call this continuously and push the
    /// returned frame to the strip.
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        if let Some(mode) = self.modes.poll(now) {
            debug!(
                "mode {} for {} ms",
                mode.as_str(),
                self.modes.dwell().as_millis()
            );
            self.mount(mode);
        }

        self.poll_speed(now);

        let leds = bounded(&mut self.frame_buffer, self.layout);
        self.animator
            .update(now, |effect, param| effect.render(param, leds));
        leds
    }

    /// Switch to a driving mode
    pub fn start_driving(&mut self, variant: DrivingVariant) {
        self.start_mode(variant.into());
    }

    /// Switch to the rotating rainbow
    pub fn start_rainbow(&mut self) {
        self.start_mode(AnimationMode::RainbowRotate);
    }

    /// Switch to the global color fade
    pub fn start_global_fade(&mut self) {
        self.start_mode(AnimationMode::GlobalColorFade);
    }

    /// Switch to `mode` right away
    ///
    /// The mode sequence continues from `mode` when the current dwell time
    /// runs out.
    pub fn start_mode(&mut self, mode: AnimationMode) {
        self.modes.enter(mode);
        self.mount(mode);
    }

    /// Frame rendered by the last call to [`Renderer::render`]
    pub fn frame(&self) -> &[Rgb] {
        let end = self.layout.pixel_count().min(MAX_LEDS);
        &self.frame_buffer[..end]
    }

    pub const fn mode(&self) -> AnimationMode {
        self.modes.current()
    }

    pub const fn previous_mode(&self) -> Option<AnimationMode> {
        self.modes.previous()
    }

    pub const fn modes(&self) -> &ModeSequencer {
        &self.modes
    }

    /// Last speed estimate in km/h
    pub const fn speed_kmh(&self) -> f32 {
        self.ride.speed_kmh
    }

    pub const fn estimator(&self) -> &SpeedEstimator<MAX_PULSES_WINDOW> {
        &self.estimator
    }

    pub const fn animator(&self) -> &Animator<EffectSlot, SLOTS> {
        &self.animator
    }

    /// Effect currently mounted in the animator
    pub fn effect(&self) -> Option<&EffectSlot> {
        self.animator.callback(EFFECT_SLOT)
    }

    /// Re-estimate the speed and retarget the driving chase
    fn poll_speed(&mut self, now: Instant) {
        if elapsed_ms(now, self.ride.polled_at) <= self.speed_poll_ms {
            return;
        }
        self.ride.polled_at = millis32(now);
        self.ride.speed_kmh = self.estimator.tick(now, self.pulses.snapshot());
        debug!(
            "speed {} km/h, median {} ms",
            self.ride.speed_kmh,
            self.estimator.median_ms()
        );

        if self.modes.current().follows_speed() && self.animator.is_active(EFFECT_SLOT) {
            let cycle = self.clock.duration_for(self.ride.speed_kmh);
            self.animator.change_duration(EFFECT_SLOT, cycle);
        }
    }

    /// Replace the running effect with the one of `mode`
    fn mount(&mut self, mode: AnimationMode) {
        self.animator.stop_all();

        let mut effect = mode.to_slot(self.layout, self.chase);
        effect.prepare(bounded(&mut self.frame_buffer, self.layout));

        let cycle = effect
            .fixed_cycle()
            .unwrap_or_else(|| self.clock.duration_for(self.ride.speed_kmh));
        // Cannot fail: the slot index is within SLOTS
        let _ = self.animator.start(EFFECT_SLOT, cycle, effect);
    }
}
