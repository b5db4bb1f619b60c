//! Rotating rainbow
//!
//! The strip is painted once with a full hue gradient when the effect is
//! mounted. Afterwards every cycle only rotates the buffer by one LED, which
//! makes the colors travel along the frame without recomputing them.

use embassy_time::Duration;

use super::Effect;
use crate::{
    animator::{AnimationParam, Continuation},
    color::{Hsb, Rgb},
    pixels::PixelBuffer,
};

/// Time between two one-pixel steps
const STEP_MS: u64 = 100;

/// Rainbow gradient rotated along the strip
#[derive(Debug, Clone, Default)]
pub struct RainbowRotateEffect;

impl RainbowRotateEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for RainbowRotateEffect {
    const FIXED_CYCLE: Option<Duration> = Some(Duration::from_millis(STEP_MS));

    #[allow(clippy::cast_precision_loss)]
    fn prepare(&mut self, leds: &mut [Rgb]) {
        let count = leds.pixel_count() as f32;
        for (i, led) in leds.iter_mut().enumerate() {
            *led = Hsb::from_hue(i as f32 / count).to_rgb();
        }
    }

    fn render(&mut self, param: AnimationParam, leds: &mut [Rgb]) -> Continuation {
        if param.is_completed() {
            leds.rotate_pixels(1);
        }
        Continuation::Restart
    }
}
