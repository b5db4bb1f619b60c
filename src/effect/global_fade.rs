//! Global color fade
//!
//! Every LED shows the same color, sweeping once around the hue circle per
//! cycle.

use embassy_time::Duration;

use super::Effect;
use crate::{
    animator::{AnimationParam, Continuation},
    color::{Hsb, Rgb},
    pixels::PixelBuffer,
};

const CYCLE_MS: u64 = 20_000;

/// Whole strip fading through all hues
#[derive(Debug, Clone, Default)]
pub struct GlobalFadeEffect;

impl GlobalFadeEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for GlobalFadeEffect {
    const FIXED_CYCLE: Option<Duration> = Some(Duration::from_millis(CYCLE_MS));

    fn render(&mut self, param: AnimationParam, leds: &mut [Rgb]) -> Continuation {
        leds.fill_color(Hsb::from_hue(param.progress));
        Continuation::Restart
    }
}
