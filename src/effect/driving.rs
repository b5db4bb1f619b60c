//! Driving light chase
//!
//! A light runs up both side strips at once, once per cycle. The renderer
//! paces the cycle with the wheel speed, so the light seems to stay put
//! relative to the road while the bike moves.

use super::Effect;
use crate::{
    animator::{AnimationParam, Continuation},
    color::{Hsb, Rgb},
    layout::StripLayout,
    pixels::PixelBuffer,
};

/// Number of hues the color cycling chase steps through
const HUE_STEPS: u8 = 50;

/// Brightness left behind the head by the held variants
const HELD_BRIGHTNESS: f32 = 0.02;

/// Chase color at the start of every driving mode
const BASE_COLOR: Hsb = Hsb::from_hue(0.0);

/// How the chase is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChaseStyle {
    /// A head followed by a linearly fading tail
    FadingTail,
    /// A single head pixel with one dimmed predecessor
    #[default]
    SinglePixel,
}

/// What happens to pixels the head has passed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trail {
    /// Passed pixels go dark
    Clear,
    /// Passed pixels keep a faint glow
    Keep,
}

/// The four flavours of the driving light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrivingVariant {
    Driving,
    DrivingHeld,
    ColorCycle,
    ColorCycleHeld,
}

impl DrivingVariant {
    pub const fn trail(self) -> Trail {
        match self {
            Self::Driving | Self::ColorCycle => Trail::Clear,
            Self::DrivingHeld | Self::ColorCycleHeld => Trail::Keep,
        }
    }

    pub const fn cycles_color(self) -> bool {
        matches!(self, Self::ColorCycle | Self::ColorCycleHeld)
    }
}

/// Chase color of the color cycling variants
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrivingColor {
    index: u8,
    color: Hsb,
}

impl Default for DrivingColor {
    fn default() -> Self {
        Self::new()
    }
}

impl DrivingColor {
    pub const fn new() -> Self {
        Self {
            index: 0,
            color: BASE_COLOR,
        }
    }

    /// Step to the next hue, wrapping after the last one
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % HUE_STEPS;
        self.color = Hsb::from_hue(f32::from(self.index) / f32::from(HUE_STEPS));
    }

    pub const fn index(&self) -> u8 {
        self.index
    }

    pub const fn color(&self) -> Hsb {
        self.color
    }
}

/// Source of the chase color
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrivingPalette {
    /// Always the base color
    Fixed,
    /// Moves to the next hue after every cycle
    Cycling(DrivingColor),
}

impl DrivingPalette {
    pub const fn color(&self) -> Hsb {
        match self {
            Self::Fixed => BASE_COLOR,
            Self::Cycling(color) => color.color(),
        }
    }
}

/// Chase running up both side strips
#[derive(Debug, Clone)]
pub struct DrivingEffect {
    variant: DrivingVariant,
    layout: StripLayout,
    style: ChaseStyle,
    palette: DrivingPalette,
}

impl DrivingEffect {
    pub fn new(variant: DrivingVariant, layout: StripLayout, style: ChaseStyle) -> Self {
        let palette = if variant.cycles_color() {
            DrivingPalette::Cycling(DrivingColor::new())
        } else {
            DrivingPalette::Fixed
        };
        Self {
            variant,
            layout,
            style,
            palette,
        }
    }

    pub const fn variant(&self) -> DrivingVariant {
        self.variant
    }

    pub const fn palette(&self) -> &DrivingPalette {
        &self.palette
    }

    /// Paint a side strip pixel and its mirror on the opposite side
    fn paint(&self, leds: &mut [Rgb], index: usize, color: Hsb) {
        let rgb = color.to_rgb();
        leds.set_pixel(index, rgb);
        if let Some(mirror) = self.layout.mirror(index) {
            leds.set_pixel(mirror, rgb);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn render_single_pixel(&self, progress: f32, leds: &mut [Rgb]) {
        let strip = usize::from(self.layout.strip_a);
        let color = self.palette.color();
        let head = (progress * (strip + 1) as f32) as usize;

        if head <= strip {
            self.paint(leds, head, color);
        }

        if head > 0 {
            let trail = match self.variant.trail() {
                Trail::Keep => HELD_BRIGHTNESS,
                Trail::Clear => 0.0,
            };
            self.paint(leds, head - 1, color.with_brightness(trail));
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn render_fading_tail(&self, progress: f32, leds: &mut [Rgb]) {
        let strip = usize::from(self.layout.strip_a);
        let tail = usize::from(self.layout.tail);
        let color = self.palette.color();
        let head = (progress * (strip + tail) as f32) as usize;

        for step in 0..tail {
            let Some(index) = head.checked_sub(step) else {
                break;
            };
            if index > strip {
                continue;
            }

            let last = step + 1 == tail;
            let shade = if last && self.variant.trail() == Trail::Clear {
                Hsb::BLACK
            } else {
                let fade = step as f32 / tail as f32;
                color.with_brightness(color.bri - fade)
            };
            self.paint(leds, index, shade);
        }
    }
}

impl Effect for DrivingEffect {
    fn render(&mut self, param: AnimationParam, leds: &mut [Rgb]) -> Continuation {
        match self.style {
            ChaseStyle::SinglePixel => self.render_single_pixel(param.progress, leds),
            ChaseStyle::FadingTail => self.render_fading_tail(param.progress, leds),
        }

        if param.is_completed() {
            if let DrivingPalette::Cycling(color) = &mut self.palette {
                color.advance();
            }
        }
        Continuation::Restart
    }
}
