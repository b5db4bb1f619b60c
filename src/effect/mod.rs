//! Effect system with compile-time known effect variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and is driven by the
//! [`Animator`](crate::animator::Animator) through its cycle progress.

mod driving;
mod global_fade;
mod rainbow;

use embassy_time::Duration;

pub use driving::{ChaseStyle, DrivingColor, DrivingEffect, DrivingPalette, DrivingVariant, Trail};
pub use global_fade::GlobalFadeEffect;
pub use rainbow::RainbowRotateEffect;

use crate::animator::{AnimationParam, Continuation};
use crate::color::{BLACK, Rgb};
use crate::layout::StripLayout;
use crate::pixels::PixelBuffer;

const MODE_NAME_DRIVING: &str = "driving";
const MODE_NAME_DRIVING_HELD: &str = "driving_held";
const MODE_NAME_DRIVING_COLOR_CYCLE: &str = "driving_color_cycle";
const MODE_NAME_DRIVING_COLOR_CYCLE_HELD: &str = "driving_color_cycle_held";
const MODE_NAME_GLOBAL_COLOR_FADE: &str = "global_color_fade";
const MODE_NAME_RAINBOW_ROTATE: &str = "rainbow_rotate";

const MODE_ID_DRIVING: u8 = 0;
const MODE_ID_DRIVING_HELD: u8 = 1;
const MODE_ID_DRIVING_COLOR_CYCLE: u8 = 2;
const MODE_ID_DRIVING_COLOR_CYCLE_HELD: u8 = 3;
const MODE_ID_GLOBAL_COLOR_FADE: u8 = 4;
const MODE_ID_RAINBOW_ROTATE: u8 = 5;

pub trait Effect {
    /// Cycle duration of the effect
    ///
    /// `None` means the cycle follows the wheel speed.
    const FIXED_CYCLE: Option<Duration> = None;

    /// Paint the buffer when the effect is mounted
    fn prepare(&mut self, leds: &mut [Rgb]) {
        leds.fill_color(BLACK);
    }

    /// Render a single frame of the current cycle
    fn render(&mut self, param: AnimationParam, leds: &mut [Rgb]) -> Continuation;
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Speed paced chase along both side strips
    Driving(DrivingEffect),
    /// Whole strip sweeping through the hue circle
    GlobalColorFade(GlobalFadeEffect),
    /// Static rainbow rotated along the strip
    RainbowRotate(RainbowRotateEffect),
}

/// Animation modes the light cycles through
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AnimationMode {
    Driving = MODE_ID_DRIVING,
    DrivingHeld = MODE_ID_DRIVING_HELD,
    DrivingWithColorCycle = MODE_ID_DRIVING_COLOR_CYCLE,
    DrivingWithColorCycleHeld = MODE_ID_DRIVING_COLOR_CYCLE_HELD,
    GlobalColorFade = MODE_ID_GLOBAL_COLOR_FADE,
    RainbowRotate = MODE_ID_RAINBOW_ROTATE,
}

impl AnimationMode {
    /// Name used in diagnostics
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => MODE_NAME_DRIVING,
            Self::DrivingHeld => MODE_NAME_DRIVING_HELD,
            Self::DrivingWithColorCycle => MODE_NAME_DRIVING_COLOR_CYCLE,
            Self::DrivingWithColorCycleHeld => MODE_NAME_DRIVING_COLOR_CYCLE_HELD,
            Self::GlobalColorFade => MODE_NAME_GLOBAL_COLOR_FADE,
            Self::RainbowRotate => MODE_NAME_RAINBOW_ROTATE,
        }
    }

    /// Mode following this one in the show
    pub const fn next(self) -> Self {
        match self {
            Self::Driving => Self::DrivingHeld,
            Self::DrivingHeld => Self::DrivingWithColorCycle,
            Self::DrivingWithColorCycle => Self::DrivingWithColorCycleHeld,
            Self::DrivingWithColorCycleHeld => Self::GlobalColorFade,
            Self::GlobalColorFade => Self::RainbowRotate,
            Self::RainbowRotate => Self::Driving,
        }
    }

    /// Driving flavour of the mode, `None` for non-driving modes
    pub const fn driving_variant(self) -> Option<DrivingVariant> {
        match self {
            Self::Driving => Some(DrivingVariant::Driving),
            Self::DrivingHeld => Some(DrivingVariant::DrivingHeld),
            Self::DrivingWithColorCycle => Some(DrivingVariant::ColorCycle),
            Self::DrivingWithColorCycleHeld => Some(DrivingVariant::ColorCycleHeld),
            Self::GlobalColorFade | Self::RainbowRotate => None,
        }
    }

    /// Whether the cycle duration of the mode follows the wheel speed
    pub const fn follows_speed(self) -> bool {
        self.driving_variant().is_some()
    }

    pub fn to_slot(self, layout: StripLayout, style: ChaseStyle) -> EffectSlot {
        match self.driving_variant() {
            Some(variant) => EffectSlot::Driving(DrivingEffect::new(variant, layout, style)),
            None if self == Self::GlobalColorFade => {
                EffectSlot::GlobalColorFade(GlobalFadeEffect::new())
            }
            None => EffectSlot::RainbowRotate(RainbowRotateEffect::new()),
        }
    }
}

impl From<DrivingVariant> for AnimationMode {
    fn from(variant: DrivingVariant) -> Self {
        match variant {
            DrivingVariant::Driving => Self::Driving,
            DrivingVariant::DrivingHeld => Self::DrivingHeld,
            DrivingVariant::ColorCycle => Self::DrivingWithColorCycle,
            DrivingVariant::ColorCycleHeld => Self::DrivingWithColorCycleHeld,
        }
    }
}

impl EffectSlot {
    /// Fixed cycle of the current effect, `None` if paced by wheel speed
    ///
    /// Derived from each effect's `Effect::FIXED_CYCLE` constant.
    pub fn fixed_cycle(&self) -> Option<Duration> {
        match self {
            Self::Driving(_) => DrivingEffect::FIXED_CYCLE,
            Self::GlobalColorFade(_) => GlobalFadeEffect::FIXED_CYCLE,
            Self::RainbowRotate(_) => RainbowRotateEffect::FIXED_CYCLE,
        }
    }

    /// Paint the initial frame of the effect
    pub fn prepare(&mut self, leds: &mut [Rgb]) {
        match self {
            Self::Driving(effect) => effect.prepare(leds),
            Self::GlobalColorFade(effect) => effect.prepare(leds),
            Self::RainbowRotate(effect) => effect.prepare(leds),
        }
    }

    /// Render the current effect
    pub fn render(&mut self, param: AnimationParam, leds: &mut [Rgb]) -> Continuation {
        match self {
            Self::Driving(effect) => effect.render(param, leds),
            Self::GlobalColorFade(effect) => effect.render(param, leds),
            Self::RainbowRotate(effect) => effect.render(param, leds),
        }
    }

    /// Mode this effect belongs to
    pub fn mode(&self) -> AnimationMode {
        match self {
            Self::Driving(effect) => effect.variant().into(),
            Self::GlobalColorFade(_) => AnimationMode::GlobalColorFade,
            Self::RainbowRotate(_) => AnimationMode::RainbowRotate,
        }
    }
}
