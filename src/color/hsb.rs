use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Hue, saturation and brightness as fractions
///
/// Hue wraps around (`1.0` is the same red as `0.0`), saturation and
/// brightness are clamped to `0.0..=1.0` on conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsb {
    pub hue: f32,
    pub sat: f32,
    pub bri: f32,
}

impl Hsb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(hue: f32, sat: f32, bri: f32) -> Self {
        Self { hue, sat, bri }
    }

    /// Fully saturated, full brightness color of the given hue
    pub const fn from_hue(hue: f32) -> Self {
        Self::new(hue, 1.0, 1.0)
    }

    /// Same hue and saturation with another brightness
    #[must_use]
    pub const fn with_brightness(self, bri: f32) -> Self {
        Self::new(self.hue, self.sat, bri)
    }

    /// Quantize to the 8-bit HSV wheel used by `smart_leds`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_hsv(self) -> Hsv {
        let hue = self.hue - libm::floorf(self.hue);
        Hsv {
            hue: (hue * 256.0) as u8,
            sat: unit_to_u8(self.sat),
            val: unit_to_u8(self.bri),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv2rgb(self.to_hsv())
    }
}

impl From<Hsb> for Rgb {
    fn from(color: Hsb) -> Self {
        color.to_rgb()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(value: f32) -> u8 {
    libm::roundf(value.clamp(0.0, 1.0) * 255.0) as u8
}
