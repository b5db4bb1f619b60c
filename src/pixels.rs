//! Pixel buffer operations used by the effects
//!
//! Effects draw into a plain `[Rgb]` frame. Writes outside the frame are
//! dropped so geometry mistakes can never panic the render loop.

use crate::color::Rgb;

/// Mutable view of the LED colors of one frame
pub trait PixelBuffer {
    /// Number of addressable pixels
    fn pixel_count(&self) -> usize;

    /// Set a single pixel, ignoring out-of-range indices
    fn set_pixel(&mut self, index: usize, color: impl Into<Rgb>);

    /// Paint every pixel with the same color
    fn fill_color(&mut self, color: impl Into<Rgb>);

    /// Rotate right: shift all pixels `n` positions towards the end of the
    /// chain, wrapping the last ones around to the front
    fn rotate_pixels(&mut self, n: usize);
}

impl PixelBuffer for [Rgb] {
    fn pixel_count(&self) -> usize {
        self.len()
    }

    fn set_pixel(&mut self, index: usize, color: impl Into<Rgb>) {
        if let Some(led) = self.get_mut(index) {
            *led = color.into();
        }
    }

    fn fill_color(&mut self, color: impl Into<Rgb>) {
        self.fill(color.into());
    }

    fn rotate_pixels(&mut self, n: usize) {
        if self.is_empty() {
            return;
        }
        self.rotate_right(n % self.len());
    }
}
