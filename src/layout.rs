use crate::Rgb;

/// Geometry of the strip wrapped around the frame
///
/// The chain starts at the bottom of one side strip, runs up that side
/// (`strip_a` LEDs), across an end strip (`strip_b`), down the other side,
/// across the second end strip and finishes with `offset` extra LEDs.
/// Walking up the first side therefore mirrors walking up the second one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StripLayout {
    pub strip_a: u16,
    pub strip_b: u16,
    pub offset: u16,
    pub tail: u16,
}

impl StripLayout {
    /// Number of LEDs in the whole chain
    pub const fn pixel_count(self) -> usize {
        2 * self.strip_a as usize + 2 * self.strip_b as usize + self.offset as usize
    }

    /// Index of the pixel mirroring `index` on the opposite side strip
    ///
    /// Returns `None` when `index` lies beyond the first side strip and its
    /// top corner.
    pub const fn mirror(self, index: usize) -> Option<usize> {
        let corner = 2 * self.strip_a as usize + self.strip_b as usize;
        if index > corner {
            return None;
        }
        Some(corner - index)
    }
}

/// Get the part of the frame buffer covered by the layout
pub(crate) fn bounded(leds: &mut [Rgb], layout: StripLayout) -> &mut [Rgb] {
    let end = layout.pixel_count().min(leds.len());
    &mut leds[..end]
}
