use crate::Rgb;

/// Half-open range of LED indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRange {
    pub start: u8,
    pub end: u8,
}

impl PixelRange {
    pub const fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Get the number of LEDs in the range
    pub const fn count(self) -> u8 {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }

    pub const fn contains(self, index: usize) -> bool {
        index >= self.start as usize && index < self.end as usize
    }

    /// Check if two ranges share at least one LED
    pub const fn overlaps(self, other: Self) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }
}

/// Get a slice of the LEDs within the range
///
/// The range is clipped to the length of `leds`.
pub(crate) fn bounded(leds: &mut [Rgb], range: PixelRange) -> &mut [Rgb] {
    let end = (range.end as usize).min(leds.len());
    let start = (range.start as usize).min(end);
    &mut leds[start..end]
}
