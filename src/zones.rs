//! Mapping of cabinet light zones onto strip segments
//!
//! Each zone owns a contiguous run of LEDs and a color. When the zone's bit is
//! set, the whole run is overwritten with that color. Unlit runs are left to
//! fade on their own.

use crate::bounds::{PixelRange, bounded};
use crate::color::{BASS_PURPLE, RED, Rgb, YELLOW};
use crate::lights::{CabinetLights, CabinetZone};

/// Number of LEDs on the reference cabinet strip
pub const LED_COUNT: usize = 60;

/// One zone's segment of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSegment {
    pub zone: CabinetZone,
    pub range: PixelRange,
    pub color: Rgb,
}

impl ZoneSegment {
    pub const fn new(zone: CabinetZone, start: u8, end: u8, color: Rgb) -> Self {
        Self {
            zone,
            range: PixelRange::new(start, end),
            color,
        }
    }
}

/// Reasons a layout fails to partition the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Segment covers no LEDs
    EmptyZone(CabinetZone),
    /// Segment extends past the end of the strip
    OutOfBounds(CabinetZone),
    /// Two segments share LEDs
    Overlap(CabinetZone, CabinetZone),
    /// The same zone appears twice
    DuplicateZone(CabinetZone),
    /// Some LEDs belong to no segment
    Gap,
}

/// Static assignment of zones to strip segments
///
/// Segments are written in array order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneMap {
    segments: [ZoneSegment; CabinetZone::COUNT],
}

impl ZoneMap {
    /// Reference cabinet layout for a 60 LED strip
    pub const CABINET: Self = Self::new([
        ZoneSegment::new(CabinetZone::MarqueeUpperLeft, 0, 10, YELLOW),
        ZoneSegment::new(CabinetZone::MarqueeLowerLeft, 10, 20, RED),
        ZoneSegment::new(CabinetZone::BassLeft, 20, 30, BASS_PURPLE),
        ZoneSegment::new(CabinetZone::BassRight, 30, 40, BASS_PURPLE),
        ZoneSegment::new(CabinetZone::MarqueeLowerRight, 40, 50, RED),
        ZoneSegment::new(CabinetZone::MarqueeUpperRight, 50, 60, YELLOW),
    ]);

    pub const fn new(segments: [ZoneSegment; CabinetZone::COUNT]) -> Self {
        Self { segments }
    }

    pub const fn segments(&self) -> &[ZoneSegment; CabinetZone::COUNT] {
        &self.segments
    }

    /// Find the segment of a zone
    pub fn segment(&self, zone: CabinetZone) -> Option<&ZoneSegment> {
        self.segments.iter().find(|segment| segment.zone == zone)
    }

    /// Find the zone that owns an LED
    pub fn zone_at(&self, index: usize) -> Option<CabinetZone> {
        self.segments
            .iter()
            .find(|segment| segment.range.contains(index))
            .map(|segment| segment.zone)
    }

    /// Check that the segments partition `led_count` LEDs
    ///
    /// Every zone must appear exactly once, be non-empty, fit on the strip
    /// and not overlap another. Together they must cover every LED.
    pub const fn validate(&self, led_count: usize) -> Result<(), LayoutError> {
        let mut covered = 0usize;
        let mut i = 0;
        while i < self.segments.len() {
            let segment = self.segments[i];
            if segment.range.is_empty() {
                return Err(LayoutError::EmptyZone(segment.zone));
            }
            if segment.range.end as usize > led_count {
                return Err(LayoutError::OutOfBounds(segment.zone));
            }

            let mut j = i + 1;
            while j < self.segments.len() {
                let other = self.segments[j];
                if other.zone as u8 == segment.zone as u8 {
                    return Err(LayoutError::DuplicateZone(segment.zone));
                }
                if segment.range.overlaps(other.range) {
                    return Err(LayoutError::Overlap(segment.zone, other.zone));
                }
                j += 1;
            }

            covered += segment.range.count() as usize;
            i += 1;
        }

        if covered != led_count {
            return Err(LayoutError::Gap);
        }
        Ok(())
    }

    /// Paint every lit zone onto `leds`
    ///
    /// Lit segments are overwritten, unlit ones are not touched.
    pub fn apply(&self, lights: CabinetLights, leds: &mut [Rgb]) {
        for segment in &self.segments {
            if !lights.contains(segment.zone) {
                continue;
            }
            for led in bounded(leds, segment.range) {
                *led = segment.color;
            }
        }
    }
}

impl Default for ZoneMap {
    fn default() -> Self {
        Self::CABINET
    }
}

const _: () = assert!(ZoneMap::CABINET.validate(LED_COUNT).is_ok());
