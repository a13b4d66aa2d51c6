//! Cabinet light zones and the bitmask that switches them

const ZONE_NAME_MARQUEE_UPPER_LEFT: &str = "marquee_upper_left";
const ZONE_NAME_MARQUEE_UPPER_RIGHT: &str = "marquee_upper_right";
const ZONE_NAME_MARQUEE_LOWER_LEFT: &str = "marquee_lower_left";
const ZONE_NAME_MARQUEE_LOWER_RIGHT: &str = "marquee_lower_right";
const ZONE_NAME_BASS_LEFT: &str = "bass_left";
const ZONE_NAME_BASS_RIGHT: &str = "bass_right";

/// A cabinet light zone
///
/// The discriminant is the zone's bit position in [`CabinetLights`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum CabinetZone {
    MarqueeUpperLeft = 0,
    MarqueeUpperRight = 1,
    MarqueeLowerLeft = 2,
    MarqueeLowerRight = 3,
    BassLeft = 4,
    BassRight = 5,
}

impl CabinetZone {
    /// Number of defined zones
    pub const COUNT: usize = 6;

    /// All zones in bit order
    pub const ALL: [Self; Self::COUNT] = [
        Self::MarqueeUpperLeft,
        Self::MarqueeUpperRight,
        Self::MarqueeLowerLeft,
        Self::MarqueeLowerRight,
        Self::BassLeft,
        Self::BassRight,
    ];

    pub const fn from_bit(bit: u8) -> Option<Self> {
        Some(match bit {
            0 => Self::MarqueeUpperLeft,
            1 => Self::MarqueeUpperRight,
            2 => Self::MarqueeLowerLeft,
            3 => Self::MarqueeLowerRight,
            4 => Self::BassLeft,
            5 => Self::BassRight,
            _ => return None,
        })
    }

    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Single-bit mask of this zone
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarqueeUpperLeft => ZONE_NAME_MARQUEE_UPPER_LEFT,
            Self::MarqueeUpperRight => ZONE_NAME_MARQUEE_UPPER_RIGHT,
            Self::MarqueeLowerLeft => ZONE_NAME_MARQUEE_LOWER_LEFT,
            Self::MarqueeLowerRight => ZONE_NAME_MARQUEE_LOWER_RIGHT,
            Self::BassLeft => ZONE_NAME_BASS_LEFT,
            Self::BassRight => ZONE_NAME_BASS_RIGHT,
        }
    }
}

/// State of the cabinet lights, one bit per [`CabinetZone`]
///
/// Bits 6 and 7 are reserved. They are kept as received but never read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(transparent)]
pub struct CabinetLights(u8);

impl CabinetLights {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(0b0011_1111);

    /// Wrap a raw bitmask, reserved bits included
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn single(zone: CabinetZone) -> Self {
        Self(zone.mask())
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn with(self, zone: CabinetZone) -> Self {
        Self(self.0 | zone.mask())
    }

    pub const fn contains(self, zone: CabinetZone) -> bool {
        (self.0 & zone.mask()) != 0
    }

    /// True when no defined zone is lit
    pub const fn is_empty(self) -> bool {
        (self.0 & Self::ALL.0) == 0
    }

    /// Iterate over the lit zones in bit order
    pub fn iter(self) -> impl Iterator<Item = CabinetZone> {
        CabinetZone::ALL
            .into_iter()
            .filter(move |zone| self.contains(*zone))
    }
}
