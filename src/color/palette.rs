//! Named colors used by the cabinet layout and the startup test pattern

use super::{Rgb, rgb_from_u32};

pub const BLACK: Rgb = rgb_from_u32(0x00_0000);
pub const RED: Rgb = rgb_from_u32(0xFF_0000);
pub const GREEN: Rgb = rgb_from_u32(0x00_FF00);
pub const BLUE: Rgb = rgb_from_u32(0x00_00FF);
pub const YELLOW: Rgb = rgb_from_u32(0xFF_FF00);

/// Bass light color (212, 0, 255)
pub const BASS_PURPLE: Rgb = rgb_from_u32(0xD4_00FF);
