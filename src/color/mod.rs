mod palette;

use smart_leds::RGB8;
pub use palette::{BASS_PURPLE, BLACK, BLUE, GREEN, RED, YELLOW};

pub type Rgb = RGB8;

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Fill every LED with one color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}
