use crate::color::Rgb;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale all three channels of a color by the same factor
#[inline]
pub const fn nscale8(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Dim every LED toward black by `amount`/256 of its current value
///
/// A channel never increases. With a non-zero `amount` any lit channel
/// strictly decreases, so repeated calls always reach black.
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds {
        *led = nscale8(*led, keep);
    }
}
