//! Perceptual gamma correction
//!
//! LEDs respond linearly to PWM duty while the eye does not, so raw colors
//! are remapped through a power curve before being sent to the strip.

use crate::color::Rgb;

/// Exponent used to generate [`GAMMA8`]
pub const DEFAULT_GAMMA: f32 = 2.8;

/// Precomputed gamma 2.8 curve, `round((i / 255)^2.8 * 255)`
#[rustfmt::skip]
pub const GAMMA8: [u8; 256] = [
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,
      0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   0,   1,   1,   1,   1,
      1,   1,   1,   1,   1,   1,   1,   1,   1,   2,   2,   2,   2,   2,   2,   2,
      2,   3,   3,   3,   3,   3,   3,   3,   4,   4,   4,   4,   4,   5,   5,   5,
      5,   6,   6,   6,   6,   7,   7,   7,   7,   8,   8,   8,   9,   9,   9,  10,
     10,  10,  11,  11,  11,  12,  12,  13,  13,  13,  14,  14,  15,  15,  16,  16,
     17,  17,  18,  18,  19,  19,  20,  20,  21,  21,  22,  22,  23,  24,  24,  25,
     25,  26,  27,  27,  28,  29,  29,  30,  31,  32,  32,  33,  34,  35,  35,  36,
     37,  38,  39,  39,  40,  41,  42,  43,  44,  45,  46,  47,  48,  49,  50,  50,
     51,  52,  54,  55,  56,  57,  58,  59,  60,  61,  62,  63,  64,  66,  67,  68,
     69,  70,  72,  73,  74,  75,  77,  78,  79,  81,  82,  83,  85,  86,  87,  89,
     90,  92,  93,  95,  96,  98,  99, 101, 102, 104, 105, 107, 109, 110, 112, 114,
    115, 117, 119, 120, 122, 124, 126, 127, 129, 131, 133, 135, 137, 138, 140, 142,
    144, 146, 148, 150, 152, 154, 156, 158, 160, 162, 164, 167, 169, 171, 173, 175,
    177, 180, 182, 184, 186, 189, 191, 193, 196, 198, 200, 203, 205, 208, 210, 213,
    215, 218, 220, 223, 225, 228, 231, 233, 236, 239, 241, 244, 247, 249, 252, 255,
];

/// 256-entry channel lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GammaTable {
    lut: [u8; 256],
}

impl GammaTable {
    /// The gamma 2.8 curve
    pub const DEFAULT: Self = Self { lut: GAMMA8 };

    /// Table that passes every value through unchanged
    pub const LINEAR: Self = Self::linear();

    #[allow(clippy::cast_possible_truncation)]
    const fn linear() -> Self {
        let mut lut = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            lut[i] = i as u8;
            i += 1;
        }
        Self { lut }
    }

    /// Build a table for an arbitrary exponent
    ///
    /// Exponents below or equal to zero are clamped to a linear table.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn with_exponent(gamma: f32) -> Self {
        if gamma <= 0.0 || gamma.is_nan() {
            return Self::LINEAR;
        }

        let mut lut = [0u8; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            let normalized = i as f32 / 255.0;
            let value = libm::powf(normalized, gamma) * 255.0 + 0.5;
            *slot = libm::floorf(value).clamp(0.0, 255.0) as u8;
        }
        Self { lut }
    }

    /// Correct a single channel
    #[inline]
    pub const fn correct(&self, channel: u8) -> u8 {
        self.lut[channel as usize]
    }

    /// Correct all three channels of a color
    #[inline]
    pub const fn correct_rgb(&self, color: Rgb) -> Rgb {
        Rgb {
            r: self.correct(color.r),
            g: self.correct(color.g),
            b: self.correct(color.b),
        }
    }

    /// Write corrected `source` colors into `target`
    ///
    /// Only the overlapping prefix of the two slices is written.
    pub fn apply(&self, source: &[Rgb], target: &mut [Rgb]) {
        for (dst, src) in target.iter_mut().zip(source) {
            *dst = self.correct_rgb(*src);
        }
    }
}

impl Default for GammaTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Correct a single channel with the default curve
#[inline]
pub const fn gamma8(channel: u8) -> u8 {
    GAMMA8[channel as usize]
}
