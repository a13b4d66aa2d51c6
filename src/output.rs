//! Pixel sink adapter for `smart-leds` drivers

use smart_leds::{SmartLedsWrite, brightness};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelSink;
use crate::color::Rgb;

/// Sends frames to any [`SmartLedsWrite`] driver
///
/// Applies global brightness scaling on the way out. Write errors drop the
/// frame; the next tick sends a complete one again.
pub struct SmartLedsSink<W> {
    writer: W,
    brightness: u8,
    failed_writes: u32,
}

impl<W> SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    /// Wrap a driver at full brightness
    pub const fn new(writer: W) -> Self {
        Self::with_brightness(writer, 255)
    }

    pub const fn with_brightness(writer: W, brightness: u8) -> Self {
        Self {
            writer,
            brightness,
            failed_writes: 0,
        }
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of frames the driver rejected
    pub const fn failed_writes(&self) -> u32 {
        self.failed_writes
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> PixelSink for SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn submit(&mut self, frame: &[Rgb]) {
        let pixels = brightness(frame.iter().copied(), self.brightness);
        if self.writer.write(pixels).is_err() {
            self.failed_writes = self.failed_writes.wrapping_add(1);
            #[cfg(feature = "esp32-log")]
            println!(
                "[SmartLedsSink.submit] write failed ({} total)",
                self.failed_writes
            );
        }
    }
}
