#![no_std]

pub mod bounds;
pub mod color;
pub mod frame_scheduler;
pub mod gamma;
pub mod lights;
pub mod math8;
pub mod output;
pub mod protocol;
pub mod renderer;
pub mod serial;
pub mod zones;

pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use gamma::{GammaTable, gamma8};
pub use lights::{CabinetLights, CabinetZone};
pub use output::SmartLedsSink;
pub use protocol::{ControlFrame, DecodeOutcome, FrameDecoder};
pub use renderer::{Renderer, RendererConfig};
pub use serial::{RxOverrun, SerialReader, SerialRx};
pub use zones::{LED_COUNT, LayoutError, ZoneMap, ZoneSegment};

pub use color::Rgb;
pub use embassy_time::Duration;

/// Source of serial bytes
///
/// Implement this trait over the platform's UART receive path.
/// The decoder is generic over this trait.
pub trait ByteSource {
    /// Number of bytes that can be read without blocking
    fn bytes_available(&self) -> usize;

    /// Read one byte, blocking until it arrives
    fn read_byte(&mut self) -> u8;

    /// Fill `buf` completely, blocking until enough bytes arrive
    fn read_exact(&mut self, buf: &mut [u8]);
}

/// Abstract LED strip trait
///
/// Implement this trait to support different hardware platforms.
/// Transmission, brightness limiting and color order are up to the sink.
pub trait PixelSink {
    /// Send one frame to the LED strip, in strip order
    fn submit(&mut self, frame: &[Rgb]);
}
