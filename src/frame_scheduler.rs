//! Fixed-cadence main loop.
//!
//! Each tick decodes at most one frame, renders and submits the strip, then
//! asks the caller to wait a fixed frame duration. Processing time is not
//! subtracted, so the real cadence is a little slower than nominal, and a
//! stalled frame read stalls everything.

use embassy_time::{Duration, block_for};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLUE, GREEN, RED, Rgb};
use crate::lights::CabinetLights;
use crate::protocol::{DecodeOutcome, FrameDecoder};
use crate::renderer::Renderer;
use crate::{ByteSource, PixelSink};

/// Default update rate (100 ticks per second).
pub const DEFAULT_UPDATE_RATE: u32 = 100;

/// Delay after each tick at the default update rate.
pub const DEFAULT_FRAME_DURATION: Duration =
    Duration::from_millis(1000 / DEFAULT_UPDATE_RATE as u64);

/// How long each test pattern color is held.
pub const TEST_PATTERN_HOLD: Duration = Duration::from_millis(200);

/// Colors shown at startup to check the strip wiring.
pub const TEST_PATTERN: [Rgb; 3] = [RED, GREEN, BLUE];

/// Result of a tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// What the decoder did this tick.
    pub decoded: DecodeOutcome,
    /// Light state the frame was rendered with.
    pub lights: CabinetLights,
    /// How long to wait before the next tick.
    pub sleep_duration: Duration,
}

/// Ties the decoder, renderer and collaborators together.
///
/// # Usage
///
/// ```ignore
/// static RX: SerialRx = SerialRx::new();
///
/// let scheduler = FrameScheduler::new(RX.reader(), SmartLedsSink::new(driver), Renderer::default());
/// scheduler.run();
/// ```
pub struct FrameScheduler<S: ByteSource, O: PixelSink, const LEDS: usize> {
    source: S,
    output: O,
    decoder: FrameDecoder,
    renderer: Renderer<LEDS>,
    frame_duration: Duration,
}

impl<S: ByteSource, O: PixelSink, const LEDS: usize> FrameScheduler<S, O, LEDS> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (100 ticks per second).
    pub fn new(source: S, output: O, renderer: Renderer<LEDS>) -> Self {
        Self::with_frame_duration(source, output, renderer, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        source: S,
        output: O,
        renderer: Renderer<LEDS>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            source,
            output,
            decoder: FrameDecoder::new(),
            renderer,
            frame_duration,
        }
    }

    /// Run one tick.
    ///
    /// 1. Polls the decoder (may block on a partial frame)
    /// 2. Renders with the current light state
    /// 3. Submits the corrected frame
    ///
    /// The caller waits `sleep_duration` before the next tick.
    pub fn tick(&mut self) -> FrameResult {
        let decoded = self.decoder.poll(&mut self.source);
        let lights = self.decoder.lights();

        self.renderer.render_to(lights, &mut self.output);

        FrameResult {
            decoded,
            lights,
            sleep_duration: self.frame_duration,
        }
    }

    /// Show solid red, green and blue, calling `delay` after each.
    ///
    /// Frames go straight to the sink. The raw buffer is untouched, so the
    /// first tick afterwards starts from black.
    pub fn show_test_pattern<D: FnMut(Duration)>(&mut self, mut delay: D) {
        #[cfg(feature = "esp32-log")]
        println!("[FrameScheduler] test pattern");

        for color in TEST_PATTERN {
            self.renderer.show_solid(color, &mut self.output);
            delay(TEST_PATTERN_HOLD);
        }
    }

    /// Show the test pattern, then tick forever.
    pub fn run(mut self) -> ! {
        self.show_test_pattern(block_for);

        #[cfg(feature = "esp32-log")]
        println!(
            "[FrameScheduler] running at {} ms per frame",
            self.frame_duration.as_millis()
        );

        loop {
            let result = self.tick();
            block_for(result.sleep_duration);
        }
    }

    /// Current light state.
    pub fn lights(&self) -> CabinetLights {
        self.decoder.lights()
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<LEDS> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<LEDS> {
        &mut self.renderer
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
