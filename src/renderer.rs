use crate::PixelSink;
use crate::color::{Rgb, fill_solid};
use crate::gamma::GammaTable;
use crate::lights::CabinetLights;
use crate::math8::fade_to_black_by;
use crate::zones::ZoneMap;

/// Default per-tick fade amount (out of 256)
pub const DEFAULT_FADE_RATE: u8 = 30;

/// Configuration for the renderer
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// How much of each channel is removed per tick (out of 256)
    pub fade_rate: u8,
    /// Correction curve applied to the output
    pub gamma: GammaTable,
    /// Zone layout
    pub zones: ZoneMap,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            fade_rate: DEFAULT_FADE_RATE,
            gamma: GammaTable::DEFAULT,
            zones: ZoneMap::CABINET,
        }
    }
}

/// Renderer - turns light state into corrected pixels
///
/// Keeps two buffers. The raw buffer holds target colors and carries the
/// after-glow from tick to tick. The output buffer is rebuilt from it on every
/// frame and never read back.
pub struct Renderer<const LEDS: usize> {
    fade_rate: u8,
    gamma: GammaTable,
    zones: ZoneMap,

    raw: [Rgb; LEDS],
    output: [Rgb; LEDS],
}

impl<const LEDS: usize> Renderer<LEDS> {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            fade_rate: config.fade_rate,
            gamma: config.gamma,
            zones: config.zones,
            raw: [Rgb::default(); LEDS],
            output: [Rgb::default(); LEDS],
        }
    }

    /// Process one frame
    ///
    /// Fades the raw buffer, paints the lit zones over it and returns the
    /// gamma corrected result.
    pub fn render(&mut self, lights: CabinetLights) -> &[Rgb] {
        self.fade();
        self.assign(lights);
        self.correct();
        &self.output
    }

    /// Process one frame and hand it to the sink
    pub fn render_to<O: PixelSink>(&mut self, lights: CabinetLights, output: &mut O) {
        let frame = self.render(lights);
        output.submit(frame);
    }

    /// Dim the raw buffer by the fade rate
    pub fn fade(&mut self) {
        fade_to_black_by(&mut self.raw, self.fade_rate);
    }

    /// Overwrite lit zones in the raw buffer
    pub fn assign(&mut self, lights: CabinetLights) {
        self.zones.apply(lights, &mut self.raw);
    }

    /// Rebuild the output buffer from the raw buffer
    pub fn correct(&mut self) {
        self.gamma.apply(&self.raw, &mut self.output);
    }

    /// Submit a solid frame, bypassing the raw buffer and correction
    pub fn show_solid<O: PixelSink>(&mut self, color: Rgb, output: &mut O) {
        fill_solid(&mut self.output, color);
        output.submit(&self.output);
    }

    /// Raw target colors
    pub fn raw(&self) -> &[Rgb; LEDS] {
        &self.raw
    }

    /// Mutable access to the raw buffer
    pub fn raw_mut(&mut self) -> &mut [Rgb; LEDS] {
        &mut self.raw
    }

    /// Last corrected frame
    pub fn output(&self) -> &[Rgb; LEDS] {
        &self.output
    }

    pub fn zones(&self) -> &ZoneMap {
        &self.zones
    }
}

impl<const LEDS: usize> Default for Renderer<LEDS> {
    fn default() -> Self {
        Self::new(&RendererConfig::default())
    }
}
