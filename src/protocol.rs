//! SextetStream frame decoding
//!
//! Every byte on the wire carries six bits of data offset into the printable
//! range `0x30..=0x6F`. A frame is 14 such bytes. The first one holds the
//! cabinet light state, the rest are reserved and only read to stay aligned.
//!
//! There is no checksum. Resynchronization is opportunistic: any byte seen
//! while idle that falls outside the sextet range is dropped, and the next
//! in-range byte is taken as the start of a frame.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::ByteSource;
use crate::lights::CabinetLights;

/// Number of bytes in a control frame
pub const FRAME_LEN: usize = 14;

/// Number of reserved bytes following the marker
pub const PAYLOAD_LEN: usize = FRAME_LEN - 1;

/// Lowest valid sextet byte (`'0'`)
pub const SEXTET_MIN: u8 = 0x30;

/// Highest valid sextet byte (`'o'`)
pub const SEXTET_MAX: u8 = 0x6F;

/// Check if a byte may start a frame
#[inline]
pub const fn is_marker(byte: u8) -> bool {
    matches!(byte, SEXTET_MIN..=SEXTET_MAX)
}

/// Decode the data bits of a sextet byte
///
/// Returns `None` for bytes outside the sextet range.
#[inline]
pub const fn decode_sextet(byte: u8) -> Option<u8> {
    if is_marker(byte) {
        Some(byte - SEXTET_MIN)
    } else {
        None
    }
}

/// Encode six data bits as a sextet byte, higher bits are ignored
#[inline]
pub const fn encode_sextet(bits: u8) -> u8 {
    (bits & 0x3F) + SEXTET_MIN
}

/// A complete control frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlFrame {
    bytes: [u8; FRAME_LEN],
}

impl ControlFrame {
    /// Assemble a frame from its marker byte and reserved payload
    ///
    /// Returns `None` if `marker` is outside the sextet range.
    pub fn new(marker: u8, payload: &[u8; PAYLOAD_LEN]) -> Option<Self> {
        if is_marker(marker) {
            Some(Self::from_parts(marker, payload))
        } else {
            None
        }
    }

    fn from_parts(marker: u8, payload: &[u8; PAYLOAD_LEN]) -> Self {
        let mut bytes = [0u8; FRAME_LEN];
        bytes[0] = marker;
        bytes[1..].copy_from_slice(payload);
        Self { bytes }
    }

    pub const fn marker(&self) -> u8 {
        self.bytes[0]
    }

    /// Light state carried by the marker byte
    pub const fn lights(&self) -> CabinetLights {
        match decode_sextet(self.marker()) {
            Some(bits) => CabinetLights::from_bits(bits),
            None => CabinetLights::NONE,
        }
    }

    /// Reserved bytes 1..14
    pub fn payload(&self) -> &[u8] {
        &self.bytes[1..]
    }

    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.bytes
    }
}

/// Result of a single decoder poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// No bytes were available
    Idle,
    /// A byte outside the sextet range was read and dropped
    Discarded(u8),
    /// A complete frame was read and the light state updated
    Frame(ControlFrame),
}

/// Frame decoder holding the last received light state
#[derive(Debug, Default)]
pub struct FrameDecoder {
    lights: CabinetLights,
}

impl FrameDecoder {
    pub const fn new() -> Self {
        Self {
            lights: CabinetLights::NONE,
        }
    }

    /// Current light state
    ///
    /// Stays unchanged until the next complete frame.
    pub const fn lights(&self) -> CabinetLights {
        self.lights
    }

    /// Read at most one frame from the source
    ///
    /// Once a marker byte is read this blocks until the 13 payload bytes
    /// have arrived. There is no timeout.
    pub fn poll<S: ByteSource>(&mut self, source: &mut S) -> DecodeOutcome {
        if source.bytes_available() == 0 {
            return DecodeOutcome::Idle;
        }

        let marker = source.read_byte();
        if !is_marker(marker) {
            return DecodeOutcome::Discarded(marker);
        }

        let mut payload = [0u8; PAYLOAD_LEN];
        source.read_exact(&mut payload);

        let frame = ControlFrame::from_parts(marker, &payload);
        self.lights = frame.lights();

        #[cfg(feature = "esp32-log")]
        println!(
            "[FrameDecoder.poll] frame marker={:#04x} lights={:#08b}",
            marker,
            self.lights.bits()
        );

        DecodeOutcome::Frame(frame)
    }
}
