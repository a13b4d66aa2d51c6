#![allow(dead_code)]

use std::collections::VecDeque;

use sextet_cabinet_lights::{ByteSource, PixelSink, Rgb};

/// In-memory byte source
///
/// Blocking reads panic instead of hanging when the stream runs dry.
#[derive(Default)]
pub struct MockSource {
    bytes: VecDeque<u8>,
    pub consumed: usize,
}

impl MockSource {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            consumed: 0,
        }
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        self.bytes.extend(bytes.iter().copied());
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len()
    }
}

impl ByteSource for MockSource {
    fn bytes_available(&self) -> usize {
        self.bytes.len()
    }

    fn read_byte(&mut self) -> u8 {
        self.consumed += 1;
        self.bytes.pop_front().expect("read past end of stream")
    }

    fn read_exact(&mut self, buf: &mut [u8]) {
        assert!(
            self.bytes.len() >= buf.len(),
            "stream stalled: wanted {}, have {}",
            buf.len(),
            self.bytes.len()
        );
        for slot in buf {
            *slot = self.read_byte();
        }
    }
}

/// Pixel sink that keeps every submitted frame
#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingSink {
    pub fn last(&self) -> &[Rgb] {
        self.frames.last().expect("no frame submitted")
    }
}

impl PixelSink for RecordingSink {
    fn submit(&mut self, frame: &[Rgb]) {
        self.frames.push(frame.to_vec());
    }
}

/// A 14 byte frame with a zeroed payload
pub fn frame(marker: u8) -> [u8; 14] {
    let mut bytes = [0u8; 14];
    bytes[0] = marker;
    bytes
}
