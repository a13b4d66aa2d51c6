//! Serial receive queue for `no_std` environments.
//!
//! The UART interrupt handler pushes received bytes into a [`SerialRx`] and
//! the main loop drains it through a [`SerialReader`], which implements
//! [`ByteSource`]. Access is guarded by `critical-section`, so the queue can
//! live in a `static` shared between the handler and the loop.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::ByteSource;

/// Receive buffer size of a typical UART driver
pub const DEFAULT_RX_BUFFER_SIZE: usize = 64;

/// Error returned when a byte arrives while the queue is full.
///
/// The byte is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RxOverrun(pub u8);

/// A bounded, interrupt-safe byte queue.
pub struct SerialRx<const SIZE: usize = DEFAULT_RX_BUFFER_SIZE> {
    inner: Mutex<RefCell<Deque<u8, SIZE>>>,
}

impl<const SIZE: usize> SerialRx<SIZE> {
    /// Create a new empty queue.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a reader handle for this queue.
    pub const fn reader(&self) -> SerialReader<'_, SIZE> {
        SerialReader { queue: self }
    }

    /// Store a received byte.
    ///
    /// Returns `Err(RxOverrun(byte))` if the queue is full.
    pub fn push(&self, byte: u8) -> Result<(), RxOverrun> {
        let result = critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(byte).map_err(RxOverrun)
        });

        #[cfg(feature = "esp32-log")]
        if let Err(RxOverrun(dropped)) = result {
            println!("[SerialRx.push] overrun, dropped {:#04x}", dropped);
        }

        result
    }

    /// Store as many bytes as fit, returning how many were stored.
    pub fn push_slice(&self, bytes: &[u8]) -> usize {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            bytes
                .iter()
                .take_while(|byte| queue.push_back(**byte).is_ok())
                .count()
        })
    }

    /// Number of bytes waiting to be read.
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the oldest byte if there is one.
    pub fn try_pop(&self) -> Option<u8> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// Drop every queued byte.
    pub fn clear(&self) {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().clear());
    }
}

impl<const SIZE: usize> Default for SerialRx<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A reader handle for a [`SerialRx`].
///
/// Blocking reads spin until the interrupt handler delivers data.
#[derive(Clone, Copy)]
pub struct SerialReader<'a, const SIZE: usize = DEFAULT_RX_BUFFER_SIZE> {
    queue: &'a SerialRx<SIZE>,
}

impl<const SIZE: usize> ByteSource for SerialReader<'_, SIZE> {
    fn bytes_available(&self) -> usize {
        self.queue.len()
    }

    fn read_byte(&mut self) -> u8 {
        loop {
            if let Some(byte) = self.queue.try_pop() {
                return byte;
            }
            core::hint::spin_loop();
        }
    }

    fn read_exact(&mut self, buf: &mut [u8]) {
        for slot in buf {
            *slot = self.read_byte();
        }
    }
}
