//! Software UART transmitter shift register

use portable_atomic::{AtomicU16, Ordering};

/// Result of one bit tick: the level to drive on the TX line and whether
/// the frame has finished.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BitOut {
    pub level: bool,
    pub complete: bool,
}

/// Single-slot asynchronous transmitter.
///
/// A frame is ten bits in a 16-bit shift register: start bit (0), eight
/// data bits LSB first, stop bit (1). The bit interrupt emits the low bit
/// and shifts right; once the low byte reaches zero the frame is done and
/// the caller disarms the interrupt. Testing only the low byte is valid
/// because the payload is always printable, non-zero ASCII.
///
/// The interrupt is the only shifter; the main loop installs a new frame
/// only when no frame is in flight. Violating that precondition corrupts
/// the in-progress transmission; it is a timing budget guarantee (even at
/// the fastest keying rate a character takes far longer to key than the
/// roughly 1 ms frame takes to send), not a runtime check.
pub struct UartTx {
    shift: AtomicU16,
}

impl UartTx {
    pub const fn new() -> Self {
        Self {
            shift: AtomicU16::new(0),
        }
    }

    /// Install the frame for `byte` and reset the shift position.
    ///
    /// The caller must arm the bit interrupt afterwards, and must not call
    /// this while a previous frame is still shifting.
    pub fn send(&self, byte: u8) {
        let frame = (0x0100 | byte as u16) << 1;
        self.shift.store(frame, Ordering::Relaxed);
    }

    /// Emit one bit: returns the line level for this bit period and whether
    /// the frame completed. Called from the bit interrupt.
    pub fn shift_bit(&self) -> BitOut {
        let reg = self.shift.load(Ordering::Relaxed);
        let level = reg & 1 != 0;
        let reg = reg >> 1;
        self.shift.store(reg, Ordering::Relaxed);
        BitOut {
            level,
            complete: reg & 0x00FF == 0,
        }
    }

    /// True when no frame is in flight.
    pub fn idle(&self) -> bool {
        self.shift.load(Ordering::Relaxed) & 0x00FF == 0
    }
}

impl Default for UartTx {
    fn default() -> Self {
        Self::new()
    }
}
