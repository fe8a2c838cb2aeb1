//! Symbol-stream to character decoder

use crate::table;
use crate::types::Symbol;

/// Accumulates dots and dashes into a code number and converts it to ASCII
/// on character boundaries.
///
/// Symbols translate to a bit stream, least significant bit first:
/// a dot appends `1`, a dash appends `0, 1`. The bit length terminates the
/// code, so every dot/dash sequence maps to a distinct code number.
pub struct Decoder {
    code: u16,
    bitmask: u16,
}

impl Decoder {
    pub const fn new() -> Self {
        Self { code: 0, bitmask: 1 }
    }

    /// Feed one symbol, returning a completed character, if any.
    pub fn feed(&mut self, symbol: Symbol) -> Option<u8> {
        match symbol {
            Symbol::Dash => {
                self.bitmask = self.bitmask.wrapping_shl(1); // append a 0
                self.push_one();
            }
            Symbol::Dot => self.push_one(),
            Symbol::EndOfChar => {
                let c = table::lookup(self.code);
                self.code = 0;
                self.bitmask = 1;
                return Some(c);
            }
            // The tokenizer only reaches the inter-word state through an
            // EndOfChar, so the accumulator is already flushed here.
            Symbol::EndOfWord => return Some(b' '),
        }
        None
    }

    // Shifts wrap: a sequence past 16 bits degrades into a code that fails
    // lookup instead of overflowing.
    fn push_one(&mut self) {
        self.code |= self.bitmask;
        self.bitmask = self.bitmask.wrapping_shl(1);
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}
