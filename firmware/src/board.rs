//! Board pin layer
//!
//! The runtime talks to pins exclusively through the `decoder_core::hal`
//! traits. A real board implements them by wrapping its GPIO pins in the
//! `EmbeddedHal*` adapters from that module; until such a layer lands, the
//! binary runs on the stand-in pins below, which host tests also use to
//! observe the lines.

use decoder_core::hal::mock::{MockKey, MockLed, MockSpeedSelect, MockTxLine};

/// The full pin set of one board.
///
/// Fields are public so the binary can split ownership: the TX pin moves
/// into the tick interrupt, the rest stays with the poll loop.
pub struct MockBoard {
    pub key: MockKey,
    pub led: MockLed,
    pub tx: MockTxLine,
    pub speed: MockSpeedSelect,
}

impl MockBoard {
    pub fn new(speed_bits: u8) -> Self {
        Self {
            key: MockKey::new(),
            led: MockLed::new(),
            tx: MockTxLine::new(),
            speed: MockSpeedSelect(speed_bits),
        }
    }
}
