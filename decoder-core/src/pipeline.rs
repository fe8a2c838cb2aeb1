//! Edge detection, tokenization and decoding composed into one poll

use crate::decoder::Decoder;
use crate::edge::EdgeDetector;
use crate::tokenizer::Tokenizer;
use crate::types::{Edge, KeyRate, Tick, UnitDelays};

/// Outcome of one pipeline poll.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct PollOutput {
    /// Key transition seen this poll, for mirroring on the indicator.
    pub edge: Option<Edge>,
    /// Completed character, ready for transmission.
    pub byte: Option<u8>,
}

/// The three-stage decode pipeline.
///
/// One call per main-loop iteration: sample the key, tokenize, decode.
/// At most one character is produced per poll, which is what keeps the
/// single-slot transmitter handoff safe.
pub struct DecodePipeline {
    edge: EdgeDetector,
    tokenizer: Tokenizer,
    decoder: Decoder,
}

impl DecodePipeline {
    pub const fn new(rate: KeyRate) -> Self {
        Self {
            edge: EdgeDetector::new(),
            tokenizer: Tokenizer::new(UnitDelays::for_rate(rate)),
            decoder: Decoder::new(),
        }
    }

    /// Run one poll at time `now` with the raw key level `key_down`.
    pub fn poll(&mut self, key_down: bool, now: Tick) -> PollOutput {
        let edge = self.edge.sample(key_down, now);
        let symbol = self.tokenizer.advance(edge, now);
        #[cfg(feature = "defmt")]
        if let Some(sym) = symbol {
            defmt::trace!("symbol: {:?}", sym);
        }
        let byte = symbol.and_then(|sym| self.decoder.feed(sym));
        PollOutput { edge, byte }
    }

    /// Debounced key level, for the signal indicator.
    pub fn key_is_down(&self) -> bool {
        self.edge.is_pressed()
    }
}
