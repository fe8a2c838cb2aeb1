#![cfg_attr(not(feature = "std"), no_std)]

//! # Decoder Core
//!
//! Straight-key Morse decoder core logic library for embedded systems.
//! Tick-driven edge detection, symbol tokenization and code-number decoding,
//! composed with a software UART transmitter.

pub mod clock;
pub mod decoder;
pub mod edge;
pub mod hal;
pub mod pipeline;
pub mod table;
pub mod tokenizer;
pub mod types;
pub mod uart;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use clock::{expired, TickClock};
pub use decoder::Decoder;
pub use edge::EdgeDetector;
pub use pipeline::{DecodePipeline, PollOutput};
pub use tokenizer::Tokenizer;
pub use types::*;
pub use uart::{BitOut, UartTx};

/// Decoder library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
