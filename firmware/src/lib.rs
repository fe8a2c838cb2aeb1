#![no_std]

//! Firmware library: board abstraction and the tick-interrupt runtime.
//!
//! The binary in `main.rs` only wires a concrete board to [`runtime::run`];
//! everything testable lives here or in `decoder-core`.

pub mod board;
pub mod runtime;

pub use board::MockBoard;
pub use runtime::{invitation, on_tick, run, send, CLOCK, UART};
