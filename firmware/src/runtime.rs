//! Tick-interrupt runtime: clock, UART bit shifting and the poll loop

use portable_atomic::{AtomicBool, Ordering};

use decoder_core::hal::{KeyInput, StatusLed, TxLine};
use decoder_core::{DecodePipeline, Edge, KeyRate, TickClock, UartTx};

/// System clock, advanced by the periodic interrupt.
pub static CLOCK: TickClock = TickClock::new();

/// UART shift register, shifted by the periodic interrupt.
pub static UART: UartTx = UartTx::new();

/// Bit-interrupt arm flag: set when a frame is installed, cleared by the
/// interrupt once the frame has fully shifted out.
static TX_ARMED: AtomicBool = AtomicBool::new(false);

/// Periodic interrupt body. One hardware interrupt services both logical
/// ticks: the system clock and, while a frame is armed, one UART bit.
pub fn on_tick(tx: &mut impl TxLine) {
    CLOCK.tick();
    if TX_ARMED.load(Ordering::Relaxed) {
        let out = UART.shift_bit();
        tx.set_level(out.level).ok();
        if out.complete {
            TX_ARMED.store(false, Ordering::Relaxed);
        }
    }
}

/// Hand a decoded character to the transmitter.
///
/// The previous frame is assumed complete; at the supported keying rates
/// the next character cannot be ready before the roughly 1 ms frame has
/// drained (the assumption would only break above 280 WPM).
pub fn send(byte: u8) {
    UART.send(byte);
    TX_ARMED.store(true, Ordering::Relaxed);
}

/// Flash the invitation-to-transmit codeword (`K`, code number 22) on the
/// indicator at the selected speed, as a calibration cue for the operator.
///
/// Walks the code number exactly like the decoder builds it: a set bit is
/// one unit of light, preceded by two more for the 0 of a dash.
pub fn invitation(led: &mut impl StatusLed, rate: KeyRate) {
    let unit = rate.dot_ticks();
    let mut code: u8 = 22;
    while code != 0 {
        led.set_state(true).ok();
        if code & 1 == 0 {
            // dash: 0-bit adds two units before the 1-bit's one
            CLOCK.busy_wait(unit);
            CLOCK.busy_wait(unit);
            code >>= 1;
        }
        CLOCK.busy_wait(unit);
        code >>= 1;
        led.set_state(false).ok();
        CLOCK.busy_wait(unit);
    }
}

/// Steady-state poll loop: edge detection, tokenizing, decoding and the
/// transmitter handoff. Never returns.
pub fn run(key: &mut impl KeyInput, led: &mut impl StatusLed, rate: KeyRate) -> ! {
    let mut pipeline = DecodePipeline::new(rate);
    loop {
        let now = CLOCK.now();
        // A failed pin read counts as key up.
        let down = key.is_down().unwrap_or(false);
        let out = pipeline.poll(down, now);
        match out.edge {
            Some(Edge::Fall) => {
                led.set_state(true).ok();
            }
            Some(Edge::Rise) => {
                led.set_state(false).ok();
            }
            None => {}
        }
        if let Some(byte) = out.byte {
            #[cfg(feature = "defmt")]
            defmt::debug!("decoded: {=u8:a}", byte);
            send(byte);
        }
    }
}
