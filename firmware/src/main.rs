#![no_std]
#![no_main]

#[cfg(feature = "defmt")]
use defmt_rtt as _;

// Panic handler
use panic_halt as _;

use core::cell::RefCell;

use cortex_m::interrupt::Mutex;
use cortex_m::peripheral::syst::SystClkSource;
use cortex_m_rt::{entry, exception};

use decoder_core::hal::mock::MockTxLine;
use decoder_core::hal::SpeedSelect;
use decoder_core::{KeyRate, TICK_HZ};
use morsedec_firmware::{invitation, on_tick, run, MockBoard};

/// Core clock of the target, in Hz.
const SYSCLK_HZ: u32 = 48_000_000;

// The tick interrupt owns the TX pin; the slot is filled before SysTick is
// enabled.
static TX_PIN: Mutex<RefCell<Option<MockTxLine>>> = Mutex::new(RefCell::new(None));

#[entry]
fn main() -> ! {
    let core = cortex_m::Peripherals::take().unwrap();

    // Stand-in pins until the real GPIO layer lands; jumpers floating = 5 WPM.
    let mut board = MockBoard::new(0b11);
    let rate = KeyRate::from_select_bits(board.speed.read_bits().unwrap_or(0b11));

    cortex_m::interrupt::free(|cs| {
        TX_PIN.borrow(cs).replace(Some(board.tx));
    });

    // SysTick as the single periodic interrupt, at TICK_HZ.
    let mut syst = core.SYST;
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(SYSCLK_HZ / TICK_HZ - 1);
    syst.clear_current();
    syst.enable_interrupt();
    syst.enable_counter();

    #[cfg(feature = "defmt")]
    defmt::info!("morsedec up, {} WPM", rate.wpm());

    // Calibration cue before entering the loop.
    invitation(&mut board.led, rate);

    run(&mut board.key, &mut board.led, rate)
}

#[exception]
fn SysTick() {
    cortex_m::interrupt::free(|cs| {
        if let Some(tx) = TX_PIN.borrow(cs).borrow_mut().as_mut() {
            on_tick(tx);
        }
    });
}
