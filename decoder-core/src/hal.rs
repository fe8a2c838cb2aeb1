//! Hardware abstraction layer for the decoder pins

use embedded_hal::digital::{InputPin, OutputPin};

/// Error types for HAL operations
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HalError {
    /// GPIO operation failed
    GpioError,
}

#[cfg(feature = "std")]
impl core::fmt::Display for HalError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            HalError::GpioError => write!(f, "GPIO operation failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for HalError {}

/// Trait for the straight-key input line
pub trait KeyInput {
    type Error: From<HalError>;

    /// True while the key is held down
    fn is_down(&mut self) -> Result<bool, Self::Error>;
}

/// Trait for the signal indicator (LED or buzzer)
pub trait StatusLed {
    type Error: From<HalError>;

    /// Drive the indicator (true = on)
    fn set_state(&mut self, on: bool) -> Result<(), Self::Error>;
}

/// Trait for the serial output line
pub trait TxLine {
    type Error: From<HalError>;

    /// Drive the TX level (true = high; the line idles high)
    fn set_level(&mut self, high: bool) -> Result<(), Self::Error>;
}

/// Trait for the speed-selection jumpers, read once at startup
pub trait SpeedSelect {
    type Error: From<HalError>;

    /// Combined 2-bit jumper value; a floating (pulled-up) pin reads 1
    fn read_bits(&mut self) -> Result<u8, Self::Error>;
}

/// Generic key input over an embedded-hal pin. The key shorts the pin to
/// ground, so the line is active-low.
pub struct EmbeddedHalKey<P> {
    pin: P,
}

impl<P> EmbeddedHalKey<P>
where
    P: InputPin,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> KeyInput for EmbeddedHalKey<P>
where
    P: InputPin,
{
    type Error = HalError;

    fn is_down(&mut self) -> Result<bool, Self::Error> {
        self.pin.is_low().map_err(|_| HalError::GpioError)
    }
}

/// Generic indicator over an embedded-hal output pin
pub struct EmbeddedHalLed<P> {
    pin: P,
}

impl<P> EmbeddedHalLed<P>
where
    P: OutputPin,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> StatusLed for EmbeddedHalLed<P>
where
    P: OutputPin,
{
    type Error = HalError;

    fn set_state(&mut self, on: bool) -> Result<(), Self::Error> {
        if on {
            self.pin.set_high().map_err(|_| HalError::GpioError)
        } else {
            self.pin.set_low().map_err(|_| HalError::GpioError)
        }
    }
}

/// Generic TX line over an embedded-hal output pin
pub struct EmbeddedHalTx<P> {
    pin: P,
}

impl<P> EmbeddedHalTx<P>
where
    P: OutputPin,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }
}

impl<P> TxLine for EmbeddedHalTx<P>
where
    P: OutputPin,
{
    type Error = HalError;

    fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.pin.set_high().map_err(|_| HalError::GpioError)
        } else {
            self.pin.set_low().map_err(|_| HalError::GpioError)
        }
    }
}

/// Speed jumpers over two embedded-hal input pins
pub struct EmbeddedHalSpeedSelect<P0, P1> {
    bit0: P0,
    bit1: P1,
}

impl<P0, P1> EmbeddedHalSpeedSelect<P0, P1>
where
    P0: InputPin,
    P1: InputPin,
{
    pub fn new(bit0: P0, bit1: P1) -> Self {
        Self { bit0, bit1 }
    }
}

impl<P0, P1> SpeedSelect for EmbeddedHalSpeedSelect<P0, P1>
where
    P0: InputPin,
    P1: InputPin,
{
    type Error = HalError;

    fn read_bits(&mut self) -> Result<u8, Self::Error> {
        let b0 = self.bit0.is_high().map_err(|_| HalError::GpioError)? as u8;
        let b1 = self.bit1.is_high().map_err(|_| HalError::GpioError)? as u8;
        Ok(b1 << 1 | b0)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Mock implementations for testing

    use super::*;
    use core::cell::Cell;

    #[derive(Default)]
    pub struct MockKey {
        down: Cell<bool>,
    }

    impl MockKey {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn set_down(&self, down: bool) {
            self.down.set(down);
        }
    }

    impl KeyInput for MockKey {
        type Error = HalError;

        fn is_down(&mut self) -> Result<bool, Self::Error> {
            Ok(self.down.get())
        }
    }

    #[derive(Default)]
    pub struct MockLed {
        on: Cell<bool>,
    }

    impl MockLed {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn is_on(&self) -> bool {
            self.on.get()
        }
    }

    impl StatusLed for MockLed {
        type Error = HalError;

        fn set_state(&mut self, on: bool) -> Result<(), Self::Error> {
            self.on.set(on);
            Ok(())
        }
    }

    #[derive(Default)]
    pub struct MockTxLine {
        level: Cell<bool>,
    }

    impl MockTxLine {
        pub fn new() -> Self {
            let line = Self::default();
            line.level.set(true); // TX idles high
            line
        }

        pub fn level(&self) -> bool {
            self.level.get()
        }
    }

    impl TxLine for MockTxLine {
        type Error = HalError;

        fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
            self.level.set(high);
            Ok(())
        }
    }

    /// Fixed jumper setting
    pub struct MockSpeedSelect(pub u8);

    impl SpeedSelect for MockSpeedSelect {
        type Error = HalError;

        fn read_bits(&mut self) -> Result<u8, Self::Error> {
            Ok(self.0 & 0x03)
        }
    }
}
