//! Core data types for the Morse decoder

/// System clock tick. Wraps every 65 536 ticks (about 6.8 s at [`TICK_HZ`]).
pub type Tick = u16;

/// Tick frequency of the periodic interrupt, in Hz.
///
/// Resolution is about 104 µs per tick. Every other duration constant in
/// this crate is expressed in these ticks.
pub const TICK_HZ: u32 = 9_600;

/// Debounce interval for the key input, about 10 ms.
///
/// Long enough to swallow mechanical contact bounce, short against the
/// 640-tick dot at the fastest keying rate.
pub const DEBOUNCE_TICKS: Tick = 96;

/// Sentinel emitted for a finalized code with no table entry.
pub const INVALID_CHAR: u8 = b'#';

/// Key line transitions reported by the edge detector.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Key went down
    Fall,
    /// Key came up (after the debounce interval)
    Rise,
}

/// Timing symbols produced by the tokenizer.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Symbol {
    Dot,
    Dash,
    /// Inter-element gap grew past 2 units: the character is complete.
    EndOfChar,
    /// Gap grew past 3 more units: the word is complete.
    EndOfWord,
}

/// Keying rates selectable through the speed jumpers.
///
/// The two jumper lines are pulled up, so a floating pin reads 1 and a
/// grounded pin reads 0. Both floating selects the slowest rate.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyRate {
    Wpm5,
    Wpm8,
    Wpm12,
    Wpm18,
}

impl KeyRate {
    /// Decode the 2-bit jumper value read once at startup.
    pub const fn from_select_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b11 => KeyRate::Wpm5,
            0b10 => KeyRate::Wpm8,
            0b01 => KeyRate::Wpm12,
            _ => KeyRate::Wpm18,
        }
    }

    /// Dot duration in ticks: `1.2 / wpm * TICK_HZ`, precomputed.
    pub const fn dot_ticks(&self) -> Tick {
        match self {
            KeyRate::Wpm5 => 2304,
            KeyRate::Wpm8 => 1440,
            KeyRate::Wpm12 => 960,
            KeyRate::Wpm18 => 640,
        }
    }

    /// Keying rate in words per minute.
    pub const fn wpm(&self) -> u32 {
        match self {
            KeyRate::Wpm5 => 5,
            KeyRate::Wpm8 => 8,
            KeyRate::Wpm12 => 12,
            KeyRate::Wpm18 => 18,
        }
    }
}

/// Delays for 1, 2 and 3 Morse time units at a given rate, in ticks.
///
/// Built by addition only; the target has no hardware multiplier and a
/// multiply costs flash.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct UnitDelays {
    pub one: Tick,
    pub two: Tick,
    pub three: Tick,
}

impl UnitDelays {
    pub const fn for_rate(rate: KeyRate) -> Self {
        let one = rate.dot_ticks();
        let two = one + one;
        let three = two + one;
        Self { one, two, three }
    }
}
