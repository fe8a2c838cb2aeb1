//! Timing-based symbol tokenizer

use crate::clock::expired;
use crate::types::{Edge, Symbol, Tick, UnitDelays};

/// Tokenizer state.
///
/// `Short`/`Long` track a key-down interval, the `Inter*` states a gap.
/// Deadlines are absolute tick values; a state without an expiry condition
/// carries none.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum TokenState {
    InterWord,
    Short { deadline: Tick },
    Long,
    InterElement { deadline: Tick },
    InterCharacter { deadline: Tick },
}

/// Classifies key-down and key-up durations into Morse symbols.
///
/// A key-down shorter than two units is a dot, two units or longer a dash
/// (decided at release, or already at the two-unit mark while still down).
/// A gap shorter than two units separates elements of one character, a gap
/// reaching two units ends the character, and one more unit beyond that
/// ends the word. At most one symbol is produced per poll.
pub struct Tokenizer {
    state: TokenState,
    units: UnitDelays,
}

impl Tokenizer {
    pub const fn new(units: UnitDelays) -> Self {
        Self {
            state: TokenState::InterWord,
            units,
        }
    }

    /// Advance the state machine by one poll.
    pub fn advance(&mut self, edge: Option<Edge>, now: Tick) -> Option<Symbol> {
        match self.state {
            TokenState::InterWord => {
                if edge == Some(Edge::Fall) {
                    self.state = TokenState::Short {
                        deadline: now.wrapping_add(self.units.two),
                    };
                }
            }
            TokenState::Short { deadline } => {
                if edge == Some(Edge::Rise) {
                    self.state = TokenState::InterElement {
                        deadline: now.wrapping_add(self.units.two),
                    };
                    return Some(Symbol::Dot);
                } else if expired(now, deadline) {
                    self.state = TokenState::Long;
                }
            }
            TokenState::Long => {
                if edge == Some(Edge::Rise) {
                    self.state = TokenState::InterElement {
                        deadline: now.wrapping_add(self.units.two),
                    };
                    return Some(Symbol::Dash);
                }
            }
            TokenState::InterElement { deadline } => {
                if edge == Some(Edge::Fall) {
                    self.state = TokenState::Short {
                        deadline: now.wrapping_add(self.units.two),
                    };
                } else if expired(now, deadline) {
                    self.state = TokenState::InterCharacter {
                        deadline: now.wrapping_add(self.units.three),
                    };
                    return Some(Symbol::EndOfChar);
                }
            }
            TokenState::InterCharacter { deadline } => {
                if edge == Some(Edge::Fall) {
                    self.state = TokenState::Short {
                        deadline: now.wrapping_add(self.units.two),
                    };
                } else if expired(now, deadline) {
                    self.state = TokenState::InterWord;
                    return Some(Symbol::EndOfWord);
                }
            }
        }
        None
    }
}
