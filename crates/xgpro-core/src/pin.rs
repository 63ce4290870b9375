//! Pin states and their symbol and nibble encodings.

use std::fmt;

use crate::error::PinError;

/// The state a single pin is driven to or checked against during one test
/// cycle.
///
/// The discriminant is the 4-bit code stored in the packed vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PinState {
    InputLow = 0,
    InputHigh = 1,
    OutputLow = 2,
    OutputHigh = 3,
    InputPulse = 4,
    HighZ = 5,
    Ignore = 6,
    Ground = 7,
    Vcc = 8,
}

impl PinState {
    /// Every pin state, in code order.
    pub const ALL: [PinState; 9] = [
        PinState::InputLow,
        PinState::InputHigh,
        PinState::OutputLow,
        PinState::OutputHigh,
        PinState::InputPulse,
        PinState::HighZ,
        PinState::Ignore,
        PinState::Ground,
        PinState::Vcc,
    ];

    /// Symbol used for codes that do not name a pin state.
    ///
    /// Only for display; never produced by [`PinState::symbol`].
    pub const BLANK: char = ' ';

    /// The 4-bit nibble code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a pin state by nibble code.
    pub fn from_code(code: u8) -> Result<Self, PinError> {
        match code {
            0 => Ok(PinState::InputLow),
            1 => Ok(PinState::InputHigh),
            2 => Ok(PinState::OutputLow),
            3 => Ok(PinState::OutputHigh),
            4 => Ok(PinState::InputPulse),
            5 => Ok(PinState::HighZ),
            6 => Ok(PinState::Ignore),
            7 => Ok(PinState::Ground),
            8 => Ok(PinState::Vcc),
            _ => Err(PinError::InvalidCode(code)),
        }
    }

    /// The canonical single-character symbol.
    pub const fn symbol(self) -> char {
        match self {
            PinState::InputLow => '0',
            PinState::InputHigh => '1',
            PinState::OutputLow => 'L',
            PinState::OutputHigh => 'H',
            PinState::InputPulse => 'C',
            PinState::HighZ => 'Z',
            PinState::Ignore => 'X',
            PinState::Ground => 'G',
            PinState::Vcc => 'V',
        }
    }

    /// Look up a pin state by symbol. Symbols are case-sensitive.
    pub fn from_symbol(symbol: char) -> Result<Self, PinError> {
        match symbol {
            '0' => Ok(PinState::InputLow),
            '1' => Ok(PinState::InputHigh),
            'L' => Ok(PinState::OutputLow),
            'H' => Ok(PinState::OutputHigh),
            'C' => Ok(PinState::InputPulse),
            'Z' => Ok(PinState::HighZ),
            'X' => Ok(PinState::Ignore),
            'G' => Ok(PinState::Ground),
            'V' => Ok(PinState::Vcc),
            _ => Err(PinError::InvalidSymbol(symbol)),
        }
    }

    /// Symbol for a raw nibble, falling back to [`PinState::BLANK`].
    pub fn display_symbol(code: u8) -> char {
        Self::from_code(code).map_or(Self::BLANK, Self::symbol)
    }
}

impl fmt::Display for PinState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for PinState {
    type Error = PinError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

impl TryFrom<u8> for PinState {
    type Error = PinError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}
