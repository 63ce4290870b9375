//! Nibble packing of test vectors.
//!
//! A vector occupies a fixed 24-byte slot. Pins are stored in pairs: for pair
//! `i`, the first pin lands in the low nibble of byte `i` and the second pin
//! in the high nibble. Bytes past `pin_count / 2` stay zero.

use crate::error::CodecError;
use crate::pin::PinState;

/// Size of one packed vector in bytes.
pub const VECTOR_BYTES: usize = 24;

/// Largest pin count a vector can hold.
pub const MAX_PINS: usize = VECTOR_BYTES * 2;

/// One row of pin states, packed two pins per byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TestVector([u8; VECTOR_BYTES]);

impl TestVector {
    /// Wrap raw packed bytes. No validation is performed.
    pub const fn from_bytes(bytes: [u8; VECTOR_BYTES]) -> Self {
        Self(bytes)
    }

    /// The raw packed bytes, exactly as stored in a file.
    pub fn as_bytes(&self) -> &[u8; VECTOR_BYTES] {
        &self.0
    }

    /// Check that `pin_count` is even and fits in a vector.
    pub fn check_pin_count(pin_count: usize) -> Result<(), CodecError> {
        if pin_count % 2 != 0 || pin_count > MAX_PINS {
            return Err(CodecError::PinCount { pin_count });
        }
        Ok(())
    }

    /// Pack `states` into a vector for an IC with `pin_count` pins.
    pub fn pack(states: &[PinState], pin_count: usize) -> Result<Self, CodecError> {
        Self::check_pin_count(pin_count)?;
        if states.len() != pin_count {
            return Err(CodecError::LengthMismatch {
                expected: pin_count,
                actual: states.len(),
            });
        }

        let mut bytes = [0u8; VECTOR_BYTES];
        for (slot, pair) in bytes.iter_mut().zip(states.chunks_exact(2)) {
            *slot = pair[0].code() | (pair[1].code() << 4);
        }
        Ok(Self(bytes))
    }

    /// Parse a symbol string such as `"01LH"` and pack it.
    pub fn parse(symbols: &str, pin_count: usize) -> Result<Self, CodecError> {
        Self::check_pin_count(pin_count)?;
        let actual = symbols.chars().count();
        if actual != pin_count {
            return Err(CodecError::LengthMismatch {
                expected: pin_count,
                actual,
            });
        }

        let states = symbols
            .chars()
            .enumerate()
            .map(|(position, symbol)| {
                PinState::from_symbol(symbol).map_err(|source| CodecError::Pin { position, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::pack(&states, pin_count)
    }

    /// Raw nibble codes for the first `pin_count` pins, in pin order.
    ///
    /// Each byte yields its low nibble first, then its high nibble, which
    /// reproduces the order the pins were packed in.
    pub fn codes(&self, pin_count: usize) -> impl Iterator<Item = u8> + '_ {
        self.0
            .iter()
            .take(pin_count / 2)
            .flat_map(|&byte| [byte & 0x0F, byte >> 4])
    }

    /// Unpack the first `pin_count` pins, rejecting unknown codes.
    pub fn unpack(&self, pin_count: usize) -> Result<Vec<PinState>, CodecError> {
        Self::check_pin_count(pin_count)?;
        self.codes(pin_count)
            .enumerate()
            .map(|(position, code)| {
                PinState::from_code(code).map_err(|source| CodecError::Pin { position, source })
            })
            .collect()
    }

    /// Render the first `pin_count` pins as a symbol string.
    ///
    /// Unknown codes render as [`PinState::BLANK`]; use [`TestVector::unpack`]
    /// when the result must round-trip.
    pub fn render(&self, pin_count: usize) -> String {
        self.codes(pin_count).map(PinState::display_symbol).collect()
    }

    /// Position and code of the first nibble that is not a valid pin state.
    pub fn first_invalid(&self, pin_count: usize) -> Option<(usize, u8)> {
        self.codes(pin_count)
            .enumerate()
            .find(|(_, code)| PinState::from_code(*code).is_err())
    }
}
