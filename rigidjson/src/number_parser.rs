// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::cursor::Cursor;
use crate::parse_error::{from_utf8, ParseError};
use crate::value::Value;

/// Outcome of converting a validated number to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberConversion {
    /// The number is representable; underflow to zero counts as finite.
    Finite(f64),
    /// The magnitude is too large for `f64`.
    Overflow,
}

impl NumberConversion {
    pub fn into_result(self) -> Result<f64, ParseError> {
        match self {
            NumberConversion::Finite(n) => Ok(n),
            NumberConversion::Overflow => Err(ParseError::NumberTooBig),
        }
    }
}

/// Forward-only lookahead over the bytes of a single number.
struct Lookahead<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Lookahead<'_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos = self.pos.saturating_add(1);
    }

    /// Consumes the next byte if it is one of `set`.
    fn eat_any(&mut self, set: &[u8]) -> bool {
        match self.peek() {
            Some(b) if set.contains(&b) => {
                self.bump();
                true
            }
            _ => false,
        }
    }

    /// Consumes a run of ASCII digits and returns its length.
    fn skip_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.bump();
        }
        self.pos.saturating_sub(start)
    }
}

/// Validates a JSON number at the start of `bytes`.
///
/// ```text
/// number := '-'? int frac? exp?
/// int    := '0' | [1-9] [0-9]*
/// frac   := '.' [0-9]+
/// exp    := [eE] [+-]? [0-9]+
/// ```
///
/// Returns the length of the number. Bytes after it are not inspected,
/// except that a `0` integer part directly followed by a digit is rejected.
pub fn scan_number(bytes: &[u8]) -> Result<usize, ParseError> {
    let mut la = Lookahead { bytes, pos: 0 };

    la.eat_any(b"-");
    match la.peek() {
        Some(b'0') => {
            la.bump();
            if matches!(la.peek(), Some(b'0'..=b'9')) {
                return Err(ParseError::InvalidValue);
            }
        }
        Some(b'1'..=b'9') => {
            la.skip_digits();
        }
        _ => return Err(ParseError::InvalidValue),
    }

    if la.eat_any(b".") && la.skip_digits() == 0 {
        return Err(ParseError::InvalidValue);
    }

    if la.eat_any(b"eE") {
        la.eat_any(b"+-");
        if la.skip_digits() == 0 {
            return Err(ParseError::InvalidValue);
        }
    }

    Ok(la.pos)
}

/// Converts a number already accepted by [`scan_number`] to `f64`.
pub fn convert_number(validated: &[u8]) -> Result<NumberConversion, ParseError> {
    let text = from_utf8(validated).map_err(|_| ParseError::InvalidValue)?;
    let n = f64::from_str(text).map_err(|_| ParseError::InvalidValue)?;
    if n.is_infinite() {
        Ok(NumberConversion::Overflow)
    } else {
        Ok(NumberConversion::Finite(n))
    }
}

/// Parses a number at the cursor.
///
/// The cursor only moves on success.
pub fn parse_number(cursor: &mut Cursor<'_, '_>) -> Result<Value, ParseError> {
    let remaining = cursor.remaining();
    let len = scan_number(remaining)?;
    let validated = remaining.get(..len).ok_or(ParseError::InvalidValue)?;
    let n = convert_number(validated)?.into_result()?;
    cursor.advance(len);
    Ok(Value::Number(n))
}
