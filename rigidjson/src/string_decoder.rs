// SPDX-License-Identifier: Apache-2.0

use alloc::boxed::Box;

use crate::cursor::Cursor;
use crate::escape_processor::EscapeProcessor;
use crate::parse_error::ParseError;
use crate::value::Value;

/// Parses a quoted string at the cursor, which must sit on the opening `"`.
///
/// Decoded bytes are collected in the scratch buffer above its current top
/// and copied into the returned value once the closing quote is found. The
/// scratch buffer is back at its starting length afterwards, whether the
/// string was valid or not.
pub fn parse_string(cursor: &mut Cursor<'_, '_>) -> Result<Value, ParseError> {
    let mark = cursor.scratch().mark();
    match decode_into_scratch(cursor) {
        Ok(()) => {
            let decoded = cursor.scratch().cut(mark);
            Ok(Value::String(Box::from(decoded)))
        }
        Err(e) => {
            cursor.scratch().rollback(mark);
            Err(e)
        }
    }
}

fn decode_into_scratch(cursor: &mut Cursor<'_, '_>) -> Result<(), ParseError> {
    if cursor.consume_byte() != Some(b'"') {
        return Err(ParseError::InvalidValue);
    }
    loop {
        match cursor.consume_byte() {
            Some(b'"') => return Ok(()),
            None => return Err(ParseError::MissQuotationMark),
            Some(b'\\') => {
                let escape_char = cursor
                    .consume_byte()
                    .ok_or(ParseError::InvalidStringEscape)?;
                let unescaped = EscapeProcessor::process_simple_escape(escape_char)?;
                cursor.scratch().push_byte(unescaped);
            }
            Some(b) if EscapeProcessor::is_control_char(b) => {
                return Err(ParseError::InvalidStringChar);
            }
            Some(b) => cursor.scratch().push_byte(b),
        }
    }
}
