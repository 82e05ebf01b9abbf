// SPDX-License-Identifier: Apache-2.0

use crate::cursor::Cursor;
use crate::parse_error::ParseError;
use crate::value::Value;

/// Matches `keyword` against the start of the remaining input.
///
/// On a match the cursor moves past the keyword and `value` is returned.
/// A mismatch, or input shorter than the keyword, is `InvalidValue`; the
/// cursor is left where it was.
pub fn parse_literal(
    cursor: &mut Cursor<'_, '_>,
    keyword: &'static [u8],
    value: Value,
) -> Result<Value, ParseError> {
    if !cursor.remaining().starts_with(keyword) {
        return Err(ParseError::InvalidValue);
    }
    cursor.advance(keyword.len());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scratch_buffer::ScratchBuffer;

    fn run(input: &[u8], keyword: &'static [u8], value: Value) -> (Result<Value, ParseError>, usize) {
        let mut scratch = ScratchBuffer::new();
        let mut cursor = Cursor::new(input, &mut scratch);
        let result = parse_literal(&mut cursor, keyword, value);
        (result, cursor.current_pos())
    }

    #[test]
    fn test_exact_match_advances() {
        assert_eq!(run(b"null", b"null", Value::Null), (Ok(Value::Null), 4));
        assert_eq!(
            run(b"true ", b"true", Value::Bool(true)),
            (Ok(Value::Bool(true)), 4)
        );
    }

    #[test]
    fn test_match_leaves_trailing_input() {
        // Trailing bytes are the driver's concern
        assert_eq!(
            run(b"falsey", b"false", Value::Bool(false)),
            (Ok(Value::Bool(false)), 5)
        );
    }

    #[test]
    fn test_mismatch() {
        assert_eq!(
            run(b"nul", b"null", Value::Null),
            (Err(ParseError::InvalidValue), 0)
        );
        assert_eq!(
            run(b"tru3", b"true", Value::Bool(true)),
            (Err(ParseError::InvalidValue), 0)
        );
        assert_eq!(
            run(b"", b"false", Value::Bool(false)),
            (Err(ParseError::InvalidValue), 0)
        );
    }
}
