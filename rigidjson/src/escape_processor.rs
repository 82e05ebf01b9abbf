// SPDX-License-Identifier: Apache-2.0

use crate::parse_error::ParseError;

/// Decoding of the single-byte backslash escapes.
pub struct EscapeProcessor;

impl EscapeProcessor {
    /// Process a simple escape sequence character and return the unescaped byte.
    ///
    /// # Arguments
    /// * `escape_char` - The character following the backslash in an escape sequence
    ///
    /// # Returns
    /// The unescaped byte value, or `InvalidStringEscape` for any byte outside
    /// the escape set. `\u` escapes are not part of the set.
    ///
    /// # Examples
    /// ```ignore
    /// // Internal API - see unit tests for usage examples
    /// assert_eq!(EscapeProcessor::process_simple_escape(b'n').unwrap(), b'\n');
    /// ```
    pub fn process_simple_escape(escape_char: u8) -> Result<u8, ParseError> {
        match escape_char {
            b'n' => Ok(b'\n'),
            b't' => Ok(b'\t'),
            b'r' => Ok(b'\r'),
            b'\\' => Ok(b'\\'),
            b'"' => Ok(b'"'),
            b'/' => Ok(b'/'),
            b'b' => Ok(0x08), // Backspace
            b'f' => Ok(0x0C), // Form feed
            _ => Err(ParseError::InvalidStringEscape),
        }
    }

    /// Bytes that may not appear unescaped inside a string.
    pub fn is_control_char(byte: u8) -> bool {
        byte < 0x20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_escapes() {
        assert_eq!(EscapeProcessor::process_simple_escape(b'n'), Ok(b'\n'));
        assert_eq!(EscapeProcessor::process_simple_escape(b't'), Ok(b'\t'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'r'), Ok(b'\r'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'\\'), Ok(b'\\'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'"'), Ok(b'"'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'/'), Ok(b'/'));
        assert_eq!(EscapeProcessor::process_simple_escape(b'b'), Ok(0x08));
        assert_eq!(EscapeProcessor::process_simple_escape(b'f'), Ok(0x0C));
    }

    #[test]
    fn test_invalid_escapes() {
        for c in [b'x', b'u', b'a', b'0', b'N', b' ', b'\''] {
            assert_eq!(
                EscapeProcessor::process_simple_escape(c),
                Err(ParseError::InvalidStringEscape),
                "escape char {:?}",
                c as char
            );
        }
    }

    #[test]
    fn test_control_chars() {
        assert!(EscapeProcessor::is_control_char(0x00));
        assert!(EscapeProcessor::is_control_char(b'\t'));
        assert!(EscapeProcessor::is_control_char(0x1F));
        assert!(!EscapeProcessor::is_control_char(b' '));
        assert!(!EscapeProcessor::is_control_char(0x7F));
        assert!(!EscapeProcessor::is_control_char(0xC3));
    }
}
