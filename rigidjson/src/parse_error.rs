// SPDX-License-Identifier: Apache-2.0

/// Errors that can occur while parsing a JSON value.
///
/// Every variant is a permanent, deterministic failure for the given input:
/// parsing the same bytes again yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// The input was empty or contained only whitespace.
    ExpectValue,
    /// The next token matched no recognized form, or a literal or number
    /// failed its grammar partway through.
    InvalidValue,
    /// A value parsed successfully but non-whitespace input followed it.
    RootNotSingular,
    /// A syntactically valid number overflows `f64`.
    NumberTooBig,
    /// A string literal reached end of input before its closing quote.
    MissQuotationMark,
    /// A backslash was followed by a byte outside the escape set.
    InvalidStringEscape,
    /// An unescaped control character (below `0x20`) appeared in a string.
    InvalidStringChar,
}

impl ParseError {
    /// Status code reported for a successful parse.
    pub const OK_CODE: u8 = 0;

    /// Stable numeric status code for this error.
    ///
    /// Codes start at 1; [`ParseError::OK_CODE`] is reserved for success.
    pub const fn code(&self) -> u8 {
        match self {
            ParseError::ExpectValue => 1,
            ParseError::InvalidValue => 2,
            ParseError::RootNotSingular => 3,
            ParseError::NumberTooBig => 4,
            ParseError::MissQuotationMark => 5,
            ParseError::InvalidStringEscape => 6,
            ParseError::InvalidStringChar => 7,
        }
    }

    /// Inverse of [`ParseError::code`]. Returns `None` for `OK_CODE` and
    /// for codes that name no error.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(ParseError::ExpectValue),
            2 => Some(ParseError::InvalidValue),
            3 => Some(ParseError::RootNotSingular),
            4 => Some(ParseError::NumberTooBig),
            5 => Some(ParseError::MissQuotationMark),
            6 => Some(ParseError::InvalidStringEscape),
            7 => Some(ParseError::InvalidStringChar),
            _ => None,
        }
    }
}

/// Collapse a parse result into its numeric status code.
pub fn status_code(result: &Result<(), ParseError>) -> u8 {
    match result {
        Ok(()) => ParseError::OK_CODE,
        Err(e) => e.code(),
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ParseError::ExpectValue => "expected a value",
            ParseError::InvalidValue => "invalid value",
            ParseError::RootNotSingular => "unexpected content after the root value",
            ParseError::NumberTooBig => "number too big",
            ParseError::MissQuotationMark => "missing closing quotation mark",
            ParseError::InvalidStringEscape => "invalid string escape",
            ParseError::InvalidStringChar => "invalid character in string",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for ParseError {}

/// Error returned when a string payload is not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidUtf8(pub core::str::Utf8Error);

impl From<core::str::Utf8Error> for InvalidUtf8 {
    fn from(err: core::str::Utf8Error) -> Self {
        InvalidUtf8(err)
    }
}

impl core::fmt::Display for InvalidUtf8 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid UTF-8: {}", self.0)
    }
}

impl core::error::Error for InvalidUtf8 {}

pub const fn from_utf8(v: &[u8]) -> Result<&str, InvalidUtf8> {
    match core::str::from_utf8(v) {
        Ok(s) => Ok(s),
        Err(e) => Err(InvalidUtf8(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_stable() {
        assert_eq!(ParseError::ExpectValue.code(), 1);
        assert_eq!(ParseError::InvalidValue.code(), 2);
        assert_eq!(ParseError::RootNotSingular.code(), 3);
        assert_eq!(ParseError::NumberTooBig.code(), 4);
        assert_eq!(ParseError::MissQuotationMark.code(), 5);
        assert_eq!(ParseError::InvalidStringEscape.code(), 6);
        assert_eq!(ParseError::InvalidStringChar.code(), 7);
        assert_eq!(status_code(&Ok(())), ParseError::OK_CODE);
        assert_eq!(status_code(&Err(ParseError::NumberTooBig)), 4);
    }

    #[test]
    fn test_from_code_inverts_code() {
        for code in 1..=7u8 {
            let err = ParseError::from_code(code).unwrap();
            assert_eq!(err.code(), code);
        }
        assert_eq!(ParseError::from_code(ParseError::OK_CODE), None);
        assert_eq!(ParseError::from_code(8), None);
    }

    #[test]
    fn test_utf8_error_conversion() {
        // Lone continuation byte, built at runtime to avoid a literal warning
        let mut invalid_utf8_array = [0u8; 1];
        invalid_utf8_array[0] = 0b10000000u8;

        match from_utf8(&invalid_utf8_array) {
            Err(InvalidUtf8(_)) => {}
            Ok(_) => panic!("Expected UTF-8 validation to fail"),
        }
        assert_eq!(from_utf8(b"ok"), Ok("ok"));
    }

    #[test]
    fn test_display() {
        use alloc::string::ToString;
        assert_eq!(ParseError::ExpectValue.to_string(), "expected a value");
        assert_eq!(
            ParseError::RootNotSingular.to_string(),
            "unexpected content after the root value"
        );
    }
}
