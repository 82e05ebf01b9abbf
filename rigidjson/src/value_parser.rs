// SPDX-License-Identifier: Apache-2.0

use core::str::FromStr;

use crate::config::ParserConfig;
use crate::cursor::Cursor;
use crate::literal::parse_literal;
use crate::number_parser::parse_number;
use crate::parse_error::ParseError;
use crate::scratch_buffer::ScratchBuffer;
use crate::string_decoder::parse_string;
use crate::value::Value;

/// Progress of a single top-level parse.
#[derive(Debug, PartialEq)]
enum DriverState {
    Start,
    ParsingValue,
    TrailingCheck(Value),
    Done(Value),
    Error(ParseError),
}

/// Parses one JSON value from a complete input.
///
/// A `Parser` only holds configuration. Every call to [`Parser::parse`]
/// allocates its own scratch buffer and frees it before returning, so one
/// parser can be shared freely, including across threads.
///
/// # Example
/// ```
/// use rigidjson::{Parser, ParserConfig, Value};
///
/// let parser = Parser::with_config(ParserConfig::new().with_initial_capacity(64));
/// let mut value = Value::Null;
/// parser.parse(&mut value, r#" "a\tb" "#).unwrap();
/// assert_eq!(value.as_bytes(), Some(&b"a\tb"[..]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Creates a parser with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `input` into `value`.
    ///
    /// `value` is reset to [`Value::Null`] first and stays `Null` unless the
    /// whole input is exactly one value surrounded by optional whitespace.
    pub fn parse(&self, value: &mut Value, input: &str) -> Result<(), ParseError> {
        self.parse_slice(value, input.as_bytes())
    }

    /// Like [`Parser::parse`], for input that may not be UTF-8.
    pub fn parse_slice(&self, value: &mut Value, input: &[u8]) -> Result<(), ParseError> {
        value.set_null();
        let mut scratch = ScratchBuffer::with_initial_capacity(self.config.initial_capacity);
        let mut cursor = Cursor::new(input, &mut scratch);
        let result = run(&mut cursor);
        let end_pos = cursor.current_pos();
        debug_assert!(scratch.is_empty());

        match result {
            Ok(parsed) => {
                log::debug!("parsed {:?} from {} bytes", parsed.value_type(), input.len());
                *value = parsed;
                Ok(())
            }
            Err(e) => {
                log::debug!("parse failed near byte {}: {}", end_pos, e);
                Err(e)
            }
        }
    }
}

/// Drives a top-level parse from `Start` to `Done` or `Error`.
fn run(cursor: &mut Cursor<'_, '_>) -> Result<Value, ParseError> {
    let mut state = DriverState::Start;
    loop {
        state = match state {
            DriverState::Start => {
                cursor.skip_whitespace();
                DriverState::ParsingValue
            }
            DriverState::ParsingValue => match parse_value(cursor) {
                Ok(value) => DriverState::TrailingCheck(value),
                Err(e) => DriverState::Error(e),
            },
            DriverState::TrailingCheck(value) => {
                cursor.skip_whitespace();
                if cursor.is_at_end() {
                    DriverState::Done(value)
                } else {
                    // `value` is dropped here, releasing any string payload
                    DriverState::Error(ParseError::RootNotSingular)
                }
            }
            DriverState::Done(value) => return Ok(value),
            DriverState::Error(e) => return Err(e),
        };
    }
}

/// Parses the value starting at the next byte, which must not be whitespace.
pub fn parse_value(cursor: &mut Cursor<'_, '_>) -> Result<Value, ParseError> {
    let next = cursor.peek();
    log::trace!(
        "dispatch at byte {} on {:?}",
        cursor.current_pos(),
        next.map(char::from)
    );
    match next {
        None => Err(ParseError::ExpectValue),
        Some(b'"') => parse_string(cursor),
        Some(b't') => parse_literal(cursor, b"true", Value::Bool(true)),
        Some(b'f') => parse_literal(cursor, b"false", Value::Bool(false)),
        Some(b'n') => parse_literal(cursor, b"null", Value::Null),
        Some(_) => parse_number(cursor),
    }
}

/// Parses `input` into `value` with the default configuration.
///
/// # Example
/// ```
/// use rigidjson::{parse, ParseError, Value, ValueType};
///
/// let mut value = Value::Null;
/// assert_eq!(parse(&mut value, " true "), Ok(()));
/// assert_eq!(value.value_type(), ValueType::True);
///
/// assert_eq!(parse(&mut value, "true false"), Err(ParseError::RootNotSingular));
/// assert!(value.is_null());
/// ```
pub fn parse(value: &mut Value, input: &str) -> Result<(), ParseError> {
    Parser::new().parse(value, input)
}

/// Parses raw bytes into `value` with the default configuration.
pub fn parse_slice(value: &mut Value, input: &[u8]) -> Result<(), ParseError> {
    Parser::new().parse_slice(value, input)
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut value = Value::Null;
        parse(&mut value, s)?;
        Ok(value)
    }
}
