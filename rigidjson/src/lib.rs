// SPDX-License-Identifier: Apache-2.0

//! A strict parser for single JSON values.
//!
//! `rigidjson` turns text holding exactly one `null`, `true`, `false`,
//! number or string into a [`Value`], or reports precisely why the input is
//! not valid. There is no error recovery: malformed input always fails the
//! same way.
//!
//! ```
//! use rigidjson::{parse, ParseError, Value, ValueType};
//!
//! let mut value = Value::Null;
//! parse(&mut value, r#" "hello\nworld" "#)?;
//! assert_eq!(value.value_type(), ValueType::String);
//! assert_eq!(value.as_bytes(), Some(&b"hello\nworld"[..]));
//!
//! assert_eq!(parse(&mut value, "01"), Err(ParseError::InvalidValue));
//! assert!(value.is_null());
//! # Ok::<(), ParseError>(())
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod config;
pub use config::ParserConfig;

mod cursor;

mod escape_processor;

mod literal;

mod number_parser;
pub use number_parser::NumberConversion;

mod parse_error;
pub use parse_error::{status_code, InvalidUtf8, ParseError};

mod scratch_buffer;
pub use scratch_buffer::{Mark, ScratchBuffer, DEFAULT_INITIAL_CAPACITY};

mod string_decoder;

mod value;
pub use value::{Value, ValueType};

mod value_parser;
pub use value_parser::{parse, parse_slice, Parser};
