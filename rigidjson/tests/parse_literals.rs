// Literal and whitespace handling through the public API

use rigidjson::{parse, ParseError, Value, ValueType};

fn parse_type(input: &str) -> Result<ValueType, ParseError> {
    let mut value = Value::Null;
    parse(&mut value, input)?;
    Ok(value.value_type())
}

macro_rules! generate_literal_tests {
    ($($name:ident: $input:expr => $expected:expr),* $(,)?) => {
        $(
            paste::paste! {
                #[test]
                fn [<test_literal_ $name>]() {
                    assert_eq!(parse_type($input), Ok($expected), "input: {:?}", $input);
                }
            }
        )*
    };
}

generate_literal_tests!(
    keyword_null: "null" => ValueType::Null,
    keyword_true: "true" => ValueType::True,
    keyword_false: "false" => ValueType::False,
    null_padded: "  null  " => ValueType::Null,
    true_tabs: "\ttrue\t" => ValueType::True,
    false_newlines: "\r\nfalse\n\r" => ValueType::False,
);

#[test]
fn test_expect_value_for_blank_input() {
    for input in ["", " ", "\t", "\n", "\r", " \t\n\r "] {
        assert_eq!(parse_type(input), Err(ParseError::ExpectValue), "input: {:?}", input);
    }
}

#[test]
fn test_invalid_literals() {
    for input in ["nul", "nulL", "ture", "fals", "t", "f", "n", "True", "NULL", "?", "+0"] {
        assert_eq!(parse_type(input), Err(ParseError::InvalidValue), "input: {:?}", input);
    }
}

#[test]
fn test_literal_with_trailing_content() {
    assert_eq!(parse_type("true false"), Err(ParseError::RootNotSingular));
    assert_eq!(parse_type("nullx"), Err(ParseError::RootNotSingular));
    assert_eq!(parse_type("falsetrue"), Err(ParseError::RootNotSingular));
    assert_eq!(parse_type("null \x0c"), Err(ParseError::RootNotSingular));
}

#[test]
fn test_as_bool() {
    let mut value = Value::Null;
    parse(&mut value, "true").unwrap();
    assert_eq!(value.as_bool(), Some(true));
    parse(&mut value, "false").unwrap();
    assert_eq!(value.as_bool(), Some(false));
    parse(&mut value, "null").unwrap();
    assert_eq!(value.as_bool(), None);
}
