// Parses a handful of inputs and prints the outcome of each

use rigidjson::{parse, status_code, Value, ValueType};

fn describe(value: &Value) -> String {
    match value.value_type() {
        ValueType::Number => format!("Number: {}", value.as_number().unwrap_or_default()),
        ValueType::String => match value.as_str() {
            Some(Ok(s)) => format!("String: {:?}", s),
            _ => format!("String ({} bytes, not UTF-8)", value.string_len().unwrap_or(0)),
        },
        other => format!("{:?}", other),
    }
}

fn main() {
    let inputs = [
        "null",
        "  true  ",
        "-0",
        "6.02e23",
        r#""tab\tand\nnewline""#,
        "",
        "0123",
        "1e309",
        r#""unterminated"#,
        r#""\x""#,
        "true false",
    ];

    for input in inputs {
        let mut value = Value::Null;
        let result = parse(&mut value, input);
        match &result {
            Ok(()) => println!("{:<24} -> {}", format!("{:?}", input), describe(&value)),
            Err(e) => println!(
                "{:<24} -> error {} ({})",
                format!("{:?}", input),
                status_code(&result),
                e
            ),
        }
    }
}
