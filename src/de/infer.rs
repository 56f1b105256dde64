//! Lexical type inference for raw parameter text.
//!
//! Inference runs as an ordered predicate chain: boolean literal first, then
//! the loose numeric test, then string. It operates on the raw (still
//! percent-encoded) text; only the string arm decodes.

use std::str::Utf8Error;

use super::decode;
use crate::config::Config;
use crate::value::Value;

pub(crate) fn infer(raw: Option<&str>, config: Config) -> Result<Value, Utf8Error> {
    let Some(raw) = raw else {
        // a pair without `=` has no value at all
        return Ok(Value::Undefined);
    };

    // boolean literal: exact, case-sensitive, whole-string
    match raw {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }

    if is_numeric(raw) {
        return Ok(numeric(raw));
    }

    decode::decode(raw, config.space_as_plus).map(Value::String)
}

/// The loose numeric test: after trimming ASCII whitespace the text is empty
/// (it coerces to zero) or parses wholly as a finite `f64`. `NaN` and
/// infinite forms fail the test and stay strings.
fn is_numeric(raw: &str) -> bool {
    let trimmed = raw.trim_ascii();
    if trimmed.is_empty() {
        return true;
    }
    matches!(trimmed.parse::<f64>(), Ok(n) if n.is_finite())
}

fn numeric(raw: &str) -> Value {
    let trimmed = raw.trim_ascii();
    if raw.contains('.') {
        // the numeric test already accepted the whole text
        match trimmed.parse::<f64>() {
            Ok(f) => Value::Float(f),
            Err(_) => Value::Undefined,
        }
    } else {
        integer(trimmed)
    }
}

/// Integer production: optional sign, then the longest leading digit run.
/// No digits coerces to nothing at all; a run overflowing `i64` degrades to
/// a float approximation.
fn integer(trimmed: &str) -> Value {
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let len = rest
        .as_bytes()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if len == 0 {
        return Value::Undefined;
    }

    let run = &rest[..len];
    match run.parse::<i64>() {
        Ok(n) => Value::Int(if negative { -n } else { n }),
        Err(_) => match run.parse::<f64>() {
            Ok(f) => Value::Float(if negative { -f } else { f }),
            Err(_) => Value::Undefined,
        },
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::infer;
    use crate::config::Config;
    use crate::value::Value;

    fn infer_default(raw: &str) -> Value {
        infer(Some(raw), Config::new()).unwrap()
    }

    #[test]
    fn boolean_literals() {
        assert_eq!(infer_default("true"), Value::Bool(true));
        assert_eq!(infer_default("false"), Value::Bool(false));
        // whole-string and case-sensitive only
        assert_eq!(infer_default("True"), Value::String("True".to_owned()));
        assert_eq!(infer_default("truex"), Value::String("truex".to_owned()));
    }

    #[test]
    fn integers() {
        assert_eq!(infer_default("12"), Value::Int(12));
        assert_eq!(infer_default("-5"), Value::Int(-5));
        assert_eq!(infer_default("+7"), Value::Int(7));
        assert_eq!(infer_default(" 12 "), Value::Int(12));
    }

    #[test]
    fn integer_takes_leading_digit_run() {
        // `1e3` passes the numeric test but has no `.`, so only the digits
        // before the exponent survive
        assert_eq!(infer_default("1e3"), Value::Int(1));
        assert_eq!(infer_default("2e-4"), Value::Int(2));
    }

    #[test]
    fn integer_overflow_degrades_to_float() {
        assert_eq!(
            infer_default("9223372036854775808"),
            Value::Float(9223372036854775808.0)
        );
    }

    #[test]
    fn floats() {
        assert_eq!(infer_default("3.14"), Value::Float(3.14));
        assert_eq!(infer_default("-0.5"), Value::Float(-0.5));
        assert_eq!(infer_default(".5"), Value::Float(0.5));
        assert_eq!(infer_default("5."), Value::Float(5.0));
        assert_eq!(infer_default("0.1e2"), Value::Float(10.0));
    }

    #[test]
    fn empty_coerces_to_nothing() {
        // "" passes the loose numeric test but produces no digits
        assert_eq!(infer_default(""), Value::Undefined);
        assert_eq!(infer_default("   "), Value::Undefined);
        assert_eq!(infer(None, Config::new()).unwrap(), Value::Undefined);
    }

    #[test]
    fn non_numeric_text_stays_string() {
        assert_eq!(infer_default("hello"), Value::String("hello".to_owned()));
        assert_eq!(infer_default("NaN"), Value::String("NaN".to_owned()));
        assert_eq!(infer_default("inf"), Value::String("inf".to_owned()));
        assert_eq!(infer_default("0x10"), Value::String("0x10".to_owned()));
        assert_eq!(infer_default("12abc"), Value::String("12abc".to_owned()));
    }

    #[test]
    fn string_arm_percent_decodes() {
        assert_eq!(
            infer_default("hello%20world"),
            Value::String("hello world".to_owned())
        );
        // text that only becomes numeric after decoding stays a string
        assert_eq!(infer_default("%32"), Value::String("2".to_owned()));
    }
}
