//! Lenient value coercions applied to dashboard submissions.
//!
//! Dashboard forms post whatever their inputs hold: counters may arrive as
//! numbers or as strings, route lists may be empty. These helpers give every
//! JSON value a single, predictable interpretation, following the rules a
//! browser client applies (`parseInt(value, 10)`, truthiness, `String(value)`).

use serde_json::{Number, Value};

/// Placeholder stored for route lists that were left blank.
pub const NOT_AVAILABLE: &str = "N/A";

/// Largest integer an `f64` holds exactly.
const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Whether a JSON value counts as "filled in".
///
/// `null`, `false`, `0` and `""` are falsy. Everything else, including empty
/// arrays and objects, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a number the way a browser prints it.
///
/// Digits are the shortest ones that round-trip through an `f64`: integral
/// floats lose their fractional part (`1.0` → `"1"`), and integers past 2^53
/// print rounded (`18446744073709551615` → `"18446744073709552000"`). Very
/// large or very small magnitudes use exponent notation with an explicit
/// sign (`1e21` → `"1e+21"`, `1e-7` → `"1e-7"`).
#[must_use]
pub fn number_text(number: &Number) -> String {
    if number.as_u64().is_some_and(|n| n <= MAX_SAFE_INTEGER)
        || number
            .as_i64()
            .is_some_and(|n| n.unsigned_abs() <= MAX_SAFE_INTEGER)
    {
        return number.to_string();
    }
    let Some(float) = number.as_f64() else {
        return number.to_string();
    };
    if float == 0.0 {
        return "0".to_string();
    }
    let magnitude = float.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{float:e}");
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    format!("{float}")
}

/// Text form of a value as used by `parseInt`.
fn parse_source(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => parse_source(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Parse a base-10 integer prefix out of a JSON value.
///
/// Leading whitespace is skipped, an optional sign is honoured and the longest
/// run of ASCII digits is read; trailing garbage is ignored (`"12abc"` → 12,
/// `5.7` → 5). Returns `None` when no digit is found or the result does not
/// fit in an `i64`.
#[must_use]
pub fn parse_int(value: &Value) -> Option<i64> {
    let source = parse_source(value);
    let trimmed = source.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    if negative {
        format!("-{digits}").parse().ok()
    } else {
        digits.parse().ok()
    }
}

/// Text form of a truthy, caller-supplied value.
fn plain_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Route list text: blank or missing lists become [`NOT_AVAILABLE`].
#[must_use]
pub fn route_text(value: Option<&Value>) -> String {
    match value {
        Some(value) if is_truthy(value) => plain_text(value),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Date text: stored verbatim, never interpreted.
#[must_use]
pub fn date_text(value: &Value) -> String {
    plain_text(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn should_treat_zero_empty_null_and_false_as_falsy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
    }

    #[test]
    fn should_treat_containers_and_non_zero_as_truthy() {
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!(true)));
    }

    #[test]
    fn should_parse_numbers_and_numeric_strings() {
        assert_eq!(parse_int(&json!(5)), Some(5));
        assert_eq!(parse_int(&json!(0)), Some(0));
        assert_eq!(parse_int(&json!(-3)), Some(-3));
        assert_eq!(parse_int(&json!("42")), Some(42));
        assert_eq!(parse_int(&json!("  +7")), Some(7));
    }

    #[test]
    fn should_truncate_at_first_non_digit() {
        assert_eq!(parse_int(&json!(5.7)), Some(5));
        assert_eq!(parse_int(&json!(-5.7)), Some(-5));
        assert_eq!(parse_int(&json!("12abc")), Some(12));
        assert_eq!(parse_int(&json!("3.99")), Some(3));
        assert_eq!(parse_int(&json!(1e21)), Some(1));
        assert_eq!(parse_int(&json!(0.000_000_15)), Some(1));
    }

    #[test]
    fn should_return_none_when_no_digits_present() {
        assert_eq!(parse_int(&json!("abc")), None);
        assert_eq!(parse_int(&json!("")), None);
        assert_eq!(parse_int(&json!("-")), None);
        assert_eq!(parse_int(&json!(true)), None);
        assert_eq!(parse_int(&json!({"a": 1})), None);
        assert_eq!(parse_int(&json!([])), None);
    }

    #[test]
    fn should_parse_first_array_element() {
        assert_eq!(parse_int(&json!([8])), Some(8));
        assert_eq!(parse_int(&json!(["4", 9])), Some(4));
    }

    #[test]
    fn should_return_none_when_out_of_range() {
        assert_eq!(parse_int(&json!("99999999999999999999")), None);
    }

    #[test]
    fn should_render_numbers_like_a_browser() {
        assert_eq!(number_text(&Number::from(12)), "12");
        assert_eq!(number_text(&Number::from_f64(1.0).unwrap()), "1");
        assert_eq!(number_text(&Number::from_f64(1.5).unwrap()), "1.5");
        assert_eq!(number_text(&Number::from_f64(-0.0).unwrap()), "0");
        assert_eq!(number_text(&Number::from_f64(1e21).unwrap()), "1e+21");
        assert_eq!(number_text(&Number::from_f64(1e-7).unwrap()), "1e-7");
    }

    #[test]
    fn should_render_integral_float_beyond_exact_range_with_shortest_digits() {
        let number: Number = serde_json::from_str("123456789012345680000").unwrap();
        assert_eq!(number_text(&number), "123456789012345680000");
        assert_eq!(number_text(&Number::from_f64(1e20).unwrap()), "100000000000000000000");
        assert_eq!(number_text(&Number::from(u64::MAX)), "18446744073709552000");
        assert_eq!(number_text(&Number::from(9_007_199_254_740_991_u64)), "9007199254740991");
    }

    #[test]
    fn should_default_blank_routes_to_not_available() {
        assert_eq!(route_text(None), "N/A");
        assert_eq!(route_text(Some(&json!(null))), "N/A");
        assert_eq!(route_text(Some(&json!(""))), "N/A");
        assert_eq!(route_text(Some(&json!(0))), "N/A");
    }

    #[test]
    fn should_keep_filled_routes_verbatim() {
        assert_eq!(route_text(Some(&json!("R1, R2"))), "R1, R2");
        assert_eq!(route_text(Some(&json!(17))), "17");
        assert_eq!(route_text(Some(&json!(["R1"]))), r#"["R1"]"#);
    }

    #[test]
    fn should_keep_date_text_verbatim() {
        assert_eq!(date_text(&json!("2024-01-01")), "2024-01-01");
        assert_eq!(date_text(&json!(20_240_101)), "20240101");
    }
}
