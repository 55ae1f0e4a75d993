// ── Sensor value coercion ──
//
// Raw inputs arrive as text and are coerced, numbers first, into one of
// the three shapes the platform accepts. The precedence is load-bearing:
// a numeric-looking Base64 string like "1234" is a number, never an
// opaque string.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;

use crate::error::Error;

/// A typed sensor value, produced from raw text and consumed by a single
/// write.
///
/// Serializes untagged: `true`, `3.14`, `"c2Vuc29y"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SensorValue {
    Boolean(bool),
    Number(f64),
    /// A Base64 payload, stored exactly as received -- never decoded here.
    Opaque(String),
}

impl SensorValue {
    /// Coerce raw text into a sensor value.
    ///
    /// 1. A leading decimal float literal (optional sign, fraction,
    ///    exponent) parses as a number and any trailing text is ignored:
    ///    `"3.14abc"` is `3.14`. Hex, `inf` and `NaN` spellings are not
    ///    recognized, and literals outside the finite `f64` range do not
    ///    count as numeric.
    /// 2. Exactly `"true"` or `"false"` (case-sensitive) is a boolean.
    ///    Other case variants of the keywords are rejected outright --
    ///    `"TRUE"` happens to be well-formed Base64, and a mistyped
    ///    boolean shipped as opaque payload is a silent corruption.
    /// 3. Canonically padded Base64 text stays opaque, un-decoded.
    ///
    /// Anything else fails with [`Error::UnsupportedValue`].
    pub fn parse(text: &str) -> Result<Self, Error> {
        if let Some(number) = parse_float_prefix(text) {
            return Ok(Self::Number(number));
        }

        match text {
            "true" => return Ok(Self::Boolean(true)),
            "false" => return Ok(Self::Boolean(false)),
            _ => {}
        }
        if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
            return Err(Error::UnsupportedValue {
                input: text.to_owned(),
            });
        }

        if STANDARD.decode(text).is_ok() {
            return Ok(Self::Opaque(text.to_owned()));
        }

        Err(Error::UnsupportedValue {
            input: text.to_owned(),
        })
    }

    /// The wire representation attached to a `set_data` update.
    pub(crate) fn into_json(self) -> serde_json::Value {
        match self {
            Self::Boolean(flag) => serde_json::Value::Bool(flag),
            // `parse` only produces finite numbers, so `from_f64` cannot
            // decline; `Null` is the unreachable fallback.
            Self::Number(number) => serde_json::Number::from_f64(number)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Self::Opaque(text) => serde_json::Value::String(text),
        }
    }
}

/// Longest leading decimal float literal, if any.
///
/// Grammar: `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`.
/// An exponent marker without digits after it is not part of the literal
/// ("1e" parses as 1).
fn parse_float_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_leading_numeric_prefix() {
        assert_eq!(SensorValue::parse("42").unwrap(), SensorValue::Number(42.0));
        assert_eq!(SensorValue::parse("-7.5").unwrap(), SensorValue::Number(-7.5));
        assert_eq!(SensorValue::parse(".5").unwrap(), SensorValue::Number(0.5));
        assert_eq!(SensorValue::parse("1e3").unwrap(), SensorValue::Number(1000.0));
        assert_eq!(SensorValue::parse("3.14abc").unwrap(), SensorValue::Number(3.14));
        // A dangling exponent marker is trailing text, not a literal.
        assert_eq!(SensorValue::parse("1e").unwrap(), SensorValue::Number(1.0));
    }

    #[test]
    fn numbers_take_precedence_over_base64() {
        // "1234" is valid Base64, but the numeric rule runs first.
        assert_eq!(SensorValue::parse("1234").unwrap(), SensorValue::Number(1234.0));
    }

    #[test]
    fn booleans_are_case_sensitive() {
        assert_eq!(SensorValue::parse("true").unwrap(), SensorValue::Boolean(true));
        assert_eq!(SensorValue::parse("false").unwrap(), SensorValue::Boolean(false));
        // "TRUE" is well-formed Base64, but a mistyped boolean is rejected,
        // not smuggled through as opaque payload.
        for input in ["TRUE", "True", "FALSE", "False"] {
            assert!(
                matches!(SensorValue::parse(input), Err(Error::UnsupportedValue { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn base64_text_stays_opaque_and_unchanged() {
        assert_eq!(
            SensorValue::parse("c2Vuc29y").unwrap(),
            SensorValue::Opaque("c2Vuc29y".into())
        );
    }

    #[test]
    fn unsupported_inputs_are_rejected() {
        for input in ["not-base64-@@@", "trueish", "yes", "+", "."] {
            assert!(
                matches!(SensorValue::parse(input), Err(Error::UnsupportedValue { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_input_is_zero_length_base64() {
        assert_eq!(SensorValue::parse("").unwrap(), SensorValue::Opaque(String::new()));
    }

    #[test]
    fn overflowing_literals_are_not_numeric() {
        // "1e999" overflows f64; it is not numeric and not valid Base64.
        assert!(matches!(
            SensorValue::parse("1e999"),
            Err(Error::UnsupportedValue { .. })
        ));
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_value(SensorValue::Boolean(true)).unwrap(), json!(true));
        assert_eq!(serde_json::to_value(SensorValue::Number(21.5)).unwrap(), json!(21.5));
        assert_eq!(
            serde_json::to_value(SensorValue::Opaque("c2Vuc29y".into())).unwrap(),
            json!("c2Vuc29y")
        );
    }

    #[test]
    fn into_json_matches_serialization() {
        assert_eq!(SensorValue::Number(42.0).into_json(), json!(42.0));
        assert_eq!(SensorValue::Boolean(false).into_json(), json!(false));
        assert_eq!(SensorValue::Opaque("YQ==".into()).into_json(), json!("YQ=="));
    }
}
