//! Literal renderers: one primitive value in, its EDN text appended.
//!
//! These never look at shapes or the cache. Only the float writers can fail,
//! because EDN has no literal for `NaN` or the infinities.

use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;

pub(crate) const NIL: &str = "nil";

#[inline]
pub(crate) fn write_bool(out: &mut String, v: bool) {
    out.push_str(if v { "true" } else { "false" });
}

#[inline]
pub(crate) fn write_signed(out: &mut String, v: i128) {
    out.push_str(&v.to_string());
}

#[inline]
pub(crate) fn write_unsigned(out: &mut String, v: u128) {
    out.push_str(&v.to_string());
}

pub(crate) fn write_bigint(out: &mut String, v: &BigInt) {
    out.push_str(&v.to_string());
    out.push('N');
}

pub(crate) fn write_f64(out: &mut String, v: f64) -> Result<()> {
    if !v.is_finite() {
        return Err(Error::unsupported_value(v));
    }
    write_general(out, v.is_sign_negative(), &format!("{:e}", v.abs()));
    Ok(())
}

pub(crate) fn write_f32(out: &mut String, v: f32) -> Result<()> {
    if !v.is_finite() {
        return Err(Error::unsupported_value(v));
    }
    write_general(out, v.is_sign_negative(), &format!("{:e}", v.abs()));
    Ok(())
}

/// Widens `v` through its shortest decimal text, so the widened value renders
/// with the same digits as `v` (`3.14f32` stays `3.14`, not `3.140000104904175`).
pub(crate) fn widen_f32(v: f32) -> f64 {
    v.to_string().parse().unwrap_or_else(|_| f64::from(v))
}

/// Lays out the shortest round-trip digits of `scientific` (as produced by
/// `{:e}`) in `%g` style: exponent form below 1e-4 and from 1e6 up.
fn write_general(out: &mut String, negative: bool, scientific: &str) {
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific, "0"));
    let exp: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if negative {
        out.push('-');
    }
    if !(-4..6).contains(&exp) {
        out.push_str(mantissa);
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        let magnitude = exp.unsigned_abs();
        if magnitude < 10 {
            out.push('0');
        }
        out.push_str(&magnitude.to_string());
    } else if exp < 0 {
        out.push_str("0.");
        for _ in 1..-exp {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        let whole = exp as usize + 1;
        if digits.len() <= whole {
            out.push_str(&digits);
            for _ in digits.len()..whole {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..whole]);
            out.push('.');
            out.push_str(&digits[whole..]);
        }
    }
}

/// Quotes `s`, escaping per character so multi-byte text passes through intact.
pub(crate) fn write_string(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

pub(crate) fn write_char(out: &mut String, c: char) {
    match c {
        '\n' => out.push_str("\\newline"),
        '\r' => out.push_str("\\return"),
        ' ' => out.push_str("\\space"),
        '\t' => out.push_str("\\tab"),
        c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
        c => {
            out.push('\\');
            out.push(c);
        }
    }
}

#[inline]
pub(crate) fn write_symbol(out: &mut String, name: &str) {
    out.push_str(name);
}

#[inline]
pub(crate) fn write_keyword(out: &mut String, name: &str) {
    if !name.starts_with(':') {
        out.push(':');
    }
    out.push_str(name);
}

/// `#tag "payload"`.
pub(crate) fn write_tagged(out: &mut String, tag: &str, payload: &str) {
    out.push('#');
    out.push_str(tag);
    out.push(' ');
    write_string(out, payload);
}

pub(crate) fn write_instant(out: &mut String, t: &DateTime<Utc>) {
    write_tagged(out, "inst", &instant_text(t));
}

/// RFC 3339 in UTC with the nanosecond fraction trimmed of trailing zeros.
pub(crate) fn instant_text(t: &DateTime<Utc>) -> String {
    let mut text = t.format("%Y-%m-%dT%H:%M:%S").to_string();
    // Leap seconds report nanos past 1e9.
    let nanos = t.timestamp_subsec_nanos() % 1_000_000_000;
    if nanos != 0 {
        let fraction = format!("{:09}", nanos);
        text.push('.');
        text.push_str(fraction.trim_end_matches('0'));
    }
    text.push('Z');
    text
}

pub(crate) fn write_uuid(out: &mut String, id: &uuid::Uuid) {
    write_tagged(out, "uuid", &id.hyphenated().to_string());
}

/// Standard alphabet, padded, no line wrapping.
pub(crate) fn write_base64(out: &mut String, bytes: &[u8]) {
    out.push_str("#base64 \"");
    STANDARD.encode_string(bytes, out);
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn f64_text(v: f64) -> String {
        let mut out = String::new();
        write_f64(&mut out, v).unwrap();
        out
    }

    fn f32_text(v: f32) -> String {
        let mut out = String::new();
        write_f32(&mut out, v).unwrap();
        out
    }

    fn with<F: FnOnce(&mut String)>(f: F) -> String {
        let mut out = String::new();
        f(&mut out);
        out
    }

    #[test]
    fn test_float_layout() {
        assert_eq!(f64_text(0.1), "0.1");
        assert_eq!(f64_text(3.14), "3.14");
        assert_eq!(f64_text(-3.14), "-3.14");
        assert_eq!(f64_text(2.0), "2");
        assert_eq!(f64_text(0.0), "0");
        assert_eq!(f64_text(-0.0), "-0");
        assert_eq!(f64_text(123456.0), "123456");
        assert_eq!(f64_text(1e6), "1e+06");
        assert_eq!(f64_text(1234567.0), "1.234567e+06");
        assert_eq!(f64_text(0.0001), "0.0001");
        assert_eq!(f64_text(0.00001), "1e-05");
        assert_eq!(f64_text(3.14e250), "3.14e+250");
        assert_eq!(f64_text(3.14e-33), "3.14e-33");
        assert_eq!(f64_text(-2.5e-7), "-2.5e-07");
    }

    #[test]
    fn test_f32_uses_its_own_shortest_digits() {
        assert_eq!(f32_text(3.14), "3.14");
        assert_eq!(f32_text(0.1), "0.1");
        assert_eq!(f32_text(-1.5e10), "-1.5e+10");
    }

    #[test]
    fn test_non_finite_floats_fail() {
        let mut out = String::new();
        assert!(matches!(write_f64(&mut out, f64::NAN), Err(Error::UnsupportedValue(_))));
        assert!(matches!(
            write_f64(&mut out, f64::INFINITY),
            Err(Error::UnsupportedValue(_))
        ));
        assert!(matches!(
            write_f32(&mut out, f32::NEG_INFINITY),
            Err(Error::UnsupportedValue(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_integer_extremes() {
        assert_eq!(with(|o| write_signed(o, i64::MIN as i128)), "-9223372036854775808");
        assert_eq!(with(|o| write_unsigned(o, u64::MAX as u128)), "18446744073709551615");
        assert_eq!(with(|o| write_signed(o, 0)), "0");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(
            with(|o| write_string(o, r#"Russian for hello is "привет"."#)),
            r#""Russian for hello is \"привет\".""#
        );
        assert_eq!(with(|o| write_string(o, "a\\b")), r#""a\\b""#);
        assert_eq!(with(|o| write_string(o, "line\nnext\t")), r#""line\nnext\t""#);
        assert_eq!(with(|o| write_string(o, "bell\u{7}")), r#""bell\u0007""#);
        assert_eq!(with(|o| write_string(o, "")), r#""""#);
    }

    #[test]
    fn test_chars() {
        assert_eq!(with(|o| write_char(o, 'a')), "\\a");
        assert_eq!(with(|o| write_char(o, ' ')), "\\space");
        assert_eq!(with(|o| write_char(o, '\n')), "\\newline");
        assert_eq!(with(|o| write_char(o, 'ц')), "\\ц");
        assert_eq!(with(|o| write_char(o, '\u{0}')), "\\u0000");
    }

    #[test]
    fn test_keyword_prefix_is_not_doubled() {
        assert_eq!(with(|o| write_keyword(o, "foo/bar")), ":foo/bar");
        assert_eq!(with(|o| write_keyword(o, ":wow")), ":wow");
        assert_eq!(with(|o| write_symbol(o, "foo/bar")), "foo/bar");
    }

    #[test]
    fn test_instant_trims_fraction() {
        let t = Utc.with_ymd_and_hms(2014, 3, 14, 15, 59, 59).unwrap();
        assert_eq!(with(|o| write_instant(o, &t)), r#"#inst "2014-03-14T15:59:59Z""#);

        let t = t + chrono::Duration::nanoseconds(123_456_789);
        assert_eq!(
            with(|o| write_instant(o, &t)),
            r#"#inst "2014-03-14T15:59:59.123456789Z""#
        );

        let t = Utc.with_ymd_and_hms(2014, 3, 14, 15, 59, 59).unwrap()
            + chrono::Duration::milliseconds(500);
        assert_eq!(with(|o| write_instant(o, &t)), r#"#inst "2014-03-14T15:59:59.5Z""#);
    }

    #[test]
    fn test_uuid_and_base64() {
        let id = uuid::Uuid::parse_str("7594599c-2df6-412f-8ca0-8ef31448d923").unwrap();
        assert_eq!(
            with(|o| write_uuid(o, &id)),
            r#"#uuid "7594599c-2df6-412f-8ca0-8ef31448d923""#
        );
        assert_eq!(
            with(|o| write_base64(o, b"any + old & data")),
            r#"#base64 "YW55ICsgb2xkICYgZGF0YQ==""#
        );
        assert_eq!(with(|o| write_base64(o, b"")), r#"#base64 """#);
    }

    #[test]
    fn test_bigint_suffix() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(with(|o| write_bigint(o, &big)), "123456789012345678901234567890N");
    }
}
