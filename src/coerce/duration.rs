//! Parsing for duration literals like `"1m"` or `"500ms"`.

use core::{error, fmt};
use std::time::Duration;

/// An error produced while parsing a duration literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationParseError {
    /// The rejected literal.
    pub literal: String,
    /// What was wrong with it.
    pub message: &'static str,
}

impl fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid duration literal `{}`: {}",
            self.literal, self.message
        )
    }
}

impl error::Error for DurationParseError {}

/// Parses a duration literal.
///
/// A literal is a sequence of decimal numbers, each with an optional
/// fraction and a mandatory unit suffix: `ns`, `us` (or `µs`), `ms`, `s`,
/// `m`, `h`. Components add up, so `"2h45m"` is two hours and forty-five
/// minutes. `"0"` is accepted without a unit.
///
/// [`Duration`] is unsigned, so negative literals are rejected.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tagmap::coerce::parse_duration;
///
/// assert_eq!(parse_duration("1m").unwrap(), Duration::from_secs(60));
/// assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
/// assert_eq!(parse_duration("1.5h").unwrap(), Duration::from_secs(5400));
/// assert!(parse_duration("5").is_err());
/// ```
pub fn parse_duration(source: &str) -> Result<Duration, DurationParseError> {
    let fail = |message: &'static str| DurationParseError {
        literal: source.to_owned(),
        message,
    };

    if source.starts_with('-') {
        return Err(fail("negative durations are not supported"));
    }
    let mut rest = source.strip_prefix('+').unwrap_or(source);
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(fail("empty literal"));
    }

    let mut nanos = 0_f64;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        if number_len == 0 {
            return Err(fail("expected a number"));
        }
        let value: f64 = rest[..number_len]
            .parse()
            .map_err(|_| fail("malformed number"))?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = match &rest[..unit_len] {
            "ns" => 1.0,
            "us" | "µs" | "μs" => 1e3,
            "ms" => 1e6,
            "s" => 1e9,
            "m" => 60.0 * 1e9,
            "h" => 3_600.0 * 1e9,
            "" => return Err(fail("missing unit")),
            _ => return Err(fail("unknown unit")),
        };
        rest = &rest[unit_len..];
        nanos += value * scale;
    }

    if !nanos.is_finite() || nanos > u64::MAX as f64 {
        return Err(fail("duration out of range"));
    }
    Ok(Duration::from_nanos(nanos.round() as u64))
}
