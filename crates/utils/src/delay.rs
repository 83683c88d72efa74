// ABOUTME: Delay string parsing for human-authored durations like "10 min" or "1.5s".
// ABOUTME: Converts a magnitude plus an optional unit synonym into milliseconds.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::DelayError;

/// Leading magnitude, optional whitespace, then whatever is left as the unit token.
static DELAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?P<magnitude>[0-9]+(?:\.[0-9]+)?|\.[0-9]+)\s*(?P<unit>.*)$").unwrap()
});

/// Fraction digits beyond this are ignored; they cannot move the result by a millisecond.
const MAX_FRACTION_DIGITS: usize = 18;

/// A canonical time unit accepted by [`parse_delay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
}

struct UnitSpec {
    unit: Unit,
    name: &'static str,
    tokens: &'static [&'static str],
    millis: u64,
}

// Ordered like the `Unit` variants. There is deliberately no bare "m":
// it would be ambiguous between minutes and milliseconds.
const UNIT_TABLE: &[UnitSpec] = &[
    UnitSpec {
        unit: Unit::Millisecond,
        name: "millisecond",
        tokens: &["ms", "millisecond", "milliseconds"],
        millis: 1,
    },
    UnitSpec {
        unit: Unit::Second,
        name: "second",
        tokens: &["s", "sec", "secs", "second", "seconds"],
        millis: 1_000,
    },
    UnitSpec {
        unit: Unit::Minute,
        name: "minute",
        tokens: &["min", "mins", "minute", "minutes"],
        millis: 60 * 1_000,
    },
    UnitSpec {
        unit: Unit::Hour,
        name: "hour",
        tokens: &["h", "hr", "hour", "hours"],
        millis: 60 * 60 * 1_000,
    },
    UnitSpec {
        unit: Unit::Day,
        name: "day",
        tokens: &["d", "day", "days"],
        millis: 24 * 60 * 60 * 1_000,
    },
];

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Unit; 5] = [
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
    ];

    fn spec(self) -> &'static UnitSpec {
        &UNIT_TABLE[self as usize]
    }

    /// Number of milliseconds in one of this unit.
    pub fn millis(self) -> u64 {
        self.spec().millis
    }

    /// Accepted spellings, lowercase.
    pub fn tokens(self) -> &'static [&'static str] {
        self.spec().tokens
    }

    /// Looks up a unit by exact, case-insensitive token.
    pub fn from_token(token: &str) -> Option<Unit> {
        UNIT_TABLE
            .iter()
            .find(|spec| spec.tokens.iter().any(|t| t.eq_ignore_ascii_case(token)))
            .map(|spec| spec.unit)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec().name)
    }
}

impl FromStr for Unit {
    type Err = DelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_token(s.trim())
            .ok_or_else(|| DelayError::invalid_format(s, format!("unknown unit {:?}", s.trim())))
    }
}

/// Parses a delay string into milliseconds.
///
/// The input is a non-negative integer or decimal magnitude followed by an
/// optional unit, e.g. `"600"`, `"10ms"`, `"10 min"`, `"1.5 hours"`. Without
/// a unit the magnitude is already milliseconds. Fractional milliseconds are
/// truncated.
pub fn parse_delay(input: &str) -> Result<u64, DelayError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(reject(input, "empty input".to_string()));
    }

    let caps = match DELAY_RE.captures(trimmed) {
        Some(caps) => caps,
        None => return Err(reject(input, "missing numeric magnitude".to_string())),
    };
    let magnitude = &caps["magnitude"];
    let token = &caps["unit"];

    let unit = if token.is_empty() {
        Unit::Millisecond
    } else {
        match Unit::from_token(token) {
            Some(unit) => unit,
            None => return Err(reject(input, format!("unknown unit {:?}", token))),
        }
    };

    match scale(magnitude, unit.millis()) {
        Some(ms) => {
            log::trace!("parsed delay {:?} as {} {} = {}ms", input, magnitude, unit, ms);
            Ok(ms)
        }
        None => {
            log::debug!("rejecting delay {:?}: out of range", input);
            Err(DelayError::out_of_range(input))
        }
    }
}

/// Like [`parse_delay`], returning a [`Duration`].
pub fn parse_delay_duration(input: &str) -> Result<Duration, DelayError> {
    parse_delay(input).map(Duration::from_millis)
}

fn reject(input: &str, reason: String) -> DelayError {
    log::debug!("rejecting delay {:?}: {}", input, reason);
    DelayError::invalid_format(input, reason)
}

/// Multiplies a decimal magnitude by `multiplier` in integer arithmetic.
/// Returns None if the result does not fit in u64.
fn scale(magnitude: &str, multiplier: u64) -> Option<u64> {
    let (whole, fraction) = magnitude.split_once('.').unwrap_or((magnitude, ""));

    let whole = whole.trim_start_matches('0');
    let whole: u128 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut total = whole.checked_mul(u128::from(multiplier))?;

    let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
    if !fraction.is_empty() {
        let numerator: u128 = fraction.parse().ok()?;
        let denominator = 10u128.pow(fraction.len() as u32);
        total = total.checked_add(numerator * u128::from(multiplier) / denominator)?;
    }

    u64::try_from(total).ok()
}
