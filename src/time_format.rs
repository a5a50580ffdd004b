//! Time string parsing and "M'SS" formatting
//!
//! Parsing is permissive: the text is split on every run of non-digit
//! characters, so `1:02:03`, `1.02.03` and `1h 02m 03s`-style inputs are all
//! read the same way. Tokens that do not parse count as zero.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

const SECONDS_PER_MINUTE: u32 = 60;
const SECONDS_PER_HOUR: u32 = 60 * SECONDS_PER_MINUTE;

/// Errors reported by [`parse_time_strict`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeParseError {
    /// Nothing to parse
    #[error("empty time string")]
    Empty,

    /// More than hours, minutes and seconds
    #[error("too many time components: {0} (expected at most 3)")]
    TooManyComponents(usize),

    /// A component is not a valid number
    #[error("invalid time component: '{0}'")]
    InvalidToken(String),

    /// Starts or ends with a separator, e.g. `20:`
    #[error("incomplete time: '{0}'")]
    DanglingSeparator(String),

    /// Minutes or seconds of 60 or more below a larger unit
    #[error("{unit} out of range: {value}")]
    ComponentOutOfRange { unit: &'static str, value: u32 },
}

/// Runs of non-digit characters separating time components
static SEPARATOR_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\D+").ok());

/// Split `text` on runs of non-digit characters
///
/// Leading and trailing separators are dropped, so `" 20:00 "` gives
/// `["20", "00"]` and `""` gives no tokens at all.
fn tokenize(text: &str) -> Vec<&str> {
    SEPARATOR_PATTERN
        .as_ref()
        .map(|pattern| {
            pattern
                .split(text)
                .filter(|token| !token.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn combine(hours: u32, minutes: u32, seconds: u32) -> u32 {
    hours
        .saturating_mul(SECONDS_PER_HOUR)
        .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
        .saturating_add(seconds)
}

/// Parse a time string into seconds, never failing
///
/// | tokens | meaning                 |
/// |--------|-------------------------|
/// | 3      | hours, minutes, seconds |
/// | 2      | minutes, seconds        |
/// | 1      | seconds                 |
/// | other  | 0                       |
///
/// Leading and trailing separators (including whitespace) are ignored. A token
/// too large for a `u32` counts as 0. Note that a decimal point is a
/// separator like any other: `"3:45.5"` is read as 3 h 45 min 5 s.
pub fn parse_time_string(text: &str) -> u32 {
    let values: Vec<u32> = tokenize(text)
        .into_iter()
        .map(|token| token.parse::<u32>().unwrap_or(0))
        .collect();

    match values.as_slice() {
        [hours, minutes, seconds] => combine(*hours, *minutes, *seconds),
        [minutes, seconds] => combine(0, *minutes, *seconds),
        [seconds] => *seconds,
        _ => 0,
    }
}

/// Parse a time string into seconds, reporting malformed input
///
/// Surrounding whitespace is ignored. Otherwise uses the same tokenization as
/// [`parse_time_string`] but rejects empty input, a leading or trailing
/// separator, oversized tokens, more than three components, and minutes or
/// seconds of 60 or more when a larger unit is present.
pub fn parse_time_strict(text: &str) -> Result<u32, TimeParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let dangling = |c: Option<char>| c.is_some_and(|c| !c.is_ascii_digit());
    if dangling(text.chars().next()) || dangling(text.chars().last()) {
        return Err(TimeParseError::DanglingSeparator(text.to_string()));
    }

    let tokens = tokenize(text);
    if tokens.len() > 3 {
        return Err(TimeParseError::TooManyComponents(tokens.len()));
    }

    let values = tokens
        .iter()
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| TimeParseError::InvalidToken((*token).to_string()))
        })
        .collect::<Result<Vec<u32>, _>>()?;

    let check = |unit: &'static str, value: u32| {
        if value >= 60 {
            Err(TimeParseError::ComponentOutOfRange { unit, value })
        } else {
            Ok(value)
        }
    };

    match values.as_slice() {
        [hours, minutes, seconds] => Ok(combine(
            *hours,
            check("minutes", *minutes)?,
            check("seconds", *seconds)?,
        )),
        [minutes, seconds] => Ok(combine(0, *minutes, check("seconds", *seconds)?)),
        [seconds] => Ok(*seconds),
        _ => Err(TimeParseError::Empty),
    }
}

fn minutes_and_seconds(seconds: u32) -> String {
    format!(
        "{}'{:02}",
        seconds / SECONDS_PER_MINUTE,
        seconds % SECONDS_PER_MINUTE
    )
}

/// Format a per-kilometer pace in seconds as `M'SS`
pub fn format_seconds_as_pace(seconds: u32) -> String {
    minutes_and_seconds(seconds)
}

/// Format an absolute race time in seconds as `M'SS`
///
/// Uses the pace notation, so times over an hour read as e.g. `91'49`.
pub fn format_race_time(seconds: u32) -> String {
    minutes_and_seconds(seconds)
}
