//! Toast options and their coercion rules.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::ToastError;

/// Dismiss delay used when no usable duration is supplied.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(3000);

/// Screen edge a toast is anchored to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum ToastPosition {
    /// Anchored to the top edge.
    Top,
    /// Anchored to the bottom edge.
    #[default]
    Bottom,
}

impl ToastPosition {
    /// Parses a position case-insensitively. Unknown values fall back to `Bottom`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("top") {
            Self::Top
        } else {
            Self::Bottom
        }
    }

    /// Returns the lower-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

impl From<String> for ToastPosition {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for ToastPosition {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied toast configuration.
///
/// Every field is optional. Resolution into concrete values happens through
/// [`ToastOptions::resolved_duration`] and [`ToastOptions::resolved_position`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastOptions {
    /// Text to display.
    pub content: Option<String>,
    /// Dismiss delay in milliseconds, possibly NaN after coercion.
    pub duration: Option<f64>,
    /// Raw position value.
    pub position: Option<String>,
}

impl ToastOptions {
    /// Creates options with the given content and defaults elsewhere.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Sets the dismiss delay in milliseconds.
    #[must_use]
    pub fn with_duration_ms(mut self, millis: f64) -> Self {
        self.duration = Some(millis);
        self
    }

    /// Sets the raw position value.
    #[must_use]
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Builds options from loosely typed input.
    ///
    /// # Errors
    /// Returns [`ToastError::InvalidOptions`] if `value` is not an object.
    pub fn from_value(value: &Value) -> Result<Self, ToastError> {
        let Value::Object(map) = value else {
            return Err(ToastError::InvalidOptions);
        };

        Ok(Self {
            content: map.get("content").and_then(coerce_content),
            duration: map.get("duration").and_then(coerce_duration),
            position: map
                .get("position")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_owned),
        })
    }

    /// Returns the content if it is non-empty.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref().filter(|c| !c.is_empty())
    }

    /// Resolves the dismiss delay.
    ///
    /// Missing, NaN, and infinite values resolve to [`DEFAULT_DURATION`];
    /// negative values clamp to zero and values too large for a `Duration`
    /// saturate to `Duration::MAX`.
    #[must_use]
    pub fn resolved_duration(&self) -> Duration {
        match self.duration {
            Some(ms) if ms.is_finite() => {
                Duration::try_from_secs_f64(ms.max(0.0) / 1000.0).unwrap_or(Duration::MAX)
            }
            _ => DEFAULT_DURATION,
        }
    }

    /// Resolves the position, defaulting to bottom.
    #[must_use]
    pub fn resolved_position(&self) -> ToastPosition {
        self.position
            .as_deref()
            .map_or(ToastPosition::Bottom, ToastPosition::parse)
    }
}

fn coerce_content(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|v| v != 0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_duration(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| *v != 0.0),
        Value::String(s) if !s.is_empty() => Some(parse_float_prefix(s)),
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => Some(f64::NAN),
        _ => None,
    }
}

/// Parses the longest leading decimal literal of `input`, NaN if there is none.
fn parse_float_prefix(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let mut frac_end = end + 1;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - end - 1;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}
