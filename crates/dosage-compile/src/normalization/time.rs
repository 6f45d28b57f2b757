//! Clock time normalization and time specifier classification.

use dosage_model::{NamedSlot, TimeSpecifier};

/// Normalize a clock time to `HH:MM:SS`.
///
/// A 5-character `HH:MM` gains `:00`; anything else passes through unchanged.
/// Callers supply `HH:MM` or `HH:MM:SS`.
pub fn normalize_clock_time(time: &str) -> String {
    if time.len() == 5 {
        format!("{time}:00")
    } else {
        time.to_string()
    }
}

/// Classify a raw time specifier by shape.
///
/// A value containing a colon is a clock time (normalized); anything else
/// must be a slot code or slot name. Returns the slot parse error otherwise.
pub fn parse_time_specifier(raw: &str) -> Result<TimeSpecifier, String> {
    if raw.contains(':') {
        return Ok(TimeSpecifier::Clock(normalize_clock_time(raw)));
    }
    raw.parse::<NamedSlot>().map(TimeSpecifier::Slot)
}
