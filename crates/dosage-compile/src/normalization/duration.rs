//! Duration bounds.
//!
//! A schedule may be capped at a number of days, weeks, months or years:
//!
//! | unit | label     |
//! |------|-----------|
//! | d    | day(s)    |
//! | wk   | week(s)   |
//! | mo   | month(s)  |
//! | a    | year(s)   |
//!
//! Duration is best-effort input. Anything that does not form a bound
//! (missing or non-positive value, missing or unrecognized unit) yields no
//! bound rather than an error.

use dosage_model::{DurationBound, UnitOfTime};

use crate::types::DurationInput;

/// Build a duration bound from raw input, or `None` when the input does not
/// describe one.
pub fn duration_bound(input: &DurationInput) -> Option<DurationBound> {
    bound_from_parts(input.value, input.unit.as_deref())
}

/// Build a duration bound from a raw value and unit code.
pub fn bound_from_parts(value: Option<i64>, unit: Option<&str>) -> Option<DurationBound> {
    let value = value?;
    let unit = unit?;

    let Ok(value) = u32::try_from(value) else {
        tracing::debug!(value, "Duration value out of range, no bound emitted");
        return None;
    };

    let Ok(unit_of_time) = unit.parse::<UnitOfTime>() else {
        tracing::warn!(unit = %unit, "Unrecognized duration unit, no bound emitted");
        return None;
    };

    let bound = DurationBound::new(value, unit_of_time);
    if bound.is_none() {
        tracing::debug!(value, unit = %unit, "Duration does not form a bound");
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_calendar_units() {
        for (code, label) in [
            ("d", "day(s)"),
            ("wk", "week(s)"),
            ("mo", "month(s)"),
            ("a", "year(s)"),
        ] {
            let bound = bound_from_parts(Some(3), Some(code)).unwrap();
            assert_eq!(bound.value(), 3);
            assert_eq!(bound.unit().as_code(), code);
            assert_eq!(bound.label(), label);
        }
    }

    #[test]
    fn test_missing_parts() {
        assert_eq!(bound_from_parts(None, Some("d")), None);
        assert_eq!(bound_from_parts(Some(5), None), None);
        assert_eq!(bound_from_parts(None, None), None);
    }

    #[test]
    fn test_non_positive_values() {
        assert_eq!(bound_from_parts(Some(0), Some("d")), None);
        assert_eq!(bound_from_parts(Some(-2), Some("wk")), None);
    }

    #[test]
    fn test_unrecognized_units() {
        assert_eq!(bound_from_parts(Some(5), Some("days")), None);
        assert_eq!(bound_from_parts(Some(5), Some("h")), None);
        assert_eq!(bound_from_parts(Some(5), Some("")), None);
    }

    #[test]
    fn test_duration_input() {
        let input = DurationInput::new(Some(10), Some("d"));
        let bound = duration_bound(&input).unwrap();
        assert_eq!(bound.value(), 10);
        assert_eq!(bound.label(), "day(s)");
        assert_eq!(duration_bound(&DurationInput::none()), None);
    }
}
