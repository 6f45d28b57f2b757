//! Typed compiler inputs.
//!
//! One input type per schema, plus the [`Dose`] and [`DurationInput`] values
//! they share. All types deserialize from the request JSON accepted by
//! [`crate::ScheduleRequest`].

use serde::{Deserialize, Serialize};

use dosage_model::{NamedSlot, UnitOfTime, Weekday};

/// Dose magnitude plus optional unit code.
///
/// Equality is exact: `1.0` and `1.0000001` are different doses, and a dose
/// without a unit code never equals one with a code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "DoseRepr")]
pub struct Dose {
    pub value: f64,
    #[serde(rename = "unit")]
    pub unit_code: Option<String>,
}

impl Dose {
    pub fn new(value: f64, unit_code: Option<&str>) -> Self {
        Self {
            value,
            unit_code: unit_code.map(str::to_string),
        }
    }

    /// Dose without a unit code.
    pub fn bare(value: f64) -> Self {
        Self {
            value,
            unit_code: None,
        }
    }

    /// Fill in `unit_code` when none was given.
    pub fn fill_unit(&mut self, code: &str) {
        if self.unit_code.is_none() {
            self.unit_code = Some(code.to_string());
        }
    }
}

/// A dose is written either as a bare number or as `{ "value", "unit" }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum DoseRepr {
    Bare(f64),
    Full {
        value: f64,
        #[serde(default)]
        unit: Option<String>,
    },
}

impl From<DoseRepr> for Dose {
    fn from(repr: DoseRepr) -> Self {
        match repr {
            DoseRepr::Bare(value) => Dose::bare(value),
            DoseRepr::Full { value, unit } => Dose {
                value,
                unit_code: unit,
            },
        }
    }
}

/// Raw duration as entered: both parts optional, unit not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationInput {
    #[serde(default)]
    pub value: Option<i64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl DurationInput {
    pub fn new(value: Option<i64>, unit: Option<&str>) -> Self {
        Self {
            value,
            unit: unit.map(str::to_string),
        }
    }

    /// No duration given.
    pub fn none() -> Self {
        Self::default()
    }
}

/// Doses for the four daily slots (morning, noon, evening, night).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamedSlotsInput {
    pub morning: Dose,
    pub noon: Dose,
    pub evening: Dose,
    pub night: Dose,
}

impl NamedSlotsInput {
    /// Slot doses in canonical order.
    pub fn slot_doses(&self) -> [(NamedSlot, &Dose); 4] {
        [
            (NamedSlot::Morn, &self.morning),
            (NamedSlot::Noon, &self.noon),
            (NamedSlot::Eve, &self.evening),
            (NamedSlot::Night, &self.night),
        ]
    }

    pub(crate) fn doses_mut(&mut self) -> [&mut Dose; 4] {
        [
            &mut self.morning,
            &mut self.noon,
            &mut self.evening,
            &mut self.night,
        ]
    }
}

/// Parallel sequences of clock times, dose magnitudes and unit codes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClockTimesInput {
    pub times: Vec<String>,
    pub doses: Vec<f64>,
    /// Per-time unit codes; `None` leaves every dose without a code.
    #[serde(default, rename = "units")]
    pub unit_codes: Option<Vec<Option<String>>>,
}

/// A dose on one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayDose {
    pub day: Weekday,
    pub dose: Dose,
}

/// `frequency` doses every `period` `period_unit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalInput {
    pub frequency: u32,
    pub period: u32,
    pub period_unit: UnitOfTime,
    pub dose: Dose,
}

/// A dose anchored at a clock time (`08:00`) or a slot code (`MORN`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedDose {
    pub at: String,
    pub dose: Dose,
}

/// Interval schedule with one instruction per anchored dose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervalAtTimeInput {
    pub period: u32,
    pub period_unit: UnitOfTime,
    pub entries: Vec<TimedDose>,
}

/// Weekly entry: days plus exactly one of `time` or `slot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayBasedEntry {
    pub days: Vec<Weekday>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub slot: Option<NamedSlot>,
    pub dose: Dose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dose_accepts_bare_number_and_object() {
        let bare: Dose = serde_json::from_str("2.5").unwrap();
        assert_eq!(bare, Dose::bare(2.5));

        let full: Dose = serde_json::from_str(r#"{ "value": 1, "unit": "mg" }"#).unwrap();
        assert_eq!(full, Dose::new(1.0, Some("mg")));
    }

    #[test]
    fn test_fill_unit_keeps_explicit_code() {
        let mut explicit = Dose::new(1.0, Some("mg"));
        explicit.fill_unit("pc");
        assert_eq!(explicit.unit_code.as_deref(), Some("mg"));

        let mut missing = Dose::bare(1.0);
        missing.fill_unit("pc");
        assert_eq!(missing.unit_code.as_deref(), Some("pc"));
    }

    #[test]
    fn test_weekday_entry_lowercases_days() {
        let entry: WeekdayDose =
            serde_json::from_str(r#"{ "day": "MON", "dose": 5 }"#).unwrap();
        assert_eq!(entry.day, Weekday::Mon);
    }
}
