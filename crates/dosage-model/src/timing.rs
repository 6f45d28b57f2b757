//! Timing patterns and duration bounds.
//!
//! A [`TimingPattern`] is the scheduling half of a dosage instruction. Every
//! variant except [`TimingPattern::FreeText`] serializes to a `repeat`
//! element shaped like the FHIR `Timing.repeat` datatype:
//!
//! ```text
//! NamedSlots      -> { boundsDuration?, when }
//! ClockTimes      -> { boundsDuration?, timeOfDay }
//! Weekdays        -> { boundsDuration?, frequency, period: 1, periodUnit: wk, dayOfWeek }
//! Interval        -> { boundsDuration?, frequency, period, periodUnit }
//! IntervalAtTime  -> { boundsDuration?, frequency: 1, period, periodUnit, timeOfDay | when }
//! WeekdaysAtTime  -> { boundsDuration?, frequency, period: 1, periodUnit: wk, dayOfWeek, timeOfDay | when }
//! ```
//!
//! Weekly patterns carry the UCUM code `wk` as `periodUnit`, matching `boundsDuration`.

use serde::{Serialize, Serializer};
use std::slice;

use crate::enums::{NamedSlot, UnitOfTime, Weekday};
use crate::instruction::TextAlgorithm;

/// Code system for duration bound units.
pub const UCUM_SYSTEM: &str = "http://unitsofmeasure.org";

/// Cap on how long a schedule applies.
///
/// Construction goes through [`DurationBound::new`], which only accepts a
/// positive value and a calendar unit (d, wk, mo, a).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationBound {
    value: u32,
    unit: UnitOfTime,
    label: &'static str,
}

impl DurationBound {
    /// Create a bound, or `None` when the value is zero or the unit is not
    /// a calendar unit.
    pub fn new(value: u32, unit: UnitOfTime) -> Option<Self> {
        if value == 0 {
            return None;
        }
        let label = unit.duration_label()?;
        Some(Self { value, unit, label })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn unit(&self) -> UnitOfTime {
        self.unit
    }

    /// Display label, e.g. `day(s)`.
    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Serialize for DurationBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr {
            value: u32,
            unit: &'static str,
            system: &'static str,
            code: UnitOfTime,
        }

        Repr {
            value: self.value,
            unit: self.label,
            system: UCUM_SYSTEM,
            code: self.unit,
        }
        .serialize(serializer)
    }
}

/// Anchor of an interval or weekday schedule within the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeSpecifier {
    /// Exact clock time, normalized to `HH:MM:SS`.
    Clock(String),
    /// Coarse daily slot.
    Slot(NamedSlot),
}

/// Scheduling half of a dosage instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum TimingPattern {
    /// Daily slots in canonical order.
    NamedSlots {
        slots: Vec<NamedSlot>,
        bounds: Option<DurationBound>,
    },
    /// Exact clock times in input order.
    ClockTimes {
        times: Vec<String>,
        bounds: Option<DurationBound>,
    },
    /// Weekly schedule on the given days; frequency is the day count.
    Weekdays {
        days: Vec<Weekday>,
        bounds: Option<DurationBound>,
    },
    /// `frequency` times per `period` `period_unit`.
    Interval {
        frequency: u32,
        period: u32,
        period_unit: UnitOfTime,
        bounds: Option<DurationBound>,
    },
    /// Once per `period` `period_unit`, anchored at a time of day.
    IntervalAtTime {
        period: u32,
        period_unit: UnitOfTime,
        at: TimeSpecifier,
        bounds: Option<DurationBound>,
    },
    /// Weekly schedule on the given days, anchored at a time of day.
    WeekdaysAtTime {
        days: Vec<Weekday>,
        at: TimeSpecifier,
        bounds: Option<DurationBound>,
    },
    /// Unstructured text, optionally tagged with the algorithm that produced it.
    FreeText {
        text: String,
        generated_by: Option<TextAlgorithm>,
    },
}

impl TimingPattern {
    /// Duration bound attached to this pattern, if any.
    pub fn bounds(&self) -> Option<&DurationBound> {
        match self {
            TimingPattern::NamedSlots { bounds, .. }
            | TimingPattern::ClockTimes { bounds, .. }
            | TimingPattern::Weekdays { bounds, .. }
            | TimingPattern::Interval { bounds, .. }
            | TimingPattern::IntervalAtTime { bounds, .. }
            | TimingPattern::WeekdaysAtTime { bounds, .. } => bounds.as_ref(),
            TimingPattern::FreeText { .. } => None,
        }
    }

    /// Repetitions per period, where the pattern defines one.
    pub fn frequency(&self) -> Option<u32> {
        match self {
            TimingPattern::Weekdays { days, .. } | TimingPattern::WeekdaysAtTime { days, .. } => {
                Some(day_count(days))
            }
            TimingPattern::Interval { frequency, .. } => Some(*frequency),
            TimingPattern::IntervalAtTime { .. } => Some(1),
            TimingPattern::NamedSlots { .. }
            | TimingPattern::ClockTimes { .. }
            | TimingPattern::FreeText { .. } => None,
        }
    }

    /// Structured `repeat` element, or `None` for free text.
    pub(crate) fn repeat(&self) -> Option<Repeat<'_>> {
        let mut repeat = Repeat {
            bounds_duration: self.bounds(),
            frequency: self.frequency(),
            ..Repeat::default()
        };

        match self {
            TimingPattern::NamedSlots { slots, .. } => repeat.when = Some(slots.as_slice()),
            TimingPattern::ClockTimes { times, .. } => repeat.time_of_day = Some(times.as_slice()),
            TimingPattern::Weekdays { days, .. } => {
                repeat.set_weekly(days);
            }
            TimingPattern::Interval {
                period,
                period_unit,
                ..
            } => {
                repeat.period = Some(*period);
                repeat.period_unit = Some(*period_unit);
            }
            TimingPattern::IntervalAtTime {
                period,
                period_unit,
                at,
                ..
            } => {
                repeat.period = Some(*period);
                repeat.period_unit = Some(*period_unit);
                repeat.set_anchor(at);
            }
            TimingPattern::WeekdaysAtTime { days, at, .. } => {
                repeat.set_weekly(days);
                repeat.set_anchor(at);
            }
            TimingPattern::FreeText { .. } => return None,
        }

        Some(repeat)
    }
}

fn day_count(days: &[Weekday]) -> u32 {
    u32::try_from(days.len()).unwrap_or(u32::MAX)
}

/// Borrowed view of a `Timing.repeat` element.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Repeat<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    bounds_duration: Option<&'a DurationBound>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    period_unit: Option<UnitOfTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    day_of_week: Option<&'a [Weekday]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_of_day: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    when: Option<&'a [NamedSlot]>,
}

impl<'a> Repeat<'a> {
    fn set_weekly(&mut self, days: &'a [Weekday]) {
        self.period = Some(1);
        self.period_unit = Some(UnitOfTime::Week);
        self.day_of_week = Some(days);
    }

    fn set_anchor(&mut self, at: &'a TimeSpecifier) {
        match at {
            TimeSpecifier::Clock(time) => self.time_of_day = Some(slice::from_ref(time)),
            TimeSpecifier::Slot(slot) => self.when = Some(slice::from_ref(slot)),
        }
    }
}
