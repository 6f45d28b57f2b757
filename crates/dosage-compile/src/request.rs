//! Schedule requests: one JSON document naming a schema plus its parameters.
//!
//! ```json
//! {
//!   "schema": "mman",
//!   "medication": "Metformin 500",
//!   "unit": "tab",
//!   "duration": { "value": 10, "unit": "d" },
//!   "morning": 1, "noon": 0, "evening": 1, "night": 0
//! }
//! ```
//!
//! The `schema` tag selects the compiler; the remaining fields are that
//! schema's input. `medication`, `unit` and `duration` are optional and
//! shared by all schemas.

use serde::{Deserialize, Serialize};

use dosage_model::{DosageInstruction, MedicationRequest};

use crate::assembler::assemble;
use crate::compilers::{
    compile_clock_times, compile_free_text, compile_interval, compile_interval_at_time,
    compile_named_slots, compile_weekday_based, compile_weekdays,
};
use crate::context::CompileContext;
use crate::error::Result;
use crate::types::{
    ClockTimesInput, DurationInput, IntervalAtTimeInput, IntervalInput, NamedSlotsInput,
    WeekdayBasedEntry, WeekdayDose,
};

/// Schema names with a one-line description, in declaration order.
pub const SCHEMAS: [(&str, &str); 7] = [
    ("freetext", "Free text, kept verbatim"),
    ("mman", "Morning/noon/evening/night doses"),
    ("timeofday", "Doses at exact clock times"),
    ("weekday", "One dose per weekday"),
    ("interval", "Frequency per period"),
    ("combined_interval_time", "Interval anchored at times of day"),
    ("weekday_combined", "Weekdays with a time of day per entry"),
];

/// Schema-specific schedule parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "schema")]
pub enum Schedule {
    #[serde(rename = "freetext")]
    FreeText { text: String },

    #[serde(rename = "mman")]
    NamedSlots(NamedSlotsInput),

    #[serde(rename = "timeofday")]
    ClockTimes(ClockTimesInput),

    #[serde(rename = "weekday")]
    Weekdays { days: Vec<WeekdayDose> },

    #[serde(rename = "interval")]
    Interval(IntervalInput),

    #[serde(rename = "combined_interval_time")]
    IntervalAtTime(IntervalAtTimeInput),

    #[serde(rename = "weekday_combined")]
    WeekdayBased { entries: Vec<WeekdayBasedEntry> },
}

impl Schedule {
    /// Schema tag as it appears in request JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Schedule::FreeText { .. } => "freetext",
            Schedule::NamedSlots(_) => "mman",
            Schedule::ClockTimes(_) => "timeofday",
            Schedule::Weekdays { .. } => "weekday",
            Schedule::Interval(_) => "interval",
            Schedule::IntervalAtTime(_) => "combined_interval_time",
            Schedule::WeekdayBased { .. } => "weekday_combined",
        }
    }

    /// Run the compiler for this schema.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the selected compiler.
    pub fn compile(
        &self,
        duration: &DurationInput,
        ctx: &CompileContext<'_>,
    ) -> Result<Vec<DosageInstruction>> {
        match self {
            Schedule::FreeText { text } => Ok(compile_free_text(text, ctx)),
            Schedule::NamedSlots(input) => Ok(compile_named_slots(input, duration, ctx)),
            Schedule::ClockTimes(input) => compile_clock_times(input, duration, ctx),
            Schedule::Weekdays { days } => Ok(compile_weekdays(days, duration, ctx)),
            Schedule::Interval(input) => Ok(compile_interval(input, duration, ctx)),
            Schedule::IntervalAtTime(input) => compile_interval_at_time(input, duration, ctx),
            Schedule::WeekdayBased { entries } => compile_weekday_based(entries, duration, ctx),
        }
    }

    /// Give every dose without a unit code the code `code`.
    pub fn fill_unit(&mut self, code: &str) {
        match self {
            Schedule::FreeText { .. } => {}
            Schedule::NamedSlots(input) => {
                for dose in input.doses_mut() {
                    dose.fill_unit(code);
                }
            }
            Schedule::ClockTimes(input) => {
                let count = input.times.len();
                let codes = input.unit_codes.get_or_insert_with(|| vec![None; count]);
                for slot in codes.iter_mut().filter(|slot| slot.is_none()) {
                    *slot = Some(code.to_string());
                }
            }
            Schedule::Weekdays { days } => {
                for entry in days {
                    entry.dose.fill_unit(code);
                }
            }
            Schedule::Interval(input) => input.dose.fill_unit(code),
            Schedule::IntervalAtTime(input) => {
                for entry in &mut input.entries {
                    entry.dose.fill_unit(code);
                }
            }
            Schedule::WeekdayBased { entries } => {
                for entry in entries {
                    entry.dose.fill_unit(code);
                }
            }
        }
    }
}

/// A complete schedule request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Medication display name; the configured default when absent or blank.
    #[serde(default)]
    pub medication: Option<String>,

    /// Unit code for doses that name none; the configured default when absent.
    #[serde(default)]
    pub unit: Option<String>,

    #[serde(default)]
    pub duration: DurationInput,

    #[serde(flatten)]
    pub schedule: Schedule,
}

impl ScheduleRequest {
    pub fn new(schedule: Schedule) -> Self {
        Self {
            medication: None,
            unit: None,
            duration: DurationInput::none(),
            schedule,
        }
    }

    #[must_use]
    pub fn with_medication(mut self, medication: impl Into<String>) -> Self {
        self.medication = Some(medication.into());
        self
    }

    #[must_use]
    pub fn with_unit(mut self, code: impl Into<String>) -> Self {
        self.unit = Some(code.into());
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: DurationInput) -> Self {
        self.duration = duration;
        self
    }

    /// Schema tag of this request.
    pub fn schema(&self) -> &'static str {
        self.schedule.name()
    }

    /// Medication name, falling back to the configured default.
    pub fn medication_name<'a>(&'a self, ctx: &CompileContext<'a>) -> &'a str {
        self.medication
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(ctx.config().default_medication.as_str())
    }

    /// Compile the schedule into instructions.
    ///
    /// Doses without a unit code receive the request unit, or the configured
    /// default unit when the request names none.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the selected compiler.
    pub fn compile(&self, ctx: &CompileContext<'_>) -> Result<Vec<DosageInstruction>> {
        let unit = self
            .unit
            .as_deref()
            .filter(|code| !code.is_empty())
            .or_else(|| ctx.config().default_unit());

        tracing::debug!(
            schema = self.schema(),
            unit = unit.unwrap_or(""),
            "Compiling schedule"
        );

        let instructions = match unit {
            Some(code) => {
                let mut schedule = self.schedule.clone();
                schedule.fill_unit(code);
                schedule.compile(&self.duration, ctx)?
            }
            None => self.schedule.compile(&self.duration, ctx)?,
        };

        tracing::debug!(
            schema = self.schema(),
            instructions = instructions.len(),
            "Compiled schedule"
        );
        Ok(instructions)
    }

    /// Compile the schedule and wrap it in a medication request.
    ///
    /// # Errors
    ///
    /// Returns the validation error of the selected compiler.
    pub fn to_medication_request(&self, ctx: &CompileContext<'_>) -> Result<MedicationRequest> {
        let instructions = self.compile(ctx)?;
        Ok(assemble(self.medication_name(ctx), instructions))
    }
}
