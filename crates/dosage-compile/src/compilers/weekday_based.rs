use dosage_model::{DosageInstruction, TimeSpecifier, TimingPattern};

use crate::compilers::weekdays::distinct_days;
use crate::context::CompileContext;
use crate::error::{Result, ScheduleError};
use crate::normalization::{duration_bound, normalize_clock_time};
use crate::types::{DurationInput, WeekdayBasedEntry};

/// Compile weekly entries that each carry a time of day.
///
/// One instruction per entry; entries are never merged.
///
/// # Errors
///
/// - [`ScheduleError::MissingTimeSpecifier`] when an entry has neither
///   `time` nor `slot`
/// - [`ScheduleError::ConflictingTimeSpecifier`] when it has both
/// - [`ScheduleError::EmptyDays`] when it lists no days
pub fn compile_weekday_based(
    entries: &[WeekdayBasedEntry],
    duration: &DurationInput,
    ctx: &CompileContext<'_>,
) -> Result<Vec<DosageInstruction>> {
    let bounds = duration_bound(duration);

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let at = time_specifier(index, entry)?;
            if entry.days.is_empty() {
                return Err(ScheduleError::EmptyDays { index });
            }
            Ok(DosageInstruction::scheduled(
                TimingPattern::WeekdaysAtTime {
                    days: distinct_days(entry.days.clone()),
                    at,
                    bounds,
                },
                ctx.dose_quantity(&entry.dose),
            ))
        })
        .collect()
}

fn time_specifier(index: usize, entry: &WeekdayBasedEntry) -> Result<TimeSpecifier> {
    match (&entry.time, entry.slot) {
        (Some(time), None) => Ok(TimeSpecifier::Clock(normalize_clock_time(time))),
        (None, Some(slot)) => Ok(TimeSpecifier::Slot(slot)),
        (None, None) => Err(ScheduleError::MissingTimeSpecifier { index }),
        (Some(_), Some(_)) => Err(ScheduleError::ConflictingTimeSpecifier { index }),
    }
}
