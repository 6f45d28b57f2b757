use std::collections::HashSet;

use dosage_model::{DosageInstruction, TimingPattern};

use crate::context::CompileContext;
use crate::error::{Result, ScheduleError};
use crate::grouping::group_by_dose;
use crate::normalization::{duration_bound, normalize_clock_time};
use crate::types::{ClockTimesInput, Dose, DurationInput};

/// Compile a schedule of exact clock times.
///
/// # Errors
///
/// - [`ScheduleError::ShapeMismatch`] when `doses` or `units` differ in
///   length from `times`
/// - [`ScheduleError::DuplicateTime`] when two times normalize to the same
///   value
pub fn compile_clock_times(
    input: &ClockTimesInput,
    duration: &DurationInput,
    ctx: &CompileContext<'_>,
) -> Result<Vec<DosageInstruction>> {
    let expected = input.times.len();
    check_len("doses", expected, input.doses.len())?;
    if let Some(codes) = &input.unit_codes {
        check_len("units", expected, codes.len())?;
    }

    let times: Vec<String> = input
        .times
        .iter()
        .map(|time| normalize_clock_time(time))
        .collect();

    let mut seen = HashSet::with_capacity(times.len());
    for time in &times {
        if !seen.insert(time.as_str()) {
            return Err(ScheduleError::DuplicateTime { time: time.clone() });
        }
    }

    let doses: Vec<Dose> = input
        .doses
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let code = input
                .unit_codes
                .as_ref()
                .and_then(|codes| codes[index].as_deref());
            Dose::new(value, code)
        })
        .collect();

    let bounds = duration_bound(duration);
    let groups = group_by_dose(times.into_iter().zip(doses.iter()));
    tracing::debug!(groups = groups.len(), "Grouped clock time doses");

    Ok(groups
        .into_iter()
        .map(|group| {
            DosageInstruction::scheduled(
                TimingPattern::ClockTimes {
                    times: group.points,
                    bounds,
                },
                ctx.dose_quantity(&group.dose),
            )
        })
        .collect())
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ScheduleError::ShapeMismatch {
            field,
            expected,
            actual,
        })
    }
}
