use dosage_model::{DosageInstruction, TimingPattern};

use crate::context::CompileContext;
use crate::error::{Result, ScheduleError};
use crate::normalization::{duration_bound, parse_time_specifier};
use crate::types::{DurationInput, IntervalAtTimeInput};

/// Compile an interval schedule anchored at times of day.
///
/// Every entry becomes its own instruction with frequency 1, even when two
/// entries share a dose.
///
/// # Errors
///
/// [`ScheduleError::UnknownTimeSpecifier`] when an entry's anchor is neither
/// a clock time nor a slot.
pub fn compile_interval_at_time(
    input: &IntervalAtTimeInput,
    duration: &DurationInput,
    ctx: &CompileContext<'_>,
) -> Result<Vec<DosageInstruction>> {
    let bounds = duration_bound(duration);

    input
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let at = parse_time_specifier(&entry.at).map_err(|_| {
                ScheduleError::UnknownTimeSpecifier {
                    index,
                    value: entry.at.clone(),
                }
            })?;
            Ok(DosageInstruction::scheduled(
                TimingPattern::IntervalAtTime {
                    period: input.period,
                    period_unit: input.period_unit,
                    at,
                    bounds,
                },
                ctx.dose_quantity(&entry.dose),
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompilerConfig;
    use crate::types::{Dose, TimedDose};
    use dosage_model::{NamedSlot, TimeSpecifier, UnitOfTime};
    use dosage_units::UnitRegistry;

    fn timed(at: &str, value: f64) -> TimedDose {
        TimedDose {
            at: at.to_string(),
            dose: Dose::new(value, Some("pc")),
        }
    }

    #[test]
    fn test_equal_doses_not_merged() {
        let units = UnitRegistry::empty();
        let config = CompilerConfig::default();
        let ctx = CompileContext::new(&units, &config);

        let input = IntervalAtTimeInput {
            period: 2,
            period_unit: UnitOfTime::Day,
            entries: vec![timed("08:00", 1.0), timed("evening", 1.0)],
        };
        let out = compile_interval_at_time(&input, &DurationInput::none(), &ctx).unwrap();

        assert_eq!(out.len(), 2);
        assert!(matches!(
            &out[0].timing,
            TimingPattern::IntervalAtTime { at: TimeSpecifier::Clock(t), period: 2, .. } if t == "08:00:00"
        ));
        assert!(matches!(
            &out[1].timing,
            TimingPattern::IntervalAtTime { at: TimeSpecifier::Slot(NamedSlot::Eve), .. }
        ));
        assert!(out.iter().all(|i| i.timing.frequency() == Some(1)));
    }

    #[test]
    fn test_unknown_slot_fails() {
        let units = UnitRegistry::empty();
        let config = CompilerConfig::default();
        let ctx = CompileContext::new(&units, &config);

        let input = IntervalAtTimeInput {
            period: 1,
            period_unit: UnitOfTime::Week,
            entries: vec![timed("MORN", 1.0), timed("lunchtime", 1.0)],
        };
        let err = compile_interval_at_time(&input, &DurationInput::none(), &ctx).unwrap_err();
        assert_eq!(
            err,
            ScheduleError::UnknownTimeSpecifier {
                index: 1,
                value: "lunchtime".to_string()
            }
        );
    }
}
