use dosage_model::{DosageInstruction, TimingPattern, Weekday};

use crate::context::CompileContext;
use crate::grouping::group_by_dose;
use crate::normalization::duration_bound;
use crate::types::{DurationInput, WeekdayDose};

/// Compile a weekly schedule with one dose per weekday.
///
/// Days are grouped by dose. A day listed twice with the same dose appears
/// once in its group; frequency counts distinct days.
pub fn compile_weekdays(
    entries: &[WeekdayDose],
    duration: &DurationInput,
    ctx: &CompileContext<'_>,
) -> Vec<DosageInstruction> {
    let bounds = duration_bound(duration);
    let groups = group_by_dose(entries.iter().map(|entry| (entry.day, &entry.dose)));
    tracing::debug!(groups = groups.len(), "Grouped weekday doses");

    groups
        .into_iter()
        .map(|group| {
            DosageInstruction::scheduled(
                TimingPattern::Weekdays {
                    days: distinct_days(group.points),
                    bounds,
                },
                ctx.dose_quantity(&group.dose),
            )
        })
        .collect()
}

/// Drop repeated days, keeping first occurrences in order.
pub(crate) fn distinct_days(days: Vec<Weekday>) -> Vec<Weekday> {
    let mut distinct = Vec::with_capacity(days.len());
    for day in days {
        if !distinct.contains(&day) {
            distinct.push(day);
        }
    }
    distinct
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompilerConfig;
    use crate::types::Dose;
    use dosage_units::UnitRegistry;

    #[test]
    fn test_repeated_day_counted_once() {
        let units = UnitRegistry::empty();
        let config = CompilerConfig::default();
        let ctx = CompileContext::new(&units, &config);

        let entries = [
            WeekdayDose {
                day: Weekday::Tue,
                dose: Dose::bare(1.0),
            },
            WeekdayDose {
                day: Weekday::Tue,
                dose: Dose::bare(1.0),
            },
            WeekdayDose {
                day: Weekday::Sat,
                dose: Dose::bare(1.0),
            },
        ];
        let out = compile_weekdays(&entries, &DurationInput::none(), &ctx);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].timing.frequency(), Some(2));
        assert_eq!(
            out[0].timing,
            TimingPattern::Weekdays {
                days: vec![Weekday::Tue, Weekday::Sat],
                bounds: None,
            }
        );
    }

    #[test]
    fn test_distinct_days_keeps_order() {
        let days = vec![Weekday::Fri, Weekday::Mon, Weekday::Fri];
        assert_eq!(distinct_days(days), vec![Weekday::Fri, Weekday::Mon]);
    }
}
