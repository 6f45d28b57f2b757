//! Text rendering of compiled instructions.
//!
//! Rendering is a seam: callers plug in a [`DosageTextRenderer`] (for
//! example a localized text generator) and [`render_texts`] joins its output
//! for a whole schedule. Two renderers ship with the crate:
//!
//! - [`FreeTextRenderer`] renders free-text instructions verbatim and
//!   nothing else.
//! - [`SummaryRenderer`] renders every instruction as a short English line,
//!   e.g. `1 tablet(s) at MORN, NOON for 10 day(s)`.

use dosage_model::{
    DosageInstruction, DoseQuantity, NamedSlot, TimeSpecifier, TimingPattern, Weekday,
};

/// Renders one instruction as display text.
pub trait DosageTextRenderer {
    /// Text for `instruction`, or `None` when it has no textual rendering.
    fn render(&self, instruction: &DosageInstruction) -> Option<String>;
}

/// Renders free-text instructions verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct FreeTextRenderer;

impl DosageTextRenderer for FreeTextRenderer {
    fn render(&self, instruction: &DosageInstruction) -> Option<String> {
        instruction.free_text_value().map(str::to_string)
    }
}

/// Renders structured instructions as short English summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryRenderer;

impl DosageTextRenderer for SummaryRenderer {
    fn render(&self, instruction: &DosageInstruction) -> Option<String> {
        if let Some(text) = instruction.free_text_value() {
            return Some(text.to_string());
        }

        let mut parts: Vec<String> = instruction.dose.iter().map(dose_text).collect();
        parts.push(match &instruction.timing {
            TimingPattern::NamedSlots { slots, .. } => {
                format!("at {}", join(slots.iter().map(NamedSlot::as_code)))
            }
            TimingPattern::ClockTimes { times, .. } => format!("at {}", times.join(", ")),
            TimingPattern::Weekdays { days, .. } => {
                format!("on {}", join(days.iter().map(Weekday::as_code)))
            }
            TimingPattern::Interval {
                frequency,
                period,
                period_unit,
                ..
            } => format!("{frequency}x every {period} {}", period_unit.as_code()),
            TimingPattern::IntervalAtTime {
                period,
                period_unit,
                at,
                ..
            } => format!(
                "every {period} {} at {}",
                period_unit.as_code(),
                anchor_text(at)
            ),
            TimingPattern::WeekdaysAtTime { days, at, .. } => format!(
                "on {} at {}",
                join(days.iter().map(Weekday::as_code)),
                anchor_text(at)
            ),
            TimingPattern::FreeText { .. } => String::new(),
        });

        if let Some(bound) = instruction.timing.bounds() {
            parts.push(format!("for {} {}", bound.value(), bound.label()));
        }
        parts.retain(|part| !part.is_empty());
        Some(parts.join(" "))
    }
}

/// Join the non-empty renderings of `instructions` with `separator`.
pub fn render_texts(
    instructions: &[DosageInstruction],
    renderer: &dyn DosageTextRenderer,
    separator: &str,
) -> String {
    instructions
        .iter()
        .filter_map(|instruction| renderer.render(instruction))
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn dose_text(dose: &DoseQuantity) -> String {
    if dose.unit.is_empty() {
        dose.value.to_string()
    } else {
        format!("{} {}", dose.value, dose.unit)
    }
}

fn anchor_text(at: &TimeSpecifier) -> &str {
    match at {
        TimeSpecifier::Clock(time) => time.as_str(),
        TimeSpecifier::Slot(slot) => slot.as_code(),
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosage_model::{DurationBound, UnitOfTime};

    fn dose(value: f64, unit: &str) -> DoseQuantity {
        DoseQuantity {
            value,
            unit: unit.to_string(),
            code: None,
        }
    }

    #[test]
    fn test_free_text_renderer_skips_structured() {
        let instructions = vec![
            DosageInstruction::free_text("1-0-1", None),
            DosageInstruction::scheduled(
                TimingPattern::NamedSlots {
                    slots: vec![NamedSlot::Morn],
                    bounds: None,
                },
                dose(1.0, "pc"),
            ),
            DosageInstruction::free_text("", None),
            DosageInstruction::free_text("bei Bedarf", None),
        ];
        assert_eq!(
            render_texts(&instructions, &FreeTextRenderer, " / "),
            "1-0-1 / bei Bedarf"
        );
    }

    #[test]
    fn test_summary_lines() {
        let bound = DurationBound::new(10, UnitOfTime::Day);
        let instructions = vec![
            DosageInstruction::scheduled(
                TimingPattern::NamedSlots {
                    slots: vec![NamedSlot::Morn, NamedSlot::Noon],
                    bounds: bound,
                },
                dose(1.0, "tablet(s)"),
            ),
            DosageInstruction::scheduled(
                TimingPattern::Interval {
                    frequency: 1,
                    period: 2,
                    period_unit: UnitOfTime::Day,
                    bounds: None,
                },
                dose(0.5, ""),
            ),
            DosageInstruction::scheduled(
                TimingPattern::WeekdaysAtTime {
                    days: vec![Weekday::Mon, Weekday::Fri],
                    at: TimeSpecifier::Clock("08:00:00".to_string()),
                    bounds: None,
                },
                dose(5.0, "mg"),
            ),
        ];

        assert_eq!(
            render_texts(&instructions, &SummaryRenderer, "\n"),
            "1 tablet(s) at MORN, NOON for 10 day(s)\n\
             0.5 1x every 2 d\n\
             5 mg on mon, fri at 08:00:00"
        );
    }

    #[test]
    fn test_summary_without_dose_has_no_leading_space() {
        let instruction = DosageInstruction {
            timing: TimingPattern::IntervalAtTime {
                period: 1,
                period_unit: UnitOfTime::Week,
                at: TimeSpecifier::Slot(NamedSlot::Night),
                bounds: DurationBound::new(3, UnitOfTime::Month),
            },
            dose: None,
        };
        assert_eq!(
            SummaryRenderer.render(&instruction).as_deref(),
            Some("every 1 wk at NIGHT for 3 month(s)")
        );
    }
}
