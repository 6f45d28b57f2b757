use dosage_model::{DosageInstruction, TimingPattern};

use crate::context::CompileContext;
use crate::grouping::group_by_dose;
use crate::normalization::duration_bound;
use crate::types::{DurationInput, NamedSlotsInput};

/// Compile a morning/noon/evening/night schedule.
///
/// Slots with a dose of zero or less are inactive. Active slots are grouped
/// by dose and each group lists its slots in canonical order.
pub fn compile_named_slots(
    input: &NamedSlotsInput,
    duration: &DurationInput,
    ctx: &CompileContext<'_>,
) -> Vec<DosageInstruction> {
    let bounds = duration_bound(duration);
    let active = input
        .slot_doses()
        .into_iter()
        .filter(|(_, dose)| dose.value > 0.0);

    let groups = group_by_dose(active);
    tracing::debug!(groups = groups.len(), "Grouped named slot doses");

    groups
        .into_iter()
        .map(|group| {
            let mut slots = group.points;
            slots.sort();
            slots.dedup();
            DosageInstruction::scheduled(
                TimingPattern::NamedSlots { slots, bounds },
                ctx.dose_quantity(&group.dose),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompilerConfig;
    use crate::types::Dose;
    use dosage_model::NamedSlot;
    use dosage_units::UnitRegistry;

    fn slots_of(instruction: &DosageInstruction) -> Vec<NamedSlot> {
        match &instruction.timing {
            TimingPattern::NamedSlots { slots, .. } => slots.clone(),
            other => panic!("unexpected pattern {other:?}"),
        }
    }

    #[test]
    fn test_all_zero_yields_nothing() {
        let units = UnitRegistry::embedded().unwrap();
        let config = CompilerConfig::default();
        let ctx = CompileContext::new(&units, &config);

        let out = compile_named_slots(&NamedSlotsInput::default(), &DurationInput::none(), &ctx);
        assert!(out.is_empty());
    }

    #[test]
    fn test_night_and_morning_share_group_in_canonical_order() {
        let units = UnitRegistry::embedded().unwrap();
        let config = CompilerConfig::default();
        let ctx = CompileContext::new(&units, &config);

        let input = NamedSlotsInput {
            morning: Dose::new(2.0, Some("tab")),
            noon: Dose::new(0.5, Some("tab")),
            evening: Dose::bare(0.0),
            night: Dose::new(2.0, Some("tab")),
        };
        let out = compile_named_slots(&input, &DurationInput::new(Some(2), Some("wk")), &ctx);

        assert_eq!(out.len(), 2);
        assert_eq!(slots_of(&out[0]), vec![NamedSlot::Morn, NamedSlot::Night]);
        assert_eq!(slots_of(&out[1]), vec![NamedSlot::Noon]);
        assert_eq!(out[0].dose.as_ref().unwrap().unit, "tablet(s)");
        assert!(out.iter().all(|i| i.timing.bounds().is_some()));
    }

    #[test]
    fn test_negative_dose_inactive() {
        let units = UnitRegistry::empty();
        let config = CompilerConfig::default();
        let ctx = CompileContext::new(&units, &config);

        let input = NamedSlotsInput {
            morning: Dose::bare(-1.0),
            evening: Dose::bare(1.0),
            ..NamedSlotsInput::default()
        };
        let out = compile_named_slots(&input, &DurationInput::none(), &ctx);
        assert_eq!(out.len(), 1);
        assert_eq!(slots_of(&out[0]), vec![NamedSlot::Eve]);
    }
}
