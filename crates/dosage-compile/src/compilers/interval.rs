use dosage_model::{DosageInstruction, TimingPattern};

use crate::context::CompileContext;
use crate::normalization::duration_bound;
use crate::types::{DurationInput, IntervalInput};

/// Compile a `frequency` per `period` schedule into exactly one instruction.
pub fn compile_interval(
    input: &IntervalInput,
    duration: &DurationInput,
    ctx: &CompileContext<'_>,
) -> Vec<DosageInstruction> {
    let timing = TimingPattern::Interval {
        frequency: input.frequency,
        period: input.period,
        period_unit: input.period_unit,
        bounds: duration_bound(duration),
    };
    vec![DosageInstruction::scheduled(
        timing,
        ctx.dose_quantity(&input.dose),
    )]
}
