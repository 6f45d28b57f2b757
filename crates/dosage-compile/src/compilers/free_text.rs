use dosage_model::DosageInstruction;

use crate::context::CompileContext;

/// Wrap raw text in a single free-text instruction.
///
/// Provenance is attached or omitted per the configured mode. No bounds apply.
pub fn compile_free_text(text: &str, ctx: &CompileContext<'_>) -> Vec<DosageInstruction> {
    vec![DosageInstruction::free_text(text, ctx.free_text_algorithm())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CompilerConfig, FreeTextProvenance};
    use dosage_model::{TextAlgorithm, TimingPattern};
    use dosage_units::UnitRegistry;

    #[test]
    fn test_text_kept_verbatim_with_provenance() {
        let units = UnitRegistry::empty();
        let config = CompilerConfig::default();
        let ctx = CompileContext::new(&units, &config);

        let instructions = compile_free_text("  1-0-1 nach dem Essen ", &ctx);
        assert_eq!(instructions.len(), 1);
        assert_eq!(
            instructions[0].timing,
            TimingPattern::FreeText {
                text: "  1-0-1 nach dem Essen ".to_string(),
                generated_by: Some(TextAlgorithm::GERMAN_TEXT_GENERATOR),
            }
        );
        assert!(instructions[0].dose.is_none());
    }

    #[test]
    fn test_provenance_omitted() {
        let units = UnitRegistry::empty();
        let config = CompilerConfig::default().with_free_text_provenance(FreeTextProvenance::Omit);
        let ctx = CompileContext::new(&units, &config);

        let instructions = compile_free_text("bei Bedarf", &ctx);
        assert!(matches!(
            &instructions[0].timing,
            TimingPattern::FreeText { generated_by: None, .. }
        ));
    }
}
