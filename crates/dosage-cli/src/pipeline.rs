//! Request compilation stages: load inputs, compile, render.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use dosage_compile::{
    CompileContext, CompilerConfig, DosageTextRenderer, ScheduleRequest, render_texts,
};
use dosage_model::MedicationRequest;
use dosage_units::UnitRegistry;

/// Separator between rendered instruction texts.
pub const TEXT_SEPARATOR: &str = "\n";

/// Result of compiling one request.
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub schema: &'static str,
    pub resource: MedicationRequest,
}

impl CompileOutput {
    /// Envelope as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.resource).context("serialize medication request")
    }

    /// Rendered text of all instructions, one per line.
    pub fn render_text(&self, renderer: &dyn DosageTextRenderer) -> String {
        render_texts(&self.resource.dosage_instruction, renderer, TEXT_SEPARATOR)
    }
}

/// Load the unit table from `path`, or the embedded table when `None`.
pub fn load_units(path: Option<&Path>) -> Result<UnitRegistry> {
    let units = match path {
        Some(path) => UnitRegistry::load_file(path)
            .with_context(|| format!("load unit table {}", path.display()))?,
        None => UnitRegistry::embedded().context("load embedded unit table")?,
    };
    debug!(
        units = units.len(),
        source = units.source().unwrap_or("embedded"),
        "Loaded unit table"
    );
    Ok(units)
}

/// Load compiler configuration from `path`, or defaults when `None`.
pub fn load_config(path: Option<&Path>) -> Result<CompilerConfig> {
    match path {
        Some(path) => CompilerConfig::load(path).context("load compiler config"),
        None => Ok(CompilerConfig::default()),
    }
}

/// Parse a schedule request from JSON text.
pub fn parse_request(content: &str) -> Result<ScheduleRequest> {
    serde_json::from_str(content).context("parse schedule request")
}

/// Read and parse a schedule request file.
pub fn read_request(path: &Path) -> Result<ScheduleRequest> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read request {}", path.display()))?;
    parse_request(&content).with_context(|| format!("invalid request {}", path.display()))
}

/// Compile a request into its medication request envelope.
pub fn compile_request(request: &ScheduleRequest, ctx: &CompileContext<'_>) -> Result<CompileOutput> {
    let resource = request
        .to_medication_request(ctx)
        .with_context(|| format!("compile {} schedule", request.schema()))?;
    info!(
        schema = request.schema(),
        medication = %resource.medication,
        instructions = resource.dosage_instruction.len(),
        "Compiled schedule request"
    );
    Ok(CompileOutput {
        schema: request.schema(),
        resource,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dosage_compile::SummaryRenderer;

    #[test]
    fn test_compile_and_render() {
        let units = load_units(None).unwrap();
        let config = load_config(None).unwrap();
        let ctx = CompileContext::new(&units, &config);

        let request = parse_request(
            r#"{ "schema": "mman", "morning": 1, "evening": 2, "unit": "tab" }"#,
        )
        .unwrap();
        let output = compile_request(&request, &ctx).unwrap();

        assert_eq!(output.schema, "mman");
        assert_eq!(
            output.render_text(&SummaryRenderer),
            "1 tablet(s) at MORN\n2 tablet(s) at EVE"
        );
    }

    #[test]
    fn test_validation_error_has_context() {
        let units = UnitRegistry::empty();
        let config = CompilerConfig::default();
        let ctx = CompileContext::new(&units, &config);

        let request = parse_request(
            r#"{ "schema": "timeofday", "times": ["08:00", "08:00"], "doses": [1, 1] }"#,
        )
        .unwrap();
        let error = compile_request(&request, &ctx).unwrap_err();

        assert_eq!(error.to_string(), "compile timeofday schedule");
        assert_eq!(
            error.root_cause().to_string(),
            "duplicate clock time 08:00:00"
        );
    }

    #[test]
    fn test_missing_schema_rejected() {
        assert!(parse_request(r#"{ "morning": 1 }"#).is_err());
    }
}
