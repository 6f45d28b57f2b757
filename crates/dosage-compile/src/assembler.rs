//! Medication request assembly.

use dosage_model::{DosageInstruction, MedicationRequest};

/// Wrap compiled instructions in the medication request envelope.
///
/// Status, intent, profile and subject are fixed. Never fails.
pub fn assemble(
    medication: impl Into<String>,
    instructions: Vec<DosageInstruction>,
) -> MedicationRequest {
    let request = MedicationRequest::new(medication, instructions);
    tracing::debug!(
        medication = %request.medication,
        instructions = request.dosage_instruction.len(),
        "Assembled medication request"
    );
    request
}
