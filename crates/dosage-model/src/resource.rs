//! The medication request envelope wrapping a compiled schedule.

use serde::{Deserialize, Serialize, Serializer};

use crate::instruction::DosageInstruction;

/// Resource type of the envelope.
pub const RESOURCE_TYPE: &str = "MedicationRequest";

/// Profile the envelope claims conformance to.
pub const MEDICATION_REQUEST_PROFILE: &str =
    "http://ig.fhir.de/igs/medication/StructureDefinition/MedicationRequestDgMP";

/// Display used for the anonymous subject reference.
pub const ANONYMOUS_SUBJECT: &str = "Patient";

/// Request status. Compiled requests are always active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Active,
}

/// Request intent. Compiled requests are always orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestIntent {
    #[default]
    Order,
}

/// Canonical envelope: medication metadata plus the ordered instruction list.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicationRequest {
    /// Medication display name.
    pub medication: String,
    pub status: RequestStatus,
    pub intent: RequestIntent,
    /// Compiled schedule, in emission order.
    pub dosage_instruction: Vec<DosageInstruction>,
}

impl MedicationRequest {
    /// Create an active order for `medication` with the given schedule.
    pub fn new(medication: impl Into<String>, dosage_instruction: Vec<DosageInstruction>) -> Self {
        Self {
            medication: medication.into(),
            status: RequestStatus::Active,
            intent: RequestIntent::Order,
            dosage_instruction,
        }
    }
}

#[derive(Serialize)]
struct MetaRepr {
    profile: [&'static str; 1],
}

#[derive(Serialize)]
struct CodeableConceptRepr<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct ReferenceRepr {
    display: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MedicationRequestRepr<'a> {
    resource_type: &'static str,
    meta: MetaRepr,
    status: RequestStatus,
    intent: RequestIntent,
    medication_codeable_concept: CodeableConceptRepr<'a>,
    subject: ReferenceRepr,
    dosage_instruction: &'a [DosageInstruction],
}

impl Serialize for MedicationRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MedicationRequestRepr {
            resource_type: RESOURCE_TYPE,
            meta: MetaRepr {
                profile: [MEDICATION_REQUEST_PROFILE],
            },
            status: self.status,
            intent: self.intent,
            medication_codeable_concept: CodeableConceptRepr {
                text: &self.medication,
            },
            subject: ReferenceRepr {
                display: ANONYMOUS_SUBJECT,
            },
            dosage_instruction: &self.dosage_instruction,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_envelope_serializes_fixed_metadata() {
        let request = MedicationRequest::new("Ibuprofen 400mg", Vec::new());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "resourceType": "MedicationRequest",
                "meta": { "profile": [MEDICATION_REQUEST_PROFILE] },
                "status": "active",
                "intent": "order",
                "medicationCodeableConcept": { "text": "Ibuprofen 400mg" },
                "subject": { "display": "Patient" },
                "dosageInstruction": []
            })
        );
    }
}
