//! Dosage instructions: one timing pattern plus one dose.

use serde::{Serialize, Serializer};

use crate::timing::{Repeat, TimingPattern};

/// Code system for dose units (BMP dosage unit codes).
pub const DOSE_UNIT_SYSTEM: &str = "https://fhir.kbv.de/CodeSystem/KBV_CS_SFHIR_BMP_DOSIEREINHEIT";

/// Extension carrying generated dosage text plus its algorithm.
pub const GENERATED_DOSAGE_EXTENSION: &str =
    "http://ig.fhir.de/igs/medication/StructureDefinition/GeneratedDosageInstructions";

/// Code system identifying dosage text algorithms.
pub const DOSAGE_TEXT_ALGORITHMS_SYSTEM: &str =
    "http://ig.fhir.de/igs/medication/CodeSystem/DosageTextAlgorithms";

/// Algorithm provenance attached to generated free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextAlgorithm {
    pub system: &'static str,
    pub version: &'static str,
    pub code: &'static str,
}

impl TextAlgorithm {
    /// The German dosage text generator, version 1.0.0.
    pub const GERMAN_TEXT_GENERATOR: TextAlgorithm = TextAlgorithm {
        system: DOSAGE_TEXT_ALGORITHMS_SYSTEM,
        version: "1.0.0",
        code: "GermanDosageTextGenerator",
    };
}

/// Amount of medication per administration.
#[derive(Debug, Clone, PartialEq)]
pub struct DoseQuantity {
    /// Dose magnitude.
    pub value: f64,
    /// Display label resolved from the unit code (may be empty).
    pub unit: String,
    /// Dose unit code, if one was given.
    pub code: Option<String>,
}

impl Serialize for DoseQuantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Repr<'a> {
            value: f64,
            #[serde(skip_serializing_if = "str::is_empty")]
            unit: &'a str,
            system: &'static str,
            #[serde(skip_serializing_if = "Option::is_none")]
            code: Option<&'a str>,
        }

        Repr {
            value: self.value,
            unit: &self.unit,
            system: DOSE_UNIT_SYSTEM,
            code: self.code.as_deref(),
        }
        .serialize(serializer)
    }
}

/// One timing pattern plus one dose, the atomic unit of a compiled schedule.
///
/// Free-text instructions carry no dose; every structured pattern carries
/// exactly one.
#[derive(Debug, Clone, PartialEq)]
pub struct DosageInstruction {
    pub timing: TimingPattern,
    pub dose: Option<DoseQuantity>,
}

impl DosageInstruction {
    /// Create a structured instruction.
    pub fn scheduled(timing: TimingPattern, dose: DoseQuantity) -> Self {
        Self {
            timing,
            dose: Some(dose),
        }
    }

    /// Create a free-text instruction.
    pub fn free_text(text: impl Into<String>, generated_by: Option<TextAlgorithm>) -> Self {
        Self {
            timing: TimingPattern::FreeText {
                text: text.into(),
                generated_by,
            },
            dose: None,
        }
    }

    /// Verbatim text for free-text instructions.
    pub fn free_text_value(&self) -> Option<&str> {
        match &self.timing {
            TimingPattern::FreeText { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

#[derive(Serialize)]
struct TimingRepr<'a> {
    repeat: Repeat<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DoseAndRateRepr<'a> {
    dose_quantity: &'a DoseQuantity,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtensionRepr<'a> {
    url: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extension: Vec<ExtensionRepr<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_string: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value_coding: Option<&'a TextAlgorithm>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DosageRepr<'a> {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extension: Vec<ExtensionRepr<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timing: Option<TimingRepr<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dose_and_rate: Vec<DoseAndRateRepr<'a>>,
}

fn generated_text_extension<'a>(text: &'a str, algorithm: &'a TextAlgorithm) -> ExtensionRepr<'a> {
    ExtensionRepr {
        url: GENERATED_DOSAGE_EXTENSION,
        extension: vec![
            ExtensionRepr {
                url: "text",
                extension: Vec::new(),
                value_string: Some(text),
                value_coding: None,
            },
            ExtensionRepr {
                url: "algorithm",
                extension: Vec::new(),
                value_string: None,
                value_coding: Some(algorithm),
            },
        ],
        value_string: None,
        value_coding: None,
    }
}

impl Serialize for DosageInstruction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = match &self.timing {
            TimingPattern::FreeText { text, generated_by } => DosageRepr {
                extension: generated_by
                    .iter()
                    .map(|algorithm| generated_text_extension(text, algorithm))
                    .collect(),
                text: Some(text.as_str()),
                timing: None,
                dose_and_rate: Vec::new(),
            },
            timing => DosageRepr {
                extension: Vec::new(),
                text: None,
                timing: timing.repeat().map(|repeat| TimingRepr { repeat }),
                dose_and_rate: self
                    .dose
                    .iter()
                    .map(|dose_quantity| DoseAndRateRepr { dose_quantity })
                    .collect(),
            },
        };
        repr.serialize(serializer)
    }
}
