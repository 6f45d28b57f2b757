//! Compilation context: the unit table and configuration, passed explicitly
//! to every compiler.

use std::fmt;

use dosage_model::{DoseQuantity, TextAlgorithm};
use dosage_units::UnitResolver;

use crate::config::{CompilerConfig, FreeTextProvenance};
use crate::types::Dose;

/// Read-only inputs shared by all compilers.
///
/// Holds borrowed references only, so a context is cheap to copy and can be
/// used from many threads at once.
#[derive(Clone, Copy)]
pub struct CompileContext<'a> {
    units: &'a dyn UnitResolver,
    config: &'a CompilerConfig,
}

impl<'a> CompileContext<'a> {
    pub fn new(units: &'a dyn UnitResolver, config: &'a CompilerConfig) -> Self {
        Self { units, config }
    }

    pub fn config(&self) -> &'a CompilerConfig {
        self.config
    }

    /// Canonical dose quantity with the unit label resolved.
    pub fn dose_quantity(&self, dose: &Dose) -> DoseQuantity {
        let code = dose.unit_code.as_deref();
        DoseQuantity {
            value: dose.value,
            unit: self.units.resolve_label(code),
            code: code.map(str::to_string),
        }
    }

    /// Provenance attached to free text under the configured mode.
    pub fn free_text_algorithm(&self) -> Option<TextAlgorithm> {
        match self.config.free_text_provenance {
            FreeTextProvenance::Attach => Some(TextAlgorithm::GERMAN_TEXT_GENERATOR),
            FreeTextProvenance::Omit => None,
        }
    }
}

impl fmt::Debug for CompileContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompileContext")
            .field("config", self.config)
            .finish_non_exhaustive()
    }
}
