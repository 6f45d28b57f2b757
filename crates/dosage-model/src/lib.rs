//! Canonical dosage schedule types.
//!
//! A compiled schedule is an ordered list of [`DosageInstruction`]s, each a
//! [`TimingPattern`] plus one [`DoseQuantity`], wrapped in a
//! [`MedicationRequest`] envelope. Every type serializes to the JSON shape of
//! the FHIR `MedicationRequest.dosageInstruction` element.
//!
//! # Module Organization
//!
//! - [`enums`]: weekdays, named daily slots, units of time
//! - [`timing`]: timing patterns and duration bounds
//! - [`instruction`]: dose quantities and dosage instructions
//! - [`resource`]: the medication request envelope

pub mod enums;
pub mod instruction;
pub mod resource;
pub mod timing;

pub use enums::{NamedSlot, UnitOfTime, Weekday};
pub use instruction::{DosageInstruction, DoseQuantity, TextAlgorithm};
pub use resource::{MedicationRequest, RequestIntent, RequestStatus};
pub use timing::{DurationBound, TimeSpecifier, TimingPattern};
