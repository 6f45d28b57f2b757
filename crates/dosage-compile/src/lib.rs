//! Dosage schedule compilation.
//!
//! Turns structured schedule input (one of seven schemas) into canonical
//! [`DosageInstruction`](dosage_model::DosageInstruction)s and wraps them in a
//! [`MedicationRequest`](dosage_model::MedicationRequest).
//!
//! Pipeline per request:
//!
//! 1. fill in the default dose unit
//! 2. validate and normalize the schema input
//! 3. group time points by dose (slot, clock time and weekday schemas)
//! 4. attach the duration bound to every instruction
//! 5. assemble the envelope
//!
//! All compilers are pure functions of their input and a [`CompileContext`];
//! the context borrows the unit registry and configuration and can be shared
//! across threads.
//!
//! # Example
//!
//! ```
//! use dosage_compile::{CompileContext, CompilerConfig, ScheduleRequest};
//! use dosage_units::UnitRegistry;
//!
//! let units = UnitRegistry::embedded().expect("embedded table");
//! let config = CompilerConfig::default();
//! let ctx = CompileContext::new(&units, &config);
//!
//! let request: ScheduleRequest = serde_json::from_str(
//!     r#"{ "schema": "timeofday", "times": ["08:00", "20:00"], "doses": [1, 1] }"#,
//! )
//! .expect("valid request");
//!
//! let resource = request.to_medication_request(&ctx).expect("valid schedule");
//! assert_eq!(resource.dosage_instruction.len(), 1);
//! ```

pub mod assembler;
pub mod compilers;
pub mod config;
pub mod context;
pub mod error;
pub mod grouping;
pub mod normalization;
pub mod request;
pub mod text;
pub mod types;

pub use assembler::assemble;
pub use compilers::{
    compile_clock_times, compile_free_text, compile_interval, compile_interval_at_time,
    compile_named_slots, compile_weekday_based, compile_weekdays,
};
pub use config::{CompilerConfig, FreeTextProvenance};
pub use context::CompileContext;
pub use error::{ConfigError, Result, ScheduleError};
pub use grouping::{DoseGroup, group_by_dose};
pub use normalization::{duration_bound, normalize_clock_time};
pub use request::{SCHEMAS, Schedule, ScheduleRequest};
pub use text::{DosageTextRenderer, FreeTextRenderer, SummaryRenderer, render_texts};
pub use types::{
    ClockTimesInput, Dose, DurationInput, IntervalAtTimeInput, IntervalInput, NamedSlotsInput,
    TimedDose, WeekdayBasedEntry, WeekdayDose,
};
