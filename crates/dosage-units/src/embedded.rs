//! Embedded unit table.
//!
//! The default table is compiled into the binary with `include_str!()` so
//! compilation never depends on a file being present at runtime.

/// Name reported as the source of the embedded table.
pub const DEFAULT_UNITS_NAME: &str = "dosage_units.csv";

/// Default dose unit table (`code,label`).
pub const DEFAULT_UNITS_CSV: &str = include_str!("../data/dosage_units.csv");
