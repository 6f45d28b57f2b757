//! Dose unit code → display label lookup.
//!
//! Provides the read-only [`UnitRegistry`] that compilers consult through the
//! [`UnitResolver`] trait. The registry is loaded once, either from the
//! embedded default table or from a caller-supplied CSV file, and injected
//! into compilation explicitly.
//!
//! # Example
//!
//! ```
//! use dosage_units::{UnitRegistry, UnitResolver};
//!
//! let units = UnitRegistry::embedded().expect("embedded table");
//! assert_eq!(units.resolve_label(Some("tab")), "tablet(s)");
//! assert_eq!(units.resolve_label(Some("unknown")), "unknown");
//! assert_eq!(units.resolve_label(None), "");
//! ```

pub mod embedded;
pub mod error;
pub mod registry;

pub use error::{Result, UnitsError};
pub use registry::{UnitRegistry, UnitResolver};
