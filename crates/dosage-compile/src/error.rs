//! Error types for schedule compilation.

use std::path::PathBuf;
use thiserror::Error;

/// Validation failures raised by the schedule compilers.
///
/// Every variant is raised before any grouping or assembly happens, so a
/// failed compilation never yields partial output. An unusable duration has
/// no variant: it drops the bound instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ScheduleError {
    /// Parallel input sequences differ in length.
    #[error("{field} has {actual} entries but {expected} were expected")]
    ShapeMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The same clock time appears twice in one schedule.
    #[error("duplicate clock time {time}")]
    DuplicateTime { time: String },

    /// Entry has neither a clock time nor a named slot.
    #[error("entry {index} has neither a time nor a slot")]
    MissingTimeSpecifier { index: usize },

    /// Entry has both a clock time and a named slot.
    #[error("entry {index} has both a time and a slot")]
    ConflictingTimeSpecifier { index: usize },

    /// Time specifier is neither a clock time nor a known slot code.
    #[error("entry {index} has unknown time specifier '{value}'")]
    UnknownTimeSpecifier { index: usize, value: String },

    /// Weekday entry lists no days.
    #[error("entry {index} lists no weekdays")]
    EmptyDays { index: usize },
}

/// Result type for schedule compilation.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that can occur when loading compiler configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
