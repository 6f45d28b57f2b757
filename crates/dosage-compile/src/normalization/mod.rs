//! Input normalization shared by the schedule compilers.
//!
//! - [`duration`]: raw duration → optional bound
//! - [`time`]: clock times and time specifiers

pub mod duration;
pub mod time;

pub use duration::{bound_from_parts, duration_bound};
pub use time::{normalize_clock_time, parse_time_specifier};
