//! Library side of the `dosage` command-line tool.

pub mod logging;
pub mod pipeline;
