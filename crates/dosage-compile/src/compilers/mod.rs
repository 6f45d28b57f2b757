//! Schedule compilers, one per input schema.
//!
//! Each compiler takes its typed input, the raw duration and a
//! [`CompileContext`](crate::CompileContext), and returns the list of
//! dosage instructions. Envelope construction lives in
//! [`assembler`](crate::assembler).
//!
//! | compiler                   | grouping         | fails on |
//! |----------------------------|------------------|----------|
//! | [`compile_free_text`]      | none             | never |
//! | [`compile_named_slots`]    | by dose          | never |
//! | [`compile_clock_times`]    | by dose          | shape mismatch, duplicate time |
//! | [`compile_weekdays`]       | by dose          | never |
//! | [`compile_interval`]       | single dose      | never |
//! | [`compile_interval_at_time`] | none           | unknown slot |
//! | [`compile_weekday_based`]  | none             | missing/conflicting time, no days |

pub mod clock_times;
pub mod free_text;
pub mod interval;
pub mod interval_at_time;
pub mod named_slots;
pub mod weekday_based;
pub mod weekdays;

pub use clock_times::compile_clock_times;
pub use free_text::compile_free_text;
pub use interval::compile_interval;
pub use interval_at_time::compile_interval_at_time;
pub use named_slots::compile_named_slots;
pub use weekday_based::compile_weekday_based;
pub use weekdays::compile_weekdays;
