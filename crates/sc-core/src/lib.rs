//! Core time engine for the sleep cycle calculator.
//!
//! This crate contains the pure logic for:
//! - Parsing: free-form time-of-day text into a [`ClockTime`]
//! - Calculation: bedtimes and wake-up times aligned to 90-minute cycles
//! - Formatting: 12-hour clock times and duration labels
//!
//! Nothing here reads the system clock or performs I/O; "sleep now" is served
//! by passing the current time to [`compute_wake_times`].

mod calculator;
mod clock;
mod error;
mod format;
mod parse;

pub use calculator::{
    Candidate, CycleCount, Direction, FallAsleepBuffer, SLEEP_CYCLE_MINUTES, SleepCalculator,
    compute_bedtimes, compute_wake_times,
};
pub use clock::ClockTime;
pub use error::{InvalidCycleCount, InvalidTimeError, ParseError};
pub use format::{format_clock_time, format_duration};
pub use parse::parse_time;
