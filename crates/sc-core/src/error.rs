//! Error types returned by the time engine.

use thiserror::Error;

/// Time-of-day text that matched none of the accepted formats.
///
/// Carries the raw input so callers can echo it back when re-prompting.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}: {input:?}")]
pub struct ParseError {
    pub reason: &'static str,
    pub input: String,
}

impl ParseError {
    pub(crate) fn unrecognized(input: &str) -> Self {
        Self {
            reason: "unrecognized time format",
            input: input.to_string(),
        }
    }
}

/// An hour or minute outside the wall-clock range.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid time of day {hour}:{minute:02} (hour must be 0-23, minute 0-59)")]
pub struct InvalidTimeError {
    pub hour: u32,
    pub minute: u32,
}

/// A cycle count outside the supported 4-6 range.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cycle count must be between 4 and 6, got {0}")]
pub struct InvalidCycleCount(pub u8);
