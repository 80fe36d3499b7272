//! Calc command: bedtimes and wake-up times around the same time.

use std::io::Write;

use anyhow::Result;
use sc_core::{ClockTime, Direction, SleepCalculator};

use super::util::{Plan, parse_time_arg, write_plans};

/// Runs the calc command.
pub fn run<W: Write>(
    writer: &mut W,
    calculator: &SleepCalculator,
    time: &str,
    json: bool,
) -> Result<()> {
    let anchor = parse_time_arg(time)?;
    write_plans(writer, &both_plans(calculator, anchor), json)
}

/// Bedtimes ending at `anchor` followed by wake-up times starting from it.
pub fn both_plans(calculator: &SleepCalculator, anchor: ClockTime) -> [Plan; 2] {
    [
        Plan::compute(calculator, Direction::BedtimeForWake, anchor),
        Plan::compute(calculator, Direction::WakeFromBedtime, anchor),
    ]
}
