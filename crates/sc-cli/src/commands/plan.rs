//! Wake and bed commands: one table of recommendations for a given time.

use std::io::Write;

use anyhow::Result;
use sc_core::{Direction, SleepCalculator};

use super::util::{Plan, parse_time_arg, write_plans};

/// Runs `wake` (bedtimes for a wake-up time) or `bed` (wake-up times for a
/// bedtime), depending on `direction`.
pub fn run<W: Write>(
    writer: &mut W,
    calculator: &SleepCalculator,
    direction: Direction,
    time: &str,
    json: bool,
) -> Result<()> {
    let anchor = parse_time_arg(time)?;
    let plan = Plan::compute(calculator, direction, anchor);
    write_plans(writer, &[plan], json)
}
