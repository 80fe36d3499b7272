//! Now command: wake-up times for going to sleep immediately.

use std::io::Write;

use anyhow::Result;
use sc_core::{Direction, SleepCalculator};

use super::util::{Plan, local_now, parse_time_arg, write_plans};

/// Runs the now command. `at` replaces the local clock when given.
pub fn run<W: Write>(
    writer: &mut W,
    calculator: &SleepCalculator,
    at: Option<&str>,
    json: bool,
) -> Result<()> {
    let now = match at {
        Some(time) => parse_time_arg(time)?,
        None => local_now(),
    };
    tracing::debug!(%now, "sleeping now");

    let plan = Plan::compute(calculator, Direction::WakeFromBedtime, now);
    write_plans(writer, &[plan], json)
}
