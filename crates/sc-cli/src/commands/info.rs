//! Info command explaining sleep cycles.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use sc_core::{CycleCount, FallAsleepBuffer, SLEEP_CYCLE_MINUTES, format_duration};

/// What each supported cycle count is good for.
const fn describe(cycles: CycleCount) -> &'static str {
    match cycles.get() {
        6 => "most refreshing",
        5 => "recommended",
        _ => "minimum",
    }
}

/// Formats the explanation of sleep cycles for the given buffer.
pub fn format_info(buffer: FallAsleepBuffer) -> String {
    let mut output = String::new();

    writeln!(output, "About sleep cycles").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Your sleep consists of repeated ~{SLEEP_CYCLE_MINUTES}-minute cycles, each containing:"
    )
    .unwrap();
    writeln!(output, "  - Light sleep").unwrap();
    writeln!(output, "  - Deep sleep").unwrap();
    writeln!(output, "  - REM sleep").unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Waking up between cycles (not in the middle of one) means you feel rested."
    )
    .unwrap();
    writeln!(output).unwrap();
    writeln!(
        output,
        "Ideal sleep = {}-{} full cycles",
        CycleCount::MIN,
        CycleCount::MAX
    )
    .unwrap();
    for cycles in CycleCount::ALL.iter().rev() {
        writeln!(
            output,
            "  {cycles} cycles = {:<6} ({})",
            format_duration(cycles.sleep_minutes()),
            describe(*cycles)
        )
        .unwrap();
    }
    writeln!(output).unwrap();
    writeln!(
        output,
        "It takes about {} minutes to fall asleep, so that is built into every calculation.",
        buffer.minutes()
    )
    .unwrap();

    output
}

/// Runs the info command.
pub fn run<W: Write>(writer: &mut W, buffer: FallAsleepBuffer) -> Result<()> {
    write!(writer, "{}", format_info(buffer))?;
    Ok(())
}
