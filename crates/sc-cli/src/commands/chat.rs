//! Chat command: runs an interactive session over line-based I/O.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use sc_core::{ClockTime, SleepCalculator};

use crate::session::Session;

const PROMPT: &str = "> ";

/// Runs the chat command until the user quits or input ends.
///
/// `clock` is consulted for every line so "now" reflects when it was typed.
pub fn run<R, W, F>(reader: R, writer: &mut W, calculator: SleepCalculator, clock: F) -> Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> ClockTime,
{
    let mut session = Session::new(calculator);

    writeln!(writer, "{}", Session::greeting())?;
    prompt(writer)?;

    for line in reader.lines() {
        let line = line.context("failed to read input")?;
        let reply = session.handle(&line, clock());

        writeln!(writer, "{}", reply.text)?;
        if reply.finished {
            return Ok(());
        }
        prompt(writer)?;
    }

    writeln!(writer)?;
    Ok(())
}

fn prompt<W: Write>(writer: &mut W) -> Result<()> {
    write!(writer, "{PROMPT}")?;
    writer.flush().context("failed to flush output")
}
