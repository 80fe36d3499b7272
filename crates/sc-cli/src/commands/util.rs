//! Shared utilities for CLI commands: time arguments and plan rendering.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::Local;
use sc_core::{Candidate, ClockTime, CycleCount, Direction, SleepCalculator, parse_time};
use serde::Serialize;

/// Formats listed when a time cannot be parsed.
pub const ACCEPTED_FORMATS: &str = "7:30 AM, 7:30am, 11 pm, 07:30 or 22:00";

const SEPARATOR: &str = "────────────────────";

/// Parse a time-of-day argument, keeping the raw input in the error.
pub fn parse_time_arg(input: &str) -> Result<ClockTime> {
    parse_time(input)
        .with_context(|| format!("invalid time {input:?}. Try formats like {ACCEPTED_FORMATS}"))
}

/// Current local wall-clock time.
pub fn local_now() -> ClockTime {
    ClockTime::from(Local::now().time())
}

/// One computed table of recommendations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub direction: Direction,
    pub anchor: ClockTime,
    pub fall_asleep_minutes: u16,
    pub candidates: Vec<Candidate>,
}

impl Plan {
    pub fn compute(calculator: &SleepCalculator, direction: Direction, anchor: ClockTime) -> Self {
        Self {
            direction,
            anchor,
            fall_asleep_minutes: calculator.buffer().minutes(),
            candidates: calculator.candidates(direction, anchor),
        }
    }
}

// ========== Text Output ==========

fn format_section(output: &mut String, plan: &Plan) {
    let (anchor_label, heading) = match plan.direction {
        Direction::BedtimeForWake => ("Wake-up time", "Recommended bedtimes (fall asleep at):"),
        Direction::WakeFromBedtime => ("Bedtime", "Recommended wake-up times:"),
    };

    writeln!(output, "{anchor_label}: {}", plan.anchor).unwrap();
    writeln!(output).unwrap();
    writeln!(output, "{heading}").unwrap();
    for candidate in &plan.candidates {
        writeln!(
            output,
            "  {} cycles  {:>8}  ({})",
            candidate.cycles,
            candidate.time,
            candidate.duration_label()
        )
        .unwrap();
    }
}

/// Formats one or more plans as human-readable text.
pub fn format_plans(plans: &[Plan]) -> String {
    let mut output = String::new();

    for (i, plan) in plans.iter().enumerate() {
        if i > 0 {
            writeln!(output).unwrap();
            writeln!(output, "{SEPARATOR}").unwrap();
            writeln!(output).unwrap();
        }
        format_section(&mut output, plan);
    }

    if let Some(plan) = plans.first() {
        writeln!(output).unwrap();
        writeln!(output, "Each cycle lasts ~90 minutes.").unwrap();
        writeln!(
            output,
            "+{} min to fall asleep is already included.",
            plan.fall_asleep_minutes
        )
        .unwrap();
    }

    output
}

// ========== JSON Output ==========

#[derive(Debug, Serialize)]
struct JsonCandidate {
    cycles: CycleCount,
    time: ClockTime,
    display: String,
    duration_minutes: u32,
    duration: String,
}

#[derive(Debug, Serialize)]
struct JsonPlan {
    direction: Direction,
    anchor: ClockTime,
    fall_asleep_minutes: u16,
    candidates: Vec<JsonCandidate>,
}

impl From<&Plan> for JsonPlan {
    fn from(plan: &Plan) -> Self {
        Self {
            direction: plan.direction,
            anchor: plan.anchor,
            fall_asleep_minutes: plan.fall_asleep_minutes,
            candidates: plan
                .candidates
                .iter()
                .map(|c| JsonCandidate {
                    cycles: c.cycles,
                    time: c.time,
                    display: c.time.to_string(),
                    duration_minutes: c.duration_minutes,
                    duration: c.duration_label(),
                })
                .collect(),
        }
    }
}

/// Formats plans as JSON: an object for a single plan, an array otherwise.
pub fn format_plans_json(plans: &[Plan]) -> Result<String> {
    let output = match plans {
        [plan] => serde_json::to_string_pretty(&JsonPlan::from(plan))?,
        _ => serde_json::to_string_pretty(&plans.iter().map(JsonPlan::from).collect::<Vec<_>>())?,
    };
    Ok(output)
}

/// Writes plans to `writer` in the requested format.
pub fn write_plans<W: Write>(writer: &mut W, plans: &[Plan], json: bool) -> Result<()> {
    if json {
        writeln!(writer, "{}", format_plans_json(plans)?)?;
    } else {
        write!(writer, "{}", format_plans(plans))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;

    fn t(hour: u32, minute: u32) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    #[test]
    fn test_parse_time_arg_reports_input() {
        let err = parse_time_arg("25:00").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid time \"25:00\". Try formats like 7:30 AM, 7:30am, 11 pm, 07:30 or 22:00"
        );
        assert_eq!(
            err.root_cause().to_string(),
            "unrecognized time format: \"25:00\""
        );
    }

    #[test]
    fn test_plan_uses_calculator_buffer() {
        let calc = SleepCalculator::new(sc_core::FallAsleepBuffer::from_minutes(20));
        let plan = Plan::compute(&calc, Direction::WakeFromBedtime, t(22, 0));
        assert_eq!(plan.fall_asleep_minutes, 20);
        assert_eq!(plan.candidates[0].time, t(4, 20));
    }

    #[test]
    fn test_format_bedtimes() {
        let plan = Plan::compute(&SleepCalculator::default(), Direction::BedtimeForWake, t(7, 0));
        assert_snapshot!(format_plans(&[plan]), @r"
        Wake-up time: 7:00 AM

        Recommended bedtimes (fall asleep at):
          4 cycles  12:46 AM  (6h 14m)
          5 cycles  11:16 PM  (7h 44m)
          6 cycles   9:46 PM  (9h 14m)

        Each cycle lasts ~90 minutes.
        +14 min to fall asleep is already included.
        ");
    }

    #[test]
    fn test_format_both_directions() {
        let calc = SleepCalculator::default();
        let plans = [
            Plan::compute(&calc, Direction::BedtimeForWake, t(23, 0)),
            Plan::compute(&calc, Direction::WakeFromBedtime, t(23, 0)),
        ];
        assert_snapshot!(format_plans(&plans), @r"
        Wake-up time: 11:00 PM

        Recommended bedtimes (fall asleep at):
          4 cycles   4:46 PM  (6h 14m)
          5 cycles   3:16 PM  (7h 44m)
          6 cycles   1:46 PM  (9h 14m)

        ────────────────────

        Bedtime: 11:00 PM

        Recommended wake-up times:
          4 cycles   5:14 AM  (6h 14m)
          5 cycles   6:44 AM  (7h 44m)
          6 cycles   8:14 AM  (9h 14m)

        Each cycle lasts ~90 minutes.
        +14 min to fall asleep is already included.
        ");
    }

    #[test]
    fn test_format_json_single_plan() {
        let plan = Plan::compute(&SleepCalculator::default(), Direction::WakeFromBedtime, t(23, 0));
        let json: serde_json::Value =
            serde_json::from_str(&format_plans_json(&[plan]).unwrap()).unwrap();

        assert_eq!(json["direction"], "wake_from_bedtime");
        assert_eq!(json["anchor"], "23:00");
        assert_eq!(json["fall_asleep_minutes"], 14);
        assert_eq!(
            json["candidates"][0],
            serde_json::json!({
                "cycles": 4,
                "time": "05:14",
                "display": "5:14 AM",
                "duration_minutes": 374,
                "duration": "6h 14m"
            })
        );
    }

    #[test]
    fn test_format_json_multiple_plans_is_array() {
        let calc = SleepCalculator::default();
        let plans = [
            Plan::compute(&calc, Direction::BedtimeForWake, t(6, 30)),
            Plan::compute(&calc, Direction::WakeFromBedtime, t(6, 30)),
        ];
        let json: serde_json::Value =
            serde_json::from_str(&format_plans_json(&plans).unwrap()).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["direction"], "bedtime_for_wake");
        assert_eq!(array[1]["direction"], "wake_from_bedtime");
    }
}
