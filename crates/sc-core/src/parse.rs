//! Free-form time-of-day parsing.
//!
//! Input is trimmed and then tried against an ordered list of formats. The
//! first format whose shape and value ranges both match wins:
//!
//! 1. 12-hour with minutes: `"7:30 AM"`, `"7:30pm"`
//! 2. 24-hour: `"22:00"`, `"07:30"`, `"7:30"`
//! 3. Bare 12-hour hour: `"11 pm"`, `"11PM"`

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::clock::ClockTime;
use crate::error::ParseError;

static TWELVE_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*([ap])m$").unwrap());

static TWENTY_FOUR_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap());

static BARE_HOUR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})\s*([ap])m$").unwrap());

/// Accepted input formats, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeFormat {
    TwelveHour,
    TwentyFourHour,
    BareHour,
}

impl TimeFormat {
    const ORDERED: [Self; 3] = [Self::TwelveHour, Self::TwentyFourHour, Self::BareHour];

    fn pattern(self) -> &'static Regex {
        match self {
            Self::TwelveHour => &*TWELVE_HOUR_RE,
            Self::TwentyFourHour => &*TWENTY_FOUR_HOUR_RE,
            Self::BareHour => &*BARE_HOUR_RE,
        }
    }

    fn resolve(self, caps: &Captures<'_>) -> Option<ClockTime> {
        match self {
            Self::TwelveHour => {
                let hour = number(caps, 1)?;
                let minute = number(caps, 2)?;
                let meridiem = Meridiem::from_letter(&caps[3])?;
                ClockTime::new(meridiem.to_24_hour(hour)?, minute).ok()
            }
            Self::TwentyFourHour => ClockTime::new(number(caps, 1)?, number(caps, 2)?).ok(),
            Self::BareHour => {
                let hour = number(caps, 1)?;
                let meridiem = Meridiem::from_letter(&caps[2])?;
                ClockTime::new(meridiem.to_24_hour(hour)?, 0).ok()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn from_letter(letter: &str) -> Option<Self> {
        match letter {
            "a" | "A" => Some(Self::Am),
            "p" | "P" => Some(Self::Pm),
            _ => None,
        }
    }

    /// Maps a 12-hour clock hour (1-12) to 0-23.
    const fn to_24_hour(self, hour: u32) -> Option<u32> {
        match (self, hour) {
            (Self::Am, 12) => Some(0),
            (Self::Pm, 12) => Some(12),
            (Self::Am, 1..=11) => Some(hour),
            (Self::Pm, 1..=11) => Some(hour + 12),
            _ => None,
        }
    }
}

fn number(caps: &Captures<'_>, group: usize) -> Option<u32> {
    caps.get(group)?.as_str().parse().ok()
}

/// Parses a time of day such as `"22:00"`, `"7:30 am"` or `"11PM"`.
///
/// Minutes default to 0 when omitted. `"12 AM"` is midnight and `"12 PM"` is
/// noon. Anything else, including out-of-range values like `"25:00"`, is a
/// [`ParseError`] carrying the untrimmed input.
pub fn parse_time(text: &str) -> Result<ClockTime, ParseError> {
    let trimmed = text.trim();

    let parsed = TimeFormat::ORDERED.iter().find_map(|format| {
        let caps = format.pattern().captures(trimmed)?;
        format.resolve(&caps)
    });

    match parsed {
        Some(time) => {
            tracing::trace!(input = text, %time, "parsed time of day");
            Ok(time)
        }
        None => Err(ParseError::unrecognized(text)),
    }
}
