//! Sleep-cycle arithmetic.
//!
//! A night of sleep is modeled as a fall-asleep buffer followed by a whole
//! number of 90-minute cycles. Given one end of that span the calculator
//! produces the other end for 4, 5 and 6 cycles.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::InvalidCycleCount;
use crate::format::format_duration;

/// Length of one sleep cycle in minutes.
pub const SLEEP_CYCLE_MINUTES: u32 = 90;

/// Number of full sleep cycles in a recommendation (4, 5 or 6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CycleCount(u8);

impl CycleCount {
    pub const MIN: Self = Self(4);
    pub const MAX: Self = Self(6);

    /// Every supported count, shortest sleep first.
    pub const ALL: [Self; 3] = [Self(4), Self(5), Self(6)];

    pub const fn new(count: u8) -> Result<Self, InvalidCycleCount> {
        if count < Self::MIN.0 || count > Self::MAX.0 {
            return Err(InvalidCycleCount(count));
        }
        Ok(Self(count))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Sleep time covered by the cycles alone, without the buffer.
    #[must_use]
    pub fn sleep_minutes(self) -> u32 {
        u32::from(self.0) * SLEEP_CYCLE_MINUTES
    }
}

impl TryFrom<u8> for CycleCount {
    type Error = InvalidCycleCount;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CycleCount> for u8 {
    fn from(c: CycleCount) -> Self {
        c.0
    }
}

impl fmt::Display for CycleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time assumed to pass between lying down and falling asleep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FallAsleepBuffer(u16);

impl FallAsleepBuffer {
    /// Average time to fall asleep.
    pub const DEFAULT: Self = Self(14);

    #[must_use]
    pub const fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    #[must_use]
    pub const fn minutes(self) -> u16 {
        self.0
    }
}

impl Default for FallAsleepBuffer {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which end of the night the anchor time marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Anchor is a bedtime; candidates are wake-up times.
    WakeFromBedtime,
    /// Anchor is a wake-up time; candidates are bedtimes.
    BedtimeForWake,
}

/// One recommended time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub cycles: CycleCount,
    pub time: ClockTime,
    /// Buffer plus cycles, in minutes.
    pub duration_minutes: u32,
}

impl Candidate {
    /// Total time in bed, e.g. `"7h 44m"`.
    pub fn duration_label(&self) -> String {
        format_duration(self.duration_minutes)
    }
}

/// Stateless calculator parameterized by the fall-asleep buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SleepCalculator {
    buffer: FallAsleepBuffer,
}

impl SleepCalculator {
    #[must_use]
    pub const fn new(buffer: FallAsleepBuffer) -> Self {
        Self { buffer }
    }

    #[must_use]
    pub const fn buffer(&self) -> FallAsleepBuffer {
        self.buffer
    }

    /// Total minutes in bed for `cycles`.
    #[must_use]
    pub fn total_minutes(&self, cycles: CycleCount) -> u32 {
        u32::from(self.buffer.0) + cycles.sleep_minutes()
    }

    /// Candidate for a single cycle count.
    #[must_use]
    pub fn candidate(
        &self,
        direction: Direction,
        anchor: ClockTime,
        cycles: CycleCount,
    ) -> Candidate {
        let duration_minutes = self.total_minutes(cycles);
        let offset = i64::from(duration_minutes);
        let time = match direction {
            Direction::WakeFromBedtime => anchor.wrapping_add_minutes(offset),
            Direction::BedtimeForWake => anchor.wrapping_add_minutes(-offset),
        };
        Candidate {
            cycles,
            time,
            duration_minutes,
        }
    }

    /// Candidates for 4, 5 and 6 cycles, in that order.
    ///
    /// The order follows sleep duration, not wall-clock time; results that
    /// cross midnight are left where they fall.
    pub fn candidates(&self, direction: Direction, anchor: ClockTime) -> Vec<Candidate> {
        let candidates: Vec<Candidate> = CycleCount::ALL
            .iter()
            .map(|&cycles| self.candidate(direction, anchor, cycles))
            .collect();
        tracing::debug!(
            ?direction,
            %anchor,
            buffer_minutes = self.buffer.0,
            count = candidates.len(),
            "computed sleep candidates"
        );
        candidates
    }

    /// Wake-up times for someone going to bed at `bedtime`.
    pub fn wake_times(&self, bedtime: ClockTime) -> Vec<Candidate> {
        self.candidates(Direction::WakeFromBedtime, bedtime)
    }

    /// Bedtimes for someone who wants to wake at `wake_time`.
    pub fn bedtimes(&self, wake_time: ClockTime) -> Vec<Candidate> {
        self.candidates(Direction::BedtimeForWake, wake_time)
    }

    /// Wake-up times for going to bed right now. `now` comes from the caller.
    pub fn sleep_now(&self, now: ClockTime) -> Vec<Candidate> {
        self.wake_times(now)
    }
}

/// Wake-up times for `bedtime` with the default 14-minute buffer.
pub fn compute_wake_times(bedtime: ClockTime) -> Vec<Candidate> {
    SleepCalculator::default().wake_times(bedtime)
}

/// Bedtimes for `wake_time` with the default 14-minute buffer.
pub fn compute_bedtimes(wake_time: ClockTime) -> Vec<Candidate> {
    SleepCalculator::default().bedtimes(wake_time)
}
