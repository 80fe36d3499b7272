//! Interactive session: a small state machine over lines of user input.
//!
//! The session never touches stdin/stdout or the system clock. Callers feed
//! it one line at a time together with the current time and print the reply.

use sc_core::{ClockTime, Direction, SleepCalculator, parse_time};

use crate::commands::calc::both_plans;
use crate::commands::info::format_info;
use crate::commands::util::{ACCEPTED_FORMATS, Plan, format_plans};

const MENU: &str = "\
What would you like to do?
  1) wake  - I want to wake up at...
  2) bed   - I'm going to bed at...
  3) now   - Sleep now
  4) info  - About sleep cycles
  q) quit";

/// Which time the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeKind {
    /// A desired wake-up time; the answer is a list of bedtimes.
    WakeUp,
    /// A planned bedtime; the answer is a list of wake-up times.
    Bedtime,
}

impl TimeKind {
    const fn direction(self) -> Direction {
        match self {
            Self::WakeUp => Direction::BedtimeForWake,
            Self::Bedtime => Direction::WakeFromBedtime,
        }
    }

    const fn prompt(self) -> &'static str {
        match self {
            Self::WakeUp => "What time do you want to wake up?\nExamples: 7:00 AM, 06:30, 7:30 am",
            Self::Bedtime => {
                "What time are you planning to go to bed?\nExamples: 10:30 PM, 22:30, 11 pm"
            }
        }
    }
}

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingMode,
    AwaitingTime(TimeKind),
    ShowingResult,
}

/// Text to show the user after one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// The user asked to leave.
    pub finished: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finished: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    state: State,
    calculator: SleepCalculator,
}

impl Session {
    pub const fn new(calculator: SleepCalculator) -> Self {
        Self {
            state: State::AwaitingMode,
            calculator,
        }
    }

    pub const fn state(&self) -> State {
        self.state
    }

    /// Opening message with the menu.
    pub fn greeting() -> String {
        format!(
            "Welcome to the sleep calculator!\n\
             I use 90-minute sleep cycles to help you wake up feeling refreshed.\n\n{MENU}"
        )
    }

    /// Handles one line of input. `now` serves the "sleep now" option.
    pub fn handle(&mut self, input: &str, now: ClockTime) -> Reply {
        let reply = match self.state {
            State::AwaitingTime(kind) => self.handle_time(kind, input),
            State::AwaitingMode | State::ShowingResult => self.handle_menu(input, now),
        };
        tracing::debug!(state = ?self.state, "session transition");
        reply
    }

    fn handle_time(&mut self, kind: TimeKind, input: &str) -> Reply {
        if input.trim().eq_ignore_ascii_case("cancel") {
            self.state = State::AwaitingMode;
            return Reply::say(format!("Cancelled.\n\n{MENU}"));
        }

        match parse_time(input) {
            Ok(anchor) => {
                let plan = Plan::compute(&self.calculator, kind.direction(), anchor);
                self.show(&[plan])
            }
            Err(err) => {
                tracing::debug!(%err, "re-prompting after unparseable time");
                Reply::say(format!(
                    "I couldn't understand {:?}.\nTry formats like {ACCEPTED_FORMATS}, or type cancel.",
                    err.input
                ))
            }
        }
    }

    fn handle_menu(&mut self, input: &str, now: ClockTime) -> Reply {
        let choice = input.trim().to_ascii_lowercase();

        match choice.as_str() {
            "" | "menu" | "help" | "start" => {
                self.state = State::AwaitingMode;
                Reply::say(MENU)
            }
            "1" | "wake" => self.ask(TimeKind::WakeUp),
            "2" | "bed" | "sleep" => self.ask(TimeKind::Bedtime),
            "3" | "now" => {
                let plan = Plan::compute(&self.calculator, Direction::WakeFromBedtime, now);
                self.show(&[plan])
            }
            "4" | "info" => {
                self.state = State::AwaitingMode;
                Reply::say(format!(
                    "{}\n{MENU}",
                    format_info(self.calculator.buffer())
                ))
            }
            "q" | "quit" | "exit" => Reply {
                text: "Good night!".to_string(),
                finished: true,
            },
            _ => match parse_time(input) {
                Ok(anchor) => self.show(&both_plans(&self.calculator, anchor)),
                Err(_) => {
                    self.state = State::AwaitingMode;
                    Reply::say(format!(
                        "I didn't understand that. Pick an option or type a time like 7:30 AM.\n\n{MENU}"
                    ))
                }
            },
        }
    }

    fn ask(&mut self, kind: TimeKind) -> Reply {
        self.state = State::AwaitingTime(kind);
        Reply::say(kind.prompt())
    }

    fn show(&mut self, plans: &[Plan]) -> Reply {
        self.state = State::ShowingResult;
        Reply::say(format!("{}\n{MENU}", format_plans(plans)))
    }
}
