use alloc::vec::Vec;

use super::parse::{self, ParseError};

/// One step of an autonomous routine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Drive both sides open-loop at a fraction of full power, then move on
    /// without waiting.
    Forward(f64),

    /// Drive straight by a distance in inches (negative backs up).
    DriveBy(f64),

    /// Turn in place by a relative angle in degrees, clockwise positive.
    TurnBy(f64),

    /// Set the intake voltage.
    Intake(f64),

    /// Set the flywheel voltage.
    Flywheel(f64),

    /// Set the disk pusher voltage.
    Pusher(f64),

    /// Pause for a number of milliseconds.
    Sleep(u64),

    /// Fire the pneumatic.
    Fire,
}

impl Command {
    pub fn from_str(line: usize, command: &str, args: &[&str]) -> Result<Self, ParseError> {
        use parse::*;
        match command.trim() {
            "Forward" => single_f64(line, args).map(Command::Forward),
            "Drive" => single_f64(line, args).map(Command::DriveBy),
            "Turn" => single_f64(line, args).map(Command::TurnBy),
            "Intake" => single_f64(line, args).map(Command::Intake),
            "Flywheel" => single_f64(line, args).map(Command::Flywheel),
            "Pusher" => single_f64(line, args).map(Command::Pusher),
            "Sleep" => single_u64(line, args).map(Command::Sleep),
            "Fire" => no_args(line, args).map(|()| Command::Fire),
            _ => UnknownCommandSnafu { line, command }.fail(),
        }
    }
}

/// Converts a routine script into a list of commands.
///
/// One command per line; blank lines and `//` comments are skipped. Line
/// numbers in errors are 1-based.
pub fn script_to_commands(script: &str) -> Result<Vec<Command>, ParseError> {
    let mut commands = Vec::new();

    for (index, line) in script.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if let Some((action, args)) = tokens.split_first() {
            commands.push(Command::from_str(line_number, action, args)?);
        }
    }

    Ok(commands)
}

/// Adds a clockwise turn to a counter-clockwise heading, wrapped to `[0, 360)`.
pub fn turn_heading(heading: f64, clockwise_by: f64) -> f64 {
    let wrapped = (heading - clockwise_by) % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}
