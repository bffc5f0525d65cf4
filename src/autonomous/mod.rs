use alloc::{format, string::String};

pub mod command;
#[cfg(feature = "robot")]
pub mod execute;
mod parse;

pub use parse::ParseError;

/// A named autonomous routine script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Routine {
    pub name: &'static str,
    pub script: &'static str,
}

/// Routines the driver can pick from before a match. The first is the default.
pub static ROUTINES: [Routine; 3] = [
    Routine {
        name: "Roller",
        script: include_str!("routines/roller.auton"),
    },
    Routine {
        name: "Other side",
        script: include_str!("routines/other_side.auton"),
    },
    Routine {
        name: "None",
        script: "",
    },
];

/// Pre-match routine picker driven by controller button presses.
///
/// Takes edge events (a button going down), not held levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutonSelector {
    index: usize,
    count: usize,
    confirmed: bool,
}

impl AutonSelector {
    /// `count` must be at least one.
    pub const fn new(count: usize) -> Self {
        Self {
            index: 0,
            count,
            confirmed: false,
        }
    }

    /// Applies one tick of button presses. Returns true when the selection
    /// changed or was confirmed.
    pub fn update(&mut self, next: bool, previous: bool, confirm: bool) -> bool {
        if self.confirmed {
            return false;
        }

        if confirm {
            self.confirmed = true;
            return true;
        }

        if next {
            self.index = (self.index + 1) % self.count;
            true
        } else if previous {
            self.index = (self.index + self.count - 1) % self.count;
            true
        } else {
            false
        }
    }

    pub const fn selected(&self) -> usize {
        self.index
    }

    pub const fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Screen text for the highlighted routine, starred once confirmed.
    pub fn label(&self) -> String {
        let marker = if self.confirmed { '*' } else { ' ' };
        format!("{:<12}{marker}", ROUTINES[self.index % ROUTINES.len()].name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::command::{script_to_commands, Command};

    #[test]
    fn bundled_routines_parse() {
        for routine in &ROUTINES {
            assert!(
                script_to_commands(routine.script).is_ok(),
                "{} failed to parse",
                routine.name
            );
        }
    }

    #[test]
    fn roller_routine_fires_three_discs() {
        let commands = script_to_commands(ROUTINES[0].script).unwrap();

        assert_eq!(commands[0], Command::Forward(1.0));
        assert_eq!(
            commands
                .iter()
                .filter(|command| matches!(command, Command::Pusher(volts) if *volts > 0.0))
                .count(),
            3
        );
    }

    #[test]
    fn roller_routine_keeps_two_second_shot_cadence() {
        let commands = script_to_commands(ROUTINES[0].script).unwrap();
        let shots: Vec<usize> = commands
            .iter()
            .enumerate()
            .filter(|(_, command)| **command == Command::Pusher(8.0))
            .map(|(index, _)| index)
            .collect();

        assert_eq!(shots.len(), 3);
        for index in shots {
            assert_eq!(commands[index - 2], Command::Flywheel(11.0));
            assert_eq!(commands[index - 1], Command::Sleep(2000));
        }
        assert_eq!(commands.last(), Some(&Command::Pusher(0.0)));
    }

    #[test]
    fn selector_wraps_both_ways() {
        let mut selector = AutonSelector::new(3);

        assert!(selector.update(false, true, false));
        assert_eq!(selector.selected(), 2);
        assert!(selector.update(true, false, false));
        assert_eq!(selector.selected(), 0);
        assert!(!selector.update(false, false, false));
    }

    #[test]
    fn selector_locks_after_confirm() {
        let mut selector = AutonSelector::new(3);

        selector.update(true, false, false);
        assert!(selector.update(false, false, true));
        assert!(selector.is_confirmed());
        assert!(!selector.update(true, false, false));
        assert_eq!(selector.selected(), 1);
    }

    #[test]
    fn label_marks_confirmed_routine() {
        let mut selector = AutonSelector::new(ROUTINES.len());

        selector.update(true, false, false);
        assert_eq!(selector.label(), "Other side   ");

        selector.update(false, false, true);
        assert_eq!(selector.label(), "Other side  *");
    }
}
