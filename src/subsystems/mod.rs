pub mod disk_pusher;
pub mod drivetrain;
pub mod flywheel;
pub mod pneumatic;

use crate::hardware::{report, Actuator};

/// What a two-button mechanism should do this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonCommand {
    Forward,
    Reverse,
    Idle,
}

impl ButtonCommand {
    /// Forward is checked first, so it wins when both buttons are held.
    pub const fn from_buttons(forward: bool, backward: bool) -> Self {
        if forward {
            Self::Forward
        } else if backward {
            Self::Reverse
        } else {
            Self::Idle
        }
    }
}

/// Drives a two-button mechanism at `voltage`.
///
/// `stopped` is the mechanism's idle latch: a stop is only sent on the first
/// idle tick, while forward and reverse are re-sent every tick.
pub fn apply(
    actuator: &mut dyn Actuator,
    command: ButtonCommand,
    voltage: f64,
    stopped: &mut bool,
) {
    match command {
        ButtonCommand::Forward => {
            *stopped = false;
            report(actuator.set_voltage(voltage));
        }
        ButtonCommand::Reverse => {
            *stopped = false;
            report(actuator.set_voltage(-voltage));
        }
        ButtonCommand::Idle => {
            if !*stopped {
                *stopped = true;
                report(actuator.stop());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::DeviceError;

    #[derive(Default)]
    struct Recorder {
        voltages: Vec<f64>,
        stops: usize,
    }

    impl Actuator for Recorder {
        fn set_voltage(&mut self, volts: f64) -> Result<(), DeviceError> {
            self.voltages.push(volts);
            Ok(())
        }

        fn stop(&mut self) -> Result<(), DeviceError> {
            self.stops += 1;
            Ok(())
        }

        fn temperature(&self) -> Result<f64, DeviceError> {
            Ok(30.0)
        }
    }

    #[test]
    fn forward_wins_over_reverse() {
        assert_eq!(ButtonCommand::from_buttons(true, true), ButtonCommand::Forward);
        assert_eq!(ButtonCommand::from_buttons(false, true), ButtonCommand::Reverse);
        assert_eq!(ButtonCommand::from_buttons(false, false), ButtonCommand::Idle);
    }

    #[test]
    fn idle_stops_once() {
        let mut motor = Recorder::default();
        let mut stopped = false;

        for _ in 0..5 {
            apply(&mut motor, ButtonCommand::Idle, 12.0, &mut stopped);
        }
        assert_eq!(motor.stops, 1);
        assert!(stopped);

        apply(&mut motor, ButtonCommand::Reverse, 12.0, &mut stopped);
        assert!(!stopped);
        apply(&mut motor, ButtonCommand::Idle, 12.0, &mut stopped);
        assert_eq!(motor.stops, 2);
        assert_eq!(motor.voltages, [-12.0]);
    }

    #[test]
    fn forward_is_resent_every_tick() {
        let mut motor = Recorder::default();
        let mut stopped = true;

        for _ in 0..3 {
            apply(&mut motor, ButtonCommand::Forward, 8.0, &mut stopped);
        }
        assert_eq!(motor.voltages, [8.0, 8.0, 8.0]);
        assert_eq!(motor.stops, 0);
    }
}
