use crate::{
    config::{DriveMode, JOYSTICK_MAX, MAX_VOLTAGE},
    hardware::{report, Drivetrain},
    mappings::Stick,
};

/// Left and right wheel commands in raw joystick units.
///
/// Mixed values are not re-normalized and may exceed the joystick range; the
/// motor driver clips them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelCommand {
    pub left: i32,
    pub right: i32,
}

impl WheelCommand {
    /// True when both sides are too small to bother driving.
    pub const fn in_deadband(&self, deadband: i32) -> bool {
        self.left.abs() < deadband && self.right.abs() < deadband
    }

    /// Scales the raw command to motor voltages.
    pub fn voltages(&self) -> (f64, f64) {
        (to_voltage(self.left), to_voltage(self.right))
    }
}

fn to_voltage(raw: i32) -> f64 {
    f64::from(raw) / f64::from(JOYSTICK_MAX) * MAX_VOLTAGE
}

fn scale(value: i32, gain: f64) -> i32 {
    (f64::from(value) * gain) as i32
}

/// Computes the left and right wheel commands for the selected drive mode.
pub fn differential_drive(mode: DriveMode, left: Stick, right: Stick) -> WheelCommand {
    let (power, turn) = match mode {
        DriveMode::Arcade { turn_gain } => (left.y, scale(left.x, turn_gain)),
        DriveMode::Differential => (left.y, left.x),
        DriveMode::SplitArcade { turn_gain } => (left.y, scale(right.x, turn_gain)),
        DriveMode::Tank => {
            return WheelCommand {
                left: left.y,
                right: right.y,
            }
        }
    };

    WheelCommand {
        left: power + turn,
        right: power - turn,
    }
}

/// Sends one tick's wheel command.
///
/// Inside the deadband the drivetrain is braked once and `stopped` is latched;
/// outside it the move is sent every tick.
pub fn update(
    drivetrain: &mut dyn Drivetrain,
    command: WheelCommand,
    deadband: i32,
    stopped: &mut bool,
) {
    if command.in_deadband(deadband) {
        if !*stopped {
            *stopped = true;
            report(drivetrain.brake());
        }
    } else {
        *stopped = false;
        let (left, right) = command.voltages();
        report(drivetrain.drive(left, right));
    }
}
