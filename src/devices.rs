//! Device trait implementations over vexide hardware.

use alloc::{format, rc::Rc};
use core::{cell::RefCell, fmt::Display};

use vexide::{
    devices::controller::{ControllerScreen, ControllerState},
    prelude::{AdiDigitalOut, BrakeMode, Motor},
};

use crate::{
    hardware::{Actuator, BinaryOutput, DeviceError, Drivetrain, PositionedActuator, StatusDisplay},
    mappings::{ControlInputs, Stick},
};

fn device_error(device: &'static str, err: impl Display) -> DeviceError {
    DeviceError::new(device, format!("{err}"))
}

/// Motors that always receive the same command, such as the two intake motors.
pub struct MotorGroup<const N: usize> {
    name: &'static str,
    motors: [Motor; N],
    stop_mode: BrakeMode,
}

impl<const N: usize> MotorGroup<N> {
    pub const fn new(name: &'static str, motors: [Motor; N], stop_mode: BrakeMode) -> Self {
        Self {
            name,
            motors,
            stop_mode,
        }
    }

    fn lead(&self) -> Result<&Motor, DeviceError> {
        self.motors
            .first()
            .ok_or_else(|| DeviceError::new(self.name, "group has no motors"))
    }
}

impl<const N: usize> Actuator for MotorGroup<N> {
    fn set_voltage(&mut self, volts: f64) -> Result<(), DeviceError> {
        let name = self.name;
        for motor in &mut self.motors {
            motor.set_voltage(volts).map_err(|err| device_error(name, err))?;
        }
        Ok(())
    }

    fn stop(&mut self) -> Result<(), DeviceError> {
        let (name, mode) = (self.name, self.stop_mode);
        for motor in &mut self.motors {
            motor.brake(mode).map_err(|err| device_error(name, err))?;
        }
        Ok(())
    }

    fn temperature(&self) -> Result<f64, DeviceError> {
        self.lead()?
            .temperature()
            .map_err(|err| device_error(self.name, err))
    }
}

impl<const N: usize> PositionedActuator for MotorGroup<N> {
    fn position(&self) -> Result<f64, DeviceError> {
        self.lead()?
            .position()
            .map(|position| position.as_degrees())
            .map_err(|err| device_error(self.name, err))
    }

    fn reset_position(&mut self) -> Result<(), DeviceError> {
        let name = self.name;
        for motor in &mut self.motors {
            motor.reset_position().map_err(|err| device_error(name, err))?;
        }
        Ok(())
    }
}

/// Drive motors shared with the autonomous chassis.
pub struct DriveMotors<const L: usize, const R: usize> {
    left: Rc<RefCell<[Motor; L]>>,
    right: Rc<RefCell<[Motor; R]>>,
}

impl<const L: usize, const R: usize> DriveMotors<L, R> {
    pub const fn new(left: Rc<RefCell<[Motor; L]>>, right: Rc<RefCell<[Motor; R]>>) -> Self {
        Self { left, right }
    }
}

impl<const L: usize, const R: usize> Drivetrain for DriveMotors<L, R> {
    fn drive(&mut self, left_volts: f64, right_volts: f64) -> Result<(), DeviceError> {
        for motor in self.left.borrow_mut().iter_mut() {
            motor
                .set_voltage(left_volts)
                .map_err(|err| device_error("left drive", err))?;
        }
        for motor in self.right.borrow_mut().iter_mut() {
            motor
                .set_voltage(right_volts)
                .map_err(|err| device_error("right drive", err))?;
        }
        Ok(())
    }

    fn brake(&mut self) -> Result<(), DeviceError> {
        for motor in self.left.borrow_mut().iter_mut() {
            motor
                .brake(BrakeMode::Brake)
                .map_err(|err| device_error("left drive", err))?;
        }
        for motor in self.right.borrow_mut().iter_mut() {
            motor
                .brake(BrakeMode::Brake)
                .map_err(|err| device_error("right drive", err))?;
        }
        Ok(())
    }
}

/// Single-acting pneumatic solenoid on an ADI port.
pub struct Solenoid(pub AdiDigitalOut);

impl BinaryOutput for Solenoid {
    fn set_output(&mut self, high: bool) -> Result<(), DeviceError> {
        let result = if high {
            self.0.set_high()
        } else {
            self.0.set_low()
        };
        result.map_err(|err| device_error("pneumatic", err))
    }
}

impl StatusDisplay for ControllerScreen {
    fn write_line(&mut self, row: u8, text: &str) {
        // The controller only accepts a screen update every few ticks.
        // Lines and columns are 1-based.
        _ = self.try_set_text(text, row, 1);
    }
}

fn stick(x: i8, y: i8) -> Stick {
    Stick::new(i32::from(x), i32::from(y))
}

/// Resolves a controller reading into robot functions.
///
/// | Function            | Button   |
/// |---------------------|----------|
/// | flywheel fwd / rev  | R2 / Y   |
/// | intake in / out     | L1 / L2  |
/// | disk pusher fwd/rev | R1 / B   |
/// | roller fwd / rev    | A / Left |
/// | pneumatic           | X        |
/// | flywheel tier +/-   | Up / Down|
pub fn control_inputs(state: &ControllerState) -> ControlInputs {
    ControlInputs {
        left_stick: stick(state.left_stick.x_raw(), state.left_stick.y_raw()),
        right_stick: stick(state.right_stick.x_raw(), state.right_stick.y_raw()),
        flywheel_forward: state.button_r2.is_pressed(),
        flywheel_backward: state.button_y.is_pressed(),
        intake_forward: state.button_l1.is_pressed(),
        intake_backward: state.button_l2.is_pressed(),
        disk_pusher_forward: state.button_r1.is_pressed(),
        disk_pusher_backward: state.button_b.is_pressed(),
        roller_forward: state.button_a.is_pressed(),
        roller_backward: state.button_left.is_pressed(),
        pneumatic: state.button_x.is_pressed(),
        tier_up: state.button_up.is_pressed(),
        tier_down: state.button_down.is_pressed(),
    }
}
