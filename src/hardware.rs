//! Device interfaces consumed by the control loop.
//!
//! On the robot these are implemented over vexide devices (see `devices`).
//! Commands are best effort: a failed command is logged and the next tick
//! simply tries again.

use alloc::string::String;

use log::warn;
use snafu::Snafu;

/// A device command or read that the hardware layer rejected.
#[derive(Debug, Snafu)]
#[snafu(display("{device}: {message}"))]
pub struct DeviceError {
    device: &'static str,
    message: String,
}

impl DeviceError {
    pub fn new(device: &'static str, message: impl Into<String>) -> Self {
        Self {
            device,
            message: message.into(),
        }
    }

    pub const fn device(&self) -> &'static str {
        self.device
    }
}

/// A motor (or group of motors commanded together) driven by voltage.
pub trait Actuator {
    fn set_voltage(&mut self, volts: f64) -> Result<(), DeviceError>;

    /// Stops the actuator using its configured brake mode.
    fn stop(&mut self) -> Result<(), DeviceError>;

    /// Motor temperature in degrees Celsius.
    fn temperature(&self) -> Result<f64, DeviceError>;
}

/// An actuator whose travel is tracked by an encoder.
pub trait PositionedActuator: Actuator {
    /// Accumulated position in degrees since the last reset.
    fn position(&self) -> Result<f64, DeviceError>;

    fn reset_position(&mut self) -> Result<(), DeviceError>;
}

/// Left and right drive sides.
pub trait Drivetrain {
    fn drive(&mut self, left_volts: f64, right_volts: f64) -> Result<(), DeviceError>;

    fn brake(&mut self) -> Result<(), DeviceError>;
}

/// A two-state output such as a pneumatic solenoid.
pub trait BinaryOutput {
    fn set_output(&mut self, high: bool) -> Result<(), DeviceError>;
}

/// A text display the driver can see. Writes are best effort.
pub trait StatusDisplay {
    /// Writes `text` at the start of `row`. Rows are numbered from 1, the
    /// top line of the screen, as on the V5 controller.
    fn write_line(&mut self, row: u8, text: &str);
}

/// Logs a failed device command. The loop never stops on device errors.
pub(crate) fn report(result: Result<(), DeviceError>) {
    if let Err(err) = result {
        warn!("{err}");
    }
}
