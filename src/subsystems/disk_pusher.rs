use log::debug;

use super::ButtonCommand;
use crate::hardware::{report, PositionedActuator};

/// Drives the disk pusher for one tick.
///
/// Forward travel is cut off once the encoder reaches `limit` degrees. The
/// cutoff is re-checked every tick rather than latched, so holding forward
/// past the limit just keeps commanding zero. Going idle stops the pusher and
/// zeroes its encoder for the next stroke.
pub fn update(
    pusher: &mut dyn PositionedActuator,
    command: ButtonCommand,
    voltage: f64,
    limit: f64,
    stopped: &mut bool,
) {
    match command {
        ButtonCommand::Forward => {
            *stopped = false;

            let position = pusher.position().unwrap_or_default();
            let volts = if position >= limit {
                debug!("disk pusher at {position:.0} deg, holding at the limit");
                0.0
            } else {
                voltage
            };

            report(pusher.set_voltage(volts));
        }
        ButtonCommand::Reverse => {
            *stopped = false;
            report(pusher.set_voltage(-voltage));
        }
        ButtonCommand::Idle => {
            if !*stopped {
                *stopped = true;
                report(pusher.stop());
                report(pusher.reset_position());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{Actuator, DeviceError};

    #[derive(Default)]
    struct FakePusher {
        position: f64,
        voltages: Vec<f64>,
        stops: usize,
        resets: usize,
    }

    impl Actuator for FakePusher {
        fn set_voltage(&mut self, volts: f64) -> Result<(), DeviceError> {
            self.voltages.push(volts);
            Ok(())
        }

        fn stop(&mut self) -> Result<(), DeviceError> {
            self.stops += 1;
            Ok(())
        }

        fn temperature(&self) -> Result<f64, DeviceError> {
            Ok(25.0)
        }
    }

    impl PositionedActuator for FakePusher {
        fn position(&self) -> Result<f64, DeviceError> {
            Ok(self.position)
        }

        fn reset_position(&mut self) -> Result<(), DeviceError> {
            self.resets += 1;
            self.position = 0.0;
            Ok(())
        }
    }

    #[test]
    fn forward_cuts_off_at_limit() {
        let mut pusher = FakePusher::default();
        let mut stopped = false;

        update(&mut pusher, ButtonCommand::Forward, 12.0, 420.0, &mut stopped);
        pusher.position = 420.0;
        update(&mut pusher, ButtonCommand::Forward, 12.0, 420.0, &mut stopped);
        pusher.position = 500.0;
        update(&mut pusher, ButtonCommand::Forward, 12.0, 420.0, &mut stopped);

        assert_eq!(pusher.voltages, [12.0, 0.0, 0.0]);
        assert!(!stopped);
    }

    #[test]
    fn cutoff_is_not_latched() {
        let mut pusher = FakePusher {
            position: 430.0,
            ..Default::default()
        };
        let mut stopped = false;

        update(&mut pusher, ButtonCommand::Forward, 12.0, 420.0, &mut stopped);
        pusher.position = 100.0;
        update(&mut pusher, ButtonCommand::Forward, 12.0, 420.0, &mut stopped);

        assert_eq!(pusher.voltages, [0.0, 12.0]);
    }

    #[test]
    fn reverse_ignores_limit() {
        let mut pusher = FakePusher {
            position: 600.0,
            ..Default::default()
        };
        let mut stopped = false;

        update(&mut pusher, ButtonCommand::Reverse, 12.0, 420.0, &mut stopped);
        assert_eq!(pusher.voltages, [-12.0]);
    }

    #[test]
    fn idle_stops_and_rezeroes_once() {
        let mut pusher = FakePusher {
            position: 300.0,
            ..Default::default()
        };
        let mut stopped = false;

        for _ in 0..4 {
            update(&mut pusher, ButtonCommand::Idle, 12.0, 420.0, &mut stopped);
        }

        assert_eq!(pusher.stops, 1);
        assert_eq!(pusher.resets, 1);
        assert_eq!(pusher.position, 0.0);
    }
}
