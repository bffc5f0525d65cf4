use log::info;

use crate::hardware::{report, BinaryOutput};

/// Fires the pneumatic on press. Nothing in driver control retracts it.
pub fn update(output: &mut dyn BinaryOutput, pressed: bool, extended: &mut bool) {
    if pressed && !*extended {
        *extended = true;
        info!("pneumatic fired");
        report(output.set_output(true));
    }
}

pub fn retract(output: &mut dyn BinaryOutput) {
    info!("pneumatic retracted");
    report(output.set_output(false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::DeviceError;

    #[derive(Default)]
    struct Solenoid {
        writes: Vec<bool>,
    }

    impl BinaryOutput for Solenoid {
        fn set_output(&mut self, high: bool) -> Result<(), DeviceError> {
            self.writes.push(high);
            Ok(())
        }
    }

    #[test]
    fn fires_once_and_stays_out() {
        let mut solenoid = Solenoid::default();
        let mut extended = false;

        for pressed in [false, true, true, false, true, false] {
            update(&mut solenoid, pressed, &mut extended);
        }

        assert_eq!(solenoid.writes, [true]);
        assert!(extended);
    }

    #[test]
    fn retract_writes_low() {
        let mut solenoid = Solenoid::default();
        let mut extended = false;

        update(&mut solenoid, true, &mut extended);
        retract(&mut solenoid);

        assert_eq!(solenoid.writes, [true, false]);
    }
}
