use core::time::Duration;

use evian::{
    control::{AngularPid, Pid},
    differential::motion::BasicMotion,
    math::IntoAngle,
    prelude::*,
};
use log::info;
use vexide::prelude::{sleep, Motor};

use super::command::{turn_heading, Command};
use crate::{
    control::Mechanisms,
    hardware::{report, Drivetrain as _},
};

/// The tracked drivetrain autonomous moves run on.
pub type Chassis = Drivetrain<Differential, WheeledTracking>;

/// Heading the chassis starts each routine at, counter-clockwise degrees.
pub const INITIAL_HEADING: f64 = 90.0;

pub const TOLERANCES: Tolerances = Tolerances::new()
    .error_tolerance(0.5)
    .tolerance_duration(Duration::from_millis(250))
    .timeout(Duration::from_millis(2000))
    .velocity_tolerance(5.0);

pub const LINEAR_CONTROLLER: Pid = Pid::new(1.25, 0.0, 0.0, None);
pub const ANGULAR_CONTROLLER: AngularPid =
    AngularPid::new(30.0, 1.75, 2.0, Some(Angle::from_degrees(25.0)));

/// Runs a parsed routine to completion.
pub async fn run(chassis: &mut Chassis, mechanisms: &mut Mechanisms, commands: &[Command]) {
    let mut basic = BasicMotion {
        linear_controller: LINEAR_CONTROLLER,
        angular_controller: ANGULAR_CONTROLLER,
        linear_tolerances: TOLERANCES,
        angular_tolerances: TOLERANCES,
    };
    let mut heading = INITIAL_HEADING;

    info!("running {} autonomous commands", commands.len());

    for &command in commands {
        match command {
            Command::Forward(power) => {
                let volts = power * Motor::V5_MAX_VOLTAGE;
                report(mechanisms.drivetrain.drive(volts, volts));
            }
            Command::DriveBy(distance) => {
                _ = basic.drive_distance(chassis, distance).await;
            }
            Command::TurnBy(angle) => {
                heading = turn_heading(heading, angle);
                _ = basic.turn_to_heading(chassis, heading.deg()).await;
            }
            Command::Intake(volts) => report(mechanisms.intake.set_voltage(volts)),
            Command::Flywheel(volts) => report(mechanisms.flywheel.set_voltage(volts)),
            Command::Pusher(volts) => report(mechanisms.disk_pusher.set_voltage(volts)),
            Command::Sleep(delay) => {
                sleep(Duration::from_millis(delay)).await;
            }
            Command::Fire => report(mechanisms.pneumatic.set_output(true)),
        }
    }

    info!("autonomous routine finished");
}
