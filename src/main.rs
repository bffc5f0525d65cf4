#![no_main]
#![no_std]

extern crate alloc;

use alloc::boxed::Box;

use disc_shooter::{
    autonomous::{
        command::script_to_commands,
        execute::{self, Chassis, INITIAL_HEADING},
        AutonSelector, ROUTINES,
    },
    control::{self, Mechanisms, Teleop},
    devices::{self, DriveMotors, MotorGroup, Solenoid},
    hardware::{Actuator, StatusDisplay},
    logger, ControlConfig,
};
use evian::{math::IntoAngle, prelude::*};
use log::{error, info, warn, LevelFilter};
use vexide::{
    core::time::Instant,
    devices::adi::digital::LogicLevel,
    prelude::*,
    startup::banner::themes::THEME_MURICA,
};

const WHEEL_DIAMETER: f64 = 3.25;
const TRACK_WIDTH: f64 = 15.0;

struct Robot {
    chassis: Chassis,
    mechanisms: Mechanisms,
    controller: Controller,
    config: ControlConfig,
    selector: AutonSelector,
    start: Instant,
}

impl Robot {
    /// Shows the highlighted routine on the controller's top line. The write is
    /// awaited, not dropped when the controller is busy.
    async fn show_selection(&mut self) {
        let line = self.selector.label();

        if let Err(err) = self.controller.screen.set_text(&line, 1, 1).await {
            warn!("couldn't show routine {}: {err}", line.trim_end());
        }
    }
}

impl Compete for Robot {
    async fn connected(&mut self) {
        info!("Competition connected, pick an autonomous routine.");
        self.show_selection().await;

        while !self.selector.is_confirmed() {
            let state = self.controller.state().unwrap_or_default();

            if self.selector.update(
                state.button_right.is_now_pressed(),
                state.button_left.is_now_pressed(),
                state.button_a.is_now_pressed(),
            ) {
                self.show_selection().await;
            }

            sleep(Controller::UPDATE_INTERVAL).await;
        }

        info!("Autonomous routine: {}", ROUTINES[self.selector.selected()].name);
    }

    async fn autonomous(&mut self) {
        let routine = ROUTINES[self.selector.selected()];
        info!("Autonomous control started: {}", routine.name);

        match script_to_commands(routine.script) {
            Ok(commands) => execute::run(&mut self.chassis, &mut self.mechanisms, &commands).await,
            Err(err) => error!("couldn't parse routine {}: {err}", routine.name),
        }
    }

    async fn driver(&mut self) {
        info!("Driver control started.");

        let mut teleop = Teleop::new(self.config.clone());

        loop {
            let deadline = Instant::now() + teleop.config().tick_period;

            let inputs = self
                .controller
                .state()
                .map(|state| devices::control_inputs(&state))
                .unwrap_or_default();

            teleop.tick(
                &inputs,
                self.start.elapsed(),
                &mut self.mechanisms,
                Some(&mut self.controller.screen as &mut dyn StatusDisplay),
            );

            sleep_until(deadline).await;
        }
    }

    async fn disabled(&mut self) {
        info!("Robot disabled.");
        control::disabled(&self.config, &mut self.mechanisms);
    }
}

#[vexide::main(banner(theme = THEME_MURICA))]
async fn main(peripherals: Peripherals) {
    if logger::init(LevelFilter::Info).is_err() {
        println!("Logger was already installed.");
    }
    info!("Program started.");

    let left_motors = shared_motors![
        Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
        Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
    ];
    let right_motors = shared_motors![
        Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
        Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
    ];

    let mut imu = InertialSensor::new(peripherals.port_9);
    match imu.calibrate().await {
        Ok(()) => info!("Inertial sensor successfully calibrated."),
        Err(err) => error!("Inertial sensor calibration failed: {err}"),
    }

    let chassis = Drivetrain::new(
        Differential::from_shared(left_motors.clone(), right_motors.clone()),
        WheeledTracking::forward_only(
            Vec2::default(),
            INITIAL_HEADING.deg(),
            [
                TrackingWheel::new(left_motors.clone(), WHEEL_DIAMETER, TRACK_WIDTH / 2.0, None),
                TrackingWheel::new(right_motors.clone(), WHEEL_DIAMETER, TRACK_WIDTH / 2.0, None),
            ],
            Some(imu),
        ),
    );

    let roller: Box<dyn Actuator> = Box::new(MotorGroup::new(
        "roller",
        [Motor::new(peripherals.port_10, Gearset::Green, Direction::Forward)],
        BrakeMode::Brake,
    ));

    let mechanisms = Mechanisms {
        drivetrain: Box::new(DriveMotors::new(left_motors, right_motors)),
        flywheel: Box::new(MotorGroup::new(
            "flywheel",
            [Motor::new(peripherals.port_5, Gearset::Blue, Direction::Reverse)],
            BrakeMode::Coast,
        )),
        intake: Box::new(MotorGroup::new(
            "intake",
            [
                Motor::new(peripherals.port_7, Gearset::Green, Direction::Forward),
                Motor::new(peripherals.port_8, Gearset::Green, Direction::Forward),
            ],
            BrakeMode::Coast,
        )),
        disk_pusher: Box::new(MotorGroup::new(
            "disk pusher",
            [Motor::new(peripherals.port_6, Gearset::Red, Direction::Reverse)],
            BrakeMode::Brake,
        )),
        roller: Some(roller),
        pneumatic: Box::new(Solenoid(AdiDigitalOut::with_initial_level(
            peripherals.adi_h,
            LogicLevel::Low,
        ))),
    };

    let robot = Robot {
        chassis,
        mechanisms,
        controller: peripherals.primary_controller,
        config: ControlConfig::default(),
        selector: AutonSelector::new(ROUTINES.len()),
        start: Instant::now(),
    };

    robot.compete().await;
}
