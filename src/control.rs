//! The driver control loop body.
//!
//! [`tick`] maps one input snapshot to actuator commands. It is called once per
//! period by the driver task, which owns a fresh [`Teleop`] for every
//! driver-control session.

use alloc::boxed::Box;
use core::time::Duration;

use log::debug;

use crate::{
    config::{ControlConfig, FlywheelTier},
    hardware::{Actuator, BinaryOutput, Drivetrain, PositionedActuator, StatusDisplay},
    mappings::ControlInputs,
    subsystems::{self, disk_pusher, drivetrain, flywheel, pneumatic, ButtonCommand},
    telemetry,
    toggle::{Debouncer, EdgeToggle},
};

/// Every device the driver controls.
pub struct Mechanisms {
    pub drivetrain: Box<dyn Drivetrain>,
    pub flywheel: Box<dyn Actuator>,
    pub intake: Box<dyn Actuator>,
    pub disk_pusher: Box<dyn PositionedActuator>,
    pub roller: Option<Box<dyn Actuator>>,
    pub pneumatic: Box<dyn BinaryOutput>,
}

/// State carried between ticks of one driver-control session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub drivetrain_stopped: bool,
    pub intake_stopped: bool,
    pub flywheel_stopped: bool,
    pub disk_pusher_stopped: bool,
    pub roller_stopped: bool,

    pub flywheel_tier: FlywheelTier,
    pub flywheel_toggle: EdgeToggle,
    pub tier_buttons: Debouncer,

    pub pneumatic_extended: bool,
}

impl ControlState {
    pub const fn new(config: &ControlConfig) -> Self {
        Self {
            drivetrain_stopped: false,
            intake_stopped: false,
            flywheel_stopped: false,
            disk_pusher_stopped: false,
            roller_stopped: false,
            flywheel_tier: config.initial_tier,
            flywheel_toggle: EdgeToggle::new(),
            tier_buttons: Debouncer::new(config.tier_debounce),
            pneumatic_extended: false,
        }
    }

    pub const fn flywheel_toggle_active(&self) -> bool {
        self.flywheel_toggle.is_active()
    }

    pub const fn flywheel_edge_latch(&self) -> bool {
        self.flywheel_toggle.is_latched()
    }

    pub const fn last_tier_change(&self) -> Option<Duration> {
        self.tier_buttons.last_fired()
    }
}

/// Runs one control tick. `now` is monotonic time since program start.
pub fn tick(
    state: &mut ControlState,
    config: &ControlConfig,
    inputs: &ControlInputs,
    now: Duration,
    mechanisms: &mut Mechanisms,
) {
    let wheels =
        drivetrain::differential_drive(config.drive_mode, inputs.left_stick, inputs.right_stick);
    drivetrain::update(
        mechanisms.drivetrain.as_mut(),
        wheels,
        config.deadband,
        &mut state.drivetrain_stopped,
    );

    if flywheel::adjust_tier(
        &mut state.flywheel_tier,
        &mut state.tier_buttons,
        inputs.tier_up,
        inputs.tier_down,
        now,
    ) {
        debug!("flywheel tier {}", state.flywheel_tier.get());
    }

    let flywheel_command = flywheel::command(
        config.flywheel_mode,
        &mut state.flywheel_toggle,
        inputs.flywheel_forward,
        inputs.flywheel_backward,
        now,
    );
    subsystems::apply(
        mechanisms.flywheel.as_mut(),
        flywheel_command,
        state.flywheel_tier.voltage(&config.flywheel_voltages),
        &mut state.flywheel_stopped,
    );

    subsystems::apply(
        mechanisms.intake.as_mut(),
        ButtonCommand::from_buttons(inputs.intake_forward, inputs.intake_backward),
        config.intake_voltage,
        &mut state.intake_stopped,
    );

    disk_pusher::update(
        mechanisms.disk_pusher.as_mut(),
        ButtonCommand::from_buttons(inputs.disk_pusher_forward, inputs.disk_pusher_backward),
        config.disk_pusher_voltage,
        config.disk_pusher_limit,
        &mut state.disk_pusher_stopped,
    );

    if let Some(roller) = mechanisms.roller.as_deref_mut() {
        subsystems::apply(
            roller,
            ButtonCommand::from_buttons(inputs.roller_forward, inputs.roller_backward),
            config.roller_voltage,
            &mut state.roller_stopped,
        );
    }

    pneumatic::update(
        mechanisms.pneumatic.as_mut(),
        inputs.pneumatic,
        &mut state.pneumatic_extended,
    );
}

/// One driver-control session: its configuration and the state it builds up.
pub struct Teleop {
    config: ControlConfig,
    state: ControlState,
}

impl Teleop {
    /// Top line of the controller screen.
    pub const STATUS_ROW: u8 = 1;

    pub fn new(config: ControlConfig) -> Self {
        let state = ControlState::new(&config);
        Self { config, state }
    }

    pub const fn config(&self) -> &ControlConfig {
        &self.config
    }

    pub const fn state(&self) -> &ControlState {
        &self.state
    }

    /// Runs one tick, then writes the status line if telemetry is enabled.
    pub fn tick(
        &mut self,
        inputs: &ControlInputs,
        now: Duration,
        mechanisms: &mut Mechanisms,
        display: Option<&mut dyn StatusDisplay>,
    ) {
        tick(&mut self.state, &self.config, inputs, now, mechanisms);

        if !self.config.telemetry {
            return;
        }

        if let Some(display) = display {
            let line = telemetry::status_line(
                self.state.flywheel_tier,
                mechanisms.flywheel.temperature().ok(),
                self.state.flywheel_toggle_active(),
            );
            display.write_line(Self::STATUS_ROW, &line);
        }
    }
}

/// Runs on the transition into the disabled phase.
pub fn disabled(config: &ControlConfig, mechanisms: &mut Mechanisms) {
    if config.retract_pneumatic_on_disable {
        pneumatic::retract(mechanisms.pneumatic.as_mut());
    }
}
