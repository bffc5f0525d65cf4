use core::time::Duration;

/// Highest voltage a V5 smart motor accepts.
pub const MAX_VOLTAGE: f64 = 12.0;

/// Full-scale reading of a controller joystick axis.
pub const JOYSTICK_MAX: i32 = 127;

/// How joystick axes are mixed into left and right wheel commands.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DriveMode {
    /// Left stick only. Forward from Y, turn from X scaled by `turn_gain`.
    Arcade { turn_gain: f64 },
    /// Left stick only, `left = Y + X` and `right = Y - X`.
    Differential,
    /// Forward from the left stick Y, turn from the right stick X.
    SplitArcade { turn_gain: f64 },
    /// Each stick's Y drives its own side.
    Tank,
}

/// How the flywheel forward button behaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlywheelMode {
    /// Spin only while the forward button is held.
    Hold,
    /// Each press of the forward button starts or stops hands-free spin.
    Toggle,
}

/// Selected flywheel speed preset, always in `1..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FlywheelTier(u8);

impl FlywheelTier {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(3);

    /// Builds a tier, clamping out-of-range values to the nearest preset.
    pub const fn new(tier: i32) -> Self {
        if tier < Self::MIN.0 as i32 {
            Self::MIN
        } else if tier > Self::MAX.0 as i32 {
            Self::MAX
        } else {
            Self(tier as u8)
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn raised(self) -> Self {
        Self::new(self.0 as i32 + 1)
    }

    pub const fn lowered(self) -> Self {
        Self::new(self.0 as i32 - 1)
    }

    /// Looks up this tier's voltage in a per-tier table.
    pub const fn voltage(self, table: &[f64; 3]) -> f64 {
        table[(self.0 - 1) as usize]
    }
}

impl Default for FlywheelTier {
    fn default() -> Self {
        Self::MAX
    }
}

/// Every tunable of the driver control loop.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlConfig {
    /// Period of one control tick.
    pub tick_period: Duration,

    pub drive_mode: DriveMode,
    /// Wheel commands with a smaller magnitude than this (raw joystick units)
    /// on both sides brake the drivetrain.
    pub deadband: i32,

    pub flywheel_mode: FlywheelMode,
    /// Flywheel voltage for tiers 1, 2 and 3.
    pub flywheel_voltages: [f64; 3],
    pub initial_tier: FlywheelTier,
    /// Minimum spacing between accepted tier changes.
    pub tier_debounce: Duration,

    pub intake_voltage: f64,
    pub roller_voltage: f64,

    pub disk_pusher_voltage: f64,
    /// Forward travel of the disk pusher, in degrees, past which it is cut off.
    pub disk_pusher_limit: f64,

    /// Write a status line to the controller screen every tick.
    pub telemetry: bool,
    /// Retract the pneumatic when the robot is disabled.
    pub retract_pneumatic_on_disable: bool,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            tick_period: Duration::from_millis(20),
            drive_mode: DriveMode::Arcade { turn_gain: 0.3 },
            deadband: 5,
            flywheel_mode: FlywheelMode::Toggle,
            flywheel_voltages: [7.0, 8.0, 9.0],
            initial_tier: FlywheelTier::MAX,
            tier_debounce: Duration::from_millis(100),
            intake_voltage: MAX_VOLTAGE,
            roller_voltage: MAX_VOLTAGE,
            disk_pusher_voltage: MAX_VOLTAGE,
            disk_pusher_limit: 420.0,
            telemetry: true,
            retract_pneumatic_on_disable: false,
        }
    }
}
