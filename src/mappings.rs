/// Raw reading of one joystick, each axis in `-127..=127`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stick {
    pub x: i32,
    pub y: i32,
}

impl Stick {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One tick's worth of controller input, already resolved to robot functions.
///
/// The default value is the neutral controller: sticks centered and nothing
/// pressed. A failed controller read should fall back to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlInputs {
    pub left_stick: Stick,
    pub right_stick: Stick,

    pub flywheel_forward: bool,
    pub flywheel_backward: bool,

    pub intake_forward: bool,
    pub intake_backward: bool,

    pub disk_pusher_forward: bool,
    pub disk_pusher_backward: bool,

    pub roller_forward: bool,
    pub roller_backward: bool,

    pub pneumatic: bool,

    pub tier_up: bool,
    pub tier_down: bool,
}
