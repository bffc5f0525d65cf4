//! Driver control and autonomous logic for a disc-shooting V5 robot.
//!
//! Everything in this crate except the `robot` feature modules is free of
//! hardware dependencies. Devices are reached through the traits in
//! [`hardware`], so the teleop loop can be driven by the real vexide devices on
//! the brain or by recording fakes in tests.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod autonomous;
pub mod config;
pub mod control;
pub mod hardware;
pub mod mappings;
pub mod subsystems;
pub mod telemetry;
pub mod toggle;

#[cfg(feature = "robot")]
pub mod devices;
#[cfg(feature = "robot")]
pub mod logger;

pub use config::{ControlConfig, DriveMode, FlywheelMode, FlywheelTier};
pub use control::{ControlState, Teleop};
pub use mappings::{ControlInputs, Stick};
