use alloc::{format, string::String};

use crate::config::FlywheelTier;

/// Controller screen line showing the tier, flywheel temperature and whether
/// hands-free spin is on, e.g. `3 45C ON`.
pub fn status_line(tier: FlywheelTier, temperature: Option<f64>, spinning: bool) -> String {
    let state = if spinning { "ON" } else { "OFF" };

    match temperature {
        Some(celsius) => format!("{} {celsius:.0}C {state}", tier.get()),
        None => format!("{} --C {state}", tier.get()),
    }
}
