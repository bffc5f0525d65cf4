use core::time::Duration;

use super::ButtonCommand;
use crate::{
    config::{FlywheelMode, FlywheelTier},
    toggle::{Debouncer, EdgeToggle},
};

/// Steps the speed tier from the up/down buttons.
///
/// Both buttons share one debounce window and up is checked first. Returns
/// true when the tier changed.
pub fn adjust_tier(
    tier: &mut FlywheelTier,
    debouncer: &mut Debouncer,
    up: bool,
    down: bool,
    now: Duration,
) -> bool {
    if !debouncer.should_fire(up || down, now) {
        return false;
    }

    let previous = *tier;
    *tier = if up { tier.raised() } else { tier.lowered() };
    *tier != previous
}

/// Resolves the flywheel buttons into this tick's command.
///
/// In toggle mode the forward button only flips hands-free spin, which then
/// overrides the reverse button until it is flipped off again.
pub fn command(
    mode: FlywheelMode,
    toggle: &mut EdgeToggle,
    forward: bool,
    backward: bool,
    now: Duration,
) -> ButtonCommand {
    match mode {
        FlywheelMode::Hold => ButtonCommand::from_buttons(forward, backward),
        FlywheelMode::Toggle => {
            toggle.should_fire(forward, now);
            ButtonCommand::from_buttons(toggle.is_active(), backward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn down_presses_step_to_minimum() {
        let mut tier = FlywheelTier::MAX;
        let mut debouncer = Debouncer::new(ms(100));

        assert!(adjust_tier(&mut tier, &mut debouncer, false, true, ms(0)));
        assert_eq!(tier.get(), 2);
        assert!(adjust_tier(&mut tier, &mut debouncer, false, true, ms(100)));
        assert_eq!(tier.get(), 1);
        assert!(!adjust_tier(&mut tier, &mut debouncer, false, true, ms(200)));
        assert_eq!(tier, FlywheelTier::MIN);
    }

    #[test]
    fn presses_inside_window_are_ignored() {
        let mut tier = FlywheelTier::MAX;
        let mut debouncer = Debouncer::new(ms(100));

        assert!(adjust_tier(&mut tier, &mut debouncer, false, true, ms(0)));
        assert!(!adjust_tier(&mut tier, &mut debouncer, false, true, ms(40)));
        assert!(!adjust_tier(&mut tier, &mut debouncer, true, false, ms(80)));
        assert_eq!(tier.get(), 2);
        assert!(adjust_tier(&mut tier, &mut debouncer, true, false, ms(120)));
        assert_eq!(tier.get(), 3);
    }

    #[test]
    fn up_wins_when_both_held() {
        let mut tier = FlywheelTier::new(2);
        let mut debouncer = Debouncer::new(ms(100));

        adjust_tier(&mut tier, &mut debouncer, true, true, ms(0));
        assert_eq!(tier.get(), 3);
    }

    #[test]
    fn toggle_overrides_reverse() {
        let mut toggle = EdgeToggle::new();

        let first = command(FlywheelMode::Toggle, &mut toggle, true, true, ms(0));
        assert_eq!(first, ButtonCommand::Forward);

        let released = command(FlywheelMode::Toggle, &mut toggle, false, true, ms(20));
        assert_eq!(released, ButtonCommand::Forward);

        let off = command(FlywheelMode::Toggle, &mut toggle, true, false, ms(40));
        assert_eq!(off, ButtonCommand::Idle);

        let reverse = command(FlywheelMode::Toggle, &mut toggle, true, true, ms(60));
        assert_eq!(reverse, ButtonCommand::Reverse);
    }

    #[test]
    fn hold_mode_ignores_toggle() {
        let mut toggle = EdgeToggle::new();

        assert_eq!(
            command(FlywheelMode::Hold, &mut toggle, true, false, ms(0)),
            ButtonCommand::Forward
        );
        assert_eq!(
            command(FlywheelMode::Hold, &mut toggle, false, false, ms(20)),
            ButtonCommand::Idle
        );
        assert!(!toggle.is_active());
    }
}
