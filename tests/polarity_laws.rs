//! Translation laws that must hold for every device and role

use relay_pins::{table, Level, LogicalRole, LogicalState, Polarity};

const STATES: [LogicalState; 2] = [LogicalState::Off, LogicalState::On];
const LEVELS: [Level; 2] = [Level::Low, Level::High];

#[test]
fn state_round_trips_through_level() {
    for (_, device) in table::iter() {
        for role in LogicalRole::ALL {
            for state in STATES {
                let level = device.to_signal_level(role, state);
                assert_eq!(
                    device.from_signal_level(role, level),
                    state,
                    "{} {}",
                    device.name,
                    role
                );
            }
        }
    }
}

#[test]
fn level_round_trips_through_state() {
    for (_, device) in table::iter() {
        for role in LogicalRole::ALL {
            for level in LEVELS {
                let state = device.from_signal_level(role, level);
                assert_eq!(device.to_signal_level(role, state), level);
            }
        }
    }
}

#[test]
fn translation_is_total_and_binary() {
    // Unbound roles still translate: polarity is a property of the category
    for (_, device) in table::iter() {
        for role in LogicalRole::ALL {
            let on = device.to_signal_level(role, LogicalState::On);
            let off = device.to_signal_level(role, LogicalState::Off);
            assert_ne!(on, off);
            assert!(on.as_u8() <= 1 && off.as_u8() <= 1);
        }
    }
}

#[test]
fn both_polarities_round_trip() {
    for polarity in [Polarity::ActiveHigh, Polarity::ActiveLow] {
        for state in STATES {
            assert_eq!(polarity.to_state(polarity.to_level(state)), state);
        }
    }
}

#[test]
fn active_high_is_identity_on_numbers() {
    assert_eq!(Polarity::ActiveHigh.to_level(LogicalState::On).as_u8(), 1);
    assert_eq!(Polarity::ActiveHigh.to_level(LogicalState::Off).as_u8(), 0);
    assert_eq!(Polarity::ActiveLow.to_level(LogicalState::On).as_u8(), 0);
    assert_eq!(Polarity::ActiveLow.to_level(LogicalState::Off).as_u8(), 1);
}
