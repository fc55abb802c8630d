//! Role pins driven through the mock HAL

use relay_pins::hal::{MockPin, MockPinError};
use relay_pins::{
    table, ActiveDevice, DeviceDescriptor, Level, LogicalRole, LogicalState, PinBindings,
    Polarity, RolePin,
};

#[test]
fn every_device_parks_outputs_safely() {
    for (_, device) in table::iter() {
        let mut relay = RolePin::new(device, LogicalRole::Relay, MockPin::new());
        relay.set(LogicalState::OPEN).unwrap();
        assert_eq!(
            relay.pin().level,
            device.relay_polarity.to_level(LogicalState::OPEN)
        );

        let mut led = RolePin::new(device, LogicalRole::StatusLed, MockPin::new());
        led.set(LogicalState::Off).unwrap();
        assert_eq!(
            led.pin().level,
            device.led_polarity.to_level(LogicalState::Off)
        );
    }
}

#[test]
fn written_state_reads_back() {
    let device = table::describe(table::KS602S_SWITCH).unwrap();
    for role in [LogicalRole::Relay, LogicalRole::StatusLed] {
        let mut pin = RolePin::new(device, role, MockPin::new());
        for state in [LogicalState::On, LogicalState::Off] {
            pin.set(state).unwrap();
            assert_eq!(pin.read().unwrap(), state);
        }
    }
}

#[test]
fn door_sensor_follows_reed_switch() {
    let reed_relay = DeviceDescriptor::new(
        "Reed Relay",
        PinBindings::new()
            .with_relay(12)
            .with_status_led(13)
            .with_door_sensor(14),
        Polarity::ActiveLow,
        Polarity::ActiveLow,
    );

    let mut door = RolePin::new(
        &reed_relay,
        LogicalRole::DoorSensor,
        MockPin::with_level(Level::High),
    );
    assert_eq!(door.read().unwrap(), LogicalState::Off);

    let mut pin = door.into_inner();
    pin.level = Level::Low;
    let mut door = RolePin::new(&reed_relay, LogicalRole::DoorSensor, pin);
    assert_eq!(door.read().unwrap(), LogicalState::On);
}

#[test]
fn selected_device_drives_its_own_polarity() {
    let device = ActiveDevice::selected();
    let mut led = RolePin::new(device.descriptor(), LogicalRole::StatusLed, MockPin::new());
    led.set(LogicalState::On).unwrap();
    assert_eq!(
        led.pin().level,
        relay_pins::active::to_signal_level(LogicalRole::StatusLed, LogicalState::On)
    );
}

#[test]
fn pin_errors_propagate() {
    let device = ActiveDevice::selected();
    let mut relay = RolePin::new(device.descriptor(), LogicalRole::Relay, MockPin::failing());
    assert_eq!(relay.set(LogicalState::CLOSED), Err(MockPinError));
    assert_eq!(relay.read(), Err(MockPinError));
}

#[cfg(feature = "serde")]
#[test]
fn descriptor_serializes_for_logging() {
    let device = relay_pins::describe(table::KS602S_SWITCH).unwrap();
    let json = serde_json::to_value(device).unwrap();
    assert_eq!(json["name"], "KS602S Switch");
    assert_eq!(json["pins"]["relay"], 12);
    assert_eq!(json["pins"]["door_sensor"], serde_json::Value::Null);
    assert_eq!(json["relay_polarity"], "active_low");
    assert_eq!(json["led_polarity"], "active_high");
    assert_eq!(json["relay_model"], "binary");
}
