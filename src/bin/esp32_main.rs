//! ESP32 board bring-up check.
//!
//! Opens every pin the selected SKU binds, parks the outputs in their safe
//! state (relay open, LED off) and then logs input changes. Useful for
//! confirming a descriptor against real hardware before the full firmware is
//! flashed.
//!
//! # Build
//!
//! ```bash
//! RELAY_PINS_SKU="KS602S Switch" cargo build --release --features esp32 --bin esp32_main
//! ```

use esp_idf_svc::log::EspLogger;
use relay_pins::hal::esp32::{open_input, open_output, Esp32Input};
use relay_pins::{ActiveDevice, LogicalRole, LogicalState, RolePin};
use std::thread;
use std::time::Duration;

/// Input poll interval in milliseconds
const POLL_INTERVAL_MS: u64 = 50;

fn main() -> anyhow::Result<()> {
    esp_idf_svc::sys::link_patches();
    EspLogger::initialize_default();

    let device = ActiveDevice::selected();
    log::info!("relay-pins bring-up: {}", device.descriptor());

    // Outputs first, so the relay never floats closed during startup
    let _relay = open_output(&device, LogicalRole::Relay, LogicalState::OPEN)?;
    let _led = open_output(&device, LogicalRole::StatusLed, LogicalState::Off)?;

    let mut inputs: Vec<(RolePin<Esp32Input>, LogicalState)> = Vec::new();
    for role in [LogicalRole::Button, LogicalRole::DoorSensor] {
        if let Some(mut pin) = open_input(&device, role)? {
            let state = read(&mut pin)?;
            log::info!("{} is {:?}", role, state);
            inputs.push((pin, state));
        }
    }

    loop {
        for (pin, last) in inputs.iter_mut() {
            let state = read(pin)?;
            if state != *last {
                log::info!("{} -> {:?}", pin.role(), state);
                *last = state;
            }
        }
        thread::sleep(Duration::from_millis(POLL_INTERVAL_MS));
    }
}

fn read(pin: &mut RolePin<Esp32Input>) -> anyhow::Result<LogicalState> {
    let role = pin.role();
    pin.read()
        .map_err(|e| anyhow::anyhow!("{} read failed: {:?}", role, e))
}
