//! Role pins backed by ESP-IDF `PinDriver`s.

use esp_idf_hal::gpio::{AnyIOPin, AnyOutputPin, Input, Output, PinDriver, Pull};
use esp_idf_hal::sys::EspError;

use crate::active::ActiveDevice;
use crate::device::PinNumber;
use crate::polarity::LogicalState;
use crate::role::LogicalRole;
use crate::signal::RolePin;

/// Push-pull output driver on a table-assigned GPIO.
pub type Esp32Output = PinDriver<'static, AnyOutputPin, Output>;

/// Pulled-up input driver on a table-assigned GPIO.
pub type Esp32Input = PinDriver<'static, AnyIOPin, Input>;

/// Opens the output for `role` and drives it to `initial` straight away.
///
/// Returns `Ok(None)` when the device has no pin for `role`.
///
/// # Errors
///
/// Returns an error if the GPIO driver cannot be configured.
pub fn open_output(
    device: &ActiveDevice,
    role: LogicalRole,
    initial: LogicalState,
) -> Result<Option<RolePin<Esp32Output>>, EspError> {
    let Some(pin) = bound_pin(device, role) else {
        return Ok(None);
    };

    // Safety: the descriptor table gives every role on a device its own pin,
    // and each role is opened once at startup.
    let gpio = unsafe { AnyOutputPin::new(i32::from(pin)) };
    let mut driver = PinDriver::output(gpio)?;

    // Inherent PinDriver setters report EspError, unlike the embedded-hal ones
    if device.to_signal_level(role, initial).is_high() {
        driver.set_high()?;
    } else {
        driver.set_low()?;
    }

    log::info!(
        "{} on GPIO{} ({})",
        role,
        pin,
        device.polarity(role).as_str()
    );
    Ok(Some(RolePin::new(device.descriptor(), role, driver)))
}

/// Opens the input for `role` with the internal pull-up enabled.
///
/// Returns `Ok(None)` when the device has no pin for `role`.
///
/// # Errors
///
/// Returns an error if the GPIO driver cannot be configured.
pub fn open_input(
    device: &ActiveDevice,
    role: LogicalRole,
) -> Result<Option<RolePin<Esp32Input>>, EspError> {
    let Some(pin) = bound_pin(device, role) else {
        return Ok(None);
    };

    // Safety: see open_output
    let gpio = unsafe { AnyIOPin::new(i32::from(pin)) };
    let mut driver = PinDriver::input(gpio)?;
    driver.set_pull(Pull::Up)?;

    log::info!("{} on GPIO{} (pull-up)", role, pin);
    Ok(Some(RolePin::new(device.descriptor(), role, driver)))
}

fn bound_pin(device: &ActiveDevice, role: LogicalRole) -> Option<PinNumber> {
    let pin = device.descriptor().pin(role);
    if pin.is_none() {
        log::info!("{} has no {} pin; skipping", device.name(), role);
    }
    pin
}
