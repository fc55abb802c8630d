//! Pins that speak in logical states.
//!
//! [`RolePin`] wraps any `embedded-hal` digital pin together with the role it
//! plays and that role's polarity on the device. Drivers built on top
//! of it only ever pass [`LogicalState`] values.
//!
//! # Example
//!
//! ```rust
//! use relay_pins::hal::MockPin;
//! use relay_pins::{table, Level, LogicalRole, LogicalState, RolePin};
//!
//! let device = table::describe(table::SONOFF_BASIC).unwrap();
//! let mut relay = RolePin::new(device, LogicalRole::Relay, MockPin::new());
//!
//! relay.set(LogicalState::CLOSED).unwrap();
//! assert_eq!(relay.pin().level, Level::Low);
//! ```

use embedded_hal::digital::{InputPin, OutputPin};

use crate::device::DeviceDescriptor;
use crate::polarity::{LogicalState, Polarity};
use crate::role::LogicalRole;

/// A digital pin bound to a logical role.
#[derive(Debug)]
pub struct RolePin<P> {
    pin: P,
    role: LogicalRole,
    polarity: Polarity,
}

impl<P> RolePin<P> {
    /// Binds `pin` to `role` using that role's polarity on `device`.
    ///
    /// Firmware passes [`ActiveDevice::descriptor`] here; `pin` must be the
    /// GPIO that [`ActiveDevice::lookup_pin`] returns for `role`.
    ///
    /// [`ActiveDevice::descriptor`]: crate::ActiveDevice::descriptor
    /// [`ActiveDevice::lookup_pin`]: crate::ActiveDevice::lookup_pin
    pub fn new(device: &DeviceDescriptor, role: LogicalRole, pin: P) -> Self {
        Self {
            pin,
            role,
            polarity: device.polarity(role),
        }
    }

    /// Role this pin plays.
    #[inline]
    pub fn role(&self) -> LogicalRole {
        self.role
    }

    /// Polarity applied on every read and write.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Borrow the underlying pin.
    #[inline]
    pub fn pin(&self) -> &P {
        &self.pin
    }

    /// Releases the underlying pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> RolePin<P> {
    /// Drives the pin to the level representing `state`.
    pub fn set(&mut self, state: LogicalState) -> Result<(), P::Error> {
        let level = self.polarity.to_level(state);
        log::debug!("{} <- {:?} ({:?})", self.role, state, level);
        self.pin.set_state(level.into())
    }
}

impl<P: InputPin> RolePin<P> {
    /// Reads the pin and returns the logical state it represents.
    pub fn read(&mut self) -> Result<LogicalState, P::Error> {
        let high = self.pin.is_high()?;
        Ok(self.polarity.to_state(high.into()))
    }
}
