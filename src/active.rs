//! The SKU this firmware was built for.
//!
//! [`ActiveDevice::selected`] is the only way to obtain a handle, and it always
//! refers to the SKU chosen at build time (see [`crate::config`]). Consumers
//! query pins and translate states through it, or through the free functions
//! in this module, never through raw polarity values.
//!
//! # Example
//!
//! ```rust
//! use relay_pins::{ActiveDevice, LogicalRole, LogicalState};
//!
//! let device = ActiveDevice::selected();
//! if let Ok(pin) = device.lookup_pin(LogicalRole::Relay) {
//!     let level = device.to_signal_level(LogicalRole::Relay, LogicalState::OPEN);
//!     println!("GPIO{} <- {}", pin, level.as_u8());
//! }
//! ```

use crate::config::ACTIVE_SKU;
use crate::device::{DeviceDescriptor, PinNumber, SkuId};
use crate::error::BoardError;
use crate::polarity::{Level, LogicalState, Polarity};
use crate::role::LogicalRole;
use crate::table;

/// Returns the SKU selected at build time.
#[inline]
pub const fn active_sku() -> SkuId {
    ACTIVE_SKU
}

/// Handle to the descriptor of the build-time SKU.
///
/// Cheap to copy; every handle refers to the same static descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActiveDevice {
    descriptor: &'static DeviceDescriptor,
}

impl ActiveDevice {
    /// Returns the device selected at build time.
    #[inline]
    pub fn selected() -> Self {
        Self {
            descriptor: &table::DEVICES[ACTIVE_SKU.index()],
        }
    }

    /// Table position of this device.
    #[inline]
    pub fn sku(&self) -> SkuId {
        ACTIVE_SKU
    }

    /// Full descriptor, for introspection and logging.
    #[inline]
    pub fn descriptor(&self) -> &'static DeviceDescriptor {
        self.descriptor
    }

    /// SKU name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// Returns the pin bound to `role`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NotBound`] if this hardware lacks `role`.
    pub fn lookup_pin(&self, role: LogicalRole) -> Result<PinNumber, BoardError> {
        self.descriptor.pin(role).ok_or(BoardError::NotBound {
            sku: self.descriptor.name,
            role,
        })
    }

    /// Returns `true` if this hardware uses `role`.
    #[inline]
    pub fn has_role(&self, role: LogicalRole) -> bool {
        self.descriptor.has_role(role)
    }

    /// Polarity rule for `role` on this hardware.
    #[inline]
    pub fn polarity(&self, role: LogicalRole) -> Polarity {
        self.descriptor.polarity(role)
    }

    /// Level to drive on `role`'s pin for `state`.
    #[inline]
    pub fn to_signal_level(&self, role: LogicalRole, state: LogicalState) -> Level {
        self.descriptor.to_signal_level(role, state)
    }

    /// Logical state represented by `level` on `role`'s pin.
    #[inline]
    pub fn from_signal_level(&self, role: LogicalRole, level: Level) -> LogicalState {
        self.descriptor.from_signal_level(role, level)
    }
}

/// [`ActiveDevice::to_signal_level`] on the build-time device.
#[inline]
pub fn to_signal_level(role: LogicalRole, state: LogicalState) -> Level {
    ActiveDevice::selected().to_signal_level(role, state)
}

/// [`ActiveDevice::from_signal_level`] on the build-time device.
#[inline]
pub fn from_signal_level(role: LogicalRole, level: Level) -> LogicalState {
    ActiveDevice::selected().from_signal_level(role, level)
}

/// [`ActiveDevice::lookup_pin`] on the build-time device.
#[inline]
pub fn lookup_pin(role: LogicalRole) -> Result<PinNumber, BoardError> {
    ActiveDevice::selected().lookup_pin(role)
}
