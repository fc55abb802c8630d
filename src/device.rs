//! Device descriptors: one hardware SKU's pins and polarity rules.
//!
//! # Example
//!
//! ```rust
//! use relay_pins::{DeviceDescriptor, Level, LogicalRole, LogicalState, PinBindings, Polarity};
//!
//! const PLUG: DeviceDescriptor = DeviceDescriptor::new(
//!     "My Plug",
//!     PinBindings::new().with_relay(14).with_status_led(13).with_button(0),
//!     Polarity::ActiveLow,
//!     Polarity::ActiveLow,
//! );
//!
//! assert_eq!(PLUG.pin(LogicalRole::Relay), Some(14));
//! assert_eq!(PLUG.pin(LogicalRole::DoorSensor), None);
//! assert_eq!(
//!     PLUG.to_signal_level(LogicalRole::Relay, LogicalState::CLOSED),
//!     Level::Low
//! );
//! ```

use crate::polarity::{Level, LogicalState, Polarity, INPUT_POLARITY};
use crate::role::{LogicalRole, RoleCategory};

/// Longest SKU name the table accepts, in bytes.
pub const MAX_NAME_LEN: usize = 15;

/// Physical GPIO number on the module's microcontroller.
pub type PinNumber = u8;

/// Position of a descriptor in the device table.
///
/// Obtained from [`crate::table::find`], [`crate::active_sku`] or
/// [`SkuId::from_index`]; an index outside the table is reported as
/// [`BoardError::UnknownSku`](crate::BoardError::UnknownSku) on use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkuId(pub(crate) usize);

impl SkuId {
    /// Wraps a raw table index without checking it.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw table index.
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// How a device drives its relay.
///
/// Only [`Binary`](Self::Binary) fits the open/closed model. Other drive
/// schemes are named here so a descriptor can record them, but the table
/// refuses them at build time until their semantics are worked out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum RelayModel {
    /// Two-state coil: open or closed.
    #[default]
    Binary,
    /// Three distinct drive values (off/low/high). Unsupported.
    TriState,
}

/// Role to pin assignments for one SKU.
///
/// Each role holds at most one pin; unused roles are `None`, never a
/// placeholder pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PinBindings {
    relay: Option<PinNumber>,
    status_led: Option<PinNumber>,
    button: Option<PinNumber>,
    door_sensor: Option<PinNumber>,
}

impl PinBindings {
    /// Creates an empty set of bindings.
    #[inline]
    pub const fn new() -> Self {
        Self {
            relay: None,
            status_led: None,
            button: None,
            door_sensor: None,
        }
    }

    /// Bind the relay output
    pub const fn with_relay(mut self, pin: PinNumber) -> Self {
        self.relay = Some(pin);
        self
    }

    /// Bind the status LED output
    pub const fn with_status_led(mut self, pin: PinNumber) -> Self {
        self.status_led = Some(pin);
        self
    }

    /// Bind the button input
    pub const fn with_button(mut self, pin: PinNumber) -> Self {
        self.button = Some(pin);
        self
    }

    /// Bind the door sensor input
    pub const fn with_door_sensor(mut self, pin: PinNumber) -> Self {
        self.door_sensor = Some(pin);
        self
    }

    /// Returns the pin bound to `role`, if any.
    #[inline]
    pub const fn get(&self, role: LogicalRole) -> Option<PinNumber> {
        match role {
            LogicalRole::Relay => self.relay,
            LogicalRole::StatusLed => self.status_led,
            LogicalRole::Button => self.button,
            LogicalRole::DoorSensor => self.door_sensor,
        }
    }

    /// Iterates over bound roles and their pins, in [`LogicalRole::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (LogicalRole, PinNumber)> {
        let bindings = *self;
        LogicalRole::ALL
            .into_iter()
            .filter_map(move |role| bindings.get(role).map(|pin| (role, pin)))
    }

    /// Number of bound roles.
    pub const fn len(&self) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i < LogicalRole::ALL.len() {
            if self.get(LogicalRole::ALL[i]).is_some() {
                count += 1;
            }
            i += 1;
        }
        count
    }

    /// Returns `true` when no role is bound.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if two roles share a physical pin.
    pub const fn has_duplicate_pins(&self) -> bool {
        let roles = LogicalRole::ALL;
        let mut i = 0;
        while i < roles.len() {
            if let Some(a) = self.get(roles[i]) {
                let mut j = i + 1;
                while j < roles.len() {
                    if let Some(b) = self.get(roles[j]) {
                        if a == b {
                            return true;
                        }
                    }
                    j += 1;
                }
            }
            i += 1;
        }
        false
    }
}

/// Everything the firmware needs to know about one hardware SKU.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DeviceDescriptor {
    /// Human-readable SKU name, unique within the table.
    pub name: &'static str,
    /// Role to pin assignments.
    pub pins: PinBindings,
    /// Polarity of the relay output.
    pub relay_polarity: Polarity,
    /// Polarity of the status LED output.
    pub led_polarity: Polarity,
    /// Relay drive scheme.
    pub relay_model: RelayModel,
}

impl DeviceDescriptor {
    /// Creates a descriptor with a [`RelayModel::Binary`] relay.
    pub const fn new(
        name: &'static str,
        pins: PinBindings,
        relay_polarity: Polarity,
        led_polarity: Polarity,
    ) -> Self {
        Self {
            name,
            pins,
            relay_polarity,
            led_polarity,
            relay_model: RelayModel::Binary,
        }
    }

    /// Set the relay drive scheme
    pub const fn with_relay_model(mut self, model: RelayModel) -> Self {
        self.relay_model = model;
        self
    }

    /// Returns the pin bound to `role`, if any.
    #[inline]
    pub const fn pin(&self, role: LogicalRole) -> Option<PinNumber> {
        self.pins.get(role)
    }

    /// Returns `true` if this SKU uses `role`.
    #[inline]
    pub const fn has_role(&self, role: LogicalRole) -> bool {
        self.pins.get(role).is_some()
    }

    /// Polarity rule for `role` on this SKU.
    ///
    /// Relay and LED polarity come from the descriptor; inputs always use
    /// [`INPUT_POLARITY`].
    #[inline]
    pub const fn polarity(&self, role: LogicalRole) -> Polarity {
        match role.category() {
            RoleCategory::Relay => self.relay_polarity,
            RoleCategory::Led => self.led_polarity,
            RoleCategory::Input => INPUT_POLARITY,
        }
    }

    /// Level to drive (or expect) on `role`'s pin for `state`.
    #[inline]
    pub const fn to_signal_level(&self, role: LogicalRole, state: LogicalState) -> Level {
        self.polarity(role).to_level(state)
    }

    /// Logical state represented by `level` on `role`'s pin.
    #[inline]
    pub const fn from_signal_level(&self, role: LogicalRole, level: Level) -> LogicalState {
        self.polarity(role).to_state(level)
    }
}

impl core::fmt::Display for DeviceDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} [", self.name)?;
        for (i, (role, pin)) in self.pins.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=GPIO{}", role, pin)?;
        }
        write!(
            f,
            "] relay {}, led {}",
            self.relay_polarity.as_str(),
            self.led_polarity.as_str()
        )
    }
}
