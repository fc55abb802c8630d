//! The device descriptor table.
//!
//! Every supported module is listed once in [`DEVICES`]. The table is checked
//! while compiling: a descriptor with an empty, over-long or duplicated name,
//! two roles on one pin, or an unsupported relay model fails the build.
//!
//! | SKU | Relay | LED | Button | Relay polarity | LED polarity |
//! |-----|-------|-----|--------|----------------|--------------|
//! | Sonoff Basic | 12 | 13 | 0 | active low | active low |
//! | KMC Smart Plug | 14 | 13 | 0 | active low | active low |
//! | Sonoff Dual R2 | 14 | 13 | 0 | active low | active low |
//! | KS602S Switch | 12 | 13 | 0 | active low | active high |
//!
//! No listed module has a door sensor yet; [`LogicalRole::DoorSensor`] lookups
//! report [`BoardError::NotBound`] on all of them.
//!
//! # Example
//!
//! ```rust
//! use relay_pins::{table, BoardError, LogicalRole};
//!
//! let sku = table::find("Sonoff Basic").unwrap();
//! assert_eq!(table::lookup_pin(sku, LogicalRole::Relay), Ok(12));
//! assert!(matches!(
//!     table::lookup_pin(sku, LogicalRole::DoorSensor),
//!     Err(BoardError::NotBound { .. })
//! ));
//! ```

use crate::device::{DeviceDescriptor, PinBindings, PinNumber, RelayModel, SkuId, MAX_NAME_LEN};
use crate::error::BoardError;
use crate::polarity::Polarity;
use crate::role::LogicalRole;

/// Sonoff Basic relay module.
pub const SONOFF_BASIC: SkuId = SkuId(0);
/// KMC smart plug.
pub const KMC_SMART_PLUG: SkuId = SkuId(1);
/// Sonoff Dual R2.
pub const SONOFF_DUAL_R2: SkuId = SkuId(2);
/// KS-602S wall switch.
pub const KS602S_SWITCH: SkuId = SkuId(3);

const TABLE: [DeviceDescriptor; 4] = [
    DeviceDescriptor::new(
        "Sonoff Basic",
        PinBindings::new()
            .with_relay(12)
            .with_status_led(13)
            .with_button(0),
        Polarity::ActiveLow,
        Polarity::ActiveLow,
    ),
    DeviceDescriptor::new(
        "KMC Smart Plug",
        PinBindings::new()
            .with_relay(14)
            .with_status_led(13)
            .with_button(0),
        Polarity::ActiveLow,
        Polarity::ActiveLow,
    ),
    DeviceDescriptor::new(
        "Sonoff Dual R2",
        PinBindings::new()
            .with_relay(14)
            .with_status_led(13)
            .with_button(0),
        Polarity::ActiveLow,
        Polarity::ActiveLow,
    ),
    // LED is wired straight to the pin on this switch; only the relay inverts
    DeviceDescriptor::new(
        "KS602S Switch",
        PinBindings::new()
            .with_relay(12)
            .with_status_led(13)
            .with_button(0),
        Polarity::ActiveLow,
        Polarity::ActiveHigh,
    ),
];

const _: () = validate(&TABLE);

/// All supported hardware SKUs, indexed by [`SkuId`].
pub static DEVICES: [DeviceDescriptor; TABLE.len()] = TABLE;

/// Panics (at compile time when used in a `const`) if `table` breaks a
/// descriptor invariant.
pub const fn validate(table: &[DeviceDescriptor]) {
    let mut i = 0;
    while i < table.len() {
        let device = &table[i];
        if device.name.is_empty() {
            panic!("device name must not be empty");
        }
        if device.name.len() > MAX_NAME_LEN {
            panic!("device name is longer than MAX_NAME_LEN");
        }
        if device.pins.has_duplicate_pins() {
            panic!("two roles share a pin on the same device");
        }
        if !matches!(device.relay_model, RelayModel::Binary) {
            panic!("only binary relays are supported; other relay models need design review");
        }
        let mut j = i + 1;
        while j < table.len() {
            if names_equal(device.name, table[j].name) {
                panic!("device names must be unique");
            }
            j += 1;
        }
        i += 1;
    }
}

const fn names_equal(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Exact-match name lookup usable in `const` context.
pub const fn position_of(name: &str) -> Option<SkuId> {
    let mut i = 0;
    while i < TABLE.len() {
        if names_equal(TABLE[i].name, name) {
            return Some(SkuId(i));
        }
        i += 1;
    }
    None
}

/// Finds a SKU by name, ignoring surrounding whitespace and ASCII case.
///
/// # Errors
///
/// Returns [`BoardError::UnknownSku`] if no descriptor has that name.
pub fn find(name: &str) -> Result<SkuId, BoardError> {
    let name = name.trim();
    DEVICES
        .iter()
        .position(|device| device.name.eq_ignore_ascii_case(name))
        .map(SkuId)
        .ok_or(BoardError::UnknownSku)
}

/// Returns the full descriptor for `sku`.
///
/// # Errors
///
/// Returns [`BoardError::UnknownSku`] if `sku` is outside the table.
pub fn describe(sku: SkuId) -> Result<&'static DeviceDescriptor, BoardError> {
    DEVICES.get(sku.0).ok_or(BoardError::UnknownSku)
}

/// Returns the pin bound to `role` on `sku`.
///
/// # Errors
///
/// - [`BoardError::UnknownSku`] if `sku` is outside the table
/// - [`BoardError::NotBound`] if that SKU does not use `role`
pub fn lookup_pin(sku: SkuId, role: LogicalRole) -> Result<PinNumber, BoardError> {
    let device = describe(sku)?;
    device.pin(role).ok_or(BoardError::NotBound {
        sku: device.name,
        role,
    })
}

/// Iterates over every SKU and its descriptor, in table order.
pub fn iter() -> impl Iterator<Item = (SkuId, &'static DeviceDescriptor)> {
    DEVICES.iter().enumerate().map(|(i, device)| (SkuId(i), device))
}

/// Number of descriptors in the table.
#[inline]
pub const fn len() -> usize {
    TABLE.len()
}
