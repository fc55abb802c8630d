//! # relay-pins
//!
//! Pin and polarity descriptors for a family of Wi-Fi relay modules: basic
//! relay boards, smart plugs, dual relays and wall switches.
//!
//! One firmware codebase targets every module by asking this crate two
//! questions:
//!
//! - **Which GPIO plays which role?** [`ActiveDevice::lookup_pin`] returns the
//!   pin for a [`LogicalRole`], or [`BoardError::NotBound`] when the hardware
//!   lacks that feature.
//! - **What level means "on"?** [`ActiveDevice::to_signal_level`] and
//!   [`ActiveDevice::from_signal_level`] translate between [`LogicalState`]
//!   and [`Level`] using the role's [`Polarity`] on that module.
//!
//! ## Architecture
//!
//! - `role` - Logical pin roles and their polarity categories
//! - `polarity` - The single state/level translation
//! - `device` - Per-SKU descriptors and pin bindings
//! - `table` - The static, build-time validated descriptor table
//! - `config` - Build-time SKU selection
//! - `active` - Handle to the selected device
//! - `signal` - `embedded-hal` pins that read and write logical states
//! - `hal` - GPIO backends (mock for testing, esp32 for hardware)
//!
//! ## Example
//!
//! ```rust
//! use relay_pins::{table, BoardError, Level, LogicalRole, LogicalState};
//!
//! // Firmware uses ActiveDevice::selected(); any table entry can be inspected
//! let device = table::describe(table::SONOFF_BASIC).unwrap();
//!
//! assert_eq!(table::lookup_pin(table::SONOFF_BASIC, LogicalRole::Relay), Ok(12));
//! assert_eq!(device.pin(LogicalRole::StatusLed), Some(13));
//! assert!(matches!(
//!     table::lookup_pin(table::SONOFF_BASIC, LogicalRole::DoorSensor),
//!     Err(BoardError::NotBound { .. })
//! ));
//!
//! // Relay transistor is active low on this module
//! assert_eq!(device.to_signal_level(LogicalRole::Relay, LogicalState::CLOSED), Level::Low);
//! assert_eq!(device.to_signal_level(LogicalRole::Relay, LogicalState::OPEN), Level::High);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// Handle to the device selected at build time.
pub mod active;
/// Build-time SKU selection.
pub mod config;
/// Device descriptors and pin bindings.
pub mod device;
/// Lookup error type.
pub mod error;
/// GPIO backends with mock implementations for testing.
pub mod hal;
/// Logical states, signal levels and polarity translation.
pub mod polarity;
/// Logical pin roles.
pub mod role;
/// Role-bound `embedded-hal` pins.
pub mod signal;
/// The static device descriptor table.
pub mod table;

// Re-exports for convenience
pub use active::{active_sku, ActiveDevice};
pub use config::{BoardConfig, ACTIVE_SKU, ACTIVE_SKU_NAME};
pub use device::{DeviceDescriptor, PinBindings, PinNumber, RelayModel, SkuId, MAX_NAME_LEN};
pub use error::BoardError;
pub use polarity::{Level, LogicalState, Polarity, INPUT_POLARITY};
pub use role::{LogicalRole, RoleCategory};
pub use signal::RolePin;
pub use table::{describe, lookup_pin, DEVICES};
