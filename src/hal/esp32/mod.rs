//! ESP-IDF GPIO backend.
//!
//! Pin numbers come from the descriptor table at runtime, so GPIOs are opened
//! as `AnyOutputPin`/`AnyIOPin` by number instead of through typed
//! `Peripherals` fields.
//!
//! # Example
//!
//! ```ignore
//! use relay_pins::hal::esp32::open_output;
//! use relay_pins::{ActiveDevice, LogicalRole, LogicalState};
//!
//! let device = ActiveDevice::selected();
//! if let Some(mut relay) = open_output(&device, LogicalRole::Relay, LogicalState::OPEN)? {
//!     relay.set(LogicalState::CLOSED)?;
//! }
//! ```

mod gpio;

pub use gpio::{open_input, open_output, Esp32Input, Esp32Output};
