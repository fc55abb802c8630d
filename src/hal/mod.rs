//! GPIO backends for [`RolePin`](crate::RolePin).
//!
//! # Available Implementations
//!
//! - `mock`: In-memory pins for desktop development and tests
//! - `esp32`: ESP-IDF GPIO drivers opened by table pin number (requires `esp32` feature)

pub mod mock;

#[cfg(feature = "esp32")]
pub mod esp32;

pub use mock::*;

#[cfg(feature = "esp32")]
pub use esp32::*;
