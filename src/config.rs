//! Build-time board selection.
//!
//! The target hardware is fixed when the crate is compiled, through the
//! `RELAY_PINS_SKU` environment variable:
//!
//! ```bash
//! RELAY_PINS_SKU="Sonoff Basic" cargo build --release --features esp32
//! ```
//!
//! The variable is required and must match a [`DEVICES`](crate::table::DEVICES)
//! name exactly. An unset or unknown value stops the build. The repository's
//! `.cargo/config.toml` sets it for local builds and tests; a value exported
//! in the environment takes precedence.
//!
//! There is no runtime counterpart: [`BoardConfig`] only reports what was
//! compiled in.
//!
//! # Example
//!
//! ```rust
//! use relay_pins::config::{BoardConfig, ACTIVE_SKU_NAME};
//!
//! let config = BoardConfig::current();
//! assert_eq!(config.name, ACTIVE_SKU_NAME);
//! ```

use crate::device::SkuId;
use crate::table;

/// Environment variable naming the target SKU.
pub const SKU_ENV_VAR: &str = "RELAY_PINS_SKU";

/// Name of the SKU selected at build time.
pub const ACTIVE_SKU_NAME: &str = match option_env!("RELAY_PINS_SKU") {
    Some(name) => name,
    None => panic!("RELAY_PINS_SKU is not set; it must name the target device"),
};

/// SKU selected at build time.
pub const ACTIVE_SKU: SkuId = match table::position_of(ACTIVE_SKU_NAME) {
    Some(sku) => sku,
    None => panic!("RELAY_PINS_SKU does not name a device in the descriptor table"),
};

/// Read-only view of the build-time selection, for logging and status reports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardConfig {
    /// Table position of the selected SKU
    pub sku: SkuId,
    /// SKU name as listed in the device table
    pub name: &'static str,
}

impl BoardConfig {
    /// The selection this firmware was built with
    pub const fn current() -> Self {
        Self {
            sku: ACTIVE_SKU,
            name: ACTIVE_SKU_NAME,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::current()
    }
}
