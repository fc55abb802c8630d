//! Lookup errors.
//!
//! Both variants are deterministic failures on static data. Nothing here is
//! transient, so there is no retry path.

use crate::role::LogicalRole;

/// Error returned by descriptor table lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The SKU does not use this role.
    ///
    /// Expected and recoverable: treat it as "feature absent on this
    /// hardware" and skip whatever needs the pin.
    NotBound {
        /// Name of the SKU that was queried.
        sku: &'static str,
        /// Role that has no pin on that SKU.
        role: LogicalRole,
    },
    /// The selector does not name a descriptor in the table.
    ///
    /// The firmware was built or configured for hardware the table does not
    /// describe; treat as fatal at startup.
    UnknownSku,
}

impl BoardError {
    /// Returns `true` for [`NotBound`](Self::NotBound).
    #[inline]
    pub const fn is_not_bound(&self) -> bool {
        matches!(self, BoardError::NotBound { .. })
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::NotBound { sku, role } => {
                write!(f, "{} has no {} pin", sku, role)
            }
            BoardError::UnknownSku => write!(f, "SKU is not in the device table"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_bound_helper() {
        let err = BoardError::NotBound {
            sku: "Sonoff Basic",
            role: LogicalRole::DoorSensor,
        };
        assert!(err.is_not_bound());
        assert!(!BoardError::UnknownSku.is_not_bound());
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_messages() {
        let err = BoardError::NotBound {
            sku: "Sonoff Basic",
            role: LogicalRole::DoorSensor,
        };
        assert_eq!(err.to_string(), "Sonoff Basic has no door_sensor pin");
        assert_eq!(
            BoardError::UnknownSku.to_string(),
            "SKU is not in the device table"
        );
    }
}
