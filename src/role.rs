//! Logical pin roles.
//!
//! A role names what a pin *does* on a module (switches the relay, drives the
//! status LED, reads the button) independently of which GPIO implements it.
//! Roles are grouped into [`RoleCategory`] values, and each category has one
//! polarity rule per device.

/// Functional purpose a physical pin can serve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LogicalRole {
    /// Relay coil driver output.
    Relay,
    /// On-board status LED output.
    StatusLed,
    /// Push button input (usually the pairing/flash button on GPIO0).
    Button,
    /// Reed switch or contact input on door-switch modules.
    DoorSensor,
}

impl LogicalRole {
    /// Every role, in declaration order.
    pub const ALL: [LogicalRole; 4] = [
        LogicalRole::Relay,
        LogicalRole::StatusLed,
        LogicalRole::Button,
        LogicalRole::DoorSensor,
    ];

    /// Returns the polarity category this role belongs to.
    #[inline]
    pub const fn category(&self) -> RoleCategory {
        match self {
            LogicalRole::Relay => RoleCategory::Relay,
            LogicalRole::StatusLed => RoleCategory::Led,
            LogicalRole::Button | LogicalRole::DoorSensor => RoleCategory::Input,
        }
    }

    /// Returns `true` for roles the firmware drives, `false` for roles it reads.
    #[inline]
    pub const fn is_output(&self) -> bool {
        !matches!(self.category(), RoleCategory::Input)
    }

    /// Returns the role as a snake_case string.
    ///
    /// # Examples
    ///
    /// ```
    /// use relay_pins::LogicalRole;
    ///
    /// assert_eq!(LogicalRole::Relay.as_str(), "relay");
    /// assert_eq!(LogicalRole::DoorSensor.as_str(), "door_sensor");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogicalRole::Relay => "relay",
            LogicalRole::StatusLed => "status_led",
            LogicalRole::Button => "button",
            LogicalRole::DoorSensor => "door_sensor",
        }
    }

    /// Parse a role from text input.
    ///
    /// Accepts the [`as_str`](Self::as_str) names plus the short aliases
    /// `"led"` and `"door"`. Input is trimmed and case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use relay_pins::LogicalRole;
    ///
    /// assert_eq!(LogicalRole::from_text("relay"), Some(LogicalRole::Relay));
    /// assert_eq!(LogicalRole::from_text(" LED "), Some(LogicalRole::StatusLed));
    /// assert_eq!(LogicalRole::from_text("door"), Some(LogicalRole::DoorSensor));
    /// assert_eq!(LogicalRole::from_text("buzzer"), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        let s = s.trim();
        let is = |name: &str| s.eq_ignore_ascii_case(name);

        if is("relay") {
            Some(LogicalRole::Relay)
        } else if is("status_led") || is("led") {
            Some(LogicalRole::StatusLed)
        } else if is("button") {
            Some(LogicalRole::Button)
        } else if is("door_sensor") || is("door") {
            Some(LogicalRole::DoorSensor)
        } else {
            None
        }
    }
}

impl core::fmt::Display for LogicalRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Group of roles sharing one electrical polarity rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RoleCategory {
    /// Relay outputs; polarity is per device.
    Relay,
    /// LED outputs; polarity is per device.
    Led,
    /// Pulled-up inputs; polarity is fixed for every device.
    Input,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories() {
        assert_eq!(LogicalRole::Relay.category(), RoleCategory::Relay);
        assert_eq!(LogicalRole::StatusLed.category(), RoleCategory::Led);
        assert_eq!(LogicalRole::Button.category(), RoleCategory::Input);
        assert_eq!(LogicalRole::DoorSensor.category(), RoleCategory::Input);
    }

    #[test]
    fn outputs_and_inputs() {
        assert!(LogicalRole::Relay.is_output());
        assert!(LogicalRole::StatusLed.is_output());
        assert!(!LogicalRole::Button.is_output());
        assert!(!LogicalRole::DoorSensor.is_output());
    }

    #[test]
    fn text_round_trip() {
        for role in LogicalRole::ALL {
            assert_eq!(LogicalRole::from_text(role.as_str()), Some(role));
        }
    }

    #[test]
    fn from_text_is_case_insensitive() {
        assert_eq!(
            LogicalRole::from_text("Door_Sensor"),
            Some(LogicalRole::DoorSensor)
        );
        assert_eq!(LogicalRole::from_text("BUTTON"), Some(LogicalRole::Button));
        assert_eq!(LogicalRole::from_text(""), None);
    }
}
