//! Translation between logical states and physical signal levels.
//!
//! Control logic reasons in [`LogicalState`] values ("relay closed", "LED
//! on"). Pins carry [`Level`] values. The only bridge between the two is
//! [`Polarity::to_level`] and its inverse [`Polarity::to_state`]; device
//! descriptors supply a [`Polarity`], never raw level constants.
//!
//! # Example
//!
//! ```rust
//! use relay_pins::{Level, LogicalState, Polarity};
//!
//! // Sonoff-style relay transistor: pulling the pin low closes the contacts
//! let relay = Polarity::ActiveLow;
//! assert_eq!(relay.to_level(LogicalState::CLOSED), Level::Low);
//! assert_eq!(relay.to_state(Level::High), LogicalState::OPEN);
//! ```

use embedded_hal::digital::PinState;

/// Polarity used for every button and door-sensor input.
///
/// Inputs are wired to ground with the internal pull-up enabled, so an active
/// (pressed, door closed) input reads low. No supported module overrides this.
pub const INPUT_POLARITY: Polarity = Polarity::ActiveLow;

/// Electrical convention of a pin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Polarity {
    /// `On` is driven/read as a high level.
    ActiveHigh,
    /// `On` is driven/read as a low level.
    ActiveLow,
}

impl Polarity {
    /// Maps a logical state to the level to write to, or expect on, the pin.
    ///
    /// Total over both enums.
    #[inline]
    pub const fn to_level(self, state: LogicalState) -> Level {
        match (self, state) {
            (Polarity::ActiveHigh, LogicalState::On) | (Polarity::ActiveLow, LogicalState::Off) => {
                Level::High
            }
            (Polarity::ActiveHigh, LogicalState::Off) | (Polarity::ActiveLow, LogicalState::On) => {
                Level::Low
            }
        }
    }

    /// Maps a pin level back to a logical state. Exact inverse of
    /// [`to_level`](Self::to_level).
    #[inline]
    pub const fn to_state(self, level: Level) -> LogicalState {
        match (self, level) {
            (Polarity::ActiveHigh, Level::High) | (Polarity::ActiveLow, Level::Low) => {
                LogicalState::On
            }
            (Polarity::ActiveHigh, Level::Low) | (Polarity::ActiveLow, Level::High) => {
                LogicalState::Off
            }
        }
    }

    /// Returns `true` for [`ActiveLow`](Self::ActiveLow).
    #[inline]
    pub const fn is_inverted(self) -> bool {
        matches!(self, Polarity::ActiveLow)
    }

    /// Returns the polarity as a snake_case string.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Polarity::ActiveHigh => "active_high",
            Polarity::ActiveLow => "active_low",
        }
    }
}

/// Binary physical signal level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Level {
    /// Logic 0.
    Low = 0,
    /// Logic 1.
    High = 1,
}

impl Level {
    /// Returns the level as `0` or `1`.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Parses `0` or `1`; anything else is not a binary level.
    ///
    /// # Examples
    ///
    /// ```
    /// use relay_pins::Level;
    ///
    /// assert_eq!(Level::from_u8(0), Some(Level::Low));
    /// assert_eq!(Level::from_u8(1), Some(Level::High));
    /// assert_eq!(Level::from_u8(2), None);
    /// ```
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Level::Low),
            1 => Some(Level::High),
            _ => None,
        }
    }

    /// Returns `true` for [`High`](Self::High).
    #[inline]
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for PinState {
    fn from(level: Level) -> Self {
        match level {
            Level::Low => PinState::Low,
            Level::High => PinState::High,
        }
    }
}

impl From<PinState> for Level {
    fn from(state: PinState) -> Self {
        match state {
            PinState::Low => Level::Low,
            PinState::High => Level::High,
        }
    }
}

/// State the control logic reasons about.
///
/// Relays read naturally as open/closed, so [`OPEN`](Self::OPEN) and
/// [`CLOSED`](Self::CLOSED) alias [`Off`](Self::Off) and [`On`](Self::On).
///
/// # Default
///
/// Defaults to [`Off`](Self::Off): relay open, LED dark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogicalState {
    /// Relay open, LED off, input inactive.
    #[default]
    Off,
    /// Relay closed, LED on, input active.
    On,
}

impl LogicalState {
    /// Relay contacts open (load unpowered).
    pub const OPEN: LogicalState = LogicalState::Off;
    /// Relay contacts closed (load powered).
    pub const CLOSED: LogicalState = LogicalState::On;

    /// Returns `true` for [`On`](Self::On).
    #[inline]
    pub const fn is_on(self) -> bool {
        matches!(self, LogicalState::On)
    }

    /// Returns the opposite state.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            LogicalState::Off => LogicalState::On,
            LogicalState::On => LogicalState::Off,
        }
    }
}

impl From<bool> for LogicalState {
    fn from(on: bool) -> Self {
        if on {
            LogicalState::On
        } else {
            LogicalState::Off
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLARITIES: [Polarity; 2] = [Polarity::ActiveHigh, Polarity::ActiveLow];
    const STATES: [LogicalState; 2] = [LogicalState::Off, LogicalState::On];

    #[test]
    fn active_high_mapping() {
        assert_eq!(Polarity::ActiveHigh.to_level(LogicalState::On), Level::High);
        assert_eq!(Polarity::ActiveHigh.to_level(LogicalState::Off), Level::Low);
    }

    #[test]
    fn active_low_inverts() {
        assert_eq!(Polarity::ActiveLow.to_level(LogicalState::CLOSED), Level::Low);
        assert_eq!(Polarity::ActiveLow.to_level(LogicalState::OPEN), Level::High);
    }

    #[test]
    fn state_survives_level_translation() {
        for polarity in POLARITIES {
            for state in STATES {
                assert_eq!(polarity.to_state(polarity.to_level(state)), state);
            }
        }
    }

    #[test]
    fn polarities_disagree_on_every_state() {
        for state in STATES {
            assert_ne!(
                Polarity::ActiveHigh.to_level(state),
                Polarity::ActiveLow.to_level(state)
            );
        }
    }

    #[test]
    fn relay_aliases() {
        assert_eq!(LogicalState::OPEN, LogicalState::Off);
        assert_eq!(LogicalState::CLOSED, LogicalState::On);
        assert_eq!(LogicalState::default(), LogicalState::OPEN);
    }

    #[test]
    fn level_numeric_values() {
        assert_eq!(Level::Low.as_u8(), 0);
        assert_eq!(Level::High.as_u8(), 1);
        assert_eq!(Level::from_u8(255), None);
    }

    #[test]
    fn pin_state_conversions() {
        assert_eq!(PinState::from(Level::High), PinState::High);
        assert_eq!(Level::from(PinState::Low), Level::Low);
    }

    #[test]
    fn inputs_are_pulled_up() {
        assert!(INPUT_POLARITY.is_inverted());
        assert_eq!(INPUT_POLARITY.to_state(Level::Low), LogicalState::On);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(LogicalState::On.toggled(), LogicalState::Off);
        assert_eq!(LogicalState::Off.toggled(), LogicalState::On);
    }
}
