//! Mock GPIO for testing without hardware.
//!
//! [`MockPin`] implements the `embedded-hal` digital traits so a
//! [`RolePin`](crate::RolePin) can be exercised on the desktop.
//!
//! # Example
//!
//! ```rust
//! use embedded_hal::digital::{InputPin, OutputPin};
//! use relay_pins::hal::MockPin;
//! use relay_pins::Level;
//!
//! let mut pin = MockPin::new();
//! pin.set_high().unwrap();
//! assert_eq!(pin.level, Level::High);
//! assert!(pin.is_high().unwrap());
//! assert_eq!(pin.writes, 1);
//! ```

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::polarity::Level;

/// Error reported by a [`MockPin`] with `fail` set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Mock digital pin.
///
/// Records the last level written and how many writes happened. Reads return
/// [`level`](Self::level), so tests set it directly to simulate an input.
#[derive(Debug)]
pub struct MockPin {
    /// Current level on the pin.
    pub level: Level,
    /// Number of `set_*` calls.
    pub writes: usize,
    /// When `true`, every operation fails with [`MockPinError`].
    pub fail: bool,
}

impl MockPin {
    /// Creates a pin sitting at [`Level::Low`].
    pub fn new() -> Self {
        Self::with_level(Level::Low)
    }

    /// Creates a pin sitting at `level`.
    pub fn with_level(level: Level) -> Self {
        Self {
            level,
            writes: 0,
            fail: false,
        }
    }

    /// Creates a pin whose every operation fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    fn check(&self) -> Result<(), MockPinError> {
        if self.fail {
            Err(MockPinError)
        } else {
            Ok(())
        }
    }

    fn write(&mut self, level: Level) -> Result<(), MockPinError> {
        self.check()?;
        self.level = level;
        self.writes += 1;
        Ok(())
    }
}

impl Default for MockPin {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), MockPinError> {
        self.write(Level::Low)
    }

    fn set_high(&mut self) -> Result<(), MockPinError> {
        self.write(Level::High)
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, MockPinError> {
        self.check()?;
        Ok(self.level.is_high())
    }

    fn is_set_low(&mut self) -> Result<bool, MockPinError> {
        self.check()?;
        Ok(!self.level.is_high())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, MockPinError> {
        self.check()?;
        Ok(self.level.is_high())
    }

    fn is_low(&mut self) -> Result<bool, MockPinError> {
        self.check()?;
        Ok(!self.level.is_high())
    }
}
