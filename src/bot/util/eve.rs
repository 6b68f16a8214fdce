//! EVE Online-specific utility functions and constants.
//!
//! Solar systems are classified by security status the way the game client rounds it:
//! anything above 0.45 displays as 0.5 or higher and is high-security space.

/// Lowest security status (exclusive) still considered high-security.
pub const HIGH_SECURITY_THRESHOLD: f64 = 0.45;

/// Security band of a solar system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityClass {
    /// Security status above 0.45.
    High,
    /// Security status above 0.0, up to and including 0.45.
    Low,
    /// Security status of 0.0 or below.
    Null,
}

impl SecurityClass {
    /// Classifies a security status.
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(SecurityClass::from_status(0.46), SecurityClass::High);
    /// assert_eq!(SecurityClass::from_status(0.45), SecurityClass::Low);
    /// assert_eq!(SecurityClass::from_status(0.0), SecurityClass::Null);
    /// ```
    pub fn from_status(security_status: f64) -> Self {
        if security_status > HIGH_SECURITY_THRESHOLD {
            Self::High
        } else if security_status > 0.0 {
            Self::Low
        } else {
            Self::Null
        }
    }

    /// Embed colour for the band: green, orange or red.
    pub fn color(&self) -> u32 {
        match self {
            Self::High => 0x04ff00,
            Self::Low => 0xff8400,
            Self::Null => 0xff0000,
        }
    }
}
