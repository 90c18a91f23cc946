//! Errors reported by the platform device-management subsystem.
use core::fmt::{Display, Formatter};

/// Why the registration service refused a device.
///
/// [RegisterError::code] gives the negative errno-style failure code that diagnostics print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterError {
    /// The category name is empty, too long or contains a path separator.
    InvalidName,
    /// A device with the same category and identity is already registered.
    Exists,
    /// Storage for the device could not be allocated.
    NoMemory,
    /// A resource the device needs is held by someone else.
    Busy,
    /// Any other failure code.
    Other(i32),
}

impl RegisterError {
    pub const fn code(&self) -> i32 {
        match self {
            RegisterError::InvalidName => -22,
            RegisterError::Exists => -17,
            RegisterError::NoMemory => -12,
            RegisterError::Busy => -16,
            RegisterError::Other(code) => *code,
        }
    }
}

impl Display for RegisterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            RegisterError::InvalidName => f.write_str("invalid device name"),
            RegisterError::Exists => f.write_str("device already registered"),
            RegisterError::NoMemory => f.write_str("out of memory"),
            RegisterError::Busy => f.write_str("resource busy"),
            RegisterError::Other(code) => write!(f, "error {}", code),
        }
    }
}

/// Errors a [crate::driver::PlatformDriver] may return from probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    /// The device carries no platform data, or data of the wrong type.
    MissingPlatformData,
    /// The hardware did not respond as expected.
    NoDevice,
    /// Custom driver-specific information.
    Customized { info: &'static str },
}

impl Display for ProbeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ProbeError::MissingPlatformData => f.write_str("missing platform data"),
            ProbeError::NoDevice => f.write_str("no such device"),
            ProbeError::Customized { info } => f.write_str(info),
        }
    }
}

/// Errors from selecting and booting a machine profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineError {
    /// No registered machine is compatible with the running hardware.
    NoMatch,
    /// A machine has already been selected and brought up.
    AlreadyBooted,
}

impl Display for MachineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            MachineError::NoMatch => f.write_str("no compatible machine"),
            MachineError::AlreadyBooted => f.write_str("machine already booted"),
        }
    }
}
