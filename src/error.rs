//! Error types for plotter-motion.
//!
//! Provides unified error handling across configuration, the hardware seam,
//! and pattern lookup. Note that an aborted run is *not* an error: abort is
//! reported through [`RunOutcome`](crate::motion::RunOutcome) /
//! [`HomeOutcome`](crate::motion::HomeOutcome), never through this type.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all plotter-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Hardware port operation error
    Port(PortError),
    /// Pattern table or registry error
    Pattern(PatternError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// A pattern declares a zero step delay
    ZeroDelay(heapless::String<32>),
    /// A pattern has no segments
    EmptyPattern(heapless::String<32>),
    /// A segment has no delta entries
    EmptySegment(heapless::String<32>),
    /// Homing half-period must be non-zero
    ZeroHalfPeriod,
    /// Offset move delay must be non-zero
    ZeroOffsetDelay,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Hardware seam errors.
///
/// Raised by [`MachinePorts`](crate::ports::MachinePorts) backends when a
/// physical line write fails. Input reads and tick waits are infallible
/// (they map to masked register reads and busy-wait loops).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortError {
    /// Writing the drive output lines failed
    OutputWrite,
    /// Switching motor drive power failed
    PowerSwitch,
}

/// Pattern lookup and registry errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Pattern name not found in the registry
    NotFound(heapless::String<32>),
    /// Registry has no free slots
    RegistryFull,
    /// Pattern name too long for the registry
    NameTooLong,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Port(e) => write!(f, "Port error: {}", e),
            Error::Pattern(e) => write!(f, "Pattern error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::ZeroDelay(name) => {
                write!(f, "Pattern '{}' declares a zero step delay", name)
            }
            ConfigError::EmptyPattern(name) => write!(f, "Pattern '{}' has no segments", name),
            ConfigError::EmptySegment(name) => {
                write!(f, "Pattern '{}' has a segment with no delta entries", name)
            }
            ConfigError::ZeroHalfPeriod => write!(f, "Homing half-period must be non-zero"),
            ConfigError::ZeroOffsetDelay => write!(f, "Offset move delay must be non-zero"),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortError::OutputWrite => write!(f, "Drive line write failed"),
            PortError::PowerSwitch => write!(f, "Drive power switch failed"),
        }
    }
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::NotFound(name) => write!(f, "Pattern '{}' not found", name),
            PatternError::RegistryFull => write!(f, "Pattern registry is full"),
            PatternError::NameTooLong => write!(f, "Pattern name too long (max 32)"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PortError> for Error {
    fn from(e: PortError) -> Self {
        Error::Port(e)
    }
}

impl From<PatternError> for Error {
    fn from(e: PatternError) -> Self {
        Error::Pattern(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PortError {}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}
