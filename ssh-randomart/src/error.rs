//! Error types

use core::fmt;

/// Result type with `ssh-randomart`'s [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Fingerprint decoding errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Fingerprint contains no octets.
    Empty,

    /// Octet group is not exactly two characters long.
    TokenLength {
        /// Zero-based position of the offending group.
        index: usize,

        /// Length of the group in bytes.
        len: usize,
    },

    /// Octet group contains a character which is not a hexadecimal digit.
    InvalidHex {
        /// Zero-based position of the offending group.
        index: usize,
    },
}

impl DecodeError {
    /// Attach the position of the offending octet group to this error.
    pub(crate) fn at(self, index: usize) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::TokenLength { len, .. } => Self::TokenLength { index, len },
            Self::InvalidHex { .. } => Self::InvalidHex { index },
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Empty => write!(f, "fingerprint is empty"),
            DecodeError::TokenLength { index, len } => write!(
                f,
                "octet {index} has invalid length ({len} bytes, expected 2 hex digits)"
            ),
            DecodeError::InvalidHex { index } => write!(f, "octet {index} is not valid hex"),
        }
    }
}

impl core::error::Error for DecodeError {}

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Fingerprint decoding errors.
    Decode(DecodeError),

    /// Random number generator errors.
    #[cfg(feature = "rand_core")]
    RngFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "fingerprint decoding error: {err}"),
            #[cfg(feature = "rand_core")]
            Error::RngFailure => write!(f, "random number generator failure"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            #[cfg(feature = "rand_core")]
            _ => None,
        }
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Error {
        Error::Decode(err)
    }
}
