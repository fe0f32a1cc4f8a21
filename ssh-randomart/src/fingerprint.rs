//! Hex-encoded key fingerprints.

use crate::{
    DecodeError, Directions, Error, Frames, Randomart, Result, Snapshot, Snapshots, Walk,
};
use alloc::{boxed::Box, string::String, vec::Vec};
use core::{
    fmt::{self, Display},
    str::FromStr,
};

#[cfg(feature = "rand_core")]
use rand_core::TryCryptoRng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize, de, ser};

/// Prefix `ssh-keygen -E md5` puts in front of hex fingerprints.
const MD5_PREFIX: &str = "MD5:";

/// Separator between octets.
const SEPARATOR: char = ':';

/// Decode a single octet group of exactly two hex digits (either case).
///
/// ```
/// # fn main() -> Result<(), ssh_randomart::DecodeError> {
/// let byte = ssh_randomart::decode_token("6C")?;
/// assert_eq!(format!("{byte:08b}"), "01101100");
/// # Ok(())
/// # }
/// ```
pub fn decode_token(token: &str) -> core::result::Result<u8, DecodeError> {
    if token.len() != 2 {
        return Err(DecodeError::TokenLength {
            index: 0,
            len: token.len(),
        });
    }

    let mut byte = [0u8; 1];
    hex::decode_to_slice(token, &mut byte).map_err(|_| DecodeError::InvalidHex { index: 0 })?;
    Ok(byte[0])
}

/// Key fingerprint: a non-empty string of octets driving the bishop's walk.
///
/// # Parsing/serializing fingerprint strings
///
/// The [`FromStr`] and [`Display`] impls on [`Fingerprint`] can be used to
/// parse and serialize fingerprints from the colon-separated hex format.
/// Parsing is case-insensitive and accepts an optional `MD5:` prefix;
/// serializing always produces lower case without a prefix.
///
/// ### Example
///
/// ```text
/// 16:27:ac:a5:76:28:2d:36:63:1b:56:4d:eb:df:a6:48
/// ```
///
/// # `serde` support
///
/// When the `serde` feature of this crate is enabled, this type receives impls
/// of [`Deserialize`][`serde::Deserialize`] and [`Serialize`][`serde::Serialize`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Fingerprint(Box<[u8]>);

impl Fingerprint {
    /// Size of a randomly generated fingerprint, matching an MD5 digest.
    pub const DEFAULT_SIZE: usize = 16;

    /// Create a fingerprint from raw octets.
    ///
    /// # Returns
    /// - `DecodeError::Empty` if `bytes` is empty.
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Result<Self> {
        let bytes = bytes.into();

        if bytes.is_empty() {
            return Err(DecodeError::Empty.into());
        }

        Ok(Self(bytes))
    }

    /// Generate a random fingerprint of [`Fingerprint::DEFAULT_SIZE`] octets.
    #[cfg(feature = "rand_core")]
    pub fn random<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        let mut bytes = [0u8; Self::DEFAULT_SIZE];
        rng.try_fill_bytes(&mut bytes).map_err(|_| Error::RngFailure)?;

        Self::new(bytes.as_slice())
    }

    /// Get the raw octets of the fingerprint.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of octets in the fingerprint.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the moves encoded in this fingerprint.
    pub fn directions(&self) -> Directions<'_> {
        Directions::new(self.as_bytes())
    }

    /// Iterate over the state of the walk after each move.
    pub fn snapshots(&self) -> Snapshots<Directions<'_>> {
        Snapshots::new(self.directions())
    }

    /// Run the whole walk and take the final snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let mut walk = Walk::new();

        for m in self.directions() {
            walk.apply(m.direction);
        }

        walk.snapshot(true)
    }

    /// Get a "randomart" renderer for the final board.
    pub fn randomart(&self) -> Randomart<'static> {
        Randomart::new(self.snapshot())
    }

    /// Format "randomart" for this fingerprint using the provided formatter.
    pub fn fmt_randomart(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.randomart().fmt(f)
    }

    /// Render "randomart" hash visualization for this fingerprint as a string.
    ///
    /// ```text
    /// +-----------------+
    /// |        .        |
    /// |       + .       |
    /// |      . B .      |
    /// |     o * +       |
    /// |    X * S        |
    /// |   + O o . .     |
    /// |    .   E . o    |
    /// |       . . o     |
    /// |        . .      |
    /// +-----------------+
    /// ```
    pub fn to_randomart(&self) -> String {
        use alloc::string::ToString;
        self.randomart().to_string()
    }

    /// Render every step of the walk, one board per move.
    pub fn frames(&self) -> Frames<'_> {
        Frames::new(self.as_bytes())
    }
}

impl AsRef<[u8]> for Fingerprint {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }

            write!(f, "{byte:02x}")?;
        }

        Ok(())
    }
}

impl FromStr for Fingerprint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.strip_prefix(MD5_PREFIX).unwrap_or(s);

        if s.is_empty() {
            return Err(DecodeError::Empty.into());
        }

        let bytes = s
            .split(SEPARATOR)
            .enumerate()
            .map(|(index, token)| decode_token(token).map_err(|err| err.at(index)))
            .collect::<core::result::Result<Vec<u8>, DecodeError>>()?;

        Self::new(bytes)
    }
}

impl TryFrom<&[u8]> for Fingerprint {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes)
    }
}

impl TryFrom<Vec<u8>> for Fingerprint {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::new(bytes)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Fingerprint {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        use alloc::string::ToString;
        self.to_string().serialize(serializer)
    }
}
