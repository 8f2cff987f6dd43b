//! Media Access Control Address Handling
//!
//! This module implements the MAC address layer on top of
//! [`ExtendedIdentifier48`]. A MAC address is a 48-bit extended identifier
//! used on a network, so every identifier property (classification,
//! notations, fragments, binary forms) is available here unchanged, plus
//! the MAC-specific classifications:
//!
//! - **Broadcast**: the all-ones address `ff:ff:ff:ff:ff:ff`
//! - **Multicast / unicast**: the least-significant bit of the first octet
//!   (1 = multicast)
//! - **UAA / LAA**: for unicast addresses, the second-least-significant bit
//!   of the first octet (0 = universally administered, 1 = locally
//!   administered)
//!
//! Per IEEE convention the UAA/LAA classification only applies to unicast
//! addresses; both are false for any multicast address, broadcast included.
//!
//! # Examples
//!
//! ```
//! use macaddress_rs::MediaAccessControlAddress;
//!
//! # fn example() -> Result<(), macaddress_rs::AddressError> {
//! let mac = MediaAccessControlAddress::new("01:80:c2:00:00:00")?;
//! assert!(mac.is_multicast());
//! assert!(!mac.is_broadcast());
//! assert!(!mac.is_uaa());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use std::error::Error;

#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::identifier::{
    ExtendedIdentifier48, IdentifierError, IdentifierType, IDENTIFIER_OCTETS,
};
use crate::octet::Octet;

/// The broadcast address in plain notation.
pub const BROADCAST: &str = "ffffffffffff";

/// Errors that can occur when constructing a [`MediaAccessControlAddress`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The input did not match any of the four accepted notations.
    InvalidIdentifier,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidIdentifier => write!(f, "Pass in 12 hexadecimal digits."),
        }
    }
}

#[cfg(feature = "std")]
impl Error for AddressError {}

impl From<IdentifierError> for AddressError {
    fn from(error: IdentifierError) -> Self {
        match error {
            IdentifierError::InvalidIdentifier => AddressError::InvalidIdentifier,
        }
    }
}

/// A media access control (MAC) address.
///
/// Wraps an [`ExtendedIdentifier48`] and adds the MAC-specific
/// classifications. Construction accepts the same four notations as the
/// identifier layer and fails with [`AddressError`] instead, so callers
/// working only with addresses need not know about the identifier layer.
///
/// # Examples
///
/// ```
/// use macaddress_rs::MediaAccessControlAddress;
///
/// let mac = MediaAccessControlAddress::new("a0-b1-c2-d3-e4-f5").unwrap();
/// assert!(mac.is_unicast());
/// assert!(mac.is_uaa());
/// assert!(mac.has_oui());
/// ```
#[derive(Debug, Clone)]
pub struct MediaAccessControlAddress {
    identifier: ExtendedIdentifier48,
}

impl MediaAccessControlAddress {
    /// Parse a MAC address from any of the four accepted notations.
    pub fn new(address: &str) -> Result<Self, AddressError> {
        let identifier = ExtendedIdentifier48::new(address)?;
        Ok(Self { identifier })
    }

    /// Construct a MAC address from its six byte values.
    pub fn from_bytes(bytes: [u8; IDENTIFIER_OCTETS]) -> Self {
        Self {
            identifier: ExtendedIdentifier48::from_bytes(bytes),
        }
    }

    /// Check whether `address` matches one of the four accepted notations.
    pub fn is_valid(address: &str) -> bool {
        ExtendedIdentifier48::is_valid(address)
    }

    /// The underlying 48-bit extended identifier.
    pub fn identifier(&self) -> &ExtendedIdentifier48 {
        &self.identifier
    }

    /// Whether the address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        self.identifier.normalized() == BROADCAST
    }

    /// Whether the address is a multicast address (layer-two multicast,
    /// not layer-three multicast).
    pub fn is_multicast(&self) -> bool {
        self.identifier.first_octet().value() & 0x01 == 0x01
    }

    /// Whether the address is a unicast address.
    pub fn is_unicast(&self) -> bool {
        !self.is_multicast()
    }

    /// Whether the address is a universally-administered address (UAA).
    ///
    /// Only meaningful for unicast addresses; false for any multicast
    /// address.
    pub fn is_uaa(&self) -> bool {
        self.is_unicast() && self.identifier.first_octet().value() & 0x02 == 0x00
    }

    /// Whether the address is a locally-administered address (LAA).
    ///
    /// Only meaningful for unicast addresses; false for any multicast
    /// address.
    pub fn is_laa(&self) -> bool {
        self.is_unicast() && self.identifier.first_octet().value() & 0x02 == 0x02
    }

    // Forwarding accessors for the identifier layer.

    /// The address exactly as passed in, separators and case preserved.
    pub fn original(&self) -> &str {
        self.identifier.original()
    }

    /// The canonical form: lowercase, separators removed, 12 hexadecimal
    /// digits.
    pub fn normalized(&self) -> &str {
        self.identifier.normalized()
    }

    /// The six octets of the address, most-significant first.
    pub fn octets(&self) -> &[Octet; IDENTIFIER_OCTETS] {
        self.identifier.octets()
    }

    /// The address's first (most-significant) octet.
    pub fn first_octet(&self) -> &Octet {
        self.identifier.first_octet()
    }

    /// The six byte values of the address, most-significant first.
    pub fn to_bytes(&self) -> [u8; IDENTIFIER_OCTETS] {
        self.identifier.to_bytes()
    }

    /// Classification of the underlying identifier (EUI, ELI, or unknown).
    pub fn kind(&self) -> IdentifierType {
        self.identifier.kind()
    }

    /// Whether the address has an OUI.
    pub fn has_oui(&self) -> bool {
        self.identifier.has_oui()
    }

    /// Whether the address has a CID.
    pub fn has_cid(&self) -> bool {
        self.identifier.has_cid()
    }

    /// The 48-character binary form of the address.
    pub fn binary(&self) -> String {
        self.identifier.binary()
    }

    /// The 48-character reverse-binary form of the address.
    pub fn reverse_binary(&self) -> String {
        self.identifier.reverse_binary()
    }

    /// Split the address into its organizationally-assigned prefix and
    /// device-specific extension. See
    /// [`ExtendedIdentifier48::to_fragments`].
    pub fn to_fragments(&self, bits: u32) -> (String, String) {
        self.identifier.to_fragments(bits)
    }

    /// The address in plain notation, e.g. `a0b1c2d3e4f5`.
    pub fn to_plain_notation(&self) -> String {
        self.identifier.to_plain_notation()
    }

    /// The address in hyphen notation, e.g. `a0-b1-c2-d3-e4-f5`.
    pub fn to_hyphen_notation(&self) -> String {
        self.identifier.to_hyphen_notation()
    }

    /// The address in colon notation, e.g. `a0:b1:c2:d3:e4:f5`.
    pub fn to_colon_notation(&self) -> String {
        self.identifier.to_colon_notation()
    }

    /// The address in dot notation, e.g. `a0b1.c2d3.e4f5`.
    pub fn to_dot_notation(&self) -> String {
        self.identifier.to_dot_notation()
    }
}

impl fmt::Display for MediaAccessControlAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identifier.normalized())
    }
}

impl FromStr for MediaAccessControlAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq for MediaAccessControlAddress {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for MediaAccessControlAddress {}

impl Hash for MediaAccessControlAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identifier.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MediaAccessControlAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.identifier.normalized())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MediaAccessControlAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}
