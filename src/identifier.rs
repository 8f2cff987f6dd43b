//! 48-Bit Extended Identifier Handling
//!
//! This module implements the core identifier model for the IEEE's 48-bit
//! extended unique identifiers (EUI-48) and extended local identifiers
//! (ELI-48). The first 24 or 36 bits of an EUI are an organizationally
//! unique identifier (OUI); the first 24 or 36 bits of an ELI are a
//! company ID (CID).
//!
//! # Overview
//!
//! [`ExtendedIdentifier48`] provides:
//! - Parsing of the four common textual notations (plain, hyphen, colon, dot)
//! - Normalization to a canonical 12-digit lowercase form
//! - Decomposition into six [`Octet`]s
//! - Classification into EUI (`unique`), ELI (`local`), or `unknown` from
//!   the low-order bits of the first octet
//! - Fragment splitting into the organizationally-assigned prefix and the
//!   device-specific extension
//! - Re-serialization to any of the four notations
//!
//! # Accepted Notations
//!
//! | Notation | Example              |
//! |----------|----------------------|
//! | plain    | `a0b1c2d3e4f5`       |
//! | hyphen   | `a0-b1-c2-d3-e4-f5`  |
//! | colon    | `a0:b1:c2:d3:e4:f5`  |
//! | dot      | `a0b1.c2d3.e4f5`     |
//!
//! Digits may be upper- or lowercase; notations must not be mixed.
//!
//! # Examples
//!
//! ```
//! use macaddress_rs::identifier::{ExtendedIdentifier48, IdentifierType};
//!
//! # fn example() -> Result<(), macaddress_rs::identifier::IdentifierError> {
//! let identifier = ExtendedIdentifier48::new("A0-B1-C2-D3-E4-F5")?;
//!
//! assert_eq!(identifier.normalized(), "a0b1c2d3e4f5");
//! assert_eq!(identifier.kind(), IdentifierType::Unique);
//! assert!(identifier.has_oui());
//!
//! let (oui, extension) = identifier.to_fragments(24);
//! assert_eq!(oui, "a0b1c2");
//! assert_eq!(extension, "d3e4f5");
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
use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::octet::Octet;

/// Number of octets in a 48-bit extended identifier.
pub const IDENTIFIER_OCTETS: usize = 6;

/// Number of hexadecimal digits in a 48-bit extended identifier.
pub const IDENTIFIER_DIGITS: usize = 12;

/// Number of bits in a 48-bit extended identifier.
pub const IDENTIFIER_BITS: usize = 48;

/// Errors that can occur when constructing an [`ExtendedIdentifier48`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The input did not match any of the four accepted notations.
    InvalidIdentifier,
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierError::InvalidIdentifier => write!(f, "Pass in 12 hexadecimal digits."),
        }
    }
}

#[cfg(feature = "std")]
impl Error for IdentifierError {}

/// Classification of a 48-bit extended identifier.
///
/// The two least-significant bits of the first octet determine whether an
/// identifier is an EUI (`00` = unique); the four least-significant bits
/// determine whether it is an ELI (`1010` = local). Anything else is
/// unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierType {
    /// EUI-48: the identifier carries an OUI.
    Unique,
    /// ELI-48: the identifier carries a CID.
    Local,
    /// Neither an EUI nor an ELI.
    Unknown,
}

impl IdentifierType {
    /// The lowercase name of the classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierType::Unique => "unique",
            IdentifierType::Local => "local",
            IdentifierType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for IdentifierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A 48-bit extended identifier (EUI-48 or ELI-48).
///
/// Constructed from any of the four accepted notations and immutable
/// afterwards. The identifier keeps the raw input (`original`), the
/// canonical 12-digit lowercase form (`normalized`), and its six octets.
///
/// Equality and hashing use the normalized form, so the same identifier
/// compares equal regardless of input notation or case.
///
/// # Examples
///
/// ```
/// use macaddress_rs::ExtendedIdentifier48;
///
/// let a = ExtendedIdentifier48::new("a0:b1:c2:d3:e4:f5").unwrap();
/// let b = ExtendedIdentifier48::new("A0B1.C2D3.E4F5").unwrap();
/// assert_eq!(a, b);
///
/// assert!(ExtendedIdentifier48::new("0a1b2c3d4e5g").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ExtendedIdentifier48 {
    /// The identifier exactly as passed in by the caller.
    original: String,
    /// Lowercase, separator-free form; always 12 hexadecimal digits.
    normalized: String,
    /// The six octets, most-significant first.
    octets: [Octet; IDENTIFIER_OCTETS],
}

impl ExtendedIdentifier48 {
    /// Parse an identifier from any of the four accepted notations.
    pub fn new(identifier: &str) -> Result<Self, IdentifierError> {
        if !Self::is_valid(identifier) {
            return Err(IdentifierError::InvalidIdentifier);
        }

        let normalized: String = identifier
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | ':' | '.'))
            .collect();

        // Validation guarantees 12 hexadecimal digits at this point.
        let bytes = hex::decode(&normalized).map_err(|_| IdentifierError::InvalidIdentifier)?;
        let bytes: [u8; IDENTIFIER_OCTETS] = bytes
            .try_into()
            .map_err(|_| IdentifierError::InvalidIdentifier)?;

        Ok(Self {
            original: identifier.to_string(),
            normalized,
            octets: bytes.map(Octet::from_value),
        })
    }

    /// Construct an identifier from its six byte values.
    ///
    /// The stored original is the plain lowercase notation, so this
    /// constructor cannot fail.
    pub fn from_bytes(bytes: [u8; IDENTIFIER_OCTETS]) -> Self {
        let normalized = hex::encode(bytes);

        Self {
            original: normalized.clone(),
            normalized,
            octets: bytes.map(Octet::from_value),
        }
    }

    /// Check whether `identifier` matches one of the four accepted
    /// notations.
    pub fn is_valid(identifier: &str) -> bool {
        Self::is_plain(identifier)
            || Self::is_grouped(identifier, '-', 2)
            || Self::is_grouped(identifier, ':', 2)
            || Self::is_grouped(identifier, '.', 4)
    }

    fn is_plain(identifier: &str) -> bool {
        identifier.len() == IDENTIFIER_DIGITS
            && identifier.bytes().all(|b| b.is_ascii_hexdigit())
    }

    fn is_grouped(identifier: &str, separator: char, digits_per_group: usize) -> bool {
        let parts: Vec<&str> = identifier.split(separator).collect();

        parts.len() == IDENTIFIER_DIGITS / digits_per_group
            && parts.iter().all(|part| {
                part.len() == digits_per_group && part.bytes().all(|b| b.is_ascii_hexdigit())
            })
    }

    /// The identifier exactly as passed in, separators and case preserved.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The canonical form: lowercase, with all hyphens, colons, and dots
    /// removed. Always 12 hexadecimal digits.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The six octets of the identifier, most-significant first.
    pub fn octets(&self) -> &[Octet; IDENTIFIER_OCTETS] {
        &self.octets
    }

    /// The identifier's first (most-significant) octet.
    pub fn first_octet(&self) -> &Octet {
        &self.octets[0]
    }

    /// The six byte values of the identifier, most-significant first.
    pub fn to_bytes(&self) -> [u8; IDENTIFIER_OCTETS] {
        let mut bytes = [0u8; IDENTIFIER_OCTETS];
        for (byte, octet) in bytes.iter_mut().zip(self.octets.iter()) {
            *byte = octet.value();
        }
        bytes
    }

    /// Classify the identifier from the low-order bits of its first octet.
    pub fn kind(&self) -> IdentifierType {
        let first = self.first_octet().value();

        if first & 0x03 == 0x00 {
            IdentifierType::Unique
        } else if first & 0x0f == 0x0a {
            IdentifierType::Local
        } else {
            IdentifierType::Unknown
        }
    }

    /// Whether the identifier has an OUI. True exactly when it is an EUI.
    pub fn has_oui(&self) -> bool {
        self.kind() == IdentifierType::Unique
    }

    /// Whether the identifier has a CID. True exactly when it is an ELI.
    pub fn has_cid(&self) -> bool {
        self.kind() == IdentifierType::Local
    }

    /// The binary form of the identifier: each octet's binary form,
    /// most-significant bit first, concatenated in octet order.
    ///
    /// Always 48 characters.
    pub fn binary(&self) -> String {
        self.octets.iter().map(|octet| octet.binary()).collect()
    }

    /// The reverse-binary form of the identifier: each octet's bits in
    /// reverse order, concatenated in octet order.
    ///
    /// Note this is per-octet bit reversal, not a reversal of the whole
    /// 48-character string. Always 48 characters.
    pub fn reverse_binary(&self) -> String {
        self.octets
            .iter()
            .map(|octet| octet.reverse_binary())
            .collect()
    }

    /// Split the identifier into its two fragments: the organizationally-
    /// assigned prefix (the first `bits` bits) and the device- or
    /// object-specific extension.
    ///
    /// For an EUI the prefix is the 24- or 36-bit OUI; for an ELI it is the
    /// 24- or 36-bit CID. The split is made at `bits / 4` hexadecimal
    /// digits, clamped to the identifier's length.
    ///
    /// # Examples
    ///
    /// ```
    /// use macaddress_rs::ExtendedIdentifier48;
    ///
    /// let identifier = ExtendedIdentifier48::new("a0b1c2d3e4f5").unwrap();
    /// assert_eq!(identifier.to_fragments(24), ("a0b1c2".to_string(), "d3e4f5".to_string()));
    /// assert_eq!(identifier.to_fragments(36), ("a0b1c2d3e".to_string(), "4f5".to_string()));
    /// ```
    pub fn to_fragments(&self, bits: u32) -> (String, String) {
        let digits = ((bits / 4) as usize).min(self.normalized.len());
        let (prefix, suffix) = self.normalized.split_at(digits);
        (prefix.to_string(), suffix.to_string())
    }

    /// The identifier in plain notation, e.g. `a0b1c2d3e4f5`.
    pub fn to_plain_notation(&self) -> String {
        self.normalized.clone()
    }

    /// The identifier in hyphen notation, e.g. `a0-b1-c2-d3-e4-f5`.
    pub fn to_hyphen_notation(&self) -> String {
        self.joined_pairs("-")
    }

    /// The identifier in colon notation, e.g. `a0:b1:c2:d3:e4:f5`.
    pub fn to_colon_notation(&self) -> String {
        self.joined_pairs(":")
    }

    /// The identifier in dot notation, e.g. `a0b1.c2d3.e4f5`.
    pub fn to_dot_notation(&self) -> String {
        let groups: Vec<&str> = (0..3)
            .map(|index| &self.normalized[index * 4..index * 4 + 4])
            .collect();
        groups.join(".")
    }

    fn joined_pairs(&self, separator: &str) -> String {
        let pairs: Vec<String> = self.octets.iter().map(|octet| octet.normalized()).collect();
        pairs.join(separator)
    }
}

impl fmt::Display for ExtendedIdentifier48 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for ExtendedIdentifier48 {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Equality is over the normalized form, so notation and case do not matter.
impl PartialEq for ExtendedIdentifier48 {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for ExtendedIdentifier48 {}

impl Hash for ExtendedIdentifier48 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ExtendedIdentifier48 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ExtendedIdentifier48 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Self::new(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::{format, string::ToString};

    #[test]
    fn test_identifier_four_notations() {
        let notations = [
            "a0b1c2d3e4f5",
            "a0-b1-c2-d3-e4-f5",
            "a0:b1:c2:d3:e4:f5",
            "a0b1.c2d3.e4f5",
            "A0B1C2D3E4F5",
            "A0-B1-C2-D3-E4-F5",
        ];

        for notation in notations {
            let identifier = ExtendedIdentifier48::new(notation).unwrap();
            assert_eq!(identifier.original(), notation);
            assert_eq!(identifier.normalized(), "a0b1c2d3e4f5");
            assert_eq!(identifier.kind(), IdentifierType::Unique);
            assert_eq!(identifier.octets().len(), 6);
        }
    }

    #[test]
    fn test_identifier_classification() {
        let unique = ExtendedIdentifier48::new("a0-b1-c2-d3-e4-f5").unwrap();
        assert_eq!(unique.kind(), IdentifierType::Unique);
        assert_eq!(unique.kind().as_str(), "unique");
        assert!(unique.has_oui());
        assert!(!unique.has_cid());

        let local = ExtendedIdentifier48::new("0a1b2c3d4e5f").unwrap();
        assert_eq!(local.kind(), IdentifierType::Local);
        assert_eq!(local.kind().as_str(), "local");
        assert!(!local.has_oui());
        assert!(local.has_cid());

        let unknown = ExtendedIdentifier48::new("ffffffffffff").unwrap();
        assert_eq!(unknown.kind(), IdentifierType::Unknown);
        assert_eq!(unknown.kind().as_str(), "unknown");
        assert!(!unknown.has_oui());
        assert!(!unknown.has_cid());
    }

    #[test]
    fn test_identifier_binary() {
        let identifier = ExtendedIdentifier48::new("a0-b1-c2-d3-e4-f5").unwrap();

        assert_eq!(
            identifier.binary(),
            "101000001011000111000010110100111110010011110101"
        );
        assert_eq!(
            identifier.reverse_binary(),
            "000001011000110101000011110010110010011110101111"
        );
        assert_eq!(identifier.binary().len(), 48);
        assert_eq!(identifier.reverse_binary().len(), 48);
    }

    #[test]
    fn test_identifier_first_octet() {
        let identifier = ExtendedIdentifier48::new("a0b1c2d3e4f5").unwrap();
        assert_eq!(identifier.first_octet().normalized(), "a0");
        assert_eq!(identifier.first_octet().binary(), "10100000");
    }

    #[test]
    fn test_identifier_fragments() {
        let identifier = ExtendedIdentifier48::new("A0-B1-C2-D3-E4-F5").unwrap();

        let (oui, extension) = identifier.to_fragments(24);
        assert_eq!(oui, "a0b1c2");
        assert_eq!(extension, "d3e4f5");

        let (oui, extension) = identifier.to_fragments(36);
        assert_eq!(oui, "a0b1c2d3e");
        assert_eq!(extension, "4f5");

        // Concatenation restores the normalized form at any aligned split
        for bits in (0..=48).step_by(4) {
            let (prefix, suffix) = identifier.to_fragments(bits);
            assert_eq!(prefix + &suffix, identifier.normalized());
        }
    }

    #[test]
    fn test_identifier_notations_out() {
        let identifier = ExtendedIdentifier48::new("A0B1.C2D3.E4F5").unwrap();

        assert_eq!(identifier.to_plain_notation(), "a0b1c2d3e4f5");
        assert_eq!(identifier.to_hyphen_notation(), "a0-b1-c2-d3-e4-f5");
        assert_eq!(identifier.to_colon_notation(), "a0:b1:c2:d3:e4:f5");
        assert_eq!(identifier.to_dot_notation(), "a0b1.c2d3.e4f5");
        assert_eq!(identifier.to_string(), "a0b1c2d3e4f5");
    }

    #[test]
    fn test_identifier_round_trip() {
        let identifier = ExtendedIdentifier48::new("a0:b1:c2:d3:e4:f5").unwrap();
        let reparsed = ExtendedIdentifier48::new(&identifier.to_plain_notation()).unwrap();
        assert_eq!(reparsed.normalized(), identifier.normalized());
        assert_eq!(reparsed, identifier);
    }

    #[test]
    fn test_identifier_bytes() {
        let identifier = ExtendedIdentifier48::new("a0b1c2d3e4f5").unwrap();
        assert_eq!(identifier.to_bytes(), [0xa0, 0xb1, 0xc2, 0xd3, 0xe4, 0xf5]);

        let from_bytes = ExtendedIdentifier48::from_bytes([0xa0, 0xb1, 0xc2, 0xd3, 0xe4, 0xf5]);
        assert_eq!(from_bytes.normalized(), "a0b1c2d3e4f5");
        assert_eq!(from_bytes, identifier);
    }

    #[test]
    fn test_identifier_invalid() {
        let inputs = [
            "",
            "0a",
            "0a1b2c3d4e5",
            "0a1b2c3d4e5f6",
            "0a1b2c3d4e5g",
            "-0a-1b-2c-3d-4e-5f",
            "0a-1b-2c-3d-4e-5f-",
            "a0:b1:c2:d3:e4",
            "a0-b1:c2-d3:e4-f5",
            "a0b1.c2d3.e4f5.0011",
            "a0 b1 c2 d3 e4 f5",
        ];

        for input in inputs {
            let result = ExtendedIdentifier48::new(input);
            assert!(result.is_err(), "expected {:?} to be rejected", input);
            assert_eq!(
                format!("{}", result.unwrap_err()),
                "Pass in 12 hexadecimal digits."
            );
        }
    }

    #[test]
    fn test_identifier_equality_across_notations() {
        let a = ExtendedIdentifier48::new("A0-B1-C2-D3-E4-F5").unwrap();
        let b = ExtendedIdentifier48::new("a0:b1:c2:d3:e4:f5").unwrap();
        let c = ExtendedIdentifier48::new("a0b1c2d3e4f5").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);

        let d = ExtendedIdentifier48::new("0a1b2c3d4e5f").unwrap();
        assert_ne!(a, d);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_identifier_serde_round_trip() {
        let identifier = ExtendedIdentifier48::new("A0-B1-C2-D3-E4-F5").unwrap();

        let json = serde_json::to_string(&identifier).unwrap();
        assert_eq!(json, "\"a0b1c2d3e4f5\"");

        let parsed: ExtendedIdentifier48 = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, identifier);

        let rejected: Result<ExtendedIdentifier48, _> = serde_json::from_str("\"nonsense\"");
        assert!(rejected.is_err());
    }
}
