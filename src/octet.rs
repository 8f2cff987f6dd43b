//! Octet Handling
//!
//! This module implements the octet layer of the identifier model. An octet
//! is one 8-bit byte written as two hexadecimal digits, and is the unit the
//! IEEE's 48-bit extended identifiers are decomposed into.
//!
//! # Overview
//!
//! [`Octet`] provides:
//! - Validation of two-hex-digit input
//! - Normalization to lowercase
//! - Binary and reverse-binary string forms
//! - Indexed bit access with Python-style negative indices
//!
//! # Examples
//!
//! ```
//! use macaddress_rs::octet::Octet;
//!
//! # fn example() -> Result<(), macaddress_rs::octet::OctetError> {
//! let octet = Octet::new("A0")?;
//! assert_eq!(octet.normalized(), "a0");
//! assert_eq!(octet.binary(), "10100000");
//! assert_eq!(octet.reverse_binary(), "00000101");
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
    format,
    string::{String, ToString},
};

use core::hash::{Hash, Hasher};
use core::str::FromStr;

/// Number of bits in one octet.
pub const OCTET_BITS: usize = 8;

/// Number of hexadecimal digits in one octet.
pub const OCTET_DIGITS: usize = 2;

/// Errors that can occur when constructing an [`Octet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OctetError {
    /// The input was not exactly two hexadecimal digits.
    InvalidDigits,
}

impl fmt::Display for OctetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OctetError::InvalidDigits => write!(f, "Pass in two hexadecimal digits."),
        }
    }
}

#[cfg(feature = "std")]
impl Error for OctetError {}

/// One 8-bit octet, constructed from two hexadecimal digits.
///
/// An `Octet` keeps the digits exactly as passed in (`original`) alongside
/// the decoded byte value. All other forms are derived on demand.
///
/// # Examples
///
/// ```
/// use macaddress_rs::octet::Octet;
///
/// let octet = Octet::new("0a").unwrap();
/// assert_eq!(octet.value(), 10);
/// assert_eq!(octet.bit(-1), Some('0'));
///
/// assert!(Octet::new("fff").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Octet {
    /// The hexadecimal digits passed in by the caller.
    original: String,
    /// The decoded byte value.
    value: u8,
}

impl Octet {
    /// Create an octet from exactly two hexadecimal digits.
    pub fn new(digits: &str) -> Result<Self, OctetError> {
        if !Self::is_valid(digits) {
            return Err(OctetError::InvalidDigits);
        }

        let value = u8::from_str_radix(digits, 16).map_err(|_| OctetError::InvalidDigits)?;

        Ok(Self {
            original: digits.to_string(),
            value,
        })
    }

    /// Create an octet from a byte value.
    ///
    /// The stored digits are the lowercase hexadecimal form of `value`, so
    /// this constructor cannot fail.
    pub fn from_value(value: u8) -> Self {
        Self {
            original: hex::encode([value]),
            value,
        }
    }

    /// Check whether `digits` is exactly two hexadecimal digits.
    pub fn is_valid(digits: &str) -> bool {
        digits.len() == OCTET_DIGITS && digits.bytes().all(|b| b.is_ascii_hexdigit())
    }

    /// The digits exactly as passed in, case preserved.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The digits with uppercase letters replaced by lowercase letters.
    pub fn normalized(&self) -> String {
        self.original.to_ascii_lowercase()
    }

    /// The decoded byte value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// The binary form of the octet, most-significant bit first.
    ///
    /// Always 8 characters, zero-padded. For example, `"a0"` yields
    /// `"10100000"`.
    pub fn binary(&self) -> String {
        format!("{:08b}", self.value)
    }

    /// The binary form of the octet, least-significant bit first.
    ///
    /// The characters of [`binary`](Self::binary) in reverse order. For
    /// example, `"a0"` yields `"00000101"`.
    pub fn reverse_binary(&self) -> String {
        self.binary().chars().rev().collect()
    }

    /// Return a single character of [`binary`](Self::binary).
    ///
    /// `index` may be negative to count from the end, so `-1` is the
    /// least-significant bit. Out-of-range indices return `None`.
    pub fn bit(&self, index: i32) -> Option<char> {
        let index = if index < 0 {
            index + OCTET_BITS as i32
        } else {
            index
        };

        if (0..OCTET_BITS as i32).contains(&index) {
            self.binary().chars().nth(index as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized())
    }
}

impl FromStr for Octet {
    type Err = OctetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Equality is over the byte value, so "A0" == "a0".
impl PartialEq for Octet {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Octet {}

impl Hash for Octet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}
