#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

pub mod address;
pub mod identifier;
pub mod octet;

// Re-export main types without glob imports to avoid conflicts
pub use address::{AddressError, MediaAccessControlAddress, BROADCAST};
pub use identifier::{
    ExtendedIdentifier48, IdentifierError, IdentifierType, IDENTIFIER_BITS, IDENTIFIER_DIGITS,
    IDENTIFIER_OCTETS,
};
pub use octet::{Octet, OctetError};

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(test)]
mod tests {
    use crate::{
        ExtendedIdentifier48, IdentifierType, MediaAccessControlAddress, Octet, BROADCAST,
        IDENTIFIER_BITS, IDENTIFIER_OCTETS,
    };

    #[cfg(not(feature = "std"))]
    use alloc::string::ToString;

    #[test]
    fn test_layered_construction() {
        // Raw text flows octet -> identifier -> address
        let octet = Octet::new("a0").unwrap();
        assert_eq!(octet.binary(), "10100000");

        let identifier = ExtendedIdentifier48::new("a0-b1-c2-d3-e4-f5").unwrap();
        assert_eq!(identifier.first_octet(), &octet);
        assert_eq!(identifier.binary().len(), IDENTIFIER_BITS);
        assert_eq!(identifier.octets().len(), IDENTIFIER_OCTETS);

        let mac = MediaAccessControlAddress::new(identifier.original()).unwrap();
        assert_eq!(mac.identifier(), &identifier);
        assert_eq!(mac.kind(), IdentifierType::Unique);
        assert!(mac.is_unicast());
    }

    #[test]
    fn test_broadcast_constant() {
        let mac = MediaAccessControlAddress::new(BROADCAST).unwrap();
        assert!(mac.is_broadcast());
        assert_eq!(mac.to_colon_notation(), "ff:ff:ff:ff:ff:ff");
    }

    #[test]
    fn test_error_kinds_are_distinct() {
        let identifier_error = ExtendedIdentifier48::new("bogus").unwrap_err();
        let address_error = MediaAccessControlAddress::new("bogus").unwrap_err();

        // Same message, different kinds
        assert_eq!(
            identifier_error.to_string(),
            address_error.to_string()
        );
    }
}
