//! Canonical account address type for the child chain.
//!
//! # Definition
//! An address is **exactly 20 bytes**, derived from the account's public key
//! as `Keccak256(pubkey)[12..32]` (the right-most 20 bytes of the 32-byte
//! hash). The all-zero value is the *null address*; it fills absent output
//! slots and doubles as the native-currency tag, so it never names an
//! account.
//!
//! # Encodings
//! * Internally and on the wire: raw 20 bytes, always full width (the null
//!   address is twenty zero bytes, not the empty string).
//! * At API boundaries: `0x`-prefixed hex via `Display`/[`Address::from_hex`].
//!
//! # Stability
//! The 20-byte size is canonical for the ledger and for the parent-chain
//! contracts; any future format belongs in a compat layer, not here.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// The null address: padding for absent outputs, tag for the native asset.
    pub const ZERO: Address = Address([0u8; 20]);

    #[inline]
    pub fn from_bytes(b: [u8; 20]) -> Self {
        Address(b)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Parse the `Display` form: `0x` + 40 hex chars (prefix optional).
    pub fn from_hex(s: &str) -> Option<Address> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let raw = hex::decode(digits).ok()?;
        let arr: [u8; 20] = raw.try_into().ok()?;
        Some(Address(arr))
    }
}

impl AsRef<[u8]> for Address {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// True iff `a` can name an account (any 20-byte value except the null one).
#[inline]
pub fn is_account_address(a: &Address) -> bool {
    !a.is_zero()
}

/// The asset a transaction moves: the null address for the parent chain's
/// native asset, a token contract address otherwise.
///
/// Byte-identical to [`Address`] on the wire; distinct here so a currency
/// cannot be handed to an API expecting an owner.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Currency(pub Address);

impl Currency {
    pub const NATIVE: Currency = Currency(Address::ZERO);

    #[inline]
    pub fn is_native(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 20] {
        self.0.as_bytes()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_roundtrip() {
        let a = Address::from_bytes([0xAB; 20]);
        let s = a.to_string();
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 42);
        assert_eq!(Address::from_hex(&s), Some(a));
        assert_eq!(Address::from_hex(&s[2..]), Some(a));
    }

    #[test]
    fn null_address_is_not_an_account() {
        assert!(!is_account_address(&Address::ZERO));
        assert!(is_account_address(&Address::from_bytes([1; 20])));
        assert!(Currency::NATIVE.is_native());
    }
}
