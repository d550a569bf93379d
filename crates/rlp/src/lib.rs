//! Recursive Length Prefix codec, the canonical Ethereum serialization for
//! byte strings and nested lists.
//!
//! Decoding is *strict*: every length prefix must use its minimal form, and a
//! buffer must contain exactly one item. Anything the encoder would not have
//! produced is rejected, so `decode(encode(x)) == x` and encodings are unique
//! per value. That uniqueness is what makes transaction hashes well defined.

pub mod decode;
pub mod encode;

pub use decode::{decode, expect_arity, uint, MAX_RLP_BYTES, MAX_RLP_DEPTH};
pub use encode::{encode, uint_bytes};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RlpError {
    /// Input is not canonical RLP (truncated, oversized, or a non-minimal form).
    #[error("malformed rlp")]
    Malformed,
    /// A list did not have the fixed number of items the caller demanded.
    #[error("expected list of {expected} items, got {got}")]
    BadArity { expected: usize, got: usize },
    /// A byte-string item where a list was required, or vice versa; also
    /// integer fields that are too wide or zero-padded.
    #[error("field has the wrong rlp shape")]
    BadFieldType,
    /// Bytes left over after the single top-level item.
    #[error("trailing bytes after rlp item")]
    TrailingBytes,
}

pub type Result<T> = core::result::Result<T, RlpError>;

/// One RLP value: a byte string or a list of nested values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Bytes(Vec<u8>),
    List(Vec<Item>),
}

impl Item {
    /// Big-endian minimal-length integer item; zero is the empty string.
    pub fn uint(n: u128) -> Item {
        Item::Bytes(encode::uint_bytes(n))
    }

    pub fn bytes(&self) -> Result<&[u8]> {
        match self {
            Item::Bytes(b) => Ok(b),
            Item::List(_) => Err(RlpError::BadFieldType),
        }
    }

    pub fn list(&self) -> Result<&[Item]> {
        match self {
            Item::Bytes(_) => Err(RlpError::BadFieldType),
            Item::List(items) => Ok(items),
        }
    }
}
