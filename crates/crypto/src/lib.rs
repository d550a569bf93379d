//! # MoreVP child chain — crypto primitives
//!
//! Low-level primitives shared by the ledger and wallet crates:
//!
//! * **Hashing** — Keccak-256 (the chain's only digest)
//! * **Signatures** — recoverable secp256k1 ECDSA in the 65-byte
//!   `r(32) ‖ s(32) ‖ v(1)` layout, `v ∈ {27, 28}`
//! * **Addresses** — 20-byte identifiers derived as
//!   `Keccak256(uncompressed_pubkey[1..])[12..]`
//!
//! The all-zero 65-byte value is the *null signature*: it marks an input slot
//! with no signer and is produced only by [`SignerKey::None`], never by ECDSA.
//! Nothing in this crate performs I/O or retains key material beyond the
//! values the caller constructed.

pub mod error;
pub mod hash;
pub mod sig;

pub use error::CryptoError;
pub use hash::keccak256;
pub use sig::{address_from_pubkey, recover, sign, Signature, SignerKey, SIG_LEN};
