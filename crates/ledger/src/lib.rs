//! # MoreVP child chain — transaction core
//!
//! The value-exchange primitive of the child chain: the canonical transaction
//! record, its deterministic RLP encoding and Keccak-256 hash, and the signed
//! wrapper the operator accepts on the wire.
//!
//! Everything here is pure and synchronous. Values are immutable once
//! constructed, errors are returned, never thrown, and any number of threads
//! may use the API without coordination.

pub mod address;
pub mod config;
pub mod tx_sig;
pub mod tx_types;

pub use address::{is_account_address, Address, Currency};

pub use config::{ChainCfg, CHILD_BLOCK_INTERVAL};

pub use tx_types::{
    InputRef, Transaction, TxDecodeError, TxOutput, TxValidationError, TX_INPUTS, TX_OUTPUTS,
};

pub use tx_sig::{SignedTransaction, SpenderError};

// Signature-side types travel with transactions everywhere; surface them here
// so dependents rarely need the crypto crate directly.
pub use morevp_crypto::{Signature, SignerKey};
