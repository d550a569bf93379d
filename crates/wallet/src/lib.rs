//! # MoreVP child chain — wallet-side transaction assembly
//!
//! Turns "spend these UTXOs, pay that receiver" into a canonical raw
//! transaction: positional slot mapping, change computation, single-currency
//! enforcement. Signing and encoding live in the ledger and crypto crates
//! and are re-exported here so a caller can run the whole
//! build → sign → encode flow from one import.

pub mod builder;

pub use builder::{create_from_utxos, BuildError, Funds, Payment, Utxo};

pub use morevp_crypto::{Signature, SignerKey};
pub use morevp_ledger::{Address, Currency, SignedTransaction, Transaction};
