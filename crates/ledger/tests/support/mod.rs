#![allow(dead_code)]

use morevp_crypto::address_from_pubkey;
use morevp_ledger::{Address, Currency, InputRef, SignerKey, Transaction, TxOutput};

/// A deterministic signer: the secret scalar is `[seed; 32]`, so tests can
/// name their keys by one byte. Seeds above 0xFE exceed the curve order.
pub struct Keypair {
    pub key: SignerKey,
    pub addr: Address,
}

pub fn keypair(seed: u8) -> Keypair {
    let secp = secp256k1::Secp256k1::new();
    let sk = secp256k1::SecretKey::from_slice(&[seed; 32]).expect("seed scalar");
    let pk = secp256k1::PublicKey::from_secret_key(&secp, &sk);
    Keypair {
        key: SignerKey::from_slice(&[seed; 32]).expect("seed scalar"),
        addr: Address::from_bytes(address_from_pubkey(&pk.serialize_uncompressed())),
    }
}

pub fn addr(b: u8) -> Address {
    Address::from_bytes([b; 20])
}

pub fn token(b: u8) -> Currency {
    Currency(addr(b))
}

/// Single-input spend of a deposit at block 1000: 7 to `0xBB…`, 3 change to
/// `0xAA…`, no fee.
pub fn sample_tx() -> Transaction {
    Transaction::new(
        &[InputRef::new(1000, 0, 0)],
        Currency::NATIVE,
        &[TxOutput::new(addr(0xBB), 7), TxOutput::new(addr(0xAA), 3)],
        0,
    )
    .expect("sample tx is well formed")
}

/// Two-input token transfer with a fee.
pub fn sample_token_tx() -> Transaction {
    Transaction::new(
        &[InputRef::new(555_000, 17, 1), InputRef::new(555_000, 17, 0)],
        token(0x7E),
        &[
            TxOutput::new(addr(0xBB), 8_000_000_000),
            TxOutput::new(addr(0xAA), 2_000_000_000),
        ],
        5,
    )
    .expect("sample token tx is well formed")
}
