//! Recoverable ECDSA over secp256k1.
//!
//! Signatures travel as 65 bytes: the 64-byte compact body followed by the
//! recovery byte `v`, biased by 27 the way the parent chain expects. Input
//! slots without a signer carry [`Signature::NULL`] instead; that value never
//! comes out of the signing backend.

use std::fmt;

use once_cell::sync::Lazy;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{All, Message, Secp256k1, SecretKey};

use crate::error::{CryptoError, Result};
use crate::hash::keccak256;

pub const SIG_LEN: usize = 65;

static SECP: Lazy<Secp256k1<All>> = Lazy::new(Secp256k1::new);

/// 65-byte signature `r ‖ s ‖ v`. All-zero means "no signer for this slot".
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; SIG_LEN]);

impl Signature {
    pub const NULL: Signature = Signature([0u8; SIG_LEN]);

    #[inline]
    pub fn as_bytes(&self) -> &[u8; SIG_LEN] {
        &self.0
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0 == [0u8; SIG_LEN]
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature(0x{})", hex::encode(self.0))
    }
}

/// The signer behind one input slot.
///
/// `None` is for slots that must not be signed (padding inputs, or the second
/// slot of a single-input transaction); signing with it yields the null
/// signature without touching ECDSA.
#[derive(Clone, Copy, Debug)]
pub enum SignerKey {
    Key(SecretKey),
    None,
}

impl SignerKey {
    /// Parse key material. The empty slice is the "no signer" sentinel at the
    /// byte level and maps to `SignerKey::None`; anything else must be a
    /// valid 32-byte secp256k1 scalar.
    pub fn from_slice(b: &[u8]) -> Result<Self> {
        if b.is_empty() {
            return Ok(SignerKey::None);
        }
        let sk = SecretKey::from_slice(b).map_err(|_| CryptoError::InvalidKey)?;
        Ok(SignerKey::Key(sk))
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, SignerKey::None)
    }
}

/// Sign a 32-byte message hash for one input slot.
pub fn sign(msg_hash: &[u8; 32], key: &SignerKey) -> Signature {
    match key {
        SignerKey::None => Signature::NULL,
        SignerKey::Key(sk) => {
            let msg = Message::from_digest(*msg_hash);
            let rec = SECP.sign_ecdsa_recoverable(&msg, sk);
            let (rec_id, compact) = rec.serialize_compact();
            let mut out = [0u8; SIG_LEN];
            out[..64].copy_from_slice(&compact);
            out[64] = 27 + rec_id.to_i32() as u8;
            Signature(out)
        }
    }
}

/// Recover the 20-byte signer address from a message hash and signature.
///
/// The null signature has no signer and is rejected here; callers that treat
/// it as "absent" must branch before recovery.
pub fn recover(msg_hash: &[u8; 32], sig: &Signature) -> Result<[u8; 20]> {
    if sig.is_null() {
        return Err(CryptoError::MalformedSignature);
    }
    let v = sig.0[64];
    if v != 27 && v != 28 {
        return Err(CryptoError::MalformedSignature);
    }
    let rec_id = RecoveryId::from_i32(i32::from(v - 27)).map_err(|_| CryptoError::MalformedSignature)?;
    let rec = RecoverableSignature::from_compact(&sig.0[..64], rec_id)
        .map_err(|_| CryptoError::MalformedSignature)?;
    let msg = Message::from_digest(*msg_hash);
    let pk = SECP
        .recover_ecdsa(&msg, &rec)
        .map_err(|_| CryptoError::RecoveryFailed)?;
    Ok(address_from_pubkey(&pk.serialize_uncompressed()))
}

/// Canonical address derivation: rightmost 20 bytes of
/// `Keccak256(uncompressed_pubkey)` with the 0x04 prefix stripped.
#[inline]
pub fn address_from_pubkey(pk: &[u8; 65]) -> [u8; 20] {
    let hash32 = keccak256(&pk[1..]);
    let mut out = [0u8; 20];
    out.copy_from_slice(&hash32[12..]);
    out
}
