//! Signed transactions: the raw record plus one signature per input slot.

use once_cell::sync::OnceCell;

use morevp_crypto::{self as crypto, Signature, SignerKey, SIG_LEN};
use morevp_rlp::{self as rlp, Item};

use crate::address::Address;
use crate::tx_types::{Transaction, TxDecodeError, TX_INPUTS};

/// Wire arity of the signed envelope: `[raw, sig1, sig2]`.
const SIGNED_TX_FIELDS: usize = 3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SpenderError {
    /// ECDSA recovery failed, or a signature body is ill-formed.
    #[error("signature corrupt")]
    SignatureCorrupt,
    /// A funded input came without a signature, or a padding input came with
    /// one.
    #[error("input missing for signature")]
    InputMissingForSignature,
}

/// A raw transaction wrapped with its two signatures.
///
/// Padding input slots carry the null signature. The encoded form is computed
/// once and memoized; a value that came off the wire keeps the exact bytes it
/// was decoded from. Re-signing always builds a new value — the raw record
/// inside never changes.
#[derive(Clone, Debug)]
pub struct SignedTransaction {
    raw: Transaction,
    sigs: [Signature; TX_INPUTS],
    bytes: OnceCell<Vec<u8>>,
}

impl PartialEq for SignedTransaction {
    fn eq(&self, other: &Self) -> bool {
        // the byte cache is derived state and never part of identity
        self.raw == other.raw && self.sigs == other.sigs
    }
}

impl Eq for SignedTransaction {}

impl SignedTransaction {
    /// Sign `raw` for both input slots over its canonical hash. A
    /// [`SignerKey::None`] slot yields the null signature without touching
    /// ECDSA.
    pub fn sign(raw: Transaction, key1: &SignerKey, key2: &SignerKey) -> Self {
        let h = raw.hash();
        let sigs = [crypto::sign(&h, key1), crypto::sign(&h, key2)];
        Self {
            raw,
            sigs,
            bytes: OnceCell::new(),
        }
    }

    pub fn raw(&self) -> &Transaction {
        &self.raw
    }

    pub fn sigs(&self) -> &[Signature; TX_INPUTS] {
        &self.sigs
    }

    /// The transaction hash commits to the raw encoding only; signatures are
    /// not hashed.
    pub fn hash(&self) -> [u8; 32] {
        self.raw.hash()
    }

    /// Wire bytes `RLP([raw, sig1, sig2])`, memoized on first use.
    pub fn encode(&self) -> &[u8] {
        self.bytes.get_or_init(|| {
            let item = Item::List(vec![
                self.raw.to_item(),
                Item::Bytes(self.sigs[0].as_bytes().to_vec()),
                Item::Bytes(self.sigs[1].as_bytes().to_vec()),
            ]);
            rlp::encode(&item)
        })
    }

    /// Strict parse of wire bytes: one 3-item envelope around one 12-item
    /// field list, signatures exactly 65 bytes. The decoded value keeps
    /// `bytes` as its cached encoding.
    pub fn decode(bytes: &[u8]) -> Result<Self, TxDecodeError> {
        let item = rlp::decode(bytes)?;
        let fields = item.list()?;
        rlp::expect_arity(fields, SIGNED_TX_FIELDS)?;

        let raw = Transaction::from_item(&fields[0])?;
        let sigs = [sig_field(&fields[1])?, sig_field(&fields[2])?];

        let cached = OnceCell::new();
        let _ = cached.set(bytes.to_vec());
        log::trace!("decoded signed tx {}", hex::encode(raw.hash()));
        Ok(Self {
            raw,
            sigs,
            bytes: cached,
        })
    }

    /// Recover the spender address behind each input slot.
    ///
    /// A padding slot must carry the null signature and recovers to `None`;
    /// a funded slot must carry a real signature over the raw tx hash.
    pub fn recover_spenders(&self) -> Result<[Option<Address>; TX_INPUTS], SpenderError> {
        let h = self.raw.hash();
        let mut spenders = [None; TX_INPUTS];
        for (slot, input) in self.raw.inputs.iter().enumerate() {
            let sig = &self.sigs[slot];
            if input.is_null() {
                if !sig.is_null() {
                    return Err(SpenderError::InputMissingForSignature);
                }
                continue;
            }
            if sig.is_null() {
                return Err(SpenderError::InputMissingForSignature);
            }
            let addr = crypto::recover(&h, sig).map_err(|_| SpenderError::SignatureCorrupt)?;
            spenders[slot] = Some(Address::from_bytes(addr));
        }
        Ok(spenders)
    }
}

fn sig_field(item: &Item) -> Result<Signature, TxDecodeError> {
    let b = item.bytes()?;
    if b.len() != SIG_LEN {
        return Err(TxDecodeError::MalformedTransaction);
    }
    let mut arr = [0u8; SIG_LEN];
    arr.copy_from_slice(b);
    Ok(Signature(arr))
}
