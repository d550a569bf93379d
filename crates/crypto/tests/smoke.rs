//! Crypto smoke tests: recoverable ECDSA roundtrip and the null-signer law.

use morevp_crypto::{address_from_pubkey, keccak256, recover, sign, Signature, SignerKey};

#[test]
fn sign_recover_smoke() {
    let key = SignerKey::from_slice(&[0x11; 32]).expect("valid key");
    let h = keccak256(b"morevp::crypto::smoke");

    let sig = sign(&h, &key);
    assert!(!sig.is_null());
    let v = sig.as_bytes()[64];
    assert!(v == 27 || v == 28, "v must be biased by 27, got {v}");

    let addr = recover(&h, &sig).expect("recover ok");

    // a different hash must not yield the same signer
    let h2 = keccak256(b"morevp::crypto::sm0ke");
    if let Ok(other) = recover(&h2, &sig) {
        assert_ne!(other, addr);
    }
}

#[test]
fn recovered_address_matches_key_derivation() {
    let secp = secp256k1::Secp256k1::new();
    let sk = secp256k1::SecretKey::from_slice(&[0x42; 32]).unwrap();
    let pk = secp256k1::PublicKey::from_secret_key(&secp, &sk);
    let expect = address_from_pubkey(&pk.serialize_uncompressed());

    let key = SignerKey::from_slice(&[0x42; 32]).unwrap();
    let h = keccak256(b"bind the address to the key");
    let got = recover(&h, &sign(&h, &key)).unwrap();
    assert_eq!(got, expect);
}

#[test]
fn empty_key_is_the_null_signer() {
    let key = SignerKey::from_slice(&[]).expect("empty slice is the null signer");
    assert!(key.is_none());

    let h = keccak256(b"anything");
    assert_eq!(sign(&h, &key), Signature::NULL);
}

#[test]
fn garbage_keys_are_rejected() {
    // zero is not a valid scalar
    assert!(SignerKey::from_slice(&[0u8; 32]).is_err());
    assert!(SignerKey::from_slice(&[1, 2, 3]).is_err());
}

#[test]
fn recover_rejects_ill_formed_signatures() {
    let h = keccak256(b"x");

    // the null signature has no signer
    assert!(recover(&h, &Signature::NULL).is_err());

    // v outside {27, 28}
    let mut bad_v = [0x01u8; 65];
    bad_v[64] = 29;
    assert!(recover(&h, &Signature(bad_v)).is_err());

    // r far above the curve order
    let key = SignerKey::from_slice(&[0x11; 32]).unwrap();
    let mut bad_r = *sign(&h, &key).as_bytes();
    bad_r[..32].copy_from_slice(&[0xFF; 32]);
    assert!(recover(&h, &Signature(bad_r)).is_err());
}
