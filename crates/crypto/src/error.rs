#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("invalid private key")]
    InvalidKey,
    #[error("malformed signature")]
    MalformedSignature,
    #[error("public key recovery failed")]
    RecoveryFailed,
}

pub type Result<T> = core::result::Result<T, CryptoError>;
