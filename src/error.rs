// Engine Errors
// Every failure is a typed variant returned to the caller; nothing is
// retried and nothing is fatal to the process

use thiserror::Error;

/// Errors surfaced by key construction, encryption, and decryption.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The message's integer encoding is at least as large as the
    /// modulus, so decryption could not recover it unambiguously.
    #[error("message too large for the modulus; encrypt it in pieces")]
    MessageTooLarge,

    /// Decryption was attempted on a publicly instantiated engine.
    #[error("a publicly instantiated engine may not decrypt")]
    DecryptionNotPermitted,

    /// The requested exponent has no inverse modulo phi(n).
    #[error("exponent is not coprime to phi(n); no private exponent exists")]
    InvalidKey,

    /// Public instantiation cannot generate an exponent: phi(n) is
    /// unknowable without the prime factors.
    #[error("public instantiation requires an explicit exponent; phi(n) is unavailable")]
    ExponentRequired,

    /// The incremental exponent search reached phi(n) without finding
    /// a coprime candidate.
    #[error("no exponent coprime to phi(n) found below phi(n)")]
    ExponentSearchExhausted,

    /// Keypair generation was asked for an unusable modulus size.
    #[error("invalid key bit length {0}: must be even and at least 512")]
    InvalidBitLength(u32),

    /// Decrypted bytes do not form valid UTF-8 text.
    #[error("decrypted bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Result type for all engine operations
pub type Result<T> = std::result::Result<T, Error>;
