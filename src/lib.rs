// Textbook RSA Engine
// Key material from two primes (or a bare modulus and exponent),
// big-integer encrypt/decrypt, and per-character block encryption for
// messages whose numeric encoding exceeds the modulus.
//
// This is the textbook scheme with its insecurities intact: no padding
// and no constant-time arithmetic. Do not use it to protect anything.

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod engine;
pub mod error;
pub mod key;

pub use engine::{Encryptor, RsaEngine};
pub use error::{Error, Result};
pub use key::{KeyMaterial, BIT_LENGTH};
