// RSA Engine
// Ties key material to the encrypt/decrypt operations behind the
// Encryptor trait

use num_bigint::BigUint;

use crate::bigint::probable_prime;
use crate::decrypt::{decrypt_block, decrypt_blocks};
use crate::encrypt::{encrypt_piecewise, encrypt_str};
use crate::error::{Error, Result};
use crate::key::{KeyMaterial, BIT_LENGTH};

/// The operations an encryption engine offers.
///
/// Every engine can encrypt; only privately instantiated engines can
/// decrypt, and the decryption half returns an error on the others.
pub trait Encryptor {
    /// Encrypt a message as a single ciphertext block.
    fn encrypt(&self, message: &str) -> Result<Vec<u8>>;

    /// Encrypt a message one character per ciphertext block.
    fn encrypt_pieces(&self, message: &str) -> Result<Vec<Vec<u8>>>;

    /// Decrypt a single ciphertext block back to text.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<String>;

    /// Decrypt a ciphertext block sequence back to text.
    fn decrypt_pieces(&self, blocks: &[Vec<u8>]) -> Result<String>;
}

/// Textbook RSA engine over immutable key material.
#[derive(Debug, Clone)]
pub struct RsaEngine {
    key: KeyMaterial,
}

impl RsaEngine {
    /// Public instantiation: encryption only.
    pub fn new_public(n: BigUint, e: Option<BigUint>) -> Result<Self> {
        Ok(Self {
            key: KeyMaterial::new_public(n, e)?,
        })
    }

    /// Private instantiation from two primes: encryption and decryption.
    pub fn new_private(p: BigUint, q: BigUint, e: Option<BigUint>) -> Result<Self> {
        Ok(Self {
            key: KeyMaterial::new_private(p, q, e)?,
        })
    }

    /// Generate a fresh private engine: two distinct random probable
    /// primes of half the requested modulus size, exponent by search.
    pub fn generate(bit_length: u32) -> Result<Self> {
        if bit_length < 512 || bit_length % 2 != 0 {
            return Err(Error::InvalidBitLength(bit_length));
        }

        let half = bit_length / 2;
        let p = probable_prime(half);
        let q = loop {
            let q = probable_prime(half);
            if q != p {
                break q;
            }
        };

        Self::new_private(p, q, None)
    }

    /// Generate with the default modulus size.
    pub fn generate_default() -> Result<Self> {
        Self::generate(BIT_LENGTH)
    }

    /// The key material backing this engine.
    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }
}

impl Encryptor for RsaEngine {
    fn encrypt(&self, message: &str) -> Result<Vec<u8>> {
        encrypt_str(message, &self.key)
    }

    fn encrypt_pieces(&self, message: &str) -> Result<Vec<Vec<u8>>> {
        encrypt_piecewise(message, &self.key)
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<String> {
        decrypt_block(ciphertext, &self.key)
    }

    fn decrypt_pieces(&self, blocks: &[Vec<u8>]) -> Result<String> {
        decrypt_blocks(blocks, &self.key)
    }
}
