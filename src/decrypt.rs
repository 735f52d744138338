// RSA Decryption
// Single-block and multi-block decryption back to text

use num_bigint::BigUint;

use crate::bigint::mod_pow;
use crate::error::Result;
use crate::key::KeyMaterial;

/// Decrypt one block: m = c^d mod n, with m's bytes decoded as UTF-8.
///
/// Only private key material can decrypt; the capability check runs
/// before any arithmetic.
pub fn decrypt_block(ciphertext: &[u8], key: &KeyMaterial) -> Result<String> {
    let (n, d) = key.decryption_pair()?;

    let c = BigUint::from_bytes_be(ciphertext);
    let m = mod_pow(&c, d, n);

    Ok(String::from_utf8(m.to_bytes_be())?)
}

/// Decrypt a block sequence in order and concatenate the fragments.
/// The first failing block aborts the whole call.
pub fn decrypt_blocks(blocks: &[Vec<u8>], key: &KeyMaterial) -> Result<String> {
    let mut message = String::new();
    for block in blocks {
        message.push_str(&decrypt_block(block, key)?);
    }
    Ok(message)
}
