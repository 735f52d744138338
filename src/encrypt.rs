// RSA Encryption
// Single-block and per-character encryption of text

use num_bigint::BigUint;

use crate::bigint::mod_pow;
use crate::error::{Error, Result};
use crate::key::KeyMaterial;

/// Encrypt a message's UTF-8 bytes as one block: c = m^e mod n.
///
/// The bytes read as a big-endian integer must stay below the modulus,
/// otherwise decryption could not recover them unambiguously.
pub fn encrypt_str(message: &str, key: &KeyMaterial) -> Result<Vec<u8>> {
    let m = BigUint::from_bytes_be(message.as_bytes());
    if &m >= key.n() {
        return Err(Error::MessageTooLarge);
    }

    let c = mod_pow(&m, key.e(), key.n());
    Ok(c.to_bytes_be())
}

/// Encrypt one character at a time, one ciphertext block per character.
///
/// Sidesteps the modulus ceiling for long messages; block order follows
/// character order.
pub fn encrypt_piecewise(message: &str, key: &KeyMaterial) -> Result<Vec<Vec<u8>>> {
    let mut blocks = Vec::with_capacity(message.chars().count());
    let mut utf8 = [0u8; 4];

    for ch in message.chars() {
        blocks.push(encrypt_str(ch.encode_utf8(&mut utf8), key)?);
    }

    Ok(blocks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    fn textbook_key() -> KeyMaterial {
        KeyMaterial::new_private(big(61), big(53), Some(big(17))).unwrap()
    }

    #[test]
    fn test_encrypt_concrete_block() {
        // 'A' is byte 65, and 65^17 mod 3233 = 2790 = 0x0ae6
        let ciphertext = encrypt_str("A", &textbook_key()).unwrap();

        assert_eq!(hex::encode(&ciphertext), "0ae6");
        assert_eq!(BigUint::from_bytes_be(&ciphertext), big(2790));
    }

    #[test]
    fn test_encrypt_works_publicly() {
        let public = KeyMaterial::new_public(big(3233), Some(big(17))).unwrap();
        let private = textbook_key();

        assert_eq!(
            encrypt_str("A", &public).unwrap(),
            encrypt_str("A", &private).unwrap()
        );
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let key = textbook_key();
        assert_eq!(
            encrypt_str("A", &key).unwrap(),
            encrypt_str("A", &key).unwrap()
        );
    }

    #[test]
    fn test_encrypt_rejects_large_message() {
        // "AB" reads as 0x4142 = 16706, past n = 3233
        let err = encrypt_str("AB", &textbook_key()).unwrap_err();
        assert_eq!(err, Error::MessageTooLarge);
    }

    #[test]
    fn test_encrypt_rejects_large_character() {
        // 'é' encodes to two UTF-8 bytes, 0xc3a9 = 50089, past n = 3233;
        // the per-character path hits the same guard block by block
        let err = encrypt_piecewise("é", &textbook_key()).unwrap_err();
        assert_eq!(err, Error::MessageTooLarge);
    }

    #[test]
    fn test_piecewise_block_per_character() {
        let blocks = encrypt_piecewise("AB", &textbook_key()).unwrap();
        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_piecewise_handles_message_past_modulus() {
        let key = textbook_key();

        assert!(encrypt_str("Hello, RSA!", &key).is_err());
        let blocks = encrypt_piecewise("Hello, RSA!", &key).unwrap();
        assert_eq!(blocks.len(), "Hello, RSA!".chars().count());
    }
}
