// RSA Key Material
// Construction of public-only and private key state

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;

use crate::bigint::{mod_inverse, probable_prime};
use crate::error::{Error, Result};

/// The highest bit length a generated exponent candidate may have;
/// search starts from a probable prime of half this length.
pub const BIT_LENGTH: u32 = 1024;

/// Immutable key state. The private variant is the only form that can
/// decrypt; a public-only instance structurally cannot hold the factors.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyMaterial {
    /// Modulus and public exponent only; encryption-capable.
    PublicOnly {
        n: BigUint, // Modulus
        e: BigUint, // Public exponent
    },
    /// Full factor knowledge; encryption- and decryption-capable.
    Private {
        n: BigUint,   // Modulus, p * q
        e: BigUint,   // Public exponent, coprime to phi
        p: BigUint,   // First prime factor
        q: BigUint,   // Second prime factor
        phi: BigUint, // (p-1) * (q-1)
        d: BigUint,   // Private exponent, e^(-1) mod phi
    },
}

impl KeyMaterial {
    /// Public instantiation from a modulus and exponent.
    ///
    /// The exponent must be supplied: generating one would need
    /// phi(n), which cannot be derived from the modulus alone.
    pub fn new_public(n: BigUint, e: Option<BigUint>) -> Result<Self> {
        let e = e.ok_or(Error::ExponentRequired)?;
        Ok(KeyMaterial::PublicOnly { n, e })
    }

    /// Private instantiation from two primes and an optional exponent.
    ///
    /// An omitted exponent is searched for, starting from a random
    /// probable prime of BIT_LENGTH / 2 bits.
    pub fn new_private(p: BigUint, q: BigUint, e: Option<BigUint>) -> Result<Self> {
        let n = &p * &q;
        let phi = (&p - 1u8) * (&q - 1u8);

        let e = match e {
            Some(e) => e,
            None => search_exponent(&phi)?,
        };

        let d = mod_inverse(&e, &phi).ok_or(Error::InvalidKey)?;

        Ok(KeyMaterial::Private { n, e, p, q, phi, d })
    }

    /// The modulus.
    pub fn n(&self) -> &BigUint {
        match self {
            KeyMaterial::PublicOnly { n, .. } | KeyMaterial::Private { n, .. } => n,
        }
    }

    /// The public exponent.
    pub fn e(&self) -> &BigUint {
        match self {
            KeyMaterial::PublicOnly { e, .. } | KeyMaterial::Private { e, .. } => e,
        }
    }

    /// Whether this key material is decryption-capable.
    pub fn is_private(&self) -> bool {
        matches!(self, KeyMaterial::Private { .. })
    }

    /// Modulus and private exponent, or the capability error on a
    /// public-only instance.
    pub(crate) fn decryption_pair(&self) -> Result<(&BigUint, &BigUint)> {
        match self {
            KeyMaterial::Private { n, d, .. } => Ok((n, d)),
            KeyMaterial::PublicOnly { .. } => Err(Error::DecryptionNotPermitted),
        }
    }
}

/// Find an exponent coprime to phi: take a random probable prime and
/// increment it while it shares a factor with phi and stays below phi.
/// The bound is phi itself, so the search can run dry.
fn search_exponent(phi: &BigUint) -> Result<BigUint> {
    let one = BigUint::one();
    let mut e = probable_prime(BIT_LENGTH / 2);

    while phi.gcd(&e) > one && e < *phi {
        e += 1u8;
    }

    if phi.gcd(&e) > one {
        return Err(Error::ExponentSearchExhausted);
    }

    Ok(e)
}
