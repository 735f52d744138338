// Big Integer Primitives
// Modular exponentiation, modular inverse, and probable-prime generation

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::thread_rng;

/// Miller-Rabin rounds applied to every prime candidate
const MILLER_RABIN_ROUNDS: u32 = 10;

/// Modular exponentiation: base^exponent mod modulus
/// Square-and-multiply, scanning the exponent from the low bit up
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut acc = BigUint::one();
    let mut square = base % modulus;
    let mut bits = exponent.clone();

    while !bits.is_zero() {
        if bits.is_odd() {
            acc = &acc * &square % modulus;
        }
        square = &square * &square % modulus;
        bits >>= 1;
    }

    acc
}

/// Extended Euclidean Algorithm over signed integers
/// Returns (g, x, y) such that a*x + b*y = g = gcd(a, b)
/// Signed because the Bezout coefficients alternate in sign
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (g, x, y) = extended_gcd(b, &(a % b));
    let q = a / b;

    (g, y.clone(), x - q * y)
}

/// Compute the modular inverse a^(-1) mod m
/// Returns None when gcd(a, m) != 1, i.e. no inverse exists
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    let signed_m = BigInt::from(m.clone());
    let (g, x, _) = extended_gcd(&BigInt::from(a.clone()), &signed_m);

    if !g.is_one() {
        return None;
    }

    // mod_floor maps the possibly-negative coefficient into [0, m)
    x.mod_floor(&signed_m).to_biguint()
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime after the given number of rounds
pub fn is_probable_prime(n: &BigUint, rounds: u32) -> bool {
    let two = BigUint::from(2u8);
    if n < &two {
        return false;
    }
    if *n == two || *n == BigUint::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let n_minus_one = n - 1u8;
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let mut rng = thread_rng();
    'witness: for _ in 0..rounds {
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = mod_pow(&a, &d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        // Composite
        return false;
    }

    true
}

/// Generate a random probable prime of the given bit length
pub fn probable_prime(bit_length: u32) -> BigUint {
    let mut rng = thread_rng();
    let floor = BigUint::one() << (bit_length - 1);
    let ceiling = (BigUint::one() << bit_length) - 1u8;

    loop {
        let mut candidate = rng.gen_biguint_range(&floor, &ceiling);
        if candidate.is_even() {
            candidate += 1u8;
        }
        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_mod_pow() {
        // 3^5 mod 7 = 243 mod 7 = 5
        assert_eq!(mod_pow(&big(3), &big(5), &big(7)), big(5));

        // 65^17 mod 3233 = 2790
        assert_eq!(mod_pow(&big(65), &big(17), &big(3233)), big(2790));
    }

    #[test]
    fn test_mod_pow_trivial_modulus() {
        assert_eq!(mod_pow(&big(10), &big(10), &big(1)), big(0));
    }

    #[test]
    fn test_mod_inverse() {
        // 3 * 5 = 15 ≡ 1 mod 7, so inverse of 3 mod 7 is 5
        let inv = mod_inverse(&big(3), &big(7)).unwrap();
        assert_eq!(inv, big(5));

        // 17^(-1) mod 3120 = 2753
        let inv = mod_inverse(&big(17), &big(3120)).unwrap();
        assert_eq!(inv, big(2753));
        assert_eq!((big(17) * inv) % big(3120), big(1));
    }

    #[test]
    fn test_mod_inverse_missing() {
        // gcd(2, 3120) = 2, so no inverse exists
        assert_eq!(mod_inverse(&big(2), &big(3120)), None);
    }

    #[test]
    fn test_is_probable_prime() {
        assert!(is_probable_prime(&big(2), 5));
        assert!(is_probable_prime(&big(3), 5));
        assert!(is_probable_prime(&big(7), 5));
        assert!(is_probable_prime(&big(104729), 5));

        assert!(!is_probable_prime(&big(0), 5));
        assert!(!is_probable_prime(&big(1), 5));
        assert!(!is_probable_prime(&big(4), 5));
        assert!(!is_probable_prime(&big(9), 5));
        assert!(!is_probable_prime(&big(104729 * 104723), 5));
    }

    #[test]
    fn test_probable_prime_bit_length() {
        let p = probable_prime(16);
        assert_eq!(p.bits(), 16);
        assert!(is_probable_prime(&p, 10));
    }
}
