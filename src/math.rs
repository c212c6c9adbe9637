//! Arbitrary-precision helpers used by the decryption primitive.
//!
//! Everything here is a pure function of its arguments.

use num_bigint::Sign::Plus;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Computes `base^exponent mod modulus` by square-and-multiply, reducing after
/// every multiplication.
///
/// Panics if `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    let base = base % modulus;
    let mut result = BigUint::one() % modulus;

    // Most significant bit first. `to_bytes_be` of zero is `[0]`, which leaves
    // `result` at one.
    for byte in exponent.to_bytes_be() {
        for shift in (0..8).rev() {
            result = &result * &result % modulus;
            if (byte >> shift) & 1 == 1 {
                result = &result * &base % modulus;
            }
        }
    }

    result
}

/// Computes `base^exponent` without reduction.
pub fn pow(base: &BigUint, exponent: &BigUint) -> BigUint {
    let mut result = BigUint::one();
    for byte in exponent.to_bytes_be() {
        for shift in (0..8).rev() {
            result = &result * &result;
            if (byte >> shift) & 1 == 1 {
                result *= base;
            }
        }
    }
    result
}

/// Returns `(g, x, y)` such that `a*x + b*y = g = gcd(a, b)`.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (a.clone(), b.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = core::mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = core::mem::replace(&mut s, next_s);

        let next_t = &old_t - &quotient * &t;
        old_t = core::mem::replace(&mut t, next_t);
    }

    (old_r, old_s, old_t)
}

/// Returns `a^-1 mod m` in `[0, m)`, or `None` if `a` and `m` share a factor.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }

    let m_int = BigInt::from_biguint(Plus, m.clone());
    let (g, x, _) = extended_gcd(&BigInt::from_biguint(Plus, a.clone()), &m_int);
    if !g.is_one() {
        return None;
    }

    (((x % &m_int) + &m_int) % &m_int).to_biguint()
}

/// Euclid's algorithm.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let t = &a % &b;
        a = core::mem::replace(&mut b, t);
    }
    a
}

/// Least common multiple; zero if either argument is zero.
pub fn lcm(a: &BigUint, b: &BigUint) -> BigUint {
    if a.is_zero() || b.is_zero() {
        return BigUint::zero();
    }
    a * b / gcd(a, b)
}

/// Largest `k` such that `2^k` divides `n`.
///
/// Panics if `n` is zero.
pub fn two_adic_valuation(n: &BigUint) -> usize {
    assert!(!n.is_zero(), "two_adic_valuation of zero");

    let mut k = 0;
    for byte in n.to_bytes_be().iter().rev() {
        if *byte == 0 {
            k += 8;
        } else {
            return k + byte.trailing_zeros() as usize;
        }
    }
    k
}
