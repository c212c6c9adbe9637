//! Blinded RSA private-key operation

use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{Error, Result};
use crate::math::{gcd, mod_inverse, mod_pow};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Number of blinding factor draws before giving up with
/// [`Error::RandomnessExhausted`].
pub const DEFAULT_MAX_BLINDING_ATTEMPTS: usize = 64;

/// Raw RSA encryption of m with the public key. No padding is performed.
#[inline]
pub fn rsa_encrypt<K: PublicKeyParts>(key: &K, m: &BigUint) -> BigUint {
    mod_pow(m, key.e(), key.n())
}

/// ⚠️ Performs raw, blinded RSA decryption with no padding or error checking.
///
/// Computes `c^d mod n` on a randomised input: `c` is multiplied by `r^e`
/// for a fresh random `r` coprime to `n`, exponentiated, and the result is
/// multiplied by `r^-1`. Up to `max_attempts` draws are made for `r`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsa_decrypt<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    priv_key: &impl PrivateKeyParts,
    c: &BigUint,
    max_attempts: usize,
) -> Result<BigUint> {
    if priv_key.n().is_zero() {
        return Err(Error::InvalidModulus);
    }

    if c >= priv_key.n() {
        return Err(Error::CiphertextOutOfRange);
    }

    let (mut blinded, mut unblinder) = blind(rng, priv_key, c, max_attempts)?;
    let mut m = mod_pow(&blinded, priv_key.d(), priv_key.n());
    let result = unblind(priv_key, &m, &unblinder);

    blinded.zeroize();
    unblinder.zeroize();
    m.zeroize();

    Ok(result)
}

/// Draws a blinding factor `r` uniformly from `[0, n)` with `gcd(r, n) = 1`.
///
/// Each attempt reads `size(n)` bytes from `rng`, clears the bits above the
/// bit length of `n` and rejects the value if it is not below `n` or shares a
/// factor with it.
pub(crate) fn blinding_factor<R: CryptoRngCore + ?Sized, K: PublicKeyParts>(
    rng: &mut R,
    key: &K,
    max_attempts: usize,
) -> Result<BigUint> {
    let n = key.n();
    let mut buf = Zeroizing::new(vec![0u8; key.size()]);
    // at most 7 bits, since size() rounds bits() up to whole bytes
    let excess_bits = buf.len() * 8 - n.bits();

    for attempt in 0..max_attempts {
        rng.try_fill_bytes(&mut buf)?;
        if let Some(top) = buf.first_mut() {
            *top &= 0xff >> excess_bits;
        }

        let mut r = BigUint::from_bytes_be(&buf);
        if &r >= n {
            tracing::trace!(attempt = attempt + 1, "rsa: blinding draw not below modulus");
        } else if !gcd(&r, n).is_one() {
            tracing::trace!(attempt = attempt + 1, "rsa: blinding draw not coprime");
        } else {
            return Ok(r);
        }
        r.zeroize();
    }

    tracing::debug!(max_attempts, "rsa: no usable blinding factor");
    Err(Error::RandomnessExhausted)
}

/// Returns the blinded c, along with the unblinding factor.
fn blind<R: CryptoRngCore + ?Sized, K: PublicKeyParts>(
    rng: &mut R,
    key: &K,
    c: &BigUint,
    max_attempts: usize,
) -> Result<(BigUint, BigUint)> {
    // Blinding involves multiplying c by r^e.
    // Then the decryption operation performs (m^e * r^e)^d mod n
    // which equals mr mod n. The factor of r can then be removed
    // by multiplying by the multiplicative inverse of r.
    let mut r = blinding_factor(rng, key, max_attempts)?;

    // gcd(r, n) == 1 was checked while sampling
    let unblinder = mod_inverse(&r, key.n()).ok_or(Error::InvalidModulus)?;

    let c = {
        let mut rpowe = mod_pow(&r, key.e(), key.n());
        let mut c = c * &rpowe;
        c %= key.n();

        rpowe.zeroize();

        c
    };
    r.zeroize();

    Ok((c, unblinder))
}

/// Given an m and and unblinding factor, unblind the m.
fn unblind(key: &impl PublicKeyParts, m: &BigUint, unblinder: &BigUint) -> BigUint {
    (m * unblinder) % key.n()
}
