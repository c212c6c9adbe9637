//! Decryption of RSA-4096 ciphertexts padded with [OAEP](https://datatracker.ietf.org/doc/html/rfc8017#section-7.1)
//! (SHA-512 for the label hash and MGF1, empty label).
//!
//! # Usage
//!
//! ```no_run
//! use rsa4096::{oaep::DecryptingKey, traits::RandomizedDecryptor, RsaPrivateKeyPair};
//!
//! # fn run(stored_modulus: &str, stored_exponent: &str, ciphertext: &[u8]) -> rsa4096::Result<()> {
//! let key = RsaPrivateKeyPair::from_base64url(stored_modulus, stored_exponent, None)?;
//! let decrypting_key = DecryptingKey::new(key);
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//! let plaintext = decrypting_key.decrypt_with_rng(&mut rng, ciphertext)?;
//! # Ok(())
//! # }
//! ```

mod decrypting_key;

pub use self::decrypting_key::DecryptingKey;

use alloc::vec::Vec;
use rand_core::CryptoRngCore;

use crate::algorithms::oaep::oaep_unpad;
use crate::algorithms::pad::{bytes_to_uint, uint_to_zeroizing_be_pad};
use crate::algorithms::rsa::rsa_decrypt;
use crate::errors::{Error, Result};
use crate::key::RsaPrivateKeyPair;
use crate::traits::PublicKeyParts;

/// Decrypts a ciphertext with the software path: blinded RSA followed by OAEP
/// verification.
///
/// `ciphertext` must be exactly as long as the modulus. At most
/// `max_blinding_attempts` random draws are made for the blinding factor.
///
/// Note that whether this function returns an error or not discloses secret
/// information. If an attacker can cause this function to run repeatedly and
/// learn whether each instance returned an error then they can decrypt and
/// forge signatures as if they had the private key.
#[inline]
pub fn decrypt<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    priv_key: &RsaPrivateKeyPair,
    ciphertext: &[u8],
    max_blinding_attempts: usize,
) -> Result<Vec<u8>> {
    let k = priv_key.size();
    if ciphertext.len() != k {
        return Err(Error::InvalidLength);
    }

    let c = bytes_to_uint(ciphertext);
    let m = rsa_decrypt(rng, priv_key, &c, max_blinding_attempts)?;
    let mut em = uint_to_zeroizing_be_pad(m, k)?;

    oaep_unpad(&mut em)
}
