use super::decrypt;
use crate::{
    algorithms::rsa::DEFAULT_MAX_BLINDING_ATTEMPTS,
    hardware::{decrypt_with_fallback, HardwareDecryptor, NoHardware},
    traits::RandomizedDecryptor,
    Result, RsaPrivateKeyPair,
};
#[cfg(feature = "getrandom")]
use crate::traits::Decryptor;
use alloc::vec::Vec;
use rand_core::CryptoRngCore;
use zeroize::ZeroizeOnDrop;

/// Decryption key for RSA-4096 OAEP-SHA-512 ciphertexts.
///
/// Tries the hardware collaborator `H` first when the key pair carries a
/// hardware handle, and otherwise (or when that fails) decrypts in software
/// with blinding.
#[derive(Debug, Clone)]
pub struct DecryptingKey<H = NoHardware> {
    inner: RsaPrivateKeyPair,
    hardware: H,
    max_blinding_attempts: usize,
}

impl DecryptingKey {
    /// Create a new decrypting key that only uses the software path.
    pub fn new(key: RsaPrivateKeyPair) -> Self {
        Self::with_hardware(key, NoHardware)
    }
}

impl<H: HardwareDecryptor> DecryptingKey<H> {
    /// Create a new decrypting key that consults `hardware` for key pairs
    /// with a hardware handle.
    pub fn with_hardware(key: RsaPrivateKeyPair, hardware: H) -> Self {
        Self {
            inner: key,
            hardware,
            max_blinding_attempts: DEFAULT_MAX_BLINDING_ATTEMPTS,
        }
    }

    /// Sets how many random draws are made for the blinding factor before
    /// failing with [`Error::RandomnessExhausted`](crate::Error::RandomnessExhausted).
    /// Values below one are treated as one.
    pub fn max_blinding_attempts(mut self, attempts: usize) -> Self {
        self.max_blinding_attempts = attempts.max(1);
        self
    }

    /// Returns the key pair.
    pub fn key_pair(&self) -> &RsaPrivateKeyPair {
        &self.inner
    }
}

impl<H: HardwareDecryptor> RandomizedDecryptor for DecryptingKey<H> {
    fn decrypt_with_rng<R: CryptoRngCore + ?Sized>(
        &self,
        rng: &mut R,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>> {
        decrypt_with_fallback(&self.inner, &self.hardware, ciphertext, || {
            decrypt(rng, &self.inner, ciphertext, self.max_blinding_attempts)
        })
    }
}

#[cfg(feature = "getrandom")]
impl<H: HardwareDecryptor> Decryptor for DecryptingKey<H> {
    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.decrypt_with_rng(&mut rand_core::OsRng, ciphertext)
    }
}

impl<H> ZeroizeOnDrop for DecryptingKey<H> {}

impl<H> PartialEq for DecryptingKey<H> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner && self.max_blinding_attempts == other.max_blinding_attempts
    }
}
