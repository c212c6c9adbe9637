//! Collaborators that live outside this crate: platform key generation and
//! hardware-backed decryption, plus the gate that prefers the hardware path
//! and falls back to software.

use alloc::vec::Vec;
use core::fmt;

use crate::errors::{Error, Result};
use crate::key::{HwAccelInfo, RsaPrivateKeyPair};
use crate::MAX_MESSAGE_LEN;

/// Platform decryption using a hardware-resident key.
///
/// Implementations are expected to remove OAEP (SHA-512, MGF1-SHA-512, empty
/// label) padding themselves and return the plaintext. Any error, or a
/// plaintext longer than [`MAX_MESSAGE_LEN`], is treated as "unavailable this
/// time", never as a verdict on the ciphertext.
pub trait HardwareDecryptor {
    /// Decrypt `ciphertext` with the key identified by `info`.
    fn decrypt(&self, info: &HwAccelInfo, ciphertext: &[u8]) -> Result<Vec<u8>>;
}

impl<T: HardwareDecryptor + ?Sized> HardwareDecryptor for &T {
    fn decrypt(&self, info: &HwAccelInfo, ciphertext: &[u8]) -> Result<Vec<u8>> {
        (**self).decrypt(info, ciphertext)
    }
}

/// A [`HardwareDecryptor`] for platforms without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHardware;

impl HardwareDecryptor for NoHardware {
    fn decrypt(&self, _info: &HwAccelInfo, _ciphertext: &[u8]) -> Result<Vec<u8>> {
        Err(Error::HardwareUnavailable)
    }
}

/// Raw output of a [`KeyPairGenerator`].
pub struct GeneratedKeyPair {
    /// Big-endian modulus; a leading sign byte is tolerated.
    pub modulus: Vec<u8>,
    /// Big-endian private exponent.
    pub private_exponent: Vec<u8>,
    /// Handle for the hardware copy of the key, if one was made.
    pub hw_accel_info: Option<HwAccelInfo>,
}

impl fmt::Debug for GeneratedKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedKeyPair")
            .field("modulus", &self.modulus.len())
            .field("private_exponent", &"..")
            .field("hw_accel_info", &self.hw_accel_info)
            .finish()
    }
}

/// Platform RSA-4096 key generation with public exponent 65537.
pub trait KeyPairGenerator {
    /// Generate a new key pair. Failures should be reported as
    /// [`Error::KeyGeneration`].
    fn generate_key_pair(&self) -> Result<GeneratedKeyPair>;
}

/// Which way a single decryption call goes.
#[derive(Debug, Clone, Copy)]
pub(crate) enum DecryptPath<'a> {
    /// Ask the hardware collaborator first.
    Hardware(&'a HwAccelInfo),
    /// Blinded software decryption.
    Software,
}

impl<'a> DecryptPath<'a> {
    /// Entry state for `key`.
    pub(crate) fn select(key: &'a RsaPrivateKeyPair) -> Self {
        match key.hw_accel_info() {
            Some(info) => DecryptPath::Hardware(info),
            None => DecryptPath::Software,
        }
    }
}

/// Runs the hardware path when the key has a handle and falls back to
/// `software` on absence or failure. A hardware plaintext that no RSA-4096
/// OAEP-SHA-512 ciphertext can carry counts as a failure. Only a software
/// failure reaches the caller.
pub(crate) fn decrypt_with_fallback<H, F>(
    key: &RsaPrivateKeyPair,
    hardware: &H,
    ciphertext: &[u8],
    software: F,
) -> Result<Vec<u8>>
where
    H: HardwareDecryptor + ?Sized,
    F: FnOnce() -> Result<Vec<u8>>,
{
    let mut path = DecryptPath::select(key);
    loop {
        match path {
            DecryptPath::Hardware(info) => match hardware.decrypt(info, ciphertext) {
                Ok(plaintext) if plaintext.len() > MAX_MESSAGE_LEN => {
                    tracing::warn!(
                        len = plaintext.len(),
                        "rsa: hardware accelerated decrypt returned an oversized plaintext"
                    );
                    path = DecryptPath::Software;
                }
                Ok(plaintext) => {
                    tracing::debug!("rsa: hardware accelerated decryption");
                    return Ok(plaintext);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "rsa: hardware accelerated decrypt failed");
                    path = DecryptPath::Software;
                }
            },
            DecryptPath::Software => {
                if key.hw_accel_info().is_none() {
                    tracing::debug!("rsa: hardware accelerated decrypt info unavailable");
                }
                return software();
            }
        }
    }
}
