use alloc::string::String;
use core::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithms::pad::{bytes_to_uint, uint_to_be_pad};
use crate::encoding::{base64url_decode, base64url_encode};
use crate::errors::{Error, Result};
use crate::hardware::{GeneratedKeyPair, KeyPairGenerator};
use crate::traits::{PrivateKeyParts, PublicKeyParts};
use crate::{MODULUS_SIZE, PUBLIC_EXPONENT};

const MODULUS_BITS: usize = MODULUS_SIZE * 8;

/// Opaque handle to the hardware-resident counterpart of a key pair.
///
/// Its content is only meaningful to a [`HardwareDecryptor`](crate::HardwareDecryptor).
#[derive(Clone, PartialEq, Eq)]
pub struct HwAccelInfo(String);

impl HwAccelInfo {
    /// Wraps a token produced by the key generation collaborator.
    pub fn new(token: impl Into<String>) -> Self {
        HwAccelInfo(token.into())
    }

    /// Returns the token as handed over by the collaborator.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HwAccelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HwAccelInfo(..)")
    }
}

impl Zeroize for HwAccelInfo {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl Drop for HwAccelInfo {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// An RSA-4096 key pair as handed to the decryptor: modulus, private
/// exponent and an optional hardware handle. The public exponent is always
/// 65537.
#[derive(Clone)]
pub struct RsaPrivateKeyPair {
    /// Modulus
    n: BigUint,
    /// Public exponent
    e: BigUint,
    /// Private exponent
    d: BigUint,
    hw_accel_info: Option<HwAccelInfo>,
}

impl RsaPrivateKeyPair {
    /// Builds a key pair from its components.
    ///
    /// `n` must be an odd integer of exactly 4096 bits, and `d` must lie in
    /// `(0, n)`. The relation between `d` and the
    /// public exponent is not checked.
    pub fn from_components(
        n: BigUint,
        d: BigUint,
        hw_accel_info: Option<HwAccelInfo>,
    ) -> Result<RsaPrivateKeyPair> {
        let key = RsaPrivateKeyPair {
            n,
            e: BigUint::from(PUBLIC_EXPONENT),
            d,
            hw_accel_info,
        };
        key.validate()?;
        Ok(key)
    }

    /// Builds a key pair from big-endian modulus and private exponent bytes.
    ///
    /// Leading zero bytes are accepted in both (the collaborator may hand over
    /// signed encodings).
    pub fn from_be_bytes(
        modulus: &[u8],
        private_exponent: &[u8],
        hw_accel_info: Option<HwAccelInfo>,
    ) -> Result<RsaPrivateKeyPair> {
        Self::from_components(
            bytes_to_uint(modulus),
            bytes_to_uint(private_exponent),
            hw_accel_info,
        )
    }

    /// Builds a key pair from URL-safe base64 modulus and private exponent.
    pub fn from_base64url(
        modulus: &str,
        private_exponent: &str,
        hw_accel_info: Option<HwAccelInfo>,
    ) -> Result<RsaPrivateKeyPair> {
        let modulus = zeroize::Zeroizing::new(base64url_decode(modulus)?);
        let private_exponent = zeroize::Zeroizing::new(base64url_decode(private_exponent)?);
        Self::from_be_bytes(&modulus, &private_exponent, hw_accel_info)
    }

    /// Asks `generator` for a fresh key pair and validates what comes back.
    pub fn generate<G: KeyPairGenerator + ?Sized>(generator: &G) -> Result<RsaPrivateKeyPair> {
        let GeneratedKeyPair {
            modulus,
            private_exponent,
            hw_accel_info,
        } = generator.generate_key_pair()?;
        let private_exponent = zeroize::Zeroizing::new(private_exponent);
        Self::from_be_bytes(&modulus, &private_exponent, hw_accel_info)
    }

    /// Returns the hardware handle, if the key pair has one.
    pub fn hw_accel_info(&self) -> Option<&HwAccelInfo> {
        self.hw_accel_info.as_ref()
    }

    /// Returns a copy of this key pair without the hardware handle.
    pub fn without_hw_accel_info(&self) -> RsaPrivateKeyPair {
        RsaPrivateKeyPair {
            n: self.n.clone(),
            e: self.e.clone(),
            d: self.d.clone(),
            hw_accel_info: None,
        }
    }

    /// Returns the stored text form of this key pair.
    pub fn to_stored(&self) -> Result<StoredKeyPair> {
        let modulus = uint_to_be_pad(&self.n, MODULUS_SIZE)?;
        let private_exponent = zeroize::Zeroizing::new(uint_to_be_pad(&self.d, MODULUS_SIZE)?);
        Ok(StoredKeyPair {
            public_modulus_b64url: base64url_encode(&modulus),
            private_exponent_b64url: base64url_encode(&private_exponent),
            hw_accel_info: self
                .hw_accel_info
                .as_ref()
                .map(|info| String::from(info.as_str())),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.n.bits() != MODULUS_BITS || self.n.is_even() {
            return Err(Error::InvalidModulus);
        }
        if self.d.is_zero() || self.d >= self.n {
            return Err(Error::InvalidExponent);
        }
        Ok(())
    }
}

impl PublicKeyParts for RsaPrivateKeyPair {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl PrivateKeyParts for RsaPrivateKeyPair {
    fn d(&self) -> &BigUint {
        &self.d
    }
}

impl fmt::Debug for RsaPrivateKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKeyPair")
            .field("n", &self.n)
            .field("e", &self.e)
            .field("d", &"..")
            .field("hw_accel_info", &self.hw_accel_info)
            .finish()
    }
}

impl PartialEq for RsaPrivateKeyPair {
    #[inline]
    fn eq(&self, other: &RsaPrivateKeyPair) -> bool {
        self.n == other.n && self.d == other.d && self.hw_accel_info == other.hw_accel_info
    }
}

impl Eq for RsaPrivateKeyPair {}

impl Zeroize for RsaPrivateKeyPair {
    fn zeroize(&mut self) {
        self.d.zeroize();
        if let Some(info) = self.hw_accel_info.as_mut() {
            info.zeroize();
        }
    }
}

impl Drop for RsaPrivateKeyPair {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for RsaPrivateKeyPair {}

/// Persisted form of a key pair, tagged `"type": "rsa-4096-v1"`.
///
/// Field names follow the stored JSON layout: `publicModulusB64URL`,
/// `privateExponentB64URL` and the optional `hwAccelInfo`.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename = "rsa-4096-v1"))]
pub struct StoredKeyPair {
    /// Modulus, URL-safe base64.
    #[cfg_attr(feature = "serde", serde(rename = "publicModulusB64URL"))]
    pub public_modulus_b64url: String,
    /// Private exponent, URL-safe base64.
    #[cfg_attr(feature = "serde", serde(rename = "privateExponentB64URL"))]
    pub private_exponent_b64url: String,
    /// Hardware handle, if any.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "hwAccelInfo",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub hw_accel_info: Option<String>,
}

impl StoredKeyPair {
    /// Decodes and validates the stored key pair.
    pub fn to_key_pair(&self) -> Result<RsaPrivateKeyPair> {
        RsaPrivateKeyPair::from_base64url(
            &self.public_modulus_b64url,
            &self.private_exponent_b64url,
            self.hw_accel_info.as_deref().map(HwAccelInfo::new),
        )
    }
}

impl TryFrom<&StoredKeyPair> for RsaPrivateKeyPair {
    type Error = Error;

    fn try_from(stored: &StoredKeyPair) -> Result<RsaPrivateKeyPair> {
        stored.to_key_pair()
    }
}

impl fmt::Debug for StoredKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoredKeyPair")
            .field("public_modulus_b64url", &self.public_modulus_b64url)
            .field("private_exponent_b64url", &"..")
            .field("hw_accel_info", &self.hw_accel_info.as_ref().map(|_| ".."))
            .finish()
    }
}

impl Zeroize for StoredKeyPair {
    fn zeroize(&mut self) {
        self.private_exponent_b64url.zeroize();
        self.hw_accel_info.zeroize();
    }
}

impl Drop for StoredKeyPair {
    fn drop(&mut self) {
        self.zeroize();
    }
}
