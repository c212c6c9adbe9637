#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Decryption paths
//!
//! A [`DecryptingKey`] decides per call which way a ciphertext goes:
//!
//! - when the [`RsaPrivateKeyPair`] carries a [`HwAccelInfo`] handle, the
//!   [`HardwareDecryptor`] is asked first;
//! - when there is no handle, or the hardware call fails for any reason, the
//!   ciphertext is decrypted in software with a fresh blinding factor and
//!   the OAEP padding is checked in constant time.
//!
//! Hardware failures are logged through [`tracing`](https://docs.rs/tracing)
//! and never returned. Software failures are.
//!
//! # Usage
//!
//! ```
//! use rsa4096::{DecryptingKey, RsaPrivateKeyPair, traits::RandomizedDecryptor};
//!
//! # fn run(stored: &rsa4096::StoredKeyPair, ciphertext: &[u8]) -> rsa4096::Result<()> {
//! let key = RsaPrivateKeyPair::try_from(stored)?;
//! let decrypting_key = DecryptingKey::new(key).max_blinding_attempts(16);
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//! let plaintext = decrypting_key.decrypt_with_rng(&mut rng, ciphertext)?;
//! assert!(plaintext.len() <= rsa4096::MAX_MESSAGE_LEN);
//! # Ok(())
//! # }
//! ```
//!
//! # Stored form
//!
//! [`StoredKeyPair`] is the persisted text form: URL-safe base64 modulus and
//! private exponent plus the optional hardware handle. With the `serde`
//! feature it (de)serializes as
//!
//! ```text
//! {"type":"rsa-4096-v1","publicModulusB64URL":"...","privateExponentB64URL":"...","hwAccelInfo":"..."}
//! ```

#[cfg(doctest)]
pub struct ReadmeDoctests;

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;
pub use sha2;

mod algorithms;
mod encoding;
pub mod errors;
pub mod hardware;
pub mod hazmat;
mod key;
mod math;
pub mod oaep;
pub mod traits;

pub use crate::{
    algorithms::rsa::DEFAULT_MAX_BLINDING_ATTEMPTS,
    encoding::{base64url_decode, base64url_encode},
    errors::{Error, ErrorKind, Result},
    hardware::{GeneratedKeyPair, HardwareDecryptor, KeyPairGenerator, NoHardware},
    key::{HwAccelInfo, RsaPrivateKeyPair, StoredKeyPair},
    oaep::DecryptingKey,
};

/// Size in bytes of the modulus and of every ciphertext.
pub const MODULUS_SIZE: usize = 512;

/// Public exponent of every key pair.
pub const PUBLIC_EXPONENT: u32 = 65537;

/// SHA-512 output size in bytes.
pub const HASH_SIZE: usize = 64;

/// Longest plaintext an RSA-4096 OAEP-SHA-512 ciphertext can carry.
pub const MAX_MESSAGE_LEN: usize = MODULUS_SIZE - 2 * HASH_SIZE - 2;
