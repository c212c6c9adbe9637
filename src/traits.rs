//! RSA-related trait definitions.

mod encryption;
pub(crate) mod keys;

pub use encryption::{Decryptor, RandomizedDecryptor};
pub use keys::{PrivateKeyParts, PublicKeyParts};
