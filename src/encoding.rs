//! URL-safe base64 text form used to store and transport key material.
//!
//! Encoding emits `=` padding; decoding accepts input with or without it.

use alloc::string::String;
use alloc::vec::Vec;
use base64ct::{Base64Url, Base64UrlUnpadded, Encoding};

use crate::errors::{Error, Result};

/// Encodes `bytes` with the URL-safe alphabet (`-`, `_`) and `=` padding.
pub fn base64url_encode(bytes: &[u8]) -> String {
    Base64Url::encode_string(bytes)
}

/// Decodes URL-safe base64. Trailing `=` padding is optional.
pub fn base64url_decode(text: &str) -> Result<Vec<u8>> {
    let unpadded = text.trim_end_matches('=');
    if text.len() - unpadded.len() > 2 {
        return Err(Error::InvalidEncoding);
    }
    Ok(Base64UrlUnpadded::decode_vec(unpadded)?)
}
