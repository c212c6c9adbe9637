//! ⚠️ Low-level "hazmat" RSA functions.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds the building blocks of the software decryption path:
//! raw RSA, OAEP unpadding, MGF1, fixed-width integer encoding and the
//! number theory they rest on. Raw RSA without padding is insecure, and
//! unpadding whose error is observable leaks plaintext. Use
//! [`DecryptingKey`](crate::DecryptingKey) unless you are implementing a
//! well-reviewed construction.

pub use crate::algorithms::mgf::mgf1;
pub use crate::algorithms::oaep::oaep_unpad;
pub use crate::algorithms::pad::{bytes_to_uint, uint_to_be_pad};
pub use crate::algorithms::rsa::{rsa_decrypt, rsa_encrypt};
pub use crate::math::{extended_gcd, gcd, lcm, mod_inverse, mod_pow, pow, two_adic_valuation};
