//! Verification and removal of [OAEP padding](https://datatracker.ietf.org/doc/html/rfc8017#section-7.1.2)
//! with SHA-512, MGF1-SHA-512 and the empty label.
//!
use alloc::boxed::Box;
use alloc::vec::Vec;

use digest::Digest;
use once_cell::race::OnceBox;
use sha2::Sha512;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::mgf::mgf1_xor;
use crate::errors::{Error, Result};
use crate::{HASH_SIZE, MODULUS_SIZE};

static LABEL_HASH: OnceBox<[u8; HASH_SIZE]> = OnceBox::new();

/// SHA-512 of the empty label. Computed on first use; concurrent first callers
/// may each hash, one result is kept.
pub(crate) fn label_hash() -> &'static [u8; HASH_SIZE] {
    LABEL_HASH.get_or_init(|| {
        let mut p_hash = [0u8; HASH_SIZE];
        p_hash.copy_from_slice(&Sha512::digest(b""));
        Box::new(p_hash)
    })
}

/// Removes OAEP padding from a decrypted block, returning the embedded message.
///
/// `em` must be exactly the modulus size; anything else is
/// [`Error::InvalidLength`]. The masks are removed in place.
///
/// The leading byte, label hash and `0x01` delimiter checks are evaluated
/// together and any failure is reported as [`Error::Padding`], so the error
/// does not tell which of them failed.
#[inline]
pub fn oaep_unpad(em: &mut [u8]) -> Result<Vec<u8>> {
    if em.len() != MODULUS_SIZE {
        return Err(Error::InvalidLength);
    }

    let res = decrypt_inner(em, label_hash())?;
    let index = Option::<u32>::from(res).ok_or(Error::Padding)?;

    Ok(em[index as usize..].to_vec())
}

/// Unmasks `em` and returns, when the block is well formed, the offset of the
/// first message byte within `em`.
#[inline]
fn decrypt_inner(em: &mut [u8], expected_p_hash: &[u8]) -> Result<CtOption<u32>> {
    let first_byte_is_zero = em[0].ct_eq(&0u8);

    let (_, payload) = em.split_at_mut(1);
    let (seed, db) = payload.split_at_mut(HASH_SIZE);

    // seed = maskedSeed ^ MGF(maskedDB), then db = maskedDB ^ MGF(seed)
    mgf1_xor(seed, db)?;
    mgf1_xor(db, seed)?;

    let hash_are_equal = db[0..HASH_SIZE].ct_eq(expected_p_hash);

    // The remainder of the plaintext must be zero or more 0x00, followed
    // by 0x01, followed by the message.
    //   looking_for_index: 1 if we are still looking for the 0x01
    //   index: the offset of the first 0x01 byte
    //   nonzero_before_one: 1 if we saw a non-zero byte before the 1
    let mut looking_for_index = Choice::from(1u8);
    let mut index = 0u32;
    let mut nonzero_before_one = Choice::from(0u8);

    for (i, el) in db.iter().skip(HASH_SIZE).enumerate() {
        let equals0 = el.ct_eq(&0u8);
        let equals1 = el.ct_eq(&1u8);
        index.conditional_assign(&(i as u32), looking_for_index & equals1);
        looking_for_index &= !equals1;
        nonzero_before_one |= looking_for_index & !equals0;
    }

    let valid = first_byte_is_zero & hash_are_equal & !nonzero_before_one & !looking_for_index;

    // leading byte + seed + label hash + delimiter
    Ok(CtOption::new(index + 2 + (HASH_SIZE * 2) as u32, valid))
}
