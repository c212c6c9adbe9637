//! Mask generation function used by OAEP.

use alloc::vec::Vec;
use digest::Digest;
use sha2::Sha512;

use crate::errors::{Error, Result};
use crate::HASH_SIZE;

/// Largest mask MGF1 can produce: `hLen * 2^32` bytes (RFC 8017, B.2.1).
const MAX_MASK_LEN: u64 = (HASH_SIZE as u64) << 32;

/// MGF1 with SHA-512: returns the first `len` bytes of
/// `Hash(seed || C(0)) || Hash(seed || C(1)) || ...` where `C(i)` is the
/// big-endian 32-bit counter.
pub fn mgf1(seed: &[u8], len: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; len];
    mgf1_xor(&mut out, seed)?;
    Ok(out)
}

/// XORs the MGF1 mask derived from `seed` into `out`.
pub(crate) fn mgf1_xor(out: &mut [u8], seed: &[u8]) -> Result<()> {
    if out.len() as u64 > MAX_MASK_LEN {
        return Err(Error::MaskTooLong);
    }

    let mut digest = Sha512::new();
    for (counter, chunk) in out.chunks_mut(HASH_SIZE).enumerate() {
        Digest::update(&mut digest, seed);
        Digest::update(&mut digest, (counter as u32).to_be_bytes());

        let digest_output = digest.finalize_reset();
        for (o, d) in chunk.iter_mut().zip(digest_output.iter()) {
            *o ^= d;
        }
    }

    Ok(())
}
