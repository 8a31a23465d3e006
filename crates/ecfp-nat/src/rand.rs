//! Random residues below a modulus using OS randomness.

use ecfp_types::CryptoError;
use zeroize::Zeroize;

use crate::nat::{self, Word, WORD_BITS};

/// Fill `z` with a value drawn uniformly from `[0, p)`.
///
/// Uses rejection sampling: candidates are masked to the bit length of `p`
/// and redrawn until they fall below it.
pub fn random(p: &[Word], z: &mut [Word]) -> Result<(), CryptoError> {
    if z.len() != p.len() {
        return Err(CryptoError::BufferLengthMismatch {
            need: p.len(),
            got: z.len(),
        });
    }
    if nat::is_zero(p) {
        return Err(CryptoError::InvalidArg);
    }

    let top = p.len() - 1;
    let mut mask = p[top];
    mask |= mask >> 1;
    mask |= mask >> 2;
    mask |= mask >> 4;
    mask |= mask >> 8;
    mask |= mask >> 16;

    let mut buf = vec![0u8; p.len() * (WORD_BITS as usize / 8)];
    loop {
        getrandom::getrandom(&mut buf).map_err(|_| CryptoError::BnRandGenFail)?;
        for (zi, chunk) in z.iter_mut().zip(buf.chunks_exact(4)) {
            *zi = Word::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        z[top] &= mask;

        if !nat::gte(z, p) {
            buf.zeroize();
            return Ok(());
        }
    }
}
