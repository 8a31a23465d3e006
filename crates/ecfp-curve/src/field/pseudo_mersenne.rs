//! Reduction for moduli of the form p = 2^(32·n) - 2^32 - k with small k.
//!
//! Both Koblitz fields fit this shape, so 2^(32·n) ≡ 2^32 + k (mod p) and a
//! double-width value folds back with one multiply-by-word pass.

use ecfp_nat::{nat, DoubleWord, Word, WORD_BITS};

/// z = xx mod p, where `xx` has twice the words of `z`.
pub(crate) fn reduce(xx: &[Word], k: Word, p: &[Word], z: &mut [Word]) {
    let n = z.len();
    debug_assert_eq!(xx.len(), 2 * n);
    debug_assert_eq!(p.len(), n);

    let (lo, hi) = xx.split_at(n);

    // z + top·2^(32n) = lo + hi·(2^32 + k)
    let mut c: DoubleWord = 0;
    for i in 0..n {
        c += lo[i] as DoubleWord + hi[i] as DoubleWord * k as DoubleWord;
        if i > 0 {
            c += hi[i - 1] as DoubleWord;
        }
        z[i] = c as Word;
        c >>= WORD_BITS;
    }
    let top = c + hi[n - 1] as DoubleWord;

    // top < 2^33; fold it and any wrap past 2^(32n) back in
    let mut carry = nat::add_dword_at(top * k as DoubleWord, z, 0) as DoubleWord;
    carry += nat::add_dword_at(top, z, 1) as DoubleWord;
    while carry != 0 {
        carry = nat::add_dword_at(carry * ((1 << WORD_BITS) + k as DoubleWord), z, 0) as DoubleWord;
    }

    if nat::gte(z, p) {
        nat::sub_from(p, z);
    }
}
