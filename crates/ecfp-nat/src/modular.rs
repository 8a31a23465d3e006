//! Modular operations over an odd modulus held as a fixed-width word array.
//!
//! Inversion uses a binary extended Euclidean algorithm: only comparisons,
//! subtractions, word/bit shifts and a single modulus add or subtract per
//! halving. No division or general multiplication is needed.

use ecfp_types::CryptoError;
use zeroize::{Zeroize, Zeroizing};

use crate::nat::{self, Word};

/// A Bézout cofactor tracked next to one side of the binary GCD.
///
/// The true value is `words - 2^(32·len)` when `sign == -1`: arithmetic is
/// done on unsigned words and the sign counter records wrap-around below
/// zero. The counter is back in `{0, -1}` after every halving.
#[derive(Zeroize)]
#[zeroize(drop)]
struct Cofactor {
    words: Vec<Word>,
    sign: i32,
}

impl Cofactor {
    fn new(len: usize, value: Word) -> Self {
        let mut words = vec![0; len];
        words[0] = value;
        Cofactor { words, sign: 0 }
    }

    /// self -= other, folding the borrow and both sign counters together.
    fn sub_assign(&mut self, other: &Cofactor) {
        self.sign += nat::sub_from(&other.words, &mut self.words) - other.sign;
    }

    /// Divide by two modulo `p`: make the value even by adding or subtracting
    /// the (odd) modulus, then shift down with the sign bit filled in.
    fn halve(&mut self, p: &[Word]) {
        if self.words[0] & 1 != 0 {
            if self.sign < 0 {
                self.sign += nat::add_to(p, &mut self.words) as i32;
            } else {
                self.sign += nat::sub_from(p, &mut self.words);
            }
        }
        debug_assert!(
            self.sign == 0 || self.sign == -1,
            "cofactor sign counter out of range: {}",
            self.sign
        );
        nat::shift_down_bit(&mut self.words, self.sign as Word);
    }

    /// Write the canonical residue into `z`.
    fn finish(&self, p: &[Word], z: &mut [Word]) {
        if self.sign < 0 {
            nat::add(&self.words, p, z);
        } else {
            z.copy_from_slice(&self.words);
        }
    }
}

/// Compute `z = x^-1 mod p` for an odd modulus `p` and `0 < x < p`.
///
/// All three slices must have the same length. Returns
/// [`CryptoError::InvalidArg`] when `x` is zero, not reduced, or `p` is even,
/// and [`CryptoError::BnNoInverse`] if `x` shares a factor with a composite
/// modulus.
pub fn invert(p: &[Word], x: &[Word], z: &mut [Word]) -> Result<(), CryptoError> {
    let len = p.len();
    check_len(len, x.len())?;
    check_len(len, z.len())?;
    if len == 0 || p[0] & 1 == 0 {
        return Err(CryptoError::InvalidArg);
    }
    if nat::is_zero(x) || nat::gte(x, p) {
        return Err(CryptoError::InvalidArg);
    }
    if nat::is_one(x) {
        z.copy_from_slice(x);
        return Ok(());
    }

    let result = binary_gcd(p, x)?;
    result.finish(p, z);
    Ok(())
}

/// Run the binary extended GCD of `(x, p)` and return the cofactor of
/// whichever side reached one.
fn binary_gcd(p: &[Word], x: &[Word]) -> Result<Cofactor, CryptoError> {
    let len = p.len();

    let mut u = Zeroizing::new(x.to_vec());
    let mut a = Cofactor::new(len, 1);

    if u[0] & 1 == 0 {
        inversion_step(p, &mut u, &mut a)?;
    }
    if nat::is_one(&u) {
        return Ok(a);
    }

    let mut v = Zeroizing::new(p.to_vec());
    let mut b = Cofactor::new(len, 0);

    // Both values only shrink, so high words that are zero in both stay zero.
    let mut uv_len = len;

    loop {
        while uv_len > 1 && u[uv_len - 1] == 0 && v[uv_len - 1] == 0 {
            uv_len -= 1;
        }

        if nat::gte(&u, &v) {
            nat::sub_from(&v, &mut u);
            debug_assert!(u[0] & 1 == 0);
            a.sub_assign(&b);
            inversion_step(p, &mut u[..uv_len], &mut a)?;
            if nat::is_one(&u) {
                return Ok(a);
            }
        } else {
            nat::sub_from(&u, &mut v);
            debug_assert!(v[0] & 1 == 0);
            b.sub_assign(&a);
            inversion_step(p, &mut v[..uv_len], &mut b)?;
            if nat::is_one(&v) {
                return Ok(b);
            }
        }
    }
}

/// Strip all trailing zero bits from `u`, halving the cofactor `x` modulo `p`
/// once per bit removed.
fn inversion_step(p: &[Word], u: &mut [Word], x: &mut Cofactor) -> Result<(), CryptoError> {
    if nat::is_zero(u) {
        return Err(CryptoError::BnNoInverse);
    }

    let mut count = 0u32;
    while u[0] == 0 {
        nat::shift_down_word(u, 0);
        count += nat::WORD_BITS;
    }

    let zeroes = u[0].trailing_zeros();
    if zeroes > 0 {
        nat::shift_down_bits(u, zeroes, 0);
        count += zeroes;
    }

    for _ in 0..count {
        x.halve(p);
    }
    Ok(())
}

/// z = (x - y) mod p for reduced `x` and `y`.
pub fn subtract(p: &[Word], x: &[Word], y: &[Word], z: &mut [Word]) {
    if nat::sub(x, y, z) != 0 {
        nat::add_to(p, z);
    }
}

/// z = (x + y) mod p for reduced `x` and `y`.
pub fn add(p: &[Word], x: &[Word], y: &[Word], z: &mut [Word]) {
    let c = nat::add(x, y, z);
    if c != 0 || nat::gte(z, p) {
        nat::sub_from(p, z);
    }
}

fn check_len(need: usize, got: usize) -> Result<(), CryptoError> {
    if need != got {
        return Err(CryptoError::BufferLengthMismatch { need, got });
    }
    Ok(())
}
