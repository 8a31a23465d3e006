//! Fixed-width unsigned arithmetic on little-endian arrays of 32-bit words.
//!
//! Every routine works on caller-provided slices of equal length (unless noted)
//! and reports overflow through its return value instead of growing the array.
//! Borrows are returned as `0` or `-1`, carries as `0` or `1`.

use ecfp_types::CryptoError;

/// Word type of the array representation.
pub type Word = u32;
/// Double-width type for multiplication intermediates.
pub type DoubleWord = u64;

/// Bits per word.
pub const WORD_BITS: u32 = 32;

/// Return true if every word of `x` is zero.
pub fn is_zero(x: &[Word]) -> bool {
    x.iter().all(|&w| w == 0)
}

/// Return true if `x` equals 1.
pub fn is_one(x: &[Word]) -> bool {
    match x.split_first() {
        Some((&low, high)) => low == 1 && is_zero(high),
        None => false,
    }
}

/// Return true if `x >= y` (unsigned, equal lengths).
pub fn gte(x: &[Word], y: &[Word]) -> bool {
    debug_assert_eq!(x.len(), y.len());
    for (&xi, &yi) in x.iter().zip(y).rev() {
        if xi != yi {
            return xi > yi;
        }
    }
    true
}

/// z = x + y, returning the carry out of the top word.
pub fn add(x: &[Word], y: &[Word], z: &mut [Word]) -> Word {
    debug_assert!(x.len() == z.len() && y.len() == z.len());
    let mut c: DoubleWord = 0;
    for i in 0..z.len() {
        c += x[i] as DoubleWord + y[i] as DoubleWord;
        z[i] = c as Word;
        c >>= WORD_BITS;
    }
    c as Word
}

/// z += x, returning the carry out of the top word.
pub fn add_to(x: &[Word], z: &mut [Word]) -> Word {
    debug_assert_eq!(x.len(), z.len());
    let mut c: DoubleWord = 0;
    for (zi, &xi) in z.iter_mut().zip(x) {
        c += *zi as DoubleWord + xi as DoubleWord;
        *zi = c as Word;
        c >>= WORD_BITS;
    }
    c as Word
}

/// Add a double word into `z` starting at word `pos < z.len()`, propagating
/// the carry. Returns the carry out of the top word.
pub fn add_dword_at(x: DoubleWord, z: &mut [Word], pos: usize) -> Word {
    debug_assert!(pos < z.len());
    let mut c = x as u128;
    for zi in z.iter_mut().skip(pos) {
        if c == 0 {
            return 0;
        }
        c += *zi as u128;
        *zi = c as Word;
        c >>= WORD_BITS;
    }
    c as Word
}

/// z = x - y, returning 0, or -1 on borrow.
pub fn sub(x: &[Word], y: &[Word], z: &mut [Word]) -> i32 {
    debug_assert!(x.len() == z.len() && y.len() == z.len());
    let mut c: i64 = 0;
    for i in 0..z.len() {
        c += x[i] as i64 - y[i] as i64;
        z[i] = c as Word;
        c >>= WORD_BITS;
    }
    c as i32
}

/// z -= x, returning 0, or -1 on borrow.
pub fn sub_from(x: &[Word], z: &mut [Word]) -> i32 {
    debug_assert_eq!(x.len(), z.len());
    let mut c: i64 = 0;
    for (zi, &xi) in z.iter_mut().zip(x) {
        c += *zi as i64 - xi as i64;
        *zi = c as Word;
        c >>= WORD_BITS;
    }
    c as i32
}

/// Shift `z` down by one whole word, feeding `c` in at the top.
/// Returns the word shifted out at the bottom.
pub fn shift_down_word(z: &mut [Word], c: Word) -> Word {
    let Some(&out) = z.first() else {
        return c;
    };
    z.copy_within(1.., 0);
    if let Some(top) = z.last_mut() {
        *top = c;
    }
    out
}

/// Shift `z` down by `bits` (1..32), filling the top with the low bits of `c`.
/// Returns the bits shifted out at the bottom, left-aligned in a word.
pub fn shift_down_bits(z: &mut [Word], bits: u32, mut c: Word) -> Word {
    debug_assert!(bits > 0 && bits < WORD_BITS);
    for zi in z.iter_mut().rev() {
        let next = *zi;
        *zi = (next >> bits) | (c << (WORD_BITS - bits));
        c = next;
    }
    c << (WORD_BITS - bits)
}

/// Shift `z` down by one bit, filling the top bit with the low bit of `c`.
pub fn shift_down_bit(z: &mut [Word], mut c: Word) -> Word {
    for zi in z.iter_mut().rev() {
        let next = *zi;
        *zi = (next >> 1) | (c << (WORD_BITS - 1));
        c = next;
    }
    c << (WORD_BITS - 1)
}

/// z = 2·x, returning the bit shifted out of the top word.
pub fn shift_up_bit(x: &[Word], z: &mut [Word]) -> Word {
    debug_assert_eq!(x.len(), z.len());
    let mut c: Word = 0;
    for (zi, &next) in z.iter_mut().zip(x) {
        *zi = (next << 1) | (c >> (WORD_BITS - 1));
        c = next;
    }
    c >> (WORD_BITS - 1)
}

/// zz = x · y, where `zz` holds `x.len() + y.len()` words.
pub fn mul(x: &[Word], y: &[Word], zz: &mut [Word]) {
    debug_assert_eq!(zz.len(), x.len() + y.len());
    zz.fill(0);
    for (i, &xi) in x.iter().enumerate() {
        let mut c: DoubleWord = 0;
        for (j, &yj) in y.iter().enumerate() {
            c += xi as DoubleWord * yj as DoubleWord + zz[i + j] as DoubleWord;
            zz[i + j] = c as Word;
            c >>= WORD_BITS;
        }
        zz[i + y.len()] = c as Word;
    }
}

/// zz = x², where `zz` holds `2 · x.len()` words.
///
/// Cross products are summed once and doubled, then the diagonal is added.
pub fn square(x: &[Word], zz: &mut [Word]) {
    let len = x.len();
    debug_assert_eq!(zz.len(), 2 * len);
    zz.fill(0);
    for i in 0..len {
        let mut c: DoubleWord = 0;
        for j in (i + 1)..len {
            c += x[i] as DoubleWord * x[j] as DoubleWord + zz[i + j] as DoubleWord;
            zz[i + j] = c as Word;
            c >>= WORD_BITS;
        }
        zz[i + len] = c as Word;
    }

    let mut hi: Word = 0;
    for zi in zz.iter_mut() {
        let next = *zi;
        *zi = (next << 1) | hi;
        hi = next >> (WORD_BITS - 1);
    }

    let mut c: DoubleWord = 0;
    for i in 0..len {
        let d = x[i] as DoubleWord * x[i] as DoubleWord;
        c += zz[2 * i] as DoubleWord + (d as Word) as DoubleWord;
        zz[2 * i] = c as Word;
        c >>= WORD_BITS;
        c += zz[2 * i + 1] as DoubleWord + (d >> WORD_BITS);
        zz[2 * i + 1] = c as Word;
        c >>= WORD_BITS;
    }
    debug_assert_eq!(c, 0);
}

/// Load big-endian bytes into `z`, left-padding with zeros.
///
/// Fails if the value does not fit in `z.len()` words.
pub fn from_bytes_be(bytes: &[u8], z: &mut [Word]) -> Result<(), CryptoError> {
    let significant = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let bytes = &bytes[significant..];
    if bytes.len() > z.len() * 4 {
        return Err(CryptoError::InvalidArg);
    }
    z.fill(0);
    for (i, &byte) in bytes.iter().rev().enumerate() {
        z[i / 4] |= (byte as Word) << ((i % 4) * 8);
    }
    Ok(())
}

/// Export `x` as fixed-length big-endian bytes (`4 · x.len()` bytes).
pub fn to_bytes_be(x: &[Word]) -> Vec<u8> {
    x.iter().rev().flat_map(|w| w.to_be_bytes()).collect()
}

/// Parse a big-endian hex string into `z`.
pub fn from_hex(hex: &str, z: &mut [Word]) -> Result<(), CryptoError> {
    let digits = hex.trim_start_matches("0x");
    if digits.is_empty() || !digits.is_ascii() {
        return Err(CryptoError::InvalidArg);
    }
    let padded;
    let digits = if digits.len() % 2 == 1 {
        padded = format!("0{digits}");
        padded.as_str()
    } else {
        digits
    };
    let bytes = (0..digits.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| CryptoError::InvalidArg))
        .collect::<Result<Vec<u8>, _>>()?;
    from_bytes_be(&bytes, z)
}

/// Return the number of significant bits in `x`.
pub fn bit_length(x: &[Word]) -> usize {
    for i in (0..x.len()).rev() {
        if x[i] != 0 {
            return i * WORD_BITS as usize + (WORD_BITS - x[i].leading_zeros()) as usize;
        }
    }
    0
}

/// Get bit `idx` of `x` (0-indexed from the least significant bit).
pub fn test_bit(x: &[Word], idx: usize) -> bool {
    let word = idx / WORD_BITS as usize;
    word < x.len() && (x[word] >> (idx % WORD_BITS as usize)) & 1 == 1
}
