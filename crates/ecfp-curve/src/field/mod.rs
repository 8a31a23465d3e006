//! Prime-field arithmetic behind a per-modulus strategy.
//!
//! [`FieldOps`] is the capability the group law is written against: one
//! zero-sized implementation per supported modulus, each carrying its own
//! fast reduction. [`FieldElement`] wraps a reduced word array for a given
//! strategy and gives it value semantics.

use std::fmt;
use std::marker::PhantomData;

use ecfp_nat::{modular, nat, Word};
use ecfp_types::{CryptoError, EccCurveId};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

pub(crate) mod pseudo_mersenne;
#[cfg(feature = "secp192k1")]
pub mod secp192k1;
#[cfg(feature = "secp256k1")]
pub mod secp256k1;

/// Arithmetic modulo one fixed prime on fixed-width word arrays.
///
/// Reduced values (`Words`) are always `< p`; extended values (`ExtWords`)
/// are double-width accumulators `< p²`. Implementors supply the modulus and
/// the fast reduction; the remaining operations have generic defaults built on
/// `ecfp_nat` that an implementation may override.
pub trait FieldOps:
    Copy + Clone + fmt::Debug + PartialEq + Eq + Send + Sync + 'static
{
    /// Curve whose base field this is.
    const CURVE: EccCurveId;

    /// Reduced word array.
    type Words: Copy
        + Default
        + PartialEq
        + Eq
        + fmt::Debug
        + AsRef<[Word]>
        + AsMut<[Word]>
        + Zeroize
        + Send
        + Sync;

    /// Double-width word array.
    type ExtWords: Copy + Default + AsRef<[Word]> + AsMut<[Word]> + Zeroize;

    /// The prime modulus p.
    fn modulus() -> &'static Self::Words;

    /// p², used to keep extended differences non-negative.
    fn modulus_ext() -> &'static Self::ExtWords;

    /// z = xx mod p.
    fn reduce(xx: &Self::ExtWords, z: &mut Self::Words);

    /// z = (x + y) mod p.
    fn add(x: &Self::Words, y: &Self::Words, z: &mut Self::Words) {
        modular::add(Self::modulus().as_ref(), x.as_ref(), y.as_ref(), z.as_mut());
    }

    /// z = (x - y) mod p.
    fn subtract(x: &Self::Words, y: &Self::Words, z: &mut Self::Words) {
        modular::subtract(Self::modulus().as_ref(), x.as_ref(), y.as_ref(), z.as_mut());
    }

    /// z = 2·x mod p.
    fn twice(x: &Self::Words, z: &mut Self::Words) {
        let p = Self::modulus().as_ref();
        let c = nat::shift_up_bit(x.as_ref(), z.as_mut());
        if c != 0 || nat::gte(z.as_ref(), p) {
            nat::sub_from(p, z.as_mut());
        }
    }

    /// z = -x mod p.
    fn negate(x: &Self::Words, z: &mut Self::Words) {
        if nat::is_zero(x.as_ref()) {
            z.as_mut().fill(0);
        } else {
            nat::sub(Self::modulus().as_ref(), x.as_ref(), z.as_mut());
        }
    }

    /// zz = x · y without reduction.
    fn multiply_ext(x: &Self::Words, y: &Self::Words, zz: &mut Self::ExtWords) {
        nat::mul(x.as_ref(), y.as_ref(), zz.as_mut());
    }

    /// zz = x² without reduction.
    fn square_ext(x: &Self::Words, zz: &mut Self::ExtWords) {
        nat::square(x.as_ref(), zz.as_mut());
    }

    /// zz = (zz - yy) mod p² for extended values `< p²`.
    fn subtract_ext(zz: &mut Self::ExtWords, yy: &Self::ExtWords) {
        if nat::sub_from(yy.as_ref(), zz.as_mut()) != 0 {
            nat::add_to(Self::modulus_ext().as_ref(), zz.as_mut());
        }
    }

    /// z = (x · y) mod p.
    fn multiply(x: &Self::Words, y: &Self::Words, z: &mut Self::Words) {
        let mut tt = Self::ExtWords::default();
        Self::multiply_ext(x, y, &mut tt);
        Self::reduce(&tt, z);
        tt.zeroize();
    }

    /// z = x² mod p.
    fn square(x: &Self::Words, z: &mut Self::Words) {
        let mut tt = Self::ExtWords::default();
        Self::square_ext(x, &mut tt);
        Self::reduce(&tt, z);
        tt.zeroize();
    }

    /// z = x^-1 mod p for nonzero x.
    fn invert(x: &Self::Words, z: &mut Self::Words) -> Result<(), CryptoError> {
        modular::invert(Self::modulus().as_ref(), x.as_ref(), z.as_mut())
    }
}

/// An element of the prime field described by `F`, always fully reduced.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FieldElement<F: FieldOps> {
    words: F::Words,
    _field: PhantomData<F>,
}

impl<F: FieldOps> FieldElement<F> {
    fn from_raw(words: F::Words) -> Self {
        FieldElement {
            words,
            _field: PhantomData,
        }
    }

    /// The zero element.
    pub fn zero() -> Self {
        Self::from_raw(F::Words::default())
    }

    /// The one element.
    pub fn one() -> Self {
        let mut words = F::Words::default();
        words.as_mut()[0] = 1;
        Self::from_raw(words)
    }

    /// Create an element from little-endian words, rejecting values `>= p`.
    pub fn from_words(words: F::Words) -> Result<Self, CryptoError> {
        if nat::gte(words.as_ref(), F::modulus().as_ref()) {
            return Err(CryptoError::InvalidArg);
        }
        Ok(Self::from_raw(words))
    }

    /// Create an element from big-endian bytes, rejecting values `>= p`.
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, CryptoError> {
        let mut words = F::Words::default();
        nat::from_bytes_be(bytes, words.as_mut())?;
        Self::from_words(words)
    }

    /// Create an element from a big-endian hex string, rejecting values `>= p`.
    pub fn from_hex(hex: &str) -> Result<Self, CryptoError> {
        let mut words = F::Words::default();
        nat::from_hex(hex, words.as_mut())?;
        Self::from_words(words)
    }

    /// Reduce a double-width accumulator.
    pub(crate) fn from_ext(tt: &F::ExtWords) -> Self {
        let mut words = F::Words::default();
        F::reduce(tt, &mut words);
        Self::from_raw(words)
    }

    /// Export as fixed-length big-endian bytes.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        nat::to_bytes_be(self.words.as_ref())
    }

    /// The little-endian word representation.
    pub fn words(&self) -> &F::Words {
        &self.words
    }

    pub fn is_zero(&self) -> bool {
        nat::is_zero(self.words.as_ref())
    }

    pub fn is_one(&self) -> bool {
        nat::is_one(self.words.as_ref())
    }

    /// Return true if the least significant bit is set.
    pub fn test_bit_zero(&self) -> bool {
        self.words.as_ref()[0] & 1 == 1
    }

    pub fn add(&self, rhs: &Self) -> Self {
        let mut z = F::Words::default();
        F::add(&self.words, &rhs.words, &mut z);
        Self::from_raw(z)
    }

    pub fn sub(&self, rhs: &Self) -> Self {
        let mut z = F::Words::default();
        F::subtract(&self.words, &rhs.words, &mut z);
        Self::from_raw(z)
    }

    /// 2·self.
    pub fn twice(&self) -> Self {
        let mut z = F::Words::default();
        F::twice(&self.words, &mut z);
        Self::from_raw(z)
    }

    pub fn negate(&self) -> Self {
        let mut z = F::Words::default();
        F::negate(&self.words, &mut z);
        Self::from_raw(z)
    }

    pub fn mul(&self, rhs: &Self) -> Self {
        let mut z = F::Words::default();
        F::multiply(&self.words, &rhs.words, &mut z);
        Self::from_raw(z)
    }

    pub fn square(&self) -> Self {
        let mut z = F::Words::default();
        F::square(&self.words, &mut z);
        Self::from_raw(z)
    }

    /// Multiplicative inverse; fails with `InvalidArg` for zero.
    pub fn invert(&self) -> Result<Self, CryptoError> {
        let mut z = F::Words::default();
        F::invert(&self.words, &mut z)?;
        Ok(Self::from_raw(z))
    }
}

impl<F: FieldOps> ConstantTimeEq for FieldElement<F> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.words.as_ref().ct_eq(other.words.as_ref())
    }
}

impl<F: FieldOps> fmt::Debug for FieldElement<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self
            .to_bytes_be()
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect::<String>();
        write!(f, "FieldElement({}:0x{hex})", F::CURVE)
    }
}

#[cfg(all(test, feature = "secp192k1"))]
mod tests {
    use super::secp192k1::Secp192k1Field;
    use super::*;

    type Fe = FieldElement<Secp192k1Field>;

    const P_MINUS_ONE: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFEE36";

    #[test]
    fn test_constants() {
        assert!(Fe::zero().is_zero());
        assert!(Fe::one().is_one());
        assert!(!Fe::one().is_zero());
    }

    #[test]
    fn test_from_hex_rejects_modulus() {
        assert!(Fe::from_hex("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFEE37").is_err());
        assert!(Fe::from_hex(P_MINUS_ONE).is_ok());
    }

    #[test]
    fn test_add_wraps() {
        let pm1 = Fe::from_hex(P_MINUS_ONE).unwrap();
        assert!(pm1.add(&Fe::one()).is_zero());
        assert_eq!(pm1.twice(), pm1.add(&pm1));
    }

    #[test]
    fn test_negate() {
        let pm1 = Fe::from_hex(P_MINUS_ONE).unwrap();
        assert_eq!(Fe::one().negate(), pm1);
        assert!(Fe::zero().negate().is_zero());
        assert_eq!(Fe::zero().sub(&Fe::one()), pm1);
    }

    #[test]
    fn test_mul_minus_one_squared() {
        let pm1 = Fe::from_hex(P_MINUS_ONE).unwrap();
        assert!(pm1.square().is_one());
        assert!(pm1.mul(&pm1).is_one());
    }

    #[test]
    fn test_invert() {
        let x = Fe::from_hex("DB4FF10EC057E9AE26B07D0280B7F4341DA5D1B1EAE06C7D").unwrap();
        let inv = x.invert().unwrap();
        assert!(x.mul(&inv).is_one());
        assert_eq!(Fe::zero().invert().unwrap_err(), CryptoError::InvalidArg);
    }

    #[test]
    fn test_bytes_roundtrip() {
        let x = Fe::from_hex("0102030405").unwrap();
        let bytes = x.to_bytes_be();
        assert_eq!(bytes.len(), 24);
        assert_eq!(Fe::from_bytes_be(&bytes).unwrap(), x);
    }

    #[test]
    fn test_ct_eq() {
        let a = Fe::from_hex("2A").unwrap();
        let b = Fe::from_hex("2A").unwrap();
        assert_eq!(a.ct_eq(&b).unwrap_u8(), 1);
        assert_eq!(a.ct_eq(&Fe::one()).unwrap_u8(), 0);
    }

    #[test]
    fn test_subtract_ext_wraps() {
        let x = Fe::from_hex("05").unwrap();
        let y = Fe::from_hex("07").unwrap();
        let mut xx = [0u32; 12];
        let mut yy = [0u32; 12];
        Secp192k1Field::multiply_ext(x.words(), &Fe::one().words, &mut xx);
        Secp192k1Field::multiply_ext(y.words(), &Fe::one().words, &mut yy);
        Secp192k1Field::subtract_ext(&mut xx, &yy);
        assert_eq!(Fe::from_ext(&xx), x.sub(&y));
    }
}
