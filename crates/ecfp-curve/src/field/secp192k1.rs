//! secp192k1 base field: p = 2^192 - 2^32 - 4553.

use ecfp_nat::Word;
use ecfp_types::EccCurveId;

use super::{pseudo_mersenne, FieldOps};

/// p = 2^192 - 2^32 - 4553.
const P: [Word; 6] = [
    0xFFFF_EE37,
    0xFFFF_FFFE,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
];

/// p².
const P_EXT: [Word; 12] = [
    0x013C_4FD1,
    0x0000_2392,
    0x0000_0001,
    0x0000_0000,
    0x0000_0000,
    0x0000_0000,
    0xFFFF_DC6E,
    0xFFFF_FFFD,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
];

/// p = 2^192 - (2^32 + K).
const K: Word = 0x11C9;

/// Field strategy for the secp192k1 base field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp192k1Field;

impl FieldOps for Secp192k1Field {
    const CURVE: EccCurveId = EccCurveId::Secp192k1;

    type Words = [Word; 6];
    type ExtWords = [Word; 12];

    fn modulus() -> &'static [Word; 6] {
        &P
    }

    fn modulus_ext() -> &'static [Word; 12] {
        &P_EXT
    }

    fn reduce(xx: &[Word; 12], z: &mut [Word; 6]) {
        pseudo_mersenne::reduce(xx, K, &P, z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldElement;

    type Fe = FieldElement<Secp192k1Field>;

    #[test]
    fn test_modulus_ext_is_p_squared() {
        let mut pp = [0; 12];
        ecfp_nat::nat::mul(&P, &P, &mut pp);
        assert_eq!(pp, P_EXT);
    }

    #[test]
    fn test_generator_satisfies_curve_equation() {
        // y² = x³ + 3
        let gx = Fe::from_hex("DB4FF10EC057E9AE26B07D0280B7F4341DA5D1B1EAE06C7D").unwrap();
        let gy = Fe::from_hex("9B2F2F6D9C5628A7844163D015BE86344082AA88D95E2F9D").unwrap();
        let three = Fe::from_hex("03").unwrap();
        assert_eq!(gy.square(), gx.square().mul(&gx).add(&three));
    }

    #[test]
    fn test_reduce_max_extended() {
        // (p - 1)² ≡ 1
        let mut pm1 = P;
        pm1[0] -= 1;
        let mut tt = [0; 12];
        Secp192k1Field::square_ext(&pm1, &mut tt);
        let mut z = [0; 6];
        Secp192k1Field::reduce(&tt, &mut z);
        assert_eq!(z, [1, 0, 0, 0, 0, 0]);
    }
}
