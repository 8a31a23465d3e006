//! secp256k1 base field: p = 2^256 - 2^32 - 977.

use ecfp_nat::Word;
use ecfp_types::EccCurveId;

use super::{pseudo_mersenne, FieldOps};

/// p = 2^256 - 2^32 - 977.
const P: [Word; 8] = [
    0xFFFF_FC2F,
    0xFFFF_FFFE,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
];

/// p².
const P_EXT: [Word; 16] = [
    0x000E_90A1,
    0x0000_07A2,
    0x0000_0001,
    0x0000_0000,
    0x0000_0000,
    0x0000_0000,
    0x0000_0000,
    0x0000_0000,
    0xFFFF_F85E,
    0xFFFF_FFFD,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
    0xFFFF_FFFF,
];

/// p = 2^256 - (2^32 + K).
const K: Word = 0x03D1;

/// Field strategy for the secp256k1 base field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1Field;

impl FieldOps for Secp256k1Field {
    const CURVE: EccCurveId = EccCurveId::Secp256k1;

    type Words = [Word; 8];
    type ExtWords = [Word; 16];

    fn modulus() -> &'static [Word; 8] {
        &P
    }

    fn modulus_ext() -> &'static [Word; 16] {
        &P_EXT
    }

    fn reduce(xx: &[Word; 16], z: &mut [Word; 8]) {
        pseudo_mersenne::reduce(xx, K, &P, z);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldElement;

    type Fe = FieldElement<Secp256k1Field>;

    const GX: &str = "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798";
    const GY: &str = "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8";

    #[test]
    fn test_multiply_known_products() {
        let gx = Fe::from_hex(GX).unwrap();
        let gy = Fe::from_hex(GY).unwrap();
        assert_eq!(
            gx.mul(&gy),
            Fe::from_hex("FD3DC529C6EB60FB9D166034CF3C1A5A72324AA9DFD3428A56D7E1CE0179FD9B").unwrap()
        );
        assert_eq!(
            gx.square(),
            Fe::from_hex("8550E7D238FCF3086BA9ADCF0FB52A9DE3652194D06CB5BB38D50229B854FC49").unwrap()
        );
    }

    #[test]
    fn test_twice_near_modulus() {
        let mut half = P;
        ecfp_nat::nat::shift_down_bit(&mut half, 0);
        let h = Fe::from_words(half).unwrap();
        // 2·((p - 1) / 2) = p - 1
        assert_eq!(h.twice(), Fe::one().negate());
        assert!(h.twice().add(&Fe::one()).is_zero());
    }

    #[test]
    fn test_subtract_ext_matches_reduced_difference() {
        let gx = Fe::from_hex(GX).unwrap();
        let gy = Fe::from_hex(GY).unwrap();
        let mut xx = [0; 16];
        let mut yy = [0; 16];
        Secp256k1Field::square_ext(gy.words(), &mut xx);
        Secp256k1Field::multiply_ext(gx.words(), gy.words(), &mut yy);
        Secp256k1Field::subtract_ext(&mut xx, &yy);
        let mut z = [0; 8];
        Secp256k1Field::reduce(&xx, &mut z);
        assert_eq!(z, *gy.square().sub(&gx.mul(&gy)).words());
    }
}
