//! Cross-crate tests for the ecfp workspace.
//! Checks that the word-level routines in `ecfp-nat` agree with the field and
//! group layers built on top of them.

#[cfg(test)]
mod tests {
    use ecfp_curve::{Coordinates, Curve, FieldElement, FieldOps, Secp192k1Field, Secp256k1Field};
    use ecfp_nat::{modular, nat};
    use ecfp_types::{CryptoError, EccCurveId};

    // -------------------------------------------------------
    // 1. Raw inversion agrees with field multiplication
    // -------------------------------------------------------
    fn check_invert<F: FieldOps>() {
        let p = F::modulus();
        for _ in 0..16 {
            let mut x = F::Words::default();
            ecfp_nat::random(p.as_ref(), x.as_mut()).unwrap();
            if nat::is_zero(x.as_ref()) {
                continue;
            }
            let mut z = F::Words::default();
            modular::invert(p.as_ref(), x.as_ref(), z.as_mut()).unwrap();

            let fx = FieldElement::<F>::from_words(x).unwrap();
            let fz = FieldElement::<F>::from_words(z).unwrap();
            assert!(fx.mul(&fz).is_one());
            assert_eq!(fx.invert().unwrap(), fz);
        }
    }

    #[test]
    fn test_invert_matches_field_secp192k1() {
        check_invert::<Secp192k1Field>();
    }

    #[test]
    fn test_invert_matches_field_secp256k1() {
        check_invert::<Secp256k1Field>();
    }

    #[test]
    fn test_invert_rejects_unreduced_input() {
        let p = Secp256k1Field::modulus();
        let mut z = [0u32; 8];
        assert_eq!(
            modular::invert(p, p, &mut z).unwrap_err(),
            CryptoError::InvalidArg
        );
    }

    // -------------------------------------------------------
    // 2. Normalization agrees with the Jacobian group law
    // -------------------------------------------------------
    #[test]
    fn test_normalize_matches_jacobian_coordinates() {
        let curve = Curve::secp256k1().unwrap();
        let g = curve.generator();
        let p = g.twice().add(&g).twice();
        let Coordinates::Jacobian { x, y, z } = *p.coordinates() else {
            panic!("expected Jacobian coordinates");
        };

        let zinv = z.invert().unwrap();
        let zinv2 = zinv.square();
        let zinv3 = zinv2.mul(&zinv);
        assert_eq!(p.affine_x().unwrap(), x.mul(&zinv2));
        assert_eq!(p.affine_y().unwrap(), y.mul(&zinv3));

        let n = p.normalize().unwrap();
        assert!(matches!(n.coordinates(), Coordinates::Affine { .. }));
        assert_eq!(n, p);
        assert_eq!(n, g.three_times().twice());
    }

    // -------------------------------------------------------
    // 3. Byte export feeds back into validated construction
    // -------------------------------------------------------
    #[test]
    fn test_affine_bytes_roundtrip_through_curve() {
        let curve = Curve::secp192k1().unwrap();
        assert_eq!(curve.id(), EccCurveId::Secp192k1);
        let p = curve.generator().three_times();
        let x = p.affine_x().unwrap().to_bytes_be();
        let y = p.affine_y().unwrap().to_bytes_be();
        assert_eq!(x.len(), curve.field_size());

        let q = curve.create_point_from_bytes(&x, &y).unwrap();
        assert_eq!(q, p);

        let mut bad_y = y.clone();
        bad_y[23] ^= 1;
        assert_eq!(
            curve.create_point_from_bytes(&x, &bad_y).unwrap_err(),
            CryptoError::EccPointNotOnCurve
        );
    }

    #[test]
    fn test_infinity_has_no_affine_form() {
        let curve = Curve::secp256k1().unwrap();
        let inf = curve.generator().subtract(&curve.generator());
        assert!(inf.is_infinity());
        assert_eq!(inf.affine_x().unwrap_err(), CryptoError::EccPointAtInfinity);
    }
}
