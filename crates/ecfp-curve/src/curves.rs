//! Curve parameters for short Weierstrass curves y² = x³ + b with a = 0.
//!
//! Provides hard-coded parameters for the SEC 2 Koblitz curves secp192k1 and
//! secp256k1. Parameters are immutable once built and shared by every point
//! through an `Arc`.

use std::sync::Arc;

use ecfp_nat::nat;
use ecfp_types::{CryptoError, EccCurveId};

use crate::field::{FieldElement, FieldOps};
use crate::point::Point;

#[cfg(feature = "secp192k1")]
use crate::field::secp192k1::Secp192k1Field;
#[cfg(feature = "secp256k1")]
use crate::field::secp256k1::Secp256k1Field;

/// Parameters of a curve y² = x³ + b over the field described by `F`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve<F: FieldOps> {
    /// Curve coefficient b.
    b: FieldElement<F>,
    /// Base point G x-coordinate.
    gx: FieldElement<F>,
    /// Base point G y-coordinate.
    gy: FieldElement<F>,
    /// Order of the base point G, little-endian words.
    order: F::Words,
    /// Cofactor.
    cofactor: u32,
}

impl<F: FieldOps> Curve<F> {
    /// Build curve parameters, checking that the generator lies on the curve.
    pub fn new(
        b: FieldElement<F>,
        gx: FieldElement<F>,
        gy: FieldElement<F>,
        order: F::Words,
        cofactor: u32,
    ) -> Result<Arc<Self>, CryptoError> {
        if !satisfies_equation(&b, &gx, &gy) {
            log::debug!("{}: generator is not on the curve", F::CURVE);
            return Err(CryptoError::EccPointNotOnCurve);
        }
        if nat::is_zero(order.as_ref()) || cofactor == 0 {
            return Err(CryptoError::InvalidArg);
        }
        log::debug!(
            "{}: initialised curve parameters ({}-bit field, cofactor {})",
            F::CURVE,
            F::CURVE.field_bits(),
            cofactor
        );
        Ok(Arc::new(Curve {
            b,
            gx,
            gy,
            order,
            cofactor,
        }))
    }

    /// Named curve identifier.
    pub fn id(&self) -> EccCurveId {
        F::CURVE
    }

    /// Field element size in bytes.
    pub fn field_size(&self) -> usize {
        F::Words::default().as_ref().len() * 4
    }

    pub fn b(&self) -> &FieldElement<F> {
        &self.b
    }

    pub fn order(&self) -> &F::Words {
        &self.order
    }

    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// The point at infinity on this curve.
    pub fn infinity(self: &Arc<Self>) -> Point<F> {
        Point::infinity(Arc::clone(self))
    }

    /// The base point G in affine form.
    pub fn generator(self: &Arc<Self>) -> Point<F> {
        Point::from_affine(Arc::clone(self), self.gx, self.gy)
    }

    /// Create an affine point, rejecting coordinates that are not on the curve.
    pub fn create_point(
        self: &Arc<Self>,
        x: FieldElement<F>,
        y: FieldElement<F>,
    ) -> Result<Point<F>, CryptoError> {
        if !satisfies_equation(&self.b, &x, &y) {
            log::debug!("{}: rejecting point not on the curve", F::CURVE);
            return Err(CryptoError::EccPointNotOnCurve);
        }
        Ok(Point::from_affine(Arc::clone(self), x, y))
    }

    /// Create an affine point from big-endian coordinate bytes.
    pub fn create_point_from_bytes(
        self: &Arc<Self>,
        x: &[u8],
        y: &[u8],
    ) -> Result<Point<F>, CryptoError> {
        self.create_point(FieldElement::from_bytes_be(x)?, FieldElement::from_bytes_be(y)?)
    }
}

/// y² = x³ + b.
fn satisfies_equation<F: FieldOps>(
    b: &FieldElement<F>,
    x: &FieldElement<F>,
    y: &FieldElement<F>,
) -> bool {
    y.square() == x.square().mul(x).add(b)
}

fn words<F: FieldOps>(hex: &str) -> Result<F::Words, CryptoError> {
    let mut w = F::Words::default();
    nat::from_hex(hex, w.as_mut())?;
    Ok(w)
}

#[cfg(feature = "secp192k1")]
impl Curve<Secp192k1Field> {
    /// secp192k1 parameters (SEC 2 §2.2.1).
    pub fn secp192k1() -> Result<Arc<Self>, CryptoError> {
        Curve::new(
            FieldElement::from_hex("03")?,
            FieldElement::from_hex("DB4FF10EC057E9AE26B07D0280B7F4341DA5D1B1EAE06C7D")?,
            FieldElement::from_hex("9B2F2F6D9C5628A7844163D015BE86344082AA88D95E2F9D")?,
            words::<Secp192k1Field>("FFFFFFFFFFFFFFFFFFFFFFFE26F2FC170F69466A74DEFD8D")?,
            1,
        )
    }
}

#[cfg(feature = "secp256k1")]
impl Curve<Secp256k1Field> {
    /// secp256k1 parameters (SEC 2 §2.4.1).
    pub fn secp256k1() -> Result<Arc<Self>, CryptoError> {
        Curve::new(
            FieldElement::from_hex("07")?,
            FieldElement::from_hex(
                "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
            )?,
            FieldElement::from_hex(
                "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
            )?,
            words::<Secp256k1Field>(
                "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
            )?,
            1,
        )
    }
}
