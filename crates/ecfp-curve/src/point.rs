//! Jacobian coordinate point arithmetic for curves with a = 0.
//!
//! Uses Jacobian projective coordinates (X, Y, Z) representing affine point
//! (X/Z², Y/Z³). Points are immutable values: every operation returns a fresh
//! point and never modifies its inputs.
//!
//! The group law is built from two primitives, [`Point::add`] and
//! [`Point::twice`]. The combinators only call downward:
//! `subtract → negate, add`; `twice_plus → three_times, twice, add`;
//! `three_times → twice, add`; `add → twice`. `twice` calls nothing else.

use std::fmt;
use std::ptr;
use std::sync::Arc;

use ecfp_types::CryptoError;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::curves::Curve;
use crate::field::{FieldElement, FieldOps};

/// Coordinate state of a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coordinates<F: FieldOps> {
    /// The identity element; carries no coordinates.
    Infinity,
    /// Affine coordinates, Z implicitly 1.
    Affine {
        x: FieldElement<F>,
        y: FieldElement<F>,
    },
    /// Jacobian coordinates (X, Y, Z), Z nonzero.
    Jacobian {
        x: FieldElement<F>,
        y: FieldElement<F>,
        z: FieldElement<F>,
    },
}

/// Raw (X, Y, Z) of a finite point. `z` is `None` when Z = 1.
type Parts<F> = (FieldElement<F>, FieldElement<F>, Option<FieldElement<F>>);

/// A point on a curve y² = x³ + b.
#[derive(Clone)]
pub struct Point<F: FieldOps> {
    curve: Arc<Curve<F>>,
    coords: Coordinates<F>,
    /// Encoding preference; carried through arithmetic, never read by it.
    compressed: bool,
}

impl<F: FieldOps> Point<F> {
    pub(crate) fn infinity(curve: Arc<Curve<F>>) -> Self {
        Point {
            curve,
            coords: Coordinates::Infinity,
            compressed: false,
        }
    }

    /// Create a point from affine coordinates without checking the curve
    /// equation. Use [`Curve::create_point`] for untrusted input.
    pub fn from_affine(curve: Arc<Curve<F>>, x: FieldElement<F>, y: FieldElement<F>) -> Self {
        Point {
            curve,
            coords: Coordinates::Affine { x, y },
            compressed: false,
        }
    }

    /// Create a point from Jacobian coordinates without checking the curve
    /// equation. Z = 0 denotes the point at infinity.
    pub fn from_jacobian(
        curve: Arc<Curve<F>>,
        x: FieldElement<F>,
        y: FieldElement<F>,
        z: FieldElement<F>,
    ) -> Self {
        let coords = if z.is_zero() {
            Coordinates::Infinity
        } else {
            Coordinates::Jacobian { x, y, z }
        };
        Point {
            curve,
            coords,
            compressed: false,
        }
    }

    fn with_coords(&self, coords: Coordinates<F>) -> Self {
        Point {
            curve: Arc::clone(&self.curve),
            coords,
            compressed: self.compressed,
        }
    }

    /// Same point with a different encoding preference.
    pub fn with_compression(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    pub fn curve(&self) -> &Arc<Curve<F>> {
        &self.curve
    }

    pub fn coordinates(&self) -> &Coordinates<F> {
        &self.coords
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self.coords, Coordinates::Infinity)
    }

    fn parts(&self) -> Option<Parts<F>> {
        match self.coords {
            Coordinates::Infinity => None,
            Coordinates::Affine { x, y } => Some((x, y, None)),
            Coordinates::Jacobian { x, y, z } => Some((x, y, (!z.is_one()).then_some(z))),
        }
    }

    /// Raw Y coordinate, zero for the point at infinity.
    fn raw_y(&self) -> FieldElement<F> {
        match self.coords {
            Coordinates::Infinity => FieldElement::zero(),
            Coordinates::Affine { y, .. } | Coordinates::Jacobian { y, .. } => y,
        }
    }

    /// R = self + b.
    pub fn add(&self, b: &Point<F>) -> Point<F> {
        let Some((x1, y1, z1)) = self.parts() else {
            return b.clone();
        };
        let Some((x2, y2, z2)) = b.parts() else {
            return self.clone();
        };
        if ptr::eq(self, b) {
            return self.twice();
        }

        let (u2, s2) = match z1 {
            None => (x2, y2),
            Some(z1) => {
                let z1_sq = z1.square();
                (z1_sq.mul(&x2), z1_sq.mul(&z1).mul(&y2))
            }
        };

        let (u1, s1) = match z2 {
            None => (x1, y1),
            Some(z2) => {
                let z2_sq = z2.square();
                (z2_sq.mul(&x1), z2_sq.mul(&z2).mul(&y1))
            }
        };

        let h = u1.sub(&u2);
        let r = s1.sub(&s2);

        if h.is_zero() {
            if r.is_zero() {
                // self == b
                return self.twice();
            }
            // self == -b
            return self.curve.infinity().with_compression(self.compressed);
        }

        let h_sq = h.square();
        let g = h_sq.mul(&h);
        let v = h_sq.mul(&u1);

        // X3 = R² + G - 2V
        let x3 = r.square().add(&g).sub(&v).sub(&v);

        // Y3 = R·(V - X3) - S1·G, subtracted at double width and reduced once
        let mut tt1 = F::ExtWords::default();
        let mut tt2 = F::ExtWords::default();
        F::multiply_ext(s1.words(), g.words(), &mut tt1);
        F::multiply_ext(v.sub(&x3).words(), r.words(), &mut tt2);
        F::subtract_ext(&mut tt2, &tt1);
        let y3 = FieldElement::from_ext(&tt2);
        tt1.zeroize();
        tt2.zeroize();

        // Z3 = H·Z1·Z2
        let mut z3 = h;
        if let Some(z1) = z1 {
            z3 = z3.mul(&z1);
        }
        if let Some(z2) = z2 {
            z3 = z3.mul(&z2);
        }

        self.with_coords(Coordinates::Jacobian {
            x: x3,
            y: y3,
            z: z3,
        })
    }

    /// R = 2·self.
    pub fn twice(&self) -> Point<F> {
        let Some((x1, y1, z1)) = self.parts() else {
            return self.clone();
        };
        if y1.is_zero() {
            return self.curve.infinity().with_compression(self.compressed);
        }

        let y1_sq = y1.square();
        let t = y1_sq.square();

        // M = 3·X1², valid because a = 0
        let x1_sq = x1.square();
        let m = x1_sq.twice().add(&x1_sq);

        // S = 4·X1·Y1²
        let s = y1_sq.mul(&x1).twice().twice();

        // 8·T
        let t8 = t.twice().twice().twice();

        // X3 = M² - 2S
        let x3 = m.square().sub(&s).sub(&s);

        // Y3 = M·(S - X3) - 8T
        let y3 = s.sub(&x3).mul(&m).sub(&t8);

        // Z3 = 2·Y1·Z1
        let mut z3 = y1.twice();
        if let Some(z1) = z1 {
            z3 = z3.mul(&z1);
        }

        self.with_coords(Coordinates::Jacobian {
            x: x3,
            y: y3,
            z: z3,
        })
    }

    /// R = 2·self + b.
    pub fn twice_plus(&self, b: &Point<F>) -> Point<F> {
        if ptr::eq(self, b) {
            return self.three_times();
        }
        if self.is_infinity() {
            return b.clone();
        }
        if b.is_infinity() {
            return self.twice();
        }
        if self.raw_y().is_zero() {
            // 2·self is the identity
            return b.clone();
        }
        self.twice().add(b)
    }

    /// R = 3·self.
    pub fn three_times(&self) -> Point<F> {
        if self.is_infinity() || self.raw_y().is_zero() {
            return self.clone();
        }
        // Must not go through twice_plus, which calls back into three_times.
        self.twice().add(self)
    }

    /// R = -self.
    pub fn negate(&self) -> Point<F> {
        match self.coords {
            Coordinates::Infinity => self.clone(),
            Coordinates::Affine { x, y } => self.with_coords(Coordinates::Affine { x, y: y.negate() }),
            Coordinates::Jacobian { x, y, z } => self.with_coords(Coordinates::Jacobian {
                x,
                y: y.negate(),
                z,
            }),
        }
    }

    /// R = self - b.
    pub fn subtract(&self, b: &Point<F>) -> Point<F> {
        if b.is_infinity() {
            return self.clone();
        }
        self.add(&b.negate())
    }

    /// Convert to affine form (Z = 1) with one field inversion.
    pub fn normalize(&self) -> Result<Point<F>, CryptoError> {
        match self.coords {
            Coordinates::Infinity | Coordinates::Affine { .. } => Ok(self.clone()),
            Coordinates::Jacobian { x, y, z } => {
                let z_inv = z.invert()?;
                let z_inv2 = z_inv.square();
                let z_inv3 = z_inv2.mul(&z_inv);
                Ok(self.with_coords(Coordinates::Affine {
                    x: x.mul(&z_inv2),
                    y: y.mul(&z_inv3),
                }))
            }
        }
    }

    /// Affine x-coordinate; fails for the point at infinity.
    pub fn affine_x(&self) -> Result<FieldElement<F>, CryptoError> {
        match self.normalize()?.coords {
            Coordinates::Affine { x, .. } => Ok(x),
            _ => Err(CryptoError::EccPointAtInfinity),
        }
    }

    /// Affine y-coordinate; fails for the point at infinity.
    pub fn affine_y(&self) -> Result<FieldElement<F>, CryptoError> {
        match self.normalize()?.coords {
            Coordinates::Affine { y, .. } => Ok(y),
            _ => Err(CryptoError::EccPointAtInfinity),
        }
    }

    /// Check Y² = X³ + b·Z⁶. The point at infinity is on every curve.
    pub fn is_on_curve(&self) -> bool {
        let Some((x, y, z)) = self.parts() else {
            return true;
        };
        let rhs = x.square().mul(&x);
        let bz6 = match z {
            None => *self.curve.b(),
            Some(z) => {
                let z2 = z.square();
                let z6 = z2.square().mul(&z2);
                self.curve.b().mul(&z6)
            }
        };
        y.square() == rhs.add(&bz6)
    }
}

impl<F: FieldOps> PartialEq for Point<F> {
    /// Projective equality: X1·Z2² = X2·Z1² and Y1·Z2³ = Y2·Z1³.
    fn eq(&self, other: &Self) -> bool {
        if !Arc::ptr_eq(&self.curve, &other.curve) && self.curve != other.curve {
            return false;
        }
        match (self.parts(), other.parts()) {
            (None, None) => true,
            (None, Some(_)) | (Some(_), None) => false,
            (Some((x1, y1, z1)), Some((x2, y2, z2))) => {
                let (mut lx, mut ly) = (x1, y1);
                if let Some(z2) = z2 {
                    let z2_sq = z2.square();
                    lx = lx.mul(&z2_sq);
                    ly = ly.mul(&z2_sq).mul(&z2);
                }
                let (mut rx, mut ry) = (x2, y2);
                if let Some(z1) = z1 {
                    let z1_sq = z1.square();
                    rx = rx.mul(&z1_sq);
                    ry = ry.mul(&z1_sq).mul(&z1);
                }
                (lx.ct_eq(&rx) & ly.ct_eq(&ry)).into()
            }
        }
    }
}

impl<F: FieldOps> Eq for Point<F> {}

impl<F: FieldOps> fmt::Debug for Point<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("curve", &F::CURVE)
            .field("coords", &self.coords)
            .field("compressed", &self.compressed)
            .finish()
    }
}
