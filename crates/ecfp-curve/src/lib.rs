#![forbid(unsafe_code)]
#![doc = "Jacobian group law for a = 0 short-Weierstrass curves over fast-reduction prime fields."]

pub mod curves;
pub mod field;
pub mod point;

pub use curves::Curve;
pub use field::{FieldElement, FieldOps};
pub use point::{Coordinates, Point};

#[cfg(feature = "secp192k1")]
pub use field::secp192k1::Secp192k1Field;
#[cfg(feature = "secp256k1")]
pub use field::secp256k1::Secp256k1Field;
