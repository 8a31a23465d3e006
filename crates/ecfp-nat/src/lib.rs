#![forbid(unsafe_code)]
#![doc = "Fixed-width word-array arithmetic and modular inversion for prime-field ECC."]

pub mod modular;
pub mod nat;
mod rand;

pub use modular::invert;
pub use nat::{DoubleWord, Word, WORD_BITS};
pub use rand::random;
