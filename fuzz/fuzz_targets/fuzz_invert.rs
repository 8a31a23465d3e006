#![no_main]
use ecfp_curve::{FieldElement, Secp256k1Field};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 32 {
        return;
    }
    let Ok(x) = FieldElement::<Secp256k1Field>::from_bytes_be(data) else {
        return;
    };
    match x.invert() {
        Ok(inv) => assert!(x.mul(&inv).is_one()),
        Err(_) => assert!(x.is_zero()),
    }
});
