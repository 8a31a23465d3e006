#![no_main]
use ecfp_curve::{Curve, Point, Secp192k1Field};
use libfuzzer_sys::fuzz_target;

fn multiply(g: &Point<Secp192k1Field>, k: &[u8]) -> Point<Secp192k1Field> {
    let mut acc = g.curve().infinity();
    for byte in k {
        for i in (0..8).rev() {
            acc = acc.twice();
            if (byte >> i) & 1 == 1 {
                acc = acc.add(g);
            }
        }
    }
    acc
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 || data.len() > 48 {
        return;
    }
    let Ok(curve) = Curve::secp192k1() else {
        return;
    };
    let g = curve.generator();
    let (a, b) = data.split_at(data.len() / 2);
    let p = multiply(&g, a);
    let q = multiply(&g, b);

    let sum = p.add(&q);
    assert!(sum.is_on_curve());
    assert_eq!(sum, q.add(&p));
    assert_eq!(sum.subtract(&q), p);
    assert_eq!(p.twice_plus(&q), p.twice().add(&q));
});
