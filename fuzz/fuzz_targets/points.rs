#![no_main]
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use s256::{FieldElement, Point, scalar_multiply, secp256k1};

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }

    let params = secp256k1();
    let k1 = BigUint::from_bytes_be(&data[0..32]);
    let k2 = BigUint::from_bytes_be(&data[32..64]);

    // Scalars which are zero modulo n are rejected
    let (Ok(p1), Ok(p2)) = (
        scalar_multiply(params.generator(), &k1),
        scalar_multiply(params.generator(), &k2),
    ) else {
        return;
    };

    let sum = p1.add(&p2).unwrap();

    // Test that addition and doubling are consistent
    assert_eq!(p1.double().unwrap(), p1.add(&p1).unwrap());

    // Test that negation works correctly
    assert!(sum.add(&sum.neg()).unwrap().is_identity());

    // Test scalar multiplication distributive property
    assert_eq!(sum, params.generator().mul(&(&k1 + &k2)).unwrap());

    // Arbitrary coordinates either form a valid point or are rejected
    let p = params.field_modulus();
    if let (Ok(x), Ok(y)) = (
        FieldElement::reduce(&k1, p),
        FieldElement::reduce(&k2, p),
    ) {
        let _ = Point::new(x, y, params.curve());
    }
});
