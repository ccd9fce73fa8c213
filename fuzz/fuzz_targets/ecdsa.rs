#![no_main]
// Verification must never panic on attacker-controlled signatures, digests or keys
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};
use s256::{PublicKey, SecretKey, Signature, ecdsa};

fuzz_target!(|data: &[u8]| {
    if data.len() < 192 {
        return;
    }

    let z = BigUint::from_bytes_be(&data[0..32]);
    let signature = Signature::from_bytes(&data[32..96].try_into().unwrap());

    // Arbitrary coordinates are almost never on the curve
    if let Ok(public_key) = PublicKey::from_affine_coordinates(
        &BigUint::from_bytes_be(&data[96..128]),
        &BigUint::from_bytes_be(&data[128..160]),
    ) {
        let _ = ecdsa::verify(&z, &public_key, &signature);
    }

    let mut rng = ChaChaRng::from_seed(data[160..192].try_into().unwrap());
    let secret_key = SecretKey::random(&mut rng).unwrap();
    let public_key = secret_key.public_key();

    // Arbitrary signatures must be rejected without panicking
    let _ = public_key.try_verify_prehash(&z, &signature);

    // Genuine signatures must verify
    let genuine = ecdsa::sign(&z, &secret_key).unwrap();
    assert!(genuine.is_low_s());
    assert!(ecdsa::verify(&z, &public_key, &genuine));
});
