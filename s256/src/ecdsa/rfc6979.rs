//! Deterministic ephemeral scalar derivation as described in [RFC 6979 § 3.2].
//!
//! The ephemeral scalar `k` is derived from the secret scalar and the message
//! digest with HMAC-DRBG instantiated over HMAC-SHA-256, so signing the same
//! digest twice yields the same signature and distinct digests never share a
//! nonce.
//!
//! [RFC 6979 § 3.2]: https://datatracker.ietf.org/doc/html/rfc6979#section-3.2

use crate::{Scalar, secp256k1};
use num_bigint::BigUint;
use rfc6979::HmacDrbg;
use sha2::Sha256;
use zeroize::Zeroizing;

/// HMAC-DRBG state producing successive candidate nonces.
pub(crate) struct NonceGenerator {
    drbg: HmacDrbg<Sha256>,
}

impl NonceGenerator {
    /// Instantiate from the secret scalar `x` and the reduced digest `h1`
    /// (steps b. through g.).
    pub(crate) fn new(x: &Scalar, h1: &Scalar) -> Self {
        let x = Zeroizing::new(x.to_be_bytes());
        let h1 = h1.to_be_bytes();

        Self {
            drbg: HmacDrbg::new(&*x, &h1, &[]),
        }
    }

    /// Produce the next nonce in `[1, n - 1]` (step h.).
    ///
    /// Every call advances the generator, so a nonce rejected by the signer
    /// (`r = 0` or `s = 0`) is never handed out again.
    pub(crate) fn next_nonce(&mut self) -> Scalar {
        let params = secp256k1();
        let mut bytes = Zeroizing::new([0u8; 32]);

        loop {
            self.drbg.fill_bytes(&mut *bytes);
            let candidate = BigUint::from_bytes_be(&*bytes);

            if params.is_valid_scalar(&candidate) {
                return Scalar::reduce(&candidate);
            }
        }
    }
}
