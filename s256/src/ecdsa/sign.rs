//! ECDSA signer

use super::{Signature, check_digest, rfc6979::NonceGenerator};
use crate::{Error, Result, Scalar, SecretKey, secp256k1};
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use tracing::trace;

#[cfg(feature = "sha256")]
use super::hash_message;

impl SecretKey {
    /// Sign the digest `z`, deriving the nonce deterministically from the
    /// secret scalar and `z` as described in RFC 6979.
    ///
    /// Returns [`Error::OutOfRange`] if `z` is wider than 256 bits.
    pub fn sign_prehash(&self, z: &BigUint) -> Result<Signature> {
        check_digest(z)?;

        let d = self.scalar();
        let z = Scalar::reduce(z);
        let mut nonces = NonceGenerator::new(&d, &z);

        loop {
            let k = nonces.next_nonce();

            match try_sign(&d, &z, &k)? {
                Some(signature) => return Ok(signature),
                None => trace!("degenerate nonce, deriving the next one"),
            }
        }
    }

    /// Sign the digest `z` using a nonce drawn from `rng`.
    ///
    /// Fails with [`Error::EntropySourceFailure`] if `rng` does.
    pub fn sign_prehash_with_rng(
        &self,
        rng: &mut (impl CryptoRng + RngCore),
        z: &BigUint,
    ) -> Result<Signature> {
        check_digest(z)?;

        let d = self.scalar();
        let z = Scalar::reduce(z);

        loop {
            let k = Scalar::random_nonzero(rng)?;

            match try_sign(&d, &z, &k)? {
                Some(signature) => return Ok(signature),
                None => trace!("degenerate nonce, drawing another one"),
            }
        }
    }

    /// Sign the digest `z` with a caller-chosen nonce `k`.
    ///
    /// # ⚠️ Warning
    ///
    /// This is a low-level interface intended for reproducing test vectors.
    /// Reusing `k` for two different digests, or choosing it predictably,
    /// reveals the secret key.
    ///
    /// `k` must lie in `[1, n - 1]` and must not produce `r = 0` or `s = 0`,
    /// otherwise [`Error::InvalidScalar`] is returned.
    pub fn sign_prehash_with_k(&self, z: &BigUint, k: &BigUint) -> Result<Signature> {
        check_digest(z)?;

        if !secp256k1().is_valid_scalar(k) {
            return Err(Error::InvalidScalar);
        }

        let d = self.scalar();
        let z = Scalar::reduce(z);
        let k = Scalar::reduce(k);

        try_sign(&d, &z, &k)?.ok_or(Error::InvalidScalar)
    }

    /// Hash `msg` with SHA-256 and sign the digest.
    #[cfg(feature = "sha256")]
    #[cfg_attr(docsrs, doc(cfg(feature = "sha256")))]
    pub fn sign(&self, msg: &[u8]) -> Result<Signature> {
        self.sign_prehash(&hash_message(msg))
    }
}

/// Compute a low-S signature over `z` with the secret scalar `d` and the
/// nonce `k`.
///
/// Returns `None` if `k` yields `r = 0` or `s = 0`, in which case the caller
/// must pick another nonce.
#[allow(non_snake_case)]
fn try_sign(d: &Scalar, z: &Scalar, k: &Scalar) -> Result<Option<Signature>> {
    let params = secp256k1();

    // Compute 𝐑 = 𝑘×𝑮
    let R = params.generator().mul_scalar(k)?;

    // Lift x-coordinate of 𝐑 (element of base field) into the scalar field
    let r = match R.x() {
        Some(x) => Scalar::reduce(x.num()),
        None => return Ok(None),
    };

    if r.is_zero() {
        return Ok(None);
    }

    // Compute `s` as a signature over `r` and `z`.
    let k_inverse = k.invert()?;
    let s = &k_inverse * &(z + &(&r * d));

    if s.is_zero() {
        return Ok(None);
    }

    let s = if s.is_high() { -&s } else { s };
    Ok(Some(Signature::from_scalars(&r, &s)))
}
