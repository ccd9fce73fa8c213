//! ECDSA verifier

use super::{Signature, check_digest};
use crate::{Error, PublicKey, Result, Scalar, secp256k1};
use num_bigint::BigUint;
use tracing::debug;

#[cfg(feature = "sha256")]
use super::hash_message;

impl PublicKey {
    /// Verify `signature` over the digest `z`, reporting why it was rejected.
    ///
    /// - [`Error::OutOfRange`]: `z` is wider than 256 bits, or `r` or `s` is
    ///   not in `[1, n - 1]`.
    /// - [`Error::InvalidSignature`]: the signature is well formed but does
    ///   not match.
    #[allow(non_snake_case)]
    pub fn try_verify_prehash(&self, z: &BigUint, signature: &Signature) -> Result<()> {
        check_digest(z)?;

        let params = secp256k1();

        if !params.is_valid_scalar(signature.r()) || !params.is_valid_scalar(signature.s()) {
            return Err(Error::OutOfRange);
        }

        let z = Scalar::reduce(z);
        let r = Scalar::reduce(signature.r());
        let s = Scalar::reduce(signature.s());

        let s_inv = s.invert()?;
        let u1 = &z * &s_inv;
        let u2 = &r * &s_inv;

        // Compute 𝐑' = u₁×𝑮 + u₂×𝐏
        let R = params
            .generator()
            .mul_scalar(&u1)?
            .add(&self.as_point().mul_scalar(&u2)?)?;

        match R.x() {
            Some(x) if Scalar::reduce(x.num()) == r => Ok(()),
            _ => Err(Error::InvalidSignature),
        }
    }

    /// Verify `signature` over the digest `z`.
    pub fn verify_prehash(&self, z: &BigUint, signature: &Signature) -> bool {
        match self.try_verify_prehash(z, signature) {
            Ok(()) => true,
            Err(err) => {
                debug!(%err, "signature rejected");
                false
            }
        }
    }

    /// Hash `msg` with SHA-256 and verify `signature` over the digest.
    #[cfg(feature = "sha256")]
    #[cfg_attr(docsrs, doc(cfg(feature = "sha256")))]
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> bool {
        self.verify_prehash(&hash_message(msg), signature)
    }
}
