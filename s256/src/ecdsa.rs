//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! Signing and verification operate on a message digest `z`, an integer of
//! at most 256 bits which the caller computes with the hash function of its
//! choice. [`hash_message`] is provided for callers who want SHA-256.
//!
//! Signatures are always produced in "low S" form and nonces are derived
//! deterministically as described in RFC 6979, unless a caller explicitly
//! supplies its own entropy.
//!
//! ## Usage
//!
//! ```
//! use s256::{ecdsa, generate_keypair};
//! use num_bigint::BigUint;
//!
//! let (secret_key, public_key) = generate_keypair()?;
//! let z = BigUint::from(0x1234_5678u32);
//!
//! let signature = ecdsa::sign(&z, &secret_key)?;
//! assert!(ecdsa::verify(&z, &public_key, &signature));
//! # Ok::<(), s256::Error>(())
//! ```

mod rfc6979;
mod sign;
mod verify;

use crate::{Error, PublicKey, Result, Scalar, SecretKey, scalar::to_be_bytes_32, secp256k1};
use core::fmt;
use num_bigint::BigUint;

#[cfg(feature = "sha256")]
use sha2::{Digest, Sha256};

/// Size of a fixed-size signature encoding: `r || s`.
pub const SIGNATURE_SIZE: usize = 64;

/// ECDSA/secp256k1 signature `(r, s)`.
///
/// Signatures parsed from external input may hold arbitrary 256-bit values;
/// verification checks that `r` and `s` lie in `[1, n - 1]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its components, each of which must fit in
    /// 256 bits.
    pub fn new(r: BigUint, s: BigUint) -> Result<Self> {
        if r.bits() > 256 || s.bits() > 256 {
            return Err(Error::OutOfRange);
        }

        Ok(Self { r, s })
    }

    /// Create a signature from two scalars.
    pub fn from_scalars(r: &Scalar, s: &Scalar) -> Self {
        Self {
            r: r.as_uint().clone(),
            s: s.as_uint().clone(),
        }
    }

    /// Parse the fixed-size `r || s` encoding (big endian, 32 bytes each).
    pub fn from_bytes(bytes: &[u8; SIGNATURE_SIZE]) -> Self {
        let (r, s) = bytes.split_at(32);
        Self {
            r: BigUint::from_bytes_be(r),
            s: BigUint::from_bytes_be(s),
        }
    }

    /// Serialize as the fixed-size `r || s` encoding.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        bytes[..32].copy_from_slice(&to_be_bytes_32(&self.r));
        bytes[32..].copy_from_slice(&to_be_bytes_32(&self.s));
        bytes
    }

    /// `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Is `s` at most `n / 2`?
    pub fn is_low_s(&self) -> bool {
        self.s <= *secp256k1().half_order()
    }

    /// Normalize signature into "low S" form as described in
    /// [BIP 0062: Dealing with Malleability][1].
    ///
    /// Both `(r, s)` and `(r, n - s)` verify under the same key, so only the
    /// form with the smaller `s` is produced.
    ///
    /// [1]: https://github.com/bitcoin/bips/blob/master/bip-0062.mediawiki
    pub fn normalize_s(&self) -> Result<Self> {
        let order = secp256k1().order();

        if self.s.bits() == 0 || self.s >= *order {
            return Err(Error::OutOfRange);
        }

        if self.is_low_s() {
            Ok(self.clone())
        } else {
            Ok(Self {
                r: self.r.clone(),
                s: order - &self.s,
            })
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({:x},{:x})", self.r, self.s)
    }
}

/// Sign the digest `z` with `secret_key` using a deterministic nonce.
pub fn sign(z: &BigUint, secret_key: &SecretKey) -> Result<Signature> {
    secret_key.sign_prehash(z)
}

/// Verify a signature over the digest `z`.
///
/// Malformed signatures and signatures which do not match are both reported
/// as `false`; see [`PublicKey::try_verify_prehash`] for the reason.
pub fn verify(z: &BigUint, public_key: &PublicKey, signature: &Signature) -> bool {
    public_key.verify_prehash(z, signature)
}

/// Hash a message with SHA-256, returning the digest as a big endian integer.
#[cfg(feature = "sha256")]
#[cfg_attr(docsrs, doc(cfg(feature = "sha256")))]
pub fn hash_message(msg: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&Sha256::digest(msg))
}

/// Digests are integers of at most 256 bits.
fn check_digest(z: &BigUint) -> Result<()> {
    if z.bits() > 256 {
        Err(Error::OutOfRange)
    } else {
        Ok(())
    }
}
