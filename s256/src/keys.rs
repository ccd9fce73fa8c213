//! secp256k1 key pairs.

use crate::{Error, FieldElement, Point, Result, Scalar, scalar::to_be_bytes_32, secp256k1};
use core::fmt;
use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

/// secp256k1 secret key: a scalar `d` in `[1, n - 1]`.
///
/// The scalar is held as its 32-byte big endian encoding, which is zeroized
/// on drop. `Debug` output is redacted.
#[derive(Clone)]
pub struct SecretKey {
    bytes: [u8; 32],
}

impl SecretKey {
    /// Generate a random secret key from `rng`.
    pub fn random(rng: &mut (impl CryptoRng + RngCore)) -> Result<Self> {
        let scalar = Scalar::random_nonzero(rng)?;
        Ok(Self::from_nonzero_scalar(&scalar))
    }

    /// Generate a random secret key from the operating system's entropy source.
    #[cfg(feature = "getrandom")]
    #[cfg_attr(docsrs, doc(cfg(feature = "getrandom")))]
    pub fn generate() -> Result<Self> {
        Self::random(&mut OsRng)
    }

    /// Initialize a secret key from a scalar, which must lie in `[1, n - 1]`.
    pub fn from_scalar(d: &BigUint) -> Result<Self> {
        if !secp256k1().is_valid_scalar(d) {
            return Err(Error::InvalidScalar);
        }

        Ok(Self {
            bytes: to_be_bytes_32(d),
        })
    }

    /// Initialize a secret key from a 32-byte big endian scalar.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self> {
        Self::from_scalar(&BigUint::from_bytes_be(bytes))
    }

    /// Serialize the secret scalar as 32 big endian bytes.
    pub fn to_be_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.bytes)
    }

    /// Derive the public key `P = d·G`.
    pub fn public_key(&self) -> PublicKey {
        let params = secp256k1();
        let d = self.scalar();

        // `d` is in `[1, n - 1]` so `d·G` is a finite point on secp256k1
        params
            .generator()
            .mul_scalar(&d)
            .and_then(PublicKey::from_point)
            .expect("generator multiple is a finite point on the curve")
    }

    /// Secret scalar `d`.
    pub(crate) fn scalar(&self) -> Scalar {
        Scalar::reduce_bytes(&self.bytes)
    }

    fn from_nonzero_scalar(scalar: &Scalar) -> Self {
        Self {
            bytes: scalar.to_be_bytes(),
        }
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey([REDACTED])")
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// secp256k1 public key: a finite point `P = d·G`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    point: Point,
    x: BigUint,
    y: BigUint,
}

impl PublicKey {
    /// Initialize a public key from a point on secp256k1.
    ///
    /// The identity is rejected with [`Error::InvalidScalar`], since it is
    /// the public key of the zero scalar.
    pub fn from_point(point: Point) -> Result<Self> {
        if point.curve() != secp256k1().curve() {
            return Err(Error::CurveMismatch);
        }

        let (x, y) = match point.coordinates() {
            Some((x, y)) => (x.num().clone(), y.num().clone()),
            None => return Err(Error::InvalidScalar),
        };

        Ok(Self { point, x, y })
    }

    /// Initialize a public key from affine coordinates, checking that they
    /// are on the curve.
    pub fn from_affine_coordinates(x: &BigUint, y: &BigUint) -> Result<Self> {
        let params = secp256k1();
        let p = params.field_modulus();
        let x = FieldElement::new(x.clone(), p)?;
        let y = FieldElement::new(y.clone(), p)?;
        Self::from_point(Point::new(x, y, params.curve())?)
    }

    /// Borrow the underlying curve point.
    pub fn as_point(&self) -> &Point {
        &self.point
    }

    /// Affine `x`-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Affine `y`-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

impl From<PublicKey> for Point {
    fn from(public_key: PublicKey) -> Point {
        public_key.point
    }
}

impl From<&SecretKey> for PublicKey {
    fn from(secret_key: &SecretKey) -> PublicKey {
        secret_key.public_key()
    }
}

/// Generate a key pair using `rng` as the entropy source.
pub fn generate_keypair_with_rng(
    rng: &mut (impl CryptoRng + RngCore),
) -> Result<(SecretKey, PublicKey)> {
    let secret_key = SecretKey::random(rng)?;
    let public_key = secret_key.public_key();
    Ok((secret_key, public_key))
}

/// Generate a key pair using the operating system's entropy source.
#[cfg(feature = "getrandom")]
#[cfg_attr(docsrs, doc(cfg(feature = "getrandom")))]
pub fn generate_keypair() -> Result<(SecretKey, PublicKey)> {
    generate_keypair_with_rng(&mut OsRng)
}
