//! Scalar field elements: integers modulo the secp256k1 group order `n`.

use crate::{Error, Result, secp256k1};
use core::ops::{Add, Mul, Neg};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::Zeroizing;

/// Integer in `[0, n)` where `n` is the order of the secp256k1 generator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scalar(BigUint);

impl Scalar {
    /// Create a scalar, which must be less than `n`.
    pub fn new(k: BigUint) -> Result<Self> {
        if k >= *secp256k1().order() {
            return Err(Error::OutOfRange);
        }

        Ok(Self(k))
    }

    /// Create a non-zero scalar, which must lie in `[1, n - 1]`.
    pub fn new_nonzero(k: BigUint) -> Result<Self> {
        if k.is_zero() {
            return Err(Error::OutOfRange);
        }

        Self::new(k)
    }

    /// Reduce an arbitrary integer modulo `n`.
    pub fn reduce(k: &BigUint) -> Self {
        Self(k % secp256k1().order())
    }

    /// Parse a big endian integer, which must be less than `n`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self> {
        Self::new(BigUint::from_bytes_be(bytes))
    }

    /// Interpret big endian bytes as an integer and reduce it modulo `n`.
    pub fn reduce_bytes(bytes: &[u8; 32]) -> Self {
        Self::reduce(&BigUint::from_bytes_be(bytes))
    }

    /// Draw a uniformly random scalar from `[1, n - 1]`.
    ///
    /// Candidates are sampled as 256-bit integers and rejected until one is
    /// in range. Since `n` is close to `2^256`, rejections are rare.
    pub fn random_nonzero(rng: &mut (impl CryptoRng + RngCore)) -> Result<Self> {
        let params = secp256k1();
        let mut bytes = Zeroizing::new([0u8; 32]);

        loop {
            rng.try_fill_bytes(&mut *bytes)
                .map_err(|_| Error::EntropySourceFailure)?;

            let candidate = BigUint::from_bytes_be(&*bytes);
            if params.is_valid_scalar(&candidate) {
                return Ok(Self(candidate));
            }

            trace!("random scalar candidate out of range, resampling");
        }
    }

    /// Serialize as a 32-byte big endian integer.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        to_be_bytes_32(&self.0)
    }

    /// Underlying integer.
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Is this scalar zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is this scalar greater than `n / 2`?
    pub fn is_high(&self) -> bool {
        self.0 > *secp256k1().half_order()
    }

    /// Returns `self^(n-2) mod n`, the multiplicative inverse of `self`.
    pub fn invert(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let order = secp256k1().order();
        let exp = order - BigUint::from(2u8);
        Ok(Self(self.0.modpow(&exp, order)))
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar((&self.0 + &other.0) % secp256k1().order())
    }
}

impl Mul<&Scalar> for &Scalar {
    type Output = Scalar;

    fn mul(self, other: &Scalar) -> Scalar {
        Scalar((&self.0 * &other.0) % secp256k1().order())
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        if self.is_zero() {
            self.clone()
        } else {
            Scalar(secp256k1().order() - &self.0)
        }
    }
}

/// Encode an integer below `2^256` as 32 big endian bytes.
pub(crate) fn to_be_bytes_32(k: &BigUint) -> [u8; 32] {
    let bytes = k.to_bytes_be();
    debug_assert!(bytes.len() <= 32);

    let mut out = [0u8; 32];
    out[32 - bytes.len()..].copy_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::Scalar;
    use crate::{Error, secp256k1};
    use num_bigint::BigUint;
    use num_traits::One;
    use proptest::prelude::*;
    use rand_core::OsRng;

    fn order_minus_one() -> BigUint {
        secp256k1().order() - BigUint::one()
    }

    #[test]
    fn range() {
        assert!(Scalar::new(order_minus_one()).is_ok());
        assert_eq!(
            Scalar::new(secp256k1().order().clone()),
            Err(Error::OutOfRange)
        );
        assert_eq!(
            Scalar::new_nonzero(BigUint::from(0u8)),
            Err(Error::OutOfRange)
        );
        assert!(Scalar::from_be_bytes(&[0xff; 32]).is_err());
        assert!(!Scalar::reduce_bytes(&[0xff; 32]).is_zero());
    }

    #[test]
    fn is_high() {
        let half = secp256k1().half_order().clone();

        assert!(!Scalar::new(BigUint::from(0u8)).unwrap().is_high());
        assert!(!Scalar::new(half.clone()).unwrap().is_high());
        assert!(Scalar::new(half + BigUint::one()).unwrap().is_high());
        assert!(Scalar::new(order_minus_one()).unwrap().is_high());
    }

    #[test]
    fn negate() {
        let zero = Scalar::new(BigUint::from(0u8)).unwrap();
        let one = Scalar::new(BigUint::one()).unwrap();

        assert_eq!(-&zero, zero);
        assert_eq!((-&one).as_uint(), &order_minus_one());
        assert_eq!(&one + &(-&one), zero);
    }

    #[test]
    fn invert() {
        let zero = Scalar::new(BigUint::from(0u8)).unwrap();
        assert_eq!(zero.invert(), Err(Error::DivisionByZero));

        let one = Scalar::new(BigUint::one()).unwrap();
        assert_eq!(one.invert().unwrap(), one);
    }

    #[test]
    fn bytes_are_left_padded() {
        let one = Scalar::new(BigUint::one()).unwrap();
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(one.to_be_bytes(), expected);
        assert_eq!(Scalar::from_be_bytes(&expected).unwrap(), one);
    }

    #[test]
    fn random_nonzero_in_range() {
        for _ in 0..16 {
            let k = Scalar::random_nonzero(&mut OsRng).unwrap();
            assert!(secp256k1().is_valid_scalar(k.as_uint()));
        }
    }

    proptest! {
        #[test]
        fn fuzzy_invert(bytes in any::<[u8; 32]>()) {
            let a = Scalar::reduce_bytes(&bytes);
            prop_assume!(!a.is_zero());
            let one = Scalar::new(BigUint::one()).unwrap();
            prop_assert_eq!(&a * &a.invert().unwrap(), one);
        }

        #[test]
        fn fuzzy_mul(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let a_bi = BigUint::from_bytes_be(&a);
            let b_bi = BigUint::from_bytes_be(&b);
            let expected = (&a_bi * &b_bi) % secp256k1().order();
            let res = &Scalar::reduce(&a_bi) * &Scalar::reduce(&b_bi);
            prop_assert_eq!(res.as_uint(), &expected);
        }
    }
}
