//! Prime field elements.
//!
//! A [`FieldElement`] carries the modulus of the field it belongs to, which
//! lets the same type serve both secp256k1's ~256-bit base field and the
//! small textbook fields used in tests. Operations combining elements of two
//! different fields fail with [`Error::FieldMismatch`].

use crate::{Error, Result};
use core::fmt;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// An element of the prime field `F_p`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldElement {
    /// Canonical representative in `[0, p)`
    num: BigUint,

    /// Field modulus `p`
    prime: BigUint,
}

impl FieldElement {
    /// Create a field element from `num`, which must lie in `[0, prime)`.
    pub fn new(num: BigUint, prime: &BigUint) -> Result<Self> {
        check_modulus(prime)?;

        if num >= *prime {
            return Err(Error::OutOfRange);
        }

        Ok(Self::new_unchecked(num, prime.clone()))
    }

    /// Create a field element from a small integer.
    pub fn from_u64(num: u64, prime: &BigUint) -> Result<Self> {
        Self::new(BigUint::from(num), prime)
    }

    /// Create a field element from a signed integer, which must lie in
    /// `[0, prime)`. Negative values are rejected rather than wrapped.
    pub fn from_signed(num: &BigInt, prime: &BigUint) -> Result<Self> {
        match num.to_biguint() {
            Some(num) => Self::new(num, prime),
            None => Err(Error::OutOfRange),
        }
    }

    /// Reduce an arbitrary integer into the field.
    pub fn reduce(num: &BigUint, prime: &BigUint) -> Result<Self> {
        check_modulus(prime)?;
        Ok(Self::new_unchecked(num % prime, prime.clone()))
    }

    /// Additive identity of the field.
    pub fn zero(prime: &BigUint) -> Result<Self> {
        check_modulus(prime)?;
        Ok(Self::new_unchecked(BigUint::zero(), prime.clone()))
    }

    /// Multiplicative identity of the field.
    pub fn one(prime: &BigUint) -> Result<Self> {
        check_modulus(prime)?;
        Ok(Self::new_unchecked(BigUint::one(), prime.clone()))
    }

    /// Construct without checking `num < prime`.
    ///
    /// Only used for constants which are known to be canonical.
    pub(crate) fn new_unchecked(num: BigUint, prime: BigUint) -> Self {
        debug_assert!(num < prime);
        Self { num, prime }
    }

    /// Canonical integer representative in `[0, p)`.
    pub fn num(&self) -> &BigUint {
        &self.num
    }

    /// Modulus of the field this element belongs to.
    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    /// Is this element the additive identity?
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// Do `self` and `other` belong to the same field?
    pub fn same_field(&self, other: &Self) -> bool {
        self.prime == other.prime
    }

    /// Returns `self + rhs mod p`.
    pub fn add(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.with_num((&self.num + &rhs.num) % &self.prime))
    }

    /// Returns `self - rhs mod p`.
    pub fn sub(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;

        let num = if self.num >= rhs.num {
            &self.num - &rhs.num
        } else {
            &self.prime - (&rhs.num - &self.num)
        };

        Ok(self.with_num(num))
    }

    /// Returns `self * rhs mod p`.
    pub fn mul(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        Ok(self.with_num((&self.num * &rhs.num) % &self.prime))
    }

    /// Multiplies by a small integer constant.
    pub fn mul_single(&self, rhs: u64) -> Self {
        self.with_num((&self.num * BigUint::from(rhs)) % &self.prime)
    }

    /// Returns `self * self mod p`.
    pub fn square(&self) -> Self {
        self.with_num((&self.num * &self.num) % &self.prime)
    }

    /// Returns `-self mod p`.
    pub fn neg(&self) -> Self {
        if self.num.is_zero() {
            self.clone()
        } else {
            self.with_num(&self.prime - &self.num)
        }
    }

    /// Returns `self^exp mod p`.
    ///
    /// The exponent is first reduced modulo `p - 1` (Fermat's little theorem),
    /// so arbitrarily large exponents are well-defined.
    pub fn pow(&self, exp: &BigUint) -> Self {
        if self.num.is_zero() {
            // 0^0 = 1, 0^e = 0 otherwise. Reducing `e` mod `p - 1` would turn
            // `0^(p-1)` into `0^0`, so zero is handled before the reduction.
            return if exp.is_zero() {
                self.with_num(BigUint::one() % &self.prime)
            } else {
                self.clone()
            };
        }

        let order = &self.prime - BigUint::one();
        let exp = exp % &order;
        self.with_num(self.num.modpow(&exp, &self.prime))
    }

    /// Returns `self^exp mod p` for a possibly negative exponent.
    ///
    /// Negative exponents are mapped to their residue modulo `p - 1`, which
    /// for non-zero elements yields the corresponding power of the inverse.
    pub fn pow_signed(&self, exp: &BigInt) -> Result<Self> {
        if let Some(exp) = exp.to_biguint() {
            return Ok(self.pow(&exp));
        }

        if self.num.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let order = BigInt::from(&self.prime - BigUint::one());
        let residue = ((exp % &order) + &order) % &order;

        match residue.to_biguint() {
            Some(exp) => Ok(self.pow(&exp)),
            None => Err(Error::OutOfRange),
        }
    }

    /// Returns `self^(p-2) mod p`, the multiplicative inverse of `self`.
    pub fn invert(&self) -> Result<Self> {
        if self.num.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let exp = &self.prime - BigUint::from(2u8);
        Ok(self.with_num(self.num.modpow(&exp, &self.prime)))
    }

    /// Returns `self / rhs mod p`, computed as `self * rhs^(p-2)`.
    pub fn div(&self, rhs: &Self) -> Result<Self> {
        self.check_same_field(rhs)?;
        self.mul(&rhs.invert()?)
    }

    fn with_num(&self, num: BigUint) -> Self {
        Self::new_unchecked(num, self.prime.clone())
    }

    fn check_same_field(&self, rhs: &Self) -> Result<()> {
        if self.same_field(rhs) {
            Ok(())
        } else {
            Err(Error::FieldMismatch)
        }
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement_{}({})", self.prime, self.num)
    }
}

/// A field needs at least the two elements `0` and `1`.
fn check_modulus(prime: &BigUint) -> Result<()> {
    if *prime < BigUint::from(2u8) {
        Err(Error::OutOfRange)
    } else {
        Ok(())
    }
}
