//! secp256k1 domain parameters.
//!
//! Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain Parameters:
//!
//! <https://www.secg.org/sec2-v2.pdf>

use crate::{Curve, FieldElement, Point};
use hex_literal::hex;
use num_bigint::BigUint;
use num_traits::Zero;
use once_cell::sync::Lazy;

/// Field modulus `p = 2^256 - 2^32 - 977`.
const FIELD_MODULUS: [u8; 32] =
    hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F");

/// Order of the generator `n`.
const ORDER: [u8; 32] = hex!("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141");

/// Generator `x`-coordinate.
const GENERATOR_X: [u8; 32] =
    hex!("79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798");

/// Generator `y`-coordinate.
const GENERATOR_Y: [u8; 32] =
    hex!("483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8");

/// Coefficient `a` in the curve equation.
const EQUATION_A: u8 = 0;

/// Coefficient `b` in the curve equation.
const EQUATION_B: u8 = 7;

static SECP256K1: Lazy<DomainParams> = Lazy::new(DomainParams::secp256k1);

/// Returns the secp256k1 domain parameters.
///
/// They are computed once on first use and shared by every caller.
pub fn secp256k1() -> &'static DomainParams {
    &SECP256K1
}

/// Domain parameters of a prime order short Weierstrass curve.
#[derive(Debug)]
pub struct DomainParams {
    curve: Curve,
    generator: Point,
    order: BigUint,
    half_order: BigUint,
}

impl DomainParams {
    /// secp256k1: `y² = x³ + 7` over a ~256-bit prime field.
    fn secp256k1() -> Self {
        let p = BigUint::from_bytes_be(&FIELD_MODULUS);
        let a = FieldElement::new_unchecked(BigUint::from(EQUATION_A), p.clone());
        let b = FieldElement::new_unchecked(BigUint::from(EQUATION_B), p.clone());
        let curve = Curve::new_unchecked(a, b);

        let x = FieldElement::new_unchecked(BigUint::from_bytes_be(&GENERATOR_X), p.clone());
        let y = FieldElement::new_unchecked(BigUint::from_bytes_be(&GENERATOR_Y), p);
        let generator = Point::new_unchecked(x, y, curve.clone());

        let order = BigUint::from_bytes_be(&ORDER);
        let half_order = &order >> 1;

        Self {
            curve,
            generator,
            order,
            half_order,
        }
    }

    /// Curve equation.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Base field modulus `p`.
    pub fn field_modulus(&self) -> &BigUint {
        self.curve.modulus()
    }

    /// Generator point `G`.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Order `n` of the generator.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// `floor(n / 2)`: the largest `s` value of a low-S signature.
    pub fn half_order(&self) -> &BigUint {
        &self.half_order
    }

    /// Is `k` in `[1, n - 1]`?
    pub fn is_valid_scalar(&self, k: &BigUint) -> bool {
        !k.is_zero() && *k < self.order
    }
}
