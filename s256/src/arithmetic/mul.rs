//! Scalar multiplication.

use super::Point;
use crate::{Error, Result, Scalar, secp256k1};
use num_bigint::BigUint;
use num_traits::Zero;

impl Point {
    /// Returns `[k] self` using binary double-and-add.
    ///
    /// Bits of `k` are consumed least significant first. `k = 0` yields the
    /// identity. Not constant time.
    pub fn mul(&self, k: &BigUint) -> Result<Self> {
        let bits = k.bits();
        let bytes = k.to_bytes_le();

        let mut acc = Point::identity(self.curve());
        let mut current = self.clone();

        for i in 0..bits {
            let bit = (bytes[(i / 8) as usize] >> (i % 8)) & 1;

            if bit == 1 {
                acc = acc.add(&current)?;
            }

            // The final doubling would never be consumed
            if i + 1 < bits {
                current = current.add(&current)?;
            }
        }

        Ok(acc)
    }

    /// Returns `[k] self` for a scalar already reduced modulo the group order.
    pub fn mul_scalar(&self, k: &Scalar) -> Result<Self> {
        self.mul(k.as_uint())
    }
}

/// Multiply a point on secp256k1 by `k`.
///
/// `k` is reduced modulo the group order `n` before multiplying. Zero, and
/// multiples of `n`, are rejected with [`Error::InvalidScalar`] since they
/// map every point to the identity.
pub fn scalar_multiply(point: &Point, k: &BigUint) -> Result<Point> {
    let params = secp256k1();

    if point.curve() != params.curve() {
        return Err(Error::CurveMismatch);
    }

    if k.is_zero() {
        return Err(Error::InvalidScalar);
    }

    let k = Scalar::reduce(k);
    if k.is_zero() {
        return Err(Error::InvalidScalar);
    }

    point.mul_scalar(&k)
}

#[cfg(test)]
mod tests {
    use super::scalar_multiply;
    use crate::{Curve, Error, FieldElement, Point, Scalar, secp256k1};
    use hex_literal::hex;
    use num_bigint::BigUint;
    use proptest::prelude::*;

    fn fe223(num: u64) -> FieldElement {
        FieldElement::from_u64(num, &BigUint::from(223u8)).unwrap()
    }

    fn point223(x: u64, y: u64) -> Point {
        let curve = Curve::new(fe223(0), fe223(7)).unwrap();
        Point::new(fe223(x), fe223(y), &curve).unwrap()
    }

    fn affine(x: [u8; 32], y: [u8; 32]) -> (BigUint, BigUint) {
        (BigUint::from_bytes_be(&x), BigUint::from_bytes_be(&y))
    }

    fn coords(point: &Point) -> (BigUint, BigUint) {
        let (x, y) = point.coordinates().unwrap();
        (x.num().clone(), y.num().clone())
    }

    #[test]
    fn small_field_multiples() {
        let p = point223(47, 71);
        let vectors = [
            (2u64, Some((36, 111))),
            (4, Some((194, 51))),
            (8, Some((116, 55))),
            (21, None),
        ];

        for (k, expected) in vectors {
            let result = p.mul(&BigUint::from(k)).unwrap();
            match expected {
                Some((x, y)) => assert_eq!(result, point223(x, y)),
                None => assert!(result.is_identity()),
            }
        }
    }

    #[test]
    fn zero_is_identity_for_general_multiplication() {
        let p = point223(47, 71);
        assert!(p.mul(&BigUint::from(0u8)).unwrap().is_identity());
        assert_eq!(p.mul(&BigUint::from(1u8)).unwrap(), p);
    }

    #[test]
    fn repeated_addition_agrees() {
        let p = point223(47, 71);
        let mut sum = Point::identity(p.curve());

        for k in 0u64..=21 {
            assert_eq!(p.mul(&BigUint::from(k)).unwrap(), sum);
            sum = sum.add(&p).unwrap();
        }
    }

    #[test]
    fn generator_multiples() {
        let g = secp256k1().generator();

        let two_g = affine(
            hex!("C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5"),
            hex!("1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A"),
        );
        let three_g = affine(
            hex!("F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9"),
            hex!("388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672"),
        );

        assert_eq!(coords(&g.mul(&BigUint::from(2u8)).unwrap()), two_g);
        assert_eq!(coords(&g.mul(&BigUint::from(3u8)).unwrap()), three_g);
    }

    #[test]
    fn generator_double_matches_mul() {
        let g = secp256k1().generator();
        assert_eq!(g.add(g).unwrap(), g.mul(&BigUint::from(2u8)).unwrap());
    }

    #[test]
    fn order_annihilates_generator() {
        let params = secp256k1();
        let g = params.generator();

        assert!(g.mul(params.order()).unwrap().is_identity());

        let n_minus_one = params.order() - BigUint::from(1u8);
        assert_eq!(g.mul(&n_minus_one).unwrap(), g.neg());
    }

    #[test]
    fn scalar_multiply_reduces_modulo_order() {
        let params = secp256k1();
        let g = params.generator();

        let k = params.order() + BigUint::from(5u8);
        assert_eq!(
            scalar_multiply(g, &k).unwrap(),
            g.mul(&BigUint::from(5u8)).unwrap()
        );
    }

    #[test]
    fn scalar_multiply_rejects_zero() {
        let params = secp256k1();
        let g = params.generator();

        assert_eq!(
            scalar_multiply(g, &BigUint::from(0u8)),
            Err(Error::InvalidScalar)
        );
        assert_eq!(
            scalar_multiply(g, params.order()),
            Err(Error::InvalidScalar)
        );
    }

    #[test]
    fn scalar_multiply_rejects_foreign_curve() {
        assert_eq!(
            scalar_multiply(&point223(47, 71), &BigUint::from(2u8)),
            Err(Error::CurveMismatch)
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn mul_is_homomorphic(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let g = secp256k1().generator();
            let a = Scalar::reduce_bytes(&a);
            let b = Scalar::reduce_bytes(&b);

            let lhs = g.mul_scalar(&(&a + &b)).unwrap();
            let rhs = g.mul_scalar(&a).unwrap().add(&g.mul_scalar(&b).unwrap()).unwrap();
            prop_assert_eq!(lhs, rhs);
        }
    }
}
