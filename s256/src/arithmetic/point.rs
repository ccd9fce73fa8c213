//! Affine points on short Weierstrass curves.

use super::FieldElement;
use crate::{Error, Result};
use core::fmt;
use num_bigint::BigUint;

/// Short Weierstrass curve equation `y² = x³ + a·x + b` over a prime field.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Curve {
    /// Coefficient `a` in the curve equation.
    a: FieldElement,

    /// Coefficient `b` in the curve equation.
    b: FieldElement,
}

impl Curve {
    /// Create a curve from its coefficients, which must share a field.
    pub fn new(a: FieldElement, b: FieldElement) -> Result<Self> {
        if !a.same_field(&b) {
            return Err(Error::FieldMismatch);
        }

        Ok(Self { a, b })
    }

    /// Construct without checking that `a` and `b` share a field.
    pub(crate) fn new_unchecked(a: FieldElement, b: FieldElement) -> Self {
        debug_assert!(a.same_field(&b));
        Self { a, b }
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Modulus of the base field.
    pub fn modulus(&self) -> &BigUint {
        self.a.prime()
    }

    /// Does `(x, y)` satisfy the curve equation?
    pub fn contains(&self, x: &FieldElement, y: &FieldElement) -> Result<bool> {
        let lhs = y.square();
        let rhs = x.square().mul(x)?.add(&self.a.mul(x)?)?.add(&self.b)?;
        Ok(lhs == rhs)
    }
}

/// Internal representation of a [`Point`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Repr {
    /// Point at infinity, the group identity.
    Identity,

    /// Finite point with affine coordinates.
    Affine { x: FieldElement, y: FieldElement },
}

/// Point on a short Weierstrass curve in affine coordinates.
///
/// Every point carries the [`Curve`] it was constructed on. Finite points
/// are always on their curve: the only public constructor checks the
/// equation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    curve: Curve,
    repr: Repr,
}

impl Point {
    /// Create a finite point, checking that it lies on `curve`.
    pub fn new(x: FieldElement, y: FieldElement, curve: &Curve) -> Result<Self> {
        if !x.same_field(curve.a()) || !y.same_field(curve.a()) {
            return Err(Error::FieldMismatch);
        }

        if !curve.contains(&x, &y)? {
            return Err(Error::PointNotOnCurve);
        }

        Ok(Self::new_unchecked(x, y, curve.clone()))
    }

    /// Point at infinity on `curve`.
    pub fn identity(curve: &Curve) -> Self {
        Self {
            curve: curve.clone(),
            repr: Repr::Identity,
        }
    }

    /// Construct a finite point without checking the curve equation.
    ///
    /// Only used for results of the group law and for fixed constants.
    pub(crate) fn new_unchecked(x: FieldElement, y: FieldElement, curve: Curve) -> Self {
        Self {
            curve,
            repr: Repr::Affine { x, y },
        }
    }

    /// Curve this point belongs to.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self.repr, Repr::Identity)
    }

    /// Affine `x`-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&FieldElement> {
        self.coordinates().map(|(x, _)| x)
    }

    /// Affine `y`-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&FieldElement> {
        self.coordinates().map(|(_, y)| y)
    }

    /// Affine coordinates, or `None` for the identity.
    pub fn coordinates(&self) -> Option<(&FieldElement, &FieldElement)> {
        match &self.repr {
            Repr::Identity => None,
            Repr::Affine { x, y } => Some((x, y)),
        }
    }

    /// Returns `self + other` using the chord-and-tangent group law.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.curve != other.curve {
            return Err(Error::CurveMismatch);
        }

        match (&self.repr, &other.repr) {
            (Repr::Identity, _) => Ok(other.clone()),
            (_, Repr::Identity) => Ok(self.clone()),

            // Vertical line through `P` and `-P`
            (Repr::Affine { x: x1, y: y1 }, Repr::Affine { x: x2, y: y2 })
                if x1 == x2 && y1 != y2 =>
            {
                Ok(self.to_identity())
            }

            // Chord through two distinct points
            (Repr::Affine { x: x1, y: y1 }, Repr::Affine { x: x2, y: y2 }) if x1 != x2 => {
                let s = y2.sub(y1)?.div(&x2.sub(x1)?)?;
                let x3 = s.square().sub(x1)?.sub(x2)?;
                let y3 = s.mul(&x1.sub(&x3)?)?.sub(y1)?;
                Ok(self.with_coordinates(x3, y3))
            }

            // `P == Q` from here on; the tangent at a point with `y = 0` is vertical
            (Repr::Affine { y, .. }, Repr::Affine { .. }) if y.is_zero() => Ok(self.to_identity()),

            // Tangent at `P`
            (Repr::Affine { x, y }, Repr::Affine { .. }) => {
                let s = x
                    .square()
                    .mul_single(3)
                    .add(self.curve.a())?
                    .div(&y.mul_single(2))?;
                let x3 = s.square().sub(&x.mul_single(2))?;
                let y3 = s.mul(&x.sub(&x3)?)?.sub(y)?;
                Ok(self.with_coordinates(x3, y3))
            }
        }
    }

    /// Returns `self + self`.
    pub fn double(&self) -> Result<Self> {
        self.add(self)
    }

    /// Returns `-self`.
    pub fn neg(&self) -> Self {
        match &self.repr {
            Repr::Identity => self.clone(),
            Repr::Affine { x, y } => self.with_coordinates(x.clone(), y.neg()),
        }
    }

    /// Returns `self - other`.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.add(&other.neg())
    }

    fn to_identity(&self) -> Self {
        Self::identity(&self.curve)
    }

    fn with_coordinates(&self, x: FieldElement, y: FieldElement) -> Self {
        Self::new_unchecked(x, y, self.curve.clone())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Identity => write!(f, "Point(infinity)"),
            Repr::Affine { x, y } => write!(
                f,
                "Point({},{})_{}_{} FieldElement({})",
                x.num(),
                y.num(),
                self.curve.a.num(),
                self.curve.b.num(),
                self.curve.modulus()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Curve, Point};
    use crate::{Error, FieldElement, Scalar, secp256k1};
    use num_bigint::BigUint;
    use proptest::prelude::*;

    const PRIME: u64 = 223;

    fn fe(num: u64) -> FieldElement {
        FieldElement::from_u64(num, &BigUint::from(PRIME)).unwrap()
    }

    fn curve() -> Curve {
        Curve::new(fe(0), fe(7)).unwrap()
    }

    fn point(x: u64, y: u64) -> Point {
        Point::new(fe(x), fe(y), &curve()).unwrap()
    }

    #[test]
    fn on_curve() {
        for (x, y) in [(192, 105), (17, 56), (1, 193)] {
            assert!(Point::new(fe(x), fe(y), &curve()).is_ok());
        }

        for (x, y) in [(200, 119), (42, 99)] {
            assert_eq!(
                Point::new(fe(x), fe(y), &curve()),
                Err(Error::PointNotOnCurve)
            );
        }
    }

    #[test]
    fn coordinates_from_another_field() {
        let x = FieldElement::from_u64(192, &BigUint::from(227u8)).unwrap();
        assert_eq!(
            Point::new(x, fe(105), &curve()),
            Err(Error::FieldMismatch)
        );
        assert_eq!(
            Curve::new(fe(0), FieldElement::from_u64(7, &BigUint::from(227u8)).unwrap()),
            Err(Error::FieldMismatch)
        );
    }

    #[test]
    fn chord_addition() {
        let vectors = [
            ((170, 142), (60, 139), (220, 181)),
            ((47, 71), (17, 56), (215, 68)),
            ((143, 98), (76, 66), (47, 71)),
        ];

        for ((x1, y1), (x2, y2), (x3, y3)) in vectors {
            assert_eq!(point(x1, y1).add(&point(x2, y2)).unwrap(), point(x3, y3));
        }
    }

    #[test]
    fn doubling() {
        assert_eq!(point(192, 105).double().unwrap(), point(49, 71));
        assert_eq!(point(143, 98).double().unwrap(), point(64, 168));
        assert_eq!(point(47, 71).double().unwrap(), point(36, 111));
    }

    #[test]
    fn identity_is_neutral() {
        let p = point(47, 71);
        let identity = Point::identity(&curve());

        assert_eq!(p.add(&identity).unwrap(), p);
        assert_eq!(identity.add(&p).unwrap(), p);
        assert!(identity.add(&identity).unwrap().is_identity());
    }

    #[test]
    fn additive_inverse() {
        let p = point(47, 71);
        assert!(p.add(&p.neg()).unwrap().is_identity());
        assert!(p.sub(&p).unwrap().is_identity());
        assert_eq!(p.neg().neg(), p);
    }

    #[test]
    fn vertical_tangent() {
        // y² = x³ + 7 over F_223 has the 2-torsion point (x, 0) with x³ = -7
        let x = (0..PRIME)
            .find(|x| (x * x % PRIME) * x % PRIME == PRIME - 7)
            .map(fe);

        if let Some(x) = x {
            let p = Point::new(x, fe(0), &curve()).unwrap();
            assert!(p.double().unwrap().is_identity());
        }
    }

    #[test]
    fn addition_commutes() {
        let p = point(170, 142);
        let q = point(60, 139);
        assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
    }

    #[test]
    fn curve_mismatch() {
        let other = Curve::new(fe(0), fe(5)).unwrap();
        let p = point(47, 71);
        let q = Point::identity(&other);
        assert_eq!(p.add(&q), Err(Error::CurveMismatch));
    }

    #[test]
    fn generator_double_matches_tangent_formula() {
        let params = secp256k1();
        let g = params.generator();
        let (x, y) = g.coordinates().unwrap();

        // s = 3x² / 2y, x3 = s² - 2x, y3 = s(x - x3) - y
        let s = x
            .square()
            .mul_single(3)
            .div(&y.mul_single(2))
            .unwrap();
        let x3 = s.square().sub(&x.mul_single(2)).unwrap();
        let y3 = s.mul(&x.sub(&x3).unwrap()).unwrap().sub(y).unwrap();

        let doubled = g.add(g).unwrap();
        assert_eq!(doubled.x().unwrap(), &x3);
        assert_eq!(doubled.y().unwrap(), &y3);
        assert_eq!(doubled, g.double().unwrap());
    }

    #[test]
    fn display() {
        assert_eq!(
            point(47, 71).to_string(),
            "Point(47,71)_0_7 FieldElement(223)"
        );
        assert_eq!(Point::identity(&curve()).to_string(), "Point(infinity)");
    }

    fn multiple_of_generator(k: &[u8; 32]) -> Point {
        secp256k1()
            .generator()
            .mul_scalar(&Scalar::reduce_bytes(k))
            .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn add_commutes_on_secp256k1(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
            let p = multiple_of_generator(&a);
            let q = multiple_of_generator(&b);
            prop_assert_eq!(p.add(&q).unwrap(), q.add(&p).unwrap());
        }

        #[test]
        fn identity_is_neutral_on_secp256k1(a in any::<[u8; 32]>()) {
            let p = multiple_of_generator(&a);
            let identity = Point::identity(secp256k1().curve());
            prop_assert_eq!(&p.add(&identity).unwrap(), &p);
            prop_assert_eq!(&identity.add(&p).unwrap(), &p);
        }

        #[test]
        fn add_is_associative_on_secp256k1(
            a in any::<[u8; 32]>(),
            b in any::<[u8; 32]>(),
            c in any::<[u8; 32]>(),
        ) {
            let p = multiple_of_generator(&a);
            let q = multiple_of_generator(&b);
            let r = multiple_of_generator(&c);
            prop_assert_eq!(
                p.add(&q).unwrap().add(&r).unwrap(),
                p.add(&q.add(&r).unwrap()).unwrap()
            );
        }
    }
}
