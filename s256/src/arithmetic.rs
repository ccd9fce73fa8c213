//! Prime field and elliptic curve group arithmetic.
//!
//! Arithmetic here is generic over the field modulus and the curve
//! coefficients `a` and `b`, with secp256k1 being one instance of it (see
//! [`crate::params`]). Everything is variable time.

mod field;
mod mul;
mod point;

pub use self::{
    field::FieldElement,
    mul::scalar_multiply,
    point::{Curve, Point},
};
