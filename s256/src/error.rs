//! Error types.

use core::fmt;

/// Error type.
///
/// Every kind is a recoverable condition reported to the caller. None of the
/// messages carry secret material.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Value is not in the interval required by the operation.
    OutOfRange,

    /// Operands belong to fields with different moduli.
    FieldMismatch,

    /// Points are defined over different curve equations.
    CurveMismatch,

    /// Coordinates do not satisfy the curve equation.
    PointNotOnCurve,

    /// Attempted to invert the additive identity.
    DivisionByZero,

    /// Scalar is zero or otherwise unusable for the requested operation.
    InvalidScalar,

    /// The secure randomness source failed to produce bytes.
    EntropySourceFailure,

    /// Signature is well-formed but does not match the digest and public key.
    InvalidSignature,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::OutOfRange => "value out of range",
            Error::FieldMismatch => "field elements belong to different fields",
            Error::CurveMismatch => "points belong to different curves",
            Error::PointNotOnCurve => "point is not on the curve",
            Error::DivisionByZero => "division by zero",
            Error::InvalidScalar => "invalid scalar",
            Error::EntropySourceFailure => "entropy source failure",
            Error::InvalidSignature => "signature verification failed",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
