//! secp256k1 elliptic curve
//!
//! Prime field arithmetic, the affine group law of short Weierstrass curves,
//! double-and-add scalar multiplication, and ECDSA over secp256k1.
//!
//! Arithmetic is performed on arbitrary precision integers and is **not**
//! constant time.
//!
//! ## Usage
//!
//! ```
//! use s256::{generate_keypair, scalar_multiply, secp256k1};
//! use num_bigint::BigUint;
//!
//! let (secret_key, public_key) = generate_keypair()?;
//!
//! let signature = secret_key.sign(b"example message")?;
//! assert!(public_key.verify(b"example message", &signature));
//!
//! let two_g = scalar_multiply(secp256k1().generator(), &BigUint::from(2u8))?;
//! assert_eq!(two_g, secp256k1().generator().double()?);
//! # Ok::<(), s256::Error>(())
//! ```
//!
//! ## Minimum Supported Rust Version
//!
//! Rust **1.85** or higher.
//!
//! Minimum supported Rust version can be changed in the future, but it will be
//! done with a minor version bump.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo_small.png")]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

pub mod arithmetic;
pub mod ecdsa;
pub mod params;

mod error;
mod keys;
mod scalar;

pub use crate::{
    arithmetic::{Curve, FieldElement, Point, scalar_multiply},
    ecdsa::{Signature, sign, verify},
    error::{Error, Result},
    keys::{PublicKey, SecretKey, generate_keypair_with_rng},
    params::{DomainParams, secp256k1},
    scalar::Scalar,
};
pub use num_bigint;
pub use rand_core;

#[cfg(feature = "getrandom")]
pub use crate::keys::generate_keypair;
