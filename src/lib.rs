//! Polynomial toolkit for Shamir verifiable secret sharing over the secp256k1
//! scalar field: random sharing polynomials, Horner evaluation and Lagrange
//! coefficients for recovering the constant term.

pub mod bytes;
pub mod error;
pub mod generator;
pub mod lagrange;
pub mod polynomial;
pub mod scalar;
pub mod sss;

pub use bytes::*;
pub use error::*;
pub use generator::*;
pub use lagrange::*;
pub use polynomial::*;
pub use scalar::*;
pub use sss::*;
