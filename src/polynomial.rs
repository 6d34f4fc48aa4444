use std::fmt;

use k256::Scalar;
use zeroize::Zeroize;

use crate::error::{Result, VssError};

/// Secret-sharing polynomial over the secp256k1 scalar field.
///
/// ```text
/// f(x) = a_0 + a_1 x + ... + a_t x^t
/// ```
///
/// The constant term `a_0` is the secret. A polynomial always holds exactly
/// `degree + 1` coefficients and is never empty. Only its evaluations are
/// meant to leave the dealer, so it has no encoding and its coefficients are
/// wiped when it is dropped.
pub struct Polynomial {
    coefficients: Vec<Scalar>,
}

impl Polynomial {
    /// Creates a polynomial with the given coefficients, lowest degree first.
    pub fn with_coefficients(coefficients: Vec<Scalar>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(VssError::InvalidInput(
                "polynomial needs at least one coefficient".to_string(),
            ));
        }

        Ok(Self { coefficients })
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    pub fn coefficients(&self) -> &[Scalar] {
        &self.coefficients
    }

    /// Returns the constant term, i.e. the shared secret.
    pub fn secret(&self) -> &Scalar {
        &self.coefficients[0]
    }

    /// Evaluates the polynomial at `x`.
    pub fn evaluate(&self, x: &Scalar) -> Scalar {
        let degree = self.degree();
        horner(&self.coefficients[..degree], &self.coefficients[degree], x)
    }
}

impl Drop for Polynomial {
    fn drop(&mut self) {
        self.coefficients.zeroize();
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}

/// Evaluates the polynomial with the given coefficients (lowest degree first)
/// at `x` using Horner's method.
pub fn evaluate_polynomial(coefficients: &[Scalar], x: &Scalar) -> Result<Scalar> {
    let (highest, rest) = coefficients.split_last().ok_or_else(|| {
        VssError::InvalidInput("cannot evaluate an empty polynomial".to_string())
    })?;

    Ok(horner(rest, highest, x))
}

// a_t x^t + ... + a_0 = (...((a_t x + a_{t-1}) x + a_{t-2}) ...) x + a_0
fn horner(lower: &[Scalar], highest: &Scalar, x: &Scalar) -> Scalar {
    let mut result = *highest;
    for coefficient in lower.iter().rev() {
        result = result * x + coefficient;
    }
    result
}
