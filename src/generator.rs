use k256::{elliptic_curve::PrimeField, FieldBytes, Scalar};
use log::{debug, trace};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::{error::Result, polynomial::Polynomial};

/// Draws a scalar uniformly from `[0, N)`.
///
/// Candidates are 32 big-endian bytes read from `rng`; those not below the
/// group order are rejected and redrawn, so the result carries no modulo
/// bias. A failing `rng` is reported, never replaced.
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
    let mut bytes = FieldBytes::default();
    let mut rejected = 0u32;

    let scalar = loop {
        rng.try_fill_bytes(&mut bytes)?;
        if let Some(scalar) = Option::<Scalar>::from(Scalar::from_repr(bytes)) {
            break scalar;
        }
        rejected += 1;
        trace!("rejected scalar candidate above group order ({rejected} so far)");
    };
    bytes.as_mut_slice().zeroize();

    Ok(scalar)
}

/// Creates a polynomial of the given degree with all `degree + 1`
/// coefficients, the secret included, drawn uniformly at random.
pub fn generate_polynomial<R: RngCore + CryptoRng>(degree: usize, rng: &mut R) -> Result<Polynomial> {
    let coefficients = (0..=degree)
        .map(|_| random_scalar(rng))
        .collect::<Result<Vec<_>>>()?;
    debug!("generated random polynomial of degree {degree}");

    Polynomial::with_coefficients(coefficients)
}

/// Creates a random polynomial of the given degree whose constant term is
/// `secret`.
pub fn generate_polynomial_with_constant<R: RngCore + CryptoRng>(
    degree: usize,
    secret: &Scalar,
    rng: &mut R,
) -> Result<Polynomial> {
    let mut coefficients = Vec::with_capacity(degree + 1);
    coefficients.push(*secret);
    for _ in 0..degree {
        coefficients.push(random_scalar(rng)?);
    }
    debug!("generated polynomial of degree {degree} for a given secret");

    Polynomial::with_coefficients(coefficients)
}

impl Polynomial {
    /// Creates a random polynomial of the given degree from the operating
    /// system's entropy source.
    pub fn random(degree: usize) -> Result<Self> {
        generate_polynomial(degree, &mut OsRng)
    }
}
