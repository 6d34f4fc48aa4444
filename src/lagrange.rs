// Lagrange coefficients for reconstructing f(0).
use std::collections::HashSet;

use k256::Scalar;
use log::trace;

use crate::{
    error::{Result, VssError},
    scalar::{scalar_from_index, ParticipantIndex},
};

/// Returns the Lagrange basis coefficient of participant `i` over `set`,
/// evaluated at zero:
/// ```text
/// L_i(0) = \prod_{j \in set, j ≠ i} (0 - x_j) / (x_i - x_j)
/// ```
/// Multiplying every share `f(j)` of the set by its coefficient and summing
/// the products yields `f(0)`.
///
/// `i` is usually a member of `set` but does not have to be. Members are
/// visited in slice order. A set that lists an index more than once is
/// degenerate, as is any pair whose difference vanishes modulo `N`; both fail
/// with [`VssError::DegenerateSet`].
pub fn lagrange_coefficient(i: ParticipantIndex, set: &[ParticipantIndex]) -> Result<Scalar> {
    let mut seen = HashSet::with_capacity(set.len());
    let x_i = scalar_from_index(i);
    let mut coefficient = Scalar::ONE;

    for &j in set {
        if !seen.insert(j) {
            return Err(VssError::DegenerateSet(j));
        }
        if j == i {
            continue;
        }

        let x_j = scalar_from_index(j);
        let numerator = -x_j;
        let denominator = x_i - x_j;
        let denominator_inv =
            Option::<Scalar>::from(denominator.invert()).ok_or(VssError::DegenerateSet(j))?;
        coefficient = coefficient * numerator * denominator_inv;
    }
    trace!("computed lagrange coefficient for index {i} over {} indices", set.len());

    Ok(coefficient)
}

/// Returns the coefficient of every member of `set`, in set order.
pub fn lagrange_coefficients(set: &[ParticipantIndex]) -> Result<Vec<Scalar>> {
    set.iter().map(|&i| lagrange_coefficient(i, set)).collect()
}
