use k256::{elliptic_curve::PrimeField, FieldBytes, Scalar};
use lazy_static::lazy_static;
use num_bigint::BigUint;

use crate::error::{Result, VssError};

/// 1-based identifier of a participant, also its evaluation point.
///
/// Index 0 is the position of the secret and is never handed to a participant.
/// Indices are embedded into the field as 32-bit values, so anything wider is
/// rejected by [`participant_index`] instead of being truncated.
pub type ParticipantIndex = u32;

/// Size in bytes of an encoded scalar.
pub const SCALAR_BYTES: usize = 32;

lazy_static! {
    /// Order `N` of the secp256k1 group, i.e. the modulus of the scalar field.
    pub static ref CURVE_ORDER: BigUint = scalar_to_biguint(&-Scalar::ONE) + 1u32;
}

/// Embeds a participant index into the scalar field.
pub fn scalar_from_index(index: ParticipantIndex) -> Scalar {
    Scalar::from(index)
}

/// Converts a signed index, as stored by callers, into a participant index.
pub fn participant_index(index: i64) -> Result<ParticipantIndex> {
    match u32::try_from(index) {
        Ok(0) => Err(VssError::InvalidInput(
            "participant index 0 is reserved for the secret".to_string(),
        )),
        Ok(index) => Ok(index),
        Err(_) => Err(VssError::InvalidInput(format!(
            "participant index {index} is outside 1..={}",
            u32::MAX
        ))),
    }
}

/// Returns the 32-byte big-endian encoding of a scalar.
pub fn scalar_to_bytes(scalar: &Scalar) -> [u8; SCALAR_BYTES] {
    let mut bytes = [0u8; SCALAR_BYTES];
    bytes.copy_from_slice(&scalar.to_bytes());
    bytes
}

/// Decodes a 32-byte big-endian scalar, rejecting values not below `N`.
pub fn scalar_from_bytes(bytes: &[u8]) -> Result<Scalar> {
    if bytes.len() != SCALAR_BYTES {
        return Err(VssError::InvalidInput(format!(
            "scalar encoding must be {SCALAR_BYTES} bytes, got {}",
            bytes.len()
        )));
    }

    let repr = FieldBytes::clone_from_slice(bytes);
    Option::from(Scalar::from_repr(repr))
        .ok_or_else(|| VssError::InvalidInput("scalar is not reduced modulo N".to_string()))
}

pub fn scalar_to_biguint(scalar: &Scalar) -> BigUint {
    BigUint::from_bytes_be(&scalar.to_bytes())
}

pub fn scalar_from_biguint(value: &BigUint) -> Result<Scalar> {
    if value >= &*CURVE_ORDER {
        return Err(VssError::InvalidInput(
            "integer is not reduced modulo N".to_string(),
        ));
    }

    let be = value.to_bytes_be();
    let mut bytes = [0u8; SCALAR_BYTES];
    bytes[SCALAR_BYTES - be.len()..].copy_from_slice(&be);
    scalar_from_bytes(&bytes)
}
