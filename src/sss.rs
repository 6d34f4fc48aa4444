use k256::Scalar;
use log::debug;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, VssError},
    generator::{generate_polynomial, generate_polynomial_with_constant},
    lagrange::lagrange_coefficient,
    polynomial::Polynomial,
    scalar::{scalar_from_index, ParticipantIndex},
};

/// Parameters of a `threshold`-of-`share_count` sharing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ShamirSecretSharing {
    pub threshold: usize,   //t
    pub share_count: usize, //n
}

/// Evaluation of the sharing polynomial handed to participant `index`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Share {
    pub index: ParticipantIndex,
    pub value: Scalar,
}

impl ShamirSecretSharing {
    pub fn new(threshold: usize, share_count: usize) -> Result<Self> {
        let params = Self {
            threshold,
            share_count,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parses parameters such as `{"threshold": 3, "share_count": 5}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks `1 <= threshold <= share_count`, with every share index fitting
    /// a participant index.
    pub fn validate(&self) -> Result<()> {
        let fits = ParticipantIndex::try_from(self.share_count).is_ok();
        if self.threshold == 0 || self.threshold > self.share_count || !fits {
            return Err(VssError::InvalidParameters {
                threshold: self.threshold,
                share_count: self.share_count,
            });
        }
        Ok(())
    }

    /// Degree of the sharing polynomial.
    pub fn degree(&self) -> usize {
        self.threshold - 1
    }

    /// Splits `secret` into `share_count` shares at indices `1..=share_count`.
    pub fn split<R: RngCore + CryptoRng>(&self, secret: &Scalar, rng: &mut R) -> Result<Vec<Share>> {
        self.validate()?;
        let polynomial = generate_polynomial_with_constant(self.degree(), secret, rng)?;
        Ok(self.shares(&polynomial))
    }

    /// Shares a fresh random secret, returning it together with the shares.
    pub fn deal<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<(Scalar, Vec<Share>)> {
        self.validate()?;
        let polynomial = generate_polynomial(self.degree(), rng)?;
        Ok((*polynomial.secret(), self.shares(&polynomial)))
    }

    /// Recovers the secret from at least `threshold` shares with distinct
    /// indices.
    pub fn reconstruct(&self, shares: &[Share]) -> Result<Scalar> {
        self.validate()?;
        if shares.len() < self.threshold {
            return Err(VssError::InsufficientShares {
                required: self.threshold,
                provided: shares.len(),
            });
        }

        let indices = shares.iter().map(|s| s.index).collect::<Vec<_>>();
        if indices.contains(&0) {
            return Err(VssError::InvalidInput(
                "share index 0 is reserved for the secret".to_string(),
            ));
        }

        let mut secret = Scalar::ZERO;
        for share in shares {
            secret += share.value * lagrange_coefficient(share.index, &indices)?;
        }
        debug!("reconstructed secret from {} shares", shares.len());

        Ok(secret)
    }

    fn shares(&self, polynomial: &Polynomial) -> Vec<Share> {
        let shares = (1..=self.share_count as ParticipantIndex)
            .map(|index| Share {
                index,
                value: polynomial.evaluate(&scalar_from_index(index)),
            })
            .collect::<Vec<_>>();
        debug!(
            "computed {} shares with threshold {}",
            shares.len(),
            self.threshold
        );
        shares
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use super::*;

    #[test]
    fn test_parameters() {
        assert!(ShamirSecretSharing::new(1, 1).is_ok());
        assert!(ShamirSecretSharing::new(3, 5).is_ok());
        assert!(matches!(
            ShamirSecretSharing::new(0, 5),
            Err(VssError::InvalidParameters { .. })
        ));
        assert!(matches!(
            ShamirSecretSharing::new(6, 5),
            Err(VssError::InvalidParameters {
                threshold: 6,
                share_count: 5
            })
        ));
    }

    #[test]
    fn test_from_json() {
        let params = ShamirSecretSharing::from_json(r#"{"threshold": 3, "share_count": 5}"#).unwrap();
        assert_eq!(params, ShamirSecretSharing::new(3, 5).unwrap());

        assert!(matches!(
            ShamirSecretSharing::from_json(r#"{"threshold": 3}"#),
            Err(VssError::Config(_))
        ));
        assert!(matches!(
            ShamirSecretSharing::from_json(r#"{"threshold": 4, "share_count": 2}"#),
            Err(VssError::InvalidParameters { .. })
        ));
    }

    #[test]
    fn test_split_and_reconstruct() {
        let mut rng = StdRng::from_seed([1u8; 32]);
        let secret = Scalar::from(0xdead_beef_u64);

        for (t, n) in [(1, 1), (1, 4), (2, 3), (3, 5), (5, 7)] {
            let params = ShamirSecretSharing::new(t, n).unwrap();
            let mut shares = params.split(&secret, &mut rng).unwrap();
            assert_eq!(shares.len(), n);
            assert!(shares.iter().zip(1..).all(|(s, i)| s.index == i));

            // Any t shares, in any order.
            for _ in 0..5 {
                shares.shuffle(&mut rng);
                assert_eq!(params.reconstruct(&shares[..t]).unwrap(), secret);
            }

            // All n shares work as well.
            assert_eq!(params.reconstruct(&shares).unwrap(), secret);
        }
    }

    #[test]
    fn test_deal() {
        let mut rng = StdRng::from_seed([2u8; 32]);
        let params = ShamirSecretSharing::new(3, 5).unwrap();
        let (secret, shares) = params.deal(&mut rng).unwrap();
        assert_eq!(params.reconstruct(&shares[2..]).unwrap(), secret);
    }

    #[test]
    fn test_reconstruct_rejects() {
        let mut rng = StdRng::from_seed([3u8; 32]);
        let params = ShamirSecretSharing::new(3, 5).unwrap();
        let (_, shares) = params.deal(&mut rng).unwrap();

        assert!(matches!(
            params.reconstruct(&shares[..2]),
            Err(VssError::InsufficientShares {
                required: 3,
                provided: 2
            })
        ));

        let duplicated = [shares[0], shares[1], shares[1]];
        assert!(matches!(
            params.reconstruct(&duplicated),
            Err(VssError::DegenerateSet(2))
        ));

        let mut zero = [shares[0], shares[1], shares[2]];
        zero[0].index = 0;
        assert!(matches!(
            params.reconstruct(&zero),
            Err(VssError::InvalidInput(_))
        ));
    }
}
