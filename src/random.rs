//! Seeded, reproducible random number generation and field-vector samplers.

// The PRNG is fast and non-cryptographic, suitable for research runs where
// reproducibility of the results is desired. Callers thread an explicit Rng
// handle through the key-generation and sampling APIs; seeding that handle
// from a `Seed` makes runs repeatable.

use crate::gf::FiniteField;
use hex::{FromHex, ToHex};
use rand::{rngs::OsRng, seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("requested Hamming weight {weight} exceeds vector length {length}")]
pub struct ImpossibleHammingWeight {
    pub weight: usize,
    pub length: usize,
}

type SeedInner = [u8; 32];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Seed(#[serde(with = "hex::serde")] SeedInner);

impl Seed {
    pub fn new(arr: SeedInner) -> Self {
        Self(arr)
    }

    pub fn from_entropy() -> Self {
        let mut buf = SeedInner::default();
        OsRng.fill_bytes(&mut buf);
        Seed(buf)
    }
}

impl From<Seed> for SeedInner {
    #[inline]
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl FromHex for Seed {
    type Error = SeedFromHexError;
    fn from_hex<T: AsRef<[u8]>>(hex: T) -> Result<Self, Self::Error> {
        Ok(Self(SeedInner::from_hex(hex)?))
    }
}

impl TryFrom<String> for Seed {
    type Error = SeedFromHexError;
    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Self::from_hex(hex)
    }
}

impl ToHex for Seed {
    fn encode_hex<T: std::iter::FromIterator<char>>(&self) -> T {
        self.0.encode_hex()
    }

    fn encode_hex_upper<T: std::iter::FromIterator<char>>(&self) -> T {
        self.0.encode_hex_upper()
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.encode_hex::<String>())
    }
}

#[derive(Debug, Error)]
#[error("PRNG seed must be given by 256-bit hex string")]
pub struct SeedFromHexError(#[from] pub hex::FromHexError);

pub fn get_rng_from_seed(seed: Seed) -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::from_seed(seed.into())
}

/// Length-`length` vector with every entry drawn uniformly from the field.
pub fn random_vector<F, R>(length: usize, rng: &mut R) -> Vec<F>
where
    F: FiniteField,
    R: Rng + ?Sized,
{
    (0..length).map(|_| F::random(rng)).collect()
}

/// Length-`length` vector with exactly `weight` non-zero entries, each drawn
/// uniformly from the non-zero field elements. The non-zero draws fill the
/// first `weight` positions and the whole vector is then shuffled in place
/// (Fisher-Yates).
pub fn random_weighted_vector<F, R>(
    length: usize,
    weight: usize,
    rng: &mut R,
) -> Result<Vec<F>, ImpossibleHammingWeight>
where
    F: FiniteField,
    R: Rng + ?Sized,
{
    if weight > length {
        return Err(ImpossibleHammingWeight { weight, length });
    }
    let mut out = Vec::with_capacity(length);
    for _ in 0..weight {
        out.push(F::random_nonzero(rng));
    }
    out.resize(length, F::zero());
    out.shuffle(rng);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gf::Gf4;

    const TRIALS: usize = 100;

    fn hamming_weight(vector: &[Gf4]) -> usize {
        vector.iter().filter(|value| !value.is_zero()).count()
    }

    #[test]
    fn weighted_vector_has_exact_weight() {
        let mut rng = rand::thread_rng();
        for _ in 0..TRIALS {
            let v: Vec<Gf4> = random_weighted_vector(40, 11, &mut rng).unwrap();
            assert_eq!(v.len(), 40);
            assert_eq!(hamming_weight(&v), 11);
        }
    }

    #[test]
    fn weighted_vector_rejects_impossible_weight() {
        let mut rng = rand::thread_rng();
        let result = random_weighted_vector::<Gf4, _>(5, 6, &mut rng);
        assert_eq!(
            result,
            Err(ImpossibleHammingWeight {
                weight: 6,
                length: 5
            })
        );
    }

    #[test]
    fn random_vector_length() {
        let mut rng = rand::thread_rng();
        let v: Vec<Gf4> = random_vector(17, &mut rng);
        assert_eq!(v.len(), 17);
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let seed = Seed::new([7u8; 32]);
        let mut rng_a = get_rng_from_seed(seed);
        let mut rng_b = get_rng_from_seed(seed);
        let v_a: Vec<Gf4> = random_weighted_vector(50, 9, &mut rng_a).unwrap();
        let v_b: Vec<Gf4> = random_weighted_vector(50, 9, &mut rng_b).unwrap();
        assert_eq!(v_a, v_b);
    }

    #[test]
    fn seed_hex_round_trip() {
        let seed = Seed::from_entropy();
        let hex = seed.to_string();
        assert_eq!(hex.len(), 64);
        assert_eq!(Seed::try_from(hex).unwrap(), seed);
        assert!(Seed::try_from("not hex".to_string()).is_err());
    }
}
