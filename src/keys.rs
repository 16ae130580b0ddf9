use crate::gf::{DivisionByZero, FiniteField};
use crate::polynomial::Polynomial;
use crate::random::{random_weighted_vector, ImpossibleHammingWeight};
use getset::{CopyGetters, Getters};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("input vector has length {actual}, expected {expected}")]
pub struct IncorrectInputVectorLength {
    pub expected: usize,
    pub actual: usize,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum KeyGenError {
    #[error(transparent)]
    ImpossibleWeight(#[from] ImpossibleHammingWeight),
    #[error(transparent)]
    Arithmetic(#[from] DivisionByZero),
    #[error("inversion sanity check failed: h1 * h1^-1 != 1 mod x^r - 1")]
    InverterBug,
}

/// Public encoding context: the single non-identity generator block
/// g = -(h0 * h1^-1) mod (x^r - 1) as a length-r coefficient vector. The
/// full generator matrix G = [I | rot(g)^T] is never materialised.
#[derive(Clone, CopyGetters, Debug, Deserialize, Eq, Getters, PartialEq, Serialize)]
pub struct PublicKey<F: FiniteField> {
    #[getset(get = "pub")]
    generator_block: Vec<F>,
    #[getset(get_copy = "pub")]
    block_length: usize,
}

impl<F: FiniteField> PublicKey<F> {
    pub fn new(
        generator_block: Vec<F>,
        block_length: usize,
    ) -> Result<Self, IncorrectInputVectorLength> {
        if generator_block.len() != block_length {
            return Err(IncorrectInputVectorLength {
                expected: block_length,
                actual: generator_block.len(),
            });
        }
        Ok(Self {
            generator_block,
            block_length,
        })
    }
}

/// Private decoding context: the two weight-w parity-check rows h0, h1 as
/// length-r coefficient vectors. The parity-check matrix
/// H = [rot(h0) | rot(h1)] is never materialised.
#[derive(Clone, CopyGetters, Debug, Deserialize, Eq, Getters, PartialEq, Serialize)]
pub struct PrivateKey<F: FiniteField> {
    #[getset(get = "pub")]
    h0: Vec<F>,
    #[getset(get = "pub")]
    h1: Vec<F>,
    #[getset(get_copy = "pub")]
    block_length: usize,
    #[getset(get_copy = "pub")]
    block_weight: usize,
}

impl<F: FiniteField> PrivateKey<F> {
    pub fn new(
        h0: Vec<F>,
        h1: Vec<F>,
        block_length: usize,
        block_weight: usize,
    ) -> Result<Self, IncorrectInputVectorLength> {
        for block in [&h0, &h1] {
            if block.len() != block_length {
                return Err(IncorrectInputVectorLength {
                    expected: block_length,
                    actual: block.len(),
                });
            }
        }
        Ok(Self {
            h0,
            h1,
            block_length,
            block_weight,
        })
    }
}

/// The ring modulus x^r - 1; over a characteristic-2 field both the constant
/// and the leading coefficient are 1.
pub fn ring_modulus<F: FiniteField>(block_length: usize) -> Polynomial<F> {
    let mut modulus = Polynomial::zero();
    modulus.set_coefficient(0, F::one());
    modulus.set_coefficient(block_length, F::one());
    modulus
}

/// Generates a key pair for block length r and block weight w.
///
/// h0 is drawn once; h1 is redrawn until it is invertible in
/// F[x]/(x^r - 1). Candidates with coefficient sum zero are skipped without
/// attempting an inversion: h1(1) = 0 makes x - 1 a common factor with the
/// modulus. The loop terminates with probability 1 because the density of
/// invertible ring elements is bounded below.
pub fn generate_key_pair<F, R>(
    block_length: usize,
    block_weight: usize,
    rng: &mut R,
) -> Result<(PublicKey<F>, PrivateKey<F>), KeyGenError>
where
    F: FiniteField,
    R: Rng + ?Sized,
{
    debug_assert!(block_weight > 0, "weight-0 blocks are never invertible");
    let modulus = ring_modulus::<F>(block_length);
    let h0 = random_weighted_vector::<F, R>(block_length, block_weight, rng)?;
    let h0_poly = Polynomial::from_coefficients(h0.clone());
    loop {
        let h1 = random_weighted_vector::<F, R>(block_length, block_weight, rng)?;
        if field_sum(&h1).is_zero() {
            continue;
        }
        let h1_poly = Polynomial::from_coefficients(h1.clone());
        let Some(inverse) = h1_poly.invert(&modulus)? else {
            continue;
        };
        let (_, check) = (&h1_poly * &inverse).div_rem(&modulus)?;
        if !check.is_one() {
            return Err(KeyGenError::InverterBug);
        }
        // g = -(h0 * h1^-1) mod f; negation is the identity in
        // characteristic 2.
        let (_, generator) = (&h0_poly * &inverse).div_rem(&modulus)?;
        let public_key = PublicKey {
            generator_block: generator.to_coefficient_vector(block_length),
            block_length,
        };
        let private_key = PrivateKey {
            h0,
            h1,
            block_length,
            block_weight,
        };
        return Ok((public_key, private_key));
    }
}

fn field_sum<F: FiniteField>(values: &[F]) -> F {
    values.iter().fold(F::zero(), |acc, &value| acc + value)
}
