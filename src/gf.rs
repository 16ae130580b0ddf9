use rand::Rng;
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign},
};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("division by zero")]
pub struct DivisionByZero;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("value {value} is out of range for a field of order {order}")]
pub struct IncorrectValueRange {
    pub value: usize,
    pub order: usize,
}

/// Finite field of characteristic 2, the coefficient domain for every layer
/// above: polynomials, keys, codewords, and the symbol-flipping decoder.
///
/// The enumeration order of `nonzero_elements` must be deterministic across
/// calls; the decoder scans candidate flip values in that order and its
/// results depend on it.
pub trait FiniteField:
    Copy
    + fmt::Debug
    + fmt::Display
    + Default
    + PartialEq
    + Eq
    + Add<Output = Self>
    + AddAssign
    + Sub<Output = Self>
    + SubAssign
    + Mul<Output = Self>
    + MulAssign
{
    /// Number of elements in the field.
    const ORDER: usize;

    fn from_value(value: usize) -> Result<Self, IncorrectValueRange>;

    fn zero() -> Self;

    fn one() -> Self;

    fn is_zero(&self) -> bool;

    fn is_one(&self) -> bool;

    fn checked_div(self, divisor: Self) -> Result<Self, DivisionByZero>;

    /// All non-zero field elements, in a fixed order.
    fn nonzero_elements() -> Vec<Self>;

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self;

    #[inline]
    fn max_value() -> usize {
        Self::ORDER - 1
    }
}

const GF4_MULTIPLICATION: [[u8; 4]; 4] = [
    [0, 0, 0, 0],
    [0, 1, 2, 3],
    [0, 2, 3, 1],
    [0, 3, 1, 2],
];

// Indexed by [dividend][divisor - 1]; division by zero is rejected before the lookup.
const GF4_DIVISION: [[u8; 3]; 4] = [
    [0, 0, 0],
    [1, 3, 2],
    [2, 1, 3],
    [3, 2, 1],
];

/// GF(4) = GF(2)[X] / (X^2 + X + 1). With alpha a root of X^2 + X + 1, the
/// elements {0, 1, alpha, alpha + 1} are represented by the integers 0..=3.
/// Addition is XOR of the representations; multiplication and division use
/// the precomputed Cayley tables.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Gf4(u8);

impl Gf4 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    pub const ALPHA: Self = Self(2);
    pub const ALPHA_PLUS_ONE: Self = Self(3);
}

impl TryFrom<u8> for Gf4 {
    type Error = IncorrectValueRange;

    fn try_from(value: u8) -> Result<Self, IncorrectValueRange> {
        Self::from_value(usize::from(value))
    }
}

impl From<Gf4> for u8 {
    #[inline]
    fn from(element: Gf4) -> u8 {
        element.0
    }
}

impl Add for Gf4 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }
}

impl AddAssign for Gf4 {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 ^= other.0;
    }
}

// Subtraction coincides with addition in characteristic 2.
impl Sub for Gf4 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }
}

impl SubAssign for Gf4 {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 ^= other.0;
    }
}

impl Mul for Gf4 {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self(GF4_MULTIPLICATION[self.0 as usize][other.0 as usize])
    }
}

impl MulAssign for Gf4 {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.0 = GF4_MULTIPLICATION[self.0 as usize][other.0 as usize];
    }
}

impl FiniteField for Gf4 {
    const ORDER: usize = 4;

    fn from_value(value: usize) -> Result<Self, IncorrectValueRange> {
        if value >= Self::ORDER {
            return Err(IncorrectValueRange {
                value,
                order: Self::ORDER,
            });
        }
        Ok(Self(value as u8))
    }

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn one() -> Self {
        Self::ONE
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == 1
    }

    fn checked_div(self, divisor: Self) -> Result<Self, DivisionByZero> {
        if divisor.is_zero() {
            return Err(DivisionByZero);
        }
        Ok(Self(GF4_DIVISION[self.0 as usize][divisor.0 as usize - 1]))
    }

    fn nonzero_elements() -> Vec<Self> {
        vec![Self::ONE, Self::ALPHA, Self::ALPHA_PLUS_ONE]
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0u8..4))
    }

    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(1u8..4))
    }
}

impl fmt::Display for Gf4 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            0 => write!(f, "0"),
            1 => write!(f, "1"),
            2 => write!(f, "alpha"),
            _ => write!(f, "(alpha + 1)"),
        }
    }
}
