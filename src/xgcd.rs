//! Divide-and-conquer (half-GCD) extended Euclidean algorithm for
//! polynomials over a characteristic-2 field.
//!
//! Rather than running the classic quadratic remainder sequence, `half_gcd`
//! recurses on the high-order halves of its inputs and accumulates the
//! quotient steps into a 2x2 transform matrix. The composed matrix has a
//! constant non-zero determinant, so the reduction it encodes can be applied
//! to the full-precision operands through the adjugate.

use crate::gf::{DivisionByZero, FiniteField};
use crate::polynomial::Polynomial;
use std::ops::Mul;

/// 2x2 matrix of polynomials accumulating Euclidean quotient steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformMatrix<F: FiniteField> {
    pub a00: Polynomial<F>,
    pub a01: Polynomial<F>,
    pub a10: Polynomial<F>,
    pub a11: Polynomial<F>,
}

impl<F: FiniteField> TransformMatrix<F> {
    pub fn identity() -> Self {
        Self {
            a00: Polynomial::one(),
            a01: Polynomial::zero(),
            a10: Polynomial::zero(),
            a11: Polynomial::one(),
        }
    }

    /// Matrix of a single Euclidean step with quotient q: ((q, 1), (1, 0)).
    pub fn from_quotient(quotient: Polynomial<F>) -> Self {
        Self {
            a00: quotient,
            a01: Polynomial::one(),
            a10: Polynomial::one(),
            a11: Polynomial::zero(),
        }
    }

    /// The adjugate; no sign flips are needed in characteristic 2.
    pub fn adjugate(&self) -> Self {
        Self {
            a00: self.a11.clone(),
            a01: self.a01.clone(),
            a10: self.a10.clone(),
            a11: self.a00.clone(),
        }
    }

    pub fn apply(&self, a: &Polynomial<F>, b: &Polynomial<F>) -> (Polynomial<F>, Polynomial<F>) {
        (
            &(&self.a00 * a) + &(&self.a01 * b),
            &(&self.a10 * a) + &(&self.a11 * b),
        )
    }

    pub fn determinant(&self) -> Polynomial<F> {
        &(&self.a00 * &self.a11) - &(&self.a01 * &self.a10)
    }
}

impl<F: FiniteField> Mul for &TransformMatrix<F> {
    type Output = TransformMatrix<F>;

    fn mul(self, other: Self) -> TransformMatrix<F> {
        TransformMatrix {
            a00: &(&self.a00 * &other.a00) + &(&self.a01 * &other.a10),
            a01: &(&self.a00 * &other.a01) + &(&self.a01 * &other.a11),
            a10: &(&self.a10 * &other.a00) + &(&self.a11 * &other.a10),
            a11: &(&self.a10 * &other.a01) + &(&self.a11 * &other.a11),
        }
    }
}

/// One round of the half-GCD recursion for deg a >= deg b.
///
/// Returns a prefix of the Euclidean quotient sequence of (a, b) and its
/// composed transform M; applying adjugate(M) to (a, b) advances the pair
/// along the remainder sequence, strictly reducing deg b whenever
/// deg b >= m = ceil((deg a + 1) / 2). Quotients are computed on
/// x^m-truncated operands, which agree with the full-precision quotients
/// while remainder degrees stay above (deg a + m) / 2; the single
/// full-precision division step in the middle guarantees progress at the
/// truncation boundary.
pub fn half_gcd<F: FiniteField>(
    mut a: Polynomial<F>,
    mut b: Polynomial<F>,
) -> Result<(Vec<Polynomial<F>>, TransformMatrix<F>), DivisionByZero> {
    debug_assert!(a.degree() >= b.degree());
    let m = a.degree() / 2 + 1;
    if b.degree() < m {
        return Ok((Vec::new(), TransformMatrix::identity()));
    }
    let (mut quotients, transform) = half_gcd(a.div_x_to_deg(m), b.div_x_to_deg(m))?;
    (a, b) = transform.adjugate().apply(&a, &b);
    if b.degree() < m {
        return Ok((quotients, transform));
    }
    let (quotient, remainder) = a.div_rem(&b)?;
    let step = TransformMatrix::from_quotient(quotient.clone());
    quotients.push(quotient);
    (a, b) = (b, remainder);
    let k = 2 * m - b.degree();
    let (tail_quotients, tail_transform) = half_gcd(a.div_x_to_deg(k), b.div_x_to_deg(k))?;
    quotients.extend(tail_quotients);
    Ok((quotients, &(&transform * &step) * &tail_transform))
}

/// Full extended GCD of (a, b) with deg a >= deg b.
///
/// Returns the complete quotient sequence and the composed transform M with
/// adjugate(M) * (a, b)^T = (gcd, 0)^T. Half-GCD rounds are used while the
/// degrees are close enough for them to pay off; otherwise a single
/// Euclidean step is taken.
pub fn full_gcd<F: FiniteField>(
    mut a: Polynomial<F>,
    mut b: Polynomial<F>,
) -> Result<(Vec<Polynomial<F>>, TransformMatrix<F>), DivisionByZero> {
    let mut quotients = Vec::new();
    let mut transform = TransformMatrix::identity();
    while !b.is_zero() {
        if 2 * b.degree() > a.degree() {
            let (mut round_quotients, round_transform) = half_gcd(a.clone(), b.clone())?;
            (a, b) = round_transform.adjugate().apply(&a, &b);
            quotients.append(&mut round_quotients);
            transform = &transform * &round_transform;
        } else {
            let (quotient, remainder) = a.div_rem(&b)?;
            let step = TransformMatrix::from_quotient(quotient.clone());
            quotients.push(quotient);
            (a, b) = (b, remainder);
            transform = &transform * &step;
        }
    }
    Ok((quotients, transform))
}
