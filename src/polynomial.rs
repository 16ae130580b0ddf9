use crate::gf::{DivisionByZero, FiniteField};
use crate::xgcd::full_gcd;
use std::{
    fmt,
    ops::{Add, Mul, Sub},
};

/// Polynomial over a finite field, stored as a coefficient vector in
/// ascending degree order.
///
/// Canonical-form invariant: the coefficient vector is either empty (the
/// zero polynomial) or its last entry is non-zero. Every operation returns a
/// canonical value; the half-GCD recursion depends on exact degree tracking.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polynomial<F: FiniteField> {
    coefficients: Vec<F>,
}

impl<F: FiniteField> Polynomial<F> {
    pub fn zero() -> Self {
        Self {
            coefficients: Vec::new(),
        }
    }

    pub fn one() -> Self {
        Self {
            coefficients: vec![F::one()],
        }
    }

    /// Builds a polynomial from an explicit coefficient sequence, dropping
    /// trailing zeros.
    pub fn from_coefficients(coefficients: Vec<F>) -> Self {
        let mut polynomial = Self { coefficients };
        polynomial.normalize();
        polynomial
    }

    fn normalize(&mut self) {
        while self
            .coefficients
            .last()
            .map_or(false, FiniteField::is_zero)
        {
            self.coefficients.pop();
        }
    }

    /// Degree of the polynomial; the zero polynomial has degree 0 by
    /// convention.
    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_one()
    }

    /// Coefficient of x^deg, zero above the stored degree.
    #[inline]
    pub fn coefficient(&self, deg: usize) -> F {
        self.coefficients.get(deg).copied().unwrap_or_else(F::zero)
    }

    #[inline]
    pub fn leading_coefficient(&self) -> F {
        self.coefficients.last().copied().unwrap_or_else(F::zero)
    }

    /// Writes a single coefficient, maintaining canonical form: a non-zero
    /// write past the current degree extends it, a zero write at the leading
    /// position rescans downward for the new leading coefficient.
    pub fn set_coefficient(&mut self, deg: usize, value: F) {
        if deg >= self.coefficients.len() {
            if value.is_zero() {
                return;
            }
            self.coefficients.resize(deg + 1, F::zero());
        }
        self.coefficients[deg] = value;
        if value.is_zero() && deg + 1 == self.coefficients.len() {
            self.normalize();
        }
    }

    /// Coefficient vector padded with zeros up to `length`, for export into
    /// the quotient ring F[x]/(x^r - 1).
    pub fn to_coefficient_vector(&self, length: usize) -> Vec<F> {
        debug_assert!(self.coefficients.len() <= length);
        let mut vector = self.coefficients.clone();
        vector.resize(length, F::zero());
        vector
    }

    /// Drops the first `deg` coefficients, i.e. computes the quotient of the
    /// polynomial by x^deg.
    pub fn div_x_to_deg(&self, deg: usize) -> Self {
        let coefficients = self
            .coefficients
            .get(deg..)
            .map(<[F]>::to_vec)
            .unwrap_or_default();
        Self::from_coefficients(coefficients)
    }

    /// Euclidean division: returns (q, r) with self = q * divisor + r and
    /// deg r < deg divisor.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), DivisionByZero> {
        if divisor.is_zero() {
            return Err(DivisionByZero);
        }
        if self.is_zero() || self.degree() < divisor.degree() {
            return Ok((Self::zero(), self.clone()));
        }
        let divisor_degree = divisor.degree();
        let divisor_lead = divisor.leading_coefficient();
        let mut quotient = vec![F::zero(); self.degree() - divisor_degree + 1];
        let mut remainder = self.clone();
        while !remainder.is_zero() && remainder.degree() >= divisor_degree {
            let shift = remainder.degree() - divisor_degree;
            let factor = remainder.leading_coefficient().checked_div(divisor_lead)?;
            quotient[shift] = factor;
            for (i, &coefficient) in divisor.coefficients.iter().enumerate() {
                let updated = remainder.coefficients[shift + i] - factor * coefficient;
                remainder.coefficients[shift + i] = updated;
            }
            // The leading term cancels by construction.
            remainder.normalize();
        }
        Ok((Self::from_coefficients(quotient), remainder))
    }

    /// Multiplicative inverse modulo `modulus`, via the half-GCD extended
    /// Euclidean algorithm. Returns `Ok(None)` when no inverse exists (self
    /// is zero modulo the modulus, or not coprime to it).
    pub fn invert(&self, modulus: &Self) -> Result<Option<Self>, DivisionByZero> {
        if modulus.is_zero() {
            return Err(DivisionByZero);
        }
        let (_, reduced) = self.div_rem(modulus)?;
        if reduced.is_zero() {
            return Ok(None);
        }
        let (_, transform) = full_gcd(modulus.clone(), reduced.clone())?;
        // adj(M) * (modulus, self)^T = (gcd, 0)^T, so M's top-right entry is
        // the Bezout coefficient of self up to the constant gcd.
        let (gcd, _) = transform.adjugate().apply(modulus, &reduced);
        if gcd.degree() > 0 {
            return Ok(None);
        }
        let scale = F::one().checked_div(gcd.coefficient(0))?;
        let (_, inverse) = (&transform.a01 * scale).div_rem(modulus)?;
        Ok(Some(inverse))
    }
}

impl<F: FiniteField> Add for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn add(self, other: Self) -> Polynomial<F> {
        let length = self.coefficients.len().max(other.coefficients.len());
        let coefficients = (0..length)
            .map(|deg| self.coefficient(deg) + other.coefficient(deg))
            .collect();
        Polynomial::from_coefficients(coefficients)
    }
}

// Kept distinct from addition: the two only coincide over characteristic-2
// coefficient fields.
impl<F: FiniteField> Sub for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn sub(self, other: Self) -> Polynomial<F> {
        let length = self.coefficients.len().max(other.coefficients.len());
        let coefficients = (0..length)
            .map(|deg| self.coefficient(deg) - other.coefficient(deg))
            .collect();
        Polynomial::from_coefficients(coefficients)
    }
}

impl<F: FiniteField> Mul for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, other: Self) -> Polynomial<F> {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut coefficients = vec![F::zero(); self.degree() + other.degree() + 1];
        for (i, &a) in self.coefficients.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in other.coefficients.iter().enumerate() {
                coefficients[i + j] += a * b;
            }
        }
        Polynomial::from_coefficients(coefficients)
    }
}

impl<F: FiniteField> Mul<F> for &Polynomial<F> {
    type Output = Polynomial<F>;

    fn mul(self, scalar: F) -> Polynomial<F> {
        let coefficients = self
            .coefficients
            .iter()
            .map(|&coefficient| coefficient * scalar)
            .collect();
        Polynomial::from_coefficients(coefficients)
    }
}

impl<F: FiniteField> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut separator = "";
        for (deg, coefficient) in self.coefficients.iter().enumerate() {
            if coefficient.is_zero() {
                continue;
            }
            write!(f, "{separator}{coefficient}*x^{deg}")?;
            separator = " + ";
        }
        Ok(())
    }
}
