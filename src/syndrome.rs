use crate::gf::FiniteField;
use crate::keys::PrivateKey;
use std::fmt;

/// Syndrome s = v * H^T of a length-2r vector against the parity-check rows
/// (h0, h1), stored with the outer index running from r down to 1. Entry t
/// of the stored vector therefore corresponds to outer index i = r - t, and
/// the column of H for position shift k reads h[(r - t + k) mod r]. The
/// encoder uses the same reversed ordering; the decoder relies on the two
/// agreeing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Syndrome<F: FiniteField> {
    values: Vec<F>,
}

impl<F: FiniteField> Syndrome<F> {
    pub fn compute(key: &PrivateKey<F>, vector: &[F]) -> Self {
        let r = key.block_length();
        debug_assert_eq!(vector.len(), 2 * r);
        let (first, second) = vector.split_at(r);
        let mut values = Vec::with_capacity(r);
        for i in (1..=r).rev() {
            let mut acc = F::zero();
            for j in 0..r {
                acc += key.h0()[(i + j) % r] * first[j];
                acc += key.h1()[(i + j) % r] * second[j];
            }
            values.push(acc);
        }
        Self { values }
    }

    #[inline]
    pub fn values(&self) -> &[F] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn hamming_weight(&self) -> usize {
        self.values.iter().filter(|value| !value.is_zero()).count()
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(FiniteField::is_zero)
    }

    /// Number of syndrome entries that become zero when `value` times the
    /// parity-check column at shift `shift` is subtracted, i.e. the zero
    /// count after flipping that position by `value`.
    pub fn zeros_after_flip(&self, block: &[F], shift: usize, value: F) -> usize {
        let r = block.len();
        let mut zeros = 0;
        for (t, &entry) in self.values.iter().enumerate() {
            if (entry - value * block[(r - t + shift) % r]).is_zero() {
                zeros += 1;
            }
        }
        zeros
    }

    /// Subtracts `value` times the parity-check column at shift `shift`.
    pub fn apply_flip(&mut self, block: &[F], shift: usize, value: F) {
        let r = block.len();
        for (t, entry) in self.values.iter_mut().enumerate() {
            *entry -= value * block[(r - t + shift) % r];
        }
    }
}

impl<F: FiniteField> fmt::Display for Syndrome<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries = self
            .values
            .iter()
            .map(|value| value.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{entries}]")
    }
}
