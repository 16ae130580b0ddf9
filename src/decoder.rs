use crate::gf::FiniteField;
use crate::keys::{IncorrectInputVectorLength, PrivateKey};
use crate::syndrome::Syndrome;

impl<F: FiniteField> PrivateKey<F> {
    /// Iterative symbol-flipping decoder.
    ///
    /// Computes the syndrome of the length-2r input and, for up to
    /// `max_iterations` rounds, flips the (position, value) pair that leaves
    /// the syndrome with the most zero entries. Ties are broken in favour of
    /// the latest-scanned candidate, and a flip is applied every round even
    /// when no candidate strictly improves the syndrome weight.
    ///
    /// Returns the accumulated error vector once the syndrome reaches zero,
    /// or `None` if it has not done so within the iteration budget. Failure
    /// to decode is a normal outcome for this probabilistic decoder, not an
    /// error; callers may retry with a larger budget.
    pub fn decode(
        &self,
        ciphertext: &[F],
        max_iterations: usize,
    ) -> Result<Option<Vec<F>>, IncorrectInputVectorLength> {
        let r = self.block_length();
        if ciphertext.len() != 2 * r {
            return Err(IncorrectInputVectorLength {
                expected: 2 * r,
                actual: ciphertext.len(),
            });
        }
        let mut syndrome = Syndrome::compute(self, ciphertext);
        let mut error_vector = vec![F::zero(); 2 * r];
        if syndrome.is_zero() {
            return Ok(Some(error_vector));
        }
        let nonzero_elements = F::nonzero_elements();
        for _ in 0..max_iterations {
            let mut best: Option<(usize, F)> = None;
            let mut best_zeros = 0;
            for position in 0..2 * r {
                let (block, shift) = self.column_block(position);
                for &value in &nonzero_elements {
                    let zeros = syndrome.zeros_after_flip(block, shift, value);
                    if best.is_none() || zeros >= best_zeros {
                        best = Some((position, value));
                        best_zeros = zeros;
                    }
                }
            }
            let Some((position, value)) = best else {
                break;
            };
            let (block, shift) = self.column_block(position);
            syndrome.apply_flip(block, shift, value);
            error_vector[position] += value;
            if syndrome.is_zero() {
                break;
            }
        }
        if syndrome.is_zero() {
            Ok(Some(error_vector))
        } else {
            Ok(None)
        }
    }

    fn column_block(&self, position: usize) -> (&[F], usize) {
        let r = self.block_length();
        if position < r {
            (self.h0(), position)
        } else {
            (self.h1(), position - r)
        }
    }
}
