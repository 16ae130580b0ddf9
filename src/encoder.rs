use crate::gf::FiniteField;
use crate::keys::{IncorrectInputVectorLength, PublicKey};

impl<F: FiniteField> PublicKey<F> {
    /// Encodes a length-r message into the length-2r systematic codeword
    /// c = mG with G = [I | rot(g)^T].
    ///
    /// The first block is the message itself; the second block is the
    /// circulant convolution of the message with the generator block. The
    /// outer index runs from r down to 1 to match the syndrome convention,
    /// which the decoder depends on.
    pub fn encode(&self, message: &[F]) -> Result<Vec<F>, IncorrectInputVectorLength> {
        let r = self.block_length();
        if message.len() != r {
            return Err(IncorrectInputVectorLength {
                expected: r,
                actual: message.len(),
            });
        }
        let mut codeword = Vec::with_capacity(2 * r);
        codeword.extend_from_slice(message);
        for i in (1..=r).rev() {
            let mut parity = F::zero();
            for (j, &symbol) in message.iter().enumerate() {
                parity += symbol * self.generator_block()[(i + j) % r];
            }
            codeword.push(parity);
        }
        Ok(codeword)
    }
}
