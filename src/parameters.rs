//! Recommended parameters for the GF(4) instantiation, following the
//! non-binary QC-MDPC construction of Baldi et al.

pub const BLOCK_LENGTH: usize = 2339;
pub const BLOCK_WEIGHT: usize = 37;
pub const ERROR_WEIGHT: usize = 10;
pub const MAX_ITERATIONS: usize = 100;

#[allow(warnings)]
const fn compile_time_assertions() {
    const _: () = assert!(BLOCK_WEIGHT < BLOCK_LENGTH);
    const _: () = assert!(ERROR_WEIGHT < BLOCK_WEIGHT);
    const _: () = assert!(MAX_ITERATIONS > 0);
}
