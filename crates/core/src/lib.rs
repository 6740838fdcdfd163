//! Core primitives for the CipherLab sandbox.
//!
//! This crate provides the building blocks the algorithm engine is made
//! of: alphabet normalization, modular arithmetic over machine integers,
//! 2x2 matrix inversion mod 26, loose-input coercion, the uniform
//! result/error shapes, and MD5/SHA-1 digest helpers.
//!
//! Nothing here is production cryptography. The kernels built on top are
//! teaching demos, and the primitives deliberately skip side-channel
//! hygiene, constant-time arithmetic, and bignum support.

pub mod alphabet;
pub mod digest;
pub mod error;
pub mod logging;
pub mod matrix;
pub mod numeric;
pub mod outcome;
pub mod params;

pub use alphabet::{normalize, ALPHABET, LETTER_COUNT};
pub use error::KernelError;
pub use matrix::{Inverse2, Matrix2};
pub use outcome::{KernelResult, Outcome, Trace};
pub use params::{coerce_int, int_field, str_field, Mode, Params};
