//! Kernel error taxonomy.
//!
//! Every failure a kernel can produce is an expected, recoverable,
//! user-facing condition. The `Display` string of each variant is the
//! exact message the transport layer serializes; nothing here is ever a
//! panic or a process-fatal fault.

use thiserror::Error;

/// Validation and arithmetic failures shared by the eleven kernels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// A cipher that cannot run without key material got none.
    #[error("Key is required for {0}.")]
    KeyRequired(&'static str),

    /// Columnar transposition got an empty key.
    #[error("Key is required for columnar transposition.")]
    ColumnarKeyRequired,

    /// A letter cipher got no usable text.
    #[error("Text is required.")]
    TextRequired,

    /// The Hill key did not parse to exactly four numbers.
    #[error("Key matrix must have 4 numbers.")]
    MatrixShape,

    /// The Hill key matrix has no inverse mod 26, so decryption is
    /// impossible.
    #[error("Key matrix is not invertible mod 26.")]
    MatrixNotInvertible,

    /// Rail fence needs at least two rails.
    #[error("Rails must be 2 or more.")]
    RailsOutOfRange,

    /// The Feistel demo got a non-numeric input.
    #[error("Plaintext, key, and rounds must be numbers.")]
    FeistelInputsNotNumeric,

    /// The Feistel demo operates on single bytes only.
    #[error("Plaintext and key must be in 0..255 for the toy demo.")]
    FeistelByteOutOfRange,

    /// The Feistel demo derives at most six round keys.
    #[error("Rounds must be between 1 and 6.")]
    FeistelRoundsOutOfRange,

    /// A number-theory demo is missing one of its integer inputs.
    #[error("All inputs are required.")]
    NumbersRequired,

    /// The RSA demo requires prime factors.
    #[error("p and q should be prime (small demo values).")]
    NotPrime,

    /// The RSA public exponent shares a factor with phi.
    #[error("e must be coprime to phi.")]
    ExponentNotCoprime,

    /// No private exponent exists for the given e and phi.
    #[error("Could not compute modular inverse for e.")]
    NoDecryptionExponent,

    /// The DSS commitment collapsed to zero.
    #[error("r became 0, choose different k.")]
    SignatureRZero,

    /// The DSS signature value collapsed to zero.
    #[error("s became 0, choose different k.")]
    SignatureSZero,

    /// The DSS ephemeral k has no inverse mod q.
    #[error("k must be invertible mod q.")]
    NonceNotInvertible,
}
