//! The CipherLab algorithm engine.
//!
//! Eleven independent, stateless computation kernels over small integers,
//! alphabet-normalized strings, and small matrices. Each kernel takes a
//! loosely-typed parameter bag and produces either an output string plus
//! an ordered, human-readable trace of the intermediate steps, or a
//! single user-facing error message.
//!
//! The engine's whole contract with the outside world is
//! [`run`]: `(algorithm, parameters) -> Outcome`. Transport, persistence,
//! and UI concerns live with the callers; resolving an unknown identifier
//! to a not-found response does too ([`Algorithm::from_id`] simply returns
//! `None`).
//!
//! Every kernel is pure and synchronous, with no shared mutable state;
//! concurrent callers share nothing but the immutable dispatch table.

use std::fmt;

pub mod kernels;

pub use cipherlab_core::{KernelError, KernelResult, Mode, Outcome, Params, Trace};

/// The algorithms the engine knows how to run, keyed by their wire
/// identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Caesar,
    Vigenere,
    Playfair,
    Hill,
    Rail,
    Des,
    Rsa,
    Dh,
    Md5,
    Sha1,
    Dss,
}

impl Algorithm {
    /// Every algorithm in wire-identifier order.
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Caesar,
        Algorithm::Vigenere,
        Algorithm::Playfair,
        Algorithm::Hill,
        Algorithm::Rail,
        Algorithm::Des,
        Algorithm::Rsa,
        Algorithm::Dh,
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Dss,
    ];

    /// Resolves a wire identifier. Unknown identifiers are the caller's
    /// concern and map to `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "caesar" => Some(Algorithm::Caesar),
            "vigenere" => Some(Algorithm::Vigenere),
            "playfair" => Some(Algorithm::Playfair),
            "hill" => Some(Algorithm::Hill),
            "rail" => Some(Algorithm::Rail),
            "des" => Some(Algorithm::Des),
            "rsa" => Some(Algorithm::Rsa),
            "dh" => Some(Algorithm::Dh),
            "md5" => Some(Algorithm::Md5),
            "sha1" => Some(Algorithm::Sha1),
            "dss" => Some(Algorithm::Dss),
            _ => None,
        }
    }

    /// The wire identifier this algorithm answers to.
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Caesar => "caesar",
            Algorithm::Vigenere => "vigenere",
            Algorithm::Playfair => "playfair",
            Algorithm::Hill => "hill",
            Algorithm::Rail => "rail",
            Algorithm::Des => "des",
            Algorithm::Rsa => "rsa",
            Algorithm::Dh => "dh",
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Dss => "dss",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Runs one kernel over a parameter bag and returns the wire outcome.
///
/// Validation failures come back as `Outcome::Failure` values; nothing a
/// caller hands in can panic past this boundary.
pub fn run(algorithm: Algorithm, params: &Params) -> Outcome {
    tracing::debug!(algorithm = algorithm.id(), "running kernel");
    let result = match algorithm {
        Algorithm::Caesar => kernels::caesar::run(params),
        Algorithm::Vigenere => kernels::vigenere::run(params),
        Algorithm::Playfair => kernels::playfair::run(params),
        Algorithm::Hill => kernels::hill::run(params),
        Algorithm::Rail => kernels::transposition::run(params),
        Algorithm::Des => kernels::feistel::run(params),
        Algorithm::Rsa => kernels::rsa::run(params),
        Algorithm::Dh => kernels::diffie_hellman::run(params),
        Algorithm::Md5 => kernels::digest::run_md5(params),
        Algorithm::Sha1 => kernels::digest::run_sha1(params),
        Algorithm::Dss => kernels::dss::run(params),
    };
    if let Err(err) = &result {
        tracing::debug!(algorithm = algorithm.id(), error = %err, "kernel rejected input");
    }
    Outcome::from(result)
}
