//! MD5 and SHA-1 digests over UTF-8 text.
//!
//! The one place the sandbox leans on off-the-shelf implementations; both
//! algorithms are demo material here, not integrity primitives.

use md5::{Digest, Md5};
use sha1::Sha1;

/// Lowercase hex MD5 digest of `text`.
pub fn md5_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

/// Lowercase hex SHA-1 digest of `text`.
pub fn sha1_hex(text: &str) -> String {
    hex::encode(Sha1::digest(text.as_bytes()))
}

/// Raw SHA-1 digest bytes, for callers that fold the hash into a residue.
pub fn sha1_bytes(text: &str) -> [u8; 20] {
    Sha1::digest(text.as_bytes()).into()
}
