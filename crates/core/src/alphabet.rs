//! The fixed 26-letter cipher alphabet and text normalization.
//!
//! Every letter cipher in the sandbox operates over uppercase A-Z only;
//! input text is normalized through [`normalize`] before any kernel touches
//! it, so downstream index arithmetic is total by construction.

/// The cipher alphabet in index order.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of letters in the alphabet, as the modulus the letter ciphers
/// reduce by.
pub const LETTER_COUNT: i64 = 26;

/// Uppercases `text` and strips everything outside A-Z.
///
/// Total and idempotent: empty input yields an empty string, never an
/// error.
pub fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .collect()
}

/// Index of a normalized letter within the alphabet.
pub fn letter_index(ch: char) -> i64 {
    ch as i64 - 'A' as i64
}

/// Letter at `index`, which must already be canonical in `[0, 26)`.
pub fn letter_at(index: i64) -> char {
    ALPHABET[index as usize] as char
}
