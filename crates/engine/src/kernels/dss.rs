//! DSS (DSA) sign-and-verify demo.

use cipherlab_core::digest::sha1_bytes;
use cipherlab_core::numeric::{mod_inverse, mod_pow, modulo, mul_mod};
use cipherlab_core::{int_field, str_field, KernelError, KernelResult, Params, Trace};

/// Signs the message hash and immediately verifies the signature.
///
/// Degenerate parameter choices (r or s collapsing to zero, a
/// non-invertible k) fail with the specific arithmetic reason before any
/// partial signature is reported.
pub fn run(params: &Params) -> KernelResult {
    let (Some(p), Some(q), Some(g), Some(x), Some(k)) = (
        int_field(params, "p"),
        int_field(params, "q"),
        int_field(params, "g"),
        int_field(params, "x"),
        int_field(params, "k"),
    ) else {
        return Err(KernelError::NumbersRequired);
    };
    let message = str_field(params, "message");

    let y = mod_pow(g, x, p);
    let r = modulo(mod_pow(g, k, p), q);
    if r == 0 {
        return Err(KernelError::SignatureRZero);
    }
    let k_inverse = mod_inverse(k, q).ok_or(KernelError::NonceNotInvertible)?;

    let h = digest_residue(message, q);
    let s = mul_mod(k_inverse, modulo(h + mul_mod(x, r, q), q), q);
    if s == 0 {
        return Err(KernelError::SignatureSZero);
    }

    // s survived the zero check, but for a composite q it may still not be
    // invertible; the verification then simply reports invalid.
    let w = mod_inverse(s, q).unwrap_or(0);
    let u1 = mul_mod(h, w, q);
    let u2 = mul_mod(r, w, q);
    let v = modulo(mul_mod(mod_pow(g, u1, p), mod_pow(y, u2, p), p), q);
    let verdict = if v == r { "valid" } else { "invalid" };

    let steps = vec![
        format!("Public key y = g^x mod p = {y}"),
        format!("Hash h = SHA-1(m) mod q = {h}"),
        format!("r = (g^k mod p) mod q = {r}"),
        format!("s = k^-1 (h + x*r) mod q = {s}"),
        format!("Verify v = {v}"),
    ];
    Ok(Trace {
        output: format!("Signature (r, s): ({r}, {s}) | Verify: {verdict}"),
        steps,
    })
}

/// SHA-1 digest folded into a residue mod `q`, Horner-style over the
/// digest bytes. Every use of the hash in the demo is mod q, so the
/// residue stands in for the 160-bit integer without bignum arithmetic.
fn digest_residue(message: &str, q: i64) -> i64 {
    sha1_bytes(message)
        .iter()
        .fold(0i64, |acc, &byte| {
            modulo(mul_mod(acc, 256, q) + i64::from(byte), q)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: serde_json::Value) -> Params {
        serde_json::from_value(value).unwrap()
    }

    // p = 23, q = 11 divides p - 1, and g = 4 has order 11 mod 23.
    fn demo_params(k: i64, message: &str) -> Params {
        bag(json!({"p": 23, "q": 11, "g": 4, "x": 3, "k": k, "message": message}))
    }

    #[test]
    fn test_signature_verifies() {
        let trace = run(&demo_params(7, "HELLO")).unwrap();
        assert_eq!(trace.output, "Signature (r, s): (8, 8) | Verify: valid");
        assert_eq!(
            trace.steps,
            vec![
                "Public key y = g^x mod p = 18",
                "Hash h = SHA-1(m) mod q = 10",
                "r = (g^k mod p) mod q = 8",
                "s = k^-1 (h + x*r) mod q = 8",
                "Verify v = 8",
            ]
        );
    }

    #[test]
    fn test_verification_matches_r_for_many_nonces() {
        for k in [1, 2, 3, 5, 7, 9] {
            let trace = run(&demo_params(k, "MESSAGE")).unwrap();
            let r: i64 = trace.steps[2].rsplit(' ').next().unwrap().parse().unwrap();
            assert_eq!(trace.steps[4], format!("Verify v = {r}"), "k = {k}");
        }
    }

    #[test]
    fn test_degenerate_r_is_an_error() {
        // g = 22 has order 2 mod 23; k = 1 gives g^k mod p = 22 = 2 * 11.
        let err = run(&bag(
            json!({"p": 23, "q": 11, "g": 22, "x": 3, "k": 1, "message": "M"}),
        ))
        .unwrap_err();
        assert_eq!(err, KernelError::SignatureRZero);
    }

    #[test]
    fn test_non_invertible_nonce_is_an_error() {
        // Composite q = 10 shares a factor with k = 2.
        let err = run(&bag(
            json!({"p": 23, "q": 10, "g": 5, "x": 3, "k": 2, "message": "M"}),
        ))
        .unwrap_err();
        assert_eq!(err, KernelError::NonceNotInvertible);
    }

    #[test]
    fn test_missing_numeric_field_is_an_error() {
        let err = run(&bag(
            json!({"p": 23, "q": 11, "g": 4, "x": 3, "message": "M"}),
        ))
        .unwrap_err();
        assert_eq!(err, KernelError::NumbersRequired);
    }

    #[test]
    fn test_empty_message_is_allowed() {
        let trace = run(&demo_params(7, "")).unwrap();
        assert_eq!(trace.output, "Signature (r, s): (8, 3) | Verify: valid");
        assert_eq!(trace.steps[1], "Hash h = SHA-1(m) mod q = 8");
    }

    #[test]
    fn test_digest_residue_matches_full_reduction() {
        // 0x0102 mod 7 == 258 mod 7 == 6 for a two-byte fold.
        assert_eq!(
            [1u8, 2u8]
                .iter()
                .fold(0i64, |acc, &b| modulo(mul_mod(acc, 256, 7) + i64::from(b), 7)),
            6
        );
        // Matches the full 160-bit integer reduced mod q.
        assert_eq!(digest_residue("HELLO", 11), 10);
        assert_eq!(digest_residue("", 11), 8);
    }
}
