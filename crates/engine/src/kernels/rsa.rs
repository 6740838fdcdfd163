//! RSA keypair-and-round-trip demo at machine-integer scale.

use cipherlab_core::numeric::{gcd, is_small_prime, mod_inverse, mod_pow};
use cipherlab_core::{int_field, KernelError, KernelResult, Params, Trace};

/// Builds the keypair from p, q, e and round-trips the message through it.
///
/// Factor products saturate at the i64 boundary rather than growing into
/// bignums; the demo range is small primes.
pub fn run(params: &Params) -> KernelResult {
    let (Some(p), Some(q), Some(e), Some(message)) = (
        int_field(params, "p"),
        int_field(params, "q"),
        int_field(params, "e"),
        int_field(params, "message"),
    ) else {
        return Err(KernelError::NumbersRequired);
    };

    let n = p.saturating_mul(q);
    let phi = (p - 1).saturating_mul(q - 1);
    if !is_small_prime(p) || !is_small_prime(q) {
        return Err(KernelError::NotPrime);
    }
    if gcd(e, phi) != 1 {
        return Err(KernelError::ExponentNotCoprime);
    }
    let d = mod_inverse(e, phi).ok_or(KernelError::NoDecryptionExponent)?;

    let c = mod_pow(message, e, n);
    let decrypted = mod_pow(c, d, n);

    let steps = vec![
        format!("n = {n}"),
        format!("phi = {phi}"),
        format!("d = {d}"),
        format!("Ciphertext c = m^e mod n = {c}"),
        format!("Decrypted m = c^d mod n = {decrypted}"),
    ];
    Ok(Trace {
        output: format!("Cipher: {c} | Decrypted: {decrypted}"),
        steps,
    })
}
