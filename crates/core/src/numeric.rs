//! Modular arithmetic helpers over native machine integers.
//!
//! Demo scale only: operands are `i64`, products are widened to `i128`
//! before reduction so pedagogical inputs cannot overflow. There is no
//! bignum arithmetic and no constant-time discipline here on purpose.

/// Floored modulus, canonical in `[0, m)` even for negative `n`.
///
/// A zero modulus returns `n` unchanged so degenerate demo input stays
/// total instead of dividing by zero.
pub fn modulo(n: i64, m: i64) -> i64 {
    if m == 0 {
        return n;
    }
    ((n % m) + m) % m
}

/// `(a * b) mod m` with an `i128` product so demo-scale values never
/// overflow. Moduli below 2 collapse to 0.
pub fn mul_mod(a: i64, b: i64, m: i64) -> i64 {
    if m <= 1 {
        return 0;
    }
    let m = m as i128;
    ((((a as i128 * b as i128) % m) + m) % m) as i64
}

/// Greatest common divisor, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut x, mut y) = (a.abs(), b.abs());
    while y != 0 {
        let r = x % y;
        x = y;
        y = r;
    }
    x
}

/// Modular exponentiation by squaring.
///
/// Negative exponents are treated as zero; moduli below 2 collapse to 0.
pub fn mod_pow(base: i64, exp: i64, modulus: i64) -> i64 {
    if modulus <= 1 {
        return 0;
    }
    let m = modulus as i128;
    let mut base = modulo(base, modulus) as i128;
    let mut exp = exp.max(0) as u64;
    let mut acc = 1i128;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    acc as i64
}

/// Smallest multiplicative inverse found by direct search, or `None` when
/// `gcd(a, m) != 1`. Suits the mod-26 sized moduli the letter ciphers use.
pub fn mod_inverse_search(a: i64, m: i64) -> Option<i64> {
    let a = modulo(a, m);
    (1..m).find(|&x| modulo(a * x, m) == 1)
}

/// Extended Euclid: returns `(g, x, y)` with `a*x + b*y == g`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }
    (old_r, old_s, old_t)
}

/// Modular inverse via extended Euclid, normalized into `[0, m)`.
///
/// The operand is reduced into `[0, m)` first, which keeps the returned
/// gcd non-negative; only `g == 1` counts as invertible.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    if m <= 0 {
        return None;
    }
    let a = modulo(a, m);
    let (g, x, _) = extended_gcd(a, m);
    if g != 1 {
        return None;
    }
    Some(modulo(x, m))
}

/// Trial-division primality test up to `sqrt(n)`, for the small demo
/// ranges the RSA and DSS kernels accept.
pub fn is_small_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut i = 3i64;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulo_is_floored_for_negatives() {
        assert_eq!(modulo(-1, 26), 25);
        assert_eq!(modulo(-27, 26), 25);
        assert_eq!(modulo(5, 26), 5);
        assert_eq!(modulo(26, 26), 0);
    }

    #[test]
    fn test_modulo_zero_modulus_is_identity() {
        assert_eq!(modulo(42, 0), 42);
        assert_eq!(modulo(-7, 0), -7);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(17, 3120), 1);
        assert_eq!(gcd(0, 5), 5);
    }

    #[test]
    fn test_mod_pow_matches_naive() {
        assert_eq!(mod_pow(4, 13, 497), 445);
        assert_eq!(mod_pow(65, 17, 3233), 2790);
        assert_eq!(mod_pow(5, 0, 7), 1);
        assert_eq!(mod_pow(0, 0, 7), 1);
    }

    #[test]
    fn test_mod_pow_degenerate_modulus() {
        assert_eq!(mod_pow(5, 3, 1), 0);
        assert_eq!(mod_pow(5, 3, 0), 0);
        assert_eq!(mod_pow(5, -3, 7), 1);
    }

    #[test]
    fn test_mod_inverse_search_mod_26() {
        assert_eq!(mod_inverse_search(9, 26), Some(3));
        assert_eq!(mod_inverse_search(1, 26), Some(1));
        assert_eq!(mod_inverse_search(13, 26), None);
        assert_eq!(mod_inverse_search(2, 26), None);
    }

    #[test]
    fn test_extended_gcd_bezout_identity() {
        for (a, b) in [(17, 3120), (240, 46), (7, 11)] {
            let (g, x, y) = extended_gcd(a, b);
            assert_eq!(a * x + b * y, g);
            assert_eq!(g, gcd(a, b));
        }
    }

    #[test]
    fn test_mod_inverse_normalized_and_total() {
        assert_eq!(mod_inverse(17, 3120), Some(2753));
        assert_eq!(mod_inverse(7, 11), Some(8));
        // Negative operands are reduced before the Euclid pass.
        assert_eq!(mod_inverse(-9, 26), Some(mod_inverse(17, 26).unwrap()));
        assert_eq!(mod_inverse(6, 26), None);
        assert_eq!(mod_inverse(5, 0), None);
        assert_eq!(mod_inverse(5, -3), None);
    }

    #[test]
    fn test_mod_inverse_mod_one_is_zero() {
        assert_eq!(mod_inverse(5, 1), Some(0));
    }

    #[test]
    fn test_is_small_prime() {
        assert!(is_small_prime(2));
        assert!(is_small_prime(3));
        assert!(is_small_prime(61));
        assert!(is_small_prime(7919));
        assert!(!is_small_prime(1));
        assert!(!is_small_prime(0));
        assert!(!is_small_prime(-7));
        assert!(!is_small_prime(91));
    }
}
