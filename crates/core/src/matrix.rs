//! Fixed-size 2x2 matrix arithmetic over the ring of integers mod 26.
//!
//! The Hill cipher only ever needs a 2x2 key, so the matrix is a flat
//! four-element array in row-major order; bounds hold by construction.

use serde_json::Value;

use crate::alphabet::LETTER_COUNT;
use crate::numeric::{mod_inverse_search, modulo};
use crate::params::coerce_int;

/// A 2x2 key matrix mod 26 in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matrix2(pub [i64; 4]);

/// Inverse of a key matrix together with the determinant values the step
/// narration reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inverse2 {
    pub matrix: Matrix2,
    pub det: i64,
    pub det_inverse: i64,
}

impl Matrix2 {
    /// Parses a key matrix from a JSON list of four integers or a
    /// comma/whitespace-delimited string. Entries are reduced mod 26.
    /// Anything that does not yield exactly four integers is `None`.
    pub fn parse(value: &Value) -> Option<Self> {
        let numbers: Vec<i64> = match value {
            Value::Array(items) => items.iter().map(coerce_int).collect::<Option<Vec<_>>>()?,
            Value::String(raw) => raw
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|part| !part.trim().is_empty())
                .map(|part| part.trim().parse::<i64>().ok())
                .collect::<Option<Vec<_>>>()?,
            _ => return None,
        };
        let entries: [i64; 4] = numbers.try_into().ok()?;
        Some(Matrix2(entries.map(|n| modulo(n, LETTER_COUNT))))
    }

    /// Determinant mod 26.
    pub fn det(&self) -> i64 {
        let [a, b, c, d] = self.0;
        modulo(a * d - b * c, LETTER_COUNT)
    }

    /// Multiplicative inverse mod 26, or `None` when `gcd(det, 26) != 1`.
    pub fn inverse(&self) -> Option<Inverse2> {
        let det = self.det();
        let det_inverse = mod_inverse_search(det, LETTER_COUNT)?;
        let [a, b, c, d] = self.0;
        let adjugate = [d, -b, -c, a];
        Some(Inverse2 {
            matrix: Matrix2(adjugate.map(|n| modulo(n * det_inverse, LETTER_COUNT))),
            det,
            det_inverse,
        })
    }

    /// Applies the matrix to a column vector, reducing mod 26.
    pub fn apply(&self, v0: i64, v1: i64) -> (i64, i64) {
        let [a, b, c, d] = self.0;
        (
            modulo(a * v0 + b * v1, LETTER_COUNT),
            modulo(c * v0 + d * v1, LETTER_COUNT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_from_list_and_string() {
        let expected = Matrix2([3, 3, 2, 5]);
        assert_eq!(Matrix2::parse(&json!([3, 3, 2, 5])), Some(expected));
        assert_eq!(Matrix2::parse(&json!("3 3 2 5")), Some(expected));
        assert_eq!(Matrix2::parse(&json!("3, 3, 2, 5")), Some(expected));
        assert_eq!(Matrix2::parse(&json!(["3", 3, "2", 5])), Some(expected));
    }

    #[test]
    fn test_parse_reduces_entries_mod_26() {
        assert_eq!(
            Matrix2::parse(&json!([-1, 27, 52, 5])),
            Some(Matrix2([25, 1, 0, 5]))
        );
    }

    #[test]
    fn test_parse_rejects_wrong_shapes() {
        assert_eq!(Matrix2::parse(&json!([3, 3, 2])), None);
        assert_eq!(Matrix2::parse(&json!([3, 3, 2, 5, 8])), None);
        assert_eq!(Matrix2::parse(&json!("3 3 two 5")), None);
        assert_eq!(Matrix2::parse(&json!(null)), None);
        assert_eq!(Matrix2::parse(&json!(3)), None);
        assert_eq!(Matrix2::parse(&json!([3, 3, 2.5, 5])), None);
    }

    #[test]
    fn test_det_and_inverse() {
        let m = Matrix2([3, 3, 2, 5]);
        assert_eq!(m.det(), 9);
        let inv = m.inverse().unwrap();
        assert_eq!(inv.det, 9);
        assert_eq!(inv.det_inverse, 3);
        assert_eq!(inv.matrix, Matrix2([15, 17, 20, 9]));
    }

    #[test]
    fn test_inverse_composes_to_identity() {
        let m = Matrix2([3, 3, 2, 5]);
        let inv = m.inverse().unwrap().matrix;
        for (v0, v1) in [(0, 0), (7, 8), (25, 13)] {
            let (e0, e1) = m.apply(v0, v1);
            assert_eq!(inv.apply(e0, e1), (v0, v1));
        }
    }

    #[test]
    fn test_non_invertible_matrix() {
        // det = 4 - 6 = -2, so gcd(det mod 26, 26) = 2.
        assert_eq!(Matrix2([1, 2, 3, 4]).inverse(), None);
        assert_eq!(Matrix2([2, 0, 0, 13]).inverse(), None);
    }
}
