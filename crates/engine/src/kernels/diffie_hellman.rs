//! Diffie–Hellman key agreement demo.

use cipherlab_core::numeric::mod_pow;
use cipherlab_core::{int_field, KernelError, KernelResult, Params, Trace};

/// Derives both public values and the shared secret from each side.
///
/// The two derivations agree by construction; both are reported so the
/// learner can see the agreement, neither is re-validated.
pub fn run(params: &Params) -> KernelResult {
    let (Some(p), Some(g), Some(a), Some(b)) = (
        int_field(params, "p"),
        int_field(params, "g"),
        int_field(params, "a"),
        int_field(params, "b"),
    ) else {
        return Err(KernelError::NumbersRequired);
    };

    let public_a = mod_pow(g, a, p);
    let public_b = mod_pow(g, b, p);
    let shared_a = mod_pow(public_b, a, p);
    let shared_b = mod_pow(public_a, b, p);

    let steps = vec![
        format!("Public A = g^a mod p = {public_a}"),
        format!("Public B = g^b mod p = {public_b}"),
        format!("Shared from A = {shared_a}"),
        format!("Shared from B = {shared_b}"),
    ];
    Ok(Trace {
        output: format!("Shared key: {shared_a}"),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: serde_json::Value) -> Params {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_classic_p23_vector() {
        let trace = run(&bag(json!({"p": 23, "g": 5, "a": 6, "b": 15}))).unwrap();
        assert_eq!(trace.output, "Shared key: 2");
        assert_eq!(
            trace.steps,
            vec![
                "Public A = g^a mod p = 8",
                "Public B = g^b mod p = 19",
                "Shared from A = 2",
                "Shared from B = 2",
            ]
        );
    }

    #[test]
    fn test_both_derivations_agree() {
        for (a, b) in [(3, 11), (7, 7), (1, 22), (100, 9)] {
            let trace = run(&bag(json!({"p": 2087, "g": 2, "a": a, "b": b}))).unwrap();
            assert_eq!(trace.steps[2][16..], trace.steps[3][16..]);
        }
    }

    #[test]
    fn test_missing_inputs() {
        let err = run(&bag(json!({"p": 23, "g": 5, "a": 6}))).unwrap_err();
        assert_eq!(err, KernelError::NumbersRequired);
        let err = run(&bag(json!({"p": 23, "g": 5, "a": 6, "b": null}))).unwrap_err();
        assert_eq!(err.to_string(), "All inputs are required.");
    }
}
