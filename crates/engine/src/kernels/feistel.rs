//! A miniature Feistel block cipher over one byte.
//!
//! Demonstrates the round structure (split, round function, swap) at
//! nibble scale without claiming any security. The round function mixes
//! the right half with the round subkey and its own left shift.

use cipherlab_core::{int_field, KernelError, KernelResult, Mode, Params, Trace};

const NIBBLE: i64 = 0xF;

/// Runs the byte through `rounds` Feistel rounds.
///
/// Subkey `i` is the nibble `(key >> i) & 0xF`; decryption replays the
/// subkeys in reverse. The output byte recombines the halves swapped,
/// which is what makes the structure its own inverse.
pub fn run(params: &Params) -> KernelResult {
    let (Some(plain), Some(key), Some(rounds)) = (
        int_field(params, "plaintext"),
        int_field(params, "key"),
        int_field(params, "rounds"),
    ) else {
        return Err(KernelError::FeistelInputsNotNumeric);
    };
    if !(0..=255).contains(&plain) || !(0..=255).contains(&key) {
        return Err(KernelError::FeistelByteOutOfRange);
    }
    if !(1..=6).contains(&rounds) {
        return Err(KernelError::FeistelRoundsOutOfRange);
    }

    let mut left = (plain >> 4) & NIBBLE;
    let mut right = plain & NIBBLE;
    let mut subkeys: Vec<i64> = (0..rounds).map(|i| (key >> i) & NIBBLE).collect();
    if Mode::from_params(params).is_decrypt() {
        subkeys.reverse();
    }

    let mut steps = vec![format!("Start L={left:04b}, R={right:04b}")];
    for (i, &subkey) in subkeys.iter().enumerate() {
        let f = ((right ^ subkey) + ((right << 1) & NIBBLE)) & NIBBLE;
        let new_left = right;
        let new_right = left ^ f;
        steps.push(format!(
            "Round {}: k={subkey:04b} f={f:04b} -> L={new_left:04b} R={new_right:04b}",
            i + 1
        ));
        left = new_left;
        right = new_right;
    }

    let out = ((right << 4) | left) & 0xFF;
    steps.push(format!("Output byte: {out}"));
    Ok(Trace {
        output: out.to_string(),
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
    fn test_two_round_vector() {
        let trace = run(&bag(json!({"plaintext": 171, "key": 202, "rounds": 2}))).unwrap();
        assert_eq!(trace.output, "157");
        assert_eq!(trace.steps[0], "Start L=1010, R=1011");
        assert_eq!(trace.steps[1], "Round 1: k=1010 f=0111 -> L=1011 R=1101");
        assert_eq!(trace.steps[2], "Round 2: k=0101 f=0010 -> L=1101 R=1001");
        assert_eq!(trace.steps[3], "Output byte: 157");
    }

    #[test]
    fn test_round_trip_all_round_counts() {
        for rounds in 1..=6 {
            for plain in [0, 1, 42, 171, 255] {
                let encrypted: i64 = run(&bag(
                    json!({"plaintext": plain, "key": 202, "rounds": rounds}),
                ))
                .unwrap()
                .output
                .parse()
                .unwrap();
                let decrypted = run(&bag(
                    json!({"plaintext": encrypted, "key": 202, "rounds": rounds, "mode": "decrypt"}),
                ))
                .unwrap()
                .output;
                assert_eq!(decrypted, plain.to_string(), "rounds = {rounds}");
            }
        }
    }

    #[test]
    fn test_non_numeric_inputs() {
        let err = run(&bag(json!({"plaintext": 1, "key": 2}))).unwrap_err();
        assert_eq!(err, KernelError::FeistelInputsNotNumeric);
        let err = run(&bag(json!({"plaintext": "x", "key": 2, "rounds": 2}))).unwrap_err();
        assert_eq!(err, KernelError::FeistelInputsNotNumeric);
    }

    #[test]
    fn test_byte_range_validation() {
        for (plain, key) in [(256, 0), (-1, 0), (0, 256), (0, -9)] {
            let err = run(&bag(json!({"plaintext": plain, "key": key, "rounds": 2}))).unwrap_err();
            assert_eq!(err, KernelError::FeistelByteOutOfRange);
        }
    }

    #[test]
    fn test_round_range_validation() {
        for rounds in [0, 7, -1, 100] {
            let err = run(&bag(json!({"plaintext": 1, "key": 2, "rounds": rounds}))).unwrap_err();
            assert_eq!(err, KernelError::FeistelRoundsOutOfRange);
        }
    }
}
