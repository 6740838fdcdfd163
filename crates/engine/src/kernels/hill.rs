//! Hill cipher over 2x2 key matrices mod 26.

use cipherlab_core::alphabet::{letter_at, letter_index};
use cipherlab_core::{
    normalize, str_field, KernelError, KernelResult, Matrix2, Mode, Params, Trace,
};

/// Multiplies letter pairs by the key matrix; decryption uses the matrix
/// inverse mod 26, computed on demand and discarded afterwards.
pub fn run(params: &Params) -> KernelResult {
    let key_matrix = params
        .get("matrix")
        .and_then(|value| Matrix2::parse(value))
        .ok_or(KernelError::MatrixShape)?;
    let text = normalize(str_field(params, "text"));
    if text.is_empty() {
        return Err(KernelError::TextRequired);
    }
    let mut padded = text;
    if padded.len() % 2 != 0 {
        padded.push('X');
    }

    let (used, inversion_note) = if Mode::from_params(params).is_decrypt() {
        let inverse = key_matrix
            .inverse()
            .ok_or(KernelError::MatrixNotInvertible)?;
        (
            inverse.matrix,
            format!(
                "Determinant: {}, inverse det: {}",
                inverse.det, inverse.det_inverse
            ),
        )
    } else {
        (key_matrix, "Using key matrix for encryption.".to_string())
    };

    let letters: Vec<char> = padded.chars().collect();
    let mut pairs = Vec::with_capacity(letters.len() / 2);
    let mut output = String::with_capacity(letters.len());
    for pair in letters.chunks(2) {
        let (x0, x1) = used.apply(letter_index(pair[0]), letter_index(pair[1]));
        pairs.push(format!("{}{}", pair[0], pair[1]));
        output.push(letter_at(x0));
        output.push(letter_at(x1));
    }

    let steps = vec![
        format!("Prepared text: {}", pairs.join(" ")),
        format!(
            "Matrix used: {}",
            used.0
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ),
        inversion_note,
        format!("Result: {output}"),
    ];
    Ok(Trace { output, steps })
}
