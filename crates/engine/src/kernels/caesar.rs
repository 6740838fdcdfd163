//! Caesar shift cipher.

use cipherlab_core::alphabet::{letter_at, letter_index, LETTER_COUNT};
use cipherlab_core::numeric::modulo;
use cipherlab_core::{int_field, normalize, str_field, KernelResult, Mode, Params, Trace};

use super::or_empty;

/// Shifts every normalized letter by the same amount.
///
/// An absent or non-numeric shift defaults to 0; decryption applies the
/// complementary shift `26 - s`.
pub fn run(params: &Params) -> KernelResult {
    let text = normalize(str_field(params, "text"));
    let shift = int_field(params, "shift").unwrap_or(0);
    let step = match Mode::from_params(params) {
        Mode::Decrypt => modulo(LETTER_COUNT - modulo(shift, LETTER_COUNT), LETTER_COUNT),
        Mode::Encrypt => modulo(shift, LETTER_COUNT),
    };

    let output: String = text
        .chars()
        .map(|ch| letter_at(modulo(letter_index(ch) + step, LETTER_COUNT)))
        .collect();

    let steps = vec![
        format!("Normalized text: {}", or_empty(&text)),
        format!("Shift applied: {step}"),
        format!("Result: {}", or_empty(&output)),
    ];
    Ok(Trace { output, steps })
}
