//! Vigenère polyalphabetic cipher.

use cipherlab_core::alphabet::{letter_at, letter_index, LETTER_COUNT};
use cipherlab_core::numeric::modulo;
use cipherlab_core::{
    normalize, str_field, KernelError, KernelResult, Mode, Params, Trace,
};

use super::or_empty;

/// Shifts each letter by the alphabet index of the cyclic key letter.
///
/// The narration reports the key stream actually consumed, one key letter
/// per input letter.
pub fn run(params: &Params) -> KernelResult {
    let text = normalize(str_field(params, "text"));
    let key = normalize(str_field(params, "key"));
    if key.is_empty() {
        return Err(KernelError::KeyRequired("Vigenere"));
    }
    let decrypt = Mode::from_params(params).is_decrypt();
    let key_letters: Vec<char> = key.chars().collect();

    let mut key_stream = String::with_capacity(text.len());
    let mut output = String::with_capacity(text.len());
    for (i, ch) in text.chars().enumerate() {
        let k = key_letters[i % key_letters.len()];
        let shift = letter_index(k);
        let step = if decrypt {
            modulo(LETTER_COUNT - shift, LETTER_COUNT)
        } else {
            shift
        };
        key_stream.push(k);
        output.push(letter_at(modulo(letter_index(ch) + step, LETTER_COUNT)));
    }

    let steps = vec![
        format!("Normalized text: {}", or_empty(&text)),
        format!("Key stream: {}", or_empty(&key_stream)),
        format!("Result: {}", or_empty(&output)),
    ];
    Ok(Trace { output, steps })
}
