//! Rail fence and columnar transposition, selected by the `variant` flag.

use cipherlab_core::{
    int_field, normalize, str_field, KernelError, KernelResult, Mode, Params, Trace,
};

use super::or_empty;

pub fn run(params: &Params) -> KernelResult {
    if str_field(params, "variant") == "columnar" {
        columnar(params)
    } else {
        rail_fence(params)
    }
}

fn rail_fence(params: &Params) -> KernelResult {
    let text = normalize(str_field(params, "text"));
    let rails = int_field(params, "rails").unwrap_or(0);
    if rails < 2 {
        return Err(KernelError::RailsOutOfRange);
    }
    // Rows past the text length are never visited; clamping bounds the
    // allocation without changing the walk.
    let row_count = (rails as usize).min(text.chars().count().max(1));

    let output = if Mode::from_params(params).is_decrypt() {
        rail_decrypt(&text, row_count)
    } else {
        rail_encrypt(&text, row_count)
    };

    let steps = vec![
        format!("Normalized text: {}", or_empty(&text)),
        format!("Rails: {rails}"),
        format!("Result: {}", or_empty(&output)),
    ];
    Ok(Trace { output, steps })
}

/// The zig-zag row index for each position of a text of `len` characters.
fn zigzag(len: usize, rails: usize) -> Vec<usize> {
    let mut pattern = Vec::with_capacity(len);
    let mut row: i64 = 0;
    let mut direction: i64 = 1;
    for _ in 0..len {
        pattern.push(row as usize);
        row += direction;
        if row == 0 || row == rails as i64 - 1 {
            direction = -direction;
        }
    }
    pattern
}

fn rail_encrypt(text: &str, rails: usize) -> String {
    let mut rows = vec![String::new(); rails];
    for (ch, row) in text.chars().zip(zigzag(text.chars().count(), rails)) {
        rows[row].push(ch);
    }
    rows.concat()
}

fn rail_decrypt(text: &str, rails: usize) -> String {
    let letters: Vec<char> = text.chars().collect();
    let pattern = zigzag(letters.len(), rails);

    let mut rail_lengths = vec![0usize; rails];
    for &row in &pattern {
        rail_lengths[row] += 1;
    }

    // Slice the ciphertext into per-rail runs in row order, then replay
    // the zig-zag pulling the next unused character from each rail.
    let mut segments = Vec::with_capacity(rails);
    let mut start = 0;
    for &len in &rail_lengths {
        segments.push(&letters[start..start + len]);
        start += len;
    }

    let mut cursors = vec![0usize; rails];
    let mut output = String::with_capacity(letters.len());
    for &row in &pattern {
        output.push(segments[row][cursors[row]]);
        cursors[row] += 1;
    }
    output
}

fn columnar(params: &Params) -> KernelResult {
    let key = normalize(str_field(params, "key"));
    if key.is_empty() {
        return Err(KernelError::ColumnarKeyRequired);
    }
    let text = normalize(str_field(params, "text"));
    let key_letters: Vec<char> = key.chars().collect();
    let order = column_order(&key_letters);

    let (grid, output) = if Mode::from_params(params).is_decrypt() {
        columnar_decrypt(&text, &order, key_letters.len())
    } else {
        columnar_encrypt(&text, &order, key_letters.len())
    };

    let steps = vec![
        format!(
            "Grid: {}",
            grid.iter()
                .map(|row| row
                    .iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" "))
                .collect::<Vec<_>>()
                .join(" | ")
        ),
        format!("Order: {}", order.iter().map(|&(ch, _)| ch).collect::<String>()),
        format!("Result: {output}"),
    ];
    Ok(Trace { output, steps })
}

/// Stable sort of the key letters by (letter, original index); ties keep
/// their original column position.
fn column_order(key: &[char]) -> Vec<(char, usize)> {
    let mut order: Vec<(char, usize)> = key.iter().copied().enumerate().map(|(i, ch)| (ch, i)).collect();
    order.sort();
    order
}

fn columnar_encrypt(
    text: &str,
    order: &[(char, usize)],
    cols: usize,
) -> (Vec<Vec<char>>, String) {
    let letters: Vec<char> = text.chars().collect();
    let rows = (letters.len() + cols - 1) / cols;
    let mut grid = vec![vec!['X'; cols]; rows];
    for (i, &ch) in letters.iter().enumerate() {
        grid[i / cols][i % cols] = ch;
    }

    let mut output = String::with_capacity(rows * cols);
    for &(_, col) in order {
        for row in &grid {
            output.push(row[col]);
        }
    }
    (grid, output)
}

fn columnar_decrypt(
    text: &str,
    order: &[(char, usize)],
    cols: usize,
) -> (Vec<Vec<char>>, String) {
    let letters: Vec<char> = text.chars().collect();
    let rows = (letters.len() + cols - 1) / cols;
    let mut grid = vec![vec!['X'; cols]; rows];
    let mut i = 0;
    for &(_, col) in order {
        for row in grid.iter_mut() {
            row[col] = letters.get(i).copied().unwrap_or('X');
            i += 1;
        }
    }

    let output: String = grid.iter().flatten().collect();
    (grid, output)
}
