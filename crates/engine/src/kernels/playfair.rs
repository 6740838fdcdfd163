//! Playfair digraph cipher over the 5x5 I/J-merged key square.

use cipherlab_core::numeric::modulo;
use cipherlab_core::{normalize, str_field, KernelError, KernelResult, Mode, Params, Trace};

use super::or_empty;

const SIZE: usize = 5;

/// The 5x5 key square: always the 25 letters A-Z minus J, each exactly
/// once. Letter positions are precomputed so lookups are total; J shares
/// I's cell.
struct KeySquare {
    grid: [[char; SIZE]; SIZE],
    positions: [(usize, usize); 26],
}

impl KeySquare {
    /// Builds the square from a key: J folded to I, key letters deduped in
    /// order of first appearance, then the remaining non-J alphabet.
    fn from_key(key: &str) -> Self {
        let folded = fold(key);
        let mut letters = Vec::with_capacity(SIZE * SIZE);
        let mut seen = [false; 26];
        for ch in folded.chars().chain(('A'..='Z').filter(|&c| c != 'J')) {
            let slot = (ch as u8 - b'A') as usize;
            if !seen[slot] {
                seen[slot] = true;
                letters.push(ch);
            }
        }

        let mut grid = [[' '; SIZE]; SIZE];
        let mut positions = [(0, 0); 26];
        for (i, &ch) in letters.iter().enumerate() {
            let (r, c) = (i / SIZE, i % SIZE);
            grid[r][c] = ch;
            positions[(ch as u8 - b'A') as usize] = (r, c);
        }
        positions[(b'J' - b'A') as usize] = positions[(b'I' - b'A') as usize];
        Self { grid, positions }
    }

    fn locate(&self, ch: char) -> (usize, usize) {
        self.positions[(ch as u8 - b'A') as usize]
    }

    fn at(&self, row: usize, col: usize) -> char {
        self.grid[row][col]
    }

    /// Rows joined for the narration, e.g. `"M O N A R | C H Y B D | …"`.
    fn rows_joined(&self) -> String {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Normalize and merge J into I.
fn fold(text: &str) -> String {
    normalize(text).replace('J', "I")
}

/// Digraph preparation for encryption: a repeated letter or a missing
/// second letter inserts an `X` filler and advances one position; a
/// trailing single letter is padded with `X`.
fn prepare(text: &str) -> String {
    let letters: Vec<char> = fold(text).chars().collect();
    let mut prepared = String::with_capacity(letters.len() + letters.len() / 2);
    let mut i = 0;
    while i < letters.len() {
        let a = letters[i];
        match letters.get(i + 1) {
            Some(&b) if a != b => {
                prepared.push(a);
                prepared.push(b);
                i += 2;
            }
            _ => {
                prepared.push(a);
                prepared.push('X');
                i += 1;
            }
        }
    }
    prepared
}

fn wrapped(index: usize, delta: i64) -> usize {
    modulo(index as i64 + delta, SIZE as i64) as usize
}

/// Encrypts or decrypts digraphs against the key square.
///
/// Same row shifts columns, same column shifts rows, otherwise each letter
/// takes the opposite corner of the rectangle.
pub fn run(params: &Params) -> KernelResult {
    let key = str_field(params, "key");
    if key.is_empty() {
        return Err(KernelError::KeyRequired("Playfair"));
    }
    let square = KeySquare::from_key(key);
    let mode = Mode::from_params(params);
    let prepared = match mode {
        Mode::Decrypt => fold(str_field(params, "text")),
        Mode::Encrypt => prepare(str_field(params, "text")),
    };
    let shift: i64 = if mode.is_decrypt() { -1 } else { 1 };

    let letters: Vec<char> = prepared.chars().collect();
    let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut output = String::with_capacity(letters.len());
    for pair in letters.chunks(2) {
        let a = pair[0];
        // An odd decrypt tail pairs with the X filler rather than failing.
        let b = pair.get(1).copied().unwrap_or('X');
        digraphs.push(format!("{a}{b}"));

        let (ra, ca) = square.locate(a);
        let (rb, cb) = square.locate(b);
        let (ea, eb) = if ra == rb {
            (
                square.at(ra, wrapped(ca, shift)),
                square.at(rb, wrapped(cb, shift)),
            )
        } else if ca == cb {
            (
                square.at(wrapped(ra, shift), ca),
                square.at(wrapped(rb, shift), cb),
            )
        } else {
            (square.at(ra, cb), square.at(rb, ca))
        };
        output.push(ea);
        output.push(eb);
    }

    let steps = vec![
        format!("Prepared text: {}", or_empty(&prepared)),
        format!("Matrix: {}", square.rows_joined()),
        format!("Pairs: {}", or_empty(&digraphs.join(" "))),
        format!("Result: {}", or_empty(&output)),
    ];
    Ok(Trace { output, steps })
}
