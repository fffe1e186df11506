//! Bounded-alphabet string generation shared by all engines.

use crate::error::RandError;

/// Builds a string of exactly `length` characters, drawing each position
/// independently from `alphabet` via `draw_index` (a bounded draw in
/// `[0, alphabet.len())`).
///
/// Length zero returns an empty string without drawing; an empty alphabet
/// or one too large for a 32-bit index draw is rejected before any draw.
pub(crate) fn next_string_with<F>(
    alphabet: &[char],
    length: usize,
    mut draw_index: F,
) -> Result<String, RandError>
where
    F: FnMut(i32) -> Result<i32, RandError>,
{
    if alphabet.is_empty() {
        return Err(RandError::EmptyAlphabet);
    }
    let bound = index_bound(alphabet.len())?;
    if length == 0 {
        return Ok(String::new());
    }
    let mut result = String::with_capacity(length);
    for _ in 0..length {
        let idx = draw_index(bound)?;
        result.push(alphabet[idx as usize]);
    }
    Ok(result)
}

/// Index draws are 32-bit, so the alphabet must fit in an `i32`.
fn index_bound(len: usize) -> Result<i32, RandError> {
    i32::try_from(len).map_err(|_| RandError::AlphabetTooLarge)
}
