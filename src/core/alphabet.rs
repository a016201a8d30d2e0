//! Rotation over the code alphabet.
//!
//! Wrapping is done by the last valid index (35) rather than by the alphabet
//! length, and the low side of [`unrotate`] wraps on `<= 0`. Codes already in
//! circulation depend on this arithmetic, so it is not a plain modulo.

use crate::utils::error::{CodecError, CodecResult};

pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

pub const ALPHABET_LEN: usize = 36;

/// Position of `letter` in `alphabet`.
pub fn index_of(alphabet: &str, letter: char) -> Option<usize> {
    alphabet.chars().position(|c| c == letter)
}

/// Character at `index`, moved forward by `|offset|`.
pub fn rotate(alphabet: &str, index: usize, offset: i32) -> CodecResult<char> {
    let last = alphabet.chars().count() as i64 - 1;
    let max = last.max(0) as usize;
    if index as i64 > last {
        return Err(CodecError::InvalidIndex { index, max });
    }

    let mut new_index = index as i64 + i64::from(offset.unsigned_abs());
    if new_index > last {
        new_index -= last;
    }

    // offsets above 35 can still overshoot after a single wrap
    usize::try_from(new_index)
        .ok()
        .and_then(|i| alphabet.chars().nth(i))
        .ok_or(CodecError::InvalidIndex {
            index: new_index as usize,
            max,
        })
}

/// Index of the character that [`rotate`] moved onto `letter`.
///
/// `None` when `letter` is not part of the alphabet.
pub fn unrotate(alphabet: &str, letter: char, offset: i32) -> Option<usize> {
    let index = index_of(alphabet, letter)?;
    let last = alphabet.chars().count() as i64 - 1;
    let pad = i64::from(offset.unsigned_abs());

    let mut new_index = index as i64 - pad;
    // a zero pad leaves every letter where it is, 'a' included
    if pad != 0 && new_index <= 0 {
        new_index += last;
    }

    usize::try_from(new_index).ok()
}
