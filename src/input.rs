//! Human input: parsing and the re-prompt loops built on it.
//!
//! Parsing never fails the game. Each parser returns an [`EntryError`] whose
//! message is shown to the player before asking again. Only a closed or broken
//! input stream ([`InputError`]) leaves a prompt loop without a value.

use crate::cards::Card;
use crate::console::{Console, Tone};

/// Why a line of human input was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("Invalid input! Please enter an integer.")]
    NotInteger(String),
    #[error("Number must be between {min} and {max}.")]
    OutOfRange { min: i64, max: i64, got: i64 },
    #[error("Index out of range.")]
    IndexOutOfRange { got: i64, len: usize },
    #[error("Index already chosen.")]
    Duplicate(usize),
}

/// Input could not be obtained at all.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputError {
    #[error("input closed")]
    Closed,
    #[error("no human at this table")]
    Unavailable,
    #[error("input error: {0}")]
    Io(String),
}

/// Parse an integer within `min..=max`.
///
/// ```
/// use bluff_bomb::input::{parse_bounded_int, EntryError};
///
/// assert_eq!(parse_bounded_int(" 2 ", 1, 3), Ok(2));
/// assert!(matches!(parse_bounded_int("4", 1, 3), Err(EntryError::OutOfRange { .. })));
/// assert!(matches!(parse_bounded_int("two", 1, 3), Err(EntryError::NotInteger(_))));
/// ```
pub fn parse_bounded_int(text: &str, min: i64, max: i64) -> Result<i64, EntryError> {
    let t = text.trim();
    let n: i64 = t.parse().map_err(|_| EntryError::NotInteger(t.to_string()))?;
    if n < min || n > max {
        return Err(EntryError::OutOfRange { min, max, got: n });
    }
    Ok(n)
}

/// Parse a 1-based hand index into a 0-based one not already in `chosen`.
pub fn parse_index(text: &str, hand_len: usize, chosen: &[usize]) -> Result<usize, EntryError> {
    let t = text.trim();
    let n: i64 = t.parse().map_err(|_| EntryError::NotInteger(t.to_string()))?;
    if n < 1 || n > hand_len as i64 {
        return Err(EntryError::IndexOutOfRange { got: n, len: hand_len });
    }
    let idx = (n - 1) as usize;
    if chosen.contains(&idx) {
        return Err(EntryError::Duplicate(idx));
    }
    Ok(idx)
}

/// `y` or `Y` as the first non-blank character means yes; anything else is no.
pub fn parse_yes(text: &str) -> bool {
    text.trim_start().chars().next().is_some_and(|c| c.eq_ignore_ascii_case(&'y'))
}

fn read_line<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<String, InputError> {
    console.prompt(prompt)?.ok_or(InputError::Closed)
}

fn complain<C: Console + ?Sized>(console: &mut C, err: &EntryError) {
    console.say(Tone::Warning, &format!("{err}\nTry again."));
}

/// Ask until the reply is an integer in `min..=max`.
pub fn prompt_bounded_int<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
    min: i64,
    max: i64,
) -> Result<i64, InputError> {
    loop {
        let line = read_line(console, prompt)?;
        match parse_bounded_int(&line, min, max) {
            Ok(n) => return Ok(n),
            Err(e) => complain(console, &e),
        }
    }
}

/// Show `hand` numbered from 1, then collect `count` distinct indices.
///
/// Returns 0-based indices in the order they were chosen. The hand itself is
/// never touched here.
pub fn prompt_card_indices<C: Console + ?Sized>(
    console: &mut C,
    hand: &[Card],
    count: usize,
) -> Result<Vec<usize>, InputError> {
    let count = count.min(hand.len());
    let mut chosen: Vec<usize> = Vec::with_capacity(count);
    while chosen.len() < count {
        let line = read_line(console, &format!("Enter index #{}: ", chosen.len() + 1))?;
        match parse_index(&line, hand.len(), &chosen) {
            Ok(idx) => chosen.push(idx),
            Err(e) => complain(console, &e),
        }
    }
    Ok(chosen)
}

pub fn prompt_yes_no<C: Console + ?Sized>(
    console: &mut C,
    prompt: &str,
) -> Result<bool, InputError> {
    let line = read_line(console, prompt)?;
    Ok(parse_yes(&line))
}
