use std::collections::HashSet;

use crate::puzzle::grid::{Grid, WORDS};
use crate::puzzle::line::Cell;

/// Minimum run length for a miss to count as an explicit wrong answer.
/// Shorter non-matching drags stay silent so stray taps never spam feedback.
const WRONG_MIN_CELLS: usize = 3;

/// What a released selection amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// A word from the list, not seen before this session.
    NewMatch(&'static str),
    /// A word from the list the player already has.
    AlreadyFound(&'static str),
    /// A long enough run that matches nothing.
    Wrong,
    /// Too short to judge; no feedback at all.
    Ignored,
}

/// Read the selected run (forward and reverse) against the word list.
pub fn evaluate(cells: &[Cell], grid: &Grid, found: &HashSet<&'static str>) -> MatchOutcome {
    let forward: String = cells.iter().map(|&cell| grid.letter(cell)).collect();
    let reverse: String = forward.chars().rev().collect();
    match WORDS.iter().find(|&&word| word == forward || word == reverse) {
        Some(&word) if found.contains(word) => MatchOutcome::AlreadyFound(word),
        Some(&word) => MatchOutcome::NewMatch(word),
        None if cells.len() >= WRONG_MIN_CELLS => MatchOutcome::Wrong,
        None => MatchOutcome::Ignored,
    }
}
