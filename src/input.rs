//! Parsing helpers for text front ends.
//!
//! Console adapters read bets, player counts, and actions as typed text.
//! Malformed numbers are never fatal: [`parse_count`] falls back to a
//! default the caller documents, and unknown actions are simply re-prompted.

use core::str::FromStr;

use crate::error::InputError;
use crate::game::Action;

/// Parses a non-negative integer, ignoring surrounding whitespace.
///
/// # Errors
///
/// Returns [`InputError::MalformedNumber`] if `text` is not an integer.
pub fn parse_number(text: &str) -> Result<usize, InputError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| InputError::MalformedNumber)
}

/// Parses a bet or player count, falling back to `default` on malformed
/// input.
///
/// # Example
///
/// ```
/// use shoebox::input::parse_count;
///
/// assert_eq!(parse_count(" 25 ", 5), 25);
/// assert_eq!(parse_count("lots", 5), 5);
/// ```
#[must_use]
pub fn parse_count(text: &str, default: usize) -> usize {
    parse_number(text).unwrap_or_else(|_| {
        log::warn!("could not read {:?} as a number, using {default}", text.trim());
        default
    })
}

impl FromStr for Action {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is_one_of = |names: &[&str]| names.iter().any(|name| s.eq_ignore_ascii_case(name));

        if is_one_of(&["hit", "h"]) {
            Ok(Self::Hit)
        } else if is_one_of(&["stand", "s"]) {
            Ok(Self::Stand)
        } else if is_one_of(&["split", "p"]) {
            Ok(Self::Split)
        } else if is_one_of(&["double down", "double", "d"]) {
            Ok(Self::DoubleDown)
        } else {
            Err(InputError::UnknownAction)
        }
    }
}
