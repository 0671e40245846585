//! # Cross-Line Matching Library
//!
//! Common functionality for the cross-line matching CLI: the puzzle state
//! model, the informed best-first search over it, and problem input handling.

use serde::{Deserialize, Serialize};

pub mod io;
pub mod matching;
pub mod types;

/// Represents the reasons why a puzzle description might be rejected.
///
/// All variants are raised while a problem is being built; a running search
/// has no error states of its own.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", content = "content")]
pub enum InputError {
    /// Grid size outside `[2, 10]`.
    InvalidGridSize(i64),
    /// Pair count outside `[1, 10]`.
    InvalidPairCount(usize),
    /// An endpoint of the given pair (1-based) lies outside the grid.
    InvalidCoordinates(usize),
    /// Non-integer text where a number was expected.
    MalformedNumericInput(String),
}

impl std::error::Error for InputError {}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            InputError::InvalidGridSize(size) => {
                write!(f, "Grid size must be between 2 and 10, got {}", size)
            }
            InputError::InvalidPairCount(count) => {
                write!(f, "Number of pairs must be between 1 and 10, got {}", count)
            }
            InputError::InvalidCoordinates(pair) => {
                write!(f, "Invalid coordinates for pair {}", pair)
            }
            InputError::MalformedNumericInput(text) => {
                write!(f, "Malformed numeric input: {:?}", text)
            }
        }
    }
}
