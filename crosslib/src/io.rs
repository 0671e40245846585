//! Input output module.
//!
//! Contains the serde representation of puzzle files and its validated
//! conversion into a search-ready problem.

use crate::matching::{self, Cell, Config, CostMode, Heuristic};
use crate::types::{Coord, Cost};
use crate::InputError;

use serde::{Deserialize, Serialize};
use std::path::Path;


/// Bounds accepted for the grid dimension.
pub const GRID_SIZE_RANGE: std::ops::RangeInclusive<i64> = 2..=10;
/// Bounds accepted for the number of pairs.
pub const PAIR_COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=10;

/// A 1-based `(row, column)` coordinate as written in puzzle files.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate(pub i64, pub i64);

/// One terminal pair in a puzzle file.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub start: Coordinate,
    pub end: Coordinate,
}

/// File representation of a cross-line matching puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchProblem {
    pub name: Option<String>,
    pub size: i64,
    pub pairs: Vec<Pair>,
    /// Remaining-cost estimator. Defaults to the Manhattan sum.
    #[serde(default = "default_heuristic")]
    pub heuristic: Heuristic,
    #[serde(default, rename = "costMode")]
    pub cost_mode: CostMode,
    /// Cost seeded into the root node. Defaults to 0.
    #[serde(default, rename = "initialCost")]
    pub initial_cost: Cost,
}

fn default_heuristic() -> Heuristic {
    Heuristic::ManhattanSum
}

impl MatchProblem {
    /// Validates the puzzle and converts it into a search-ready problem with
    /// 0-based coordinates.
    ///
    /// Endpoints that duplicate or overlap across pairs are accepted; the
    /// later pair wins the contested grid cell.
    pub fn prepare(self) -> Result<matching::Problem, InputError> {
        let MatchProblem {
            name: _,
            size,
            pairs,
            heuristic,
            cost_mode,
            initial_cost,
        } = self;

        if !GRID_SIZE_RANGE.contains(&size) {
            return Err(InputError::InvalidGridSize(size));
        }
        if !PAIR_COUNT_RANGE.contains(&pairs.len()) {
            return Err(InputError::InvalidPairCount(pairs.len()));
        }

        let size = size as Coord;
        let mut endpoints = Vec::with_capacity(pairs.len());
        for (i, pair) in pairs.iter().enumerate() {
            match (
                to_zero_based(&pair.start, size),
                to_zero_based(&pair.end, size),
            ) {
                (Some(start), Some(end)) => endpoints.push((start, end)),
                _ => return Err(InputError::InvalidCoordinates(i + 1)),
            }
        }

        Ok(matching::Problem::new(
            size,
            endpoints,
            Config {
                heuristic,
                cost_mode,
                initial_cost,
            },
        ))
    }

    /// Reads a puzzle from a JSON or YAML file, chosen by extension.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<MatchProblem> {
        let content = std::fs::read_to_string(&path)?;
        let extension = path
            .as_ref()
            .extension()
            .and_then(|extension| extension.to_str());
        let problem = match extension {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?,
            Some("json") => serde_json::from_str(&content)?,
            _ => {
                log::warn!("Unrecognized puzzle file extension, assuming JSON");
                serde_json::from_str(&content)?
            }
        };
        Ok(problem)
    }
}

/// 1-based file coordinate to 0-based cell; `None` when outside `[1, size]`.
fn to_zero_based(coordinate: &Coordinate, size: Coord) -> Option<Cell> {
    let Coordinate(row, col) = *coordinate;
    if row < 1 || col < 1 || row > size as i64 || col > size as i64 {
        return None;
    }
    Some(Cell((row - 1) as Coord, (col - 1) as Coord))
}

/// Parses a textual pair such as `"1,1 3,3"` or `"1 1 3 3"`: four 1-based
/// integers, start row and column before end row and column.
pub fn parse_pair(text: &str) -> Result<Pair, InputError> {
    let mut numbers = Vec::new();
    for part in text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
    {
        match part.parse::<i64>() {
            Ok(value) => numbers.push(value),
            Err(_) => return Err(InputError::MalformedNumericInput(text.to_string())),
        }
    }
    if numbers.len() != 4 {
        return Err(InputError::MalformedNumericInput(text.to_string()));
    }
    Ok(Pair {
        start: Coordinate(numbers[0], numbers[1]),
        end: Coordinate(numbers[2], numbers[3]),
    })
}
