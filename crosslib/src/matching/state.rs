use super::*;

use itertools::Itertools;
use ndarray::Array2;

/// One terminal pair: the advancing head and its fixed target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub head: Cell,
    pub target: Cell,
}

impl Line {
    /// A pair is complete once its head has reached its target.
    pub fn is_complete(&self) -> bool {
        self.head == self.target
    }
}

/// Full puzzle configuration.
///
/// States are deep-copied on every transition; once a node holds a state, no
/// other node can observe it change.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    /// Cell ownership. 0 is unclaimed, otherwise pair index + 1. A claimed
    /// cell never reverts for the remainder of a run.
    pub grid: Array2<PairId>,
    /// One entry per pair, in input order.
    pub lines: Vec<Line>,
    /// The single pair currently allowed to move; `None` once every pair is
    /// complete.
    pub active: Option<PairIndex>,
}

impl State {
    /// Builds the state before any move. Both endpoints of every pair are
    /// stamped on the grid; on conflicting endpoints the later pair wins.
    pub fn initial(size: Coord, pairs: &[(Cell, Cell)]) -> State {
        let mut grid = Array2::zeros((size, size));
        let mut lines = Vec::with_capacity(pairs.len());
        for (i, &(start, target)) in pairs.iter().enumerate() {
            grid[(start.0, start.1)] = (i + 1) as PairId;
            grid[(target.0, target.1)] = (i + 1) as PairId;
            lines.push(Line {
                head: start,
                target,
            });
        }
        let active = lines.iter().position(|line| !line.is_complete());
        State {
            grid,
            lines,
            active,
        }
    }

    /// Applies a legal move: claims the destination cell, advances the acting
    /// pair's head and hands the turn to the next incomplete pair.
    pub fn apply(&self, action: &Action) -> State {
        let mut next = self.clone();
        next.grid[(action.dest.0, action.dest.1)] = (action.pair + 1) as PairId;
        next.lines[action.pair].head = action.dest;
        next.active = next_active_line(&next.lines, action.pair);
        next
    }

    /// True when no pair may move and every head sits on its target.
    pub fn is_goal(&self) -> bool {
        self.active.is_none() && self.lines.iter().all(Line::is_complete)
    }

    /// Canonical encoding used as the closed-set key. Covers the grid, every
    /// pair's endpoints and the active index; structurally equal states
    /// always encode identically.
    pub fn encode(&self) -> String {
        let grid = self.grid.iter().join(",");
        let lines = self
            .lines
            .iter()
            .map(|line| {
                format!(
                    "{},{},{},{}",
                    line.head.0, line.head.1, line.target.0, line.target.1
                )
            })
            .join(";");
        match self.active {
            Some(index) => format!("{}|{}|{}", grid, lines, index),
            None => format!("{}|{}|-", grid, lines),
        }
    }
}

/// Next incomplete pair, scanning cyclically from just after `moved`.
///
/// The cyclic scan is what makes pair turns round-robin instead of letting
/// one pair run to completion first.
pub fn next_active_line(lines: &[Line], moved: PairIndex) -> Option<PairIndex> {
    for index in moved + 1..lines.len() {
        if !lines[index].is_complete() {
            return Some(index);
        }
    }
    for index in 0..=moved {
        if !lines[index].is_complete() {
            return Some(index);
        }
    }
    None
}
