//! Cross-line matching puzzle and its informed best-first search.
//!
//! A puzzle consists of terminal pairs on an `n`×`n` grid. Each pair advances
//! a head from its start cell towards its fixed target cell, one step at a
//! time; a cell claimed by any pair stays claimed forever. Exactly one pair is
//! movable in any state, chosen round-robin, which keeps the branching factor
//! at four or less.

mod frontier;
mod heuristics;
mod node;
mod search;
pub mod state;

pub use frontier::*;
pub use heuristics::*;
pub use node::*;
pub use search::*;
use state::*;

use crate::types::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

#[cfg(not(feature = "hashbrown"))]
use std::collections::{HashMap, HashSet};

#[cfg(feature = "hashbrown")]
use hashbrown::{HashMap, HashSet};


#[cfg(test)]
mod integration_tests;

/// A cell on the grid as `(row, column)`, 0-based.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell(pub Coord, pub Coord);

impl Cell {
    /// Manhattan distance to another cell.
    pub fn manhattan_to(&self, other: &Cell) -> Cost {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1)
    }
}

/// The four orthogonal move directions.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Direction of a single-step move from `from` to `to`, if the cells are
    /// orthogonal neighbors.
    pub fn between(from: &Cell, to: &Cell) -> Option<Direction> {
        let delta_row = to.0 as isize - from.0 as isize;
        let delta_col = to.1 as isize - from.1 as isize;
        match (delta_row, delta_col) {
            (-1, 0) => Some(Direction::Up),
            (1, 0) => Some(Direction::Down),
            (0, 1) => Some(Direction::Right),
            (0, -1) => Some(Direction::Left),
            _ => None,
        }
    }
}

/// Extends the head of one pair to an adjacent cell.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub pair: PairIndex,
    pub dest: Cell,
}

/// Step cost accounting mode.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum CostMode {
    /// Every step costs 1.
    Plain,
    /// Every step costs 1, plus 2 whenever the acting pair's direction
    /// differs from its previously recorded one. The first move of a pair is
    /// never penalized.
    TurnPenalty,
}

impl Default for CostMode {
    fn default() -> Self {
        CostMode::Plain
    }
}

impl fmt::Display for CostMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CostMode::Plain => write!(f, "plain"),
            CostMode::TurnPenalty => write!(f, "turn-penalty"),
        }
    }
}

/// Search configuration.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Remaining-cost estimator.
    pub heuristic: Heuristic,
    /// Step cost accounting mode.
    pub cost_mode: CostMode,
    /// Cost assigned to the root node. Anything other than 0 offsets the
    /// reported cost of every node, since children accumulate from it.
    pub initial_cost: Cost,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            heuristic: Heuristic::ManhattanSum,
            cost_mode: CostMode::Plain,
            initial_cost: 0,
        }
    }
}

/// A cross-line matching problem bound to a search configuration.
#[derive(Clone, Debug)]
pub struct Problem {
    /// Grid dimension.
    pub size: Coord,
    /// The state before any move.
    pub initial: State,
    pub config: Config,
}

impl Problem {
    /// New problem from 0-based `(start, target)` endpoints, one per pair.
    pub fn new(size: Coord, pairs: Vec<(Cell, Cell)>, config: Config) -> Problem {
        Problem {
            size,
            initial: State::initial(size, &pairs),
            config,
        }
    }

    fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as Coord) < self.size && (col as Coord) < self.size
    }

    /// Legal single-step moves in the given state.
    ///
    /// Only the active pair may move. A destination is legal when it is on
    /// the grid and either unclaimed or the active pair's own target.
    pub fn actions(&self, state: &State) -> Vec<Action> {
        let active = match state.active {
            Some(index) => index,
            None => return Vec::new(),
        };
        let line = &state.lines[active];
        if line.is_complete() {
            return Vec::new();
        }
        let Cell(row, col) = line.head;
        let (row, col) = (row as isize, col as isize);
        let candidates = [
            (row - 1, col),
            (row + 1, col),
            (row, col - 1),
            (row, col + 1),
        ];
        let mut actions = Vec::new();
        for (row, col) in candidates {
            if !self.in_bounds(row, col) {
                continue;
            }
            let dest = Cell(row as Coord, col as Coord);
            if state.grid[(dest.0, dest.1)] == 0 || dest == line.target {
                actions.push(Action { pair: active, dest });
            }
        }
        actions
    }

    /// Applies a legal move, returning the successor state. Pure; the input
    /// state is never aliased by the result.
    pub fn apply(&self, state: &State, action: &Action) -> State {
        state.apply(action)
    }

    /// True when no pair may move and every head sits on its target.
    pub fn is_goal(&self, state: &State) -> bool {
        state.is_goal()
    }

    /// Accumulated cost of reaching the child produced by moving `pair` in
    /// `direction` from `parent`.
    pub fn step_cost(
        &self,
        parent: &Node,
        pair: PairIndex,
        direction: Option<Direction>,
    ) -> Cost {
        let mut base: Cost = 1;
        if self.config.cost_mode == CostMode::TurnPenalty {
            if let Some(last) = parent.directions.get(&pair) {
                if direction != Some(*last) {
                    base += 2;
                }
            }
        }
        parent.depth + base
    }

    /// Heuristic estimate of the remaining cost from `state` to the goal.
    pub fn estimate(&self, state: &State) -> Cost {
        self.config.heuristic.estimate(state)
    }

    /// All children of a node, in action order.
    pub fn expand(&self, node: &Rc<Node>) -> Vec<Node> {
        self.actions(&node.state)
            .into_iter()
            .map(|action| node.child(self, action))
            .collect()
    }

    /// Moves leading from the initial state to the given node, root excluded.
    pub fn solution(&self, goal: &Rc<Node>) -> Vec<Action> {
        goal.path().iter().filter_map(|node| node.action).collect()
    }
}

/// Summary of a completed run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    /// Number of nodes handed to the consumer, the duplicated goal yield
    /// included.
    pub steps: usize,
    /// Cost of the goal node, when one was reached.
    pub cost: Option<Cost>,
    /// Moves from the initial state to the goal, when one was reached.
    pub moves: Option<Vec<Action>>,
    /// Wall-clock duration of the run in seconds.
    pub total_time: f64,
}

/// Lazily searches the problem.
///
/// The returned iterator yields every node popped from the open list, the
/// goal node a second time when one is found, and a final [`StreamItem::End`]
/// sentinel.
pub fn search(problem: &Problem) -> SearchStream<'_> {
    SearchStream::new(problem)
}

/// Runs the search to completion and summarizes the outcome.
pub fn solve(problem: &Problem) -> SolveReport {
    let start_time = Instant::now();

    let mut steps: usize = 0;
    let mut last: Option<Rc<Node>> = None;
    for item in search(problem) {
        match item {
            StreamItem::Node(node) => {
                steps += 1;
                last = Some(node);
            }
            StreamItem::End => break,
        }
    }

    let mut report = SolveReport {
        steps,
        cost: None,
        moves: None,
        total_time: start_time.elapsed().as_secs_f64(),
    };
    if let Some(goal) = last {
        if problem.is_goal(&goal.state) {
            report.cost = Some(goal.path_cost);
            report.moves = Some(problem.solution(&goal));
        }
    }
    log::info!(
        "Search finished after {} steps, solution {}",
        steps,
        if report.cost.is_some() { "found" } else { "not found" }
    );
    report
}
