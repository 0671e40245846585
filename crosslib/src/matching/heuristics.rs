use super::*;

/// Remaining-cost estimators, applied to the full state. Complete pairs
/// contribute nothing.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Always 0; degrades the search to uniform-cost exploration.
    Null,
    /// Sum of Manhattan distances from each head to its target. A lower bound
    /// on the remaining cost only while no other pair blocks the way and no
    /// turn penalty applies.
    ManhattanSum,
    /// Manhattan distance plus 2 per obstacle on the less obstructed of the
    /// two L-shaped lattice paths between head and target. More informed near
    /// congestion, but not admissible.
    ManhattanObstacles,
}

impl Heuristic {
    pub fn estimate(&self, state: &State) -> Cost {
        match self {
            Heuristic::Null => 0,
            Heuristic::ManhattanSum => manhattan_sum(state),
            Heuristic::ManhattanObstacles => manhattan_obstacles(state),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Heuristic::Null => write!(f, "null"),
            Heuristic::ManhattanSum => write!(f, "manhattan-sum"),
            Heuristic::ManhattanObstacles => write!(f, "manhattan-obstacles"),
        }
    }
}

fn manhattan_sum(state: &State) -> Cost {
    state
        .lines
        .iter()
        .map(|line| line.head.manhattan_to(&line.target))
        .sum()
}

/// Cells of the L-shaped lattice path from `start` to `end` that walks rows
/// first, then columns. Includes the starting cell, excludes the final one;
/// the corner cell appears twice when both legs are non-degenerate.
fn rows_first_path(start: &Cell, end: &Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let (start_row, start_col) = (start.0 as isize, start.1 as isize);
    let (end_row, end_col) = (end.0 as isize, end.1 as isize);

    let step = if end_row > start_row { 1 } else { -1 };
    let mut row = start_row;
    while row != end_row {
        path.push(Cell(row as Coord, start_col as Coord));
        row += step;
    }
    path.push(Cell(end_row as Coord, start_col as Coord));

    let step = if end_col > start_col { 1 } else { -1 };
    let mut col = start_col;
    while col != end_col {
        path.push(Cell(end_row as Coord, col as Coord));
        col += step;
    }
    path
}

/// Mirror of [`rows_first_path`]: columns first, then rows.
fn cols_first_path(start: &Cell, end: &Cell) -> Vec<Cell> {
    let mut path = Vec::new();
    let (start_row, start_col) = (start.0 as isize, start.1 as isize);
    let (end_row, end_col) = (end.0 as isize, end.1 as isize);

    let step = if end_col > start_col { 1 } else { -1 };
    let mut col = start_col;
    while col != end_col {
        path.push(Cell(start_row as Coord, col as Coord));
        col += step;
    }
    path.push(Cell(start_row as Coord, end_col as Coord));

    let step = if end_row > start_row { 1 } else { -1 };
    let mut row = start_row;
    while row != end_row {
        path.push(Cell(row as Coord, end_col as Coord));
        row += step;
    }
    path
}

/// Number of cells on `path` claimed by another pair. The target cell and
/// cells already claimed by the pair itself are not obstacles.
fn count_obstacles(state: &State, path: &[Cell], target: &Cell, pair: PairIndex) -> usize {
    let own = (pair + 1) as PairId;
    path.iter()
        .filter(|cell| {
            if *cell == target || state.grid[(cell.0, cell.1)] == own {
                return false;
            }
            state.grid[(cell.0, cell.1)] != 0
        })
        .count()
}

fn manhattan_obstacles(state: &State) -> Cost {
    let mut total = 0;
    for (pair, line) in state.lines.iter().enumerate() {
        if line.is_complete() {
            continue;
        }
        let distance = line.head.manhattan_to(&line.target);
        let rows_first = rows_first_path(&line.head, &line.target);
        let cols_first = cols_first_path(&line.head, &line.target);
        let obstacles = std::cmp::min(
            count_obstacles(state, &rows_first, &line.target, pair),
            count_obstacles(state, &cols_first, &line.target, pair),
        );
        total += distance + 2 * obstacles;
    }
    total
}
