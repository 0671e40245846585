use crosslib::io::{self, MatchProblem};
use crosslib::matching::{self, state::State, CostMode, Heuristic};

use colored::{Color, Colorize};
use std::path::PathBuf;

mod show;
pub use show::*;

mod solve;
pub use solve::*;

mod watch;
pub use watch::*;

/// All CLI commands available in this binary.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Solve a puzzle and print the outcome.
    #[command(alias = "s")]
    Solve(Solve),

    /// Stream every expanded search state to the terminal.
    #[command(alias = "w")]
    Watch(Watch),

    /// Validate a puzzle and print its initial layout.
    Show(Show),
}

impl Command {
    pub fn run(self) {
        match self {
            Command::Solve(args) => args.run(),
            Command::Watch(args) => args.run(),
            Command::Show(args) => args.run(),
        }
    }
}

/// Puzzle source and search overrides shared by all subcommands.
#[derive(clap::Args, Debug)]
pub struct PuzzleArgs {
    /// Path to the JSON or YAML puzzle file.
    path: Option<PathBuf>,

    /// Grid size for an inline puzzle, used when no file is given.
    #[arg(short = 'n', long)]
    size: Option<i64>,

    /// Inline pair as four 1-based numbers: "ROW,COL ROW,COL" (start, then
    /// end). May be repeated.
    #[arg(short, long = "pair", value_name = "PAIR")]
    pairs: Vec<String>,

    /// Heuristic override: null, manhattan-sum or manhattan-obstacles.
    #[arg(long)]
    heuristic: Option<String>,

    /// Cost mode override: plain or turn-penalty.
    #[arg(long)]
    cost_mode: Option<String>,

    /// Root node cost seed override.
    #[arg(long)]
    initial_cost: Option<usize>,
}

impl PuzzleArgs {
    /// Loads the puzzle description and applies command line overrides.
    fn load(&self) -> MatchProblem {
        let mut problem = if let Some(path) = &self.path {
            match MatchProblem::read_from_file(path) {
                Ok(problem) => problem,
                Err(err) => fatal_error!(1, "Cannot read puzzle: {}", err),
            }
        } else if let Some(size) = self.size {
            let mut pairs = Vec::new();
            for text in &self.pairs {
                match io::parse_pair(text) {
                    Ok(pair) => pairs.push(pair),
                    Err(err) => fatal_error!(1, "Cannot parse pair: {}", err),
                }
            }
            MatchProblem {
                name: None,
                size,
                pairs,
                heuristic: Heuristic::ManhattanSum,
                cost_mode: CostMode::default(),
                initial_cost: 0,
            }
        } else {
            fatal_error!(1, "Either a puzzle file or --size with --pair is required")
        };

        if let Some(heuristic) = &self.heuristic {
            problem.heuristic = match heuristic.as_str() {
                "null" => Heuristic::Null,
                "manhattan-sum" => Heuristic::ManhattanSum,
                "manhattan-obstacles" => Heuristic::ManhattanObstacles,
                other => fatal_error!(1, "Undefined heuristic: {}", other),
            };
        }
        if let Some(cost_mode) = &self.cost_mode {
            problem.cost_mode = match cost_mode.as_str() {
                "plain" => CostMode::Plain,
                "turn-penalty" => CostMode::TurnPenalty,
                other => fatal_error!(1, "Undefined cost mode: {}", other),
            };
        }
        if let Some(initial_cost) = self.initial_cost {
            problem.initial_cost = initial_cost;
        }
        problem
    }

    /// Builds the search-ready problem alongside its display name.
    fn prepare(&self) -> (String, matching::Problem) {
        let mut description = self.load();
        let name = description.name.take().unwrap_or_else(|| "-".to_string());
        match description.prepare() {
            Ok(problem) => (name, problem),
            Err(err) => fatal_error!(1, "Error while parsing puzzle: {}", err),
        }
    }
}

fn print_header(name: &str, problem: &matching::Problem) {
    println!("{:14}{}", "Puzzle Name:".bold(), name);
    println!("{:14}{}", "Grid Size:".bold(), problem.size);
    println!("{:14}{}", "Heuristic:".bold(), problem.config.heuristic);
    println!("{:14}{}", "Cost Mode:".bold(), problem.config.cost_mode);
    if problem.config.initial_cost != 0 {
        println!("{:14}{}", "Cost Seed:".bold(), problem.config.initial_cost);
    }
}

const PAIR_COLORS: [Color; 10] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightBlue,
    Color::BrightMagenta,
];

fn print_grid(state: &State) {
    for row in state.grid.rows() {
        for &cell in row.iter() {
            if cell == 0 {
                print!(" .");
            } else {
                let color = PAIR_COLORS[(cell as usize - 1) % PAIR_COLORS.len()];
                print!(" {}", cell.to_string().color(color));
            }
        }
        println!();
    }
}

/// One move in user-facing 1-based coordinates.
fn format_move(action: &matching::Action) -> String {
    format!(
        "pair {}: ({}, {})",
        action.pair + 1,
        action.dest.0 + 1,
        action.dest.1 + 1
    )
}
