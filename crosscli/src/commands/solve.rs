/// Solving puzzles and reporting the outcome.
use super::*;

#[derive(clap::Args, Debug)]
pub struct Solve {
    #[command(flatten)]
    puzzle: PuzzleArgs,

    /// Print the report as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

impl Solve {
    pub fn run(self) {
        let (name, problem) = self.puzzle.prepare();
        print_header(&name, &problem);

        let report = matching::solve(&problem);

        println!("{:14}{}", "Steps:".bold(), report.steps);
        println!("{:14}{:.3}s", "Total Time:".bold(), report.total_time);
        match (&report.cost, &report.moves) {
            (Some(cost), Some(moves)) => {
                println!("{}", "Solution found!".green().bold());
                println!("{:14}{}", "Path Cost:".bold(), cost);
                for action in moves {
                    println!("  {}", format_move(action));
                }
            }
            _ => println!("{}", "No solution found.".red().bold()),
        }

        if self.json {
            let serialized = match serde_json::to_string_pretty(&report) {
                Ok(serialized) => serialized,
                Err(e) => fatal_error!(1, "Error while serializing report: {}", e),
            };
            println!("{}", serialized);
        }
    }
}
