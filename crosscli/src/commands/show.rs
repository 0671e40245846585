/// Validating puzzles and printing their initial layout.
use super::*;

#[derive(clap::Args, Debug)]
pub struct Show {
    #[command(flatten)]
    puzzle: PuzzleArgs,
}

impl Show {
    pub fn run(self) {
        let (name, problem) = self.puzzle.prepare();
        print_header(&name, &problem);

        println!("{}", "Pairs:".bold());
        for (i, line) in problem.initial.lines.iter().enumerate() {
            println!(
                "  {}: ({}, {}) -> ({}, {})",
                i + 1,
                line.head.0 + 1,
                line.head.1 + 1,
                line.target.0 + 1,
                line.target.1 + 1
            );
        }
        print_grid(&problem.initial);
    }
}
