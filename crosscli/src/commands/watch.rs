/// Streaming the search frontier to the terminal.
use super::*;

use crosslib::matching::StreamItem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(clap::Args, Debug)]
pub struct Watch {
    #[command(flatten)]
    puzzle: PuzzleArgs,

    /// Milliseconds to wait between expanded states.
    #[arg(short, long, default_value_t = 100)]
    delay: u64,
}

impl Watch {
    pub fn run(self) {
        let (name, problem) = self.puzzle.prepare();
        print_header(&name, &problem);

        // Cooperative cancellation: Ctrl-C clears the flag and this loop
        // stops pulling from the stream.
        let running = Arc::new(AtomicBool::new(true));
        {
            let running = Arc::clone(&running);
            if let Err(e) = ctrlc::set_handler(move || running.store(false, Ordering::SeqCst)) {
                log::warn!("Cannot install Ctrl-C handler: {}", e);
            }
        }

        let mut step: usize = 0;
        let mut last = None;
        for item in matching::search(&problem) {
            if !running.load(Ordering::SeqCst) {
                println!("{}", "Interrupted.".yellow().bold());
                return;
            }
            match item {
                StreamItem::Node(node) => {
                    step += 1;
                    println!();
                    println!(
                        "{} {}    {} {}",
                        "Step:".bold(),
                        step,
                        "Path Cost:".bold(),
                        node.path_cost
                    );
                    print_grid(&node.state);
                    std::thread::sleep(Duration::from_millis(self.delay));
                    last = Some(node);
                }
                StreamItem::End => break,
            }
        }

        println!();
        match last {
            Some(node) if problem.is_goal(&node.state) => {
                println!("{}", "Solution found!".green().bold());
            }
            _ => println!("{}", "No solution found.".red().bold()),
        }
    }
}
