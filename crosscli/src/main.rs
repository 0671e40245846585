use clap::Parser;

/// Print the error and exit with the given code.
macro_rules! fatal_error {
    ($code:expr, $($arg:tt)*) => {{
        eprintln!($($arg)*);
        ::std::process::exit($code)
    }};
}

mod commands;

/// Command line interface for the cross-line matching solver.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[command(subcommand)]
    command: commands::Command,
}

fn main() {
    env_logger::init();
    Args::parse().command.run();
}
