//! # moltcha - Moltbook verification challenge solver
//!
//! Moltbook gates new posts and comments behind a verification challenge: a
//! short arithmetic word problem obfuscated with randomized case, symbol
//! noise, and words shattered across stray separators. This binary recovers
//! the intended arithmetic and prints the two-decimal answer the verifier
//! expects.
//!
//! ## Commands
//! - `solve` one challenge (argument or stdin)
//! - `batch` a stream of challenges, one per line
//! - `vocab` to list the recognized vocabulary
//! - `completions` to generate shell completion scripts

mod cli;
mod protocol;
mod run;
mod solver;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match args.command {
        Commands::Solve { text, max_skip, json, code, envelope } => {
            run::run_solve(&text, max_skip, json, code, envelope)
        }
        Commands::Batch { max_skip } => run::run_batch(max_skip),
        Commands::Vocab => {
            run::run_vocab();
            Ok(())
        }
        Commands::Completions { shell } => {
            let mut cmd = Args::command();
            let name = cmd.get_name().to_string();
            cli::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    }
}
