//! Command bodies: logger init, solve, batch, and the vocabulary listing.

use std::io::{self, BufRead};

use crate::cli::Args;
use crate::protocol::{VerificationAnswer, VerificationChallenge};
use crate::solver::vocabulary::EntryPayload;
use crate::solver::{Solver, SolverOptions, Vocabulary};

/// Initialize env_logger from the -v/-q flags. RUST_LOG overrides both.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

/// Solver options: built-in defaults, then the environment, then the flag.
fn solver_options(max_skip: Option<usize>) -> SolverOptions {
    let mut options = SolverOptions::from_env();
    if let Some(n) = max_skip {
        options.max_skip_run = n;
    }
    options
}

/// Run `solve`: print the answer (bare or as JSON) to stdout. An unsolvable
/// challenge is a message on stderr and exit code 1.
pub fn run_solve(
    text: &str,
    max_skip: Option<usize>,
    json: bool,
    code: Option<String>,
    envelope: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = if text == "-" {
        io::read_to_string(io::stdin())?
    } else {
        text.to_string()
    };
    let text = text.trim();
    if text.is_empty() {
        eprintln!("Error: empty challenge text");
        std::process::exit(1);
    }

    let solver = Solver::new(Vocabulary::builtin(), solver_options(max_skip));

    if envelope {
        let resp: serde_json::Value = serde_json::from_str(text).unwrap_or_else(|e| {
            eprintln!("Error: invalid response JSON: {}", e);
            std::process::exit(1);
        });
        let Some(challenge) = VerificationChallenge::from_response(&resp) else {
            eprintln!("Error: response carries no verification challenge");
            std::process::exit(1);
        };
        let payload = challenge.answer(&solver).unwrap_or_else(|e| {
            eprintln!("Error: could not solve challenge: {}", e);
            std::process::exit(1);
        });
        println!("{}", serde_json::to_string(&payload)?);
        return Ok(());
    }

    let answer = solver.solve(text).unwrap_or_else(|e| {
        eprintln!("Error: could not solve challenge: {}", e);
        std::process::exit(1);
    });

    if let Some(code) = code {
        let payload = VerificationAnswer::new(code, &answer);
        println!("{}", serde_json::to_string(&payload)?);
    } else if json {
        println!("{}", serde_json::json!({ "answer": answer.to_string() }));
    } else {
        println!("{}", answer);
    }
    Ok(())
}

/// Run `batch`: one challenge per stdin line, one stdout line per challenge,
/// `unsolvable` for the ones that fail. Failures are data here, not errors,
/// so the exit code stays 0 and output lines align with input lines.
pub fn run_batch(max_skip: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let solver = Solver::new(Vocabulary::builtin(), solver_options(max_skip));
    for line in io::stdin().lock().lines() {
        let line = line?;
        match solver.solve(&line) {
            Ok(answer) => println!("{}", answer),
            Err(e) => {
                log::info!("unsolvable {:?}: {}", line.trim(), e);
                println!("unsolvable");
            }
        }
    }
    Ok(())
}

/// Run `vocab`: print every entry the built-in table recognizes.
pub fn run_vocab() {
    let vocab = Vocabulary::builtin();

    println!("Number words:");
    for entry in vocab.entries() {
        if let EntryPayload::Number { value, .. } = entry.payload {
            println!("  {:<12} {}", entry.phrase, value);
        }
    }

    println!();
    println!("Operator phrases:");
    for entry in vocab.entries() {
        if let EntryPayload::Operator { op, role } = entry.payload {
            println!("  {:<16} {}  {}", entry.phrase, op.symbol(), role);
        }
    }

    println!();
    println!("Connectives:");
    for word in vocab.connectives() {
        println!("  {}", word);
    }
}
