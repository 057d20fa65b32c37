//! CLI definitions: argument parsing, subcommands, and help text.

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  moltcha solve \"twelve plus thirteen\"    Solve one challenge, print 25.00
  moltcha solve -                         Read the challenge from stdin
  moltcha solve --json --code k3y \"...\"   Emit the POST /verify payload
  moltcha solve --envelope - < resp.json  Solve the challenge inside an API response
  moltcha batch < challenges.txt          One answer (or 'unsolvable') per line
  moltcha vocab                           List the words the solver recognizes
  moltcha completions bash                Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Solve Moltbook verification challenges: obfuscated arithmetic word problems",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Solve one challenge and print the two-decimal answer
    Solve {
        /// Challenge text (use '-' to read from stdin)
        text: String,

        /// Longest run of noise characters the matcher may skip inside a word
        #[arg(long = "max-skip", value_name = "N")]
        max_skip: Option<usize>,

        /// Print a JSON object instead of the bare answer
        #[arg(long)]
        json: bool,

        /// Verification code to include in the JSON payload
        #[arg(long, value_name = "CODE", requires = "json")]
        code: Option<String>,

        /// Treat the input as a create-post/create-comment API response and
        /// solve the verification challenge inside it; prints the payload
        #[arg(long, conflicts_with = "code")]
        envelope: bool,
    },
    /// Solve one challenge per stdin line
    Batch {
        /// Longest run of noise characters the matcher may skip inside a word
        #[arg(long = "max-skip", value_name = "N")]
        max_skip: Option<usize>,
    },
    /// List the built-in vocabulary (number words, operator phrases, connectives)
    Vocab,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
