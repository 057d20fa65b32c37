//! Challenge solver: obfuscated arithmetic word problems in, two-decimal
//! answers out.
//!
//! The pipeline is normalize, then fuzzy-match vocabulary tokens, then
//! resolve number phrases and pick the operator, then evaluate. Everything
//! is pure computation over the input text: no I/O, no shared mutable
//! state, and the same input always produces the same result.

mod eval;
mod matcher;
mod normalize;
mod operator;
mod phrase;
pub mod vocabulary;


use std::sync::OnceLock;

use regex::Regex;

pub use eval::Answer;
use eval::ParsedExpression;
pub use vocabulary::Vocabulary;

/// Default matcher budget: the longest noise run skippable inside a word.
/// Challenge generators put one or two separators between letters; three
/// leaves headroom without letting a match wander across the sentence.
pub const DEFAULT_MAX_SKIP_RUN: usize = 3;

/// Tuning knobs for the solver.
#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// Longest run of consecutive noise characters the matcher may skip
    /// between two letters of one vocabulary word.
    pub max_skip_run: usize,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions { max_skip_run: DEFAULT_MAX_SKIP_RUN }
    }
}

impl SolverOptions {
    /// Defaults, with overrides from the environment (`MOLTCHA_MAX_SKIP`).
    pub fn from_env() -> Self {
        let mut options = SolverOptions::default();
        if let Ok(raw) = std::env::var("MOLTCHA_MAX_SKIP") {
            match raw.parse() {
                Ok(n) => options.max_skip_run = n,
                Err(_) => log::warn!("ignoring MOLTCHA_MAX_SKIP={raw:?}: not a number"),
            }
        }
        options
    }
}

/// Why a challenge could not be solved. Every variant is recoverable by
/// fetching a fresh challenge and trying again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error("no operator phrase recognized")]
    NoOperator,
    #[error("expected two numeric operands, found {found}")]
    NotEnoughOperands { found: usize },
    #[error("division by zero")]
    DivisionByZero,
}

/// A vocabulary plus matcher options, ready to solve challenges.
#[derive(Debug, Clone)]
pub struct Solver<'v> {
    vocab: &'v Vocabulary,
    options: SolverOptions,
}

impl<'v> Solver<'v> {
    pub fn new(vocab: &'v Vocabulary, options: SolverOptions) -> Self {
        Solver { vocab, options }
    }

    /// Solve one challenge text.
    pub fn solve(&self, challenge: &str) -> Result<Answer, SolveError> {
        let text = normalize::normalize(challenge);
        let chars: Vec<char> = text.chars().collect();
        let tokens = matcher::scan(&chars, self.vocab, self.options.max_skip_run);
        log::debug!("normalized {:?}: {} token(s)", text, tokens.len());

        let detected = operator::detect(&tokens).ok_or(SolveError::NoOperator)?;
        log::debug!(
            "operator {} at {}..{}",
            detected.op.symbol(),
            detected.span.start,
            detected.span.end
        );

        let operands = phrase::resolve_operands(&chars, &tokens, self.vocab);
        for extra in operands.iter().skip(2) {
            log::debug!(
                "ignoring extra operand {} at {}..{}",
                extra.value,
                extra.span.start,
                extra.span.end
            );
        }
        let mut values: Vec<f64> = operands.iter().take(2).map(|o| o.value).collect();
        if values.len() < 2 {
            let raw = fallback_numbers(&text);
            if raw.len() >= 2 {
                log::debug!(
                    "{} operand(s) from the phrase pass, falling back to {} raw literal(s)",
                    values.len(),
                    raw.len()
                );
                values = raw;
            } else {
                return Err(SolveError::NotEnoughOperands { found: values.len().max(raw.len()) });
            }
        }

        let (left, right) = operator::assign(detected.role, values[0], values[1]);
        let answer = eval::evaluate(&ParsedExpression { left, right, op: detected.op })?;
        log::debug!("{} {} {} = {}", left, detected.op.symbol(), right, answer);
        Ok(answer)
    }
}

impl Default for Solver<'static> {
    fn default() -> Self {
        Solver::new(Vocabulary::builtin(), SolverOptions::default())
    }
}

/// Last-resort operand source: every numeric literal in the text, in order.
/// Used only when the phrase pass produces fewer than two operands.
fn fallback_numbers(text: &str) -> Vec<f64> {
    static NUMBER: OnceLock<Regex> = OnceLock::new();
    let re = NUMBER.get_or_init(|| Regex::new(r"-?\d+\.?\d*").expect("static pattern is valid"));
    re.find_iter(text).filter_map(|m| m.as_str().parse().ok()).collect()
}
