//! Number phrase resolution: folds runs of adjacent number tokens into
//! compound operand values ("twenty" "five" becomes 25).
//!
//! Two number tokens belong to the same phrase when nothing but noise sits
//! between them. An unmatched word breaks the phrase, except a connective
//! ("and") directly after a scale word: "one hundred and three" is 103, but
//! "twenty and five" stays two operands.

use crate::solver::matcher::{MatchToken, Span, TokenKind};
use crate::solver::vocabulary::Vocabulary;

/// A resolved numeric operand with the span it was assembled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand {
    pub value: f64,
    pub span: Span,
}

/// Accumulator for one compound number phrase.
struct Group {
    total: f64,
    current: f64,
    span: Span,
    /// True when the last merged word was a scale word; only then may a
    /// connective continue the phrase.
    after_scale: bool,
}

impl Group {
    fn start(value: f64, scale: bool, span: Span) -> Self {
        let mut group = Group { total: 0.0, current: 0.0, span, after_scale: false };
        group.merge(value, scale, span);
        group
    }

    /// Spoken-number accumulation: plain values add into `current`,
    /// "hundred" multiplies it, "thousand" banks `current * 1000` into
    /// `total` and starts a fresh sub-thousand part.
    fn merge(&mut self, value: f64, scale: bool, span: Span) {
        if scale {
            if value >= 1000.0 {
                self.total += self.current * value;
                self.current = 0.0;
            } else if self.current == 0.0 {
                self.current = value;
            } else {
                self.current *= value;
            }
        } else {
            self.current += value;
        }
        self.after_scale = scale;
        self.span.end = span.end;
    }

    fn finish(self) -> Operand {
        Operand { value: self.total + self.current, span: self.span }
    }
}

/// Walk the token stream in text order and return the operand candidates.
/// Operator tokens always end the phrase in progress.
pub fn resolve_operands(
    chars: &[char],
    tokens: &[MatchToken],
    vocab: &Vocabulary,
) -> Vec<Operand> {
    let mut operands = Vec::new();
    let mut group: Option<Group> = None;
    for tok in tokens {
        match tok.kind {
            TokenKind::Operator { .. } => {
                if let Some(g) = group.take() {
                    operands.push(g.finish());
                }
            }
            TokenKind::Number { value, scale } => match group.as_mut() {
                Some(g) if continues(chars, g.span.end, tok.span.start, g.after_scale, vocab) => {
                    g.merge(value, scale, tok.span);
                }
                _ => {
                    if let Some(g) = group.take() {
                        operands.push(g.finish());
                    }
                    group = Some(Group::start(value, scale, tok.span));
                }
            },
        }
    }
    if let Some(g) = group {
        operands.push(g.finish());
    }
    operands
}

/// True if the gap `[from, to)` joins two tokens of one phrase: only noise,
/// or (directly after a scale word) connectives and noise.
fn continues(chars: &[char], from: usize, to: usize, after_scale: bool, vocab: &Vocabulary) -> bool {
    let mut i = from;
    while i < to {
        if chars[i].is_ascii_alphabetic() {
            let start = i;
            while i < to && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if !(after_scale && vocab.is_connective(&word)) {
                return false;
            }
        } else {
            i += 1;
        }
    }
    true
}
