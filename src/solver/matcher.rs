//! Fuzzy vocabulary matching over normalized text.
//!
//! Challenge words arrive shattered: `t!w!e!n!t!y` must still read as
//! "twenty". Each vocabulary entry is matched as its bare letter sequence,
//! and between two consecutive letters the matcher may skip one run of noise
//! characters up to the configured budget. Digits are data, never noise:
//! they terminate a word match and are lexed as literals instead.
//!
//! The scan is a single left-to-right pass producing non-overlapping tokens.
//! At each candidate position the winner is chosen by maximal munch: most
//! letters consumed, then fewest noise characters skipped, then vocabulary
//! order. Matches must not butt against ASCII letters on either side, so
//! "ten" never fires inside "attention".

use crate::solver::vocabulary::{Entry, EntryPayload, Op, OperandRole, Vocabulary};

/// Half-open range of char indices into the normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// What a token resolved to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A number word or digit literal. `scale` is true for multiplier words
    /// (hundred, thousand).
    Number { value: f64, scale: bool },
    /// An operator phrase.
    Operator { op: Op, role: OperandRole },
}

/// One recognized occurrence in the normalized text.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchToken {
    pub kind: TokenKind,
    pub span: Span,
    /// Noise characters skipped while matching. Zero for digit literals and
    /// for words that arrive intact.
    pub cost: usize,
}

/// Noise is anything that is not an ASCII letter or digit.
fn is_noise(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

/// Scan normalized text (as chars) left to right and return every token, in
/// text order. Tokens never overlap: the scan resumes after each match.
pub fn scan(chars: &[char], vocab: &Vocabulary, max_skip_run: usize) -> Vec<MatchToken> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        let c = chars[pos];
        if c.is_ascii_alphabetic() {
            let at_boundary = pos == 0 || !chars[pos - 1].is_ascii_alphabetic();
            if at_boundary
                && let Some(tok) = best_word_match(chars, pos, vocab, max_skip_run)
            {
                log::trace!("token {:?} at {}..{}", tok.kind, tok.span.start, tok.span.end);
                pos = tok.span.end;
                tokens.push(tok);
            } else {
                // No entry starts here; nothing can start inside the run either.
                while pos < chars.len() && chars[pos].is_ascii_alphabetic() {
                    pos += 1;
                }
            }
        } else if c.is_ascii_digit()
            || (c == '-' && chars.get(pos + 1).is_some_and(|d| d.is_ascii_digit()))
        {
            if let Some(tok) = lex_number(chars, pos) {
                log::trace!("token {:?} at {}..{}", tok.kind, tok.span.start, tok.span.end);
                pos = tok.span.end;
                tokens.push(tok);
            } else {
                pos += 1;
                while pos < chars.len() && chars[pos].is_ascii_digit() {
                    pos += 1;
                }
            }
        } else {
            pos += 1;
        }
    }
    tokens
}

/// Try every entry that could start at `start` and keep the best match:
/// most letters consumed, then lowest cost, then vocabulary order.
fn best_word_match(
    chars: &[char],
    start: usize,
    vocab: &Vocabulary,
    max_skip_run: usize,
) -> Option<MatchToken> {
    let mut best: Option<(usize, MatchToken)> = None;
    for entry in vocab.candidates(chars[start]) {
        let Some((end, cost)) = match_letters(chars, start, &entry.letters, max_skip_run) else {
            continue;
        };
        // A match that runs straight into more letters is a different word.
        if chars.get(end).is_some_and(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        let letters = entry.letters.len();
        let better = match &best {
            None => true,
            Some((best_letters, best_tok)) => {
                letters > *best_letters || (letters == *best_letters && cost < best_tok.cost)
            }
        };
        if better {
            let tok = MatchToken {
                kind: token_kind(entry),
                span: Span { start, end },
                cost,
            };
            best = Some((letters, tok));
        }
    }
    best.map(|(_, tok)| tok)
}

fn token_kind(entry: &Entry) -> TokenKind {
    match entry.payload {
        EntryPayload::Number { value, scale } => TokenKind::Number { value: f64::from(value), scale },
        EntryPayload::Operator { op, role } => TokenKind::Operator { op, role },
    }
}

/// Consume `letters` starting exactly at `start`, skipping at most
/// `max_skip_run` noise characters between consecutive letters. Returns one
/// past the last consumed letter and the total noise skipped.
fn match_letters(
    chars: &[char],
    start: usize,
    letters: &[char],
    max_skip_run: usize,
) -> Option<(usize, usize)> {
    let mut pos = start;
    let mut cost = 0;
    for (i, &target) in letters.iter().enumerate() {
        if i > 0 {
            let mut run = 0;
            while run < max_skip_run && pos < chars.len() && is_noise(chars[pos]) {
                pos += 1;
                run += 1;
            }
            cost += run;
        }
        if chars.get(pos).copied() != Some(target) {
            return None;
        }
        pos += 1;
    }
    Some((pos, cost))
}

/// Lex a digit literal at `start`: optional leading `-`, digits, optional
/// `.` fraction. Literals glued to ASCII letters on either side are not
/// numbers and are rejected.
fn lex_number(chars: &[char], start: usize) -> Option<MatchToken> {
    if start > 0 && chars[start - 1].is_ascii_alphabetic() {
        return None;
    }
    let mut pos = start;
    if chars[pos] == '-' {
        pos += 1;
    }
    let digits_start = pos;
    while pos < chars.len() && chars[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == digits_start {
        return None;
    }
    if chars.get(pos) == Some(&'.') && chars.get(pos + 1).is_some_and(|c| c.is_ascii_digit()) {
        pos += 1;
        while pos < chars.len() && chars[pos].is_ascii_digit() {
            pos += 1;
        }
    }
    if chars.get(pos).is_some_and(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let text: String = chars[start..pos].iter().collect();
    let value: f64 = text.parse().ok()?;
    Some(MatchToken {
        kind: TokenKind::Number { value, scale: false },
        span: Span { start, end: pos },
        cost: 0,
    })
}
