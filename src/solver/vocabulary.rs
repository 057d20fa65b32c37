//! Vocabulary tables: the number words, operator phrases, and connectives
//! the solver recognizes.
//!
//! The built-in table is embedded from `config/vocabulary.json` at compile
//! time (the build script validates the file). Tests build smaller tables
//! through [`Vocabulary::new`].

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Deserialize;

/// Arithmetic operation named by an operator phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Symbol used in logs and the vocabulary listing.
    pub fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }
}

/// How an operator phrase binds its two operands.
///
/// `Accumulate` phrases ("plus", "total") are commutative. `LeftAffectsRight`
/// phrases ("slows by", "divided by") act on the number that appears first in
/// the text, so operand order must be preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperandRole {
    Accumulate,
    LeftAffectsRight,
}

impl fmt::Display for OperandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandRole::Accumulate => write!(f, "accumulate"),
            OperandRole::LeftAffectsRight => write!(f, "left-affects-right"),
        }
    }
}

/// What a vocabulary entry resolves to when matched in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPayload {
    /// A number word. `scale` marks multiplier words (hundred, thousand)
    /// that scale the compound number built so far instead of adding to it.
    Number { value: u32, scale: bool },
    /// An operator phrase with its operand-role policy.
    Operator { op: Op, role: OperandRole },
}

/// One matchable entry: the phrase text plus its payload.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Phrase as listed in the vocabulary, lowercase.
    pub phrase: String,
    /// Letters of the phrase with spaces removed. The matcher consumes
    /// exactly these, in order.
    pub letters: Vec<char>,
    pub payload: EntryPayload,
}

impl Entry {
    fn new(phrase: &str, payload: EntryPayload) -> Self {
        let phrase = phrase.to_lowercase();
        let letters = phrase.chars().filter(|c| c.is_ascii_alphabetic()).collect();
        Entry { phrase, letters, payload }
    }
}

/// Number words valued at or above this are scale words.
const SCALE_THRESHOLD: u32 = 100;

/// Immutable lookup table for the matcher and the phrase resolver.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<Entry>,
    /// Entry indices bucketed by first letter, so the scan only tries
    /// entries that can possibly start at a given position.
    by_first_letter: HashMap<char, Vec<usize>>,
    connectives: Vec<String>,
}

impl Vocabulary {
    /// Build a table from parts. Entry order is preserved and used as the
    /// last tie-break when two matches are otherwise indistinguishable.
    pub fn new(
        numbers: &[(&str, u32)],
        operators: &[(&str, Op, OperandRole)],
        connectives: &[&str],
    ) -> Self {
        let mut entries = Vec::with_capacity(numbers.len() + operators.len());
        for &(word, value) in numbers {
            let scale = value >= SCALE_THRESHOLD;
            entries.push(Entry::new(word, EntryPayload::Number { value, scale }));
        }
        for &(phrase, op, role) in operators {
            entries.push(Entry::new(phrase, EntryPayload::Operator { op, role }));
        }
        let mut by_first_letter: HashMap<char, Vec<usize>> = HashMap::new();
        for (i, entry) in entries.iter().enumerate() {
            if let Some(&first) = entry.letters.first() {
                by_first_letter.entry(first).or_default().push(i);
            }
        }
        let connectives = connectives.iter().map(|c| c.to_lowercase()).collect();
        Vocabulary { entries, by_first_letter, connectives }
    }

    /// The built-in table from `config/vocabulary.json`.
    pub fn builtin() -> &'static Vocabulary {
        static BUILTIN: OnceLock<Vocabulary> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let json = include_str!("../../config/vocabulary.json");
            let file: VocabularyFile =
                serde_json::from_str(json).expect("vocabulary.json must be valid");
            let numbers: Vec<(&str, u32)> =
                file.numbers.iter().map(|n| (n.word.as_str(), n.value)).collect();
            let operators: Vec<(&str, Op, OperandRole)> =
                file.operators.iter().map(|o| (o.phrase.as_str(), o.op, o.role)).collect();
            let connectives: Vec<&str> =
                file.connectives.iter().map(|c| c.as_str()).collect();
            Vocabulary::new(&numbers, &operators, &connectives)
        })
    }

    /// All entries in vocabulary order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Entries whose first letter is `first`, in vocabulary order.
    pub fn candidates(&self, first: char) -> impl Iterator<Item = &Entry> {
        self.by_first_letter
            .get(&first)
            .into_iter()
            .flatten()
            .map(|&i| &self.entries[i])
    }

    /// True if `word` is a connective ("and") that may glue two parts of one
    /// compound number together.
    pub fn is_connective(&self, word: &str) -> bool {
        self.connectives.iter().any(|c| c == word)
    }

    /// The connective words, in vocabulary order.
    pub fn connectives(&self) -> &[String] {
        &self.connectives
    }
}

#[derive(Deserialize)]
struct VocabularyFile {
    numbers: Vec<NumberEntry>,
    operators: Vec<OperatorEntry>,
    connectives: Vec<String>,
}

#[derive(Deserialize)]
struct NumberEntry {
    word: String,
    value: u32,
}

#[derive(Deserialize)]
struct OperatorEntry {
    phrase: String,
    op: Op,
    role: OperandRole,
}
