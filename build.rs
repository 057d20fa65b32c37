//! Build script: validates vocabulary.json at compile time.

use std::path::PathBuf;

fn main() {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR set by Cargo");
    let config_path: PathBuf = [&manifest_dir, "config", "vocabulary.json"].iter().collect();
    let json = std::fs::read_to_string(&config_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read {}: {}. vocabulary.json must exist and be valid.",
            config_path.display(),
            e
        )
    });
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct NumberEntry {
        word: String,
        value: u32,
    }
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct OperatorEntry {
        phrase: String,
        op: String,
        role: String,
    }
    #[derive(serde::Deserialize)]
    struct VocabularyFile {
        numbers: Vec<NumberEntry>,
        operators: Vec<OperatorEntry>,
        connectives: Vec<String>,
    }
    let vocab: VocabularyFile = serde_json::from_str(&json).unwrap_or_else(|e| {
        panic!("vocabulary.json is invalid JSON: {}. Fix the file and rebuild.", e)
    });
    for entry in &vocab.operators {
        let known_op = matches!(entry.op.as_str(), "add" | "sub" | "mul" | "div");
        let known_role = matches!(entry.role.as_str(), "accumulate" | "left_affects_right");
        if !known_op || !known_role {
            panic!(
                "vocabulary.json: operator {:?} has unknown op/role ({:?}, {:?})",
                entry.phrase, entry.op, entry.role
            );
        }
    }
    if vocab.numbers.is_empty() || vocab.operators.is_empty() || vocab.connectives.is_empty() {
        panic!("vocabulary.json: numbers, operators, and connectives must all be non-empty");
    }
}
