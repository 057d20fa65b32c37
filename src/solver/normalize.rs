//! Challenge text normalization: case folding and separator collapsing.
//!
//! Noise is collapsed, never deleted. Stripping separators outright would
//! glue shattered fragments into words the text never contained; intra-word
//! noise is left in place for the matcher to skip under its budget.

/// Lowercase `raw`, fold every whitespace run to a single space, collapse
/// runs of one repeated symbol (`"!!!"` becomes `"!"`), and trim the ends.
/// Runs of differing symbols (`"?!"`) are kept as they are.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev: Option<char> = None;
    for c in raw.chars().flat_map(|c| c.to_lowercase()) {
        let c = if c.is_whitespace() { ' ' } else { c };
        if !c.is_ascii_alphanumeric() && prev == Some(c) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out.trim_matches(' ').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_mixed_case() {
        assert_eq!(normalize("TwElVe PLUS thirTEEN"), "twelve plus thirteen");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize("ten \t\n  plus\r\n five"), "ten plus five");
    }

    #[test]
    fn collapses_repeated_symbols() {
        assert_eq!(normalize("t!!!en plus fi???ve"), "t!en plus fi?ve");
    }

    #[test]
    fn keeps_runs_of_differing_symbols() {
        assert_eq!(normalize("t?!?!en"), "t?!?!en");
    }

    #[test]
    fn keeps_repeated_letters_and_digits() {
        assert_eq!(normalize("see 1100"), "see 1100");
    }

    #[test]
    fn trims_the_ends() {
        assert_eq!(normalize("  ten plus two \n"), "ten plus two");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t \n "), "");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["T@@w--o  PLUS!! three", "  7 times (  2 )  "] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
