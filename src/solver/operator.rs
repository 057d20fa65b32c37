//! Operator detection: choosing the one operation a challenge asks for.
//!
//! Challenges carry exactly one intended operation but often mention other
//! operator words as red herrings. The first operator token in text order
//! wins; later ones are logged and ignored (they still break number-phrase
//! adjacency, which is handled by the phrase resolver).

use crate::solver::matcher::{MatchToken, Span, TokenKind};
use crate::solver::vocabulary::{Op, OperandRole};

/// The operator chosen for the expression, with its source span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectedOp {
    pub op: Op,
    pub role: OperandRole,
    pub span: Span,
}

/// Pick the first operator token in text order, if any.
pub fn detect(tokens: &[MatchToken]) -> Option<DetectedOp> {
    let mut detected: Option<DetectedOp> = None;
    for tok in tokens {
        if let TokenKind::Operator { op, role } = tok.kind {
            if detected.is_none() {
                detected = Some(DetectedOp { op, role, span: tok.span });
            } else {
                log::debug!(
                    "ignoring operator {:?} at {}..{} (one already chosen)",
                    op,
                    tok.span.start,
                    tok.span.end
                );
            }
        }
    }
    detected
}

/// Assign the two resolved operands per the operator's role. Both policies
/// preserve text order: accumulate operators are commutative, and
/// left-affects-right operators act on the number that appeared first.
pub fn assign(role: OperandRole, first: f64, second: f64) -> (f64, f64) {
    match role {
        OperandRole::Accumulate => (first, second),
        OperandRole::LeftAffectsRight => (first, second),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::matcher::scan;
    use crate::solver::vocabulary::Vocabulary;

    fn detect_in(text: &str) -> Option<DetectedOp> {
        let chars: Vec<char> = text.chars().collect();
        detect(&scan(&chars, Vocabulary::builtin(), 3))
    }

    #[test]
    fn first_operator_in_text_order_wins() {
        let detected = detect_in("ten minus four times two").expect("operator");
        assert_eq!(detected.op, Op::Sub);
        assert_eq!(detected.role, OperandRole::LeftAffectsRight);
    }

    #[test]
    fn no_operator_yields_none() {
        assert!(detect_in("twelve thirteen").is_none());
        assert!(detect_in("").is_none());
    }

    #[test]
    fn longer_phrase_reports_its_full_span() {
        let detected = detect_in("eight divided by two").expect("operator");
        assert_eq!(detected.op, Op::Div);
        assert_eq!(detected.span, Span { start: 6, end: 16 });
    }

    #[test]
    fn assignment_preserves_text_order_for_both_roles() {
        assert_eq!(assign(OperandRole::Accumulate, 3.0, 10.0), (3.0, 10.0));
        assert_eq!(assign(OperandRole::LeftAffectsRight, 3.0, 10.0), (3.0, 10.0));
    }
}
