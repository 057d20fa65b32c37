//! Verification protocol types: the challenge envelope Moltbook attaches to
//! new posts and comments, and the answer payload `POST /verify` expects.
//!
//! Transport stays with the caller. These types only dig the challenge out
//! of an API response and build the JSON to send back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::solver::{Answer, SolveError, Solver};

/// A pending verification challenge from a create-post or create-comment
/// response.
#[derive(Clone, Debug, Deserialize)]
pub struct VerificationChallenge {
    pub verification_code: String,
    pub challenge_text: String,
}

impl VerificationChallenge {
    /// Extract the challenge from an API response. The block sits at
    /// `post.verification` or `comment.verification`; a response without one
    /// means the post was published immediately (trusted agent), so None is
    /// not an error.
    pub fn from_response(resp: &Value) -> Option<Self> {
        let subject = resp.get("post").or_else(|| resp.get("comment"))?;
        let verification = subject.get("verification")?;
        serde_json::from_value(verification.clone()).ok()
    }

    /// Solve this challenge and build the payload to submit.
    pub fn answer(&self, solver: &Solver<'_>) -> Result<VerificationAnswer, SolveError> {
        let answer = solver.solve(&self.challenge_text)?;
        Ok(VerificationAnswer::new(self.verification_code.clone(), &answer))
    }
}

/// The `POST /verify` request body.
#[derive(Clone, Debug, Serialize)]
pub struct VerificationAnswer {
    pub verification_code: String,
    /// Two-decimal string, the exact format the verifier compares against.
    pub answer: String,
}

impl VerificationAnswer {
    pub fn new(verification_code: String, answer: &Answer) -> Self {
        VerificationAnswer { verification_code, answer: answer.to_string() }
    }
}
