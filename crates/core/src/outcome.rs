//! Terminal outcomes — the four ways a run can end.
//!
//! Every outcome renders to caller-facing text via [`RunOutcome::text`];
//! the structured enum exists so callers that want to branch on the
//! outcome kind can do so without parsing strings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::trace::TraceEntry;

/// Fixed message returned when the iteration budget runs out without a
/// final answer.
pub const MAX_ITERATIONS_MESSAGE: &str =
    "Reached the maximum number of iterations without a final answer.";

/// The terminal state of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The model produced a final answer.
    FinalAnswer(String),

    /// The model asked the caller a question; the run stops here and does
    /// not resume automatically. Carries the formatted question.
    AwaitingUser(String),

    /// The iteration cap fired. A designed safety valve, not an error.
    MaxIterations,

    /// The completion capability failed or returned an invalid shape.
    EngineError(String),
}

impl RunOutcome {
    /// The caller-facing text of this outcome.
    pub fn text(&self) -> String {
        match self {
            RunOutcome::FinalAnswer(text) => text.clone(),
            RunOutcome::AwaitingUser(question) => question.clone(),
            RunOutcome::MaxIterations => MAX_ITERATIONS_MESSAGE.to_string(),
            RunOutcome::EngineError(message) => format!("Agent run failed: {message}"),
        }
    }

    pub fn is_final_answer(&self) -> bool {
        matches!(self, RunOutcome::FinalAnswer(_))
    }

    pub fn is_awaiting_user(&self) -> bool {
        matches!(self, RunOutcome::AwaitingUser(_))
    }
}

/// The structured result of one run: outcome plus everything recorded on
/// the way there. The per-run state itself is gone by the time this exists.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub outcome: RunOutcome,
    pub trace: Vec<TraceEntry>,

    /// Completed (recorded) iterations. Terminal iterations that returned
    /// early are not counted.
    pub iterations: usize,
}

impl RunReport {
    /// Shorthand for the outcome's caller-facing text.
    pub fn text(&self) -> String {
        self.outcome.text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_answer_text_is_verbatim() {
        let outcome = RunOutcome::FinalAnswer("2+2는 4입니다.".into());
        assert_eq!(outcome.text(), "2+2는 4입니다.");
        assert!(outcome.is_final_answer());
    }

    #[test]
    fn max_iterations_text_is_the_fixed_message() {
        assert_eq!(RunOutcome::MaxIterations.text(), MAX_ITERATIONS_MESSAGE);
    }

    #[test]
    fn engine_error_text_carries_the_description() {
        let outcome = RunOutcome::EngineError("Decision failed shape validation".into());
        assert!(outcome.text().contains("shape validation"));
        assert!(!outcome.is_final_answer());
    }

    #[test]
    fn awaiting_user_is_distinct_from_final_answer() {
        let outcome = RunOutcome::AwaitingUser("[Question for user] which topic?".into());
        assert!(outcome.is_awaiting_user());
        assert!(!outcome.is_final_answer());
        assert!(outcome.text().contains("which topic?"));
    }
}
