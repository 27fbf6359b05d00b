//! Pure scoring engine.
//!
//! Scoring is deterministic, stateless, and infallible: malformed or missing
//! answers lower the computed score instead of raising an error, so a
//! partially completed test still yields a result.

mod iq;
mod scaled;

use serde::{Deserialize, Serialize};

use super::bank::{self, QuestionBank};
use super::TestKind;

/// Fixed per-question weight used for the IQ points tally.
pub const IQ_POINTS_PER_QUESTION: u32 = 5;

/// A submitted answer, resolved once at submission time.
///
/// IQ answers arrive as option labels; likert answers may arrive either as a
/// label or as a selected-option index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Label(String),
    Index(usize),
}

/// Unclassified numeric output of scoring one completed IQ attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IqResult {
    /// Linear map of accuracy onto 70..=150.
    pub iq_score: u32,
    /// UI proxy, `round(iq_score / 160 * 100)`. Deliberately not a
    /// population-normed percentile; behavior parity with the published
    /// formula matters more than statistical grounding.
    pub percentile: u32,
    /// Percent of questions answered correctly, rounded.
    pub accuracy: u32,
    pub total_correct: u32,
    pub total_questions: u32,
    pub total_points: u32,
    pub max_points: u32,
}

/// Unclassified numeric output of scoring one likert-style attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledResult {
    pub score: u32,
    /// Sum of each question's highest option weight; a property of the static
    /// bank, never of the submitted answers.
    pub max_score: u32,
    pub total_questions: u32,
}

/// Raw scoring output for any test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum RawResult {
    Iq(IqResult),
    Scaled(ScaledResult),
}

impl RawResult {
    /// The number the classifier consumes.
    pub fn classifiable_score(&self) -> u32 {
        match self {
            RawResult::Iq(result) => result.iq_score,
            RawResult::Scaled(result) => result.score,
        }
    }

    pub fn max_score(&self) -> u32 {
        match self {
            RawResult::Iq(result) => result.max_points,
            RawResult::Scaled(result) => result.max_score,
        }
    }
}

/// Score an ordered answer sheet against the static bank for `test`.
///
/// The sheet is aligned by question index; `None` entries and answers the
/// bank cannot resolve contribute nothing. Sheets shorter or longer than the
/// bank degrade gracefully rather than failing.
pub fn score(test: TestKind, answers: &[Option<Answer>]) -> RawResult {
    match bank::bank(test) {
        QuestionBank::Iq(questions) => RawResult::Iq(iq::score(questions, answers)),
        QuestionBank::Scaled(questions) => RawResult::Scaled(scaled::score(questions, answers)),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{all_correct_iq, all_max_scaled};
    use super::*;

    #[test]
    fn perfect_iq_sheet_hits_the_ceiling() {
        let RawResult::Iq(result) = score(TestKind::Iq, &all_correct_iq()) else {
            panic!("iq test yields an iq result");
        };
        assert_eq!(result.iq_score, 150);
        assert_eq!(result.percentile, 94);
        assert_eq!(result.accuracy, 100);
        assert_eq!(result.total_correct, 30);
        assert_eq!(result.total_points, 150);
        assert_eq!(result.max_points, 150);
    }

    #[test]
    fn empty_iq_sheet_scores_the_floor() {
        let RawResult::Iq(result) = score(TestKind::Iq, &[]) else {
            panic!("iq test yields an iq result");
        };
        assert_eq!(result.iq_score, 70);
        assert_eq!(result.total_correct, 0);
        assert_eq!(result.accuracy, 0);
    }

    #[test]
    fn max_scaled_sheet_matches_bank_maximum() {
        for test in [TestKind::Adhd, TestKind::Asd, TestKind::Anxiety] {
            let RawResult::Scaled(result) = score(test, &all_max_scaled(test)) else {
                panic!("scaled test yields a scaled result");
            };
            assert_eq!(result.score, result.max_score, "{}", test.label());
        }
    }

    #[test]
    fn answer_serialization_is_tagged() {
        let label = serde_json::to_value(Answer::Label("32".to_string())).expect("serializes");
        assert_eq!(label["kind"], "label");
        assert_eq!(label["value"], "32");

        let index = serde_json::to_value(Answer::Index(3)).expect("serializes");
        assert_eq!(index["kind"], "index");
        assert_eq!(index["value"], 3);
    }
}
