//! Static question banks, fixed at build time.
//!
//! Each test ships an ordered set of questions. IQ items carry a single
//! correct answer; the likert-style tests carry a per-option point weight.
//! Clients only ever see the sanitized [`QuestionView`], never the answer key
//! or the scoring weights.

mod iq;
pub mod loader;
mod scaled;

pub use loader::{BankImportError, ScaledBankImporter};

use std::sync::OnceLock;

use serde::Serialize;

use super::TestKind;

/// IQ item scored by exact-match equality against `correct_answer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IqQuestion {
    pub id: u16,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Likert-style item; `scoring[i]` is the point value of selecting `options[i]`.
///
/// Invariant: `scoring.len() == options.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledQuestion {
    pub id: u16,
    pub prompt: String,
    pub options: Vec<String>,
    pub scoring: Vec<u32>,
}

impl ScaledQuestion {
    pub fn max_points(&self) -> u32 {
        self.scoring.iter().copied().max().unwrap_or(0)
    }
}

/// An ordered question set for one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBank {
    Iq(Vec<IqQuestion>),
    Scaled(Vec<ScaledQuestion>),
}

impl QuestionBank {
    pub fn len(&self) -> usize {
        match self {
            QuestionBank::Iq(questions) => questions.len(),
            QuestionBank::Scaled(questions) => questions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The highest score any answer sheet can produce against this bank.
    /// Depends only on the static questions, never on submitted answers.
    pub fn max_score(&self) -> u32 {
        match self {
            QuestionBank::Iq(questions) => questions.len() as u32 * crate::assessments::scoring::IQ_POINTS_PER_QUESTION,
            QuestionBank::Scaled(questions) => {
                questions.iter().map(ScaledQuestion::max_points).sum()
            }
        }
    }

    /// Client-facing projection with answer keys and weights stripped.
    pub fn views(&self) -> Vec<QuestionView> {
        match self {
            QuestionBank::Iq(questions) => questions
                .iter()
                .map(|question| QuestionView {
                    id: question.id,
                    prompt: question.prompt.clone(),
                    options: question.options.clone(),
                })
                .collect(),
            QuestionBank::Scaled(questions) => questions
                .iter()
                .map(|question| QuestionView {
                    id: question.id,
                    prompt: question.prompt.clone(),
                    options: question.options.clone(),
                })
                .collect(),
        }
    }
}

/// Sanitized question representation served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: u16,
    pub prompt: String,
    pub options: Vec<String>,
}

/// The build-time bank for a test, constructed once per process.
pub fn bank(test: TestKind) -> &'static QuestionBank {
    match test {
        TestKind::Iq => {
            static BANK: OnceLock<QuestionBank> = OnceLock::new();
            BANK.get_or_init(iq::build)
        }
        TestKind::Adhd => {
            static BANK: OnceLock<QuestionBank> = OnceLock::new();
            BANK.get_or_init(scaled::build_adhd)
        }
        TestKind::Asd => {
            static BANK: OnceLock<QuestionBank> = OnceLock::new();
            BANK.get_or_init(scaled::build_asd)
        }
        TestKind::Anxiety => {
            static BANK: OnceLock<QuestionBank> = OnceLock::new();
            BANK.get_or_init(scaled::build_anxiety)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_sizes_match_published_tests() {
        assert_eq!(bank(TestKind::Iq).len(), 30);
        assert_eq!(bank(TestKind::Adhd).len(), 30);
        assert_eq!(bank(TestKind::Asd).len(), 10);
        assert_eq!(bank(TestKind::Anxiety).len(), 7);
    }

    #[test]
    fn scaled_banks_keep_scoring_aligned_with_options() {
        for kind in [TestKind::Adhd, TestKind::Asd, TestKind::Anxiety] {
            let QuestionBank::Scaled(questions) = bank(kind) else {
                panic!("{} bank should be likert-style", kind.label());
            };
            for question in questions {
                assert_eq!(
                    question.scoring.len(),
                    question.options.len(),
                    "question {} of {}",
                    question.id,
                    kind.label()
                );
            }
        }
    }

    #[test]
    fn iq_answer_keys_are_offered_options() {
        let QuestionBank::Iq(questions) = bank(TestKind::Iq) else {
            panic!("iq bank should carry answer keys");
        };
        for question in questions {
            assert!(
                question.options.contains(&question.correct_answer),
                "question {} lists its own answer",
                question.id
            );
        }
    }

    #[test]
    fn max_scores_are_fixed_by_the_banks() {
        assert_eq!(bank(TestKind::Iq).max_score(), 150);
        assert_eq!(bank(TestKind::Adhd).max_score(), 120);
        assert_eq!(bank(TestKind::Asd).max_score(), 30);
        assert_eq!(bank(TestKind::Anxiety).max_score(), 21);
    }

    #[test]
    fn question_ids_are_sequential_from_one() {
        for kind in TestKind::ALL {
            let views = bank(kind).views();
            for (index, view) in views.iter().enumerate() {
                assert_eq!(view.id as usize, index + 1, "{} bank", kind.label());
            }
        }
    }
}
