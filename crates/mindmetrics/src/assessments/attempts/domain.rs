use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assessments::classify::Classification;
use crate::assessments::scoring::{Answer, RawResult};
use crate::assessments::TestKind;

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Identifier wrapper for account holders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Identifier for a pre-sign-in browser session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Who a stored assessment belongs to. Anonymous attempts can later be
/// migrated into an account via the claim operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Owner {
    User(UserId),
    Anonymous(SessionId),
}

/// One completed test handed to the service for scoring and persistence.
///
/// `answers` is aligned to the question bank by index; `None` marks a
/// question the taker never answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub test: TestKind,
    pub answers: Vec<Option<Answer>>,
    #[serde(default)]
    pub session: Option<SessionId>,
}

/// Immutable stored assessment. The classification is derived once at
/// submission and persisted with the score so reloads never recompute it;
/// only the owner changes afterwards, and only through a claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub owner: Owner,
    pub test: TestKind,
    pub taken_at: DateTime<Utc>,
    pub answers: Vec<Option<Answer>>,
    pub result: RawResult,
    pub classification: Classification,
}

impl AssessmentRecord {
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_some()).count()
    }

    /// Free-tier projection: the band, but none of the detailed numbers.
    pub fn summary_view(&self) -> AssessmentSummaryView {
        AssessmentSummaryView {
            assessment_id: self.id.clone(),
            test: self.test,
            title: self.test.title(),
            taken_at: self.taken_at,
            category: self.classification.category.clone(),
            answered: self.answered(),
            total_questions: match self.result {
                RawResult::Iq(result) => result.total_questions as usize,
                RawResult::Scaled(result) => result.total_questions as usize,
            },
        }
    }

    /// Paid-tier projection with the full raw result and classification.
    pub fn detail_view(&self) -> AssessmentDetailView {
        AssessmentDetailView {
            assessment_id: self.id.clone(),
            test: self.test,
            title: self.test.title(),
            taken_at: self.taken_at,
            result: self.result,
            classification: self.classification.clone(),
            answered: self.answered(),
        }
    }
}

/// Sanitized free-tier view of a stored assessment.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummaryView {
    pub assessment_id: AssessmentId,
    pub test: TestKind,
    pub title: &'static str,
    pub taken_at: DateTime<Utc>,
    pub category: String,
    pub answered: usize,
    pub total_questions: usize,
}

/// Entitlement-gated detailed view.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentDetailView {
    pub assessment_id: AssessmentId,
    pub test: TestKind,
    pub title: &'static str,
    pub taken_at: DateTime<Utc>,
    pub result: RawResult,
    pub classification: Classification,
    pub answered: usize,
}
