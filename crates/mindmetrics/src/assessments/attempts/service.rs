use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    AssessmentDetailView, AssessmentId, AssessmentRecord, AssessmentSubmission,
    AssessmentSummaryView, Owner, SessionId, UserId,
};
use super::repository::{AccountError, AccountGateway, AssessmentRepository, RepositoryError};
use crate::assessments::{classify, scoring};

/// Service composing the scoring engine, classifier, repository, and account
/// gateway into the assessment lifecycle.
pub struct AssessmentService<R, A> {
    repository: Arc<R>,
    accounts: Arc<A>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);
static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("sess-{id:06}"))
}

impl<R, A> AssessmentService<R, A>
where
    R: AssessmentRepository + 'static,
    A: AccountGateway + 'static,
{
    pub fn new(repository: Arc<R>, accounts: Arc<A>) -> Self {
        Self {
            repository,
            accounts,
        }
    }

    /// Score, classify, and persist a completed test.
    ///
    /// Scoring never fails on malformed answers; only the repository can
    /// reject here. A valid bearer token takes ownership precedence over any
    /// session id carried in the submission; without either, a fresh
    /// anonymous session is minted so the result stays claimable.
    pub fn submit(
        &self,
        submission: AssessmentSubmission,
        bearer: Option<&str>,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let owner = match bearer {
            Some(token) => match self.accounts.verify_token(token)? {
                Some(user) => Owner::User(user),
                None => return Err(AssessmentServiceError::Unauthorized),
            },
            None => Owner::Anonymous(submission.session.clone().unwrap_or_else(next_session_id)),
        };

        let result = scoring::score(submission.test, &submission.answers);
        let classification = classify::classify(submission.test, result.classifiable_score());

        let record = AssessmentRecord {
            id: next_assessment_id(),
            owner,
            test: submission.test,
            taken_at: Utc::now(),
            answers: submission.answers,
            result,
            classification,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Free-tier view of a stored assessment; no identity required.
    pub fn summary(
        &self,
        id: &AssessmentId,
    ) -> Result<AssessmentSummaryView, AssessmentServiceError> {
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;
        Ok(record.summary_view())
    }

    /// Detailed view: requires a valid token, ownership of the record, and
    /// an active detailed-results entitlement.
    pub fn detailed(
        &self,
        id: &AssessmentId,
        bearer: Option<&str>,
    ) -> Result<AssessmentDetailView, AssessmentServiceError> {
        let user = self.authenticate(bearer)?;
        let record = self.repository.fetch(id)?.ok_or(RepositoryError::NotFound)?;

        match &record.owner {
            Owner::User(owner) if *owner == user => {}
            _ => return Err(AssessmentServiceError::Forbidden),
        }

        if !self.accounts.has_detailed_access(&user)? {
            return Err(AssessmentServiceError::PaymentRequired);
        }

        Ok(record.detail_view())
    }

    /// Migrate every assessment taken under `session` into the caller's
    /// account, returning how many records moved.
    pub fn claim(
        &self,
        session: &SessionId,
        bearer: Option<&str>,
    ) -> Result<usize, AssessmentServiceError> {
        let user = self.authenticate(bearer)?;
        let migrated = self.repository.reassign(session, &user)?;
        Ok(migrated)
    }

    /// Record a confirmed payment and grant the detailed-results entitlement.
    /// The payment processor is opaque here; only its reference is kept.
    pub fn unlock(
        &self,
        bearer: Option<&str>,
        payment_reference: &str,
    ) -> Result<UserId, AssessmentServiceError> {
        let user = self.authenticate(bearer)?;
        if payment_reference.trim().is_empty() {
            return Err(AssessmentServiceError::InvalidPaymentReference);
        }
        self.accounts
            .grant_detailed_access(&user, payment_reference)?;
        Ok(user)
    }

    /// Summaries of every assessment owned by the caller, newest first.
    pub fn list(
        &self,
        bearer: Option<&str>,
    ) -> Result<Vec<AssessmentSummaryView>, AssessmentServiceError> {
        let user = self.authenticate(bearer)?;
        let mut records = self.repository.list_for_owner(&Owner::User(user))?;
        records.sort_by(|a, b| b.taken_at.cmp(&a.taken_at));
        Ok(records
            .iter()
            .map(AssessmentRecord::summary_view)
            .collect())
    }

    fn authenticate(&self, bearer: Option<&str>) -> Result<UserId, AssessmentServiceError> {
        let token = bearer.ok_or(AssessmentServiceError::Unauthorized)?;
        self.accounts
            .verify_token(token)?
            .ok_or(AssessmentServiceError::Unauthorized)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Account(#[from] AccountError),
    #[error("bearer token missing or invalid")]
    Unauthorized,
    #[error("assessment belongs to another owner")]
    Forbidden,
    #[error("detailed results require an active purchase")]
    PaymentRequired,
    #[error("payment reference must not be empty")]
    InvalidPaymentReference,
}
