use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::assessments::attempts::domain::{
    AssessmentId, AssessmentRecord, AssessmentSubmission, Owner, SessionId, UserId,
};
use crate::assessments::attempts::repository::{
    AccountError, AccountGateway, AssessmentRepository, RepositoryError,
};
use crate::assessments::attempts::{assessment_router, AssessmentService};
use crate::assessments::scoring::testing::{all_correct_iq, all_max_scaled};
use crate::assessments::scoring::Answer;
use crate::assessments::TestKind;

pub(super) fn iq_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        test: TestKind::Iq,
        answers: all_correct_iq(),
        session: Some(SessionId("sess-test".to_string())),
    }
}

pub(super) fn adhd_submission() -> AssessmentSubmission {
    AssessmentSubmission {
        test: TestKind::Adhd,
        answers: all_max_scaled(TestKind::Adhd),
        session: None,
    }
}

/// Anxiety sheet scoring exactly 20 points: six "Nearly every day" answers
/// plus one "More than half the days".
pub(super) fn severe_anxiety_submission() -> AssessmentSubmission {
    let mut answers: Vec<Option<Answer>> = (0..6).map(|_| Some(Answer::Index(3))).collect();
    answers.push(Some(Answer::Index(2)));
    AssessmentSubmission {
        test: TestKind::Anxiety,
        answers,
        session: Some(SessionId("sess-anxiety".to_string())),
    }
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryRepository, MemoryAccounts>,
    Arc<MemoryRepository>,
    Arc<MemoryAccounts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let accounts = Arc::new(MemoryAccounts::default());
    let service = AssessmentService::new(repository.clone(), accounts.clone());
    (service, repository, accounts)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_for_owner(&self, owner: &Owner) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.owner == *owner)
            .cloned()
            .collect())
    }

    fn reassign(&self, session: &SessionId, user: &UserId) -> Result<usize, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let mut migrated = 0;
        for record in guard.values_mut() {
            if record.owner == Owner::Anonymous(session.clone()) {
                record.owner = Owner::User(user.clone());
                migrated += 1;
            }
        }
        Ok(migrated)
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAccounts {
    tokens: Arc<Mutex<HashMap<String, UserId>>>,
    entitled: Arc<Mutex<HashSet<UserId>>>,
    payments: Arc<Mutex<Vec<(UserId, String)>>>,
}

impl MemoryAccounts {
    pub(super) fn issue_token(&self, token: &str, user: &str) -> UserId {
        let user = UserId(user.to_string());
        self.tokens
            .lock()
            .expect("token mutex poisoned")
            .insert(token.to_string(), user.clone());
        user
    }

    pub(super) fn payments(&self) -> Vec<(UserId, String)> {
        self.payments.lock().expect("payment mutex poisoned").clone()
    }
}

impl AccountGateway for MemoryAccounts {
    fn verify_token(&self, bearer: &str) -> Result<Option<UserId>, AccountError> {
        let guard = self.tokens.lock().expect("token mutex poisoned");
        Ok(guard.get(bearer).cloned())
    }

    fn has_detailed_access(&self, user: &UserId) -> Result<bool, AccountError> {
        let guard = self.entitled.lock().expect("entitlement mutex poisoned");
        Ok(guard.contains(user))
    }

    fn grant_detailed_access(
        &self,
        user: &UserId,
        payment_reference: &str,
    ) -> Result<(), AccountError> {
        self.entitled
            .lock()
            .expect("entitlement mutex poisoned")
            .insert(user.clone());
        self.payments
            .lock()
            .expect("payment mutex poisoned")
            .push((user.clone(), payment_reference.to_string()));
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_for_owner(&self, _owner: &Owner) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn reassign(&self, _session: &SessionId, _user: &UserId) -> Result<usize, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(
    service: AssessmentService<MemoryRepository, MemoryAccounts>,
) -> axum::Router {
    assessment_router(Arc::new(service))
}
