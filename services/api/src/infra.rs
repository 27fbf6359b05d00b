use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use mindmetrics::assessments::attempts::{
    AccountError, AccountGateway, AssessmentId, AssessmentRecord, AssessmentRepository, Owner,
    RepositoryError, SessionId, UserId,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
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

/// JSON-file snapshot store: the whole record set is loaded at startup and
/// written back after every mutation. Last write wins; no isolation beyond
/// the in-process mutex, which matches the platform's consistency posture.
pub(crate) struct JsonFileAssessmentRepository {
    path: PathBuf,
    records: Mutex<HashMap<AssessmentId, AssessmentRecord>>,
}

impl JsonFileAssessmentRepository {
    pub(crate) fn open<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref().to_path_buf();
        let records = match std::fs::read(&path) {
            Ok(bytes) => {
                let loaded: Vec<AssessmentRecord> = serde_json::from_slice(&bytes)
                    .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;
                loaded
                    .into_iter()
                    .map(|record| (record.id.clone(), record))
                    .collect()
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(RepositoryError::Unavailable(err.to_string())),
        };

        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    fn persist(
        &self,
        records: &HashMap<AssessmentId, AssessmentRecord>,
    ) -> Result<(), RepositoryError> {
        let mut snapshot: Vec<&AssessmentRecord> = records.values().collect();
        snapshot.sort_by(|a, b| a.id.0.cmp(&b.id.0));
        let bytes = serde_json::to_vec_pretty(&snapshot)
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;
        std::fs::write(&self.path, bytes)
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))
    }
}

impl AssessmentRepository for JsonFileAssessmentRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        self.persist(&guard)?;
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
        if migrated > 0 {
            self.persist(&guard)?;
        }
        Ok(migrated)
    }
}

/// One repository interface, two backends, chosen once at startup.
pub(crate) enum SelectedRepository {
    Memory(InMemoryAssessmentRepository),
    File(JsonFileAssessmentRepository),
}

impl AssessmentRepository for SelectedRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        match self {
            SelectedRepository::Memory(repo) => repo.insert(record),
            SelectedRepository::File(repo) => repo.insert(record),
        }
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        match self {
            SelectedRepository::Memory(repo) => repo.fetch(id),
            SelectedRepository::File(repo) => repo.fetch(id),
        }
    }

    fn list_for_owner(&self, owner: &Owner) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        match self {
            SelectedRepository::Memory(repo) => repo.list_for_owner(owner),
            SelectedRepository::File(repo) => repo.list_for_owner(owner),
        }
    }

    fn reassign(&self, session: &SessionId, user: &UserId) -> Result<usize, RepositoryError> {
        match self {
            SelectedRepository::Memory(repo) => repo.reassign(session, user),
            SelectedRepository::File(repo) => repo.reassign(session, user),
        }
    }
}

/// Token directory plus the paid entitlement behind detailed results.
/// Tokens are issued out of band; the server can seed them from
/// `APP_API_TOKENS` (`token:user` pairs, comma separated).
#[derive(Default, Clone)]
pub(crate) struct InMemoryAccountGateway {
    tokens: Arc<Mutex<HashMap<String, UserId>>>,
    entitled: Arc<Mutex<HashSet<UserId>>>,
    payments: Arc<Mutex<Vec<(UserId, String)>>>,
}

impl InMemoryAccountGateway {
    pub(crate) fn issue_token(&self, token: &str, user: &str) -> UserId {
        let user = UserId(user.to_string());
        self.tokens
            .lock()
            .expect("token mutex poisoned")
            .insert(token.to_string(), user.clone());
        user
    }

    pub(crate) fn seed_from_env_value(&self, raw: &str) {
        for pair in raw.split(',') {
            if let Some((token, user)) = pair.split_once(':') {
                let token = token.trim();
                let user = user.trim();
                if !token.is_empty() && !user.is_empty() {
                    self.issue_token(token, user);
                }
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn payments(&self) -> Vec<(UserId, String)> {
        self.payments.lock().expect("payment mutex poisoned").clone()
    }
}

impl AccountGateway for InMemoryAccountGateway {
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

#[cfg(test)]
mod tests {
    use super::*;
    use mindmetrics::assessments::attempts::{AssessmentService, AssessmentSubmission};
    use mindmetrics::assessments::scoring::Answer;
    use mindmetrics::assessments::TestKind;

    fn submission(session: &str) -> AssessmentSubmission {
        AssessmentSubmission {
            test: TestKind::Anxiety,
            answers: (0..7).map(|_| Some(Answer::Index(3))).collect(),
            session: Some(SessionId(session.to_string())),
        }
    }

    #[test]
    fn file_repository_survives_a_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("assessments.json");

        let repository = JsonFileAssessmentRepository::open(&path).expect("store opens");
        let service = AssessmentService::new(
            Arc::new(repository),
            Arc::new(InMemoryAccountGateway::default()),
        );
        let record = service
            .submit(submission("sess-file"), None)
            .expect("submission persists");

        let reopened = JsonFileAssessmentRepository::open(&path).expect("store reopens");
        let stored = reopened
            .fetch(&record.id)
            .expect("fetch succeeds")
            .expect("record survived the restart");
        assert_eq!(stored.classification.category, "Severe Anxiety");
        assert_eq!(stored, record);
    }

    #[test]
    fn file_repository_persists_reassignment() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("assessments.json");

        let repository = JsonFileAssessmentRepository::open(&path).expect("store opens");
        let service = AssessmentService::new(
            Arc::new(repository),
            Arc::new(InMemoryAccountGateway::default()),
        );
        service
            .submit(submission("sess-claimed"), None)
            .expect("submission persists");

        let reopened = JsonFileAssessmentRepository::open(&path).expect("store reopens");
        let migrated = reopened
            .reassign(
                &SessionId("sess-claimed".to_string()),
                &UserId("user-file".to_string()),
            )
            .expect("reassign succeeds");
        assert_eq!(migrated, 1);

        let reopened = JsonFileAssessmentRepository::open(&path).expect("store reopens again");
        let owned = reopened
            .list_for_owner(&Owner::User(UserId("user-file".to_string())))
            .expect("list succeeds");
        assert_eq!(owned.len(), 1);
    }

    #[test]
    fn gateway_seeds_tokens_from_env_pairs() {
        let gateway = InMemoryAccountGateway::default();
        gateway.seed_from_env_value("tok-a:user-a, tok-b:user-b, malformed");

        assert_eq!(
            gateway.verify_token("tok-a").expect("lookup works"),
            Some(UserId("user-a".to_string()))
        );
        assert_eq!(
            gateway.verify_token("tok-b").expect("lookup works"),
            Some(UserId("user-b".to_string()))
        );
        assert_eq!(gateway.verify_token("malformed").expect("lookup works"), None);
    }

    #[test]
    fn gateway_records_payment_references() {
        let gateway = InMemoryAccountGateway::default();
        let user = gateway.issue_token("tok-a", "user-a");

        assert!(!gateway.has_detailed_access(&user).expect("lookup works"));
        gateway
            .grant_detailed_access(&user, "pi_123")
            .expect("grant works");
        assert!(gateway.has_detailed_access(&user).expect("lookup works"));
        assert_eq!(gateway.payments(), vec![(user, "pi_123".to_string())]);
    }
}
