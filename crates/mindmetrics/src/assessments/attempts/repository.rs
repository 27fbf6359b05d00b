use super::domain::{AssessmentId, AssessmentRecord, Owner, SessionId, UserId};

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Implementations are last-write-wins key-value stores; no transactional
/// isolation is promised and none is assumed.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    fn list_for_owner(&self, owner: &Owner) -> Result<Vec<AssessmentRecord>, RepositoryError>;
    /// Move every record owned by `session` to `user`, returning how many
    /// records migrated.
    fn reassign(&self, session: &SessionId, user: &UserId) -> Result<usize, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Account collaborator: bearer-token verification plus the entitlement that
/// gates detailed results. Scoring itself never touches identity.
pub trait AccountGateway: Send + Sync {
    fn verify_token(&self, bearer: &str) -> Result<Option<UserId>, AccountError>;
    fn has_detailed_access(&self, user: &UserId) -> Result<bool, AccountError>;
    fn grant_detailed_access(
        &self,
        user: &UserId,
        payment_reference: &str,
    ) -> Result<(), AccountError>;
}

/// Account collaborator error.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("account directory unavailable: {0}")]
    Unavailable(String),
}
