//! Assessment attempt lifecycle: submission intake, scoring and
//! classification, persistence, and the entitlement gate in front of
//! detailed results.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentDetailView, AssessmentId, AssessmentRecord, AssessmentSubmission,
    AssessmentSummaryView, Owner, SessionId, UserId,
};
pub use repository::{AccountError, AccountGateway, AssessmentRepository, RepositoryError};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
