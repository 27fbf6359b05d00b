use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{AssessmentId, AssessmentSubmission, SessionId};
use super::repository::{AccountGateway, AssessmentRepository, RepositoryError};
use super::service::{AssessmentService, AssessmentServiceError};
use crate::assessments::{bank, TestKind};

/// Router builder exposing the assessment lifecycle over HTTP.
pub fn assessment_router<R, A>(service: Arc<AssessmentService<R, A>>) -> Router
where
    R: AssessmentRepository + 'static,
    A: AccountGateway + 'static,
{
    Router::new()
        .route(
            "/api/v1/tests/:test/questions",
            get(questions_handler::<R, A>),
        )
        .route(
            "/api/v1/assessments",
            post(submit_handler::<R, A>).get(list_handler::<R, A>),
        )
        .route(
            "/api/v1/assessments/:assessment_id",
            get(summary_handler::<R, A>),
        )
        .route(
            "/api/v1/assessments/:assessment_id/detailed",
            get(detail_handler::<R, A>),
        )
        .route("/api/v1/assessments/claim", post(claim_handler::<R, A>))
        .route("/api/v1/billing/unlock", post(unlock_handler::<R, A>))
        .with_state(service)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = match &error {
        AssessmentServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
        AssessmentServiceError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
        AssessmentServiceError::Forbidden => StatusCode::FORBIDDEN,
        AssessmentServiceError::InvalidPaymentReference => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_))
        | AssessmentServiceError::Account(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn questions_handler<R, A>(
    State(_service): State<Arc<AssessmentService<R, A>>>,
    Path(test): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AccountGateway + 'static,
{
    match TestKind::parse(&test) {
        Some(kind) => {
            let payload = json!({
                "test": kind.label(),
                "title": kind.title(),
                "questions": bank::bank(kind).views(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        None => {
            let payload = json!({ "error": format!("unknown test '{test}'") });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
    headers: HeaderMap,
    axum::Json(submission): axum::Json<AssessmentSubmission>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AccountGateway + 'static,
{
    match service.submit(submission, bearer_token(&headers)) {
        Ok(record) => {
            let view = record.summary_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn summary_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AccountGateway + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.summary(&id) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn detail_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
    headers: HeaderMap,
    Path(assessment_id): Path<String>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AccountGateway + 'static,
{
    let id = AssessmentId(assessment_id);
    match service.detailed(&id, bearer_token(&headers)) {
        Ok(view) => (StatusCode::OK, axum::Json(view)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
    headers: HeaderMap,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AccountGateway + 'static,
{
    match service.list(bearer_token(&headers)) {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ClaimRequest {
    pub(crate) session: SessionId,
}

pub(crate) async fn claim_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<ClaimRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AccountGateway + 'static,
{
    match service.claim(&request.session, bearer_token(&headers)) {
        Ok(migrated) => {
            let payload = json!({ "migrated": migrated });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UnlockRequest {
    pub(crate) payment_reference: String,
}

pub(crate) async fn unlock_handler<R, A>(
    State(service): State<Arc<AssessmentService<R, A>>>,
    headers: HeaderMap,
    axum::Json(request): axum::Json<UnlockRequest>,
) -> Response
where
    R: AssessmentRepository + 'static,
    A: AccountGateway + 'static,
{
    match service.unlock(bearer_token(&headers), &request.payment_reference) {
        Ok(user) => {
            let payload = json!({ "status": "unlocked", "user": user.0 });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}
