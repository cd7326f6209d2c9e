//! Budget editing session routes.
//!
//! A session is opened for a project, edited field by field, then committed or discarded.
//! Sessions live in memory only; nothing is stored until a commit succeeds.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use mbudget_core::allocation::{AllocationState, BudgetEdit, BudgetOverview, EditOutcome};
use mbudget_core::session::BudgetSession;
use mbudget_shared::AppError;
use mbudget_shared::types::{BudgetId, ProjectId, SessionId};
use serde::Serialize;
use tracing::{info, warn};

use crate::sessions::SharedSession;
use crate::{AppState, error::ApiError};

/// Creates the budget session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/projects/{project_id}/budget-sessions", post(open_session))
        .route(
            "/budget-sessions/{session_id}",
            get(get_session).delete(discard_session),
        )
        .route("/budget-sessions/{session_id}/edits", post(apply_edit))
        .route("/budget-sessions/{session_id}/commit", post(commit_session))
}

/// Current state of a session.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Session ID.
    pub session_id: SessionId,
    /// Project being budgeted.
    pub project_id: ProjectId,
    /// Full allocation hierarchy.
    pub state: AllocationState,
    /// Planned, used and remaining budget.
    pub overview: BudgetOverview,
}

impl SessionResponse {
    fn new(session_id: SessionId, session: &BudgetSession) -> Self {
        Self {
            session_id,
            project_id: session.project_id(),
            state: session.state().clone(),
            overview: session.overview(),
        }
    }
}

/// Session state after an edit, with any advisory the edit raised.
#[derive(Debug, Serialize)]
pub struct EditResponse {
    /// Session state after the edit.
    #[serde(flatten)]
    pub session: SessionResponse,
    /// Whether the edit raised an advisory.
    pub outcome: EditOutcome,
    /// Human-readable advisory text.
    pub advisory: Option<String>,
}

/// Result of a successful commit.
#[derive(Debug, Serialize)]
pub struct CommitResponse {
    /// Identifier of the stored budget.
    pub budget_id: BudgetId,
    /// Project the budget belongs to.
    pub project_id: ProjectId,
}

async fn find_session(state: &AppState, session_id: SessionId) -> Result<SharedSession, ApiError> {
    state.sessions.get(session_id).await.ok_or_else(|| {
        AppError::NotFound(format!("Budget session {session_id} not found")).into()
    })
}

/// POST `/projects/{project_id}/budget-sessions` - Open a session seeded with defaults.
async fn open_session(
    State(state): State<AppState>,
    Path(project_id): Path<ProjectId>,
) -> Result<impl IntoResponse, ApiError> {
    let session = BudgetSession::open(
        project_id,
        state.session_config,
        state.defaults.as_ref(),
        state.costs.as_ref(),
    )
    .await;

    let allocation = session.state().clone();
    let overview = session.overview();
    let Some(session_id) = state.sessions.insert(session).await else {
        warn!(%project_id, "Session store full, budget session refused");
        return Err(AppError::ServiceUnavailable(
            "Too many open budget sessions, please try again later".to_string(),
        )
        .into());
    };
    info!(%session_id, %project_id, "Budget session stored");

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse {
            session_id,
            project_id,
            state: allocation,
            overview,
        }),
    ))
}

/// GET `/budget-sessions/{session_id}` - Current state and overview.
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = find_session(&state, session_id).await?;
    let session = session.lock().await;
    Ok(Json(SessionResponse::new(session_id, &session)))
}

/// POST `/budget-sessions/{session_id}/edits` - Apply one field edit.
async fn apply_edit(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
    Json(edit): Json<BudgetEdit>,
) -> Result<Json<EditResponse>, ApiError> {
    let session = find_session(&state, session_id).await?;
    let mut session = session.lock().await;

    let outcome = session.apply(&edit)?;
    let advisory = outcome.advisory().map(ToString::to_string);

    Ok(Json(EditResponse {
        session: SessionResponse::new(session_id, &session),
        outcome,
        advisory,
    }))
}

/// POST `/budget-sessions/{session_id}/commit` - Validate and store the budget.
///
/// The session is closed on success and kept open on any failure.
async fn commit_session(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> Result<impl IntoResponse, ApiError> {
    let shared = find_session(&state, session_id).await?;
    let mut session = shared.lock().await;

    let receipt = session.commit(state.persister.as_ref()).await?;
    let project_id = session.project_id();
    drop(session);
    state.sessions.remove(session_id).await;

    info!(%session_id, budget_id = %receipt.budget_id, "Budget session committed");

    Ok((
        StatusCode::CREATED,
        Json(CommitResponse {
            budget_id: receipt.budget_id,
            project_id,
        }),
    ))
}

/// DELETE `/budget-sessions/{session_id}` - Discard a session without saving.
async fn discard_session(
    State(state): State<AppState>,
    Path(session_id): Path<SessionId>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.remove(session_id).await {
        info!(%session_id, "Budget session discarded");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Budget session {session_id} not found")).into())
    }
}
