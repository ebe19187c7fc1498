use afcon_booking::FlowSnapshot;
use afcon_core::review::ReviewSummary;
use afcon_core::{Step, StepInput};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct StartFlowResponse {
    pub flow_id: Uuid,
    pub current_step: Step,
}

#[derive(Debug, Serialize)]
pub struct AdvanceResponse {
    pub flow_id: Uuid,
    pub completed_step: Step,
    pub next_step: Step,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub flow_id: Uuid,
    pub reference: String,
    pub submitted_at: DateTime<Utc>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flows", post(start_flow))
        .route("/v1/flows/{id}", get(get_flow).delete(abandon_flow))
        .route("/v1/flows/{id}/steps/{step}", post(advance_flow))
        .route("/v1/flows/{id}/review", get(review_flow))
        .route("/v1/flows/{id}/submit", post(submit_flow))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/flows
/// Start a purchase flow with an empty record
async fn start_flow(State(state): State<AppState>) -> (StatusCode, Json<StartFlowResponse>) {
    let (flow_id, _) = state.flows.write().await.start();
    (
        StatusCode::CREATED,
        Json(StartFlowResponse {
            flow_id,
            current_step: Step::first(),
        }),
    )
}

/// GET /v1/flows/:id
async fn get_flow(
    State(state): State<AppState>,
    Path(flow_id): Path<Uuid>,
) -> Result<Json<FlowSnapshot>, AppError> {
    let flow = state.flows.read().await.get(&flow_id)?;
    let mut flow = flow.lock().await;
    flow.touch();
    Ok(Json(flow.snapshot()))
}

/// POST /v1/flows/:id/steps/:step
/// Submit one step's form; answers with the step to show next
async fn advance_flow(
    State(state): State<AppState>,
    Path((flow_id, step)): Path<(Uuid, String)>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<AdvanceResponse>, AppError> {
    let flow = state.flows.read().await.get(&flow_id)?;
    let step: Step = step
        .parse()
        .map_err(|e: afcon_core::step::UnknownStep| AppError::NotFound(e.to_string()))?;
    let Json(body) = body?;
    let input = StepInput::parse(step, body)?;

    let next_step = flow.lock().await.advance(step, input)?;

    Ok(Json(AdvanceResponse {
        flow_id,
        completed_step: step,
        next_step,
    }))
}

/// GET /v1/flows/:id/review
async fn review_flow(
    State(state): State<AppState>,
    Path(flow_id): Path<Uuid>,
) -> Result<Json<ReviewSummary>, AppError> {
    let flow = state.flows.read().await.get(&flow_id)?;
    let mut flow = flow.lock().await;
    flow.touch();
    Ok(Json(ReviewSummary::from_record(flow.record())))
}

/// POST /v1/flows/:id/submit
/// Run the terminal action. Safe to call again after a failure.
async fn submit_flow(
    State(state): State<AppState>,
    Path(flow_id): Path<Uuid>,
) -> Result<Json<SubmitResponse>, AppError> {
    let flow = state.flows.read().await.get(&flow_id)?;
    let receipt = flow.lock().await.submit(state.submitter.as_ref()).await?;

    Ok(Json(SubmitResponse {
        flow_id,
        reference: receipt.reference,
        submitted_at: receipt.submitted_at,
    }))
}

/// DELETE /v1/flows/:id
/// Abandon the flow; its record is dropped
async fn abandon_flow(
    State(state): State<AppState>,
    Path(flow_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.flows.write().await.abandon(&flow_id)?;
    Ok(StatusCode::NO_CONTENT)
}
