use afcon_core::payment::PaymentOutcome;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NavigationRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub outcome: PaymentOutcome,
    pub done: bool,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/payments/navigation", post(classify_navigation))
}

/// POST /v1/payments/navigation
/// Classify a URL the hosted payment page navigated to
async fn classify_navigation(Json(req): Json<NavigationRequest>) -> Json<NavigationResponse> {
    let outcome = PaymentOutcome::from_url(&req.url);
    if outcome.is_final() {
        tracing::info!(?outcome, "Payment page reached a final state");
    }
    Json(NavigationResponse {
        outcome,
        done: outcome.is_final(),
    })
}
