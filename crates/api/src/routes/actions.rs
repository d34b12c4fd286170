//! Action Confirmation Route
//!
//! Pass-through for the operator's confirmed action selection. Nothing is
//! stored; the selection is logged and echoed back with a timestamp.

use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Request body for the confirm endpoint
#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub action: String,
}

/// Response for the confirm endpoint
#[derive(Debug, Serialize)]
pub struct ConfirmResponse {
    pub confirmed_action: String,
    pub confirmed_at: DateTime<Utc>,
}

/// Record a user-confirmed action selection
pub async fn confirm_action(Json(request): Json<ConfirmRequest>) -> Json<ConfirmResponse> {
    info!(action = %request.action, "operator confirmed action");

    Json(ConfirmResponse {
        confirmed_action: request.action,
        confirmed_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_confirm_echoes_selection() {
        let response = confirm_action(Json(ConfirmRequest {
            action: "Continuous Monitoring".to_string(),
        }))
        .await;

        assert_eq!(response.confirmed_action, "Continuous Monitoring");
    }
}
