//! Classification Route

use axum::{extract::State, http::StatusCode, Json};
use classifier::Reading;
use feed_validator::validate_reading;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

use crate::AppState;

/// Request body for the classify endpoint
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub voltage: f64,
    pub frequency: f64,
    pub load: f64,
}

/// Response for the classify endpoint
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub voltage_level: String,
    pub frequency_stability: String,
    pub load_balance: String,
    pub severity_level: String,
    pub score: u8,
    pub recommendation: String,
}

/// Error response with one message per failing field
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

/// Classify a feed reading
///
/// JSON cannot carry NaN or infinity, but the reading is still run through
/// the validator so every caller path gets the same typed rejection.
pub async fn classify_feed(
    State(state): State<Arc<RwLock<AppState>>>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, (StatusCode, Json<ValidationErrorResponse>)> {
    let reading = Reading {
        voltage: request.voltage,
        frequency: request.frequency,
        load: request.load,
    };

    let validation = validate_reading(&reading);
    if !validation.valid {
        let errors = validation.errors.iter().map(|e| e.to_string()).collect();
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse { errors }),
        ));
    }

    let classification = classifier::classify(&reading).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ValidationErrorResponse {
                errors: vec![e.to_string()],
            }),
        )
    })?;

    {
        let mut state = state.write().await;
        state.classification_count += 1;
    }

    info!(
        severity = %classification.assessment.severity,
        score = classification.assessment.score,
        "served classification"
    );

    Ok(Json(ClassifyResponse {
        voltage_level: classification.voltage_level.to_string(),
        frequency_stability: classification.frequency_stability.to_string(),
        load_balance: classification.load_balance.to_string(),
        severity_level: classification.assessment.severity.to_string(),
        score: classification.assessment.score,
        recommendation: classification.recommendation.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(AppState::new()))
    }

    #[tokio::test]
    async fn test_classify_calm_feed() {
        let state = test_state();
        let response = classify_feed(
            State(state.clone()),
            Json(ClassifyRequest {
                voltage: 1.0,
                frequency: 50.0,
                load: 2.0,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.voltage_level, "Very Low");
        assert_eq!(response.frequency_stability, "Stable");
        assert_eq!(response.load_balance, "Very Balanced");
        assert_eq!(response.severity_level, "Low Severity");
        assert_eq!(response.score, 20);
        assert_eq!(response.recommendation, "Normal Operation - No Action Needed");

        assert_eq!(state.read().await.classification_count, 1);
    }

    #[tokio::test]
    async fn test_classify_extreme_voltage() {
        let response = classify_feed(
            State(test_state()),
            Json(ClassifyRequest {
                voltage: 16.0,
                frequency: 50.5,
                load: 25.0,
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.severity_level, "Very High Severity");
        assert_eq!(response.score, 90);
        assert_eq!(
            response.recommendation,
            "Immediate Isolation and Load Rerouting"
        );
    }

    #[tokio::test]
    async fn test_classify_rejects_non_finite() {
        let result = classify_feed(
            State(test_state()),
            Json(ClassifyRequest {
                voltage: f64::NAN,
                frequency: 50.0,
                load: 2.0,
            }),
        )
        .await;

        let (status, body) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.errors.len(), 1);
    }
}
