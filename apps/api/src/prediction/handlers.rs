use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::prediction::classifier::CareerFeatures;
use crate::prediction::enrich::{build_prediction_response, PredictionResponse};
use crate::state::AppState;

/// POST /api/v1/predict
pub async fn handle_predict(
    State(state): State<AppState>,
    Json(features): Json<CareerFeatures>,
) -> Result<Json<PredictionResponse>, AppError> {
    let prediction = state.classifier.predict(&features).await?;
    Ok(Json(build_prediction_response(prediction, &features)))
}
