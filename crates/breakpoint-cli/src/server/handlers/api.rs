//! JSON API handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use breakpoint::{ClassificationRequest, RangeRule};
use serde::Serialize;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Response for a JSON classification.
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// Category or sentinel text, exactly as the form shows it.
    pub result: String,
    /// `category`, `not_defined`, or `invalid_mic`.
    pub kind: &'static str,
    /// Parsed MIC value, absent when the input was not a number.
    pub mic: Option<f64>,
    /// Rule that produced the category.
    pub matched_rule: Option<RangeRule>,
}

/// GET /api/rules - The full rule table.
pub async fn get_rules(State(state): State<AppState>) -> Response {
    Json(state.table.as_ref()).into_response()
}

/// GET /api/organisms - Organism names in table order.
pub async fn list_organisms(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.table.organisms().map(str::to_string).collect())
}

/// GET /api/organisms/:organism/antibiotics - Antibiotics for one organism.
pub async fn list_antibiotics(
    State(state): State<AppState>,
    Path(organism): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    if !state.table.contains_organism(&organism) {
        return Err(ApiError::NotFound(format!(
            "Organism not found: {}",
            organism
        )));
    }

    Ok(Json(
        state
            .table
            .antibiotics(&organism)
            .map(str::to_string)
            .collect(),
    ))
}

/// POST /api/classify - Classify a MIC given as JSON.
pub async fn classify(
    State(state): State<AppState>,
    payload: Result<Json<ClassificationRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let Json(request) = payload?;
    let explanation = request.explain(&state.table);

    Ok(Json(ClassifyResponse {
        result: explanation.classification.to_string(),
        kind: explanation.classification.kind(),
        mic: explanation.mic,
        matched_rule: explanation.matched_rule,
    }))
}
