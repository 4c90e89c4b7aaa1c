//! HTML form handlers.

use axum::{Form, extract::State, response::Html};
use breakpoint::ClassificationRequest;
use tracing::info;

use crate::server::page::FormPage;
use crate::server::state::AppState;

/// GET / - Render the empty classification form.
pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    Html(FormPage::blank(&state.table, &state.antibiotic_index).render())
}

/// POST / - Classify the submitted MIC and re-render the form with the result.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(request): Form<ClassificationRequest>,
) -> Html<String> {
    let result = request.classify(&state.table);
    info!(
        organism = %request.organism,
        antibiotic = %request.antibiotic,
        result = %result,
        "form classification"
    );

    let page = FormPage {
        table: &state.table,
        antibiotic_index: &state.antibiotic_index,
        organism: Some(request.organism.as_str()),
        antibiotic: Some(request.antibiotic.as_str()),
        mic: Some(request.mic.as_str()),
        result: Some(&result),
    };
    Html(page.render())
}
