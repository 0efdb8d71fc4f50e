//! Request handlers for the labeling interface.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::AppState;
use crate::error::LabelError;

/// One unlabeled record as sent to the labeling page
#[derive(Debug, Serialize)]
pub struct NextRecord {
    pub id: usize,
    pub cat: String,
    pub title: String,
    /// Summary and body concatenated; the summary part is omitted when empty
    pub content: String,
    pub url: String,
    /// `"<unlabeled>/<total>"` progress indicator
    pub remain: String,
}

/// Serve the static labeling page
pub async fn labeling_page() -> Html<&'static str> {
    Html(include_str!("../../static/label.html"))
}

/// Hand out one randomly chosen unlabeled record
pub async fn get_data(State(state): State<AppState>) -> impl IntoResponse {
    let book = state.book.lock().await;
    match book.pick_unlabeled() {
        Ok(picked) => {
            let content = if picked.record.desc.is_empty() {
                picked.record.detail
            } else {
                format!("{} {}", picked.record.desc, picked.record.detail)
            };
            let payload = NextRecord {
                id: picked.id,
                cat: picked.record.cat,
                title: picked.record.title,
                content,
                url: picked.record.url,
                remain: format!("{}/{}", picked.unlabeled, picked.total),
            };
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(LabelError::NoRecordsRemaining) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "no unlabeled records remaining" })),
        )
            .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    pub id: usize,
    pub label: String,
}

/// Apply a label and persist the collection
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> impl IntoResponse {
    let mut book = state.book.lock().await;
    match book.apply_label(form.id, form.label.clone()) {
        Ok(()) => {
            ::log::info!("Record {} labeled as {}", form.id, form.label);
            (StatusCode::OK, "OK").into_response()
        }
        Err(LabelError::UnknownRecord(id)) => {
            (StatusCode::NOT_FOUND, format!("no record at index {id}")).into_response()
        }
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
