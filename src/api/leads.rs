use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use tracing::warn;

use crate::leads::{ContactFormSubmission, DeskError, Submitted};
use crate::middleware::RequestId;
use crate::views::FieldErrorView;

use super::content::parse_form_kind;
use super::{map_i18n_error, parse_language, ApiError, ApiResponse, AppState};

/// Each request opens its own form, so one visitor's pending submission
/// never blocks another's.
pub(super) async fn submit_lead(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((lang, kind)): Path<(String, String)>,
    body: Result<Json<ContactFormSubmission>, JsonRejection>,
) -> Result<Response, ApiError> {
    let language = parse_language(&req_id.0, &lang)?;
    let kind = parse_form_kind(&req_id.0, &kind)?;
    let Json(submission) =
        body.map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.body_text()))?;

    let form = state.desk.open_form(kind, language);
    let submitted = form.submit(&submission).await.map_err(|err| match err {
        DeskError::Invalid(fields) => {
            warn!(kind = kind.slug(), invalid = fields.len(), "lead form rejected");
            match FieldErrorView::build_all(&fields, language, &state.resources) {
                Ok(fields) => {
                    ApiError::new(req_id.0.clone(), "validation_error", "form has invalid fields")
                        .with_details(serde_json::json!({ "fields": fields }))
                }
                Err(e) => map_i18n_error(req_id.0.clone(), &e),
            }
        }
        DeskError::Busy => {
            let message = state
                .resources
                .resolve(language, "contact_form")
                .map(|t| t.text("busy"))
                .unwrap_or_else(|_| "form is already submitting".to_string());
            ApiError::new(req_id.0.clone(), "conflict", message)
        }
        DeskError::Translation(e) => map_i18n_error(req_id.0.clone(), &e),
    })?;

    let status = if submitted.delivered {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    Ok((status, Json(ApiResponse::<Submitted>::new(req_id.0, submitted))).into_response())
}
