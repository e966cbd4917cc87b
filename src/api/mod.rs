mod content;
mod leads;
mod listings;

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::i18n::{I18nError, ResourceStore};
use crate::leads::{ContactDesk, LeadSubmitter};
use crate::middleware::{request_id, RequestId};
use crate::models::Language;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub resources: Arc<ResourceStore>,
    pub desk: ContactDesk,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        resources: ResourceStore,
        submitter: Arc<dyn LeadSubmitter>,
    ) -> Self {
        let resources = Arc::new(resources);
        Self {
            catalog: Arc::new(catalog),
            desk: ContactDesk::new(submitter, Arc::clone(&resources)),
            resources,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    submitter: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(request_id: String, data: T) -> Self {
        Self {
            data,
            meta: ResponseMeta::new(request_id),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
                details: None,
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.error.details = Some(details);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "conflict" => StatusCode::CONFLICT,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn parse_language(request_id: &str, raw: &str) -> Result<Language, ApiError> {
    Language::from_code(raw).ok_or_else(|| {
        ApiError::new(
            request_id,
            "not_found",
            format!("unsupported language: {raw}"),
        )
    })
}

pub(super) fn map_i18n_error(request_id: String, error: &I18nError) -> ApiError {
    match error {
        I18nError::UnknownContext { context, .. } => {
            ApiError::new(request_id, "not_found", format!("unknown context: {context}"))
        }
        other => {
            tracing::error!(error = %other, "translation lookup failed");
            ApiError::new(request_id, "internal_error", "translation lookup failed")
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/i18n/{lang}/{context}", get(content::get_dictionary))
        .route("/api/v1/properties", get(listings::list_properties))
        .route("/api/v1/{lang}/properties", get(listings::list_property_cards))
        .route("/api/v1/{lang}/forms/{kind}", get(content::get_form))
        .route("/api/v1/{lang}/pages/{page}", get(content::get_page))
        .route("/api/v1/{lang}/leads/{kind}", post(leads::submit_lead))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HealthData>> {
    Json(ApiResponse::new(
        req_id.0,
        HealthData {
            status: "ok",
            submitter: state.desk.submitter_name(),
        },
    ))
}
