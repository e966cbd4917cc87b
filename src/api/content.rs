use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use crate::catalog::{FilterCriteria, RawFilterQuery};
use crate::i18n::Dictionary;
use crate::leads::FormKind;
use crate::middleware::RequestId;
use crate::views::{ContactFormView, PageKind, PageView};

use super::{map_i18n_error, parse_language, ApiError, ApiResponse, AppState};

pub(super) async fn get_dictionary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((lang, context)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Dictionary>>, ApiError> {
    let language = parse_language(&req_id.0, &lang)?;
    let dictionary = state
        .resources
        .resolve(language, &context)
        .map_err(|e| map_i18n_error(req_id.0.clone(), &e))?
        .clone();

    Ok(Json(ApiResponse::new(req_id.0, dictionary)))
}

pub(super) fn parse_form_kind(request_id: &str, raw: &str) -> Result<FormKind, ApiError> {
    FormKind::from_slug(raw)
        .ok_or_else(|| ApiError::new(request_id, "not_found", format!("unknown form: {raw}")))
}

pub(super) async fn get_form(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((lang, kind)): Path<(String, String)>,
) -> Result<Json<ApiResponse<ContactFormView>>, ApiError> {
    let language = parse_language(&req_id.0, &lang)?;
    let kind = parse_form_kind(&req_id.0, &kind)?;

    let view = ContactFormView::build(kind, language, &state.resources)
        .map_err(|e| map_i18n_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(req_id.0, view)))
}

pub(super) async fn get_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((lang, page)): Path<(String, String)>,
    Query(query): Query<RawFilterQuery>,
) -> Result<Json<ApiResponse<PageView>>, ApiError> {
    let language = parse_language(&req_id.0, &lang)?;
    let page = PageKind::from_slug(&page).ok_or_else(|| {
        ApiError::new(req_id.0.clone(), "not_found", format!("unknown page: {page}"))
    })?;

    let view = PageView::build(
        page,
        language,
        FilterCriteria::from_raw(&query),
        &state.catalog,
        &state.resources,
    )
    .map_err(|e| map_i18n_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(req_id.0, view)))
}
