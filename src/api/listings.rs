use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Serialize;

use crate::catalog::{FilterCriteria, RawFilterQuery};
use crate::middleware::RequestId;
use crate::models::Property;
use crate::views::CatalogSection;

use super::{map_i18n_error, parse_language, ApiError, ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct PropertyListing {
    pub criteria: RawFilterQuery,
    pub total: usize,
    pub properties: Vec<Property>,
}

pub(super) async fn list_properties(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<RawFilterQuery>,
) -> Json<ApiResponse<PropertyListing>> {
    let criteria = FilterCriteria::from_raw(&query);
    let properties = state.catalog.search(&criteria);

    Json(ApiResponse::new(
        req_id.0,
        PropertyListing {
            criteria: criteria.to_raw(),
            total: properties.len(),
            properties,
        },
    ))
}

pub(super) async fn list_property_cards(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(lang): Path<String>,
    Query(query): Query<RawFilterQuery>,
) -> Result<Json<ApiResponse<CatalogSection>>, ApiError> {
    let language = parse_language(&req_id.0, &lang)?;
    let criteria = FilterCriteria::from_raw(&query);

    let section = CatalogSection::build(&state.catalog, &criteria, language, &state.resources)
        .map_err(|e| map_i18n_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse::new(req_id.0, section)))
}
