//! Handler functions for the art catalog endpoints.

use almanac_catalog::{GalleryItem, Resource, SkillLevel, SkillLevelPath, RESOURCE_CATEGORIES};
use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, info};

use crate::{
    api::extract::{ApiPath, ApiQuery, ValidatedJson},
    database::{
        models::{NewGalleryItem, NewResource},
        queries::{self, CategoryCount, GalleryQuery, ResourceQuery},
    },
    errors::{ApiError, ApiResult},
    state::AppState,
};

pub async fn list_resources(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ResourceQuery>,
) -> Json<Vec<Resource>> {
    debug!(
        category = ?query.category,
        skill_level = ?query.skill_level,
        sort = ?query.sort,
        "Listing resources"
    );
    Json(state.db.resources(&query).await)
}

pub async fn resource_categories(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ResourceQuery>,
) -> Json<Vec<CategoryCount>> {
    let resources = state.db.resources(&query).await;
    Json(queries::category_counts(&resources, &RESOURCE_CATEGORIES))
}

pub async fn get_resource(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Resource>> {
    state
        .db
        .resource(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Resource not found"))
}

pub async fn create_resource(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewResource>,
) -> (StatusCode, Json<Resource>) {
    let resource = state.db.create_resource(new).await;
    info!(id = resource.id, category = %resource.category, "Resource created");
    (StatusCode::CREATED, Json(resource))
}

pub async fn list_gallery(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<GalleryQuery>,
) -> Json<Vec<GalleryItem>> {
    debug!(category = ?query.category, skill_level = ?query.skill_level, "Listing gallery");
    Json(state.db.gallery_items(&query).await)
}

pub async fn get_gallery_item(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<GalleryItem>> {
    state
        .db
        .gallery_item(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Gallery item not found"))
}

pub async fn create_gallery_item(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewGalleryItem>,
) -> (StatusCode, Json<GalleryItem>) {
    let item = state.db.create_gallery_item(new).await;
    info!(id = item.id, artist = %item.artist, "Gallery item created");
    (StatusCode::CREATED, Json(item))
}

pub async fn list_skill_levels(State(state): State<AppState>) -> Json<Vec<SkillLevelPath>> {
    Json(state.db.skill_level_paths().await)
}

/// Unknown level names are a 404 rather than a 400: the level is part of the
/// resource path.
pub async fn get_skill_level(
    State(state): State<AppState>,
    ApiPath(level): ApiPath<String>,
) -> ApiResult<Json<SkillLevelPath>> {
    let not_found = || ApiError::not_found("Skill level not found");
    let level: SkillLevel = level.parse().map_err(|_| not_found())?;

    state
        .db
        .skill_level_path(level)
        .await
        .map(Json)
        .ok_or_else(not_found)
}
