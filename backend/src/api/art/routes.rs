//! Defines the HTTP routes for the art catalog.

use axum::{routing::get, Router};

use super::handlers::{
    create_gallery_item, create_resource, get_gallery_item, get_resource, get_skill_level,
    list_gallery, list_resources, list_skill_levels, resource_categories,
};
use crate::state::AppState;

pub fn art_router() -> Router<AppState> {
    Router::new()
        .route("/resources", get(list_resources).post(create_resource))
        .route("/resources/categories", get(resource_categories))
        .route("/resources/:id", get(get_resource))
        .route("/gallery", get(list_gallery).post(create_gallery_item))
        .route("/gallery/:id", get(get_gallery_item))
        .route("/skill-levels", get(list_skill_levels))
        .route("/skill-levels/:level", get(get_skill_level))
}
