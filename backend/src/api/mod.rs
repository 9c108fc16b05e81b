//! Central module for organizing the application's API endpoints.
//!
//! Each catalog owns a router; [`router`] nests the enabled ones under
//! `/api`. Per-user tasbih and settings endpoints ride along with the
//! Islamic catalog, which is the only client that uses them.

pub mod art;
pub mod extract;
pub mod islamic;
pub mod user;

use axum::Router;
use tracing::info;

use crate::{config::Catalog, state::AppState};

pub fn router(catalogs: &[Catalog]) -> Router<AppState> {
    let mut api = Router::new();
    for catalog in catalogs {
        api = match catalog {
            Catalog::Art => api.merge(art::routes::art_router()),
            Catalog::Islamic => api
                .merge(islamic::routes::islamic_router())
                .merge(user::routes::user_router()),
        };
        info!(?catalog, "Mounted catalog routes");
    }
    Router::new().nest("/api", api)
}
