//! Defines the HTTP routes for tasbih sessions and user settings.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_tasbih_session, create_user_settings, get_user_settings, increment_tasbih_session,
    list_tasbih_presets, list_tasbih_sessions, update_tasbih_session, update_user_settings,
};
use crate::state::AppState;

/// `/tasbih/:key` is a user id on GET and a session id on PUT; the two share
/// one path segment.
pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/tasbih", post(create_tasbih_session))
        .route("/tasbih/presets", get(list_tasbih_presets))
        .route(
            "/tasbih/:key",
            get(list_tasbih_sessions).put(update_tasbih_session),
        )
        .route("/tasbih/:key/increment", post(increment_tasbih_session))
        .route("/settings", post(create_user_settings))
        .route(
            "/settings/:user_id",
            get(get_user_settings).put(update_user_settings),
        )
}
