//! Handler functions for tasbih sessions and user settings.

use almanac_catalog::{islamic::TASBIH_PRESETS, TasbihPreset, TasbihSession, UserSettings};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    api::extract::{ApiPath, ApiQuery, ValidatedJson},
    database::models::{NewTasbihSession, NewUserSettings, TasbihSessionPatch, UserSettingsPatch},
    errors::{ApiError, ApiResult},
    state::AppState,
};

/// A session as the client sees it, with its progress towards the target.
#[derive(Debug, Serialize)]
pub struct TasbihView {
    #[serde(flatten)]
    pub session: TasbihSession,
    pub progress: f64,
}

impl From<TasbihSession> for TasbihView {
    fn from(session: TasbihSession) -> Self {
        Self {
            progress: session.progress(),
            session,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct IncrementQuery {
    pub by: Option<u32>,
}

fn session_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("Invalid tasbih session id `{raw}`")))
}

fn session_not_found() -> ApiError {
    ApiError::not_found("Tasbih session not found")
}

pub async fn list_tasbih_presets() -> Json<Vec<TasbihPreset>> {
    Json(TASBIH_PRESETS.to_vec())
}

pub async fn list_tasbih_sessions(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> Json<Vec<TasbihView>> {
    let sessions = state.db.tasbih_sessions(&user_id).await;
    debug!(user_id = %user_id, count = sessions.len(), "Listed tasbih sessions");
    Json(sessions.into_iter().map(TasbihView::from).collect())
}

pub async fn create_tasbih_session(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewTasbihSession>,
) -> (StatusCode, Json<TasbihView>) {
    let session = state.db.create_tasbih_session(new).await;
    info!(
        id = session.id,
        user_id = %session.user_id,
        target = session.target,
        "Tasbih session created"
    );
    (StatusCode::CREATED, Json(session.into()))
}

pub async fn update_tasbih_session(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
    ValidatedJson(patch): ValidatedJson<TasbihSessionPatch>,
) -> ApiResult<Json<TasbihView>> {
    let id = session_id(&key)?;
    state
        .db
        .update_tasbih_session(id, patch)
        .await
        .map(|session| Json(session.into()))
        .ok_or_else(session_not_found)
}

pub async fn increment_tasbih_session(
    State(state): State<AppState>,
    ApiPath(key): ApiPath<String>,
    ApiQuery(query): ApiQuery<IncrementQuery>,
) -> ApiResult<Json<TasbihView>> {
    let id = session_id(&key)?;
    let by = query.by.unwrap_or(1);
    if by == 0 {
        return Err(ApiError::BadRequest("Increment must be at least 1".to_string()));
    }

    let session = state
        .db
        .increment_tasbih_session(id, by)
        .await
        .ok_or_else(session_not_found)?;

    if session.completed {
        debug!(id, count = session.count, "Tasbih target reached");
    }
    Ok(Json(session.into()))
}

pub async fn get_user_settings(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<UserSettings>> {
    state
        .db
        .user_settings(&user_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User settings not found"))
}

pub async fn create_user_settings(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewUserSettings>,
) -> (StatusCode, Json<UserSettings>) {
    let settings = state.db.create_user_settings(new).await;
    info!(user_id = %settings.user_id, "User settings stored");
    (StatusCode::CREATED, Json(settings))
}

pub async fn update_user_settings(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
    ValidatedJson(patch): ValidatedJson<UserSettingsPatch>,
) -> ApiResult<Json<UserSettings>> {
    state
        .db
        .update_user_settings(&user_id, patch)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User settings not found"))
}
