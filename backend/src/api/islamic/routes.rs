//! Defines the HTTP routes for the Islamic catalog.

use axum::{routing::get, Router};

use super::handlers::{
    create_adhkar, get_adhkar, get_asma, get_hijri_date, get_next_prayer, get_prayer_times,
    get_qibla, get_verse, islamic_events_on, list_adhkar, list_asma_ul_husna,
    list_hijri_months, list_islamic_events, list_quran, store_prayer_times,
};
use crate::state::AppState;

pub fn islamic_router() -> Router<AppState> {
    Router::new()
        .route("/adhkar", get(list_adhkar).post(create_adhkar))
        .route("/adhkar/:id", get(get_adhkar))
        .route("/asma-ul-husna", get(list_asma_ul_husna))
        .route("/asma-ul-husna/:order", get(get_asma))
        .route("/quran", get(list_quran))
        .route("/quran/:surah/:verse", get(get_verse))
        .route("/prayer-times", get(get_prayer_times).post(store_prayer_times))
        .route("/prayer-times/next", get(get_next_prayer))
        .route("/islamic-events", get(list_islamic_events))
        .route("/islamic-events/on", get(islamic_events_on))
        .route("/hijri-months", get(list_hijri_months))
        .route("/hijri-date", get(get_hijri_date))
        .route("/qibla", get(get_qibla))
}
