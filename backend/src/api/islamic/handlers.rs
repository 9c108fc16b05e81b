//! Handler functions for the Islamic catalog endpoints.
//!
//! Read endpoints go straight to the store; the calendar, next-prayer and
//! Qibla endpoints run the pure computations in [`crate::services`].

use almanac_catalog::{
    islamic::HIJRI_MONTHS, utils::parse_hhmm, Adhkar, AsmaUlHusna, HijriMonth, IslamicEvent,
    PrayerTimes, QuranVerse,
};
use axum::{extract::State, http::StatusCode, Json};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    api::extract::{ApiPath, ApiQuery, ValidatedJson},
    database::{
        models::{NewAdhkar, NewPrayerTimes},
        queries::{self, Needle},
    },
    errors::{ApiError, ApiResult},
    services::{
        hijri_calendar::{self, HijriDate},
        prayer_schedule::{self, NextPrayer},
        qibla::{self, Coordinate, QiblaDirection},
    },
    state::AppState,
};

#[derive(Debug, Default, Deserialize)]
pub struct AdhkarQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct QuranQuery {
    pub surah: Option<u16>,
    pub search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PrayerTimesQuery {
    pub city: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
}

impl PrayerTimesQuery {
    fn city_and_date(&self) -> ApiResult<(&str, NaiveDate)> {
        let city = self.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
        match (city, self.date) {
            (Some(city), Some(date)) => Ok((city, date)),
            _ => Err(ApiError::BadRequest("City and date are required".to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    /// Hijri key, e.g. `27 رمضان`.
    pub date: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GregorianQuery {
    pub date: Option<NaiveDate>,
}

impl GregorianQuery {
    fn date_or_today(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| Utc::now().date_naive())
    }
}

#[derive(Debug, Deserialize)]
pub struct QiblaQuery {
    pub lat: f64,
    pub lng: f64,
    pub heading: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct EventsOnDate {
    pub hijri: HijriDate,
    pub events: Vec<IslamicEvent>,
}

fn needle(search: Option<&str>) -> Option<Needle> {
    search.and_then(Needle::new)
}

// ============================================================================
// Adhkar
// ============================================================================

/// `search` wins over `category` when both are given.
pub async fn list_adhkar(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<AdhkarQuery>,
) -> Json<Vec<Adhkar>> {
    let adhkar = if let Some(needle) = needle(query.search.as_deref()) {
        state.db.search_adhkar(&needle).await
    } else if let Some(category) = &query.category {
        state.db.adhkar_by_category(category).await
    } else {
        state.db.adhkar().await
    };
    debug!(count = adhkar.len(), category = ?query.category, "Listed adhkar");
    Json(adhkar)
}

pub async fn get_adhkar(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResult<Json<Adhkar>> {
    state
        .db
        .dhikr(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Adhkar not found"))
}

pub async fn create_adhkar(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewAdhkar>,
) -> (StatusCode, Json<Adhkar>) {
    let dhikr = state.db.create_adhkar(new).await;
    info!(id = dhikr.id, category = %dhikr.category, "Adhkar created");
    (StatusCode::CREATED, Json(dhikr))
}

// ============================================================================
// Asma ul Husna & Quran
// ============================================================================

pub async fn list_asma_ul_husna(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Json<Vec<AsmaUlHusna>> {
    let names = match needle(query.search.as_deref()) {
        Some(needle) => state.db.search_asma_ul_husna(&needle).await,
        None => state.db.asma_ul_husna().await,
    };
    Json(names)
}

pub async fn get_asma(
    State(state): State<AppState>,
    ApiPath(order): ApiPath<u16>,
) -> ApiResult<Json<AsmaUlHusna>> {
    state
        .db
        .asma_by_order(order)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Asma not found"))
}

/// `surah` and `search` combine: a search inside one surah.
pub async fn list_quran(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<QuranQuery>,
) -> Json<Vec<QuranVerse>> {
    let needle = needle(query.search.as_deref());
    let verses = match (query.surah, &needle) {
        (Some(surah), _) => {
            let mut verses = state.db.quran_verses_by_surah(surah).await;
            if let Some(needle) = &needle {
                verses.retain(|v| queries::verse_matches(v, needle));
            }
            verses
        }
        (None, Some(needle)) => state.db.search_quran_verses(needle).await,
        (None, None) => state.db.quran_verses().await,
    };
    Json(verses)
}

pub async fn get_verse(
    State(state): State<AppState>,
    ApiPath((surah, verse)): ApiPath<(u16, u16)>,
) -> ApiResult<Json<QuranVerse>> {
    state
        .db
        .quran_verse(surah, verse)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Verse not found"))
}

// ============================================================================
// Prayer times
// ============================================================================

pub async fn get_prayer_times(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PrayerTimesQuery>,
) -> ApiResult<Json<PrayerTimes>> {
    let (city, date) = query.city_and_date()?;
    state
        .db
        .prayer_times(city, date)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Prayer times not found"))
}

pub async fn store_prayer_times(
    State(state): State<AppState>,
    ValidatedJson(new): ValidatedJson<NewPrayerTimes>,
) -> (StatusCode, Json<PrayerTimes>) {
    let times = state.db.upsert_prayer_times(new).await;
    info!(id = times.id, city = %times.city, date = %times.date, "Prayer times stored");
    (StatusCode::CREATED, Json(times))
}

pub async fn get_next_prayer(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PrayerTimesQuery>,
) -> ApiResult<Json<NextPrayer>> {
    let (city, date) = query.city_and_date()?;
    let now = match query.time.as_deref() {
        Some(time) => parse_hhmm(time)?,
        None => return Err(ApiError::BadRequest("Time is required".to_string())),
    };

    let times = state
        .db
        .prayer_times(city, date)
        .await
        .ok_or_else(|| ApiError::not_found("Prayer times not found"))?;

    Ok(Json(prayer_schedule::next_prayer(&times, now)))
}

// ============================================================================
// Calendar
// ============================================================================

/// `date` (a Hijri key) wins over `category` when both are given.
pub async fn list_islamic_events(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<EventsQuery>,
) -> Json<Vec<IslamicEvent>> {
    let events = if let Some(date) = &query.date {
        state.db.islamic_events_by_hijri_date(date).await
    } else if let Some(category) = &query.category {
        state.db.islamic_events_by_category(category).await
    } else {
        state.db.islamic_events().await
    };
    Json(events)
}

pub async fn islamic_events_on(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<GregorianQuery>,
) -> ApiResult<Json<EventsOnDate>> {
    let hijri = hijri_calendar::from_gregorian(query.date_or_today())?;
    let events = state.db.islamic_events_by_hijri_date(&hijri.key).await;
    debug!(key = %hijri.key, count = events.len(), "Events on date");
    Ok(Json(EventsOnDate { hijri, events }))
}

pub async fn list_hijri_months() -> Json<Vec<HijriMonth>> {
    Json(HIJRI_MONTHS.to_vec())
}

pub async fn get_hijri_date(
    ApiQuery(query): ApiQuery<GregorianQuery>,
) -> ApiResult<Json<HijriDate>> {
    Ok(Json(hijri_calendar::from_gregorian(query.date_or_today())?))
}

// ============================================================================
// Qibla
// ============================================================================

pub async fn get_qibla(ApiQuery(query): ApiQuery<QiblaQuery>) -> ApiResult<Json<QiblaDirection>> {
    let from = Coordinate::new(query.lat, query.lng)?;
    Ok(Json(qibla::direction(from, query.heading)?))
}
