//! Request payloads that create or patch records in the store.
//!
//! Each create payload is the record minus its server-assigned fields and
//! carries the `validator` rules checked before anything is written. Patch
//! payloads hold only the fields a client may change, all optional.
//!
//! Length bounds: titles, sources and durations 200, user ids and cities 100,
//! free text 2000. Tasbih targets and adhkar repetitions go up to 100000.
//! Calculation methods run 0..=23, the range the prayer-time providers define.

use std::borrow::Cow;

use almanac_catalog::{
    utils::serde_hhmm, Adhkar, GalleryItem, PrayerTimes, Resource, SkillLevel, TasbihSession,
    UserSettings, ADHKAR_CATEGORIES, GALLERY_CATEGORIES, RESOURCE_CATEGORIES,
};
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// A request body accepted by a write endpoint.
pub trait Payload: Validate {
    /// Used in the 400 message, as in "Invalid tasbih data".
    const KIND: &'static str;
}

fn rule(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule("blank", "must not be empty"));
    }
    Ok(())
}

fn one_of(value: &str, allowed: &[&str]) -> Result<(), ValidationError> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(rule("one_of", format!("must be one of: {}", allowed.join(", "))))
    }
}

fn resource_category(value: &str) -> Result<(), ValidationError> {
    one_of(value, &RESOURCE_CATEGORIES)
}

fn gallery_category(value: &str) -> Result<(), ValidationError> {
    one_of(value, &GALLERY_CATEGORIES)
}

fn adhkar_category(value: &str) -> Result<(), ValidationError> {
    one_of(value, &ADHKAR_CATEGORIES)
}

// ============================================================================
// Art catalog
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    #[validate(length(max = 200), custom = "not_blank")]
    pub title: String,
    #[validate(length(max = 2000), custom = "not_blank")]
    pub description: String,
    #[validate(custom = "resource_category")]
    pub category: String,
    pub skill_level: SkillLevel,
    #[validate(length(max = 200), custom = "not_blank")]
    pub duration: String,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f32,
    #[validate(length(max = 2000), custom = "not_blank")]
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

impl Payload for NewResource {
    const KIND: &'static str = "resource";
}

impl NewResource {
    pub fn into_record(self, id: i64) -> Resource {
        Resource {
            id,
            title: self.title,
            description: self.description,
            category: self.category,
            skill_level: self.skill_level,
            duration: self.duration,
            rating: self.rating,
            image_url: self.image_url,
            tags: self.tags,
            featured: self.featured,
            popular: self.popular,
            metadata: self.metadata,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryItem {
    #[validate(length(max = 200), custom = "not_blank")]
    pub title: String,
    #[validate(length(max = 200), custom = "not_blank")]
    pub artist: String,
    pub skill_level: SkillLevel,
    #[validate(custom = "gallery_category")]
    pub category: String,
    #[validate(length(max = 2000), custom = "not_blank")]
    pub image_url: String,
    #[serde(default)]
    #[validate(length(max = 2000), custom = "not_blank")]
    pub description: Option<String>,
}

impl Payload for NewGalleryItem {
    const KIND: &'static str = "gallery item";
}

impl NewGalleryItem {
    pub fn into_record(self, id: i64) -> GalleryItem {
        GalleryItem {
            id,
            title: self.title,
            artist: self.artist,
            skill_level: self.skill_level,
            category: self.category,
            image_url: self.image_url,
            description: self.description,
        }
    }
}

// ============================================================================
// Islamic catalog
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAdhkar {
    #[validate(length(max = 2000), custom = "not_blank")]
    pub arabic_text: String,
    #[serde(default)]
    pub transliteration: String,
    #[validate(length(max = 2000), custom = "not_blank")]
    pub translation: String,
    #[validate(custom = "adhkar_category")]
    pub category: String,
    #[validate(length(max = 200), custom = "not_blank")]
    pub source: String,
    #[validate(range(min = 1, max = 100000))]
    pub repetitions: u32,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Payload for NewAdhkar {
    const KIND: &'static str = "adhkar";
}

impl NewAdhkar {
    pub fn into_record(self, id: i64) -> Adhkar {
        Adhkar {
            id,
            arabic_text: self.arabic_text,
            transliteration: self.transliteration,
            translation: self.translation,
            category: self.category,
            source: self.source,
            repetitions: self.repetitions,
            benefits: self.benefits,
            tags: self.tags,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "prayer_order", skip_on_field_errors = false))]
pub struct NewPrayerTimes {
    #[validate(length(max = 100), custom = "not_blank")]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub date: NaiveDate,
    #[serde(with = "serde_hhmm")]
    pub fajr: NaiveTime,
    #[serde(with = "serde_hhmm")]
    pub sunrise: NaiveTime,
    #[serde(with = "serde_hhmm")]
    pub dhuhr: NaiveTime,
    #[serde(with = "serde_hhmm")]
    pub asr: NaiveTime,
    #[serde(with = "serde_hhmm")]
    pub maghrib: NaiveTime,
    #[serde(with = "serde_hhmm")]
    pub isha: NaiveTime,
}

impl Payload for NewPrayerTimes {
    const KIND: &'static str = "prayer times";
}

/// Fajr through maghrib must be strictly increasing. Isha must come after
/// maghrib, or before fajr when it falls past midnight, as it does in
/// summer at high latitudes.
fn prayer_order(times: &NewPrayerTimes) -> Result<(), ValidationError> {
    let day = [
        ("sunrise", "fajr", times.fajr, times.sunrise),
        ("dhuhr", "sunrise", times.sunrise, times.dhuhr),
        ("asr", "dhuhr", times.dhuhr, times.asr),
        ("maghrib", "asr", times.asr, times.maghrib),
    ];
    for (prayer, previous, before, at) in day {
        if at <= before {
            return Err(rule("order", format!("{prayer} must be later than {previous}")));
        }
    }
    if times.isha <= times.maghrib && times.isha >= times.fajr {
        return Err(rule("order", "isha must be later than maghrib or before fajr"));
    }
    Ok(())
}

impl NewPrayerTimes {
    pub fn into_record(self, id: i64) -> PrayerTimes {
        PrayerTimes {
            id,
            city: self.city.trim().to_string(),
            country: self.country,
            date: self.date,
            fajr: self.fajr,
            sunrise: self.sunrise,
            dhuhr: self.dhuhr,
            asr: self.asr,
            maghrib: self.maghrib,
            isha: self.isha,
        }
    }
}

// ============================================================================
// Per-user state
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTasbihSession {
    #[validate(length(max = 100), custom = "not_blank")]
    pub user_id: String,
    #[validate(length(max = 2000), custom = "not_blank")]
    pub dhikr_text: String,
    #[serde(default)]
    pub count: u32,
    #[validate(range(min = 1, max = 100000))]
    pub target: u32,
}

impl Payload for NewTasbihSession {
    const KIND: &'static str = "tasbih";
}

impl NewTasbihSession {
    pub fn into_record(self, id: i64) -> TasbihSession {
        let mut session = TasbihSession {
            id,
            user_id: self.user_id,
            dhikr_text: self.dhikr_text,
            count: self.count,
            target: self.target,
            completed: false,
            created_at: Utc::now(),
        };
        session.refresh_completion();
        session
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TasbihSessionPatch {
    #[validate(length(max = 2000), custom = "not_blank")]
    pub dhikr_text: Option<String>,
    pub count: Option<u32>,
    #[validate(range(min = 1, max = 100000))]
    pub target: Option<u32>,
}

impl Payload for TasbihSessionPatch {
    const KIND: &'static str = "tasbih";
}

impl TasbihSessionPatch {
    pub fn apply(self, session: &mut TasbihSession) {
        if let Some(dhikr_text) = self.dhikr_text {
            session.dhikr_text = dhikr_text;
        }
        if let Some(count) = self.count {
            session.count = count;
        }
        if let Some(target) = self.target {
            session.target = target;
        }
        session.refresh_completion();
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUserSettings {
    #[validate(length(max = 100), custom = "not_blank")]
    pub user_id: String,
    #[serde(default = "default_city")]
    #[validate(length(max = 100), custom = "not_blank")]
    pub city: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default = "default_calculation_method")]
    #[validate(range(max = 23))]
    pub calculation_method: u8,
    #[serde(default = "default_language")]
    #[validate(length(min = 2, max = 10))]
    pub language: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "enabled")]
    pub sound_enabled: bool,
    #[serde(default = "enabled")]
    pub vibration_enabled: bool,
    #[serde(default = "enabled")]
    pub notifications_enabled: bool,
}

fn default_city() -> String {
    "الرياض".to_string()
}

fn default_country() -> String {
    "السعودية".to_string()
}

fn default_calculation_method() -> u8 {
    4
}

fn default_language() -> String {
    "ar".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn enabled() -> bool {
    true
}

impl Payload for NewUserSettings {
    const KIND: &'static str = "settings";
}

impl NewUserSettings {
    pub fn into_record(self, id: i64) -> UserSettings {
        UserSettings {
            id,
            user_id: self.user_id,
            city: self.city,
            country: self.country,
            calculation_method: self.calculation_method,
            language: self.language,
            theme: self.theme,
            sound_enabled: self.sound_enabled,
            vibration_enabled: self.vibration_enabled,
            notifications_enabled: self.notifications_enabled,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserSettingsPatch {
    #[validate(length(max = 100), custom = "not_blank")]
    pub city: Option<String>,
    pub country: Option<String>,
    #[validate(range(max = 23))]
    pub calculation_method: Option<u8>,
    #[validate(length(min = 2, max = 10))]
    pub language: Option<String>,
    pub theme: Option<String>,
    pub sound_enabled: Option<bool>,
    pub vibration_enabled: Option<bool>,
    pub notifications_enabled: Option<bool>,
}

impl Payload for UserSettingsPatch {
    const KIND: &'static str = "settings";
}

impl UserSettingsPatch {
    pub fn apply(self, settings: &mut UserSettings) {
        if let Some(city) = self.city {
            settings.city = city;
        }
        if let Some(country) = self.country {
            settings.country = country;
        }
        if let Some(method) = self.calculation_method {
            settings.calculation_method = method;
        }
        if let Some(language) = self.language {
            settings.language = language;
        }
        if let Some(theme) = self.theme {
            settings.theme = theme;
        }
        if let Some(sound) = self.sound_enabled {
            settings.sound_enabled = sound;
        }
        if let Some(vibration) = self.vibration_enabled {
            settings.vibration_enabled = vibration;
        }
        if let Some(notifications) = self.notifications_enabled {
            settings.notifications_enabled = notifications;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use validator::ValidationErrors;

    fn failed_fields(errors: &ValidationErrors) -> Vec<&'static str> {
        let mut fields: Vec<_> = errors.field_errors().into_keys().collect();
        fields.sort_unstable();
        fields
    }

    fn riyadh_times(asr: &str, isha: &str) -> NewPrayerTimes {
        serde_json::from_value(json!({
            "city": "Riyadh",
            "date": "2024-03-11",
            "fajr": "04:51",
            "sunrise": "06:09",
            "dhuhr": "12:08",
            "asr": asr,
            "maghrib": "18:07",
            "isha": isha
        }))
        .unwrap()
    }

    #[test]
    fn tasbih_payload_requires_positive_target() {
        let payload: NewTasbihSession = serde_json::from_value(json!({
            "userId": "u1",
            "dhikrText": "سبحان الله",
            "target": 0
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert_eq!(failed_fields(&errors), ["target"]);
    }

    #[test]
    fn resource_category_must_be_known() {
        let payload: NewResource = serde_json::from_value(json!({
            "title": "Ink washes",
            "description": "Sumi-e basics",
            "category": "calligraphy",
            "skillLevel": "beginner",
            "duration": "1 hour",
            "rating": 4.2,
            "imageUrl": "/ink.jpg"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert_eq!(failed_fields(&errors), ["category"]);
        let message = errors.field_errors()["category"][0].message.clone();
        assert_eq!(
            message.as_deref(),
            Some("must be one of: painting, drawing, digital, sculpture, supplies")
        );
    }

    #[test]
    fn blank_text_is_rejected() {
        let payload = NewTasbihSession {
            user_id: "   ".into(),
            dhikr_text: "سبحان الله".into(),
            count: 0,
            target: 33,
        };
        let errors = payload.validate().unwrap_err();
        assert_eq!(failed_fields(&errors), ["user_id"]);
    }

    #[test]
    fn prayer_times_must_be_ordered() {
        assert!(riyadh_times("15:30", "19:37").validate().is_ok());

        let errors = riyadh_times("11:00", "19:37").validate().unwrap_err();
        assert_eq!(failed_fields(&errors), ["__all__"]);
        let message = errors.field_errors()["__all__"][0].message.clone();
        assert_eq!(message.as_deref(), Some("asr must be later than dhuhr"));
    }

    #[test]
    fn isha_may_fall_after_midnight() {
        assert!(riyadh_times("15:30", "00:40").validate().is_ok());
        assert!(riyadh_times("15:30", "17:00").validate().is_err());
        assert!(riyadh_times("15:30", "05:00").validate().is_err());
    }

    #[test]
    fn settings_defaults_and_patch() {
        let new: NewUserSettings = serde_json::from_value(json!({ "userId": "u1" })).unwrap();
        assert!(new.validate().is_ok());
        let mut settings = new.into_record(1);
        assert_eq!(settings.calculation_method, 4);
        assert!(settings.sound_enabled);

        UserSettingsPatch {
            theme: Some("dark".into()),
            sound_enabled: Some(false),
            ..Default::default()
        }
        .apply(&mut settings);
        assert_eq!(settings.theme, "dark");
        assert!(!settings.sound_enabled);
        assert_eq!(settings.language, "ar");
    }

    #[test]
    fn settings_patch_checks_language() {
        let patch = UserSettingsPatch {
            language: Some("x".into()),
            ..Default::default()
        };
        assert_eq!(failed_fields(&patch.validate().unwrap_err()), ["language"]);
    }

    #[test]
    fn tasbih_patch_recomputes_completion() {
        let mut session = NewTasbihSession {
            user_id: "u1".into(),
            dhikr_text: "الله أكبر".into(),
            count: 10,
            target: 34,
        }
        .into_record(7);
        assert!(!session.completed);

        TasbihSessionPatch {
            target: Some(10),
            ..Default::default()
        }
        .apply(&mut session);
        assert!(session.completed);
    }
}
