//! Record types for both content catalogs.
//!
//! Every record is flat and immutable once seeded, apart from the user-owned
//! tasbih sessions and settings. Field names go over the wire in camelCase.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{errors::CatalogError, utils};

pub const RESOURCE_CATEGORIES: [&str; 5] =
    ["painting", "drawing", "digital", "sculpture", "supplies"];
pub const GALLERY_CATEGORIES: [&str; 4] = ["painting", "drawing", "digital", "mixed"];
pub const ADHKAR_CATEGORIES: [&str; 4] = ["morning", "evening", "after_prayer", "general"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillLevel {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownSkillLevel(s.to_string()))
    }
}

// ============================================================================
// Art catalog
// ============================================================================

/// An educational art resource: tutorial, guide or supplies review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub skill_level: SkillLevel,
    /// Free text such as `"2.5 hours"`.
    pub duration: String,
    pub rating: f32,
    pub image_url: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub popular: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

impl Resource {
    /// Leading number of the duration text, e.g. `2.5` for `"2.5 hours"`.
    pub fn duration_hours(&self) -> Option<f32> {
        let text = self.duration.trim_start();
        let end = text
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(text.len());
        text[..end].parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub skill_level: SkillLevel,
    pub category: String,
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLevelPath {
    pub id: i64,
    pub level: SkillLevel,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    /// Theme colour token used by the front end.
    pub color: String,
    pub icon: String,
}

// ============================================================================
// Islamic catalog
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adhkar {
    pub id: i64,
    pub arabic_text: String,
    pub transliteration: String,
    pub translation: String,
    pub category: String,
    pub source: String,
    pub repetitions: u32,
    #[serde(default)]
    pub benefits: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsmaUlHusna {
    pub id: i64,
    pub order: u16,
    pub arabic_name: String,
    pub transliteration: String,
    pub meaning: String,
    pub explanation: String,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub quranic_references: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuranVerse {
    pub id: i64,
    pub surah_number: u16,
    pub surah_name: String,
    pub verse_number: u16,
    pub arabic_text: String,
    pub translation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const DAILY: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn arabic_name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "الفجر",
            Prayer::Sunrise => "الشروق",
            Prayer::Dhuhr => "الظهر",
            Prayer::Asr => "العصر",
            Prayer::Maghrib => "المغرب",
            Prayer::Isha => "العشاء",
        }
    }
}

/// One day of prayer times for a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrayerTimes {
    pub id: i64,
    pub city: String,
    pub country: String,
    pub date: NaiveDate,
    #[serde(with = "utils::serde_hhmm")]
    pub fajr: NaiveTime,
    #[serde(with = "utils::serde_hhmm")]
    pub sunrise: NaiveTime,
    #[serde(with = "utils::serde_hhmm")]
    pub dhuhr: NaiveTime,
    #[serde(with = "utils::serde_hhmm")]
    pub asr: NaiveTime,
    #[serde(with = "utils::serde_hhmm")]
    pub maghrib: NaiveTime,
    #[serde(with = "utils::serde_hhmm")]
    pub isha: NaiveTime,
}

impl PrayerTimes {
    pub fn time_of(&self, prayer: Prayer) -> NaiveTime {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// The day's times in calendar order.
    pub fn schedule(&self) -> impl Iterator<Item = (Prayer, NaiveTime)> + '_ {
        Prayer::DAILY.into_iter().map(|prayer| (prayer, self.time_of(prayer)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IslamicEvent {
    pub id: i64,
    pub title: String,
    pub title_arabic: String,
    pub description: String,
    /// `"<day> <month name>"`, e.g. `"27 رمضان"`.
    pub hijri_date: String,
    #[serde(default)]
    pub gregorian_date: Option<NaiveDate>,
    pub category: String,
    pub significance: String,
    pub is_recurring: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HijriMonth {
    pub number: u8,
    pub name: &'static str,
    pub transliteration: &'static str,
    pub days: u8,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TasbihPreset {
    pub text: &'static str,
    pub translation: &'static str,
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasbihSession {
    pub id: i64,
    pub user_id: String,
    pub dhikr_text: String,
    pub count: u32,
    pub target: u32,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl TasbihSession {
    /// Percentage of the target reached. Not capped at 100.
    pub fn progress(&self) -> f64 {
        if self.target == 0 {
            return 100.0;
        }
        f64::from(self.count) / f64::from(self.target) * 100.0
    }

    pub fn increment(&mut self, by: u32) {
        self.count = self.count.saturating_add(by);
        self.refresh_completion();
    }

    pub fn refresh_completion(&mut self) {
        self.completed = self.count >= self.target;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub id: i64,
    pub user_id: String,
    pub city: String,
    pub country: String,
    /// Prayer-time calculation method number (4 is Umm al-Qura).
    pub calculation_method: u8,
    pub language: String,
    pub theme: String,
    pub sound_enabled: bool,
    pub vibration_enabled: bool,
    pub notifications_enabled: bool,
}
