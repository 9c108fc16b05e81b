//! Module for the storage façade and its in-memory implementation.
//!
//! Handlers talk to the store only through the [`Storage`] trait. The one
//! implementation, [`MemStorage`], keeps every table in a map behind a single
//! async read/write lock and is seeded once when the server starts.

pub mod models;
pub mod queries;

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use almanac_catalog::{
    art, islamic, Adhkar, AsmaUlHusna, GalleryItem, IslamicEvent, PrayerTimes, QuranVerse,
    Resource, SkillLevel, SkillLevelPath, TasbihSession, UserSettings,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::config::Catalog;
use models::{
    NewAdhkar, NewGalleryItem, NewPrayerTimes, NewResource, NewTasbihSession, NewUserSettings,
    TasbihSessionPatch, UserSettingsPatch,
};
use queries::{GalleryQuery, Needle, ResourceQuery};

pub type Database = Arc<dyn Storage>;

#[async_trait]
pub trait Storage: Send + Sync {
    // Art resources
    async fn resources(&self, query: &ResourceQuery) -> Vec<Resource>;
    async fn resource(&self, id: i64) -> Option<Resource>;
    async fn create_resource(&self, new: NewResource) -> Resource;

    // Gallery
    async fn gallery_items(&self, query: &GalleryQuery) -> Vec<GalleryItem>;
    async fn gallery_item(&self, id: i64) -> Option<GalleryItem>;
    async fn create_gallery_item(&self, new: NewGalleryItem) -> GalleryItem;

    // Skill-level paths
    async fn skill_level_paths(&self) -> Vec<SkillLevelPath>;
    async fn skill_level_path(&self, level: SkillLevel) -> Option<SkillLevelPath>;

    // Adhkar
    async fn adhkar(&self) -> Vec<Adhkar>;
    async fn adhkar_by_category(&self, category: &str) -> Vec<Adhkar>;
    async fn search_adhkar(&self, needle: &Needle) -> Vec<Adhkar>;
    async fn dhikr(&self, id: i64) -> Option<Adhkar>;
    async fn create_adhkar(&self, new: NewAdhkar) -> Adhkar;

    // Asma ul Husna
    async fn asma_ul_husna(&self) -> Vec<AsmaUlHusna>;
    async fn asma_by_order(&self, order: u16) -> Option<AsmaUlHusna>;
    async fn search_asma_ul_husna(&self, needle: &Needle) -> Vec<AsmaUlHusna>;

    // Quran
    async fn quran_verses(&self) -> Vec<QuranVerse>;
    async fn quran_verses_by_surah(&self, surah: u16) -> Vec<QuranVerse>;
    async fn quran_verse(&self, surah: u16, verse: u16) -> Option<QuranVerse>;
    async fn search_quran_verses(&self, needle: &Needle) -> Vec<QuranVerse>;

    // Prayer times
    async fn prayer_times(&self, city: &str, date: NaiveDate) -> Option<PrayerTimes>;
    async fn upsert_prayer_times(&self, new: NewPrayerTimes) -> PrayerTimes;

    // Islamic events
    async fn islamic_events(&self) -> Vec<IslamicEvent>;
    async fn islamic_events_by_hijri_date(&self, hijri_date: &str) -> Vec<IslamicEvent>;
    async fn islamic_events_by_category(&self, category: &str) -> Vec<IslamicEvent>;

    // User settings
    async fn user_settings(&self, user_id: &str) -> Option<UserSettings>;
    async fn create_user_settings(&self, new: NewUserSettings) -> UserSettings;
    async fn update_user_settings(
        &self,
        user_id: &str,
        patch: UserSettingsPatch,
    ) -> Option<UserSettings>;

    // Tasbih
    async fn tasbih_sessions(&self, user_id: &str) -> Vec<TasbihSession>;
    async fn create_tasbih_session(&self, new: NewTasbihSession) -> TasbihSession;
    async fn update_tasbih_session(
        &self,
        id: i64,
        patch: TasbihSessionPatch,
    ) -> Option<TasbihSession>;
    async fn increment_tasbih_session(&self, id: i64, by: u32) -> Option<TasbihSession>;
}

#[derive(Default)]
struct Tables {
    resources: BTreeMap<i64, Resource>,
    gallery: BTreeMap<i64, GalleryItem>,
    skill_paths: BTreeMap<i64, SkillLevelPath>,
    adhkar: BTreeMap<i64, Adhkar>,
    asma: BTreeMap<u16, AsmaUlHusna>,
    verses: BTreeMap<(u16, u16), QuranVerse>,
    prayer_times: HashMap<(String, NaiveDate), PrayerTimes>,
    events: BTreeMap<i64, IslamicEvent>,
    settings: HashMap<String, UserSettings>,
    tasbih: BTreeMap<i64, TasbihSession>,
    next_prayer_times_id: i64,
    next_settings_id: i64,
}

fn next_id<V>(table: &BTreeMap<i64, V>) -> i64 {
    table.last_key_value().map_or(1, |(id, _)| id + 1)
}

/// Prayer-time rows are keyed by trimmed, lower-cased city and date.
fn city_key(city: &str, date: NaiveDate) -> (String, NaiveDate) {
    (city.trim().to_lowercase(), date)
}

fn filtered<'a, V>(values: impl Iterator<Item = &'a V>, keep: impl Fn(&V) -> bool) -> Vec<V>
where
    V: Clone + 'a,
{
    values.filter(|v| keep(v)).cloned().collect()
}

#[derive(Default)]
pub struct MemStorage {
    tables: RwLock<Tables>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the seed tables of every enabled catalog.
    pub fn seeded(catalogs: &[Catalog]) -> Self {
        let mut tables = Tables {
            next_prayer_times_id: 1,
            next_settings_id: 1,
            ..Tables::default()
        };

        for catalog in catalogs {
            match catalog {
                Catalog::Art => {
                    tables.resources.extend(art::resources().into_iter().map(|r| (r.id, r)));
                    tables.gallery.extend(art::gallery_items().into_iter().map(|g| (g.id, g)));
                    tables
                        .skill_paths
                        .extend(art::skill_level_paths().into_iter().map(|p| (p.id, p)));
                    info!(
                        resources = tables.resources.len(),
                        gallery = tables.gallery.len(),
                        "Seeded art catalog"
                    );
                }
                Catalog::Islamic => {
                    tables.adhkar.extend(islamic::adhkar().into_iter().map(|d| (d.id, d)));
                    tables
                        .asma
                        .extend(islamic::asma_ul_husna().into_iter().map(|n| (n.order, n)));
                    tables.verses.extend(
                        islamic::quran_verses()
                            .into_iter()
                            .map(|v| ((v.surah_number, v.verse_number), v)),
                    );
                    tables
                        .events
                        .extend(islamic::islamic_events().into_iter().map(|e| (e.id, e)));
                    info!(
                        adhkar = tables.adhkar.len(),
                        names = tables.asma.len(),
                        events = tables.events.len(),
                        "Seeded islamic catalog"
                    );
                }
            }
        }

        Self {
            tables: RwLock::new(tables),
        }
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn resources(&self, query: &ResourceQuery) -> Vec<Resource> {
        let tables = self.tables.read().await;
        let mut resources = filtered(tables.resources.values(), |r| query.matches(r));
        if let Some(sort) = query.sort {
            queries::sort_resources(&mut resources, sort);
        }
        resources
    }

    async fn resource(&self, id: i64) -> Option<Resource> {
        self.tables.read().await.resources.get(&id).cloned()
    }

    async fn create_resource(&self, new: NewResource) -> Resource {
        let mut tables = self.tables.write().await;
        let resource = new.into_record(next_id(&tables.resources));
        tables.resources.insert(resource.id, resource.clone());
        debug!(id = resource.id, "Created resource");
        resource
    }

    async fn gallery_items(&self, query: &GalleryQuery) -> Vec<GalleryItem> {
        let tables = self.tables.read().await;
        filtered(tables.gallery.values(), |g| query.matches(g))
    }

    async fn gallery_item(&self, id: i64) -> Option<GalleryItem> {
        self.tables.read().await.gallery.get(&id).cloned()
    }

    async fn create_gallery_item(&self, new: NewGalleryItem) -> GalleryItem {
        let mut tables = self.tables.write().await;
        let item = new.into_record(next_id(&tables.gallery));
        tables.gallery.insert(item.id, item.clone());
        debug!(id = item.id, "Created gallery item");
        item
    }

    async fn skill_level_paths(&self) -> Vec<SkillLevelPath> {
        self.tables.read().await.skill_paths.values().cloned().collect()
    }

    async fn skill_level_path(&self, level: SkillLevel) -> Option<SkillLevelPath> {
        let tables = self.tables.read().await;
        tables.skill_paths.values().find(|p| p.level == level).cloned()
    }

    async fn adhkar(&self) -> Vec<Adhkar> {
        self.tables.read().await.adhkar.values().cloned().collect()
    }

    async fn adhkar_by_category(&self, category: &str) -> Vec<Adhkar> {
        let tables = self.tables.read().await;
        filtered(tables.adhkar.values(), |d| d.category == category)
    }

    async fn search_adhkar(&self, needle: &Needle) -> Vec<Adhkar> {
        let tables = self.tables.read().await;
        filtered(tables.adhkar.values(), |d| queries::adhkar_matches(d, needle))
    }

    async fn dhikr(&self, id: i64) -> Option<Adhkar> {
        self.tables.read().await.adhkar.get(&id).cloned()
    }

    async fn create_adhkar(&self, new: NewAdhkar) -> Adhkar {
        let mut tables = self.tables.write().await;
        let dhikr = new.into_record(next_id(&tables.adhkar));
        tables.adhkar.insert(dhikr.id, dhikr.clone());
        debug!(id = dhikr.id, "Created adhkar");
        dhikr
    }

    async fn asma_ul_husna(&self) -> Vec<AsmaUlHusna> {
        self.tables.read().await.asma.values().cloned().collect()
    }

    async fn asma_by_order(&self, order: u16) -> Option<AsmaUlHusna> {
        self.tables.read().await.asma.get(&order).cloned()
    }

    async fn search_asma_ul_husna(&self, needle: &Needle) -> Vec<AsmaUlHusna> {
        let tables = self.tables.read().await;
        filtered(tables.asma.values(), |n| queries::asma_matches(n, needle))
    }

    async fn quran_verses(&self) -> Vec<QuranVerse> {
        self.tables.read().await.verses.values().cloned().collect()
    }

    async fn quran_verses_by_surah(&self, surah: u16) -> Vec<QuranVerse> {
        let tables = self.tables.read().await;
        tables
            .verses
            .range((surah, 0)..=(surah, u16::MAX))
            .map(|(_, verse)| verse.clone())
            .collect()
    }

    async fn quran_verse(&self, surah: u16, verse: u16) -> Option<QuranVerse> {
        self.tables.read().await.verses.get(&(surah, verse)).cloned()
    }

    async fn search_quran_verses(&self, needle: &Needle) -> Vec<QuranVerse> {
        let tables = self.tables.read().await;
        filtered(tables.verses.values(), |v| queries::verse_matches(v, needle))
    }

    async fn prayer_times(&self, city: &str, date: NaiveDate) -> Option<PrayerTimes> {
        let tables = self.tables.read().await;
        tables.prayer_times.get(&city_key(city, date)).cloned()
    }

    async fn upsert_prayer_times(&self, new: NewPrayerTimes) -> PrayerTimes {
        let mut tables = self.tables.write().await;
        let key = city_key(&new.city, new.date);
        let id = match tables.prayer_times.get(&key) {
            Some(existing) => existing.id,
            None => {
                let id = tables.next_prayer_times_id.max(1);
                tables.next_prayer_times_id = id + 1;
                id
            }
        };

        let times = new.into_record(id);
        tables.prayer_times.insert(key, times.clone());
        debug!(id, city = %times.city, date = %times.date, "Stored prayer times");
        times
    }

    async fn islamic_events(&self) -> Vec<IslamicEvent> {
        self.tables.read().await.events.values().cloned().collect()
    }

    async fn islamic_events_by_hijri_date(&self, hijri_date: &str) -> Vec<IslamicEvent> {
        let tables = self.tables.read().await;
        filtered(tables.events.values(), |e| e.hijri_date == hijri_date.trim())
    }

    async fn islamic_events_by_category(&self, category: &str) -> Vec<IslamicEvent> {
        let tables = self.tables.read().await;
        filtered(tables.events.values(), |e| e.category == category)
    }

    async fn user_settings(&self, user_id: &str) -> Option<UserSettings> {
        self.tables.read().await.settings.get(user_id).cloned()
    }

    /// Creating settings for a user who already has them replaces the old row
    /// but keeps its id.
    async fn create_user_settings(&self, new: NewUserSettings) -> UserSettings {
        let mut tables = self.tables.write().await;
        let id = match tables.settings.get(&new.user_id) {
            Some(existing) => existing.id,
            None => {
                let id = tables.next_settings_id.max(1);
                tables.next_settings_id = id + 1;
                id
            }
        };

        let settings = new.into_record(id);
        tables.settings.insert(settings.user_id.clone(), settings.clone());
        debug!(id, user_id = %settings.user_id, "Stored user settings");
        settings
    }

    async fn update_user_settings(
        &self,
        user_id: &str,
        patch: UserSettingsPatch,
    ) -> Option<UserSettings> {
        let mut tables = self.tables.write().await;
        let settings = tables.settings.get_mut(user_id)?;
        patch.apply(settings);
        Some(settings.clone())
    }

    async fn tasbih_sessions(&self, user_id: &str) -> Vec<TasbihSession> {
        let tables = self.tables.read().await;
        filtered(tables.tasbih.values(), |s| s.user_id == user_id)
    }

    async fn create_tasbih_session(&self, new: NewTasbihSession) -> TasbihSession {
        let mut tables = self.tables.write().await;
        let session = new.into_record(next_id(&tables.tasbih));
        tables.tasbih.insert(session.id, session.clone());
        debug!(id = session.id, user_id = %session.user_id, "Created tasbih session");
        session
    }

    async fn update_tasbih_session(
        &self,
        id: i64,
        patch: TasbihSessionPatch,
    ) -> Option<TasbihSession> {
        let mut tables = self.tables.write().await;
        let session = tables.tasbih.get_mut(&id)?;
        patch.apply(session);
        Some(session.clone())
    }

    async fn increment_tasbih_session(&self, id: i64, by: u32) -> Option<TasbihSession> {
        let mut tables = self.tables.write().await;
        let session = tables.tasbih.get_mut(&id)?;
        session.increment(by);
        Some(session.clone())
    }
}
