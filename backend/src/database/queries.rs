//! Database query functions (Data Access Objects).
//!
//! Filters, text search and sort orders used by the storage façade. All of
//! them are linear scans over a table; the only guarantee on order is the
//! table's own id order unless a sort is requested.

use almanac_catalog::{Adhkar, AsmaUlHusna, GalleryItem, QuranVerse, Resource};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Lower-cased search needle. Blank input means "no search".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Needle(String);

impl Needle {
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_lowercase()))
    }

    pub fn found_in(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }

    pub fn found_in_any<'a, I>(&self, haystacks: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        haystacks.into_iter().any(|h| self.found_in(h))
    }
}

pub fn adhkar_matches(dhikr: &Adhkar, needle: &Needle) -> bool {
    needle.found_in(&dhikr.arabic_text)
        || needle.found_in(&dhikr.translation)
        || needle.found_in(&dhikr.transliteration)
        || needle.found_in_any(&dhikr.tags)
}

pub fn asma_matches(name: &AsmaUlHusna, needle: &Needle) -> bool {
    needle.found_in(&name.arabic_name)
        || needle.found_in(&name.transliteration)
        || needle.found_in(&name.meaning)
        || needle.found_in(&name.explanation)
}

pub fn verse_matches(verse: &QuranVerse, needle: &Needle) -> bool {
    needle.found_in(&verse.arabic_text)
        || needle.found_in(&verse.translation)
        || needle.found_in(&verse.surah_name)
}

pub fn resource_matches_text(resource: &Resource, needle: &Needle) -> bool {
    needle.found_in(&resource.title)
        || needle.found_in(&resource.description)
        || needle.found_in_any(&resource.tags)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceSort {
    Newest,
    Popular,
    Rating,
    Duration,
}

/// Conjunctive filter over resources; every supplied field must match.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuery {
    pub category: Option<String>,
    pub skill_level: Option<String>,
    pub featured: Option<bool>,
    pub popular: Option<bool>,
    pub search: Option<String>,
    pub sort: Option<ResourceSort>,
}

impl ResourceQuery {
    pub fn matches(&self, resource: &Resource) -> bool {
        let needle = self.search.as_deref().and_then(Needle::new);

        self.category.as_ref().map_or(true, |c| resource.category == *c)
            && self
                .skill_level
                .as_ref()
                .map_or(true, |l| resource.skill_level.as_str() == l.as_str())
            && self.featured.map_or(true, |f| resource.featured == f)
            && self.popular.map_or(true, |p| resource.popular == p)
            && needle.map_or(true, |n| resource_matches_text(resource, &n))
    }
}

/// Stable sort; ties keep id order.
pub fn sort_resources(resources: &mut [Resource], sort: ResourceSort) {
    match sort {
        ResourceSort::Newest => resources.sort_by(|a, b| b.id.cmp(&a.id)),
        ResourceSort::Popular => resources.sort_by(|a, b| b.popular.cmp(&a.popular)),
        ResourceSort::Rating => resources.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        ResourceSort::Duration => resources.sort_by(|a, b| {
            match (a.duration_hours(), b.duration_hours()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub id: String,
    pub count: usize,
}

/// `all` first, then one entry per known category in catalog order.
pub fn category_counts(resources: &[Resource], categories: &[&str]) -> Vec<CategoryCount> {
    let mut counts = vec![CategoryCount {
        id: "all".to_string(),
        count: resources.len(),
    }];
    counts.extend(categories.iter().map(|category| CategoryCount {
        id: category.to_string(),
        count: resources.iter().filter(|r| r.category == *category).count(),
    }));
    counts
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryQuery {
    pub category: Option<String>,
    pub skill_level: Option<String>,
}

impl GalleryQuery {
    pub fn matches(&self, item: &GalleryItem) -> bool {
        self.category.as_ref().map_or(true, |c| item.category == *c)
            && self
                .skill_level
                .as_ref()
                .map_or(true, |l| item.skill_level.as_str() == l.as_str())
    }
}
