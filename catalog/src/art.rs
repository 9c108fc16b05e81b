//! Seed tables for the art-education catalog.
//!
//! Ids are assigned in table order starting at 1.

use serde_json::json;

use crate::models::{GalleryItem, Resource, SkillLevel, SkillLevelPath};

struct ResourceSeed {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    skill_level: SkillLevel,
    duration: &'static str,
    rating: f32,
    image_url: &'static str,
    tags: &'static [&'static str],
    featured: bool,
    popular: bool,
}

#[rustfmt::skip]
const RESOURCES: &[ResourceSeed] = &[
    ResourceSeed {
        title: "Watercolor Basics: Washes and Gradients",
        description: "Learn flat, graded and variegated washes, the three techniques every watercolor painting is built on.",
        category: "painting",
        skill_level: SkillLevel::Beginner,
        duration: "2.5 hours",
        rating: 4.8,
        image_url: "https://images.unsplash.com/photo-1513364776144-60967b0f800f",
        tags: &["watercolor", "washes", "color"],
        featured: true,
        popular: true,
    },
    ResourceSeed {
        title: "Pencil Drawing Fundamentals",
        description: "Line weight, hatching and value scales with nothing more than a graphite pencil and paper.",
        category: "drawing",
        skill_level: SkillLevel::Beginner,
        duration: "1.5 hours",
        rating: 4.6,
        image_url: "https://images.unsplash.com/photo-1456086272160-b28b0645b729",
        tags: &["graphite", "shading", "values"],
        featured: true,
        popular: false,
    },
    ResourceSeed {
        title: "Digital Painting in Layers",
        description: "Block in, refine and render a digital portrait using a non-destructive layer workflow.",
        category: "digital",
        skill_level: SkillLevel::Intermediate,
        duration: "4 hours",
        rating: 4.7,
        image_url: "https://images.unsplash.com/photo-1561998338-13ad7883b20f",
        tags: &["digital", "layers", "portrait"],
        featured: true,
        popular: true,
    },
    ResourceSeed {
        title: "Clay Sculpting: Hand-Built Forms",
        description: "Pinch, coil and slab techniques for building small sculptures without a wheel.",
        category: "sculpture",
        skill_level: SkillLevel::Beginner,
        duration: "3 hours",
        rating: 4.5,
        image_url: "https://images.unsplash.com/photo-1565193566173-7a0ee3dbe261",
        tags: &["clay", "hand-building", "3d"],
        featured: false,
        popular: false,
    },
    ResourceSeed {
        title: "Choosing Your First Brush Set",
        description: "Synthetic versus natural hair, shapes and sizes, and which brushes are worth the money.",
        category: "supplies",
        skill_level: SkillLevel::Beginner,
        duration: "0.5 hours",
        rating: 4.3,
        image_url: "https://images.unsplash.com/photo-1515405295579-ba7b45403062",
        tags: &["brushes", "supplies", "buying guide"],
        featured: false,
        popular: true,
    },
    ResourceSeed {
        title: "Oil Painting: Alla Prima Landscapes",
        description: "Finish a landscape in a single wet-into-wet session while keeping colors clean.",
        category: "painting",
        skill_level: SkillLevel::Intermediate,
        duration: "5 hours",
        rating: 4.9,
        image_url: "https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5",
        tags: &["oil", "landscape", "alla prima"],
        featured: true,
        popular: true,
    },
    ResourceSeed {
        title: "Figure Drawing: Gesture and Proportion",
        description: "Timed gesture studies and the eight-head canon for drawing the human figure.",
        category: "drawing",
        skill_level: SkillLevel::Intermediate,
        duration: "3.5 hours",
        rating: 4.7,
        image_url: "https://images.unsplash.com/photo-1578926375605-eaf7559b1458",
        tags: &["figure", "anatomy", "gesture"],
        featured: false,
        popular: true,
    },
    ResourceSeed {
        title: "Concept Art Environments",
        description: "Design believable worlds with photobashing, custom brushes and atmospheric perspective.",
        category: "digital",
        skill_level: SkillLevel::Advanced,
        duration: "6 hours",
        rating: 4.8,
        image_url: "https://images.unsplash.com/photo-1550684848-fac1c5b4e853",
        tags: &["concept art", "environment", "photobashing"],
        featured: false,
        popular: false,
    },
    ResourceSeed {
        title: "Bronze Casting Workflow",
        description: "From wax model to patina: an overview of the lost-wax casting process.",
        category: "sculpture",
        skill_level: SkillLevel::Advanced,
        duration: "8 hours",
        rating: 4.6,
        image_url: "https://images.unsplash.com/photo-1544967082-d9d25d867d66",
        tags: &["bronze", "casting", "lost wax"],
        featured: true,
        popular: false,
    },
    ResourceSeed {
        title: "Glazing Techniques for Luminous Color",
        description: "Build depth with thin transparent layers over a monochrome underpainting.",
        category: "painting",
        skill_level: SkillLevel::Advanced,
        duration: "4.5 hours",
        rating: 4.9,
        image_url: "https://images.unsplash.com/photo-1541961017774-22349e4a1262",
        tags: &["glazing", "underpainting", "oil"],
        featured: false,
        popular: true,
    },
];

/// Educational resources, ids 1 through `RESOURCES.len()`.
pub fn resources() -> Vec<Resource> {
    RESOURCES
        .iter()
        .zip(1..)
        .map(|(seed, id)| Resource {
            id,
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            category: seed.category.to_string(),
            skill_level: seed.skill_level,
            duration: seed.duration.to_string(),
            rating: seed.rating,
            image_url: seed.image_url.to_string(),
            tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
            featured: seed.featured,
            popular: seed.popular,
            metadata: Some(json!({
                "keywords": seed.tags,
                "educationalLevel": seed.skill_level.as_str(),
            })),
        })
        .collect()
}

#[rustfmt::skip]
const GALLERY: &[(&str, &str, SkillLevel, &str, &str)] = &[
    ("Morning Harbor", "Lena Ortiz", SkillLevel::Beginner, "painting", "First watercolor after the washes course."),
    ("Study of Hands", "Samir Haddad", SkillLevel::Intermediate, "drawing", "Charcoal gesture studies, ten minutes each."),
    ("Neon Alley", "Kai Tanaka", SkillLevel::Advanced, "digital", "Night scene painted entirely with custom brushes."),
    ("Collage of Seasons", "Amara Diallo", SkillLevel::Beginner, "mixed", "Paper, acrylic and pressed leaves on board."),
    ("Portrait in Sepia", "Noor Rahman", SkillLevel::Intermediate, "painting", "Limited-palette oil portrait."),
    ("Botanical Line Work", "Ingrid Holm", SkillLevel::Beginner, "drawing", "Fine-liner ink drawing of a fern."),
    ("Floating City", "Mateo Silva", SkillLevel::Advanced, "digital", "Environment concept created for the concept art module."),
    ("Textures of Rust", "Yara Nasser", SkillLevel::Advanced, "mixed", "Oxidised metal, wax and oil on canvas."),
];

/// Student gallery items, ids in table order.
pub fn gallery_items() -> Vec<GalleryItem> {
    GALLERY
        .iter()
        .zip(1..)
        .map(|(&(title, artist, skill_level, category, description), id)| GalleryItem {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            skill_level,
            category: category.to_string(),
            image_url: format!("/gallery/{id}.jpg"),
            description: Some(description.to_string()),
        })
        .collect()
}

/// One learning path per skill level.
pub fn skill_level_paths() -> Vec<SkillLevelPath> {
    let paths = [
        (
            SkillLevel::Beginner,
            "Beginner Art Fundamentals",
            "Start from zero: materials, mark making and seeing values.",
            [
                "Basic drawing techniques",
                "Color theory essentials",
                "Understanding art supplies",
                "Simple composition",
            ],
            "success",
            "fas fa-seedling",
        ),
        (
            SkillLevel::Intermediate,
            "Intermediate Art Techniques",
            "Develop a personal approach across mediums and subjects.",
            [
                "Advanced shading and lighting",
                "Portrait and figure drawing",
                "Mixed media exploration",
                "Digital art introduction",
            ],
            "accent",
            "fas fa-chart-line",
        ),
        (
            SkillLevel::Advanced,
            "Advanced Art Mastery",
            "Professional-level practice, critique and portfolio work.",
            [
                "Master-level techniques",
                "Professional portfolio development",
                "Art business and marketing",
                "Exhibition preparation",
            ],
            "yellow-600",
            "fas fa-crown",
        ),
    ];

    paths
        .into_iter()
        .zip(1..)
        .map(|((level, title, description, features, color, icon), id)| SkillLevelPath {
            id,
            level,
            title: title.to_string(),
            description: description.to_string(),
            features: features.iter().map(|feature| feature.to_string()).collect(),
            color: color.to_string(),
            icon: icon.to_string(),
        })
        .collect()
}
