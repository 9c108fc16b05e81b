//! Custom error types specific to the `catalog` crate.
//!
//! These cover the conversions from free text into the typed fields of a record,
//! such as skill levels and wall-clock times.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("unknown skill level `{0}`, expected beginner, intermediate or advanced")]
    UnknownSkillLevel(String),

    #[error("malformed time `{0}`, expected HH:MM")]
    MalformedTime(String),
}
