//! Core `catalog` crate holding the reference content served by the almanac backend.
//!
//! This crate defines the record types for both content catalogs (the art-education
//! resources and the Islamic companion tables), the enumerations their fields are
//! drawn from, and the seed tables the backend loads once at startup.

pub mod art;
pub mod errors;
pub mod islamic;
pub mod models;
pub mod utils;

pub use errors::CatalogError;
pub use models::*;
