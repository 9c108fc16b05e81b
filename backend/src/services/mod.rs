//! Module for core business logic services.
//!
//! These are the pure computations behind a few endpoints: the Qibla bearing,
//! next-prayer selection and the tabular Hijri calendar. None of them touch
//! the store.

pub mod hijri_calendar;
pub mod prayer_schedule;
pub mod qibla;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),

    #[error("heading must be a finite number of degrees")]
    Heading,

    #[error("{0} is before 1 Muharram 1 AH")]
    BeforeHijriEpoch(chrono::NaiveDate),
}
