//! Tabular Islamic calendar.
//!
//! The arithmetic calendar (30-year cycle, 11 leap years) can be a day off
//! from the sighted calendar. It is good enough to key the events table.

use almanac_catalog::islamic::HIJRI_MONTHS;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::ServiceError;

/// Julian day number of 0001-01-01 minus one, the offset from chrono's
/// day-of-era count.
const JDN_CE_OFFSET: i64 = 1_721_425;

/// Julian day number of 1 Muharram 1 AH (19 July 622, proleptic Gregorian).
pub const HIJRI_EPOCH_JDN: i64 = 1_948_440;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HijriDate {
    pub day: u8,
    pub month: u8,
    pub month_name: &'static str,
    pub year: i64,
    pub gregorian: NaiveDate,
    /// `"<day> <month name>"`, the form islamic events are keyed by.
    pub key: String,
}

pub fn julian_day(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + JDN_CE_OFFSET
}

pub fn from_gregorian(date: NaiveDate) -> Result<HijriDate, ServiceError> {
    let jdn = julian_day(date);
    if jdn < HIJRI_EPOCH_JDN {
        return Err(ServiceError::BeforeHijriEpoch(date));
    }

    let mut l = jdn - HIJRI_EPOCH_JDN + 10_632;
    let n = (l - 1) / 10_631;
    l = l - 10_631 * n + 354;
    let j = ((10_985 - l) / 5_316) * ((50 * l) / 17_719) + (l / 5_670) * ((43 * l) / 15_238);
    l = l - ((30 - j) / 15) * ((17_719 * j) / 50) - (j / 16) * ((15_238 * j) / 43) + 29;
    let month = (24 * l) / 709;
    let day = l - (709 * month) / 24;
    let year = 30 * n + j - 30;

    // month is 1..=12 and day 1..=30 from the epoch on
    let month = month as u8;
    let day = day as u8;
    let month_name = HIJRI_MONTHS[usize::from(month - 1)].name;

    Ok(HijriDate {
        day,
        month,
        month_name,
        year,
        gregorian: date,
        key: format!("{day} {month_name}"),
    })
}
