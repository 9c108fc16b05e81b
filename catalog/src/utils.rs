//! Serde helpers for record fields whose wire format differs from chrono's default.

use chrono::NaiveTime;

use crate::errors::CatalogError;

const HHMM: &str = "%H:%M";

/// Parses a 24-hour `HH:MM` wall-clock time.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, CatalogError> {
    NaiveTime::parse_from_str(value.trim(), HHMM)
        .map_err(|_| CatalogError::MalformedTime(value.to_string()))
}

/// Serializes a [`NaiveTime`] as `HH:MM`, dropping seconds.
pub mod serde_hhmm {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(super::HHMM))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_padded_and_unpadded_hours() {
        assert_eq!(parse_hhmm("04:35").unwrap(), NaiveTime::from_hms_opt(4, 35, 0).unwrap());
        assert_eq!(parse_hhmm(" 4:35 ").unwrap(), NaiveTime::from_hms_opt(4, 35, 0).unwrap());
    }

    #[test]
    fn rejects_out_of_range_time() {
        assert_eq!(
            parse_hhmm("24:10"),
            Err(CatalogError::MalformedTime("24:10".to_string()))
        );
        assert!(parse_hhmm("noon").is_err());
    }
}
