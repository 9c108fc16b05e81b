//! Which prayer comes next for a stored day of prayer times.

use almanac_catalog::{utils::serde_hhmm, Prayer, PrayerTimes};
use chrono::{NaiveTime, Timelike};
use serde::Serialize;

const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextPrayer {
    pub prayer: Prayer,
    pub arabic_name: &'static str,
    #[serde(with = "serde_hhmm")]
    pub time: NaiveTime,
    pub minutes_until: u32,
    pub tomorrow: bool,
}

/// First prayer strictly after `now`. Once isha has passed, the day's fajr
/// time stands in for tomorrow's.
///
/// An isha earlier than maghrib falls after midnight: it is next from maghrib
/// until it arrives.
pub fn next_prayer(times: &PrayerTimes, now: NaiveTime) -> NextPrayer {
    let late_isha = times.isha < times.maghrib && (now >= times.maghrib || now < times.isha);
    let (prayer, time, tomorrow) = if late_isha {
        (Prayer::Isha, times.isha, false)
    } else {
        match times.schedule().find(|(_, at)| *at > now) {
            Some((prayer, time)) => (prayer, time, false),
            None => (Prayer::Fajr, times.fajr, true),
        }
    };

    let from = minute_of_day(now);
    let to = minute_of_day(time);
    let minutes_until = (MINUTES_PER_DAY + to - from) % MINUTES_PER_DAY;

    NextPrayer {
        prayer,
        arabic_name: prayer.arabic_name(),
        time,
        minutes_until,
        tomorrow,
    }
}

fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn riyadh() -> PrayerTimes {
        PrayerTimes {
            id: 1,
            city: "الرياض".into(),
            country: "السعودية".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
            fajr: hm(4, 50),
            sunrise: hm(6, 8),
            dhuhr: hm(12, 7),
            asr: hm(15, 30),
            maghrib: hm(18, 6),
            isha: hm(19, 36),
        }
    }

    #[test]
    fn picks_the_first_later_prayer() {
        let next = next_prayer(&riyadh(), hm(12, 0));
        assert_eq!(next.prayer, Prayer::Dhuhr);
        assert_eq!(next.minutes_until, 7);
        assert!(!next.tomorrow);
    }

    #[test]
    fn exact_time_moves_on() {
        let next = next_prayer(&riyadh(), hm(15, 30));
        assert_eq!(next.prayer, Prayer::Maghrib);
    }

    #[test]
    fn after_isha_is_tomorrows_fajr() {
        let next = next_prayer(&riyadh(), hm(22, 0));
        assert_eq!(next.prayer, Prayer::Fajr);
        assert_eq!(next.arabic_name, "الفجر");
        assert!(next.tomorrow);
        assert_eq!(next.minutes_until, 2 * 60 + 4 * 60 + 50);
    }

    #[test]
    fn serializes_time_as_hhmm() {
        let json = serde_json::to_value(next_prayer(&riyadh(), hm(5, 0))).unwrap();
        assert_eq!(json["prayer"], "sunrise");
        assert_eq!(json["time"], "06:08");
        assert_eq!(json["minutesUntil"], 68);
    }

    #[test]
    fn isha_past_midnight_is_still_tonight() {
        let times = PrayerTimes {
            city: "Reykjavik".into(),
            fajr: hm(2, 30),
            sunrise: hm(3, 50),
            dhuhr: hm(13, 30),
            asr: hm(17, 50),
            maghrib: hm(23, 5),
            isha: hm(0, 40),
            ..riyadh()
        };

        let evening = next_prayer(&times, hm(23, 30));
        assert_eq!(evening.prayer, Prayer::Isha);
        assert_eq!(evening.minutes_until, 70);
        assert!(!evening.tomorrow);

        let after_midnight = next_prayer(&times, hm(0, 10));
        assert_eq!(after_midnight.prayer, Prayer::Isha);
        assert_eq!(after_midnight.minutes_until, 30);

        assert_eq!(next_prayer(&times, hm(1, 0)).prayer, Prayer::Fajr);
        assert_eq!(next_prayer(&times, hm(20, 0)).prayer, Prayer::Maghrib);
    }
}
