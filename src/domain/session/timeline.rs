//! Projection of the UTC session table onto a display time zone.

use chrono::{DateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use super::value_objects::SessionDefinition;

const MINUTES_PER_DAY: f64 = 1440.0;

/// Display zones offered by the market-hours timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, AsRefStr, Serialize, Deserialize)]
pub enum TimelineZone {
    #[strum(serialize = "UTC (GMT)")]
    Utc,
    #[default]
    #[strum(serialize = "Lagos (UTC+1)")]
    Lagos,
    #[strum(serialize = "London (GMT/BST)")]
    London,
    #[strum(serialize = "New York (EST/EDT)")]
    NewYork,
    #[strum(serialize = "Tokyo (JST)")]
    Tokyo,
    #[strum(serialize = "Sydney (AEST/AEDT)")]
    Sydney,
    #[strum(serialize = "Dubai (GST)")]
    Dubai,
    #[strum(serialize = "Singapore (SGT)")]
    Singapore,
    #[strum(serialize = "Los Angeles (PST/PDT)")]
    LosAngeles,
    #[strum(serialize = "Frankfurt (CET/CEST)")]
    Frankfurt,
    #[strum(serialize = "Johannesburg (SAST)")]
    Johannesburg,
}

impl TimelineZone {
    pub fn tz(&self) -> Tz {
        match self {
            Self::Utc => Tz::UTC,
            Self::Lagos => Tz::Africa__Lagos,
            Self::London => Tz::Europe__London,
            Self::NewYork => Tz::America__New_York,
            Self::Tokyo => Tz::Asia__Tokyo,
            Self::Sydney => Tz::Australia__Sydney,
            Self::Dubai => Tz::Asia__Dubai,
            Self::Singapore => Tz::Asia__Singapore,
            Self::LosAngeles => Tz::America__Los_Angeles,
            Self::Frankfurt => Tz::Europe__Berlin,
            Self::Johannesburg => Tz::Africa__Johannesburg,
        }
    }

    /// IANA identifier, used as the `<option>` value
    pub fn iana(&self) -> &'static str {
        self.tz().name()
    }

    pub fn from_iana(name: &str) -> Option<Self> {
        use strum::IntoEnumIterator;
        Self::iter().find(|zone| zone.iana() == name)
    }
}

/// Whole-hour offset of `zone` from UTC at `utc_now`, DST included.
pub fn offset_hours(zone: TimelineZone, utc_now: &DateTime<Utc>) -> i32 {
    let seconds = zone.tz().offset_from_utc_datetime(&utc_now.naive_utc()).fix().local_minus_utc();
    (seconds as f64 / 3600.0).round() as i32
}

/// One horizontal bar on the 24h axis, in percent of the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub left_pct: f64,
    pub width_pct: f64,
}

fn shift_hour(hour: u32, offset: i32) -> u32 {
    (hour as i32 + offset).rem_euclid(24) as u32
}

/// Bars for one session after shifting it by `offset` hours.
///
/// A window that crosses midnight on the display axis is split in two;
/// `start == end` fills the whole axis.
pub fn session_segments(definition: &SessionDefinition, offset: i32) -> Vec<TimelineSegment> {
    if definition.start_hour() == definition.end_hour() {
        return vec![TimelineSegment { left_pct: 0.0, width_pct: 100.0 }];
    }

    let start_min = shift_hour(definition.start_hour(), offset) as f64 * 60.0;
    let end_min = shift_hour(definition.end_hour(), offset) as f64 * 60.0;

    if start_min > end_min {
        vec![
            TimelineSegment {
                left_pct: start_min / MINUTES_PER_DAY * 100.0,
                width_pct: (MINUTES_PER_DAY - start_min) / MINUTES_PER_DAY * 100.0,
            },
            TimelineSegment { left_pct: 0.0, width_pct: end_min / MINUTES_PER_DAY * 100.0 },
        ]
    } else {
        vec![TimelineSegment {
            left_pct: start_min / MINUTES_PER_DAY * 100.0,
            width_pct: (end_min - start_min) / MINUTES_PER_DAY * 100.0,
        }]
    }
}

/// Position of the "now" marker on the 24h axis
pub fn day_progress_pct(hour: u32, minute: u32) -> f64 {
    ((hour % 24) * 60 + minute % 60) as f64 / MINUTES_PER_DAY * 100.0
}

/// Wall-clock hour and minute of `utc_now` in `zone`
pub fn zone_clock(zone: TimelineZone, utc_now: &DateTime<Utc>) -> (u32, u32) {
    use chrono::Timelike;
    let local = utc_now.with_timezone(&zone.tz());
    (local.hour(), local.minute())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn lagos_is_one_hour_ahead_year_round() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(offset_hours(TimelineZone::Lagos, &winter), 1);
        assert_eq!(offset_hours(TimelineZone::Lagos, &summer), 1);
    }

    #[test]
    fn london_observes_dst() {
        let winter = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(offset_hours(TimelineZone::London, &winter), 0);
        assert_eq!(offset_hours(TimelineZone::London, &summer), 1);
    }

    #[test]
    fn iana_round_trip() {
        assert_eq!(TimelineZone::from_iana("Asia/Tokyo"), Some(TimelineZone::Tokyo));
        assert_eq!(TimelineZone::from_iana("Mars/Olympus"), None);
        assert_eq!(TimelineZone::Frankfurt.to_string(), "Frankfurt (CET/CEST)");
    }
}
