use chrono::{DateTime, FixedOffset, Offset, TimeZone, Timelike, Utc};
use derive_more::Deref;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Fixed offset of the dashboard clock ("Lagos time", UTC+1, no DST).
pub const LAGOS_OFFSET_SECS: i32 = 3600;

pub fn lagos_offset() -> FixedOffset {
    FixedOffset::east_opt(LAGOS_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Value Object - evaluation instant on the UTC+1 dashboard clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deref, Serialize, Deserialize)]
pub struct MarketInstant(DateTime<FixedOffset>);

impl MarketInstant {
    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        Self(utc.with_timezone(&lagos_offset()))
    }

    /// Earliest and latest epoch milliseconds accepted, years 0000 through 9999.
    pub const MIN_EPOCH_MILLIS: i64 = -62_167_219_200_000;
    pub const MAX_EPOCH_MILLIS: i64 = 253_402_300_799_999;

    /// Timestamps beyond years 0000..=9999 are clamped to the nearest bound.
    pub fn from_utc_millis(millis: i64) -> Self {
        let millis = millis.clamp(Self::MIN_EPOCH_MILLIS, Self::MAX_EPOCH_MILLIS);
        Self::from_utc(Utc.timestamp_millis_opt(millis).single().unwrap_or_default())
    }

    /// Instant on 2024-01-01 at the given UTC+1 wall-clock time.
    ///
    /// Out-of-range components wrap (hour mod 24, minute mod 60).
    pub fn at_local(hour: u32, minute: u32) -> Self {
        lagos_offset()
            .with_ymd_and_hms(2024, 1, 1, hour % 24, minute % 60, 0)
            .single()
            .map(Self)
            .unwrap_or_else(|| Self::from_utc(DateTime::<Utc>::default()))
    }

    /// Hour of day on the UTC+1 clock
    pub fn local_hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn utc_hour(&self) -> u32 {
        self.0.with_timezone(&Utc).hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

/// Value Object - half-open hour interval `[start, end)` on a 24h dial.
///
/// `start > end` wraps past midnight; `start == end` covers the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHourWindow")]
pub struct HourWindow {
    start: u32,
    end: u32,
}

impl HourWindow {
    pub fn new(start: u32, end: u32) -> Result<Self, ValidationError> {
        if start > 23 {
            return Err(ValidationError::HourOutOfRange(start));
        }
        if end > 23 {
            return Err(ValidationError::HourOutOfRange(end));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn contains(&self, hour: u32) -> bool {
        let hour = hour % 24;
        if self.start < self.end {
            hour >= self.start && hour < self.end
        } else {
            hour >= self.start || hour < self.end
        }
    }
}

#[derive(Deserialize)]
struct RawHourWindow {
    start: u32,
    end: u32,
}

impl TryFrom<RawHourWindow> for HourWindow {
    type Error = ValidationError;

    fn try_from(raw: RawHourWindow) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

/// High-activity window on the UTC+1 clock
pub const DEFAULT_KILL_ZONE: HourWindow = HourWindow { start: 14, end: 17 };

/// Immutable row of the session table; hours are UTC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawSessionDefinition")]
pub struct SessionDefinition {
    name: String,
    start_hour: u32,
    end_hour: u32,
    display_color: String,
}

impl SessionDefinition {
    pub fn new(name: &str, start_hour: u32, end_hour: u32, display_color: &str) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptySessionName);
        }
        HourWindow::new(start_hour, end_hour)?;
        Ok(Self {
            name: name.to_string(),
            start_hour,
            end_hour,
            display_color: display_color.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn display_color(&self) -> &str {
        &self.display_color
    }

    pub fn window(&self) -> HourWindow {
        HourWindow { start: self.start_hour, end: self.end_hour }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSessionDefinition {
    name: String,
    start_hour: u32,
    end_hour: u32,
    display_color: String,
}

impl TryFrom<RawSessionDefinition> for SessionDefinition {
    type Error = ValidationError;

    fn try_from(raw: RawSessionDefinition) -> Result<Self, Self::Error> {
        Self::new(&raw.name, raw.start_hour, raw.end_hour, &raw.display_color)
    }
}

static DEFAULT_SESSIONS: Lazy<Vec<SessionDefinition>> = Lazy::new(|| {
    [
        ("Sydney", 22, 7, "#0ea5e9"),
        ("Tokyo", 0, 9, "#facc15"),
        ("London", 8, 17, "#22c55e"),
        ("New York", 13, 22, "#ef4444"),
    ]
    .into_iter()
    .map(|(name, start_hour, end_hour, color)| SessionDefinition {
        name: name.to_string(),
        start_hour,
        end_hour,
        display_color: color.to_string(),
    })
    .collect()
});

/// The four major FX sessions in UTC hours
pub fn default_sessions() -> &'static [SessionDefinition] {
    &DEFAULT_SESSIONS
}

/// Session row with its open flag for one evaluation instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub name: String,
    pub start_hour: u32,
    pub end_hour: u32,
    pub display_color: String,
    pub is_open: bool,
}

impl SessionStatus {
    pub fn from_definition(definition: &SessionDefinition, is_open: bool) -> Self {
        Self {
            name: definition.name.clone(),
            start_hour: definition.start_hour,
            end_hour: definition.end_hour,
            display_color: definition.display_color.clone(),
            is_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_hours_past_23() {
        assert_eq!(HourWindow::new(24, 3), Err(ValidationError::HourOutOfRange(24)));
        assert_eq!(
            SessionDefinition::new("Late", 3, 30, "#fff"),
            Err(ValidationError::HourOutOfRange(30))
        );
        assert_eq!(SessionDefinition::new("  ", 1, 2, "#fff"), Err(ValidationError::EmptySessionName));
    }

    #[test]
    fn equal_bounds_cover_whole_day() {
        let window = HourWindow::new(5, 5).unwrap();
        assert!((0..24).all(|h| window.contains(h)));
    }

    #[test]
    fn instant_hours_follow_offset() {
        let instant = MarketInstant::at_local(0, 30);
        assert_eq!(instant.local_hour(), 0);
        assert_eq!(instant.utc_hour(), 23);
        assert_eq!(instant.minute(), 30);

        let from_epoch = MarketInstant::from_utc_millis(0);
        assert_eq!(from_epoch.local_hour(), 1);
        assert_eq!(from_epoch.utc_hour(), 0);
    }

    #[test]
    fn deserialization_revalidates_hours() {
        let window: HourWindow = serde_json::from_str(r#"{"start":22,"end":7}"#).unwrap();
        assert!(window.contains(23));
        assert!(serde_json::from_str::<HourWindow>(r#"{"start":24,"end":7}"#).is_err());

        let row = r##"{"name":"Sydney","startHour":22,"endHour":31,"displayColor":"#0ea5e9"}"##;
        assert!(serde_json::from_str::<SessionDefinition>(row).is_err());
        let blank = r##"{"name":" ","startHour":1,"endHour":2,"displayColor":"#0ea5e9"}"##;
        assert!(serde_json::from_str::<SessionDefinition>(blank).is_err());
    }

    #[test]
    fn out_of_range_epoch_is_clamped() {
        let far = MarketInstant::from_utc_millis(i64::MAX);
        let before = MarketInstant::from_utc_millis(i64::MIN);
        assert_eq!(far.to_utc().timestamp_millis(), MarketInstant::MAX_EPOCH_MILLIS);
        assert_eq!(before.to_utc().timestamp_millis(), MarketInstant::MIN_EPOCH_MILLIS);
    }
}
