//! Session window calculator.
//!
//! Pure functions of an evaluation instant and the static session table.
//! Session hours are matched against the instant's UTC hour; the kill zone,
//! overlap window and volatility bands are expressed on the UTC+1 clock.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::value_objects::{HourWindow, MarketInstant, SessionDefinition, SessionStatus};

/// London/New-York overlap on the UTC+1 clock, both ends inclusive.
pub const OVERLAP_HOURS: RangeInclusive<u32> = 13..=17;

/// Session selected when nothing is open.
pub const FALLBACK_SESSION: &str = "London";

/// Current time on the fixed UTC+1 dashboard clock.
pub fn current_local_time() -> MarketInstant {
    MarketInstant::from_utc(Utc::now())
}

/// Open/closed flag for every table row, in table order.
pub fn session_statuses(instant: &MarketInstant, table: &[SessionDefinition]) -> Vec<SessionStatus> {
    let hour = instant.utc_hour();
    table
        .iter()
        .map(|definition| SessionStatus::from_definition(definition, definition.window().contains(hour)))
        .collect()
}

pub fn is_overlap_active(instant: &MarketInstant) -> bool {
    OVERLAP_HOURS.contains(&instant.local_hour())
}

pub fn is_kill_zone(instant: &MarketInstant, window: &HourWindow) -> bool {
    window.contains(instant.local_hour())
}

/// Coarse 0-100 activity estimate from the hour of day.
pub fn volatility_score(instant: &MarketInstant) -> u8 {
    match instant.local_hour() {
        13..=17 => 90,
        8..=10 => 75,
        1..=4 => 40,
        _ => 20,
    }
}

/// `HH:MM:SS` on the UTC+1 clock
pub fn format_clock(instant: &MarketInstant) -> String {
    format!("{:02}:{:02}:{:02}", instant.local_hour(), instant.minute(), instant.second())
}

pub fn default_selected_session(statuses: &[SessionStatus]) -> String {
    statuses
        .iter()
        .find(|s| s.is_open)
        .map(|s| s.name.clone())
        .unwrap_or_else(|| FALLBACK_SESSION.to_string())
}

/// Everything the dashboard derives from one clock reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub instant: MarketInstant,
    pub local_time: String,
    pub sessions: Vec<SessionStatus>,
    pub overlap_active: bool,
    pub kill_zone_active: bool,
    pub volatility_score: u8,
}

impl SessionSnapshot {
    pub fn evaluate(instant: MarketInstant, table: &[SessionDefinition], kill_zone: &HourWindow) -> Self {
        Self {
            local_time: format_clock(&instant),
            sessions: session_statuses(&instant, table),
            overlap_active: is_overlap_active(&instant),
            kill_zone_active: is_kill_zone(&instant, kill_zone),
            volatility_score: volatility_score(&instant),
            instant,
        }
    }

    pub fn open_sessions(&self) -> impl Iterator<Item = &SessionStatus> {
        self.sessions.iter().filter(|s| s.is_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::value_objects::{DEFAULT_KILL_ZONE, default_sessions};

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(&MarketInstant::at_local(7, 5)), "07:05:00");
    }

    #[test]
    fn fallback_selection_when_all_closed() {
        let table = [SessionDefinition::new("Tokyo", 0, 9, "#facc15").unwrap()];
        let statuses = session_statuses(&MarketInstant::at_local(13, 0), &table);
        assert_eq!(default_selected_session(&statuses), "London");
    }

    #[test]
    fn snapshot_bundles_calculator_outputs() {
        let snapshot = SessionSnapshot::evaluate(
            MarketInstant::at_local(15, 0),
            default_sessions(),
            &DEFAULT_KILL_ZONE,
        );
        assert!(snapshot.kill_zone_active);
        assert!(snapshot.overlap_active);
        assert_eq!(snapshot.volatility_score, 90);
        let open: Vec<&str> = snapshot.open_sessions().map(|s| s.name.as_str()).collect();
        assert_eq!(open, vec!["London", "New York"]);
    }
}
