use chrono::{TimeZone, Utc};
use fx_adviser_wasm::domain::session::timeline::{
    TimelineZone, day_progress_pct, offset_hours, session_segments, zone_clock,
};
use fx_adviser_wasm::domain::session::{SessionDefinition, default_sessions};
use fx_adviser_wasm::time_utils::{format_marker, format_offset};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

fn session(name: &str) -> &'static SessionDefinition {
    default_sessions().iter().find(|s| s.name() == name).unwrap()
}

#[test]
fn london_in_lagos_is_one_bar() {
    let segments = session_segments(session("London"), 1);
    assert_eq!(segments.len(), 1);
    assert!((segments[0].left_pct - 9.0 / 24.0 * 100.0).abs() < 1e-9);
    assert!((segments[0].width_pct - 9.0 / 24.0 * 100.0).abs() < 1e-9);
}

#[test]
fn sydney_splits_at_midnight() {
    let segments = session_segments(session("Sydney"), 1);
    assert_eq!(segments.len(), 2);
    // 23:00-24:00 then 00:00-08:00
    assert!((segments[0].left_pct - 23.0 / 24.0 * 100.0).abs() < 1e-9);
    assert!((segments[0].width_pct - 1.0 / 24.0 * 100.0).abs() < 1e-9);
    assert_eq!(segments[1].left_pct, 0.0);
    assert!((segments[1].width_pct - 8.0 / 24.0 * 100.0).abs() < 1e-9);
}

#[test]
fn new_york_wraps_when_shifted_east() {
    // Tokyo is UTC+9: 13-22 UTC becomes 22-07
    let segments = session_segments(session("New York"), 9);
    assert_eq!(segments.len(), 2);
}

#[quickcheck]
fn segments_cover_session_length(offset: i32) -> bool {
    let offset = offset % 24;
    default_sessions().iter().all(|s| {
        let total: f64 = session_segments(s, offset).iter().map(|seg| seg.width_pct).sum();
        let hours = (s.end_hour() as i32 - s.start_hour() as i32).rem_euclid(24) as f64;
        (total - hours / 24.0 * 100.0).abs() < 1e-9
    })
}

#[test]
fn equal_bounds_fill_the_axis() {
    let all_day = SessionDefinition::new("AllDay", 5, 5, "#a855f7").unwrap();
    for offset in [-5, 0, 1, 9] {
        let segments = session_segments(&all_day, offset);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].left_pct, 0.0);
        let total: f64 = segments.iter().map(|seg| seg.width_pct).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
    let window = all_day.window();
    assert_eq!((0..24).filter(|h| window.contains(*h)).count(), 24);
}

#[test]
fn marker_follows_zone_clock() {
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
    assert_eq!(zone_clock(TimelineZone::Lagos, &now), (13, 30));
    assert_eq!(zone_clock(TimelineZone::Tokyo, &now), (21, 30));
    assert_eq!(format_marker(13, 30), "13:30");
    assert!((day_progress_pct(12, 0) - 50.0).abs() < 1e-9);
}

#[test]
fn offsets_for_fixed_zones() {
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
    assert_eq!(offset_hours(TimelineZone::Utc, &now), 0);
    assert_eq!(offset_hours(TimelineZone::Dubai, &now), 4);
    assert_eq!(offset_hours(TimelineZone::NewYork, &now), -5);
    assert_eq!(offset_hours(TimelineZone::Sydney, &now), 11);
    assert_eq!(format_offset(offset_hours(TimelineZone::NewYork, &now)), "-5H");
}

#[test]
fn every_zone_round_trips_through_iana() {
    assert_eq!(TimelineZone::iter().count(), 11);
    assert_eq!(TimelineZone::default(), TimelineZone::Lagos);
    for zone in TimelineZone::iter() {
        assert_eq!(TimelineZone::from_iana(zone.iana()), Some(zone));
    }
}
