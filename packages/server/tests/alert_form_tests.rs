//! Unit tests for form-to-query translation.

use chrono::{TimeZone, Utc};
use server_core::server::routes::alerts::{alert_query_from_form, parse_form_datetime};

#[test]
fn empty_form_builds_empty_query() {
    let query = alert_query_from_form(b"");
    assert!(query.to_params().is_empty());
}

#[test]
fn blank_fields_are_dropped() {
    let body = b"status=&message_type=&event=&area=KS&limit=";
    let query = alert_query_from_form(body);

    assert!(query.status.is_empty());
    assert!(query.message_type.is_empty());
    assert!(query.event.is_empty());
    assert_eq!(query.area, vec!["KS".to_string()]);
    assert_eq!(query.limit, None);
}

#[test]
fn repeated_keys_collect_into_lists() {
    let body = b"event=Tornado+Warning&event=Flood+Watch&zone=KSZ025&zone=KSZ026";
    let query = alert_query_from_form(body);

    assert_eq!(
        query.event,
        vec!["Tornado Warning".to_string(), "Flood Watch".to_string()]
    );
    assert_eq!(query.zone, vec!["KSZ025".to_string(), "KSZ026".to_string()]);
}

#[test]
fn checkbox_maps_to_active_true() {
    let query = alert_query_from_form(b"active=on");
    assert_eq!(query.active, Some(true));
}

#[test]
fn datetime_local_values_parse_to_utc() {
    let body = b"start_time=2025-09-12T00%3A00&end_time=2025-09-17T06%3A30";
    let query = alert_query_from_form(body);

    assert_eq!(
        query.start,
        Some(Utc.with_ymd_and_hms(2025, 9, 12, 0, 0, 0).unwrap())
    );
    assert_eq!(
        query.end,
        Some(Utc.with_ymd_and_hms(2025, 9, 17, 6, 30, 0).unwrap())
    );
}

#[test]
fn rfc3339_datetimes_are_accepted() {
    let parsed = parse_form_datetime("2025-09-12T00:00:00Z");
    assert_eq!(
        parsed,
        Some(Utc.with_ymd_and_hms(2025, 9, 12, 0, 0, 0).unwrap())
    );

    let offset = parse_form_datetime("2025-09-12T00:00:00-05:00");
    assert_eq!(
        offset,
        Some(Utc.with_ymd_and_hms(2025, 9, 12, 5, 0, 0).unwrap())
    );
}

#[test]
fn unparseable_datetime_is_dropped() {
    assert_eq!(parse_form_datetime("next tuesday"), None);
}

#[test]
fn limit_and_cursor_pass_through() {
    let query = alert_query_from_form(b"limit=25&cursor=eyJzIjoxfQ");
    assert_eq!(query.limit, Some(25));
    assert_eq!(query.cursor.as_deref(), Some("eyJzIjoxfQ"));
}

#[test]
fn conflicting_location_fields_survive_translation() {
    // The client drops the query; translation itself keeps what was sent.
    let query = alert_query_from_form(b"area=KS&zone=KSZ025");
    assert_eq!(query.location_conflict(), Some(("area", "zone")));
}
