//! Alerts form and results.

use axum::extract::{Extension, RawForm};
use axum::http::StatusCode;
use axum::response::Html;
use chrono::{DateTime, NaiveDateTime, Utc};
use nws_client::AlertQuery;

use crate::server::app::AppState;
use crate::server::views;

pub async fn alerts_form_handler() -> Html<String> {
    Html(views::alerts_form_page())
}

/// Forward the submitted filter form to the upstream API and render the
/// flattened records.
pub async fn alerts_submit_handler(
    Extension(state): Extension<AppState>,
    RawForm(body): RawForm,
) -> (StatusCode, Html<String>) {
    let query = alert_query_from_form(&body);
    tracing::debug!(?query, "Alerts form submitted");

    match state.client.get_alerts(&query).await {
        Ok(records) => (StatusCode::OK, Html(views::alerts_results_page(&records))),
        Err(e) => {
            tracing::error!(error = %e, "Upstream alerts request failed");
            (
                StatusCode::BAD_GATEWAY,
                Html(views::error_page(&e.to_string())),
            )
        }
    }
}

/// Translate the urlencoded form body into an alert query.
///
/// Repeated keys collect into lists; blank values count as "not provided",
/// matching the form's empty selects and inputs.
pub fn alert_query_from_form(body: &[u8]) -> AlertQuery {
    let mut query = AlertQuery::default();

    for (key, value) in url::form_urlencoded::parse(body) {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        match key.as_ref() {
            "active" => query.active = Some(value == "on" || value == "true"),
            "start_time" => query.start = parse_form_datetime(value),
            "end_time" => query.end = parse_form_datetime(value),
            "status" => query.status.push(value.to_string()),
            "message_type" => query.message_type.push(value.to_string()),
            "event" => query.event.push(value.to_string()),
            "code" => query.code.push(value.to_string()),
            "area" => query.area.push(value.to_string()),
            "point" => query.point.push(value.to_string()),
            "region" => query.region.push(value.to_string()),
            "region_type" => query.region_type = Some(value.to_string()),
            "zone" => query.zone.push(value.to_string()),
            "urgency" => query.urgency.push(value.to_string()),
            "severity" => query.severity.push(value.to_string()),
            "certainty" => query.certainty.push(value.to_string()),
            "limit" => query.limit = value.parse().ok(),
            "cursor" => query.cursor = Some(value.to_string()),
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    query
}

/// Accepts RFC 3339 and the datetime-local format browsers submit.
pub fn parse_form_datetime(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(|naive| naive.and_utc())
}
